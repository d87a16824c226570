//! Inventory search and update rules

pub mod patch;
pub mod predicate;

pub use patch::InventoryPatch;
pub use predicate::{search_inventory, Clause, InventoryPredicate};
