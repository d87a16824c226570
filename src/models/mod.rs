//! Data models for the IMS server

pub mod claims;
pub mod inventory;
pub mod inventory_type;

// Re-export commonly used types
pub use claims::Claims;
pub use inventory::{Inventory, InventoryDto, InventoryFilter};
pub use inventory_type::InventoryType;
