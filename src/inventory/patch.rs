//! Sparse patch applied to an existing inventory record

use crate::models::{Inventory, InventoryType};

/// Fields to overwrite on an inventory record.
///
/// `None` leaves the record's field untouched. For `inventory_type` the
/// inner option is the result of resolving the new type name, so
/// `Some(None)` clears the type reference.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InventoryPatch {
    pub name: Option<String>,
    pub quantity: Option<i64>,
    pub inventory_type: Option<Option<InventoryType>>,
}

impl InventoryPatch {
    /// Patch carrying the name and quantity of an update payload.
    /// Empty names are treated as absent.
    pub fn new(name: Option<&str>, quantity: Option<i64>) -> Self {
        Self {
            name: name.filter(|n| !n.is_empty()).map(str::to_string),
            quantity,
            inventory_type: None,
        }
    }

    pub fn with_inventory_type(mut self, resolved: Option<InventoryType>) -> Self {
        self.inventory_type = Some(resolved);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.quantity.is_none() && self.inventory_type.is_none()
    }

    /// Overwrite each present field on the record
    pub fn apply(self, record: &mut Inventory) {
        if let Some(quantity) = self.quantity {
            record.quantity = quantity;
        }
        if let Some(name) = self.name {
            record.name = name;
        }
        if let Some(inventory_type) = self.inventory_type {
            record.inventory_type = inventory_type;
        }
    }
}
