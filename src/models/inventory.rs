//! Inventory record, wire representation and search filter

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

use super::inventory_type::InventoryType;

/// Inventory record as held by storage
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Inventory {
    /// Assigned by storage on first save
    pub id: Option<i64>,
    pub name: String,
    pub quantity: i64,
    pub inventory_type: Option<InventoryType>,
    /// false once soft-deleted
    pub enabled: bool,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl Inventory {
    /// New, unsaved, enabled record
    pub fn new(name: impl Into<String>, quantity: i64, inventory_type: Option<InventoryType>) -> Self {
        Self {
            id: None,
            name: name.into(),
            quantity,
            inventory_type,
            enabled: true,
            created_at: None,
            updated_at: None,
        }
    }

    /// Name of the referenced inventory type, if any
    pub fn type_name(&self) -> Option<&str> {
        self.inventory_type.as_ref().map(|t| t.type_name.as_str())
    }
}

/// Inventory payload used for create, update, delete responses and search results.
///
/// Every field is optional on input: on update an absent field means
/// "leave unchanged".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema, Validate)]
pub struct InventoryDto {
    pub inventory_id: Option<i64>,
    #[validate(length(min = 1, max = 255))]
    pub name: Option<String>,
    #[validate(range(min = 0))]
    pub quantity: Option<i64>,
    /// Inventory type name (e.g. "Hardware")
    pub inventory_type: Option<String>,
    /// Output only; ignored on input
    pub enabled: Option<bool>,
}

impl InventoryDto {
    /// Copy with empty `name` and `inventory_type` turned into `None`
    pub fn without_empty_strings(&self) -> Self {
        Self {
            name: self.name.clone().filter(|n| !n.is_empty()),
            inventory_type: self.inventory_type.clone().filter(|t| !t.is_empty()),
            ..self.clone()
        }
    }
}

impl From<Inventory> for InventoryDto {
    fn from(record: Inventory) -> Self {
        Self {
            inventory_id: record.id,
            inventory_type: record.inventory_type.map(|t| t.type_name),
            name: Some(record.name),
            quantity: Some(record.quantity),
            enabled: Some(record.enabled),
        }
    }
}

/// Search filter: every populated field must equal the record's field
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, ToSchema, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct InventoryFilter {
    /// Exact inventory name
    pub name: Option<String>,
    /// Inventory type name
    pub inventory_type: Option<String>,
    /// Exact quantity (0 is a valid filter)
    pub quantity: Option<i64>,
}
