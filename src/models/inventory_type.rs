//! Inventory type lookup record

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct InventoryType {
    pub id: i64,
    /// Unique type name
    pub type_name: String,
}

impl InventoryType {
    pub fn new(id: i64, type_name: impl Into<String>) -> Self {
        Self {
            id,
            type_name: type_name.into(),
        }
    }
}
