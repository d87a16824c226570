//! Inventory types repository

use async_trait::async_trait;
use sqlx::{Pool, Postgres};

use super::InventoryTypeStore;
use crate::{error::AppResult, models::InventoryType};

#[derive(Clone)]
pub struct InventoryTypesRepository {
    pool: Pool<Postgres>,
}

impl InventoryTypesRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl InventoryTypeStore for InventoryTypesRepository {
    async fn find_by_type(&self, type_name: &str) -> AppResult<Option<InventoryType>> {
        let row = sqlx::query_as::<_, InventoryType>(
            "SELECT id, type_name FROM inventory_type WHERE type_name = $1",
        )
        .bind(type_name)
        .fetch_optional(&self.pool)
        .await?;
        Ok(row)
    }

    async fn list(&self) -> AppResult<Vec<InventoryType>> {
        let rows = sqlx::query_as::<_, InventoryType>(
            "SELECT id, type_name FROM inventory_type ORDER BY type_name",
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }
}
