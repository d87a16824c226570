//! Repository layer: storage collaborators for inventory records and types

pub mod inventory;
pub mod inventory_types;
pub mod memory;

use std::sync::Arc;

use async_trait::async_trait;
use sqlx::{Pool, Postgres};

use crate::{
    error::AppResult,
    inventory::InventoryPredicate,
    models::{Inventory, InventoryType},
};

/// Persistence for inventory records
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait InventoryStore: Send + Sync {
    /// Insert when `record.id` is `None`, otherwise update. Returns the stored record.
    async fn save(&self, record: Inventory) -> AppResult<Inventory>;

    async fn find_by_id(&self, id: i64) -> AppResult<Option<Inventory>>;

    async fn find_by_id_and_enabled(&self, id: i64, enabled: bool) -> AppResult<Option<Inventory>>;

    /// All records matching the predicate, ordered by id
    async fn find_all(&self, predicate: &InventoryPredicate) -> AppResult<Vec<Inventory>>;
}

/// Read-only lookup of inventory types by name
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait InventoryTypeStore: Send + Sync {
    async fn find_by_type(&self, type_name: &str) -> AppResult<Option<InventoryType>>;

    /// All types ordered by name
    async fn list(&self) -> AppResult<Vec<InventoryType>>;
}

/// Main repository struct holding the storage collaborators
#[derive(Clone)]
pub struct Repository {
    pub inventory: Arc<dyn InventoryStore>,
    pub inventory_types: Arc<dyn InventoryTypeStore>,
    pool: Option<Pool<Postgres>>,
}

impl Repository {
    /// Create a PostgreSQL-backed repository with the given database pool
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self {
            inventory: Arc::new(inventory::InventoryRepository::new(pool.clone())),
            inventory_types: Arc::new(inventory_types::InventoryTypesRepository::new(pool.clone())),
            pool: Some(pool),
        }
    }

    /// Create a repository kept entirely in process memory
    pub fn in_memory(seed_types: &[String]) -> Self {
        Self::from_stores(
            Arc::new(memory::MemoryInventoryStore::new()),
            Arc::new(memory::MemoryInventoryTypeStore::with_types(seed_types)),
        )
    }

    pub fn from_stores(
        inventory: Arc<dyn InventoryStore>,
        inventory_types: Arc<dyn InventoryTypeStore>,
    ) -> Self {
        Self {
            inventory,
            inventory_types,
            pool: None,
        }
    }

    /// Check that the backing store answers
    pub async fn ping(&self) -> AppResult<()> {
        if let Some(ref pool) = self.pool {
            sqlx::query("SELECT 1").execute(pool).await?;
        }
        Ok(())
    }
}
