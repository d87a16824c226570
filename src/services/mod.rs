//! Business logic services

pub mod inventory;

use crate::{config::InventoryConfig, repository::Repository};

/// Container for all services
#[derive(Clone)]
pub struct Services {
    pub inventory: inventory::InventoryService,
    repository: Repository,
}

impl Services {
    /// Create all services with the given repository
    pub fn new(repository: Repository, inventory_config: &InventoryConfig) -> Self {
        Self {
            inventory: inventory::InventoryService::new(
                repository.clone(),
                inventory_config.strict_type_resolution,
            ),
            repository,
        }
    }

    /// Storage readiness, used by the readiness probe
    pub async fn ping(&self) -> crate::error::AppResult<()> {
        self.repository.ping().await
    }
}
