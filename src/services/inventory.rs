//! Inventory service: record lifecycle and search

use validator::Validate;

use crate::{
    error::{AppError, AppResult},
    inventory::{search_inventory, InventoryPatch},
    models::{Inventory, InventoryDto, InventoryFilter, InventoryType},
    repository::Repository,
};

#[derive(Clone)]
pub struct InventoryService {
    repository: Repository,
    strict_type_resolution: bool,
}

impl InventoryService {
    pub fn new(repository: Repository, strict_type_resolution: bool) -> Self {
        Self {
            repository,
            strict_type_resolution,
        }
    }

    /// Look up a type by name. A miss is an absent type, or an
    /// `UnresolvedType` error in strict mode.
    async fn resolve_type(&self, type_name: &str) -> AppResult<Option<InventoryType>> {
        let found = self.repository.inventory_types.find_by_type(type_name).await?;
        if found.is_none() {
            if self.strict_type_resolution {
                return Err(AppError::UnresolvedType(type_name.to_string()));
            }
            tracing::warn!("Inventory type '{}' not found, type reference left empty", type_name);
        }
        Ok(found)
    }

    async fn find_enabled(&self, id: i64) -> AppResult<Inventory> {
        self.repository
            .inventory
            .find_by_id_and_enabled(id, true)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Inventory {} not found", id)))
    }

    /// Create a new enabled record
    pub async fn create(&self, dto: &InventoryDto) -> AppResult<InventoryDto> {
        tracing::info!("Creating inventory {:?}", dto.name);
        dto.validate()?;

        let name = dto
            .name
            .as_deref()
            .filter(|n| !n.is_empty())
            .ok_or_else(|| AppError::Validation("name is required".to_string()))?;

        let inventory_type = match dto.inventory_type.as_deref().filter(|t| !t.is_empty()) {
            Some(type_name) => self.resolve_type(type_name).await?,
            None => None,
        };

        let record = Inventory::new(name, dto.quantity.unwrap_or(0), inventory_type);
        let saved = self.repository.inventory.save(record).await?;
        Ok(saved.into())
    }

    /// Get an enabled record by id
    pub async fn get_by_id(&self, id: i64) -> AppResult<InventoryDto> {
        Ok(self.find_enabled(id).await?.into())
    }

    /// Apply the populated fields of `dto` to the enabled record `dto.inventory_id`
    pub async fn update(&self, dto: &InventoryDto) -> AppResult<InventoryDto> {
        tracing::info!("Updating inventory {:?}", dto.inventory_id);
        // empty strings leave the field unchanged
        let dto = dto.without_empty_strings();
        dto.validate()?;

        let id = dto
            .inventory_id
            .ok_or_else(|| AppError::Validation("inventory_id is required".to_string()))?;
        let mut record = self.find_enabled(id).await?;

        let mut patch = InventoryPatch::new(dto.name.as_deref(), dto.quantity);
        if let Some(type_name) = dto.inventory_type.as_deref().filter(|t| !t.is_empty()) {
            patch = patch.with_inventory_type(self.resolve_type(type_name).await?);
        }
        patch.apply(&mut record);

        let saved = self.repository.inventory.save(record).await?;
        Ok(saved.into())
    }

    /// Soft-delete an enabled record; returns it as stored (disabled)
    pub async fn delete(&self, id: i64) -> AppResult<InventoryDto> {
        tracing::info!("Deleting inventory {}", id);
        let mut record = self.find_enabled(id).await?;
        record.enabled = false;

        let saved = self.repository.inventory.save(record).await?;
        Ok(saved.into())
    }

    /// Enabled records matching every populated filter field
    pub async fn search(&self, filter: &InventoryFilter) -> AppResult<Vec<InventoryDto>> {
        tracing::info!("Searching inventory");
        let predicate = search_inventory(filter);
        tracing::debug!("Inventory search predicate: {}", predicate);

        let records = self.repository.inventory.find_all(&predicate).await?;
        Ok(records.into_iter().map(InventoryDto::from).collect())
    }

    /// All known inventory types
    pub async fn list_types(&self) -> AppResult<Vec<InventoryType>> {
        self.repository.inventory_types.list().await
    }
}
