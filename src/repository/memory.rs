//! In-memory storage, used by the `memory` backend and by tests

use std::collections::BTreeMap;
use std::sync::RwLock;

use async_trait::async_trait;
use chrono::Utc;

use super::{InventoryStore, InventoryTypeStore};
use crate::{
    error::{AppError, AppResult},
    inventory::InventoryPredicate,
    models::{Inventory, InventoryType},
};

fn poisoned(op: &str) -> AppError {
    AppError::Internal(format!("inventory store lock poisoned ({})", op))
}

#[derive(Default)]
struct Records {
    next_id: i64,
    by_id: BTreeMap<i64, Inventory>,
}

/// Inventory records kept in a map ordered by id
#[derive(Default)]
pub struct MemoryInventoryStore {
    records: RwLock<Records>,
}

impl MemoryInventoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn get(&self, id: i64) -> AppResult<Option<Inventory>> {
        let records = self.records.read().map_err(|_| poisoned("read"))?;
        Ok(records.by_id.get(&id).cloned())
    }
}

#[async_trait]
impl InventoryStore for MemoryInventoryStore {
    async fn save(&self, mut record: Inventory) -> AppResult<Inventory> {
        let mut records = self.records.write().map_err(|_| poisoned("write"))?;
        let now = Utc::now();

        let id = match record.id {
            Some(id) => {
                let existing = records
                    .by_id
                    .get(&id)
                    .ok_or_else(|| AppError::NotFound(format!("Inventory {} not found", id)))?;
                record.created_at = existing.created_at;
                id
            }
            None => {
                records.next_id += 1;
                record.created_at = Some(now);
                records.next_id
            }
        };

        record.id = Some(id);
        record.updated_at = Some(now);
        records.by_id.insert(id, record.clone());
        Ok(record)
    }

    async fn find_by_id(&self, id: i64) -> AppResult<Option<Inventory>> {
        self.get(id)
    }

    async fn find_by_id_and_enabled(&self, id: i64, enabled: bool) -> AppResult<Option<Inventory>> {
        Ok(self.get(id)?.filter(|r| r.enabled == enabled))
    }

    async fn find_all(&self, predicate: &InventoryPredicate) -> AppResult<Vec<Inventory>> {
        let records = self.records.read().map_err(|_| poisoned("read"))?;
        Ok(records
            .by_id
            .values()
            .filter(|r| predicate.matches(r))
            .cloned()
            .collect())
    }
}

/// Fixed set of inventory types
#[derive(Default)]
pub struct MemoryInventoryTypeStore {
    types: Vec<InventoryType>,
}

impl MemoryInventoryTypeStore {
    /// Ids are assigned from 1 in the given order; duplicate names are skipped
    pub fn with_types(names: &[String]) -> Self {
        let mut types: Vec<InventoryType> = Vec::with_capacity(names.len());
        for name in names {
            if types.iter().any(|t| &t.type_name == name) {
                continue;
            }
            types.push(InventoryType::new(types.len() as i64 + 1, name.clone()));
        }
        Self { types }
    }
}

#[async_trait]
impl InventoryTypeStore for MemoryInventoryTypeStore {
    async fn find_by_type(&self, type_name: &str) -> AppResult<Option<InventoryType>> {
        Ok(self.types.iter().find(|t| t.type_name == type_name).cloned())
    }

    async fn list(&self) -> AppResult<Vec<InventoryType>> {
        let mut types = self.types.clone();
        types.sort_by(|a, b| a.type_name.cmp(&b.type_name));
        Ok(types)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{inventory::search_inventory, models::InventoryFilter};

    #[test]
    fn test_save_assigns_sequential_ids() {
        tokio_test::block_on(async {
            let store = MemoryInventoryStore::new();
            let a = store.save(Inventory::new("A", 1, None)).await.unwrap();
            let b = store.save(Inventory::new("B", 2, None)).await.unwrap();
            assert_eq!(a.id, Some(1));
            assert_eq!(b.id, Some(2));
            assert!(a.created_at.is_some());
        });
    }

    #[test]
    fn test_save_existing_keeps_created_at() {
        tokio_test::block_on(async {
            let store = MemoryInventoryStore::new();
            let mut saved = store.save(Inventory::new("A", 1, None)).await.unwrap();
            let created_at = saved.created_at;
            saved.quantity = 7;
            let updated = store.save(saved).await.unwrap();
            assert_eq!(updated.created_at, created_at);
            assert_eq!(store.find_by_id(1).await.unwrap().unwrap().quantity, 7);
        });
    }

    #[test]
    fn test_save_unknown_id_is_not_found() {
        tokio_test::block_on(async {
            let store = MemoryInventoryStore::new();
            let mut record = Inventory::new("Ghost", 1, None);
            record.id = Some(99);
            assert!(matches!(store.save(record).await, Err(AppError::NotFound(_))));
        });
    }

    #[test]
    fn test_find_by_id_and_enabled() {
        tokio_test::block_on(async {
            let store = MemoryInventoryStore::new();
            let mut saved = store.save(Inventory::new("A", 1, None)).await.unwrap();
            saved.enabled = false;
            store.save(saved).await.unwrap();

            assert!(store.find_by_id_and_enabled(1, true).await.unwrap().is_none());
            assert!(store.find_by_id_and_enabled(1, false).await.unwrap().is_some());
            assert!(store.find_by_id(1).await.unwrap().is_some());
        });
    }

    #[test]
    fn test_find_all_applies_predicate() {
        tokio_test::block_on(async {
            let store = MemoryInventoryStore::new();
            store.save(Inventory::new("A", 0, None)).await.unwrap();
            store.save(Inventory::new("B", 0, None)).await.unwrap();
            store.save(Inventory::new("C", 4, None)).await.unwrap();

            let predicate = search_inventory(&InventoryFilter {
                quantity: Some(0),
                ..Default::default()
            });
            let names: Vec<_> = store
                .find_all(&predicate)
                .await
                .unwrap()
                .into_iter()
                .map(|r| r.name)
                .collect();
            assert_eq!(names, vec!["A", "B"]);
        });
    }

    #[test]
    fn test_type_store_lookup_and_listing() {
        tokio_test::block_on(async {
            let store = MemoryInventoryTypeStore::with_types(&[
                "Software".to_string(),
                "Hardware".to_string(),
                "Software".to_string(),
            ]);
            let hardware = store.find_by_type("Hardware").await.unwrap().unwrap();
            assert_eq!(hardware.id, 2);
            assert!(store.find_by_type("hardware").await.unwrap().is_none());

            let names: Vec<_> = store
                .list()
                .await
                .unwrap()
                .into_iter()
                .map(|t| t.type_name)
                .collect();
            assert_eq!(names, vec!["Hardware", "Software"]);
        });
    }
}
