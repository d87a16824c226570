//! Inventory repository for PostgreSQL

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, Pool, Postgres};

use super::InventoryStore;
use crate::{
    error::{AppError, AppResult},
    inventory::{Clause, InventoryPredicate},
    models::{Inventory, InventoryType},
};

const SELECT_INVENTORY: &str = r#"
    SELECT i.id, i.name, i.quantity, i.enabled, i.inventory_type_id, t.type_name,
           i.created_at, i.updated_at
    FROM inventory i
    LEFT JOIN inventory_type t ON t.id = i.inventory_type_id
"#;

#[derive(FromRow)]
struct InventoryRow {
    id: i64,
    name: String,
    quantity: i64,
    enabled: bool,
    inventory_type_id: Option<i64>,
    type_name: Option<String>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl From<InventoryRow> for Inventory {
    fn from(row: InventoryRow) -> Self {
        let inventory_type = match (row.inventory_type_id, row.type_name) {
            (Some(id), Some(type_name)) => Some(InventoryType { id, type_name }),
            _ => None,
        };
        Self {
            id: Some(row.id),
            name: row.name,
            quantity: row.quantity,
            inventory_type,
            enabled: row.enabled,
            created_at: Some(row.created_at),
            updated_at: Some(row.updated_at),
        }
    }
}

/// Render the predicate as a WHERE clause with numbered placeholders,
/// one per clause, in clause order.
fn where_clause(predicate: &InventoryPredicate) -> String {
    predicate
        .clauses()
        .iter()
        .enumerate()
        .map(|(i, clause)| format!("{} = ${}", clause.column(), i + 1))
        .collect::<Vec<_>>()
        .join(" AND ")
}

#[derive(Clone)]
pub struct InventoryRepository {
    pool: Pool<Postgres>,
}

impl InventoryRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    async fn insert(&self, record: &Inventory) -> AppResult<i64> {
        let now = Utc::now();
        let id = sqlx::query_scalar::<_, i64>(
            r#"
            INSERT INTO inventory (name, quantity, inventory_type_id, enabled, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $5)
            RETURNING id
            "#,
        )
        .bind(&record.name)
        .bind(record.quantity)
        .bind(record.inventory_type.as_ref().map(|t| t.id))
        .bind(record.enabled)
        .bind(now)
        .fetch_one(&self.pool)
        .await?;
        Ok(id)
    }

    async fn update(&self, id: i64, record: &Inventory) -> AppResult<i64> {
        let now = Utc::now();
        sqlx::query_scalar::<_, i64>(
            r#"
            UPDATE inventory SET
                name = $1,
                quantity = $2,
                inventory_type_id = $3,
                enabled = $4,
                updated_at = $5
            WHERE id = $6
            RETURNING id
            "#,
        )
        .bind(&record.name)
        .bind(record.quantity)
        .bind(record.inventory_type.as_ref().map(|t| t.id))
        .bind(record.enabled)
        .bind(now)
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Inventory {} not found", id)))
    }
}

#[async_trait]
impl InventoryStore for InventoryRepository {
    async fn save(&self, record: Inventory) -> AppResult<Inventory> {
        let id = match record.id {
            Some(id) => self.update(id, &record).await?,
            None => self.insert(&record).await?,
        };

        self.find_by_id(id)
            .await?
            .ok_or_else(|| AppError::Internal(format!("Inventory {} vanished after save", id)))
    }

    async fn find_by_id(&self, id: i64) -> AppResult<Option<Inventory>> {
        let query = format!("{} WHERE i.id = $1", SELECT_INVENTORY);
        let row = sqlx::query_as::<_, InventoryRow>(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row.map(Inventory::from))
    }

    async fn find_by_id_and_enabled(&self, id: i64, enabled: bool) -> AppResult<Option<Inventory>> {
        let query = format!("{} WHERE i.id = $1 AND i.enabled = $2", SELECT_INVENTORY);
        let row = sqlx::query_as::<_, InventoryRow>(&query)
            .bind(id)
            .bind(enabled)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row.map(Inventory::from))
    }

    async fn find_all(&self, predicate: &InventoryPredicate) -> AppResult<Vec<Inventory>> {
        let query = format!(
            "{} WHERE {} ORDER BY i.id",
            SELECT_INVENTORY,
            where_clause(predicate)
        );

        let mut builder = sqlx::query_as::<_, InventoryRow>(&query);
        for clause in predicate.clauses() {
            builder = match clause {
                Clause::Enabled(enabled) => builder.bind(*enabled),
                Clause::NameEquals(value) | Clause::TypeNameEquals(value) => {
                    builder.bind(value.as_str())
                }
                Clause::QuantityEquals(quantity) => builder.bind(*quantity),
            };
        }

        let rows = builder.fetch_all(&self.pool).await?;
        Ok(rows.into_iter().map(Inventory::from).collect())
    }
}
