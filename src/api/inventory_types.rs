//! Inventory type endpoints

use axum::{extract::State, Json};

use crate::{error::AppResult, models::InventoryType};

use super::AuthenticatedUser;

/// List inventory types
#[utoipa::path(
    get,
    path = "/inventory-types",
    tag = "inventory",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Inventory types", body = Vec<InventoryType>)
    )
)]
pub async fn list_inventory_types(
    State(state): State<crate::AppState>,
    AuthenticatedUser(claims): AuthenticatedUser,
) -> AppResult<Json<Vec<InventoryType>>> {
    claims.require_read_inventory()?;
    let types = state.services.inventory.list_types().await?;
    Ok(Json(types))
}
