//! Inventory endpoints

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use axum_extra::extract::WithRejection;

use crate::{
    error::{AppError, AppResult},
    models::{InventoryDto, InventoryFilter},
};

use super::AuthenticatedUser;

/// Search enabled inventory records
#[utoipa::path(
    get,
    path = "/inventory",
    tag = "inventory",
    security(("bearer_auth" = [])),
    params(InventoryFilter),
    responses(
        (status = 200, description = "Matching inventory records", body = Vec<InventoryDto>),
        (status = 401, description = "Not authenticated")
    )
)]
pub async fn search_inventory(
    State(state): State<crate::AppState>,
    AuthenticatedUser(claims): AuthenticatedUser,
    WithRejection(Query(filter), _): WithRejection<Query<InventoryFilter>, AppError>,
) -> AppResult<Json<Vec<InventoryDto>>> {
    claims.require_read_inventory()?;

    let found = state.services.inventory.search(&filter).await?;
    Ok(Json(found))
}

/// Get inventory by ID
#[utoipa::path(
    get,
    path = "/inventory/{id}",
    tag = "inventory",
    security(("bearer_auth" = [])),
    params(("id" = i64, Path, description = "Inventory ID")),
    responses(
        (status = 200, description = "Inventory details", body = InventoryDto),
        (status = 404, description = "Inventory not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn get_inventory(
    State(state): State<crate::AppState>,
    AuthenticatedUser(claims): AuthenticatedUser,
    WithRejection(Path(id), _): WithRejection<Path<i64>, AppError>,
) -> AppResult<Json<InventoryDto>> {
    claims.require_read_inventory()?;

    let inventory = state.services.inventory.get_by_id(id).await?;
    Ok(Json(inventory))
}

/// Create inventory
#[utoipa::path(
    post,
    path = "/inventory",
    tag = "inventory",
    security(("bearer_auth" = [])),
    request_body = InventoryDto,
    responses(
        (status = 201, description = "Inventory created", body = InventoryDto),
        (status = 400, description = "Invalid input", body = crate::error::ErrorResponse),
        (status = 422, description = "Unknown inventory type", body = crate::error::ErrorResponse)
    )
)]
pub async fn create_inventory(
    State(state): State<crate::AppState>,
    AuthenticatedUser(claims): AuthenticatedUser,
    WithRejection(Json(dto), _): WithRejection<Json<InventoryDto>, AppError>,
) -> AppResult<(StatusCode, Json<InventoryDto>)> {
    claims.require_write_inventory()?;

    let created = state.services.inventory.create(&dto).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// Update inventory; only the fields present in the body are changed
#[utoipa::path(
    put,
    path = "/inventory/{id}",
    tag = "inventory",
    security(("bearer_auth" = [])),
    params(("id" = i64, Path, description = "Inventory ID")),
    request_body = InventoryDto,
    responses(
        (status = 200, description = "Inventory updated", body = InventoryDto),
        (status = 404, description = "Inventory not found", body = crate::error::ErrorResponse),
        (status = 422, description = "Unknown inventory type", body = crate::error::ErrorResponse)
    )
)]
pub async fn update_inventory(
    State(state): State<crate::AppState>,
    AuthenticatedUser(claims): AuthenticatedUser,
    WithRejection(Path(id), _): WithRejection<Path<i64>, AppError>,
    WithRejection(Json(mut dto), _): WithRejection<Json<InventoryDto>, AppError>,
) -> AppResult<Json<InventoryDto>> {
    claims.require_write_inventory()?;

    // path id wins over any id in the body
    dto.inventory_id = Some(id);
    let updated = state.services.inventory.update(&dto).await?;
    Ok(Json(updated))
}

/// Soft-delete inventory
#[utoipa::path(
    delete,
    path = "/inventory/{id}",
    tag = "inventory",
    security(("bearer_auth" = [])),
    params(("id" = i64, Path, description = "Inventory ID")),
    responses(
        (status = 200, description = "Inventory disabled", body = InventoryDto),
        (status = 404, description = "Inventory not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn delete_inventory(
    State(state): State<crate::AppState>,
    AuthenticatedUser(claims): AuthenticatedUser,
    WithRejection(Path(id), _): WithRejection<Path<i64>, AppError>,
) -> AppResult<Json<InventoryDto>> {
    claims.require_write_inventory()?;

    let deleted = state.services.inventory.delete(id).await?;
    Ok(Json(deleted))
}
