//! Restocking HTTP handlers

use axum::{
    extract::State,
    http::StatusCode,
    Json,
};

use crate::error::AppResult;
use crate::extract::{AppJson, AppPath};
use crate::models::RestockInput;
use crate::services::restock::{Restock, RestockService};
use crate::AppState;

/// Record a delivery from a supplier
pub async fn create_restock(
    State(state): State<AppState>,
    AppJson(input): AppJson<RestockInput>,
) -> AppResult<(StatusCode, Json<Restock>)> {
    let service = RestockService::new(state.db);
    let restock = service.create_restock(input).await?;
    Ok((StatusCode::CREATED, Json(restock)))
}

pub async fn list_restocks(State(state): State<AppState>) -> AppResult<Json<Vec<Restock>>> {
    let service = RestockService::new(state.db);
    let restocks = service.list_restocks().await?;
    Ok(Json(restocks))
}

pub async fn get_restock(
    State(state): State<AppState>,
    AppPath(restock_id): AppPath<i64>,
) -> AppResult<Json<Restock>> {
    let service = RestockService::new(state.db);
    let restock = service.get_restock(restock_id).await?;
    Ok(Json(restock))
}
