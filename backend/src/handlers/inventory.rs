//! HTTP handlers for inventory ledger endpoints

use axum::{extract::State, Json};
use serde::Deserialize;

use crate::error::{AppError, AppResult};
use crate::extract::{AppPath, AppQuery};
use crate::models::Bucket;
use crate::services::inventory::{InventoryService, InventorySummary, InventoryView};
use crate::AppState;

/// Query parameters for a transfer between buckets
#[derive(Debug, Deserialize)]
pub struct TransferParams {
    #[serde(alias = "from_status")]
    pub from: String,
    #[serde(alias = "to_status")]
    pub to: String,
    pub quantity: i32,
}

/// Query parameters for looking up a (supplier, cylinder type) row
#[derive(Debug, Deserialize)]
pub struct LookupParams {
    pub supplier_id: i64,
    pub type_id: i64,
}

/// List all ledger rows
pub async fn list_inventory(State(state): State<AppState>) -> AppResult<Json<Vec<InventoryView>>> {
    let service = InventoryService::new(state.db);
    let entries = service.list_entries().await?;
    Ok(Json(entries))
}

/// Get one ledger row
pub async fn get_inventory(
    State(state): State<AppState>,
    AppPath(inventory_id): AppPath<i64>,
) -> AppResult<Json<InventoryView>> {
    let service = InventoryService::new(state.db);
    let entry = service.get_entry(inventory_id).await?;
    Ok(Json(entry))
}

/// Get the ledger row of a (supplier, cylinder type) pair
pub async fn lookup_inventory(
    State(state): State<AppState>,
    AppQuery(params): AppQuery<LookupParams>,
) -> AppResult<Json<InventoryView>> {
    let service = InventoryService::new(state.db);
    let entry = service
        .find_entry(params.supplier_id, params.type_id)
        .await?
        .ok_or_else(|| AppError::NotFound("Inventory record".to_string()))?;
    Ok(Json(entry))
}

/// Move cylinders between the empty and full buckets of one row
pub async fn transfer_cylinders(
    State(state): State<AppState>,
    AppPath(inventory_id): AppPath<i64>,
    AppQuery(params): AppQuery<TransferParams>,
) -> AppResult<Json<InventoryView>> {
    let from: Bucket = params.from.parse()?;
    let to: Bucket = params.to.parse()?;

    let service = InventoryService::new(state.db);
    let entry = service
        .transfer(inventory_id, from, to, params.quantity)
        .await?;
    Ok(Json(entry))
}

/// Stock totals per supplier and capacity
pub async fn get_inventory_summary(
    State(state): State<AppState>,
) -> AppResult<Json<InventorySummary>> {
    let service = InventoryService::new(state.db);
    let summary = service.get_summary().await?;
    Ok(Json(summary))
}
