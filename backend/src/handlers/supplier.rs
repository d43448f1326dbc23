//! Supplier HTTP handlers

use axum::{
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::error::AppResult;
use crate::extract::{AppJson, AppPath};
use crate::models::SupplierInput;
use crate::services::supplier::{Supplier, SupplierService};
use crate::AppState;

/// Create a supplier
pub async fn create_supplier(
    State(state): State<AppState>,
    AppJson(input): AppJson<SupplierInput>,
) -> AppResult<(StatusCode, Json<Supplier>)> {
    let service = SupplierService::new(state.db);
    let supplier = service.create_supplier(input).await?;
    Ok((StatusCode::CREATED, Json(supplier)))
}

/// List all suppliers
pub async fn list_suppliers(State(state): State<AppState>) -> AppResult<Json<Vec<Supplier>>> {
    let service = SupplierService::new(state.db);
    let suppliers = service.list_suppliers().await?;
    Ok(Json(suppliers))
}

/// Get a supplier
pub async fn get_supplier(
    State(state): State<AppState>,
    AppPath(supplier_id): AppPath<i64>,
) -> AppResult<Json<Supplier>> {
    let service = SupplierService::new(state.db);
    let supplier = service.get_supplier(supplier_id).await?;
    Ok(Json(supplier))
}

/// Replace a supplier's fields
pub async fn update_supplier(
    State(state): State<AppState>,
    AppPath(supplier_id): AppPath<i64>,
    AppJson(input): AppJson<SupplierInput>,
) -> AppResult<Json<Supplier>> {
    let service = SupplierService::new(state.db);
    let supplier = service.update_supplier(supplier_id, input).await?;
    Ok(Json(supplier))
}

/// Delete a supplier
pub async fn delete_supplier(
    State(state): State<AppState>,
    AppPath(supplier_id): AppPath<i64>,
) -> impl IntoResponse {
    let service = SupplierService::new(state.db);

    match service.delete_supplier(supplier_id).await {
        Ok(()) => (
            StatusCode::OK,
            Json(serde_json::json!({ "message": "Supplier deleted successfully" })),
        )
            .into_response(),
        Err(e) => e.into_response(),
    }
}
