//! Sales HTTP handlers

use axum::{
    extract::State,
    http::StatusCode,
    Json,
};

use crate::error::AppResult;
use crate::extract::{AppJson, AppPath};
use crate::models::SaleInput;
use crate::services::sale::{Sale, SaleService};
use crate::AppState;

/// Sell full cylinders from a ledger row
pub async fn create_sale(
    State(state): State<AppState>,
    AppJson(input): AppJson<SaleInput>,
) -> AppResult<(StatusCode, Json<Sale>)> {
    let service = SaleService::new(state.db);
    let sale = service.create_sale(input).await?;
    Ok((StatusCode::CREATED, Json(sale)))
}

pub async fn list_sales(State(state): State<AppState>) -> AppResult<Json<Vec<Sale>>> {
    let service = SaleService::new(state.db);
    let sales = service.list_sales().await?;
    Ok(Json(sales))
}

pub async fn get_sale(
    State(state): State<AppState>,
    AppPath(sale_id): AppPath<i64>,
) -> AppResult<Json<Sale>> {
    let service = SaleService::new(state.db);
    let sale = service.get_sale(sale_id).await?;
    Ok(Json(sale))
}
