//! Cylinder type HTTP handlers

use axum::{
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::error::AppResult;
use crate::extract::{AppJson, AppPath};
use crate::models::CylinderTypeInput;
use crate::services::cylinder::{CylinderType, CylinderTypeService};
use crate::AppState;

pub async fn create_cylinder_type(
    State(state): State<AppState>,
    AppJson(input): AppJson<CylinderTypeInput>,
) -> AppResult<(StatusCode, Json<CylinderType>)> {
    let service = CylinderTypeService::new(state.db);
    let cylinder_type = service.create_cylinder_type(input).await?;
    Ok((StatusCode::CREATED, Json(cylinder_type)))
}

pub async fn list_cylinder_types(
    State(state): State<AppState>,
) -> AppResult<Json<Vec<CylinderType>>> {
    let service = CylinderTypeService::new(state.db);
    let types = service.list_cylinder_types().await?;
    Ok(Json(types))
}

pub async fn get_cylinder_type(
    State(state): State<AppState>,
    AppPath(type_id): AppPath<i64>,
) -> AppResult<Json<CylinderType>> {
    let service = CylinderTypeService::new(state.db);
    let cylinder_type = service.get_cylinder_type(type_id).await?;
    Ok(Json(cylinder_type))
}

pub async fn update_cylinder_type(
    State(state): State<AppState>,
    AppPath(type_id): AppPath<i64>,
    AppJson(input): AppJson<CylinderTypeInput>,
) -> AppResult<Json<CylinderType>> {
    let service = CylinderTypeService::new(state.db);
    let cylinder_type = service.update_cylinder_type(type_id, input).await?;
    Ok(Json(cylinder_type))
}

pub async fn delete_cylinder_type(
    State(state): State<AppState>,
    AppPath(type_id): AppPath<i64>,
) -> impl IntoResponse {
    let service = CylinderTypeService::new(state.db);

    match service.delete_cylinder_type(type_id).await {
        Ok(()) => (
            StatusCode::OK,
            Json(serde_json::json!({ "message": "Cylinder type deleted successfully" })),
        )
            .into_response(),
        Err(e) => e.into_response(),
    }
}
