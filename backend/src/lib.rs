//! Gas Cylinder Inventory - Backend
//!
//! Tracks suppliers, cylinder types, empty/full stock per (supplier, type),
//! restocking deliveries and sales over a PostgreSQL store.

use axum::{routing::get, Router};
use std::sync::Arc;
use tower_http::{
    cors::{Any, CorsLayer},
    normalize_path::NormalizePath,
    trace::TraceLayer,
};

pub mod config;
pub mod error;
pub mod extract;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;

pub use config::Config;
pub use error::{AppError, AppResult};

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub db: sqlx::PgPool,
    pub config: Arc<Config>,
}

/// Create the application with all routes and middleware.
///
/// Trailing slashes are trimmed before routing, so `/suppliers/` and
/// `/suppliers` reach the same handler.
pub fn create_app(state: AppState) -> NormalizePath<Router> {
    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let router = Router::new()
        .route("/", get(root))
        .merge(routes::api_routes())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state);

    NormalizePath::trim_trailing_slash(router)
}

/// Root endpoint
async fn root() -> &'static str {
    "Gas Cylinder Inventory API v1.0"
}
