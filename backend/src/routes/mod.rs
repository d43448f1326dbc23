//! Route definitions for the Gas Cylinder Inventory service

use axum::{
    routing::{get, put},
    Router,
};

use crate::{handlers, AppState};

/// Create API routes
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(handlers::health_check))
        .nest("/suppliers", supplier_routes())
        .nest("/cylinder-types", cylinder_type_routes())
        .nest("/inventory", inventory_routes())
        .nest("/restocking", restocking_routes())
        .nest("/sales", sales_routes())
}

/// Supplier record routes
fn supplier_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(handlers::list_suppliers).post(handlers::create_supplier),
        )
        .route(
            "/:supplier_id",
            get(handlers::get_supplier)
                .put(handlers::update_supplier)
                .delete(handlers::delete_supplier),
        )
}

/// Cylinder type record routes
fn cylinder_type_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(handlers::list_cylinder_types).post(handlers::create_cylinder_type),
        )
        .route(
            "/:type_id",
            get(handlers::get_cylinder_type)
                .put(handlers::update_cylinder_type)
                .delete(handlers::delete_cylinder_type),
        )
}

/// Inventory ledger routes
fn inventory_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(handlers::list_inventory))
        .route("/summary", get(handlers::get_inventory_summary))
        .route("/lookup", get(handlers::lookup_inventory))
        .route("/:inventory_id", get(handlers::get_inventory))
        .route("/:inventory_id/transfer", put(handlers::transfer_cylinders))
}

/// Restocking routes
fn restocking_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(handlers::list_restocks).post(handlers::create_restock),
        )
        .route("/:restock_id", get(handlers::get_restock))
}

/// Sales routes
fn sales_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(handlers::list_sales).post(handlers::create_sale))
        .route("/:sale_id", get(handlers::get_sale))
}
