//! Restocking service: deliveries of full cylinders from suppliers

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::Serialize;
use sqlx::{FromRow, PgExecutor, PgPool};
use validator::Validate;

use crate::error::{AppError, AppResult};
use crate::models::RestockInput;
use crate::services::inventory::InventoryService;

#[derive(Clone)]
pub struct RestockService {
    db: PgPool,
}

/// Restock event joined with supplier name and cylinder capacity
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Restock {
    pub restock_id: i64,
    pub supplier_id: i64,
    pub type_id: i64,
    pub quantity: i32,
    pub unit_price: Decimal,
    /// Generated column: quantity × unit_price
    pub total_cost: Decimal,
    pub restock_date: NaiveDate,
    pub received_by: Option<String>,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
    pub supplier_name: String,
    pub capacity_kg: Decimal,
}

impl RestockService {
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }

    /// Record a delivery and add its cylinders to the ledger.
    ///
    /// The event row and the ledger change commit together or not at all.
    pub async fn create_restock(&self, input: RestockInput) -> AppResult<Restock> {
        input.validate()?;

        let restock_date = input
            .restock_date
            .unwrap_or_else(|| Utc::now().date_naive());

        let mut tx = self.db.begin().await?;

        let supplier_exists = sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS(SELECT 1 FROM suppliers WHERE supplier_id = $1)",
        )
        .bind(input.supplier_id)
        .fetch_one(&mut *tx)
        .await?;

        if !supplier_exists {
            return Err(AppError::NotFound("Supplier".to_string()));
        }

        let type_exists = sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS(SELECT 1 FROM cylinder_types WHERE type_id = $1)",
        )
        .bind(input.type_id)
        .fetch_one(&mut *tx)
        .await?;

        if !type_exists {
            return Err(AppError::NotFound("Cylinder type".to_string()));
        }

        let restock_id = sqlx::query_scalar::<_, i64>(
            r#"
            INSERT INTO restocking
                (supplier_id, type_id, quantity, unit_price, restock_date, received_by, notes)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING restock_id
            "#,
        )
        .bind(input.supplier_id)
        .bind(input.type_id)
        .bind(input.quantity)
        .bind(input.unit_price)
        .bind(restock_date)
        .bind(&input.received_by)
        .bind(&input.notes)
        .fetch_one(&mut *tx)
        .await?;

        let entry = InventoryService::receive_full(
            &mut *tx,
            input.supplier_id,
            input.type_id,
            input.quantity,
        )
        .await?;

        let restock = Self::fetch_restock(&mut *tx, restock_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Restocking record".to_string()))?;

        tx.commit().await?;

        tracing::info!(
            restock_id,
            inventory_id = entry.inventory_id,
            quantity = restock.quantity,
            total_cost = %restock.total_cost,
            full_count = entry.full_count,
            "Restock recorded"
        );
        Ok(restock)
    }

    /// List restock events, newest delivery date first
    pub async fn list_restocks(&self) -> AppResult<Vec<Restock>> {
        let restocks = sqlx::query_as::<_, Restock>(
            r#"
            SELECT r.restock_id, r.supplier_id, r.type_id, r.quantity, r.unit_price, r.total_cost,
                   r.restock_date, r.received_by, r.notes, r.created_at,
                   s.supplier_name, ct.capacity_kg
            FROM restocking r
            JOIN suppliers s ON r.supplier_id = s.supplier_id
            JOIN cylinder_types ct ON r.type_id = ct.type_id
            ORDER BY r.restock_date DESC, r.restock_id DESC
            "#,
        )
        .fetch_all(&self.db)
        .await?;

        Ok(restocks)
    }

    pub async fn get_restock(&self, restock_id: i64) -> AppResult<Restock> {
        Self::fetch_restock(&self.db, restock_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Restocking record".to_string()))
    }

    async fn fetch_restock<'e, E>(executor: E, restock_id: i64) -> AppResult<Option<Restock>>
    where
        E: PgExecutor<'e>,
    {
        let restock = sqlx::query_as::<_, Restock>(
            r#"
            SELECT r.restock_id, r.supplier_id, r.type_id, r.quantity, r.unit_price, r.total_cost,
                   r.restock_date, r.received_by, r.notes, r.created_at,
                   s.supplier_name, ct.capacity_kg
            FROM restocking r
            JOIN suppliers s ON r.supplier_id = s.supplier_id
            JOIN cylinder_types ct ON r.type_id = ct.type_id
            WHERE r.restock_id = $1
            "#,
        )
        .bind(restock_id)
        .fetch_optional(executor)
        .await?;

        Ok(restock)
    }
}
