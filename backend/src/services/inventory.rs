//! Inventory ledger service: empty/full cylinder counts per (supplier, type)
//!
//! Every stock mutation runs inside a caller-owned transaction. Rows are locked
//! with `SELECT ... FOR UPDATE` before the sufficiency check, so two concurrent
//! requests against the same row serialize instead of both passing the check
//! against stale counts. Rows of different (supplier, type) pairs never block
//! each other.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Serialize;
use sqlx::{FromRow, PgConnection, PgExecutor, PgPool};

use crate::error::{AppError, AppResult};
use crate::models::{Bucket, StockError, StockLevel};

/// Inventory service for reading and mutating the ledger
#[derive(Clone)]
pub struct InventoryService {
    db: PgPool,
}

/// Ledger row as stored
#[derive(Debug, Clone, FromRow)]
pub struct LedgerEntry {
    pub inventory_id: i64,
    pub supplier_id: i64,
    pub type_id: i64,
    pub empty_count: i32,
    pub full_count: i32,
    pub last_updated: DateTime<Utc>,
}

impl LedgerEntry {
    pub fn level(&self) -> StockLevel {
        StockLevel::new(self.empty_count, self.full_count)
    }
}

/// Ledger row joined with supplier name and cylinder capacity
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct InventoryView {
    pub inventory_id: i64,
    pub supplier_id: i64,
    pub type_id: i64,
    pub empty_count: i32,
    pub full_count: i32,
    pub total_count: i64,
    pub last_updated: DateTime<Utc>,
    pub supplier_name: String,
    pub capacity_kg: Decimal,
}

/// Stock grouped by supplier and cylinder capacity
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct SummaryRow {
    pub supplier_name: String,
    pub capacity_kg: Decimal,
    pub total_empty: i64,
    pub total_full: i64,
    pub total_cylinders: i64,
}

/// Stock across every ledger row
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct SummaryTotals {
    pub grand_total_empty: i64,
    pub grand_total_full: i64,
    pub grand_total_cylinders: i64,
}

#[derive(Debug, Clone, Serialize)]
pub struct InventorySummary {
    pub summary_by_type: Vec<SummaryRow>,
    pub totals: SummaryTotals,
}

impl InventoryService {
    /// Create a new InventoryService instance
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }

    /// List every ledger row with display fields
    pub async fn list_entries(&self) -> AppResult<Vec<InventoryView>> {
        let entries = sqlx::query_as::<_, InventoryView>(
            r#"
            SELECT i.inventory_id, i.supplier_id, i.type_id, i.empty_count, i.full_count,
                   (i.empty_count::BIGINT + i.full_count::BIGINT) AS total_count,
                   i.last_updated, s.supplier_name, ct.capacity_kg
            FROM inventory i
            JOIN suppliers s ON i.supplier_id = s.supplier_id
            JOIN cylinder_types ct ON i.type_id = ct.type_id
            ORDER BY i.inventory_id ASC
            "#,
        )
        .fetch_all(&self.db)
        .await?;

        Ok(entries)
    }

    /// Get one ledger row by ID
    pub async fn get_entry(&self, inventory_id: i64) -> AppResult<InventoryView> {
        Self::fetch_view(&self.db, inventory_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Inventory record".to_string()))
    }

    /// Find the ledger row of a (supplier, type) pair; `None` means no stock yet
    pub async fn find_entry(
        &self,
        supplier_id: i64,
        type_id: i64,
    ) -> AppResult<Option<InventoryView>> {
        let entry = sqlx::query_as::<_, InventoryView>(
            r#"
            SELECT i.inventory_id, i.supplier_id, i.type_id, i.empty_count, i.full_count,
                   (i.empty_count::BIGINT + i.full_count::BIGINT) AS total_count,
                   i.last_updated, s.supplier_name, ct.capacity_kg
            FROM inventory i
            JOIN suppliers s ON i.supplier_id = s.supplier_id
            JOIN cylinder_types ct ON i.type_id = ct.type_id
            WHERE i.supplier_id = $1 AND i.type_id = $2
            "#,
        )
        .bind(supplier_id)
        .bind(type_id)
        .fetch_optional(&self.db)
        .await?;

        Ok(entry)
    }

    /// Stock summed per (supplier name, capacity) plus a grand total
    pub async fn get_summary(&self) -> AppResult<InventorySummary> {
        let summary_by_type = sqlx::query_as::<_, SummaryRow>(
            r#"
            SELECT s.supplier_name,
                   ct.capacity_kg,
                   SUM(i.empty_count)::BIGINT AS total_empty,
                   SUM(i.full_count)::BIGINT AS total_full,
                   SUM(i.empty_count::BIGINT + i.full_count::BIGINT)::BIGINT AS total_cylinders
            FROM inventory i
            JOIN suppliers s ON i.supplier_id = s.supplier_id
            JOIN cylinder_types ct ON i.type_id = ct.type_id
            GROUP BY s.supplier_name, ct.capacity_kg
            ORDER BY s.supplier_name, ct.capacity_kg
            "#,
        )
        .fetch_all(&self.db)
        .await?;

        let totals = sqlx::query_as::<_, SummaryTotals>(
            r#"
            SELECT COALESCE(SUM(empty_count), 0)::BIGINT AS grand_total_empty,
                   COALESCE(SUM(full_count), 0)::BIGINT AS grand_total_full,
                   COALESCE(SUM(empty_count::BIGINT + full_count::BIGINT), 0)::BIGINT
                       AS grand_total_cylinders
            FROM inventory
            "#,
        )
        .fetch_one(&self.db)
        .await?;

        Ok(InventorySummary {
            summary_by_type,
            totals,
        })
    }

    /// Move `quantity` cylinders between the empty and full buckets of one row
    pub async fn transfer(
        &self,
        inventory_id: i64,
        from: Bucket,
        to: Bucket,
        quantity: i32,
    ) -> AppResult<InventoryView> {
        // Reject malformed requests before taking any lock
        if from == to {
            return Err(StockError::SameBucket.into());
        }
        if quantity <= 0 {
            return Err(StockError::NonPositiveQuantity(quantity).into());
        }

        let mut tx = self.db.begin().await?;

        let entry = Self::mutate_entry(&mut *tx, inventory_id, |level| {
            level.transfer(from, to, quantity)
        })
        .await?;

        let view = Self::fetch_view(&mut *tx, inventory_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Inventory record".to_string()))?;

        tx.commit().await?;

        tracing::info!(
            inventory_id,
            %from,
            %to,
            quantity,
            empty_count = entry.empty_count,
            full_count = entry.full_count,
            "Cylinders transferred"
        );
        Ok(view)
    }

    /// Lock a ledger row for the rest of the transaction
    pub(crate) async fn lock_entry(
        conn: &mut PgConnection,
        inventory_id: i64,
    ) -> AppResult<LedgerEntry> {
        sqlx::query_as::<_, LedgerEntry>(
            r#"
            SELECT inventory_id, supplier_id, type_id, empty_count, full_count, last_updated
            FROM inventory
            WHERE inventory_id = $1
            FOR UPDATE
            "#,
        )
        .bind(inventory_id)
        .fetch_optional(&mut *conn)
        .await?
        .ok_or_else(|| AppError::NotFound("Inventory record".to_string()))
    }

    /// Lock a row, derive its next counts with `change`, and write them.
    ///
    /// A rejected change returns before anything is written; the caller's
    /// transaction is then dropped and rolls back.
    pub(crate) async fn mutate_entry<F>(
        conn: &mut PgConnection,
        inventory_id: i64,
        change: F,
    ) -> AppResult<LedgerEntry>
    where
        F: FnOnce(StockLevel) -> Result<StockLevel, StockError>,
    {
        let entry = Self::lock_entry(&mut *conn, inventory_id).await?;

        let next = change(entry.level()).map_err(|e| {
            tracing::warn!(inventory_id, error = %e, "Stock change rejected");
            AppError::from(e)
        })?;

        let updated = sqlx::query_as::<_, LedgerEntry>(
            r#"
            UPDATE inventory
            SET empty_count = $1, full_count = $2, last_updated = NOW()
            WHERE inventory_id = $3
            RETURNING inventory_id, supplier_id, type_id, empty_count, full_count, last_updated
            "#,
        )
        .bind(next.empty_count)
        .bind(next.full_count)
        .bind(inventory_id)
        .fetch_one(&mut *conn)
        .await?;

        Ok(updated)
    }

    /// Add `quantity` full cylinders to a (supplier, type) row, creating the row
    /// on first delivery. A single upsert statement, so two first deliveries
    /// for the same pair cannot both insert.
    pub(crate) async fn receive_full(
        conn: &mut PgConnection,
        supplier_id: i64,
        type_id: i64,
        quantity: i32,
    ) -> AppResult<LedgerEntry> {
        StockLevel::default().restock(quantity)?;

        let entry = sqlx::query_as::<_, LedgerEntry>(
            r#"
            INSERT INTO inventory (supplier_id, type_id, empty_count, full_count)
            VALUES ($1, $2, 0, $3)
            ON CONFLICT (supplier_id, type_id) DO UPDATE
            SET full_count = inventory.full_count + EXCLUDED.full_count,
                last_updated = NOW()
            RETURNING inventory_id, supplier_id, type_id, empty_count, full_count, last_updated
            "#,
        )
        .bind(supplier_id)
        .bind(type_id)
        .bind(quantity)
        .fetch_one(&mut *conn)
        .await?;

        Ok(entry)
    }

    async fn fetch_view<'e, E>(executor: E, inventory_id: i64) -> AppResult<Option<InventoryView>>
    where
        E: PgExecutor<'e>,
    {
        let view = sqlx::query_as::<_, InventoryView>(
            r#"
            SELECT i.inventory_id, i.supplier_id, i.type_id, i.empty_count, i.full_count,
                   (i.empty_count::BIGINT + i.full_count::BIGINT) AS total_count,
                   i.last_updated, s.supplier_name, ct.capacity_kg
            FROM inventory i
            JOIN suppliers s ON i.supplier_id = s.supplier_id
            JOIN cylinder_types ct ON i.type_id = ct.type_id
            WHERE i.inventory_id = $1
            "#,
        )
        .bind(inventory_id)
        .fetch_optional(executor)
        .await?;

        Ok(view)
    }
}
