//! Sales service: full cylinders out, customer empties back in

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::Serialize;
use sqlx::{FromRow, PgExecutor, PgPool};
use validator::Validate;

use crate::error::{AppError, AppResult};
use crate::models::SaleInput;
use crate::services::inventory::InventoryService;

#[derive(Clone)]
pub struct SaleService {
    db: PgPool,
}

/// Sale event joined with supplier name and cylinder capacity
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Sale {
    pub sale_id: i64,
    pub inventory_id: i64,
    pub quantity: i32,
    pub unit_price: Decimal,
    /// Generated column: quantity × unit_price
    pub total_amount: Decimal,
    pub sale_date: NaiveDate,
    pub customer_name: Option<String>,
    pub customer_phone: Option<String>,
    pub sold_by: Option<String>,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
    pub supplier_name: String,
    pub capacity_kg: Decimal,
}

impl SaleService {
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }

    /// Sell full cylinders from one ledger row.
    ///
    /// The row stays locked from the stock check until commit, so concurrent
    /// sales never sell more than the full count they started from.
    pub async fn create_sale(&self, input: SaleInput) -> AppResult<Sale> {
        input.validate()?;

        let sale_date = input.sale_date.unwrap_or_else(|| Utc::now().date_naive());
        let quantity = input.quantity;

        let mut tx = self.db.begin().await?;

        let entry = InventoryService::mutate_entry(&mut *tx, input.inventory_id, |level| {
            level.sell(quantity)
        })
        .await?;

        let sale_id = sqlx::query_scalar::<_, i64>(
            r#"
            INSERT INTO sales
                (inventory_id, quantity, unit_price, sale_date,
                 customer_name, customer_phone, sold_by, notes)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            RETURNING sale_id
            "#,
        )
        .bind(input.inventory_id)
        .bind(quantity)
        .bind(input.unit_price)
        .bind(sale_date)
        .bind(&input.customer_name)
        .bind(&input.customer_phone)
        .bind(&input.sold_by)
        .bind(&input.notes)
        .fetch_one(&mut *tx)
        .await?;

        let sale = Self::fetch_sale(&mut *tx, sale_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Sale".to_string()))?;

        tx.commit().await?;

        tracing::info!(
            sale_id,
            inventory_id = entry.inventory_id,
            quantity,
            total_amount = %sale.total_amount,
            full_count = entry.full_count,
            empty_count = entry.empty_count,
            "Sale recorded"
        );
        Ok(sale)
    }

    /// List sales, newest sale date first
    pub async fn list_sales(&self) -> AppResult<Vec<Sale>> {
        let sales = sqlx::query_as::<_, Sale>(
            r#"
            SELECT sa.sale_id, sa.inventory_id, sa.quantity, sa.unit_price, sa.total_amount,
                   sa.sale_date, sa.customer_name, sa.customer_phone, sa.sold_by, sa.notes,
                   sa.created_at, s.supplier_name, ct.capacity_kg
            FROM sales sa
            JOIN inventory i ON sa.inventory_id = i.inventory_id
            JOIN suppliers s ON i.supplier_id = s.supplier_id
            JOIN cylinder_types ct ON i.type_id = ct.type_id
            ORDER BY sa.sale_date DESC, sa.sale_id DESC
            "#,
        )
        .fetch_all(&self.db)
        .await?;

        Ok(sales)
    }

    pub async fn get_sale(&self, sale_id: i64) -> AppResult<Sale> {
        Self::fetch_sale(&self.db, sale_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Sale".to_string()))
    }

    async fn fetch_sale<'e, E>(executor: E, sale_id: i64) -> AppResult<Option<Sale>>
    where
        E: PgExecutor<'e>,
    {
        let sale = sqlx::query_as::<_, Sale>(
            r#"
            SELECT sa.sale_id, sa.inventory_id, sa.quantity, sa.unit_price, sa.total_amount,
                   sa.sale_date, sa.customer_name, sa.customer_phone, sa.sold_by, sa.notes,
                   sa.created_at, s.supplier_name, ct.capacity_kg
            FROM sales sa
            JOIN inventory i ON sa.inventory_id = i.inventory_id
            JOIN suppliers s ON i.supplier_id = s.supplier_id
            JOIN cylinder_types ct ON i.type_id = ct.type_id
            WHERE sa.sale_id = $1
            "#,
        )
        .bind(sale_id)
        .fetch_optional(executor)
        .await?;

        Ok(sale)
    }
}
