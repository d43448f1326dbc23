//! Supplier service: plain record storage for cylinder suppliers

use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::PgPool;
use validator::Validate;

use crate::error::{AppError, AppResult};
use crate::models::SupplierInput;

/// Supplier service for managing supplier records
#[derive(Clone)]
pub struct SupplierService {
    db: PgPool,
}

/// Supplier record
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct Supplier {
    pub supplier_id: i64,
    pub supplier_name: String,
    pub contact_person: Option<String>,
    pub phone: String,
    pub email: Option<String>,
    pub address: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl SupplierService {
    /// Create a new SupplierService instance
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }

    /// Create a supplier
    pub async fn create_supplier(&self, input: SupplierInput) -> AppResult<Supplier> {
        input.validate()?;

        let supplier = sqlx::query_as::<_, Supplier>(
            r#"
            INSERT INTO suppliers (supplier_name, contact_person, phone, email, address)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING supplier_id, supplier_name, contact_person, phone, email, address,
                      created_at, updated_at
            "#,
        )
        .bind(input.supplier_name.trim())
        .bind(&input.contact_person)
        .bind(&input.phone)
        .bind(&input.email)
        .bind(&input.address)
        .fetch_one(&self.db)
        .await?;

        tracing::info!(supplier_id = supplier.supplier_id, "Supplier created");
        Ok(supplier)
    }

    /// List all suppliers in insertion order
    pub async fn list_suppliers(&self) -> AppResult<Vec<Supplier>> {
        let suppliers = sqlx::query_as::<_, Supplier>(
            r#"
            SELECT supplier_id, supplier_name, contact_person, phone, email, address,
                   created_at, updated_at
            FROM suppliers
            ORDER BY supplier_id ASC
            "#,
        )
        .fetch_all(&self.db)
        .await?;

        Ok(suppliers)
    }

    /// Get a supplier by ID
    pub async fn get_supplier(&self, supplier_id: i64) -> AppResult<Supplier> {
        sqlx::query_as::<_, Supplier>(
            r#"
            SELECT supplier_id, supplier_name, contact_person, phone, email, address,
                   created_at, updated_at
            FROM suppliers
            WHERE supplier_id = $1
            "#,
        )
        .bind(supplier_id)
        .fetch_optional(&self.db)
        .await?
        .ok_or_else(|| AppError::NotFound("Supplier".to_string()))
    }

    /// Replace every mutable field of a supplier
    pub async fn update_supplier(
        &self,
        supplier_id: i64,
        input: SupplierInput,
    ) -> AppResult<Supplier> {
        input.validate()?;

        let supplier = sqlx::query_as::<_, Supplier>(
            r#"
            UPDATE suppliers
            SET supplier_name = $1, contact_person = $2, phone = $3, email = $4, address = $5,
                updated_at = NOW()
            WHERE supplier_id = $6
            RETURNING supplier_id, supplier_name, contact_person, phone, email, address,
                      created_at, updated_at
            "#,
        )
        .bind(input.supplier_name.trim())
        .bind(&input.contact_person)
        .bind(&input.phone)
        .bind(&input.email)
        .bind(&input.address)
        .bind(supplier_id)
        .fetch_optional(&self.db)
        .await?
        .ok_or_else(|| AppError::NotFound("Supplier".to_string()))?;

        tracing::info!(supplier_id, "Supplier updated");
        Ok(supplier)
    }

    /// Delete a supplier.
    ///
    /// Suppliers still referenced by inventory or restocking rows are kept and
    /// the call fails with a referential integrity error.
    pub async fn delete_supplier(&self, supplier_id: i64) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM suppliers WHERE supplier_id = $1")
            .bind(supplier_id)
            .execute(&self.db)
            .await
            .map_err(|e| match AppError::from(e) {
                AppError::ReferentialIntegrity(_) => AppError::ReferentialIntegrity(format!(
                    "Supplier {} is referenced by inventory or restocking records",
                    supplier_id
                )),
                other => other,
            })?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Supplier".to_string()));
        }

        tracing::info!(supplier_id, "Supplier deleted");
        Ok(())
    }
}
