//! Cylinder type service

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Serialize;
use sqlx::PgPool;
use validator::Validate;

use crate::error::{AppError, AppResult};
use crate::models::CylinderTypeInput;

#[derive(Clone)]
pub struct CylinderTypeService {
    db: PgPool,
}

/// Cylinder type record
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct CylinderType {
    pub type_id: i64,
    pub capacity_kg: Decimal,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl CylinderTypeService {
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }

    pub async fn create_cylinder_type(&self, input: CylinderTypeInput) -> AppResult<CylinderType> {
        input.validate()?;

        let cylinder_type = sqlx::query_as::<_, CylinderType>(
            r#"
            INSERT INTO cylinder_types (capacity_kg, description)
            VALUES ($1, $2)
            RETURNING type_id, capacity_kg, description, created_at
            "#,
        )
        .bind(input.capacity_kg)
        .bind(&input.description)
        .fetch_one(&self.db)
        .await?;

        tracing::info!(type_id = cylinder_type.type_id, "Cylinder type created");
        Ok(cylinder_type)
    }

    pub async fn list_cylinder_types(&self) -> AppResult<Vec<CylinderType>> {
        let types = sqlx::query_as::<_, CylinderType>(
            r#"
            SELECT type_id, capacity_kg, description, created_at
            FROM cylinder_types
            ORDER BY type_id ASC
            "#,
        )
        .fetch_all(&self.db)
        .await?;

        Ok(types)
    }

    pub async fn get_cylinder_type(&self, type_id: i64) -> AppResult<CylinderType> {
        sqlx::query_as::<_, CylinderType>(
            "SELECT type_id, capacity_kg, description, created_at FROM cylinder_types WHERE type_id = $1",
        )
        .bind(type_id)
        .fetch_optional(&self.db)
        .await?
        .ok_or_else(|| AppError::NotFound("Cylinder type".to_string()))
    }

    pub async fn update_cylinder_type(
        &self,
        type_id: i64,
        input: CylinderTypeInput,
    ) -> AppResult<CylinderType> {
        input.validate()?;

        let cylinder_type = sqlx::query_as::<_, CylinderType>(
            r#"
            UPDATE cylinder_types
            SET capacity_kg = $1, description = $2
            WHERE type_id = $3
            RETURNING type_id, capacity_kg, description, created_at
            "#,
        )
        .bind(input.capacity_kg)
        .bind(&input.description)
        .bind(type_id)
        .fetch_optional(&self.db)
        .await?
        .ok_or_else(|| AppError::NotFound("Cylinder type".to_string()))?;

        tracing::info!(type_id, "Cylinder type updated");
        Ok(cylinder_type)
    }

    /// Delete a cylinder type that no inventory or restocking row uses
    pub async fn delete_cylinder_type(&self, type_id: i64) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM cylinder_types WHERE type_id = $1")
            .bind(type_id)
            .execute(&self.db)
            .await
            .map_err(|e| match AppError::from(e) {
                AppError::ReferentialIntegrity(_) => AppError::ReferentialIntegrity(format!(
                    "Cylinder type {} is referenced by inventory or restocking records",
                    type_id
                )),
                other => other,
            })?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Cylinder type".to_string()));
        }

        tracing::info!(type_id, "Cylinder type deleted");
        Ok(())
    }
}
