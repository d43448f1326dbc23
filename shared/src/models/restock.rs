//! Restocking models

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::validation::validate_unit_price;

/// Input for recording a delivery of full cylinders from a supplier
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RestockInput {
    #[validate(range(min = 1, message = "Supplier id must be positive"))]
    pub supplier_id: i64,

    #[validate(range(min = 1, message = "Cylinder type id must be positive"))]
    pub type_id: i64,

    #[validate(range(min = 1, message = "Quantity must be positive"))]
    pub quantity: i32,

    #[validate(custom = "validate_unit_price")]
    pub unit_price: Decimal,

    /// Defaults to today (UTC) when omitted
    pub restock_date: Option<NaiveDate>,

    #[validate(length(max = 100, message = "Received by must be at most 100 characters"))]
    pub received_by: Option<String>,

    pub notes: Option<String>,
}
