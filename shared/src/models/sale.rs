//! Sales models

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::validation::{validate_phone, validate_unit_price};

/// Input for selling full cylinders out of one ledger row
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct SaleInput {
    #[validate(range(min = 1, message = "Inventory id must be positive"))]
    pub inventory_id: i64,

    #[validate(range(min = 1, message = "Quantity must be positive"))]
    pub quantity: i32,

    #[validate(custom = "validate_unit_price")]
    pub unit_price: Decimal,

    /// Defaults to today (UTC) when omitted
    pub sale_date: Option<NaiveDate>,

    #[validate(length(max = 100, message = "Customer name must be at most 100 characters"))]
    pub customer_name: Option<String>,

    #[validate(custom = "validate_phone")]
    pub customer_phone: Option<String>,

    #[validate(length(max = 100, message = "Sold by must be at most 100 characters"))]
    pub sold_by: Option<String>,

    pub notes: Option<String>,
}
