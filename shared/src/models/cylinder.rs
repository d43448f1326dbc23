//! Cylinder type models

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::validation::validate_capacity;

/// Input for creating or replacing a cylinder type
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CylinderTypeInput {
    /// Gas capacity in kg (e.g. 11.5, 15, 48)
    #[validate(custom = "validate_capacity")]
    pub capacity_kg: Decimal,

    pub description: Option<String>,
}
