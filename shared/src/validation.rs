//! Validation utilities for the Gas Cylinder Inventory service
//!
//! Field validators here plug into `#[derive(Validate)]` via `custom = "..."`.

use std::borrow::Cow;

use rust_decimal::Decimal;
use validator::{ValidationError, ValidationErrors};

/// Money and weights are stored with two decimal places
pub const MAX_SCALE: u32 = 2;

fn error(code: &'static str, message: &'static str) -> ValidationError {
    let mut err = ValidationError::new(code);
    err.message = Some(Cow::Borrowed(message));
    err
}

/// Reject names that are empty once surrounding whitespace is removed
pub fn validate_not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(error("blank", "Value cannot be blank"));
    }
    Ok(())
}

/// Validate phone number format.
/// Accepts digits with `+`, `-`, spaces and parentheses; 7 to 15 digits.
pub fn validate_phone(phone: &str) -> Result<(), ValidationError> {
    if !phone
        .chars()
        .all(|c| c.is_ascii_digit() || matches!(c, '+' | '-' | ' ' | '(' | ')'))
    {
        return Err(error("phone", "Phone number contains invalid characters"));
    }

    let digits = phone.chars().filter(|c| c.is_ascii_digit()).count();
    if !(7..=15).contains(&digits) {
        return Err(error("phone", "Phone number must have 7 to 15 digits"));
    }
    Ok(())
}

/// Validate a unit price: not negative, at most two decimal places
pub fn validate_unit_price(price: &Decimal) -> Result<(), ValidationError> {
    if price.is_sign_negative() && !price.is_zero() {
        return Err(error("unit_price", "Unit price cannot be negative"));
    }
    if price.normalize().scale() > MAX_SCALE {
        return Err(error("unit_price", "Unit price allows at most 2 decimal places"));
    }
    Ok(())
}

/// Validate a cylinder capacity in kg: positive, at most two decimal places
pub fn validate_capacity(capacity_kg: &Decimal) -> Result<(), ValidationError> {
    if *capacity_kg <= Decimal::ZERO {
        return Err(error("capacity_kg", "Capacity must be positive"));
    }
    if capacity_kg.normalize().scale() > MAX_SCALE {
        return Err(error("capacity_kg", "Capacity allows at most 2 decimal places"));
    }
    Ok(())
}

/// Pick a single reportable failure out of a validation result.
///
/// Field names are sorted so the same input always reports the same field.
pub fn first_failure(errors: &ValidationErrors) -> Option<(String, String)> {
    let field_errors = errors.field_errors();
    let mut fields: Vec<_> = field_errors.keys().copied().collect();
    fields.sort_unstable();

    let field = fields.first()?;
    let err = field_errors.get(field)?.first()?;
    let message = match &err.message {
        Some(message) => message.to_string(),
        None => format!("{} is invalid ({})", field, err.code),
    };
    Some((field.to_string(), message))
}
