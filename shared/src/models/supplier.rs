//! Supplier models

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::validation::{validate_not_blank, validate_phone};

/// Input for creating or replacing a supplier.
///
/// Updates replace every mutable field, so the same shape serves both.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct SupplierInput {
    #[validate(
        length(min = 1, max = 100, message = "Supplier name must be 1 to 100 characters"),
        custom = "validate_not_blank"
    )]
    pub supplier_name: String,

    #[validate(length(max = 100, message = "Contact person must be at most 100 characters"))]
    pub contact_person: Option<String>,

    #[validate(custom = "validate_phone")]
    pub phone: String,

    #[validate(email(message = "Invalid email format"))]
    pub email: Option<String>,

    pub address: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn supplier() -> SupplierInput {
        SupplierInput {
            supplier_name: "Northern Gas Co".to_string(),
            contact_person: Some("Dana".to_string()),
            phone: "0812345678".to_string(),
            email: Some("orders@northgas.example".to_string()),
            address: None,
        }
    }

    #[test]
    fn test_valid_supplier() {
        assert!(supplier().validate().is_ok());
    }

    #[test]
    fn test_blank_name_rejected() {
        let input = SupplierInput {
            supplier_name: "  ".to_string(),
            ..supplier()
        };
        let errors = input.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("supplier_name"));
    }

    #[test]
    fn test_bad_email_rejected() {
        let input = SupplierInput {
            email: Some("not-an-email".to_string()),
            ..supplier()
        };
        assert!(input.validate().is_err());
    }

    #[test]
    fn test_missing_optional_fields_ok() {
        let input: SupplierInput =
            serde_json::from_str(r#"{"supplier_name":"Acme","phone":"555-0100-22"}"#).unwrap();
        assert!(input.validate().is_ok());
        assert!(input.email.is_none());
    }
}
