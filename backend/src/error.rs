//! Error handling for the Gas Cylinder Inventory service
//!
//! Every failure is reported as JSON `{ "detail": ..., "code": ... }`.

use axum::{
    extract::rejection::{JsonRejection, PathRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use shared::{first_failure, Bucket, StockError};
use thiserror::Error;
use validator::ValidationErrors;

/// Application error types
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Validation error: {message}")]
    Validation { field: String, message: String },

    #[error("{0} not found")]
    NotFound(String),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Not enough {bucket} cylinders (available: {available}, requested: {requested})")]
    InsufficientStock {
        bucket: Bucket,
        available: i32,
        requested: i32,
    },

    #[error("Referential integrity violation: {0}")]
    ReferentialIntegrity(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Storage error: {0}")]
    Storage(#[source] sqlx::Error),
}

impl AppError {
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        AppError::Validation {
            field: field.into(),
            message: message.into(),
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Validation { .. }
            | AppError::InvalidArgument(_)
            | AppError::InsufficientStock { .. } => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::ReferentialIntegrity(_) | AppError::Conflict(_) => StatusCode::CONFLICT,
            AppError::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            AppError::Validation { .. } => "VALIDATION_ERROR",
            AppError::NotFound(_) => "NOT_FOUND",
            AppError::InvalidArgument(_) => "INVALID_ARGUMENT",
            AppError::InsufficientStock { .. } => "INSUFFICIENT_STOCK",
            AppError::ReferentialIntegrity(_) => "REFERENTIAL_INTEGRITY",
            AppError::Conflict(_) => "CONFLICT",
            AppError::Storage(_) => "STORAGE_ERROR",
        }
    }
}

impl From<sqlx::Error> for AppError {
    fn from(err: sqlx::Error) -> Self {
        if let sqlx::Error::Database(db_err) = &err {
            let message = db_err.message().to_string();
            match db_err.code().as_deref() {
                // foreign_key_violation
                Some("23503") => return AppError::ReferentialIntegrity(message),
                // unique_violation
                Some("23505") => return AppError::Conflict(message),
                // check_violation
                Some("23514") => {
                    let field = db_err.constraint().unwrap_or("record").to_string();
                    return AppError::Validation { field, message };
                }
                // data exceptions: numeric overflow, invalid text representation, ...
                Some(code) if code.starts_with("22") => {
                    return AppError::validation("record", message)
                }
                _ => {}
            }
        }
        AppError::Storage(err)
    }
}

impl From<StockError> for AppError {
    fn from(err: StockError) -> Self {
        match err {
            StockError::Insufficient {
                bucket,
                available,
                requested,
            } => AppError::InsufficientStock {
                bucket,
                available,
                requested,
            },
            StockError::NonPositiveQuantity(_) => AppError::validation("quantity", err.to_string()),
            StockError::SameBucket | StockError::UnknownBucket(_) | StockError::Overflow => {
                AppError::InvalidArgument(err.to_string())
            }
        }
    }
}

impl From<ValidationErrors> for AppError {
    fn from(errors: ValidationErrors) -> Self {
        match first_failure(&errors) {
            Some((field, message)) => AppError::Validation { field, message },
            None => AppError::validation("input", errors.to_string()),
        }
    }
}

/// Name of the field in a serde "missing field `x`" message
fn missing_field(message: &str) -> Option<&str> {
    let start = message.find("missing field `")? + "missing field `".len();
    let len = message[start..].find('`')?;
    Some(&message[start..start + len])
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        let message = rejection.body_text();
        match rejection {
            JsonRejection::JsonDataError(_)
            | JsonRejection::JsonSyntaxError(_)
            | JsonRejection::MissingJsonContentType(_) => {
                let field = missing_field(&message).unwrap_or("body").to_string();
                AppError::Validation { field, message }
            }
            _ => AppError::InvalidArgument(message),
        }
    }
}

impl From<QueryRejection> for AppError {
    fn from(rejection: QueryRejection) -> Self {
        let message = rejection.body_text();
        let field = missing_field(&message).unwrap_or("query").to_string();
        AppError::Validation { field, message }
    }
}

impl From<PathRejection> for AppError {
    fn from(rejection: PathRejection) -> Self {
        AppError::InvalidArgument(rejection.body_text())
    }
}

/// Error response body
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub detail: String,
    pub code: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub available: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub requested: Option<i32>,
}

impl From<&AppError> for ErrorResponse {
    fn from(err: &AppError) -> Self {
        let mut body = ErrorResponse {
            detail: err.to_string(),
            code: err.code(),
            field: None,
            available: None,
            requested: None,
        };

        match err {
            AppError::Validation { field, message } => {
                body.detail = message.clone();
                body.field = Some(field.clone());
            }
            AppError::InsufficientStock {
                available,
                requested,
                ..
            } => {
                body.available = Some(*available);
                body.requested = Some(*requested);
            }
            AppError::InvalidArgument(msg)
            | AppError::ReferentialIntegrity(msg)
            | AppError::Conflict(msg) => body.detail = msg.clone(),
            // storage internals stay in the logs
            AppError::Storage(_) => body.detail = "A database error occurred".to_string(),
            AppError::NotFound(_) => {}
        }

        body
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();

        if status.is_server_error() {
            tracing::error!("Error: {:?}", self);
        } else {
            tracing::warn!("Request rejected: {}", self);
        }

        (status, Json(ErrorResponse::from(&self))).into_response()
    }
}

/// Result type alias for handlers
pub type AppResult<T> = Result<T, AppError>;
