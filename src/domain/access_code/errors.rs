//! Access code error types.
//!
//! # HTTP Status Mapping
//!
//! | Error | HTTP Status |
//! |-------|-------------|
//! | MissingValue | 400 |
//! | InvalidValue | 400 |
//! | InvalidCustomer | 400 |
//! | AlreadyIssued | 409 |
//! | NotFound | 404 |
//! | Infrastructure | 500 |

use crate::domain::foundation::{ErrorCode, ValidationError};

use super::AccessCode;

/// Errors raised while issuing or redeeming access codes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AccessCodeError {
    /// The request carried no code at all.
    MissingValue,

    /// The code was present but malformed.
    InvalidValue { reason: String },

    /// Customer details were missing or malformed.
    InvalidCustomer { field: String, reason: String },

    /// The code is already stored and awaiting redemption.
    AlreadyIssued(AccessCode),

    /// No unexpired, unredeemed code matched.
    NotFound,

    /// Store or transport failure.
    Infrastructure(String),
}

impl AccessCodeError {
    pub fn invalid_value(reason: impl Into<String>) -> Self {
        AccessCodeError::InvalidValue {
            reason: reason.into(),
        }
    }

    pub fn invalid_customer(field: impl Into<String>, reason: impl Into<String>) -> Self {
        AccessCodeError::InvalidCustomer {
            field: field.into(),
            reason: reason.into(),
        }
    }

    pub fn infrastructure(message: impl Into<String>) -> Self {
        AccessCodeError::Infrastructure(message.into())
    }

    /// Maps a code validation failure, treating an empty value as missing.
    pub fn from_code_validation(err: ValidationError) -> Self {
        match err {
            ValidationError::EmptyField { .. } => AccessCodeError::MissingValue,
            other => AccessCodeError::invalid_value(other.to_string()),
        }
    }

    /// Maps a customer validation failure.
    pub fn from_customer_validation(err: ValidationError) -> Self {
        AccessCodeError::invalid_customer(err.field().to_string(), err.to_string())
    }

    /// Returns the error code for this error.
    pub fn code(&self) -> ErrorCode {
        match self {
            AccessCodeError::MissingValue => ErrorCode::MissingValue,
            AccessCodeError::InvalidValue { .. } => ErrorCode::ValidationFailed,
            AccessCodeError::InvalidCustomer { .. } => ErrorCode::InvalidCustomer,
            AccessCodeError::AlreadyIssued(_) => ErrorCode::AccessCodeExists,
            AccessCodeError::NotFound => ErrorCode::NotFound,
            AccessCodeError::Infrastructure(_) => ErrorCode::CacheError,
        }
    }

    /// Returns a user-facing error message.
    pub fn message(&self) -> String {
        match self {
            AccessCodeError::MissingValue => "String required".to_string(),
            AccessCodeError::InvalidValue { reason } => format!("Invalid access code: {}", reason),
            AccessCodeError::InvalidCustomer { field, reason } => {
                format!("Invalid customer details ({}): {}", field, reason)
            }
            AccessCodeError::AlreadyIssued(_) => "Access code already issued".to_string(),
            AccessCodeError::NotFound => "Not found".to_string(),
            AccessCodeError::Infrastructure(msg) => format!("Error: {}", msg),
        }
    }

    /// Returns true if the caller may retry the same request.
    pub fn is_retryable(&self) -> bool {
        matches!(self, AccessCodeError::Infrastructure(_))
    }
}

impl std::fmt::Display for AccessCodeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for AccessCodeError {}
