//! Data Transfer Objects for the access code endpoints.
//!
//! Field names match what the ordering client and pickup device already
//! send, so request bodies use `customerDetails` in camelCase.

use serde::{Deserialize, Serialize};

// ════════════════════════════════════════════════════════════════════════════════
// Request DTOs
// ════════════════════════════════════════════════════════════════════════════════

/// Request to store a freshly generated access code.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoreTokenRequest {
    #[serde(default)]
    pub value: Option<String>,
    #[serde(default)]
    pub customer_details: Option<CustomerDetailsRequest>,
}

/// Customer contact carried alongside the code.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CustomerDetailsRequest {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub email: String,
}

/// Request to redeem a scanned access code.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct VerifyTokenRequest {
    #[serde(default)]
    pub value: Option<String>,
}

// ════════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, Serialize)]
pub struct StoreTokenResponse {
    pub success: bool,
    pub message: String,
}

impl StoreTokenResponse {
    pub fn stored() -> Self {
        Self {
            success: true,
            message: "String stored".to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct VerifyTokenResponse {
    pub success: bool,
    pub matched: bool,
}

impl VerifyTokenResponse {
    pub fn matched() -> Self {
        Self {
            success: true,
            matched: true,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub message: String,
}

/// Error response body.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    /// Always false; kept for clients that branch on `success`.
    pub success: bool,
    /// Error code for programmatic handling.
    pub error_code: String,
    /// Human-readable error message.
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl ErrorResponse {
    pub fn new(error_code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            success: false,
            error_code: error_code.into(),
            message: message.into(),
            details: None,
        }
    }

    pub fn with_details(
        error_code: impl Into<String>,
        message: impl Into<String>,
        details: serde_json::Value,
    ) -> Self {
        Self {
            details: Some(details),
            ..Self::new(error_code, message)
        }
    }
}
