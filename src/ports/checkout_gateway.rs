//! Checkout gateway port.
//!
//! How the ordering client hands a freshly generated access code to the
//! backend before showing the confirmation screen.

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::access_code::{AccessCode, CustomerContact};

/// Port used by the ordering client at checkout.
#[async_trait]
pub trait CheckoutGateway: Send + Sync {
    /// Stores `code` for `customer` and triggers the email.
    async fn store_access_code(
        &self,
        code: &AccessCode,
        customer: &CustomerContact,
    ) -> Result<(), CheckoutGatewayError>;
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CheckoutGatewayError {
    #[error("backend unreachable: {0}")]
    Unreachable(String),

    #[error("backend rejected access code ({status}): {message}")]
    Rejected { status: u16, message: String },
}
