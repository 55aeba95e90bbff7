//! CheckoutOrderHandler - Moves an ordering session from the cart to confirmation.
//!
//! Generates the access code locally, hands it to the backend through the
//! checkout gateway, and only then shows the confirmation screen.

use std::sync::Arc;

use crate::domain::foundation::Timestamp;
use crate::domain::ordering::{OrderReceipt, OrderSession, OrderingError};
use crate::ports::CheckoutGateway;

/// Handler for the "Generate QR" action on the cart screen.
pub struct CheckoutOrderHandler {
    gateway: Arc<dyn CheckoutGateway>,
}

impl CheckoutOrderHandler {
    pub fn new(gateway: Arc<dyn CheckoutGateway>) -> Self {
        Self { gateway }
    }

    /// On failure the session stays on the cart so the customer can retry.
    pub async fn handle(&self, session: &mut OrderSession) -> Result<OrderReceipt, OrderingError> {
        let pending = session.prepare_checkout(Timestamp::now())?;

        if let Err(e) = self
            .gateway
            .store_access_code(&pending.access_code, &pending.customer)
            .await
        {
            tracing::warn!(
                order_number = %pending.order_number,
                error = %e,
                "Checkout failed to store access code"
            );
            return Err(OrderingError::CheckoutFailed(e.to_string()));
        }

        tracing::info!(
            order_number = %pending.order_number,
            total = pending.total,
            "Order checked out"
        );

        session.confirm_checkout(pending).cloned()
    }
}
