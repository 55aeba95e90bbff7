//! Ordering controller errors.
//!
//! Messages are the ones shown to the customer.

use thiserror::Error;

use super::{MenuItemId, OrderView};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OrderingError {
    #[error("Please fill in all customer details")]
    IncompleteDetails,

    #[error("Please enter a valid email address")]
    InvalidEmail,

    #[error("Unknown delivery location: {0}")]
    UnknownLocation(String),

    #[error("Unknown menu item: {0:?}")]
    UnknownMenuItem(MenuItemId),

    #[error("Cart is empty")]
    EmptyCart,

    #[error("Cannot {action} from the {current:?} view")]
    InvalidView {
        current: OrderView,
        action: &'static str,
    },

    #[error("Your cart changed during checkout. Please generate the QR again.")]
    StaleCheckout,

    #[error("Unable to generate QR. Please try again.")]
    CheckoutFailed(String),
}

impl OrderingError {
    pub fn invalid_view(current: OrderView, action: &'static str) -> Self {
        OrderingError::InvalidView { current, action }
    }
}
