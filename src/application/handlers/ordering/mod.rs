//! Ordering handlers.

mod checkout_order;

pub use checkout_order::CheckoutOrderHandler;
