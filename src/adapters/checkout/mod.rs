//! Checkout gateway adapters.

mod http_gateway;

pub use http_gateway::{HttpCheckoutGateway, DEFAULT_CHECKOUT_TIMEOUT};
