//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `AccessCodeStore` - Transient, TTL-bound code storage
//! - `AccessCodeNotifier` - Delivers the code to the customer
//! - `CheckoutGateway` - Client-side call into the issuing endpoint

mod access_code_notifier;
mod access_code_store;
mod checkout_gateway;

pub use access_code_notifier::{AccessCodeNotifier, NotificationError, NotificationErrorCode};
pub use access_code_store::AccessCodeStore;
pub use checkout_gateway::{CheckoutGateway, CheckoutGatewayError};
