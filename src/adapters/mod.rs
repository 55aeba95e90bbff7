//! Adapters - Implementations of port interfaces.
//!
//! - `store` - Access code storage (Redis, in-memory)
//! - `email` - Access code delivery (Mailtrap, logging)
//! - `checkout` - Ordering client's call into the issuing service
//! - `http` - Axum routes and middleware

pub mod checkout;
pub mod email;
pub mod http;
pub mod store;

pub use checkout::HttpCheckoutGateway;
pub use email::{LoggingNotifier, MailtrapConfig, MailtrapNotifier};
pub use store::{InMemoryAccessCodeStore, RedisAccessCodeStore};
