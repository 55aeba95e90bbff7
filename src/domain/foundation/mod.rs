//! Foundation module - Shared domain primitives.
//!
//! Contains value objects and error types that form the vocabulary
//! of the Delivery Bot domain.

mod email;
mod errors;
mod timestamp;

pub use email::EmailAddress;
pub use errors::{ErrorCode, ValidationError};
pub use timestamp::Timestamp;
