//! Access code domain module.
//!
//! A short-lived, single-use token issued at checkout and redeemed by the
//! pickup device.
//!
//! # Lifecycle
//!
//! ```text
//! issue ──► stored ──► redeemed (deleted)
//!              │
//!              └─────► expired (TTL elapsed)
//! ```
//!
//! # Module Structure
//!
//! - `code` - AccessCode value object
//! - `record` - AccessTokenRecord with TTL arithmetic
//! - `contact` - CustomerContact the code is emailed to
//! - `errors` - AccessCodeError with HTTP mapping

mod code;
mod contact;
mod errors;
mod record;

pub use code::{AccessCode, MAX_ACCESS_CODE_LEN};
pub use contact::CustomerContact;
pub use errors::AccessCodeError;
pub use record::{AccessTokenRecord, DEFAULT_ACCESS_CODE_TTL};
