//! HTTP adapter for access code endpoints.
//!
//! - `POST /api/token/store` - Store a code with TTL and email it
//! - `POST /api/token/verify` - Verify and delete a code

pub mod dto;
pub mod handlers;
pub mod routes;

pub use dto::*;
pub use handlers::{store_token, verify_token, TokenApiError, TokenAppState};
pub use routes::token_routes;
