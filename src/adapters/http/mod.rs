//! HTTP adapters - REST API implementations.

pub mod health;
pub mod router;
pub mod token;

pub use router::{app_router, RouterOptions};
pub use token::{token_routes, TokenAppState};
