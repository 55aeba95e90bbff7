//! Axum router configuration for the access code endpoints.

use axum::{routing::post, Router};

use super::handlers::{store_token, verify_token, TokenAppState};

/// Create the access code router, mounted at `/api/token`.
///
/// # Routes
/// - `POST /store` - Store a code and email the customer
/// - `POST /verify` - Redeem a code (single use)
pub fn token_routes() -> Router<TokenAppState> {
    Router::new()
        .route("/store", post(store_token))
        .route("/verify", post(verify_token))
}
