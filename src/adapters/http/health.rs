//! Liveness endpoint.

use axum::{routing::get, Json, Router};

use super::token::HealthResponse;

/// GET /v1/health
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        message: "ok".to_string(),
    })
}

pub fn health_routes<S>() -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    Router::new().route("/health", get(health))
}
