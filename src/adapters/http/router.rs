//! Top-level application router.
//!
//! Mounts every route group and wraps them in the shared middleware stack:
//! request id, tracing, timeout and CORS.

use std::time::Duration;

use axum::http::{HeaderName, HeaderValue, Method};
use axum::Router;
use tower::ServiceBuilder;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use super::health::health_routes;
use super::token::{token_routes, TokenAppState};

const REQUEST_ID_HEADER: &str = "x-request-id";

/// Middleware settings for [`app_router`].
#[derive(Debug, Clone)]
pub struct RouterOptions {
    /// Allowed browser origins. Empty allows any origin.
    pub cors_origins: Vec<String>,
    pub request_timeout: Duration,
}

impl Default for RouterOptions {
    fn default() -> Self {
        Self {
            cors_origins: Vec::new(),
            request_timeout: Duration::from_secs(30),
        }
    }
}

/// Builds the full HTTP application.
///
/// # Routes
/// - `POST /api/token/store`
/// - `POST /api/token/verify`
/// - `GET /v1/health`
pub fn app_router(state: TokenAppState, options: &RouterOptions) -> Router {
    let request_id = HeaderName::from_static(REQUEST_ID_HEADER);

    let middleware = ServiceBuilder::new()
        .layer(SetRequestIdLayer::new(request_id.clone(), MakeRequestUuid))
        .layer(TraceLayer::new_for_http())
        .layer(PropagateRequestIdLayer::new(request_id))
        .layer(TimeoutLayer::new(options.request_timeout))
        .layer(cors_layer(&options.cors_origins));

    Router::new()
        .nest("/api/token", token_routes())
        .nest("/v1", health_routes())
        .layer(middleware)
        .with_state(state)
}

fn cors_layer(origins: &[String]) -> CorsLayer {
    let layer = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers(Any)
        .max_age(Duration::from_secs(60 * 60));

    let allowed: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(origin = %origin, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    if allowed.is_empty() {
        layer.allow_origin(Any)
    } else {
        layer.allow_origin(AllowOrigin::list(allowed))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::email::LoggingNotifier;
    use crate::adapters::store::InMemoryAccessCodeStore;
    use axum::body::Body;
    use axum::http::{header, Request, StatusCode};
    use std::sync::Arc;
    use tower::ServiceExt;

    fn app(options: RouterOptions) -> Router {
        let state = TokenAppState::new(
            Arc::new(InMemoryAccessCodeStore::new()),
            Arc::new(LoggingNotifier::new()),
            Duration::from_secs(300),
        );
        app_router(state, &options)
    }

    #[tokio::test]
    async fn responses_carry_request_id() {
        let response = app(RouterOptions::default())
            .oneshot(Request::get("/v1/health").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert!(response.headers().contains_key(REQUEST_ID_HEADER));
    }

    #[tokio::test]
    async fn incoming_request_id_is_propagated() {
        let response = app(RouterOptions::default())
            .oneshot(
                Request::get("/v1/health")
                    .header(REQUEST_ID_HEADER, "req-42")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.headers()[REQUEST_ID_HEADER], "req-42");
    }

    #[tokio::test]
    async fn cors_allows_any_origin_by_default() {
        let response = app(RouterOptions::default())
            .oneshot(
                Request::get("/v1/health")
                    .header(header::ORIGIN, "http://localhost:5173")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN], "*");
    }

    #[tokio::test]
    async fn cors_echoes_listed_origin_only() {
        let options = RouterOptions {
            cors_origins: vec!["https://orders.example.com".to_string()],
            ..RouterOptions::default()
        };

        let allowed = app(options.clone())
            .oneshot(
                Request::get("/v1/health")
                    .header(header::ORIGIN, "https://orders.example.com")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(
            allowed.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN],
            "https://orders.example.com"
        );

        let denied = app(options)
            .oneshot(
                Request::get("/v1/health")
                    .header(header::ORIGIN, "https://evil.example.com")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert!(!denied
            .headers()
            .contains_key(header::ACCESS_CONTROL_ALLOW_ORIGIN));
    }

    #[tokio::test]
    async fn unknown_route_is_404() {
        let response = app(RouterOptions::default())
            .oneshot(Request::get("/nope").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
