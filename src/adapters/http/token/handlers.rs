//! HTTP handlers for the access code endpoints.
//!
//! These handlers connect Axum routes to the application layer handlers.

use std::sync::Arc;
use std::time::Duration;

use axum::extract::rejection::JsonRejection;
use axum::extract::{Json, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;

use crate::application::handlers::access_code::{
    IssueAccessCodeCommand, IssueAccessCodeHandler, RedeemAccessCodeCommand,
    RedeemAccessCodeHandler,
};
use crate::domain::access_code::AccessCodeError;
use crate::ports::{AccessCodeNotifier, AccessCodeStore};

use super::dto::{
    ErrorResponse, StoreTokenRequest, StoreTokenResponse, VerifyTokenRequest, VerifyTokenResponse,
};

// ════════════════════════════════════════════════════════════════════════════════
// Application State
// ════════════════════════════════════════════════════════════════════════════════

/// Shared state for the access code routes.
#[derive(Clone)]
pub struct TokenAppState {
    pub store: Arc<dyn AccessCodeStore>,
    pub notifier: Arc<dyn AccessCodeNotifier>,
    /// Lifetime given to every newly issued code.
    pub ttl: Duration,
}

impl TokenAppState {
    pub fn new(
        store: Arc<dyn AccessCodeStore>,
        notifier: Arc<dyn AccessCodeNotifier>,
        ttl: Duration,
    ) -> Self {
        Self {
            store,
            notifier,
            ttl,
        }
    }

    pub fn issue_handler(&self) -> IssueAccessCodeHandler {
        IssueAccessCodeHandler::new(self.store.clone(), self.notifier.clone(), self.ttl)
    }

    pub fn redeem_handler(&self) -> RedeemAccessCodeHandler {
        RedeemAccessCodeHandler::new(self.store.clone())
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Command Handlers (POST endpoints)
// ════════════════════════════════════════════════════════════════════════════════

/// POST /api/token/store - Store a code and email it to the customer
pub async fn store_token(
    State(state): State<TokenAppState>,
    body: Result<Json<StoreTokenRequest>, JsonRejection>,
) -> Result<impl IntoResponse, TokenApiError> {
    // An unreadable body carries no code either
    let request = body.map(|Json(req)| req).unwrap_or_default();
    let details = request.customer_details.unwrap_or_default();

    let cmd = IssueAccessCodeCommand {
        value: request.value,
        customer_name: details.name,
        customer_location: details.location,
        customer_email: details.email,
    };

    state.issue_handler().handle(cmd).await?;

    Ok(Json(StoreTokenResponse::stored()))
}

/// POST /api/token/verify - Redeem a scanned code
pub async fn verify_token(
    State(state): State<TokenAppState>,
    body: Result<Json<VerifyTokenRequest>, JsonRejection>,
) -> Result<impl IntoResponse, TokenApiError> {
    let request = body.map(|Json(req)| req).unwrap_or_default();
    let cmd = RedeemAccessCodeCommand {
        value: request.value,
    };

    state.redeem_handler().handle(cmd).await?;

    Ok(Json(VerifyTokenResponse::matched()))
}

// ════════════════════════════════════════════════════════════════════════════════
// Error Handling
// ════════════════════════════════════════════════════════════════════════════════

/// API error wrapper for access code errors.
#[derive(Debug)]
pub struct TokenApiError(pub AccessCodeError);

impl From<AccessCodeError> for TokenApiError {
    fn from(err: AccessCodeError) -> Self {
        Self(err)
    }
}

impl IntoResponse for TokenApiError {
    fn into_response(self) -> axum::response::Response {
        let status = match &self.0 {
            AccessCodeError::MissingValue
            | AccessCodeError::InvalidValue { .. }
            | AccessCodeError::InvalidCustomer { .. } => StatusCode::BAD_REQUEST,
            AccessCodeError::AlreadyIssued(_) => StatusCode::CONFLICT,
            AccessCodeError::NotFound => StatusCode::NOT_FOUND,
            AccessCodeError::Infrastructure(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        if status.is_server_error() {
            tracing::error!(error = %self.0, "Access code request failed");
        }

        let body = match &self.0 {
            AccessCodeError::InvalidCustomer { field, .. } => ErrorResponse::with_details(
                self.0.code().to_string(),
                self.0.message(),
                serde_json::json!({ "field": field }),
            ),
            other => ErrorResponse::new(other.code().to_string(), other.message()),
        };
        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::access_code::AccessCode;

    fn status_of(err: AccessCodeError) -> StatusCode {
        TokenApiError(err).into_response().status()
    }

    #[test]
    fn error_statuses() {
        assert_eq!(status_of(AccessCodeError::MissingValue), StatusCode::BAD_REQUEST);
        assert_eq!(
            status_of(AccessCodeError::invalid_customer("email", "bad")),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            status_of(AccessCodeError::AlreadyIssued(AccessCode::generate())),
            StatusCode::CONFLICT
        );
        assert_eq!(status_of(AccessCodeError::NotFound), StatusCode::NOT_FOUND);
        assert_eq!(
            status_of(AccessCodeError::infrastructure("down")),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
