//! HTTP checkout gateway.
//!
//! Posts the generated code and customer contact to the issuing service's
//! `/api/token/store` endpoint.

use std::time::Duration;

use async_trait::async_trait;
use serde::Serialize;

use crate::domain::access_code::{AccessCode, CustomerContact};
use crate::ports::{CheckoutGateway, CheckoutGatewayError};

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct StoreRequest<'a> {
    value: &'a str,
    customer_details: CustomerDetailsBody<'a>,
}

#[derive(Debug, Serialize)]
struct CustomerDetailsBody<'a> {
    name: &'a str,
    location: &'a str,
    email: &'a str,
}

/// How long checkout waits for the issuing service before giving up.
pub const DEFAULT_CHECKOUT_TIMEOUT: Duration = Duration::from_secs(10);

/// Checkout gateway talking to the access code service over HTTP.
pub struct HttpCheckoutGateway {
    base_url: String,
    http_client: reqwest::Client,
}

impl HttpCheckoutGateway {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_timeout(base_url, DEFAULT_CHECKOUT_TIMEOUT)
    }

    pub fn with_timeout(base_url: impl Into<String>, timeout: Duration) -> Self {
        let http_client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .unwrap_or_default();
        Self::with_client(base_url, http_client)
    }

    pub fn with_client(base_url: impl Into<String>, http_client: reqwest::Client) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            base_url,
            http_client,
        }
    }

    fn store_url(&self) -> String {
        format!("{}/api/token/store", self.base_url)
    }
}

#[async_trait]
impl CheckoutGateway for HttpCheckoutGateway {
    async fn store_access_code(
        &self,
        code: &AccessCode,
        customer: &CustomerContact,
    ) -> Result<(), CheckoutGatewayError> {
        let body = StoreRequest {
            value: code.as_str(),
            customer_details: CustomerDetailsBody {
                name: customer.name(),
                location: customer.location(),
                email: customer.email().as_str(),
            },
        };

        let response = self
            .http_client
            .post(self.store_url())
            .json(&body)
            .send()
            .await
            .map_err(|e| CheckoutGatewayError::Unreachable(e.to_string()))?;

        let status = response.status();
        if status.is_success() {
            return Ok(());
        }

        let message = response
            .json::<serde_json::Value>()
            .await
            .ok()
            .and_then(|v| v.get("message").and_then(|m| m.as_str()).map(str::to_string))
            .unwrap_or_else(|| status.to_string());

        Err(CheckoutGatewayError::Rejected {
            status: status.as_u16(),
            message,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn store_url_ignores_trailing_slash() {
        let gateway = HttpCheckoutGateway::new("http://localhost:5000/");
        assert_eq!(gateway.store_url(), "http://localhost:5000/api/token/store");
    }

    #[test]
    fn body_uses_camel_case_customer_details() {
        let body = StoreRequest {
            value: "abc",
            customer_details: CustomerDetailsBody {
                name: "Asha",
                location: "Library",
                email: "asha@nitj.ac.in",
            },
        };
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["value"], "abc");
        assert_eq!(json["customerDetails"]["location"], "Library");
    }

    #[tokio::test]
    async fn unreachable_backend_is_reported() {
        let gateway = HttpCheckoutGateway::new("http://127.0.0.1:1");
        let contact = CustomerContact::try_new("Asha", "Library", "asha@nitj.ac.in").unwrap();

        let err = gateway
            .store_access_code(&AccessCode::generate(), &contact)
            .await
            .unwrap_err();
        assert!(matches!(err, CheckoutGatewayError::Unreachable(_)));
    }

    #[tokio::test]
    async fn hung_backend_times_out() {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let held = tokio::spawn(async move {
            let (socket, _) = listener.accept().await.unwrap();
            tokio::time::sleep(Duration::from_secs(30)).await;
            drop(socket);
        });

        let gateway =
            HttpCheckoutGateway::with_timeout(format!("http://{}", addr), Duration::from_millis(200));
        let contact = CustomerContact::try_new("Asha", "Library", "asha@nitj.ac.in").unwrap();

        let err = tokio::time::timeout(
            Duration::from_secs(5),
            gateway.store_access_code(&AccessCode::generate(), &contact),
        )
        .await
        .expect("gateway should give up on its own")
        .unwrap_err();

        assert!(matches!(err, CheckoutGatewayError::Unreachable(_)));
        held.abort();
    }
}
