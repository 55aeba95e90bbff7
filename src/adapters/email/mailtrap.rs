//! Mailtrap notifier adapter.
//!
//! Sends the access code QR email through the Mailtrap send API.
//!
//! # Configuration
//!
//! ```ignore
//! let config = MailtrapConfig::new(api_token, "orders@example.com");
//! let notifier = MailtrapNotifier::new(config);
//! ```

use std::time::Duration;

use async_trait::async_trait;
use secrecy::{ExposeSecret, SecretString};
use serde::Serialize;

use crate::domain::access_code::{AccessCode, CustomerContact};
use crate::domain::ordering::qr_image_url_with_base;
use crate::ports::{AccessCodeNotifier, NotificationError};

use super::template::{render_access_code_email, EMAIL_QR_SIZE};

/// Mailtrap sender configuration.
#[derive(Clone)]
pub struct MailtrapConfig {
    api_token: SecretString,
    from_email: String,
    from_name: String,
    subject: String,
    category: String,
    api_base_url: String,
    qr_service_url: String,
    link_url: String,
    timeout: Duration,
}

impl MailtrapConfig {
    pub fn new(api_token: impl Into<String>, from_email: impl Into<String>) -> Self {
        Self {
            api_token: SecretString::new(api_token.into()),
            from_email: from_email.into(),
            from_name: "Delivery Bot".to_string(),
            subject: "Your QR Code".to_string(),
            category: "Integration Test".to_string(),
            api_base_url: "https://send.api.mailtrap.io".to_string(),
            qr_service_url: "https://api.qrserver.com/v1/create-qr-code/".to_string(),
            link_url: "https://example.com".to_string(),
            timeout: Duration::from_secs(10),
        }
    }

    pub fn with_from_name(mut self, name: impl Into<String>) -> Self {
        self.from_name = name.into();
        self
    }

    pub fn with_subject(mut self, subject: impl Into<String>) -> Self {
        self.subject = subject.into();
        self
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    /// Set a custom API base URL (for testing).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.api_base_url = url.into();
        self
    }

    pub fn with_qr_service_url(mut self, url: impl Into<String>) -> Self {
        self.qr_service_url = url.into();
        self
    }

    pub fn with_link_url(mut self, url: impl Into<String>) -> Self {
        self.link_url = url.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

#[derive(Debug, Serialize)]
struct SendRequest<'a> {
    from: Address<'a>,
    to: Vec<Address<'a>>,
    subject: &'a str,
    html: String,
    category: &'a str,
}

#[derive(Debug, Serialize)]
struct Address<'a> {
    email: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    name: Option<&'a str>,
}

/// Email notifier backed by Mailtrap.
pub struct MailtrapNotifier {
    config: MailtrapConfig,
    http_client: reqwest::Client,
}

impl MailtrapNotifier {
    pub fn new(config: MailtrapConfig) -> Self {
        let http_client = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .unwrap_or_default();

        Self {
            config,
            http_client,
        }
    }

    fn build_request<'a>(&'a self, code: &AccessCode, contact: &'a CustomerContact) -> SendRequest<'a> {
        let qr_url = qr_image_url_with_base(&self.config.qr_service_url, code.as_str(), EMAIL_QR_SIZE);

        SendRequest {
            from: Address {
                email: &self.config.from_email,
                name: Some(&self.config.from_name),
            },
            to: vec![Address {
                email: contact.email().as_str(),
                name: None,
            }],
            subject: &self.config.subject,
            html: render_access_code_email(contact.name(), &qr_url, &self.config.link_url),
            category: &self.config.category,
        }
    }
}

#[async_trait]
impl AccessCodeNotifier for MailtrapNotifier {
    async fn send_access_code(
        &self,
        code: &AccessCode,
        contact: &CustomerContact,
    ) -> Result<(), NotificationError> {
        let request = self.build_request(code, contact);

        let response = self
            .http_client
            .post(format!("{}/api/send", self.config.api_base_url))
            .bearer_auth(self.config.api_token.expose_secret())
            .json(&request)
            .send()
            .await
            .map_err(|e| NotificationError::network(e.to_string()))?;

        let status = response.status();
        if status.is_success() {
            tracing::debug!(code = %code.redacted(), "Access code email accepted by Mailtrap");
            return Ok(());
        }

        let body = response.text().await.unwrap_or_default();
        tracing::warn!(status = status.as_u16(), body = %body, "Mailtrap rejected send request");

        let err = match status.as_u16() {
            401 | 403 => NotificationError::authentication(body),
            400 | 422 => NotificationError::rejected(body),
            _ => NotificationError::provider(body),
        };
        Err(err.with_status(status.as_u16()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::NotificationErrorCode;

    fn contact() -> CustomerContact {
        CustomerContact::try_new("Asha", "MBH B", "asha@nitj.ac.in").unwrap()
    }

    #[test]
    fn request_carries_sender_and_recipient() {
        let notifier = MailtrapNotifier::new(MailtrapConfig::new("token", "bot@example.com"));
        let contact = contact();
        let code = AccessCode::try_new("abc123").unwrap();

        let request = notifier.build_request(&code, &contact);
        let json = serde_json::to_value(&request).unwrap();

        assert_eq!(json["from"]["email"], "bot@example.com");
        assert_eq!(json["from"]["name"], "Delivery Bot");
        assert_eq!(json["to"][0]["email"], "asha@nitj.ac.in");
        assert!(json["to"][0].get("name").is_none());
        assert_eq!(json["subject"], "Your QR Code");
        assert_eq!(json["category"], "Integration Test");
    }

    #[test]
    fn html_embeds_encoded_qr_url() {
        let notifier = MailtrapNotifier::new(MailtrapConfig::new("token", "bot@example.com"));
        let contact = contact();
        let code = AccessCode::try_new("a/b").unwrap();

        let request = notifier.build_request(&code, &contact);
        assert!(request
            .html
            .contains("https://api.qrserver.com/v1/create-qr-code/?size=280x280&amp;data=a%2Fb"));
        assert!(request.html.contains("Hello Asha, Your QR Code"));
    }

    #[test]
    fn builder_overrides_defaults() {
        let config = MailtrapConfig::new("token", "bot@example.com")
            .with_from_name("Robot")
            .with_subject("Pickup code")
            .with_category("Orders")
            .with_link_url("https://orders.example.com");
        let notifier = MailtrapNotifier::new(config);
        let contact = contact();
        let code = AccessCode::try_new("xyz").unwrap();

        let request = notifier.build_request(&code, &contact);
        assert_eq!(request.from.name, Some("Robot"));
        assert_eq!(request.subject, "Pickup code");
        assert_eq!(request.category, "Orders");
        assert!(request.html.contains("https://orders.example.com"));
    }

    #[tokio::test]
    async fn unreachable_provider_is_network_error() {
        let config = MailtrapConfig::new("token", "bot@example.com").with_base_url("http://127.0.0.1:1");
        let notifier = MailtrapNotifier::new(config);

        let err = notifier
            .send_access_code(&AccessCode::try_new("abc").unwrap(), &contact())
            .await
            .unwrap_err();

        assert_eq!(err.code, NotificationErrorCode::NetworkError);
        assert!(err.is_retryable());
    }

    #[tokio::test]
    async fn stalled_provider_times_out() {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let held = tokio::spawn(async move {
            let (socket, _) = listener.accept().await.unwrap();
            tokio::time::sleep(Duration::from_secs(30)).await;
            drop(socket);
        });

        let config = MailtrapConfig::new("token", "bot@example.com")
            .with_base_url(format!("http://{}", addr))
            .with_timeout(Duration::from_millis(200));
        let notifier = MailtrapNotifier::new(config);

        let err = tokio::time::timeout(
            Duration::from_secs(5),
            notifier.send_access_code(&AccessCode::try_new("abc").unwrap(), &contact()),
        )
        .await
        .expect("send should give up on its own")
        .unwrap_err();

        assert_eq!(err.code, NotificationErrorCode::NetworkError);
        held.abort();
    }
}
