//! Logging notifier for local development.
//!
//! Writes the QR link to the log instead of sending an email.

use async_trait::async_trait;

use crate::domain::access_code::{AccessCode, CustomerContact};
use crate::domain::ordering::qr_image_url;
use crate::ports::{AccessCodeNotifier, NotificationError};

use super::template::EMAIL_QR_SIZE;

#[derive(Debug, Clone, Default)]
pub struct LoggingNotifier;

impl LoggingNotifier {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl AccessCodeNotifier for LoggingNotifier {
    async fn send_access_code(
        &self,
        code: &AccessCode,
        contact: &CustomerContact,
    ) -> Result<(), NotificationError> {
        tracing::info!(
            to = %contact.email(),
            name = %contact.name(),
            code = %code.redacted(),
            qr_url = %qr_image_url(code.as_str(), EMAIL_QR_SIZE),
            "Access code email (not sent, logging provider)"
        );
        Ok(())
    }
}
