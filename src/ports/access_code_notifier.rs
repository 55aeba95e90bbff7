//! Access code notification port.
//!
//! Delivers the issued code to the customer, typically as an email with a
//! QR image.

use async_trait::async_trait;

use crate::domain::access_code::{AccessCode, CustomerContact};

/// Port for telling a customer about their access code.
#[async_trait]
pub trait AccessCodeNotifier: Send + Sync {
    /// Sends `code` to `contact`.
    async fn send_access_code(
        &self,
        code: &AccessCode,
        contact: &CustomerContact,
    ) -> Result<(), NotificationError>;
}

/// Notification error categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationErrorCode {
    /// Provider could not be reached.
    NetworkError,
    /// Provider rejected our credentials.
    AuthenticationError,
    /// Provider rejected the message.
    Rejected,
    /// Anything else the provider reported.
    ProviderError,
}

impl NotificationErrorCode {
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            NotificationErrorCode::NetworkError | NotificationErrorCode::ProviderError
        )
    }
}

impl std::fmt::Display for NotificationErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            NotificationErrorCode::NetworkError => "network_error",
            NotificationErrorCode::AuthenticationError => "authentication_error",
            NotificationErrorCode::Rejected => "rejected",
            NotificationErrorCode::ProviderError => "provider_error",
        };
        write!(f, "{}", s)
    }
}

/// Error from a notification provider.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotificationError {
    pub code: NotificationErrorCode,
    pub message: String,
    /// HTTP status returned by the provider, if any.
    pub status: Option<u16>,
}

impl NotificationError {
    pub fn new(code: NotificationErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            status: None,
        }
    }

    pub fn with_status(mut self, status: u16) -> Self {
        self.status = Some(status);
        self
    }

    pub fn network(message: impl Into<String>) -> Self {
        Self::new(NotificationErrorCode::NetworkError, message)
    }

    pub fn authentication(message: impl Into<String>) -> Self {
        Self::new(NotificationErrorCode::AuthenticationError, message)
    }

    pub fn rejected(message: impl Into<String>) -> Self {
        Self::new(NotificationErrorCode::Rejected, message)
    }

    pub fn provider(message: impl Into<String>) -> Self {
        Self::new(NotificationErrorCode::ProviderError, message)
    }

    pub fn is_retryable(&self) -> bool {
        self.code.is_retryable()
    }
}

impl std::fmt::Display for NotificationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.code, self.message)
    }
}

impl std::error::Error for NotificationError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn retryable_codes() {
        assert!(NotificationError::network("timeout").is_retryable());
        assert!(NotificationError::provider("500").is_retryable());
        assert!(!NotificationError::authentication("bad token").is_retryable());
        assert!(!NotificationError::rejected("bad address").is_retryable());
    }

    #[test]
    fn display_includes_code() {
        let err = NotificationError::rejected("invalid recipient");
        assert_eq!(err.to_string(), "rejected: invalid recipient");
    }
}
