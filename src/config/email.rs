//! Email configuration

use serde::Deserialize;
use std::time::Duration;

use super::error::ValidationError;

/// Which notifier delivers access codes
#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum EmailProvider {
    /// Write the email to the log instead of sending it
    #[default]
    Log,
    Mailtrap,
}

/// Email configuration (Mailtrap)
#[derive(Debug, Clone, Deserialize)]
pub struct EmailConfig {
    #[serde(default)]
    pub provider: EmailProvider,

    /// Mailtrap API token
    #[serde(default)]
    pub mailtrap_api_token: String,

    /// From email address
    #[serde(default = "default_from_email")]
    pub from_email: String,

    /// From name
    #[serde(default = "default_from_name")]
    pub from_name: String,

    #[serde(default = "default_subject")]
    pub subject: String,

    /// Mailtrap category attached to every send
    #[serde(default = "default_category")]
    pub category: String,

    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,

    /// qrserver-compatible image endpoint
    #[serde(default = "default_qr_service_url")]
    pub qr_service_url: String,

    /// Link shown under the QR image
    #[serde(default = "default_link_url")]
    pub link_url: String,

    /// Per-send HTTP timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

impl EmailConfig {
    /// Get formatted "From" header value
    pub fn from_header(&self) -> String {
        format!("{} <{}>", self.from_name, self.from_email)
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Validate email configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.provider == EmailProvider::Log {
            return Ok(());
        }
        if self.timeout_secs == 0 {
            return Err(ValidationError::InvalidTimeout);
        }
        if self.mailtrap_api_token.is_empty() {
            return Err(ValidationError::MissingRequired(
                "DELIVERY_BOT__EMAIL__MAILTRAP_API_TOKEN",
            ));
        }
        if !self.from_email.contains('@') {
            return Err(ValidationError::InvalidFromEmail);
        }
        if !is_http_url(&self.api_base_url) {
            return Err(ValidationError::InvalidUrl("email.api_base_url"));
        }
        if !is_http_url(&self.qr_service_url) {
            return Err(ValidationError::InvalidUrl("email.qr_service_url"));
        }
        Ok(())
    }
}

fn is_http_url(url: &str) -> bool {
    url.starts_with("https://") || url.starts_with("http://")
}

impl Default for EmailConfig {
    fn default() -> Self {
        Self {
            provider: EmailProvider::default(),
            mailtrap_api_token: String::new(),
            from_email: default_from_email(),
            from_name: default_from_name(),
            subject: default_subject(),
            category: default_category(),
            api_base_url: default_api_base_url(),
            qr_service_url: default_qr_service_url(),
            link_url: default_link_url(),
            timeout_secs: default_timeout(),
        }
    }
}

fn default_from_email() -> String {
    "hello@demomailtrap.co".to_string()
}

fn default_from_name() -> String {
    "Delivery Bot".to_string()
}

fn default_subject() -> String {
    "Your QR Code".to_string()
}

fn default_category() -> String {
    "Integration Test".to_string()
}

fn default_api_base_url() -> String {
    "https://send.api.mailtrap.io".to_string()
}

fn default_qr_service_url() -> String {
    "https://api.qrserver.com/v1/create-qr-code/".to_string()
}

fn default_link_url() -> String {
    "https://example.com".to_string()
}

fn default_timeout() -> u64 {
    10
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_email_config_defaults() {
        let config = EmailConfig::default();
        assert_eq!(config.provider, EmailProvider::Log);
        assert_eq!(config.from_name, "Delivery Bot");
        assert_eq!(config.subject, "Your QR Code");
        assert_eq!(config.category, "Integration Test");
    }

    #[test]
    fn test_from_header() {
        let config = EmailConfig {
            from_email: "orders@example.com".to_string(),
            ..Default::default()
        };
        assert_eq!(config.from_header(), "Delivery Bot <orders@example.com>");
    }

    #[test]
    fn test_log_provider_needs_no_token() {
        assert!(EmailConfig::default().validate().is_ok());
    }

    #[test]
    fn test_mailtrap_requires_token() {
        let config = EmailConfig {
            provider: EmailProvider::Mailtrap,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ValidationError::MissingRequired(_))
        ));
    }

    #[test]
    fn test_mailtrap_rejects_bad_from_email() {
        let config = EmailConfig {
            provider: EmailProvider::Mailtrap,
            mailtrap_api_token: "token".to_string(),
            from_email: "invalid-email".to_string(),
            ..Default::default()
        };
        assert_eq!(config.validate(), Err(ValidationError::InvalidFromEmail));
    }

    #[test]
    fn test_mailtrap_rejects_bad_api_url() {
        let config = EmailConfig {
            provider: EmailProvider::Mailtrap,
            mailtrap_api_token: "token".to_string(),
            api_base_url: "send.api.mailtrap.io".to_string(),
            ..Default::default()
        };
        assert_eq!(
            config.validate(),
            Err(ValidationError::InvalidUrl("email.api_base_url"))
        );
    }

    #[test]
    fn test_mailtrap_rejects_zero_timeout() {
        let config = EmailConfig {
            provider: EmailProvider::Mailtrap,
            mailtrap_api_token: "token".to_string(),
            timeout_secs: 0,
            ..Default::default()
        };
        assert_eq!(config.validate(), Err(ValidationError::InvalidTimeout));
        assert_eq!(EmailConfig::default().timeout(), Duration::from_secs(10));
    }

    #[test]
    fn test_valid_mailtrap_config() {
        let config = EmailConfig {
            provider: EmailProvider::Mailtrap,
            mailtrap_api_token: "token".to_string(),
            ..Default::default()
        };
        assert!(config.validate().is_ok());
    }
}
