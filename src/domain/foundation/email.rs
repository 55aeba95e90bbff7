//! Email address value object.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::ValidationError;

/// A syntactically plausible email address.
///
/// Accepts `local@domain.tld`: no whitespace, exactly one `@`, and a dot in
/// the domain with non-empty labels on both sides of it. Deliverability is
/// the mail provider's problem.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct EmailAddress(String);

impl EmailAddress {
    pub fn try_new(raw: &str) -> Result<Self, ValidationError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::empty_field("email"));
        }
        if trimmed.chars().any(char::is_whitespace) {
            return Err(ValidationError::invalid_format("email", "contains whitespace"));
        }

        let mut parts = trimmed.split('@');
        let (local, domain) = match (parts.next(), parts.next(), parts.next()) {
            (Some(local), Some(domain), None) => (local, domain),
            _ => {
                return Err(ValidationError::invalid_format(
                    "email",
                    "must contain exactly one @ symbol",
                ))
            }
        };

        if local.is_empty() {
            return Err(ValidationError::invalid_format("email", "missing local part"));
        }

        let has_dotted_domain = domain
            .char_indices()
            .filter(|(_, c)| *c == '.')
            .any(|(i, _)| i > 0 && i + 1 < domain.len());
        if !has_dotted_domain {
            return Err(ValidationError::invalid_format(
                "email",
                "domain must look like example.com",
            ));
        }

        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EmailAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<String> for EmailAddress {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::try_new(&value)
    }
}

impl From<EmailAddress> for String {
    fn from(email: EmailAddress) -> Self {
        email.0
    }
}
