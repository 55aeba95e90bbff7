//! Access code value object.
//!
//! The random identifier a customer receives as a QR image and presents
//! to the pickup device.
//!
//! # Validation Rules
//!
//! - Surrounding whitespace is trimmed
//! - Must not be empty after trimming
//! - At most 128 characters
//! - No whitespace or control characters inside the code

use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::foundation::ValidationError;

/// Maximum accepted length for a client-supplied code.
pub const MAX_ACCESS_CODE_LEN: usize = 128;

/// A validated single-use access code.
///
/// Codes generated by this crate are UUID v4 strings in canonical
/// hyphenated lowercase form, but any value passing validation is accepted
/// so older clients keep working.
///
/// # Example
///
/// ```ignore
/// let code = AccessCode::try_new("  9b2f...  ")?;
/// assert_eq!(code.as_str(), "9b2f...");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct AccessCode(String);

impl AccessCode {
    /// Generates a fresh random access code.
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    /// Creates an AccessCode from untrusted input.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if the value is empty, too long, or
    /// contains whitespace or control characters.
    pub fn try_new(raw: &str) -> Result<Self, ValidationError> {
        let trimmed = raw.trim();

        if trimmed.is_empty() {
            return Err(ValidationError::empty_field("value"));
        }

        let len = trimmed.chars().count();
        if len > MAX_ACCESS_CODE_LEN {
            return Err(ValidationError::too_long("value", MAX_ACCESS_CODE_LEN, len));
        }

        if trimmed
            .chars()
            .any(|c| c.is_whitespace() || c.is_control())
        {
            return Err(ValidationError::invalid_format(
                "value",
                "must not contain whitespace or control characters",
            ));
        }

        Ok(Self(trimmed.to_string()))
    }

    /// Returns the code as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Short prefix safe to write to logs.
    pub fn redacted(&self) -> String {
        let prefix: String = self.0.chars().take(8).collect();
        format!("{}…", prefix)
    }
}

impl fmt::Display for AccessCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<String> for AccessCode {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::try_new(&value)
    }
}

impl From<AccessCode> for String {
    fn from(code: AccessCode) -> Self {
        code.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generated_codes_are_uuid_v4() {
        let code = AccessCode::generate();
        let parsed = Uuid::parse_str(code.as_str()).unwrap();
        assert_eq!(parsed.get_version_num(), 4);
        assert_eq!(code.as_str(), code.as_str().to_lowercase());
    }

    #[test]
    fn generated_codes_differ() {
        assert_ne!(AccessCode::generate(), AccessCode::generate());
    }

    #[test]
    fn try_new_trims_surrounding_whitespace() {
        let code = AccessCode::try_new("  abc-123\n").unwrap();
        assert_eq!(code.as_str(), "abc-123");
    }

    #[test]
    fn try_new_rejects_empty() {
        assert_eq!(
            AccessCode::try_new(""),
            Err(ValidationError::empty_field("value"))
        );
        assert_eq!(
            AccessCode::try_new("   "),
            Err(ValidationError::empty_field("value"))
        );
    }

    #[test]
    fn try_new_rejects_inner_whitespace() {
        assert!(matches!(
            AccessCode::try_new("abc 123"),
            Err(ValidationError::InvalidFormat { .. })
        ));
    }

    #[test]
    fn try_new_rejects_overlong_values() {
        let long = "a".repeat(MAX_ACCESS_CODE_LEN + 1);
        assert!(matches!(
            AccessCode::try_new(&long),
            Err(ValidationError::TooLong { .. })
        ));
        assert!(AccessCode::try_new(&"a".repeat(MAX_ACCESS_CODE_LEN)).is_ok());
    }

    #[test]
    fn redacted_keeps_only_prefix() {
        let code = AccessCode::try_new("0123456789abcdef").unwrap();
        assert_eq!(code.redacted(), "01234567…");
    }

    #[test]
    fn deserializes_through_validation() {
        let code: AccessCode = serde_json::from_str("\" abc \"").unwrap();
        assert_eq!(code.as_str(), "abc");
        assert!(serde_json::from_str::<AccessCode>("\"\"").is_err());
    }
}
