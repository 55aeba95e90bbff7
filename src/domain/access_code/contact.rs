//! Customer contact details attached to an issued access code.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{EmailAddress, ValidationError};

/// Who receives the access code email.
///
/// Built from the `customerDetails` the ordering client posts at checkout.
/// The location is informational only and is not checked against the menu
/// client's location list here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomerContact {
    name: String,
    location: String,
    email: EmailAddress,
}

impl CustomerContact {
    /// Validates raw customer fields.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if the name is blank or the email is
    /// malformed.
    pub fn try_new(name: &str, location: &str, email: &str) -> Result<Self, ValidationError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(ValidationError::empty_field("name"));
        }

        Ok(Self {
            name: name.to_string(),
            location: location.trim().to_string(),
            email: EmailAddress::try_new(email)?,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn location(&self) -> &str {
        &self.location
    }

    pub fn email(&self) -> &EmailAddress {
        &self.email
    }
}
