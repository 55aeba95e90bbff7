//! Customer details form.

use serde::{Deserialize, Serialize};

use crate::domain::access_code::CustomerContact;
use crate::domain::foundation::ValidationError;

use super::menu::is_known_location;
use super::OrderingError;

/// Raw customer details as typed into the start-of-order form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomerDetails {
    pub name: String,
    pub location: String,
    pub email: String,
}

impl CustomerDetails {
    pub fn new(
        name: impl Into<String>,
        location: impl Into<String>,
        email: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            location: location.into(),
            email: email.into(),
        }
    }

    /// Checks the form before the menu opens.
    ///
    /// All three fields are required, the location must be a served
    /// drop-off point, and the email must be well formed.
    pub fn validate(&self) -> Result<CustomerContact, OrderingError> {
        if self.name.trim().is_empty()
            || self.location.trim().is_empty()
            || self.email.trim().is_empty()
        {
            return Err(OrderingError::IncompleteDetails);
        }

        if !is_known_location(self.location.trim()) {
            return Err(OrderingError::UnknownLocation(self.location.clone()));
        }

        CustomerContact::try_new(&self.name, &self.location, &self.email).map_err(
            |err: ValidationError| match err.field() {
                "email" => OrderingError::InvalidEmail,
                _ => OrderingError::IncompleteDetails,
            },
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_details_produce_contact() {
        let details = CustomerDetails::new("Ravi", "MGH", "ravi@nitj.ac.in");
        let contact = details.validate().unwrap();
        assert_eq!(contact.name(), "Ravi");
        assert_eq!(contact.location(), "MGH");
    }

    #[test]
    fn any_blank_field_is_incomplete() {
        for details in [
            CustomerDetails::new("", "MGH", "ravi@nitj.ac.in"),
            CustomerDetails::new("Ravi", "", "ravi@nitj.ac.in"),
            CustomerDetails::new("Ravi", "MGH", "   "),
        ] {
            assert_eq!(details.validate(), Err(OrderingError::IncompleteDetails));
        }
    }

    #[test]
    fn unknown_location_is_rejected() {
        let details = CustomerDetails::new("Ravi", "Mess 3", "ravi@nitj.ac.in");
        assert_eq!(
            details.validate(),
            Err(OrderingError::UnknownLocation("Mess 3".to_string()))
        );
    }

    #[test]
    fn malformed_email_is_rejected() {
        let details = CustomerDetails::new("Ravi", "MGH", "ravi@nitj");
        assert_eq!(details.validate(), Err(OrderingError::InvalidEmail));
    }

    #[test]
    fn error_messages_match_form_alerts() {
        assert_eq!(
            OrderingError::IncompleteDetails.to_string(),
            "Please fill in all customer details"
        );
        assert_eq!(
            OrderingError::InvalidEmail.to_string(),
            "Please enter a valid email address"
        );
    }
}
