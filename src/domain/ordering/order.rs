//! Order confirmation details.

use std::fmt;

use rand::Rng;
use serde::Serialize;

use crate::domain::access_code::{AccessCode, CustomerContact};
use crate::domain::foundation::Timestamp;

use super::cart::CartLine;
use super::menu::{DELIVERY_CHARGE, DELIVERY_TIME_MINUTES};
use super::qr::{fallback_qr_image_url, qr_image_url, DEFAULT_QR_SIZE};

/// Human-facing order reference: `ORD` + `YYMMDD` + four random digits.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct OrderNumber(String);

impl OrderNumber {
    /// Generates an order number dated `now`.
    pub fn generate(now: Timestamp) -> Self {
        let suffix: u32 = rand::rng().random_range(1000..=9999);
        Self::from_parts(now, suffix)
    }

    fn from_parts(now: Timestamp, suffix: u32) -> Self {
        Self(format!("ORD{}{}", now.to_local_compact_date(), suffix))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for OrderNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Expected delivery clock time for an order placed at `now`.
pub fn delivery_eta(now: Timestamp) -> String {
    now.plus_minutes(DELIVERY_TIME_MINUTES).to_local_clock_time()
}

/// Everything the confirmation screen shows after a successful checkout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OrderReceipt {
    pub order_number: OrderNumber,
    pub access_code: AccessCode,
    pub delivery_eta: String,
    pub customer: CustomerContact,
    pub lines: Vec<CartLine>,
    pub total: u32,
}

impl OrderReceipt {
    /// Total before the delivery charge.
    pub fn subtotal(&self) -> u32 {
        self.total.saturating_sub(DELIVERY_CHARGE)
    }

    pub fn delivery_charge(&self) -> u32 {
        DELIVERY_CHARGE
    }

    /// QR image of the access code for the pickup scanner.
    pub fn qr_image_url(&self) -> String {
        qr_image_url(self.access_code.as_str(), DEFAULT_QR_SIZE)
    }

    pub fn fallback_qr_image_url(&self) -> String {
        fallback_qr_image_url(self.access_code.as_str(), DEFAULT_QR_SIZE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn order_number_format() {
        let number = OrderNumber::generate(Timestamp::now());
        let s = number.as_str();
        assert_eq!(s.len(), 13);
        assert!(s.starts_with("ORD"));
        assert!(s[3..].chars().all(|c| c.is_ascii_digit()));

        let suffix: u32 = s[9..].parse().unwrap();
        assert!((1000..=9999).contains(&suffix));
    }

    #[test]
    fn order_number_from_parts_uses_date_and_suffix() {
        let now = Timestamp::now();
        let number = OrderNumber::from_parts(now, 4321);
        assert_eq!(
            number.to_string(),
            format!("ORD{}4321", now.to_local_compact_date())
        );
    }

    #[test]
    fn delivery_eta_is_twenty_minutes_out() {
        let now = Timestamp::from_unix_secs(1_700_000_000);
        assert_eq!(delivery_eta(now), now.plus_minutes(20).to_local_clock_time());
    }
}
