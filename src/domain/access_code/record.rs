//! Access token record - the single durable entity.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::domain::foundation::Timestamp;

use super::AccessCode;

/// Default lifetime of an issued access code.
pub const DEFAULT_ACCESS_CODE_TTL: Duration = Duration::from_secs(300);

/// A stored access code awaiting redemption.
///
/// Presence of a record means the code has been neither redeemed nor
/// expired. Stores drop the record on first redemption or once
/// `expires_at` passes, whichever comes first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccessTokenRecord {
    code: AccessCode,
    created_at: Timestamp,
    #[serde(with = "ttl_secs")]
    ttl: Duration,
}

impl AccessTokenRecord {
    /// Issues a new record starting at `now`.
    pub fn issue(code: AccessCode, now: Timestamp, ttl: Duration) -> Self {
        Self {
            code,
            created_at: now,
            ttl,
        }
    }

    pub fn code(&self) -> &AccessCode {
        &self.code
    }

    pub fn created_at(&self) -> Timestamp {
        self.created_at
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    /// The moment after which the code can no longer be redeemed.
    pub fn expires_at(&self) -> Timestamp {
        self.created_at.plus_secs(self.ttl.as_secs())
    }

    /// Returns true once `now` has reached the expiry instant.
    pub fn is_expired_at(&self, now: Timestamp) -> bool {
        !now.is_before(&self.expires_at())
    }

    /// Time left before expiry, zero if already expired.
    pub fn remaining_ttl_at(&self, now: Timestamp) -> Duration {
        let remaining = self.expires_at().duration_since(&now);
        remaining.to_std().unwrap_or(Duration::ZERO)
    }
}

mod ttl_secs {
    use serde::{Deserialize, Deserializer, Serializer};
    use std::time::Duration;

    pub fn serialize<S: Serializer>(ttl: &Duration, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u64(ttl.as_secs())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Duration, D::Error> {
        u64::deserialize(deserializer).map(Duration::from_secs)
    }
}
