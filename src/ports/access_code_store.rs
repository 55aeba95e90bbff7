//! Access code store port.
//!
//! Transient storage for issued codes. A record is visible from `insert`
//! until it is redeemed or its TTL elapses.
//!
//! # Example
//!
//! ```ignore
//! use delivery_bot::ports::AccessCodeStore;
//!
//! async fn pickup(store: &dyn AccessCodeStore, code: &AccessCode) -> bool {
//!     store.redeem(code).await.unwrap_or(false)
//! }
//! ```

use async_trait::async_trait;

use crate::domain::access_code::{AccessCode, AccessCodeError, AccessTokenRecord};

/// Port for storing and redeeming single-use access codes.
///
/// Implementations must make `redeem` atomic: of two concurrent redemptions
/// of the same code, exactly one observes `true`.
#[async_trait]
pub trait AccessCodeStore: Send + Sync {
    /// Stores a freshly issued code with the record's TTL.
    ///
    /// # Errors
    ///
    /// - `AlreadyIssued` if an unexpired record with the same code exists
    /// - `Infrastructure` if the backing store is unavailable
    async fn insert(&self, record: &AccessTokenRecord) -> Result<(), AccessCodeError>;

    /// Removes the code if present and unexpired.
    ///
    /// # Returns
    ///
    /// - `Ok(true)` - the code matched and has now been consumed
    /// - `Ok(false)` - no such code (never issued, redeemed, or expired)
    async fn redeem(&self, code: &AccessCode) -> Result<bool, AccessCodeError>;

    /// Checks whether a code is currently redeemable without consuming it.
    async fn contains(&self, code: &AccessCode) -> Result<bool, AccessCodeError>;
}
