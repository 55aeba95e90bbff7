//! In-memory access code store for testing and development.
//!
//! Expiry is enforced lazily on access; `purge_expired` drops stale
//! records in bulk. Not shared between processes.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::access_code::{AccessCode, AccessCodeError, AccessTokenRecord};
use crate::domain::foundation::Timestamp;
use crate::ports::AccessCodeStore;

/// In-memory access code store.
#[derive(Debug, Clone, Default)]
pub struct InMemoryAccessCodeStore {
    records: Arc<RwLock<HashMap<String, AccessTokenRecord>>>,
}

impl InMemoryAccessCodeStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Removes every expired record, returning how many were dropped.
    pub async fn purge_expired(&self) -> usize {
        let now = Timestamp::now();
        let mut records = self.records.write().await;
        let before = records.len();
        records.retain(|_, record| !record.is_expired_at(now));
        before - records.len()
    }

    /// Number of stored records, including expired ones not yet purged.
    pub async fn len(&self) -> usize {
        self.records.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.records.read().await.is_empty()
    }
}

#[async_trait]
impl AccessCodeStore for InMemoryAccessCodeStore {
    async fn insert(&self, record: &AccessTokenRecord) -> Result<(), AccessCodeError> {
        let now = Timestamp::now();
        let mut records = self.records.write().await;

        if let Some(existing) = records.get(record.code().as_str()) {
            if !existing.is_expired_at(now) {
                return Err(AccessCodeError::AlreadyIssued(record.code().clone()));
            }
        }

        records.insert(record.code().as_str().to_string(), record.clone());
        Ok(())
    }

    async fn redeem(&self, code: &AccessCode) -> Result<bool, AccessCodeError> {
        let now = Timestamp::now();
        let mut records = self.records.write().await;

        match records.remove(code.as_str()) {
            Some(record) => Ok(!record.is_expired_at(now)),
            None => Ok(false),
        }
    }

    async fn contains(&self, code: &AccessCode) -> Result<bool, AccessCodeError> {
        let now = Timestamp::now();
        let records = self.records.read().await;
        Ok(records
            .get(code.as_str())
            .is_some_and(|record| !record.is_expired_at(now)))
    }
}
