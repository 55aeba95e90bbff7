//! RedeemAccessCodeHandler - Command handler for the pickup device's verify-and-delete.

use std::sync::Arc;

use crate::domain::access_code::{AccessCode, AccessCodeError};
use crate::ports::AccessCodeStore;

/// Command to redeem a scanned access code.
#[derive(Debug, Clone)]
pub struct RedeemAccessCodeCommand {
    pub value: Option<String>,
}

/// Result of a successful redemption.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RedeemAccessCodeResult {
    pub code: AccessCode,
}

/// Handler for redeeming access codes.
pub struct RedeemAccessCodeHandler {
    store: Arc<dyn AccessCodeStore>,
}

impl RedeemAccessCodeHandler {
    pub fn new(store: Arc<dyn AccessCodeStore>) -> Self {
        Self { store }
    }

    /// Consumes the code if it is stored and unexpired.
    ///
    /// A code that is absent, malformed, already redeemed, or expired
    /// yields `NotFound`; the scanner only needs to know whether to open.
    pub async fn handle(
        &self,
        cmd: RedeemAccessCodeCommand,
    ) -> Result<RedeemAccessCodeResult, AccessCodeError> {
        let code = match cmd.value.as_deref().map(AccessCode::try_new) {
            Some(Ok(code)) => code,
            Some(Err(_)) | None => {
                tracing::debug!("Rejected malformed access code scan");
                return Err(AccessCodeError::NotFound);
            }
        };

        if !self.store.redeem(&code).await? {
            tracing::info!(code = %code.redacted(), "Access code not found");
            return Err(AccessCodeError::NotFound);
        }

        tracing::info!(code = %code.redacted(), "Access code redeemed");
        Ok(RedeemAccessCodeResult { code })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::access_code::AccessTokenRecord;
    use async_trait::async_trait;
    use std::collections::HashSet;
    use std::sync::Mutex;

    struct MockStore {
        codes: Mutex<HashSet<String>>,
        fail: bool,
    }

    impl MockStore {
        fn with_codes(codes: &[&str]) -> Self {
            Self {
                codes: Mutex::new(codes.iter().map(|c| c.to_string()).collect()),
                fail: false,
            }
        }

        fn failing() -> Self {
            Self {
                codes: Mutex::new(HashSet::new()),
                fail: true,
            }
        }
    }

    #[async_trait]
    impl AccessCodeStore for MockStore {
        async fn insert(&self, record: &AccessTokenRecord) -> Result<(), AccessCodeError> {
            self.codes
                .lock()
                .unwrap()
                .insert(record.code().as_str().to_string());
            Ok(())
        }

        async fn redeem(&self, code: &AccessCode) -> Result<bool, AccessCodeError> {
            if self.fail {
                return Err(AccessCodeError::infrastructure("Simulated outage"));
            }
            Ok(self.codes.lock().unwrap().remove(code.as_str()))
        }

        async fn contains(&self, code: &AccessCode) -> Result<bool, AccessCodeError> {
            Ok(self.codes.lock().unwrap().contains(code.as_str()))
        }
    }

    fn command(value: &str) -> RedeemAccessCodeCommand {
        RedeemAccessCodeCommand {
            value: Some(value.to_string()),
        }
    }

    #[tokio::test]
    async fn redeems_stored_code_once() {
        let handler = RedeemAccessCodeHandler::new(Arc::new(MockStore::with_codes(&["abc"])));

        let result = handler.handle(command("abc")).await.unwrap();
        assert_eq!(result.code.as_str(), "abc");

        let err = handler.handle(command("abc")).await.unwrap_err();
        assert_eq!(err, AccessCodeError::NotFound);
    }

    #[tokio::test]
    async fn unknown_code_is_not_found() {
        let handler = RedeemAccessCodeHandler::new(Arc::new(MockStore::with_codes(&["abc"])));
        let err = handler.handle(command("xyz")).await.unwrap_err();
        assert_eq!(err, AccessCodeError::NotFound);
    }

    #[tokio::test]
    async fn missing_or_blank_value_is_not_found() {
        let handler = RedeemAccessCodeHandler::new(Arc::new(MockStore::with_codes(&[])));
        assert_eq!(
            handler
                .handle(RedeemAccessCodeCommand { value: None })
                .await
                .unwrap_err(),
            AccessCodeError::NotFound
        );
        assert_eq!(
            handler.handle(command("  ")).await.unwrap_err(),
            AccessCodeError::NotFound
        );
    }

    #[tokio::test]
    async fn store_failure_propagates() {
        let handler = RedeemAccessCodeHandler::new(Arc::new(MockStore::failing()));
        let err = handler.handle(command("abc")).await.unwrap_err();
        assert!(matches!(err, AccessCodeError::Infrastructure(_)));
    }
}
