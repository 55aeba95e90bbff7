//! IssueAccessCodeHandler - Command handler for storing and emailing a new code.

use std::sync::Arc;
use std::time::Duration;

use tokio::task::JoinHandle;

use crate::domain::access_code::{
    AccessCode, AccessCodeError, AccessTokenRecord, CustomerContact,
};
use crate::domain::foundation::Timestamp;
use crate::ports::{AccessCodeNotifier, AccessCodeStore};

/// Command to issue an access code generated by the ordering client.
#[derive(Debug, Clone)]
pub struct IssueAccessCodeCommand {
    /// The raw code as posted by the client.
    pub value: Option<String>,
    pub customer_name: String,
    pub customer_location: String,
    pub customer_email: String,
}

/// Result of successful issuance.
#[derive(Debug)]
pub struct IssueAccessCodeResult {
    pub record: AccessTokenRecord,
    /// Background email delivery. Resolves to false if the send failed;
    /// the code is stored regardless and callers need not await it.
    pub notification: JoinHandle<bool>,
}

/// Handler for issuing access codes.
pub struct IssueAccessCodeHandler {
    store: Arc<dyn AccessCodeStore>,
    notifier: Arc<dyn AccessCodeNotifier>,
    ttl: Duration,
}

impl IssueAccessCodeHandler {
    pub fn new(
        store: Arc<dyn AccessCodeStore>,
        notifier: Arc<dyn AccessCodeNotifier>,
        ttl: Duration,
    ) -> Self {
        Self {
            store,
            notifier,
            ttl,
        }
    }

    pub async fn handle(
        &self,
        cmd: IssueAccessCodeCommand,
    ) -> Result<IssueAccessCodeResult, AccessCodeError> {
        // 1. Validate the code
        let raw = cmd.value.ok_or(AccessCodeError::MissingValue)?;
        let code = AccessCode::try_new(&raw).map_err(AccessCodeError::from_code_validation)?;

        // 2. Validate who we are emailing
        let contact = CustomerContact::try_new(
            &cmd.customer_name,
            &cmd.customer_location,
            &cmd.customer_email,
        )
        .map_err(AccessCodeError::from_customer_validation)?;

        // 3. Persist with TTL
        let record = AccessTokenRecord::issue(code, Timestamp::now(), self.ttl);
        self.store.insert(&record).await?;

        tracing::info!(
            code = %record.code().redacted(),
            location = %contact.location(),
            ttl_secs = self.ttl.as_secs(),
            "Access code issued"
        );

        // 4. Email the customer off the request path. The code is already
        //    redeemable, so a slow or failed delivery never fails issuance.
        let notifier = Arc::clone(&self.notifier);
        let code = record.code().clone();
        let notification = tokio::spawn(async move {
            match notifier.send_access_code(&code, &contact).await {
                Ok(()) => true,
                Err(e) => {
                    tracing::warn!(
                        code = %code.redacted(),
                        error = %e,
                        retryable = e.is_retryable(),
                        "Failed to send access code email"
                    );
                    false
                }
            }
        });

        Ok(IssueAccessCodeResult {
            record,
            notification,
        })
    }
}
