//! Redis-backed access code store for production deployments.
//!
//! Each code is a single key with a native Redis expiry:
//!
//! ```text
//! access_code:<value>  ->  JSON AccessTokenRecord   (EX ttl_secs)
//! ```
//!
//! `SET NX EX` makes issuance conditional and `GETDEL` makes redemption
//! atomic across concurrent scanners.

use async_trait::async_trait;
use redis::aio::MultiplexedConnection;
use redis::AsyncCommands;

use crate::domain::access_code::{AccessCode, AccessCodeError, AccessTokenRecord};
use crate::ports::AccessCodeStore;

const KEY_PREFIX: &str = "access_code";

/// Redis access code store.
#[derive(Clone)]
pub struct RedisAccessCodeStore {
    conn: MultiplexedConnection,
}

impl RedisAccessCodeStore {
    pub fn new(conn: MultiplexedConnection) -> Self {
        Self { conn }
    }

    /// Opens a multiplexed connection to `url`.
    pub async fn connect(url: &str) -> Result<Self, AccessCodeError> {
        let client = redis::Client::open(url).map_err(unavailable)?;
        let conn = client
            .get_multiplexed_tokio_connection()
            .await
            .map_err(unavailable)?;
        Ok(Self::new(conn))
    }

    fn key(code: &AccessCode) -> String {
        format!("{}:{}", KEY_PREFIX, code.as_str())
    }
}

fn unavailable(e: redis::RedisError) -> AccessCodeError {
    AccessCodeError::infrastructure(format!("redis: {}", e))
}

#[async_trait]
impl AccessCodeStore for RedisAccessCodeStore {
    async fn insert(&self, record: &AccessTokenRecord) -> Result<(), AccessCodeError> {
        let key = Self::key(record.code());
        let payload = serde_json::to_string(record)
            .map_err(|e| AccessCodeError::infrastructure(e.to_string()))?;
        // Redis rejects EX 0
        let ttl_secs = record.ttl().as_secs().max(1);

        let mut conn = self.conn.clone();
        let reply: Option<String> = redis::cmd("SET")
            .arg(&key)
            .arg(payload)
            .arg("NX")
            .arg("EX")
            .arg(ttl_secs)
            .query_async(&mut conn)
            .await
            .map_err(unavailable)?;

        match reply {
            Some(_) => Ok(()),
            None => Err(AccessCodeError::AlreadyIssued(record.code().clone())),
        }
    }

    async fn redeem(&self, code: &AccessCode) -> Result<bool, AccessCodeError> {
        let mut conn = self.conn.clone();
        let removed: Option<String> = redis::cmd("GETDEL")
            .arg(Self::key(code))
            .query_async(&mut conn)
            .await
            .map_err(unavailable)?;
        Ok(removed.is_some())
    }

    async fn contains(&self, code: &AccessCode) -> Result<bool, AccessCodeError> {
        let mut conn = self.conn.clone();
        conn.exists(Self::key(code))
            .await
            .map_err(|e: redis::RedisError| unavailable(e))
    }
}
