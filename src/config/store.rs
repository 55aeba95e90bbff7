//! Access code store configuration

use serde::Deserialize;
use std::time::Duration;

use super::error::ValidationError;

const MAX_TTL_SECS: u64 = 86_400;

/// Where issued access codes live
#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum StoreBackend {
    /// Process-local map, lost on restart
    #[default]
    Memory,
    Redis,
}

/// Access code store configuration
#[derive(Debug, Clone, Deserialize)]
pub struct StoreConfig {
    #[serde(default)]
    pub backend: StoreBackend,

    /// Lifetime of an issued code in seconds
    #[serde(default = "default_ttl")]
    pub ttl_secs: u64,

    /// How often the in-memory backend drops expired codes
    #[serde(default = "default_purge_interval")]
    pub purge_interval_secs: u64,
}

impl StoreConfig {
    pub fn ttl(&self) -> Duration {
        Duration::from_secs(self.ttl_secs)
    }

    pub fn purge_interval(&self) -> Duration {
        Duration::from_secs(self.purge_interval_secs.max(1))
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.ttl_secs == 0 || self.ttl_secs > MAX_TTL_SECS {
            return Err(ValidationError::InvalidTtl);
        }
        Ok(())
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            backend: StoreBackend::default(),
            ttl_secs: default_ttl(),
            purge_interval_secs: default_purge_interval(),
        }
    }
}

fn default_ttl() -> u64 {
    300
}

fn default_purge_interval() -> u64 {
    60
}
