//! Application configuration module
//!
//! This module provides type-safe configuration loading from environment variables
//! using the `config` and `dotenvy` crates. Configuration is loaded with the
//! `DELIVERY_BOT` prefix and nested values use double underscores as separators.
//!
//! # Example
//!
//! ```no_run
//! use delivery_bot::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! println!("Server running on {}", config.server.socket_addr().unwrap());
//! ```

mod email;
mod error;
mod redis;
mod server;
mod store;

pub use email::{EmailConfig, EmailProvider};
pub use error::{ConfigError, ValidationError};
pub use redis::RedisConfig;
pub use server::{Environment, ServerConfig};
pub use store::{StoreBackend, StoreConfig};

use serde::Deserialize;

/// Root application configuration
///
/// Every section has defaults, so an empty environment yields a runnable
/// development setup (in-memory store, logging notifier, port 5000).
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Server configuration (host, port, environment)
    #[serde(default)]
    pub server: ServerConfig,

    /// Access code store (backend, TTL)
    #[serde(default)]
    pub store: StoreConfig,

    /// Redis connection, used when `store.backend` is `redis`
    #[serde(default)]
    pub redis: RedisConfig,

    /// Email delivery (Mailtrap)
    #[serde(default)]
    pub email: EmailConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with `DELIVERY_BOT` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    /// 4. Deserializes into typed configuration structs
    ///
    /// # Environment Variable Format
    ///
    /// - `DELIVERY_BOT__SERVER__PORT=8080` -> `server.port = 8080`
    /// - `DELIVERY_BOT__STORE__BACKEND=redis` -> `store.backend = redis`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into expected types.
    pub fn load() -> Result<Self, ConfigError> {
        // Load .env file if present (development)
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("DELIVERY_BOT")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values
    ///
    /// Redis settings are only checked when Redis is the selected backend.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if any configuration value is invalid.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.server.validate()?;
        self.store.validate()?;
        if self.store.backend == StoreBackend::Redis {
            self.redis.validate()?;
        }
        self.email.validate()?;
        Ok(())
    }

    /// Check if running in production environment
    pub fn is_production(&self) -> bool {
        self.server.is_production()
    }
}
