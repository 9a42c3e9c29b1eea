//! Application configuration module
//!
//! Type-safe configuration loading from environment variables using the
//! `config` and `dotenvy` crates. Configuration is loaded with the
//! `LEARNHUB` prefix and nested values use double underscores as
//! separators.
//!
//! # Example
//!
//! ```no_run
//! use learnhub::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! println!("Server running on {}", config.server.socket_addr());
//! ```

mod billing;
mod database;
mod error;
mod server;

pub use billing::BillingConfig;
pub use database::DatabaseConfig;
pub use error::{ConfigError, ValidationError};
pub use server::{Environment, ServerConfig};

use serde::Deserialize;

/// Root application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// Server configuration (host, port, environment)
    #[serde(default)]
    pub server: ServerConfig,

    /// Database configuration (PostgreSQL connection)
    pub database: DatabaseConfig,

    /// Billing gateway configuration
    pub billing: BillingConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// # Environment Variable Format
    ///
    /// - `LEARNHUB__SERVER__PORT=8080` -> `server.port = 8080`
    /// - `LEARNHUB__DATABASE__URL=...` -> `database.url = ...`
    /// - `LEARNHUB__BILLING__KEY_ID=...` -> `billing.key_id = ...`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if required variables are missing or values
    /// cannot be parsed into the expected types.
    pub fn load() -> Result<Self, ConfigError> {
        // Load .env file if present (development)
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("LEARNHUB")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if any configuration value is invalid.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.server.validate()?;
        self.database.validate()?;
        self.billing.validate()?;
        Ok(())
    }

    /// Check if running in production environment
    pub fn is_production(&self) -> bool {
        self.server.is_production()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::sync::Mutex;

    // Mutex to ensure tests don't run in parallel (env vars are global)
    static ENV_MUTEX: Mutex<()> = Mutex::new(());

    fn set_minimal_env() {
        env::set_var("LEARNHUB__DATABASE__URL", "postgresql://test@localhost/test");
        env::set_var("LEARNHUB__BILLING__KEY_ID", "rzp_test_xxx");
        env::set_var("LEARNHUB__BILLING__KEY_SECRET", "secret_xxx");
        env::set_var("LEARNHUB__BILLING__PLAN_ID", "plan_monthly");
    }

    fn clear_env() {
        env::remove_var("LEARNHUB__DATABASE__URL");
        env::remove_var("LEARNHUB__BILLING__KEY_ID");
        env::remove_var("LEARNHUB__BILLING__KEY_SECRET");
        env::remove_var("LEARNHUB__BILLING__PLAN_ID");
        env::remove_var("LEARNHUB__SERVER__PORT");
    }

    #[test]
    fn loads_from_environment() {
        let _guard = ENV_MUTEX.lock().unwrap();
        set_minimal_env();
        let result = AppConfig::load();
        clear_env();

        let config = result.expect("config should load");
        assert_eq!(config.database.url, "postgresql://test@localhost/test");
        assert_eq!(config.billing.key_id, "rzp_test_xxx");
        assert_eq!(config.billing.plan_id, "plan_monthly");
    }

    #[test]
    fn loaded_config_validates() {
        let _guard = ENV_MUTEX.lock().unwrap();
        set_minimal_env();
        let result = AppConfig::load();
        clear_env();

        let config = result.expect("config should load");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn missing_database_url_fails_to_load() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_env();
        env::set_var("LEARNHUB__BILLING__KEY_ID", "rzp_test_xxx");
        env::set_var("LEARNHUB__BILLING__KEY_SECRET", "secret_xxx");
        env::set_var("LEARNHUB__BILLING__PLAN_ID", "plan_monthly");

        let result = AppConfig::load();
        clear_env();

        assert!(result.is_err());
    }
}
