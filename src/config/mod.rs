//! Application configuration module
//!
//! This module provides type-safe configuration loading from environment variables
//! using the `config` and `dotenvy` crates. Configuration is loaded with the
//! `TICKETING` prefix and nested values use double underscores as separators.
//!
//! # Example
//!
//! ```no_run
//! use event_ticketing::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! println!("Customer delete policy: {:?}", config.booking.customer_delete_policy);
//! ```

mod booking;
mod error;
mod telemetry;

pub use booking::BookingConfig;
pub use error::{ConfigError, ValidationError};
pub use telemetry::TelemetryConfig;

use serde::Deserialize;

/// Root application configuration
///
/// Every section has defaults, so an empty environment yields a usable
/// configuration. Load using [`AppConfig::load()`].
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Logging output (level, format)
    #[serde(default)]
    pub telemetry: TelemetryConfig,

    /// Booking core behaviour
    #[serde(default)]
    pub booking: BookingConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with `TICKETING` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    /// 4. Deserializes into typed configuration structs
    ///
    /// # Environment Variable Format
    ///
    /// - `TICKETING__TELEMETRY__LOG_LEVEL=debug` -> `telemetry.log_level = "debug"`
    /// - `TICKETING__BOOKING__CUSTOMER_DELETE_POLICY=release_tickets`
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
                    .prefix("TICKETING")
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
        self.telemetry.validate()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::InMemoryTicketingStore;
    use crate::domain::integrity::CustomerDeletePolicy;
    use std::env;
    use std::sync::Mutex;

    // Mutex to ensure tests don't run in parallel (env vars are global)
    static ENV_MUTEX: Mutex<()> = Mutex::new(());

    fn clear_env() {
        env::remove_var("TICKETING__TELEMETRY__LOG_LEVEL");
        env::remove_var("TICKETING__TELEMETRY__JSON");
        env::remove_var("TICKETING__BOOKING__CUSTOMER_DELETE_POLICY");
    }

    #[test]
    fn test_load_defaults_from_empty_environment() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_env();
        let result = AppConfig::load();

        assert!(result.is_ok(), "Failed to load config: {:?}", result.err());
        let config = result.unwrap();
        assert_eq!(config.telemetry.log_level, "info");
        assert!(!config.telemetry.json);
        assert_eq!(
            config.booking.customer_delete_policy,
            CustomerDeletePolicy::CascadeTickets
        );
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_load_from_environment() {
        let _guard = ENV_MUTEX.lock().unwrap();
        env::set_var("TICKETING__TELEMETRY__LOG_LEVEL", "debug");
        env::set_var("TICKETING__TELEMETRY__JSON", "true");
        env::set_var("TICKETING__BOOKING__CUSTOMER_DELETE_POLICY", "release_tickets");
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert_eq!(config.telemetry.log_level, "debug");
        assert!(config.telemetry.json);
        assert_eq!(
            config.booking.customer_delete_policy,
            CustomerDeletePolicy::ReleaseTickets
        );
    }

    #[test]
    fn test_loaded_policy_configures_store() {
        let _guard = ENV_MUTEX.lock().unwrap();
        env::set_var("TICKETING__BOOKING__CUSTOMER_DELETE_POLICY", "release_tickets");
        let result = AppConfig::load();
        clear_env();

        let store = InMemoryTicketingStore::from_config(&result.unwrap().booking);
        assert_eq!(
            store.customer_delete_policy(),
            CustomerDeletePolicy::ReleaseTickets
        );
    }

    #[test]
    fn test_unknown_policy_fails_to_load() {
        let _guard = ENV_MUTEX.lock().unwrap();
        env::set_var("TICKETING__BOOKING__CUSTOMER_DELETE_POLICY", "keep_everything");
        let result = AppConfig::load();
        clear_env();

        assert!(matches!(result, Err(ConfigError::LoadError(_))));
    }

    #[test]
    fn test_validate_rejects_empty_log_level() {
        let mut config = AppConfig::default();
        config.telemetry.log_level = String::new();

        assert!(config.validate().is_err());
    }
}
