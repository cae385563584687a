//! Application configuration module
//!
//! This module provides type-safe configuration loading from environment variables
//! using the `config` and `dotenvy` crates. Configuration is loaded with the
//! `FRANCHISE_CALC` prefix and nested values use double underscores as separators.
//!
//! # Example
//!
//! ```no_run
//! use franchise_calculator::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! println!("Server running on {}", config.server.socket_addr().unwrap());
//! ```

mod calculator;
mod error;
mod server;

pub use calculator::CalculatorConfig;
pub use error::{ConfigError, ValidationError};
pub use server::{Environment, ServerConfig};

use serde::Deserialize;

/// Root application configuration
///
/// Every section has defaults, so an empty environment yields a working
/// development setup with the built-in industry profiles.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Server configuration (host, port, environment)
    #[serde(default)]
    pub server: ServerConfig,

    /// Calculator configuration (catalog file, input minimums, asset kit link)
    #[serde(default)]
    pub calculator: CalculatorConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with `FRANCHISE_CALC` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    /// 4. Deserializes into typed configuration structs
    ///
    /// # Environment Variable Format
    ///
    /// - `FRANCHISE_CALC__SERVER__PORT=8080` -> `server.port = 8080`
    /// - `FRANCHISE_CALC__CALCULATOR__CATALOG_PATH=...` -> `calculator.catalog_path = ...`
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
                    .prefix("FRANCHISE_CALC")
                    .prefix_separator("__")
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
        self.calculator.validate(self.is_production())?;
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

    const VARS: &[&str] = &[
        "FRANCHISE_CALC__SERVER__PORT",
        "FRANCHISE_CALC__SERVER__ENVIRONMENT",
        "FRANCHISE_CALC__CALCULATOR__CATALOG_PATH",
        "FRANCHISE_CALC__CALCULATOR__MIN_SETUP_COST",
        "FRANCHISE_CALC__CALCULATOR__ASSET_KIT_URL",
    ];

    /// Helper to clear environment variables after testing
    fn clear_env() {
        for var in VARS {
            env::remove_var(var);
        }
    }

    #[test]
    fn test_load_with_empty_environment() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_env();
        let result = AppConfig::load();

        assert!(result.is_ok(), "Failed to load config: {:?}", result.err());
        let config = result.unwrap();
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.server.environment, Environment::Development);
        assert!(config.calculator.catalog_path.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_load_nested_values() {
        let _guard = ENV_MUTEX.lock().unwrap();
        env::set_var("FRANCHISE_CALC__SERVER__PORT", "3000");
        env::set_var("FRANCHISE_CALC__CALCULATOR__CATALOG_PATH", "/tmp/industries.yaml");
        env::set_var("FRANCHISE_CALC__CALCULATOR__MIN_SETUP_COST", "2500");
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert_eq!(config.server.port, 3000);
        assert_eq!(
            config.calculator.catalog_path.as_deref(),
            Some(std::path::Path::new("/tmp/industries.yaml"))
        );
        assert_eq!(config.calculator.min_setup_cost, 2500.0);
    }

    #[test]
    fn test_is_production() {
        let _guard = ENV_MUTEX.lock().unwrap();
        env::set_var("FRANCHISE_CALC__SERVER__ENVIRONMENT", "production");
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert!(config.is_production());
    }

    #[test]
    fn test_production_rejects_plain_http_asset_link() {
        let _guard = ENV_MUTEX.lock().unwrap();
        env::set_var("FRANCHISE_CALC__SERVER__ENVIRONMENT", "production");
        env::set_var("FRANCHISE_CALC__CALCULATOR__ASSET_KIT_URL", "http://kit.example.com");
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert!(matches!(
            config.validate(),
            Err(ValidationError::AssetKitUrlMustBeHttps)
        ));
    }
}
