//! Application configuration module
//!
//! This module provides type-safe configuration loading from environment variables
//! using the `config` and `dotenvy` crates. Configuration is loaded with the
//! `DISCLOSURE_PILOT` prefix and nested values use double underscores as separators.
//! Every value has a default, so an empty environment yields a working setup.
//!
//! # Example
//!
//! ```no_run
//! use disclosure_pilot::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! println!("Drafts go to {}", config.export.output_dir.display());
//! ```

mod ai;
mod error;
mod export;
mod logging;
mod pacing;
mod simulation;

pub use ai::AiConfig;
pub use error::{ConfigError, ValidationError};
pub use export::ExportConfig;
pub use logging::LoggingConfig;
pub use pacing::{PacingConfig, MAX_PACING_FACTOR};
pub use simulation::SimulationConfig;

use serde::Deserialize;

/// Root application configuration
///
/// Load using [`AppConfig::load()`] which reads from environment variables.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Generative AI collaborator (key, model, timeout)
    #[serde(default)]
    pub ai: AiConfig,

    /// Simulation control defaults and bounds
    #[serde(default)]
    pub simulation: SimulationConfig,

    /// Presentation delays
    #[serde(default)]
    pub pacing: PacingConfig,

    /// Draft export destination and format
    #[serde(default)]
    pub export: ExportConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with `DISCLOSURE_PILOT` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    /// 4. Deserializes into typed configuration structs
    ///
    /// # Environment Variable Format
    ///
    /// - `DISCLOSURE_PILOT__SIMULATION__DEFAULT_CARBON_PRICE=150` -> `simulation.default_carbon_price = 150`
    /// - `DISCLOSURE_PILOT__EXPORT__FORMAT=markdown` -> `export.format = markdown`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into expected types.
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("DISCLOSURE_PILOT")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Load and validate in one step.
    pub fn load_validated() -> Result<Self, ConfigError> {
        let config = Self::load()?;
        config.validate()?;
        Ok(config)
    }

    /// Validate all configuration values
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if any configuration value is invalid.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.ai.validate()?;
        self.simulation.validate()?;
        self.pacing.validate()?;
        self.export.validate()?;
        self.logging.validate()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::ExportFormat;
    use secrecy::ExposeSecret;
    use std::env;
    use std::sync::Mutex;

    // Env vars are process-global; tests touching them run one at a time.
    static ENV_MUTEX: Mutex<()> = Mutex::new(());

    const VARS: [&str; 6] = [
        "DISCLOSURE_PILOT__AI__API_KEY",
        "DISCLOSURE_PILOT__SIMULATION__DEFAULT_CARBON_PRICE",
        "DISCLOSURE_PILOT__SIMULATION__DEFAULT_SCENARIO",
        "DISCLOSURE_PILOT__PACING__FACTOR",
        "DISCLOSURE_PILOT__EXPORT__FORMAT",
        "DISCLOSURE_PILOT__LOGGING__JSON",
    ];

    fn clear_env() {
        for var in VARS {
            env::remove_var(var);
        }
    }

    #[test]
    fn test_load_defaults_from_empty_environment() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_env();
        let result = AppConfig::load();

        assert!(result.is_ok(), "Failed to load config: {:?}", result.err());
        let config = result.unwrap();
        assert_eq!(config.simulation.default_carbon_price, 140.0);
        assert_eq!(config.simulation.default_scenario, "1.5C");
        assert_eq!(config.pacing.factor, 1.0);
        assert_eq!(config.export.format, ExportFormat::Word);
        assert!(!config.ai.has_api_key());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_load_overrides_from_environment() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_env();
        env::set_var("DISCLOSURE_PILOT__AI__API_KEY", "AIza-test");
        env::set_var("DISCLOSURE_PILOT__SIMULATION__DEFAULT_CARBON_PRICE", "150");
        env::set_var("DISCLOSURE_PILOT__SIMULATION__DEFAULT_SCENARIO", "2.0C");
        env::set_var("DISCLOSURE_PILOT__PACING__FACTOR", "0");
        env::set_var("DISCLOSURE_PILOT__EXPORT__FORMAT", "markdown");
        env::set_var("DISCLOSURE_PILOT__LOGGING__JSON", "true");
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert_eq!(
            config.ai.api_key.as_ref().map(|k| k.expose_secret().as_str()),
            Some("AIza-test")
        );
        assert_eq!(config.simulation.default_carbon_price, 150.0);
        assert_eq!(config.simulation.default_scenario, "2.0C");
        assert_eq!(config.pacing.factor, 0.0);
        assert_eq!(config.export.format, ExportFormat::Markdown);
        assert!(config.logging.json);
    }

    #[test]
    fn test_validate_rejects_negative_pacing() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_env();
        env::set_var("DISCLOSURE_PILOT__PACING__FACTOR", "-2");
        let result = AppConfig::load_validated();
        clear_env();

        assert!(matches!(result, Err(ConfigError::ValidationFailed(_))));
    }
}
