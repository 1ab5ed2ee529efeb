//! Configuration error types

use thiserror::Error;

/// Errors that can occur during configuration loading
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration loading failed: {0}")]
    LoadError(#[from] config::ConfigError),

    #[error("Validation failed: {0}")]
    ValidationFailed(#[from] ValidationError),
}

/// Errors that can occur during configuration validation
#[derive(Debug, Error, PartialEq)]
pub enum ValidationError {
    #[error("Required configuration missing: {0}")]
    MissingRequired(&'static str),

    #[error("Invalid AI request timeout")]
    InvalidTimeout,

    #[error("Carbon price range is inverted: min {min} > max {max}")]
    InvalidCarbonPriceRange { min: f64, max: f64 },

    #[error("Default carbon price {0} is outside the configured range")]
    DefaultCarbonPriceOutOfRange(f64),

    #[error("Pacing factor must be a finite number between 0 and 100, got {0}")]
    InvalidPacingFactor(f64),

    #[error("Invalid log level: {0}")]
    InvalidLogLevel(String),
}
