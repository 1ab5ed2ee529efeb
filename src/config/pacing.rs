//! Presentation pacing configuration
//!
//! Delays that give the dashboard its step-by-step feel. All are scaled by
//! `factor`; a factor of 0 runs everything immediately.

use serde::Deserialize;
use std::time::Duration;

use super::error::ValidationError;

/// Largest accepted pacing factor.
pub const MAX_PACING_FACTOR: f64 = 100.0;

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct PacingConfig {
    /// Wait before the simulation result is shown
    #[serde(default = "default_simulation_delay")]
    pub simulation_delay_ms: u64,

    /// Minimum time the gap analysis appears to run
    #[serde(default = "default_analysis_delay")]
    pub analysis_delay_ms: u64,

    /// Live agent connection
    #[serde(default = "default_connect_delay")]
    pub connect_delay_ms: u64,

    /// Sample environment setup
    #[serde(default = "default_sample_connect_delay")]
    pub sample_connect_delay_ms: u64,

    #[serde(default = "default_factor")]
    pub factor: f64,
}

impl PacingConfig {
    /// No delays at all.
    pub fn immediate() -> Self {
        Self {
            factor: 0.0,
            ..Default::default()
        }
    }

    /// Applies the pacing factor to a nominal delay.
    ///
    /// Saturates at `Duration::MAX` instead of overflowing.
    pub fn scale(&self, nominal: Duration) -> Duration {
        if self.factor <= 0.0 || !self.factor.is_finite() {
            return Duration::ZERO;
        }
        Duration::try_from_secs_f64(nominal.as_secs_f64() * self.factor).unwrap_or(Duration::MAX)
    }

    pub fn simulation_delay(&self) -> Duration {
        self.scale(Duration::from_millis(self.simulation_delay_ms))
    }

    pub fn analysis_delay(&self) -> Duration {
        self.scale(Duration::from_millis(self.analysis_delay_ms))
    }

    pub fn connect_delay(&self) -> Duration {
        self.scale(Duration::from_millis(self.connect_delay_ms))
    }

    pub fn sample_connect_delay(&self) -> Duration {
        self.scale(Duration::from_millis(self.sample_connect_delay_ms))
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if !self.factor.is_finite() || !(0.0..=MAX_PACING_FACTOR).contains(&self.factor) {
            return Err(ValidationError::InvalidPacingFactor(self.factor));
        }
        Ok(())
    }
}

impl Default for PacingConfig {
    fn default() -> Self {
        Self {
            simulation_delay_ms: default_simulation_delay(),
            analysis_delay_ms: default_analysis_delay(),
            connect_delay_ms: default_connect_delay(),
            sample_connect_delay_ms: default_sample_connect_delay(),
            factor: default_factor(),
        }
    }
}

fn default_simulation_delay() -> u64 {
    800
}

fn default_analysis_delay() -> u64 {
    2500
}

fn default_connect_delay() -> u64 {
    2000
}

fn default_sample_connect_delay() -> u64 {
    1500
}

fn default_factor() -> f64 {
    1.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_delays() {
        let pacing = PacingConfig::default();
        assert_eq!(pacing.simulation_delay(), Duration::from_millis(800));
        assert_eq!(pacing.analysis_delay(), Duration::from_millis(2500));
        assert_eq!(pacing.connect_delay(), Duration::from_millis(2000));
        assert_eq!(pacing.sample_connect_delay(), Duration::from_millis(1500));
    }

    #[test]
    fn test_factor_scales_delays() {
        let pacing = PacingConfig {
            factor: 0.5,
            ..Default::default()
        };
        assert_eq!(pacing.analysis_delay(), Duration::from_millis(1250));
    }

    #[test]
    fn test_immediate_has_no_delay() {
        let pacing = PacingConfig::immediate();
        assert_eq!(pacing.connect_delay(), Duration::ZERO);
        assert!(pacing.validate().is_ok());
    }

    #[test]
    fn test_negative_factor_rejected() {
        let pacing = PacingConfig {
            factor: -1.0,
            ..Default::default()
        };
        assert_eq!(pacing.validate(), Err(ValidationError::InvalidPacingFactor(-1.0)));
    }

    #[test]
    fn test_huge_factor_rejected() {
        let pacing = PacingConfig {
            factor: 1e300,
            ..Default::default()
        };
        assert_eq!(pacing.validate(), Err(ValidationError::InvalidPacingFactor(1e300)));

        let pacing = PacingConfig {
            factor: MAX_PACING_FACTOR,
            ..Default::default()
        };
        assert!(pacing.validate().is_ok());
    }

    #[test]
    fn test_scale_saturates_instead_of_overflowing() {
        let pacing = PacingConfig {
            factor: 1e300,
            ..Default::default()
        };
        assert_eq!(pacing.simulation_delay(), Duration::MAX);
    }
}
