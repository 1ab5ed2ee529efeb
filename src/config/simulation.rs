//! Simulation control configuration

use serde::Deserialize;

use super::error::ValidationError;
use crate::domain::dashboard::SimulationInputs;
use crate::domain::simulation::{DEFAULT_CARBON_PRICE, DEFAULT_SCENARIO_ID};

/// Initial values and bounds of the simulation controls
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct SimulationConfig {
    #[serde(default = "default_carbon_price")]
    pub default_carbon_price: f64,

    #[serde(default = "default_scenario")]
    pub default_scenario: String,

    /// Slider lower bound. The calculator itself does not clamp.
    #[serde(default)]
    pub min_carbon_price: f64,

    #[serde(default = "default_max_carbon_price")]
    pub max_carbon_price: f64,
}

impl SimulationConfig {
    /// Initial simulation inputs for a fresh dashboard.
    pub fn initial_inputs(&self) -> SimulationInputs {
        SimulationInputs::new(self.default_carbon_price, self.default_scenario.clone())
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.min_carbon_price > self.max_carbon_price {
            return Err(ValidationError::InvalidCarbonPriceRange {
                min: self.min_carbon_price,
                max: self.max_carbon_price,
            });
        }
        if !(self.min_carbon_price..=self.max_carbon_price).contains(&self.default_carbon_price) {
            return Err(ValidationError::DefaultCarbonPriceOutOfRange(
                self.default_carbon_price,
            ));
        }
        Ok(())
    }
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            default_carbon_price: default_carbon_price(),
            default_scenario: default_scenario(),
            min_carbon_price: 0.0,
            max_carbon_price: default_max_carbon_price(),
        }
    }
}

fn default_carbon_price() -> f64 {
    DEFAULT_CARBON_PRICE
}

fn default_scenario() -> String {
    DEFAULT_SCENARIO_ID.to_string()
}

fn default_max_carbon_price() -> f64 {
    200.0
}
