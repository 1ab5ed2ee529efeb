//! Inputs to the impact projection.

use serde::{Deserialize, Serialize};

use super::scope3::ActiveCategories;
use crate::domain::foundation::Percentage;

/// Carbon price preselected on the simulation view.
pub const DEFAULT_CARBON_PRICE: f64 = 140.0;

/// Scenario preselected on the simulation view.
pub const DEFAULT_SCENARIO_ID: &str = "1.5C";

/// Everything the projection depends on, already extracted from the controls.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScenarioParameters {
    /// Carbon price assumption in USD per tonne.
    pub carbon_price: f64,
    /// Free-form scenario identifier; see `ClimateScenario::resolve`.
    pub scenario_id: String,
    /// Reduction targets of the active categories, in slider order.
    #[serde(default)]
    pub category_reductions: Vec<Percentage>,
    /// Number of active categories; the normalisation denominator.
    #[serde(default)]
    pub active_category_count: usize,
}

impl ScenarioParameters {
    pub fn new(carbon_price: f64, scenario_id: impl Into<String>) -> Self {
        Self {
            carbon_price,
            scenario_id: scenario_id.into(),
            category_reductions: Vec::new(),
            active_category_count: 0,
        }
    }

    /// Sets reductions explicitly. The active count is left untouched so
    /// callers can model a count that differs from the slider list.
    pub fn with_reductions(mut self, reductions: Vec<Percentage>) -> Self {
        self.category_reductions = reductions;
        self
    }

    pub fn with_active_category_count(mut self, count: usize) -> Self {
        self.active_category_count = count;
        self
    }

    /// Takes both the reductions and the count from the active categories.
    pub fn with_categories(mut self, categories: &ActiveCategories) -> Self {
        self.category_reductions = categories.reductions();
        self.active_category_count = categories.count();
        self
    }
}

impl Default for ScenarioParameters {
    fn default() -> Self {
        Self::new(DEFAULT_CARBON_PRICE, DEFAULT_SCENARIO_ID)
    }
}
