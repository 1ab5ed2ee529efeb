//! Impact Projection Calculator.
//!
//! Maps [`ScenarioParameters`] to an [`ImpactSeries`]:
//!
//! ```text
//! carbon_weight    = carbon_price / 100
//! reduction_weight = 1 - (sum(reductions) / (max(active, 1) * 100) * 0.5)
//! impact[i]        = round1(base_impact * (i + 1) * 2 * carbon_weight * reduction_weight)
//! ```
//!
//! Pure and total: unknown scenarios, empty reduction lists and a zero
//! category count are normalised by defaults, never rejected.

use super::impact::{ImpactPoint, ImpactSeries, PROJECTION_YEARS};
use super::parameters::ScenarioParameters;
use super::scenario::ClimateScenario;
use crate::domain::foundation::Percentage;

/// Share of the impact that full reduction effort can remove.
pub const MAX_DAMPING: f64 = 0.5;

/// Stateless projection calculator.
pub struct ImpactCalculator;

impl ImpactCalculator {
    /// Projects the financial impact for every year on the horizon.
    pub fn project(params: &ScenarioParameters) -> ImpactSeries {
        let base_impact = ClimateScenario::resolve(&params.scenario_id).base_impact();
        let carbon_weight = Self::carbon_weight(params.carbon_price);
        let reduction_weight =
            Self::reduction_weight(&params.category_reductions, params.active_category_count);

        let points = PROJECTION_YEARS
            .iter()
            .enumerate()
            .map(|(i, &year)| {
                // Multiplication order is part of the contract: it keeps results
                // bit-identical with the published demo figures.
                let raw = base_impact * Self::year_factor(i) * carbon_weight * reduction_weight;
                ImpactPoint {
                    year,
                    impact: round_to_tenth(raw),
                }
            })
            .collect();

        ImpactSeries::new(points, Self::label(params))
    }

    /// Linear multiplier from the carbon price ($100 = 1.0).
    pub fn carbon_weight(carbon_price: f64) -> f64 {
        carbon_price / 100.0
    }

    /// Damping multiplier in `[0.5, 1.0]` for reductions within the active count.
    ///
    /// A count of zero normalises as one; it does not change the sum.
    pub fn reduction_weight(reductions: &[Percentage], active_category_count: usize) -> f64 {
        let reduction_sum: f64 = reductions.iter().map(Percentage::as_f64).sum();
        let denominator = (active_category_count.max(1) as f64) * 100.0;
        1.0 - (reduction_sum / denominator * MAX_DAMPING)
    }

    /// 2, 4, 6, ... for year index 0, 1, 2, ...
    pub fn year_factor(index: usize) -> f64 {
        ((index + 1) * 2) as f64
    }

    /// Chart legend for a projection.
    pub fn label(params: &ScenarioParameters) -> String {
        format!(
            "{} / carbon price ${} profit impact",
            params.scenario_id, params.carbon_price
        )
    }
}

/// Rounds to one decimal place, halves toward positive infinity.
fn round_to_tenth(value: f64) -> f64 {
    (value * 10.0 + 0.5).floor() / 10.0
}
