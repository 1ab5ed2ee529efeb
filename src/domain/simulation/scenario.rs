//! Climate transition scenarios and their base financial impact.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A named climate-transition assumption.
///
/// The set is closed: any identifier that does not name one of the aligned
/// pathways resolves to [`ClimateScenario::Other`] instead of failing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClimateScenario {
    /// 1.5°C-aligned pathway (e.g. IEA NZE).
    OnePointFive,
    /// Well-below 2°C pathway.
    TwoPointZero,
    /// Any other or unrecognised scenario.
    Other,
}

/// Degree markers accepted after the temperature figure.
const DEGREE_MARKERS: &[&str] = &["C", "℃", "°C", "°"];

impl ClimateScenario {
    /// Base impact used when the identifier is not recognised.
    pub const DEFAULT_BASE_IMPACT: f64 = -10.0;

    /// Resolves a free-form scenario identifier.
    ///
    /// Matches `1.5C`, `1.5℃`, `1.5°C` and the same forms embedded in a longer
    /// label such as `"1.5℃ scenario (NZE)"`. Plain substring match: `11.5℃`
    /// contains `1.5℃` and resolves as 1.5C.
    pub fn resolve(id: &str) -> Self {
        if contains_temperature(id, "1.5") {
            ClimateScenario::OnePointFive
        } else if contains_temperature(id, "2.0") {
            ClimateScenario::TwoPointZero
        } else {
            ClimateScenario::Other
        }
    }

    /// Unadjusted yearly impact magnitude for this scenario.
    pub fn base_impact(&self) -> f64 {
        match self {
            ClimateScenario::OnePointFive => -50.0,
            ClimateScenario::TwoPointZero => -30.0,
            ClimateScenario::Other => Self::DEFAULT_BASE_IMPACT,
        }
    }

    /// Canonical identifier.
    pub fn canonical_id(&self) -> &'static str {
        match self {
            ClimateScenario::OnePointFive => "1.5C",
            ClimateScenario::TwoPointZero => "2.0C",
            ClimateScenario::Other => "other",
        }
    }
}

fn contains_temperature(id: &str, figure: &str) -> bool {
    id.match_indices(figure).any(|(idx, _)| {
        let rest = id[idx + figure.len()..].trim_start();
        DEGREE_MARKERS.iter().any(|m| rest.starts_with(m))
    })
}

impl fmt::Display for ClimateScenario {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.canonical_id())
    }
}
