//! Disclosure pillars and fulfilment scores shown on the radar chart.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::foundation::Percentage;

/// The six axes of the gap radar chart, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DisclosurePillar {
    Governance,
    Strategy,
    RiskManagement,
    MetricsAndTargets,
    FinancialImpact,
    DataReliability,
}

impl DisclosurePillar {
    pub const ALL: [DisclosurePillar; 6] = [
        DisclosurePillar::Governance,
        DisclosurePillar::Strategy,
        DisclosurePillar::RiskManagement,
        DisclosurePillar::MetricsAndTargets,
        DisclosurePillar::FinancialImpact,
        DisclosurePillar::DataReliability,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            DisclosurePillar::Governance => "Governance",
            DisclosurePillar::Strategy => "Strategy",
            DisclosurePillar::RiskManagement => "Risk Management",
            DisclosurePillar::MetricsAndTargets => "Metrics & Targets",
            DisclosurePillar::FinancialImpact => "Financial Impact",
            DisclosurePillar::DataReliability => "Data Reliability",
        }
    }

    fn index(&self) -> usize {
        Self::ALL.iter().position(|p| p == self).unwrap_or(0)
    }
}

impl fmt::Display for DisclosurePillar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Fulfilment of each pillar against the standard, as one radar dataset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GapAssessment {
    pub label: String,
    scores: [Percentage; 6],
}

impl GapAssessment {
    /// Scores must be given in [`DisclosurePillar::ALL`] order.
    pub fn new(label: impl Into<String>, scores: [Percentage; 6]) -> Self {
        Self {
            label: label.into(),
            scores,
        }
    }

    /// Dataset shown before any analysis has run.
    pub fn baseline() -> Self {
        Self::new("Before analysis", [Percentage::ZERO; 6])
    }

    /// The level the standard requires: full disclosure on every pillar.
    pub fn required_level() -> Self {
        Self::new("SSBJ required level", [Percentage::HUNDRED; 6])
    }

    /// Result of analysing the bundled sample securities report.
    pub fn demo_result() -> Self {
        Self::new(
            "After analysis (FY2024 actual)",
            [85, 40, 55, 70, 20, 90].map(Percentage::new),
        )
    }

    pub fn score(&self, pillar: DisclosurePillar) -> Percentage {
        self.scores[pillar.index()]
    }

    pub fn scores(&self) -> &[Percentage; 6] {
        &self.scores
    }

    /// Shortfall against the required level.
    pub fn gap(&self, pillar: DisclosurePillar) -> Percentage {
        self.score(pillar).shortfall()
    }

    /// Lowest-scoring pillar; ties resolve to the earlier axis.
    pub fn weakest_pillar(&self) -> DisclosurePillar {
        DisclosurePillar::ALL
            .iter()
            .copied()
            .min_by_key(|p| (self.score(*p), p.index()))
            .unwrap_or(DisclosurePillar::Governance)
    }

    /// Pillars whose score is below `threshold`, in axis order.
    pub fn pillars_below(&self, threshold: Percentage) -> Vec<DisclosurePillar> {
        DisclosurePillar::ALL
            .iter()
            .copied()
            .filter(|p| self.score(*p) < threshold)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn demo_result_scores_follow_axis_order() {
        let demo = GapAssessment::demo_result();
        assert_eq!(demo.score(DisclosurePillar::Governance), Percentage::new(85));
        assert_eq!(demo.score(DisclosurePillar::FinancialImpact), Percentage::new(20));
        assert_eq!(demo.score(DisclosurePillar::DataReliability), Percentage::new(90));
    }

    #[test]
    fn gap_is_shortfall_to_required_level() {
        let demo = GapAssessment::demo_result();
        assert_eq!(demo.gap(DisclosurePillar::Strategy), Percentage::new(60));
        assert_eq!(
            GapAssessment::required_level().gap(DisclosurePillar::Strategy),
            Percentage::ZERO
        );
    }

    #[test]
    fn weakest_pillar_prefers_earlier_axis_on_tie() {
        assert_eq!(
            GapAssessment::demo_result().weakest_pillar(),
            DisclosurePillar::FinancialImpact
        );
        assert_eq!(
            GapAssessment::baseline().weakest_pillar(),
            DisclosurePillar::Governance
        );
    }

    #[test]
    fn pillars_below_threshold() {
        let below = GapAssessment::demo_result().pillars_below(Percentage::new(60));
        assert_eq!(
            below,
            vec![
                DisclosurePillar::Strategy,
                DisclosurePillar::RiskManagement,
                DisclosurePillar::FinancialImpact
            ]
        );
    }
}
