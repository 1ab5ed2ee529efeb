//! Old-vs-new comparison table rows.

use serde::{Deserialize, Serialize};

/// One row of the comparison table: what the company discloses today and the
/// draft that would satisfy the standard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComparisonRow {
    pub item: String,
    pub current: String,
    pub proposed: String,
    pub rationale: String,
    /// Row links to the calculation-logic explanation.
    #[serde(default)]
    pub has_calculation_detail: bool,
}

impl ComparisonRow {
    pub fn new(
        item: impl Into<String>,
        current: impl Into<String>,
        proposed: impl Into<String>,
        rationale: impl Into<String>,
    ) -> Self {
        Self {
            item: item.into(),
            current: current.into(),
            proposed: proposed.into(),
            rationale: rationale.into(),
            has_calculation_detail: false,
        }
    }

    pub fn with_calculation_detail(mut self) -> Self {
        self.has_calculation_detail = true;
        self
    }
}

/// Where a set of comparison rows came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AnalysisSource {
    /// Generated by the AI collaborator.
    Ai,
    /// Deterministic rows used when the AI is unavailable or fails.
    Placeholder,
}

/// Rows shown when no AI output is available.
pub fn placeholder_rows() -> Vec<ComparisonRow> {
    vec![
        ComparisonRow::new(
            "Governance: climate-related risks and opportunities",
            "Climate matters are deliberated by the Environmental Committee and \
             reported to the Board and the President.",
            "The Board is responsible for overseeing climate-related risks and \
             opportunities and delegates specific management authority to executives. \
             The effectiveness of this oversight is evaluated annually and the \
             supervisory structure is documented (SSBJ S2 para. 26(a)).",
            "SSBJ S2 requires identifying the body accountable for oversight; the draft \
             goes beyond the existing reporting line and states the supervisory authority.",
        ),
        ComparisonRow::new(
            "Strategy: financial effects of transition risk",
            "We are monitoring the impact of future regulatory tightening on \
             consolidated results.",
            "Applying the IEA NZE scenario (1.5°C), the impact on company-wide \
             operating profit in 2030 is estimated at -5% to -8%, driven mainly by \
             higher raw-material energy costs from rising carbon prices (SSBJ S2 para. 34).",
            "The standard requires quantitative effects; the draft shifts to estimates \
             based on a specific scenario.",
        )
        .with_calculation_detail(),
        ComparisonRow::new(
            "Metrics and targets: Scope 3 emissions",
            "We strive to reduce supply-chain emissions.",
            "Scope 3 Category 1 (purchased goods and services) and Category 11 (use of \
             sold products) are identified as material. FY2024 emissions were \
             842,000 t-CO2, with a target of a 30% reduction by 2030 versus FY2023.",
            "Links category-level calculation bases to concrete reduction targets in line \
             with SSBJ S2 para. 56.",
        ),
    ]
}
