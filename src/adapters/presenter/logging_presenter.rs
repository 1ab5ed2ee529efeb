//! Presenter that emits every presentation call as a tracing event.
//!
//! Used by the binary in place of a chart surface.

use crate::domain::dashboard::{ChatMessage, Sender, View};
use crate::domain::gap_analysis::{ComparisonRow, DisclosurePillar, GapAssessment};
use crate::domain::simulation::ImpactSeries;
use crate::ports::DashboardPresenter;

#[derive(Debug, Clone, Default)]
pub struct LoggingPresenter;

impl LoggingPresenter {
    pub fn new() -> Self {
        Self
    }
}

impl DashboardPresenter for LoggingPresenter {
    fn show_view(&self, view: View) {
        tracing::info!(%view, "View shown");
    }

    fn render_impact_chart(&self, series: &ImpactSeries) {
        let values = series
            .values()
            .iter()
            .map(|v| v.to_string())
            .collect::<Vec<_>>()
            .join(", ");
        tracing::info!(label = series.label(), values = %values, "Impact chart rendered");
    }

    fn render_gap_chart(&self, assessment: &GapAssessment, required: &GapAssessment) {
        let weakest = assessment.weakest_pillar();
        tracing::info!(
            label = %assessment.label,
            reference = %required.label,
            weakest = weakest.label(),
            weakest_score = %assessment.score(weakest),
            governance = %assessment.score(DisclosurePillar::Governance),
            "Gap chart rendered"
        );
    }

    fn render_comparison_table(&self, rows: &[ComparisonRow]) {
        if rows.is_empty() {
            tracing::debug!("Comparison table cleared");
            return;
        }
        for row in rows {
            tracing::info!(item = %row.item, "Comparison row");
        }
    }

    fn update_control_label(&self, control: &str, text: &str) {
        tracing::debug!(control, text, "Control label updated");
    }

    fn append_message(&self, message: &ChatMessage) {
        match message.sender {
            Sender::Agent => tracing::info!(text = %message.text, "Agent"),
            Sender::User => tracing::info!(text = %message.text, "User"),
        }
    }

    fn alert(&self, text: &str) {
        tracing::warn!(text, "Alert");
    }
}
