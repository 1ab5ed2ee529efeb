//! Dashboard Presenter Port - The presentation surface.
//!
//! Receives the presentational effects produced by the dashboard state
//! machine: chart renders, table updates, chat messages and alerts.
//! Implementations must not block; they are called while the controller
//! drains its effect queue.

use crate::domain::dashboard::{ChatMessage, View};
use crate::domain::gap_analysis::{ComparisonRow, GapAssessment};
use crate::domain::simulation::ImpactSeries;

pub trait DashboardPresenter: Send + Sync {
    fn show_view(&self, view: View);

    fn render_impact_chart(&self, series: &ImpactSeries);

    /// Renders the assessment over the required-level reference.
    fn render_gap_chart(&self, assessment: &GapAssessment, required: &GapAssessment);

    /// An empty slice clears the table.
    fn render_comparison_table(&self, rows: &[ComparisonRow]);

    fn update_control_label(&self, control: &str, text: &str);

    fn append_message(&self, message: &ChatMessage);

    fn alert(&self, text: &str);
}
