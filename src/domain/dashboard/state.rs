//! The complete dashboard state.

use serde::Serialize;

use super::view::{AgentStatus, ChatMessage, SourceDocument, View};
use crate::domain::gap_analysis::{AnalysisSource, ComparisonRow, GapAssessment};
use crate::domain::simulation::{
    ActiveCategories, ImpactSeries, ScenarioParameters, DEFAULT_CARBON_PRICE, DEFAULT_SCENARIO_ID,
};

/// Current values of the simulation controls.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SimulationInputs {
    pub carbon_price: f64,
    pub scenario_id: String,
    pub categories: ActiveCategories,
}

impl SimulationInputs {
    pub fn new(carbon_price: f64, scenario_id: impl Into<String>) -> Self {
        Self {
            carbon_price,
            scenario_id: scenario_id.into(),
            categories: ActiveCategories::new(),
        }
    }

    /// Snapshot of the controls as calculator input.
    pub fn parameters(&self) -> ScenarioParameters {
        ScenarioParameters::new(self.carbon_price, self.scenario_id.clone())
            .with_categories(&self.categories)
    }
}

impl Default for SimulationInputs {
    fn default() -> Self {
        Self::new(DEFAULT_CARBON_PRICE, DEFAULT_SCENARIO_ID)
    }
}

/// Everything the dashboard shows, owned by the controller and changed only by
/// `transition`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardState {
    pub view: View,
    pub agent_status: AgentStatus,

    pub inputs: SimulationInputs,
    pub latest_series: Option<ImpactSeries>,
    /// Incremented per simulation request; completions with an older value are stale.
    pub simulation_generation: u64,
    pub simulation_running: bool,
    pub simulation_chart_ready: bool,

    pub gap_assessment: GapAssessment,
    pub comparison_rows: Vec<ComparisonRow>,
    pub analysis_source: Option<AnalysisSource>,
    pub analysis_running: bool,
    pub export_available: bool,
    pub last_export: Option<String>,

    pub demo_running: bool,
    pub source_panel_open: bool,
    pub calculation_modal_open: bool,

    pub standards_documents: Vec<SourceDocument>,
    pub company_documents: Vec<SourceDocument>,
    pub messages: Vec<ChatMessage>,
}

impl DashboardState {
    pub fn new(inputs: SimulationInputs) -> Self {
        Self {
            view: View::default(),
            agent_status: AgentStatus::default(),
            inputs,
            latest_series: None,
            simulation_generation: 0,
            simulation_running: false,
            simulation_chart_ready: false,
            gap_assessment: GapAssessment::baseline(),
            comparison_rows: Vec::new(),
            analysis_source: None,
            analysis_running: false,
            export_available: false,
            last_export: None,
            demo_running: false,
            source_panel_open: true,
            calculation_modal_open: false,
            standards_documents: Vec::new(),
            company_documents: Vec::new(),
            messages: Vec::new(),
        }
    }
}

impl Default for DashboardState {
    fn default() -> Self {
        Self::new(SimulationInputs::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::Percentage;
    use crate::domain::simulation::Scope3Category;

    #[test]
    fn default_state_starts_on_dashboard_offline() {
        let state = DashboardState::default();
        assert_eq!(state.view, View::Dashboard);
        assert_eq!(state.agent_status, AgentStatus::Offline);
        assert_eq!(state.gap_assessment, GapAssessment::baseline());
        assert!(state.latest_series.is_none());
    }

    #[test]
    fn inputs_snapshot_into_parameters() {
        let mut inputs = SimulationInputs::new(90.0, "2.0C");
        let c = Scope3Category::new(3).unwrap();
        inputs.categories.add(c).unwrap();
        inputs.categories.set_reduction(c, Percentage::new(25));

        let params = inputs.parameters();
        assert_eq!(params.carbon_price, 90.0);
        assert_eq!(params.scenario_id, "2.0C");
        assert_eq!(params.category_reductions, vec![Percentage::new(25)]);
        assert_eq!(params.active_category_count, 1);
    }
}
