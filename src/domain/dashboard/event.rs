//! Inputs to and outputs of the dashboard state machine.

use super::view::{ChatMessage, ConnectMode, SourceDocument, View};
use crate::domain::foundation::Percentage;
use crate::domain::gap_analysis::{AnalysisSource, ComparisonRow, GapAssessment};
use crate::domain::simulation::{ImpactSeries, ScenarioParameters, Scope3Category};

/// Something that happened: a user interaction or a finished background job.
#[derive(Debug, Clone, PartialEq)]
pub enum DashboardEvent {
    Navigate(View),

    SetCarbonPrice(f64),
    SelectScenario(String),
    AddCategory(Scope3Category),
    RemoveCategory(Scope3Category),
    SetCategoryReduction(Scope3Category, Percentage),
    RunSimulation,
    SimulationCompleted { generation: u64, series: ImpactSeries },

    ToggleSourcePanel,
    OpenCalculationModal,
    CloseCalculationModal,
    ReportsUploaded(Vec<String>),

    ConnectAgent {
        mode: ConnectMode,
        credential_present: bool,
        folder: Option<String>,
    },
    AgentReady {
        mode: ConnectMode,
        standards: Vec<SourceDocument>,
    },
    AgentFailed { reason: String },

    StartGapAnalysis,
    GapAnalysisCompleted {
        rows: Vec<ComparisonRow>,
        source: AnalysisSource,
    },
    UpdateGapAssessment(GapAssessment),
    AgentSays(String),

    StartDemo,
    DemoFinished,

    ExportDraft,
    DraftExported { filename: String },
}

/// Work the controller must perform after a transition.
///
/// Presentation effects go straight to the presenter; the rest start
/// background jobs whose results come back as events.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    ShowView(View),
    RenderImpactChart(ImpactSeries),
    RenderGapChart(GapAssessment),
    RenderComparisonTable(Vec<ComparisonRow>),
    UpdateControlLabel { control: String, text: String },
    AppendMessage(ChatMessage),
    Alert(String),

    ComputeImpact {
        generation: u64,
        parameters: ScenarioParameters,
    },
    InitializeAgent {
        mode: ConnectMode,
        folder: Option<String>,
    },
    RunGapAnalysis { use_ai: bool },
    RunDemo,
    ExportDraft { rows: Vec<ComparisonRow> },
}

impl Effect {
    /// True for effects that only touch the presentation surface.
    pub fn is_presentational(&self) -> bool {
        matches!(
            self,
            Effect::ShowView(_)
                | Effect::RenderImpactChart(_)
                | Effect::RenderGapChart(_)
                | Effect::RenderComparisonTable(_)
                | Effect::UpdateControlLabel { .. }
                | Effect::AppendMessage(_)
                | Effect::Alert(_)
        )
    }
}
