use super::*;
use async_trait::async_trait;

use crate::adapters::{
    LocalDocumentStore, MockAIProvider, MockAIProviderFactory, PresenterCall, RecordingPresenter,
    SimulatedDriveCatalog, TextExportService,
};
use crate::domain::dashboard::{AgentStatus, View};
use crate::domain::demo::{DemoAction, DemoStep};
use crate::domain::gap_analysis::{placeholder_rows, AnalysisSource, ComparisonRow};
use crate::ports::{ExportedDocument, StorageError};

struct FailingStore;

#[async_trait]
impl DocumentStore for FailingStore {
    async fn save(&self, _document: &ExportedDocument) -> Result<StoredDocument, StorageError> {
        Err(StorageError::permission_denied("/readonly"))
    }
}

fn ai_rows() -> Vec<ComparisonRow> {
    vec![ComparisonRow::new(
        "Transition plan",
        "Not disclosed.",
        "Describe the 2030 interim targets.",
        "SSBJ requires transition plan disclosure.",
    )]
}

fn controller_with(
    presenter: &RecordingPresenter,
    factory: Option<MockAIProviderFactory>,
    store: Arc<dyn DocumentStore>,
) -> DashboardController {
    let deps = DashboardDependencies {
        presenter: Arc::new(presenter.clone()),
        catalog: Arc::new(SimulatedDriveCatalog::new()),
        exporter: Arc::new(TextExportService::new()),
        store,
        provider_factory: factory.map(|f| Arc::new(f) as Arc<dyn AIProviderFactory>),
    };
    DashboardController::new(deps, &AppConfig::default())
}

fn controller(presenter: &RecordingPresenter) -> DashboardController {
    let dir = std::env::temp_dir().join("disclosure-pilot-controller-tests");
    controller_with(presenter, None, Arc::new(LocalDocumentStore::new(dir)))
}

#[tokio::test(start_paused = true)]
async fn run_simulation_renders_chart_and_summary() {
    let presenter = RecordingPresenter::new();
    let controller = controller(&presenter);

    controller.dispatch(DashboardEvent::RunSimulation).await.unwrap();

    let charts = presenter.impact_charts();
    assert_eq!(charts.len(), 1);
    assert_eq!(charts[0].points().len(), 6);

    let state = controller.state().await;
    assert!(!state.simulation_running);
    assert_eq!(state.latest_series.as_ref(), Some(&charts[0]));
    assert!(presenter.messages()[0].starts_with("Simulation results updated."));
}

#[tokio::test(start_paused = true)]
async fn concurrent_runs_render_only_latest_result() {
    let presenter = RecordingPresenter::new();
    let controller = controller(&presenter);

    let (a, b) = tokio::join!(
        controller.dispatch(DashboardEvent::RunSimulation),
        controller.dispatch(DashboardEvent::RunSimulation),
    );
    a.unwrap();
    b.unwrap();

    assert_eq!(presenter.impact_charts().len(), 1);
    let state = controller.state().await;
    assert_eq!(state.simulation_generation, 2);
    assert!(!state.simulation_running);
}

#[tokio::test(start_paused = true)]
async fn sample_connection_reaches_demo_mode_without_provider() {
    let presenter = RecordingPresenter::new();
    let controller = controller(&presenter);

    controller.connect_sample().await.unwrap();

    let state = controller.state().await;
    assert_eq!(state.agent_status, AgentStatus::Demo);
    assert_eq!(state.standards_documents.len(), 1);
    assert!(!controller.has_provider().await);
}

#[tokio::test(start_paused = true)]
async fn live_connection_without_key_alerts() {
    let presenter = RecordingPresenter::new();
    let factory = MockAIProviderFactory::new(MockAIProvider::new());
    let dir = std::env::temp_dir();
    let controller = controller_with(&presenter, Some(factory), Arc::new(LocalDocumentStore::new(dir)));

    controller.connect_live(None, None).await.unwrap();

    assert_eq!(presenter.alerts(), vec!["Please enter the AI service API key.".to_string()]);
    assert_eq!(controller.state().await.agent_status, AgentStatus::Offline);
}

#[tokio::test(start_paused = true)]
async fn rejected_key_returns_agent_offline() {
    let presenter = RecordingPresenter::new();
    let factory = MockAIProviderFactory::new(MockAIProvider::new()).rejecting("bad-key");
    let dir = std::env::temp_dir();
    let controller = controller_with(&presenter, Some(factory), Arc::new(LocalDocumentStore::new(dir)));

    controller
        .connect_live(Some(Secret::new("bad-key".to_string())), None)
        .await
        .unwrap();

    assert_eq!(controller.state().await.agent_status, AgentStatus::Offline);
    assert!(!controller.has_provider().await);
    assert!(presenter.alerts()[0].starts_with("Initialization failed."));
}

#[tokio::test(start_paused = true)]
async fn live_agent_analysis_uses_ai_rows() {
    let presenter = RecordingPresenter::new();
    let factory = MockAIProviderFactory::new(MockAIProvider::new().with_rows(&ai_rows()));
    let dir = std::env::temp_dir();
    let controller = controller_with(&presenter, Some(factory), Arc::new(LocalDocumentStore::new(dir)));

    controller
        .connect_live(Some(Secret::new("key-123".to_string())), Some("folder-1".into()))
        .await
        .unwrap();
    assert_eq!(controller.state().await.agent_status, AgentStatus::Online);

    controller.dispatch(DashboardEvent::StartGapAnalysis).await.unwrap();

    let state = controller.state().await;
    assert_eq!(state.analysis_source, Some(AnalysisSource::Ai));
    assert_eq!(state.comparison_rows[0].item, "Transition plan");
    assert!(state.export_available);
    assert_eq!(presenter.last_table().map(|t| t.len()), Some(1));
}

#[tokio::test(start_paused = true)]
async fn offline_analysis_shows_placeholder_rows() {
    let presenter = RecordingPresenter::new();
    let controller = controller(&presenter);

    controller.dispatch(DashboardEvent::StartGapAnalysis).await.unwrap();

    let state = controller.state().await;
    assert_eq!(state.comparison_rows, placeholder_rows());
    assert_eq!(state.analysis_source, Some(AnalysisSource::Placeholder));
}

#[tokio::test(start_paused = true)]
async fn demo_runs_script_in_order() {
    let presenter = RecordingPresenter::new();
    let controller = controller(&presenter).with_demo_script(DemoScript::new(vec![
        DemoStep::immediately(DemoAction::say("one")),
        DemoStep::new(500, DemoAction::SwitchView(View::Comparison)),
        DemoStep::new(500, DemoAction::say("two")),
    ]));

    controller.dispatch(DashboardEvent::StartDemo).await.unwrap();

    assert_eq!(presenter.messages(), vec!["one".to_string(), "two".to_string()]);
    assert_eq!(presenter.views(), vec![View::Comparison]);
    assert!(!controller.state().await.demo_running);
}

#[tokio::test]
async fn gap_chart_is_drawn_against_required_level() {
    let presenter = RecordingPresenter::new();
    let controller = controller(&presenter);

    controller
        .dispatch(DashboardEvent::UpdateGapAssessment(GapAssessment::demo_result()))
        .await
        .unwrap();

    assert_eq!(
        presenter.calls(),
        vec![PresenterCall::GapChart {
            assessment: GapAssessment::demo_result(),
            required: GapAssessment::required_level(),
        }]
    );
}

#[tokio::test(start_paused = true)]
async fn export_failure_alerts_and_returns_error() {
    let presenter = RecordingPresenter::new();
    let controller = controller_with(&presenter, None, Arc::new(FailingStore));

    controller.dispatch(DashboardEvent::StartGapAnalysis).await.unwrap();
    let result = controller.dispatch(DashboardEvent::ExportDraft).await;

    assert!(matches!(result, Err(ControllerError::Export(_))));
    assert!(presenter.alerts()[0].starts_with("Export failed:"));
    assert!(controller.last_export().await.is_none());
}
