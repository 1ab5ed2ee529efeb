//! DashboardController - Owns the dashboard state and runs its effects.
//!
//! Every interaction enters through `dispatch`. The controller applies the
//! pure `transition`, hands presentational effects to the presenter and runs
//! the rest through the handlers. Their results come back as events and are
//! processed before anything queued earlier, so causal order is kept.
//!
//! The state lock is held only while a transition is computed, never across
//! a handler or a pacing delay. Concurrent dispatches interleave; stale
//! simulation results are dropped by the generation check in `transition`.

use std::collections::VecDeque;
use std::sync::Arc;
use std::time::Duration;

use secrecy::{ExposeSecret, Secret};
use tokio::sync::{Mutex, RwLock};
use tokio::time::sleep;
use tracing::{debug, error, instrument};

use super::error::ControllerError;
use super::handlers::{
    ConnectAgentCommand, ConnectAgentHandler, ExportDraftCommand, ExportDraftHandler,
    RunGapAnalysisCommand, RunGapAnalysisHandler, RunSimulationCommand, RunSimulationHandler,
};
use crate::config::{AppConfig, PacingConfig};
use crate::domain::dashboard::{transition, ConnectMode, DashboardEvent, DashboardState, Effect};
use crate::domain::demo::DemoScript;
use crate::domain::gap_analysis::GapAssessment;
use crate::ports::{
    AIProvider, AIProviderFactory, DashboardPresenter, DocumentExportService, DocumentStore,
    SourceCatalog, StoredDocument,
};

/// Collaborators the controller needs.
pub struct DashboardDependencies {
    pub presenter: Arc<dyn DashboardPresenter>,
    pub catalog: Arc<dyn SourceCatalog>,
    pub exporter: Arc<dyn DocumentExportService>,
    pub store: Arc<dyn DocumentStore>,
    /// Without a factory, live connections fail and only sample mode works.
    pub provider_factory: Option<Arc<dyn AIProviderFactory>>,
}

enum Work {
    Event(DashboardEvent),
    Pause(Duration),
}

pub struct DashboardController {
    state: Mutex<DashboardState>,
    presenter: Arc<dyn DashboardPresenter>,
    simulation: RunSimulationHandler,
    connect: ConnectAgentHandler,
    analysis: RunGapAnalysisHandler,
    export: ExportDraftHandler,
    pacing: PacingConfig,
    demo_script: DemoScript,
    configured_key: Option<Secret<String>>,
    pending_credential: Mutex<Option<Secret<String>>>,
    provider: RwLock<Option<Arc<dyn AIProvider>>>,
    last_export: Mutex<Option<StoredDocument>>,
}

impl DashboardController {
    pub fn new(deps: DashboardDependencies, config: &AppConfig) -> Self {
        let pacing = config.pacing.clone();
        Self {
            state: Mutex::new(DashboardState::new(config.simulation.initial_inputs())),
            presenter: deps.presenter,
            simulation: RunSimulationHandler::new(pacing.clone()),
            connect: ConnectAgentHandler::new(
                deps.catalog.clone(),
                deps.provider_factory,
                pacing.clone(),
            ),
            analysis: RunGapAnalysisHandler::new(deps.catalog, pacing.clone(), config.ai.timeout()),
            export: ExportDraftHandler::new(deps.exporter, deps.store, config.export.clone()),
            pacing,
            demo_script: DemoScript::standard(),
            configured_key: config.ai.api_key.clone(),
            pending_credential: Mutex::new(None),
            provider: RwLock::new(None),
            last_export: Mutex::new(None),
        }
    }

    /// Replaces the walkthrough run by `StartDemo`.
    pub fn with_demo_script(mut self, script: DemoScript) -> Self {
        self.demo_script = script;
        self
    }

    /// Snapshot of the current state.
    pub async fn state(&self) -> DashboardState {
        self.state.lock().await.clone()
    }

    pub async fn last_export(&self) -> Option<StoredDocument> {
        self.last_export.lock().await.clone()
    }

    pub async fn has_provider(&self) -> bool {
        self.provider.read().await.is_some()
    }

    /// Connects the agent to the live AI service.
    ///
    /// Falls back to the configured key when `api_key` is `None`.
    pub async fn connect_live(
        &self,
        api_key: Option<Secret<String>>,
        folder: Option<String>,
    ) -> Result<(), ControllerError> {
        let credential = api_key.or_else(|| self.configured_key.clone());
        let credential_present = credential
            .as_ref()
            .is_some_and(|k| !k.expose_secret().trim().is_empty());
        *self.pending_credential.lock().await = credential;

        self.dispatch(DashboardEvent::ConnectAgent {
            mode: ConnectMode::Live,
            credential_present,
            folder,
        })
        .await
    }

    pub async fn connect_sample(&self) -> Result<(), ControllerError> {
        self.dispatch(DashboardEvent::ConnectAgent {
            mode: ConnectMode::Sample,
            credential_present: false,
            folder: None,
        })
        .await
    }

    /// Processes an event and everything it causes.
    #[instrument(skip_all)]
    pub async fn dispatch(&self, event: DashboardEvent) -> Result<(), ControllerError> {
        let mut queue = VecDeque::from([Work::Event(event)]);

        while let Some(work) = queue.pop_front() {
            match work {
                Work::Pause(delay) => sleep(delay).await,
                Work::Event(event) => {
                    let effects = self.apply(event).await;
                    let mut follow_ups = Vec::new();
                    for effect in effects {
                        follow_ups.extend(self.perform(effect).await?);
                    }
                    for work in follow_ups.into_iter().rev() {
                        queue.push_front(work);
                    }
                }
            }
        }
        Ok(())
    }

    async fn apply(&self, event: DashboardEvent) -> Vec<Effect> {
        let mut state = self.state.lock().await;
        let next = transition(&state, event);
        *state = next.state;
        next.effects
    }

    async fn perform(&self, effect: Effect) -> Result<Vec<Work>, ControllerError> {
        if !effect.is_presentational() {
            debug!(?effect, "Running effect");
        }

        let follow_ups = match effect {
            Effect::ShowView(view) => {
                self.presenter.show_view(view);
                Vec::new()
            }
            Effect::RenderImpactChart(series) => {
                self.presenter.render_impact_chart(&series);
                Vec::new()
            }
            Effect::RenderGapChart(assessment) => {
                self.presenter
                    .render_gap_chart(&assessment, &GapAssessment::required_level());
                Vec::new()
            }
            Effect::RenderComparisonTable(rows) => {
                self.presenter.render_comparison_table(&rows);
                Vec::new()
            }
            Effect::UpdateControlLabel { control, text } => {
                self.presenter.update_control_label(&control, &text);
                Vec::new()
            }
            Effect::AppendMessage(message) => {
                self.presenter.append_message(&message);
                Vec::new()
            }
            Effect::Alert(text) => {
                self.presenter.alert(&text);
                Vec::new()
            }

            Effect::ComputeImpact {
                generation,
                parameters,
            } => {
                let result = self
                    .simulation
                    .handle(RunSimulationCommand {
                        generation,
                        parameters,
                    })
                    .await;
                vec![Work::Event(DashboardEvent::SimulationCompleted {
                    generation: result.generation,
                    series: result.series,
                })]
            }

            Effect::InitializeAgent { mode, folder } => {
                let credential = self.pending_credential.lock().await.take();
                let event = match self
                    .connect
                    .handle(ConnectAgentCommand {
                        mode,
                        folder,
                        credential,
                    })
                    .await
                {
                    Ok(connection) => {
                        *self.provider.write().await = connection.provider;
                        DashboardEvent::AgentReady {
                            mode: connection.mode,
                            standards: connection.standards,
                        }
                    }
                    Err(e) => {
                        error!(error = %e, ?mode, "Agent initialization failed");
                        *self.provider.write().await = None;
                        DashboardEvent::AgentFailed {
                            reason: e.to_string(),
                        }
                    }
                };
                vec![Work::Event(event)]
            }

            Effect::RunGapAnalysis { use_ai } => {
                let provider = if use_ai {
                    self.provider.read().await.clone()
                } else {
                    None
                };
                let (standards, reports) = {
                    let state = self.state.lock().await;
                    (
                        state.standards_documents.clone(),
                        state.company_documents.clone(),
                    )
                };
                let outcome = self
                    .analysis
                    .handle(RunGapAnalysisCommand {
                        provider,
                        standards,
                        reports,
                    })
                    .await;
                vec![Work::Event(DashboardEvent::GapAnalysisCompleted {
                    rows: outcome.rows,
                    source: outcome.source,
                })]
            }

            Effect::RunDemo => {
                let mut work = Vec::with_capacity(self.demo_script.len() * 2 + 1);
                for step in self.demo_script.clone() {
                    let delay = self.pacing.scale(step.delay);
                    if !delay.is_zero() {
                        work.push(Work::Pause(delay));
                    }
                    work.push(Work::Event(step.action.into_event()));
                }
                work.push(Work::Event(DashboardEvent::DemoFinished));
                work
            }

            Effect::ExportDraft { rows } => {
                let source = self.state.lock().await.analysis_source;
                match self.export.handle(ExportDraftCommand { rows, source }).await {
                    Ok(stored) => {
                        let filename = stored
                            .file_name()
                            .unwrap_or_else(|| stored.path.display().to_string());
                        *self.last_export.lock().await = Some(stored);
                        vec![Work::Event(DashboardEvent::DraftExported { filename })]
                    }
                    Err(e) => {
                        error!(error = %e, "Draft export failed");
                        self.presenter.alert(&format!("Export failed: {}", e));
                        return Err(e.into());
                    }
                }
            }
        };

        Ok(follow_ups)
    }
}

#[cfg(test)]
#[path = "controller_test.rs"]
mod controller_test;
