//! The dashboard state-transition function.
//!
//! `transition` decides; the controller acts. Nothing here touches I/O, timers
//! or the presentation surface, so every interaction can be tested as data.

use super::event::{DashboardEvent, Effect};
use super::state::DashboardState;
use super::view::{AgentStatus, ChatMessage, ConnectMode, DocumentOrigin, SourceDocument, View};
use crate::domain::foundation::StateMachine;
use crate::domain::gap_analysis::AnalysisSource;
use crate::domain::simulation::ImpactSeries;

/// Control id of the carbon price slider caption.
pub const CARBON_PRICE_CONTROL: &str = "carbon-price";

/// Legend of the projection chart before the first run.
pub const FORECAST_LABEL: &str = "Financial impact (profit) - forecast";

/// Next state plus the effects to perform, in order.
#[derive(Debug, Clone, PartialEq)]
pub struct Transition {
    pub state: DashboardState,
    pub effects: Vec<Effect>,
}

impl Transition {
    fn new(state: DashboardState) -> Self {
        Self {
            state,
            effects: Vec::new(),
        }
    }

    fn emit(&mut self, effect: Effect) {
        self.effects.push(effect);
    }

    fn say(&mut self, text: impl Into<String>) {
        let message = ChatMessage::agent(text);
        self.state.messages.push(message.clone());
        self.emit(Effect::AppendMessage(message));
    }

    fn alert(&mut self, text: impl Into<String>) {
        self.emit(Effect::Alert(text.into()));
    }
}

/// Computes the next state and its effects for one event.
pub fn transition(state: &DashboardState, event: DashboardEvent) -> Transition {
    let mut t = Transition::new(state.clone());

    match event {
        DashboardEvent::Navigate(view) => {
            t.state.view = view;
            t.emit(Effect::ShowView(view));
            if view == View::Simulation && !t.state.simulation_chart_ready {
                t.state.simulation_chart_ready = true;
                t.emit(Effect::RenderImpactChart(ImpactSeries::zeroed(FORECAST_LABEL)));
            }
        }

        DashboardEvent::SetCarbonPrice(price) => {
            if !price.is_finite() || price < 0.0 {
                t.alert(format!("Carbon price must be a non-negative number, got {}", price));
            } else {
                t.state.inputs.carbon_price = price;
                t.emit(Effect::UpdateControlLabel {
                    control: CARBON_PRICE_CONTROL.to_string(),
                    text: format!("${}", price),
                });
            }
        }

        DashboardEvent::SelectScenario(id) => {
            t.state.inputs.scenario_id = id;
        }

        DashboardEvent::AddCategory(category) => {
            let added = t.state.inputs.categories.add(category).map(|e| e.caption());
            match added {
                Ok(caption) => t.emit(Effect::UpdateControlLabel {
                    control: category_control(category.number()),
                    text: caption,
                }),
                Err(_) => t.alert(format!("{} is already added.", category.short_label())),
            }
        }

        DashboardEvent::RemoveCategory(category) => {
            t.state.inputs.categories.remove(category);
        }

        DashboardEvent::SetCategoryReduction(category, reduction) => {
            let updated = t
                .state
                .inputs
                .categories
                .set_reduction(category, reduction)
                .map(|e| e.caption());
            if let Some(caption) = updated {
                t.emit(Effect::UpdateControlLabel {
                    control: category_control(category.number()),
                    text: caption,
                });
            }
        }

        DashboardEvent::RunSimulation => {
            t.state.simulation_generation += 1;
            t.state.simulation_running = true;
            t.emit(Effect::ComputeImpact {
                generation: t.state.simulation_generation,
                parameters: t.state.inputs.parameters(),
            });
        }

        DashboardEvent::SimulationCompleted { generation, series } => {
            // A newer request is in flight or done; this result is stale.
            if generation == t.state.simulation_generation {
                t.state.simulation_running = false;
                t.state.simulation_chart_ready = true;
                let summary = match series.final_point() {
                    Some(last) => format!(
                        "Simulation results updated. Projected profit impact in {}: {}.",
                        last.year, last.impact
                    ),
                    None => "Simulation results updated.".to_string(),
                };
                t.state.latest_series = Some(series.clone());
                t.emit(Effect::RenderImpactChart(series));
                t.say(summary);
            }
        }

        DashboardEvent::ToggleSourcePanel => {
            t.state.source_panel_open = !t.state.source_panel_open;
        }

        DashboardEvent::OpenCalculationModal => t.state.calculation_modal_open = true,
        DashboardEvent::CloseCalculationModal => t.state.calculation_modal_open = false,

        DashboardEvent::ReportsUploaded(names) => {
            if !names.is_empty() {
                let count = names.len();
                t.state.company_documents = names
                    .into_iter()
                    .map(|n| SourceDocument::new(n, DocumentOrigin::Upload))
                    .collect();
                t.say(format!("{} report(s) loaded.", count));
            }
        }

        DashboardEvent::ConnectAgent {
            mode,
            credential_present,
            folder,
        } => {
            if mode == ConnectMode::Live && !credential_present {
                t.alert("Please enter the AI service API key.");
            } else {
                match t.state.agent_status.transition_to(AgentStatus::Initializing) {
                    Ok(next) => {
                        t.state.agent_status = next;
                        t.emit(Effect::InitializeAgent { mode, folder });
                    }
                    Err(_) => t.alert("Agent initialization is already in progress."),
                }
            }
        }

        DashboardEvent::AgentReady { mode, standards } => {
            let target = match mode {
                ConnectMode::Live => AgentStatus::Online,
                ConnectMode::Sample => AgentStatus::Demo,
            };
            if let Ok(next) = t.state.agent_status.transition_to(target) {
                t.state.agent_status = next;
                t.state.standards_documents = standards;
                t.say(match mode {
                    ConnectMode::Live => {
                        "AI agent started. Linked to the drive folder; continuous standards \
                         monitoring is active."
                    }
                    ConnectMode::Sample => {
                        "Demo AI environment is set up. Analysis can be run."
                    }
                });
            }
        }

        DashboardEvent::AgentFailed { reason } => {
            if let Ok(next) = t.state.agent_status.transition_to(AgentStatus::Offline) {
                t.state.agent_status = next;
            }
            t.alert(format!("Initialization failed. Check the API key. ({})", reason));
        }

        DashboardEvent::StartGapAnalysis => {
            if !t.state.analysis_running {
                t.state.analysis_running = true;
                t.state.comparison_rows.clear();
                t.state.analysis_source = None;
                t.emit(Effect::RenderComparisonTable(Vec::new()));
                t.emit(Effect::RunGapAnalysis {
                    use_ai: t.state.agent_status == AgentStatus::Online,
                });
            }
        }

        DashboardEvent::GapAnalysisCompleted { rows, source } => {
            t.state.analysis_running = false;
            t.state.export_available = !rows.is_empty();
            t.state.analysis_source = Some(source);
            t.state.comparison_rows = rows.clone();
            t.emit(Effect::RenderComparisonTable(rows));
            t.say(match source {
                AnalysisSource::Ai => {
                    "Gap analysis against the SSBJ standard is complete. A recommended draft was generated."
                }
                AnalysisSource::Placeholder => {
                    "Gap analysis against the SSBJ standard is complete. A reference draft is shown."
                }
            });
        }

        DashboardEvent::UpdateGapAssessment(assessment) => {
            t.state.gap_assessment = assessment.clone();
            t.emit(Effect::RenderGapChart(assessment));
        }

        DashboardEvent::AgentSays(text) => t.say(text),

        DashboardEvent::StartDemo => {
            if !t.state.demo_running {
                t.state.demo_running = true;
                t.emit(Effect::RunDemo);
            }
        }

        DashboardEvent::DemoFinished => t.state.demo_running = false,

        DashboardEvent::ExportDraft => {
            if t.state.export_available {
                t.emit(Effect::ExportDraft {
                    rows: t.state.comparison_rows.clone(),
                });
            } else {
                t.alert("Run the gap analysis before exporting a draft.");
            }
        }

        DashboardEvent::DraftExported { filename } => {
            t.say(format!("Draft exported as {}.", filename));
            t.state.last_export = Some(filename);
        }
    }

    t
}

/// Control id of a category slider caption.
pub fn category_control(number: u8) -> String {
    format!("scope3-category-{}", number)
}

#[cfg(test)]
#[path = "transition_test.rs"]
mod transition_test;
