//! Application handlers.
//!
//! Each handler performs one background job requested by a dashboard effect
//! and returns a value the controller turns into the follow-up event.

mod connect_agent;
mod export_draft;
mod run_gap_analysis;
mod run_simulation;

pub use connect_agent::{AgentConnection, ConnectAgentCommand, ConnectAgentError, ConnectAgentHandler};
pub use export_draft::{ExportDraftCommand, ExportDraftError, ExportDraftHandler};
pub use run_gap_analysis::{GapAnalysisOutcome, RunGapAnalysisCommand, RunGapAnalysisHandler};
pub use run_simulation::{RunSimulationCommand, RunSimulationHandler, RunSimulationResult};
