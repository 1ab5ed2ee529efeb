//! Application layer - Handlers and the dashboard controller.
//!
//! Handlers run one background job each against the ports. The controller
//! owns the dashboard state and turns transition effects into handler calls.

mod controller;
mod error;
pub mod handlers;

pub use controller::{DashboardController, DashboardDependencies};
pub use error::ControllerError;
pub use handlers::{
    AgentConnection, ConnectAgentCommand, ConnectAgentError, ConnectAgentHandler,
    ExportDraftCommand, ExportDraftError, ExportDraftHandler, GapAnalysisOutcome,
    RunGapAnalysisCommand, RunGapAnalysisHandler, RunSimulationCommand, RunSimulationHandler,
    RunSimulationResult,
};
