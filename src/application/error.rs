//! Application-level errors.

use thiserror::Error;

use super::handlers::ExportDraftError;

/// Errors surfaced by `DashboardController::dispatch`.
///
/// Most failures become dashboard events (alerts, placeholder rows); only
/// the ones a caller must react to end up here.
#[derive(Debug, Error)]
pub enum ControllerError {
    #[error("Draft export failed: {0}")]
    Export(#[from] ExportDraftError),
}
