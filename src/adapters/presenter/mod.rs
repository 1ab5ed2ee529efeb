//! Presenter adapters.
//!
//! - `LoggingPresenter` - writes presentation calls to the tracing log
//! - `RecordingPresenter` - keeps every call for later inspection

mod logging_presenter;
mod recording_presenter;

pub use logging_presenter::LoggingPresenter;
pub use recording_presenter::{PresenterCall, RecordingPresenter};
