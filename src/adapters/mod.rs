//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `ai` - Mock AI provider and provider factory
//! - `document` - Draft rendering and local file storage
//! - `storage` - Simulated drive catalog of standards documents
//! - `presenter` - Presentation surfaces (tracing log, recorder)

pub mod ai;
pub mod document;
pub mod presenter;
pub mod storage;

pub use ai::{MockAIProvider, MockAIProviderFactory};
pub use document::{LocalDocumentStore, TextExportService};
pub use presenter::{LoggingPresenter, PresenterCall, RecordingPresenter};
pub use storage::SimulatedDriveCatalog;
