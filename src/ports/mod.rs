//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! ## AI Ports
//!
//! - `AIProvider` - Completions from the generative AI collaborator
//! - `AIProviderFactory` - Builds a live provider from a credential
//!
//! ## Document Ports
//!
//! - `SourceCatalog` - Standards texts and reports
//! - `DocumentExportService` - Renders a disclosure draft
//! - `DocumentStore` - Persists exported drafts
//!
//! ## Presentation
//!
//! - `DashboardPresenter` - Charts, tables, chat log and alerts

mod ai_provider;
mod dashboard_presenter;
mod document_export_service;
mod document_store;
mod source_catalog;

pub use ai_provider::{
    AIError, AIProvider, AIProviderFactory, CompletionRequest, CompletionResponse, FinishReason,
    Message, MessageRole, ProviderInfo, RequestMetadata,
};
pub use dashboard_presenter::DashboardPresenter;
pub use document_export_service::{
    DocumentExportService, ExportError, ExportFormat, ExportedDocument,
};
pub use document_store::{DocumentStore, StorageError, StoredDocument};
pub use source_catalog::{CatalogError, SourceCatalog};
