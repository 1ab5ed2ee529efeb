//! Document adapters - Implementations for draft export and storage.
//!
//! - `TextExportService` - Renders drafts as Word-compatible text, plain text or markdown
//! - `LocalDocumentStore` - Stores exported drafts on the local filesystem

mod local_document_store;
mod text_export_service;

pub use local_document_store::LocalDocumentStore;
pub use text_export_service::TextExportService;
