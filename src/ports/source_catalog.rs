//! Source Catalog Port - Where standards texts and reports come from.
//!
//! In live mode this is a shared drive folder; in sample mode a fixed set of
//! bundled documents.

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::dashboard::{ConnectMode, SourceDocument};

#[async_trait]
pub trait SourceCatalog: Send + Sync {
    /// Standards documents available for the given connection.
    ///
    /// `folder` is the drive folder URL or id; ignored in sample mode.
    async fn list_standards(
        &self,
        mode: ConnectMode,
        folder: Option<&str>,
    ) -> Result<Vec<SourceDocument>, CatalogError>;

    /// Text content of a document, used as AI prompt input.
    async fn read_text(&self, document: &SourceDocument) -> Result<String, CatalogError>;
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CatalogError {
    #[error("Folder not accessible: {0}")]
    FolderUnavailable(String),

    #[error("Document not found: {0}")]
    NotFound(String),

    #[error("Catalog unavailable: {0}")]
    Unavailable(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_error_messages_name_the_resource() {
        assert_eq!(
            CatalogError::NotFound("esg.pdf".into()).to_string(),
            "Document not found: esg.pdf"
        );
    }

    #[test]
    fn source_catalog_is_object_safe() {
        fn check<T: SourceCatalog + ?Sized>() {}
        check::<dyn SourceCatalog>();
    }
}
