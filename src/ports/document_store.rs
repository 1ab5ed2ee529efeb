//! Document Store Port - Persists exported drafts.

use async_trait::async_trait;
use std::path::{Path, PathBuf};
use thiserror::Error;

use super::document_export_service::ExportedDocument;

/// Port for writing exported documents somewhere durable.
///
/// # Contract
///
/// Implementations must:
/// - Write atomically (no partial content on failure)
/// - Compute the SHA-256 checksum of what was written
/// - Overwrite an existing file with the same name
#[async_trait]
pub trait DocumentStore: Send + Sync {
    async fn save(&self, document: &ExportedDocument) -> Result<StoredDocument, StorageError>;
}

/// Where a document ended up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredDocument {
    pub path: PathBuf,
    pub size_bytes: u64,
    /// Hex-encoded SHA-256 of the content.
    pub checksum: String,
}

impl StoredDocument {
    pub fn new(path: impl Into<PathBuf>, size_bytes: u64, checksum: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            size_bytes,
            checksum: checksum.into(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// File name without the directory.
    pub fn file_name(&self) -> Option<String> {
        self.path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
    }
}

/// Errors that can occur during file storage operations.
#[derive(Debug, Clone, Error)]
pub enum StorageError {
    #[error("Permission denied: {path}")]
    PermissionDenied { path: String },

    #[error("IO error: {message}")]
    Io { message: String },

    /// Filename contains path separators or is empty.
    #[error("Invalid filename: {filename}")]
    InvalidFilename { filename: String },
}

impl StorageError {
    pub fn permission_denied(path: impl Into<String>) -> Self {
        Self::PermissionDenied { path: path.into() }
    }

    pub fn io(message: impl Into<String>) -> Self {
        Self::Io {
            message: message.into(),
        }
    }

    pub fn invalid_filename(filename: impl Into<String>) -> Self {
        Self::InvalidFilename {
            filename: filename.into(),
        }
    }
}

impl From<std::io::Error> for StorageError {
    fn from(err: std::io::Error) -> Self {
        match err.kind() {
            std::io::ErrorKind::PermissionDenied => Self::permission_denied(err.to_string()),
            _ => Self::io(err.to_string()),
        }
    }
}
