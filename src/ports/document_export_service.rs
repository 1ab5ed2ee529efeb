//! Document Export Service Port - Renders a disclosure draft to a file format.
//!
//! The controller depends on this trait; adapters (like TextExportService)
//! provide the rendering.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::gap_analysis::DisclosureDraft;

/// Port for rendering drafts.
///
/// # Contract
///
/// Implementations must:
/// - Include the title, generation time and every row in order
/// - Return the bytes with a filename and MIME type matching the format
#[async_trait]
pub trait DocumentExportService: Send + Sync {
    /// Render the draft in the requested format.
    ///
    /// `base_filename` is the name without extension, e.g. `SSBJ_Draft`.
    async fn export(
        &self,
        draft: &DisclosureDraft,
        format: ExportFormat,
        base_filename: &str,
    ) -> Result<ExportedDocument, ExportError>;
}

/// Export formats supported by the service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExportFormat {
    /// Plain text served with the Word MIME type, opened by Word as a document.
    #[default]
    Word,
    PlainText,
    Markdown,
}

impl ExportFormat {
    /// Get the MIME content type for this format.
    pub fn content_type(&self) -> &'static str {
        match self {
            ExportFormat::Word => "application/msword",
            ExportFormat::PlainText => "text/plain; charset=utf-8",
            ExportFormat::Markdown => "text/markdown; charset=utf-8",
        }
    }

    /// Get the file extension for this format.
    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Word => "doc",
            ExportFormat::PlainText => "txt",
            ExportFormat::Markdown => "md",
        }
    }
}

impl std::fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ExportFormat::Word => write!(f, "word"),
            ExportFormat::PlainText => write!(f, "plain_text"),
            ExportFormat::Markdown => write!(f, "markdown"),
        }
    }
}

impl std::str::FromStr for ExportFormat {
    type Err = ExportError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "word" | "doc" => Ok(ExportFormat::Word),
            "plain_text" | "text" | "txt" => Ok(ExportFormat::PlainText),
            "markdown" | "md" => Ok(ExportFormat::Markdown),
            _ => Err(ExportError::UnsupportedFormat(s.to_string())),
        }
    }
}

/// Exported document with content and metadata.
#[derive(Debug, Clone)]
pub struct ExportedDocument {
    pub content: Vec<u8>,
    pub content_type: String,
    /// Suggested filename, extension included.
    pub filename: String,
    pub format: ExportFormat,
}

impl ExportedDocument {
    pub fn new(content: Vec<u8>, format: ExportFormat, base_filename: &str) -> Self {
        Self {
            content,
            content_type: format.content_type().to_string(),
            filename: format!("{}.{}", base_filename, format.extension()),
            format,
        }
    }
}

/// Errors that can occur during document export.
#[derive(Debug, Clone, Error)]
pub enum ExportError {
    #[error("Unsupported export format: {0}")]
    UnsupportedFormat(String),

    #[error("Invalid draft: {0}")]
    InvalidInput(String),

    #[error("Rendering failed: {0}")]
    RenderFailed(String),
}

impl ExportError {
    pub fn invalid_input(reason: impl Into<String>) -> Self {
        Self::InvalidInput(reason.into())
    }

    pub fn render_failed(reason: impl Into<String>) -> Self {
        Self::RenderFailed(reason.into())
    }
}
