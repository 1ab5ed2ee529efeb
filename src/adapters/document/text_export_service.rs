//! Text-based export service adapter.
//!
//! Renders a disclosure draft without external tools:
//! - Word: plain text served as `application/msword`, which Word opens as a document
//! - PlainText: the same body as `.txt`
//! - Markdown: headings per row with bold field labels

use async_trait::async_trait;
use std::fmt::Write;
use tracing::debug;

use crate::domain::gap_analysis::{AnalysisSource, DisclosureDraft};
use crate::ports::{DocumentExportService, ExportError, ExportFormat, ExportedDocument};

/// Export service rendering drafts as text.
#[derive(Debug, Clone, Default)]
pub struct TextExportService;

impl TextExportService {
    pub fn new() -> Self {
        Self
    }

    fn source_line(source: Option<AnalysisSource>) -> Option<&'static str> {
        source.map(|s| match s {
            AnalysisSource::Ai => "Source: AI-generated draft",
            AnalysisSource::Placeholder => "Source: reference draft (AI unavailable)",
        })
    }

    fn render_text(draft: &DisclosureDraft) -> Result<String, std::fmt::Error> {
        let mut out = String::new();
        writeln!(out, "{}", draft.title())?;
        writeln!(out, "Generated: {}", draft.generated_at().to_header_string())?;
        if let Some(line) = Self::source_line(draft.source()) {
            writeln!(out, "{}", line)?;
        }

        for (i, row) in draft.rows().iter().enumerate() {
            writeln!(out)?;
            writeln!(out, "{}. {}", i + 1, row.item)?;
            writeln!(out, "   Current: {}", row.current)?;
            writeln!(out, "   Proposed: {}", row.proposed)?;
            writeln!(out, "   Rationale: {}", row.rationale)?;
        }
        Ok(out)
    }

    fn render_markdown(draft: &DisclosureDraft) -> Result<String, std::fmt::Error> {
        let mut out = String::new();
        writeln!(out, "# {}", draft.title())?;
        writeln!(out)?;
        writeln!(out, "_Generated: {}_", draft.generated_at().to_header_string())?;
        if let Some(line) = Self::source_line(draft.source()) {
            writeln!(out)?;
            writeln!(out, "_{}_", line)?;
        }

        for (i, row) in draft.rows().iter().enumerate() {
            writeln!(out)?;
            writeln!(out, "## {}. {}", i + 1, row.item)?;
            writeln!(out)?;
            writeln!(out, "**Current:** {}", row.current)?;
            writeln!(out)?;
            writeln!(out, "**Proposed:** {}", row.proposed)?;
            writeln!(out)?;
            writeln!(out, "**Rationale:** {}", row.rationale)?;
        }
        Ok(out)
    }
}

#[async_trait]
impl DocumentExportService for TextExportService {
    async fn export(
        &self,
        draft: &DisclosureDraft,
        format: ExportFormat,
        base_filename: &str,
    ) -> Result<ExportedDocument, ExportError> {
        if base_filename.trim().is_empty() {
            return Err(ExportError::invalid_input("base filename is empty"));
        }

        let body = match format {
            ExportFormat::Word | ExportFormat::PlainText => Self::render_text(draft),
            ExportFormat::Markdown => Self::render_markdown(draft),
        }
        .map_err(|e| ExportError::render_failed(e.to_string()))?;

        debug!(%format, rows = draft.rows().len(), bytes = body.len(), "Draft rendered");
        Ok(ExportedDocument::new(body.into_bytes(), format, base_filename))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::Timestamp;
    use crate::domain::gap_analysis::{placeholder_rows, DRAFT_TITLE};
    use chrono::{TimeZone, Utc};

    fn draft() -> DisclosureDraft {
        let ts = Timestamp::from_datetime(Utc.with_ymd_and_hms(2025, 4, 1, 9, 30, 0).unwrap());
        DisclosureDraft::new(placeholder_rows(), ts)
            .unwrap()
            .with_source(AnalysisSource::Placeholder)
    }

    #[tokio::test]
    async fn word_export_is_text_with_msword_mime() {
        let doc = TextExportService::new()
            .export(&draft(), ExportFormat::Word, "SSBJ_Draft")
            .await
            .unwrap();

        assert_eq!(doc.filename, "SSBJ_Draft.doc");
        assert_eq!(doc.content_type, "application/msword");
        let text = String::from_utf8(doc.content).unwrap();
        assert!(text.starts_with(DRAFT_TITLE));
        assert!(text.contains("Generated: 2025-04-01 09:30 UTC"));
        assert!(text.contains("1. Governance"));
        assert!(text.contains("3. Metrics and targets"));
    }

    #[tokio::test]
    async fn rows_render_in_order_with_all_fields() {
        let doc = TextExportService::new()
            .export(&draft(), ExportFormat::PlainText, "draft")
            .await
            .unwrap();
        let text = String::from_utf8(doc.content).unwrap();

        let governance = text.find("Governance").unwrap();
        let strategy = text.find("Strategy").unwrap();
        assert!(governance < strategy);
        assert_eq!(text.matches("   Rationale: ").count(), 3);
        assert_eq!(doc.filename, "draft.txt");
    }

    #[tokio::test]
    async fn markdown_export_uses_headings() {
        let doc = TextExportService::new()
            .export(&draft(), ExportFormat::Markdown, "draft")
            .await
            .unwrap();
        let text = String::from_utf8(doc.content).unwrap();

        assert!(text.starts_with(&format!("# {}", DRAFT_TITLE)));
        assert!(text.contains("## 2. Strategy"));
        assert!(text.contains("**Proposed:**"));
        assert_eq!(doc.content_type, "text/markdown; charset=utf-8");
    }

    #[tokio::test]
    async fn blank_filename_is_rejected() {
        let result = TextExportService::new()
            .export(&draft(), ExportFormat::Word, "  ")
            .await;
        assert!(matches!(result, Err(ExportError::InvalidInput(_))));
    }
}
