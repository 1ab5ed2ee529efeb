//! The exportable disclosure draft.

use serde::Serialize;

use super::comparison::{AnalysisSource, ComparisonRow};
use crate::domain::foundation::{DomainError, ErrorCode, Timestamp};

pub const DRAFT_TITLE: &str = "SSBJ Disclosure Draft Generated by AI Agent";

/// Comparison rows frozen for export.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DisclosureDraft {
    title: String,
    generated_at: Timestamp,
    source: Option<AnalysisSource>,
    rows: Vec<ComparisonRow>,
}

impl DisclosureDraft {
    /// Fails with `NothingToExport` when there are no rows.
    pub fn new(rows: Vec<ComparisonRow>, generated_at: Timestamp) -> Result<Self, DomainError> {
        if rows.is_empty() {
            return Err(DomainError::new(
                ErrorCode::NothingToExport,
                "Draft has no comparison rows",
            ));
        }
        Ok(Self {
            title: DRAFT_TITLE.to_string(),
            generated_at,
            source: None,
            rows,
        })
    }

    pub fn with_source(mut self, source: AnalysisSource) -> Self {
        self.source = Some(source);
        self
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn generated_at(&self) -> Timestamp {
        self.generated_at
    }

    pub fn source(&self) -> Option<AnalysisSource> {
        self.source
    }

    pub fn rows(&self) -> &[ComparisonRow] {
        &self.rows
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::gap_analysis::placeholder_rows;

    #[test]
    fn empty_draft_is_rejected() {
        let err = DisclosureDraft::new(Vec::new(), Timestamp::now()).unwrap_err();
        assert_eq!(err.code, ErrorCode::NothingToExport);
    }

    #[test]
    fn draft_keeps_row_order() {
        let draft = DisclosureDraft::new(placeholder_rows(), Timestamp::now())
            .unwrap()
            .with_source(AnalysisSource::Placeholder);
        assert_eq!(draft.title(), DRAFT_TITLE);
        assert_eq!(draft.rows(), placeholder_rows().as_slice());
        assert_eq!(draft.source(), Some(AnalysisSource::Placeholder));
    }
}
