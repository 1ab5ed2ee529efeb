//! ExportDraftHandler - Renders the comparison rows and saves the draft.

use std::sync::Arc;

use thiserror::Error;
use tracing::info;

use crate::config::ExportConfig;
use crate::domain::foundation::{DomainError, Timestamp};
use crate::domain::gap_analysis::{AnalysisSource, ComparisonRow, DisclosureDraft};
use crate::ports::{DocumentExportService, DocumentStore, ExportError, StorageError, StoredDocument};

#[derive(Debug, Clone)]
pub struct ExportDraftCommand {
    pub rows: Vec<ComparisonRow>,
    pub source: Option<AnalysisSource>,
}

#[derive(Debug, Error)]
pub enum ExportDraftError {
    #[error(transparent)]
    Draft(#[from] DomainError),

    #[error(transparent)]
    Export(#[from] ExportError),

    #[error(transparent)]
    Storage(#[from] StorageError),
}

pub struct ExportDraftHandler {
    exporter: Arc<dyn DocumentExportService>,
    store: Arc<dyn DocumentStore>,
    config: ExportConfig,
}

impl ExportDraftHandler {
    pub fn new(
        exporter: Arc<dyn DocumentExportService>,
        store: Arc<dyn DocumentStore>,
        config: ExportConfig,
    ) -> Self {
        Self {
            exporter,
            store,
            config,
        }
    }

    pub async fn handle(&self, cmd: ExportDraftCommand) -> Result<StoredDocument, ExportDraftError> {
        let mut draft = DisclosureDraft::new(cmd.rows, Timestamp::now())?;
        if let Some(source) = cmd.source {
            draft = draft.with_source(source);
        }

        let document = self
            .exporter
            .export(&draft, self.config.format, &self.config.base_filename)
            .await?;
        let stored = self.store.save(&document).await?;

        info!(
            path = %stored.path.display(),
            format = %self.config.format,
            rows = draft.rows().len(),
            "Draft exported"
        );
        Ok(stored)
    }
}
