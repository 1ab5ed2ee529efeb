//! Simulated drive catalog.
//!
//! Stands in for the shared drive folder: a live connection lists the
//! drive's standards files, a sample connection lists the bundled exposure
//! draft. Text content is held in memory.

use async_trait::async_trait;
use std::collections::{HashMap, HashSet};
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::debug;

use crate::domain::dashboard::{ConnectMode, DocumentOrigin, SourceDocument};
use crate::ports::{CatalogError, SourceCatalog};

pub const DRIVE_STANDARDS: [&str; 2] = ["ssbj_standards_v1.pdf", "materiality_matrix.xlsx"];
pub const SAMPLE_STANDARDS: [&str; 1] = ["ssbj_s2_exposure_draft.pdf"];

#[derive(Debug, Clone)]
pub struct SimulatedDriveCatalog {
    texts: Arc<RwLock<HashMap<String, String>>>,
    unavailable_folders: Arc<RwLock<HashSet<String>>>,
}

impl SimulatedDriveCatalog {
    pub fn new() -> Self {
        let texts = DRIVE_STANDARDS
            .iter()
            .chain(SAMPLE_STANDARDS.iter())
            .map(|name| (name.to_string(), format!("Standard Reference ({})", name)))
            .collect();
        Self {
            texts: Arc::new(RwLock::new(texts)),
            unavailable_folders: Arc::new(RwLock::new(HashSet::new())),
        }
    }

    /// Registers or replaces the text of a document.
    pub async fn insert_text(&self, name: impl Into<String>, text: impl Into<String>) {
        self.texts.write().await.insert(name.into(), text.into());
    }

    /// Makes listing this folder fail, as an inaccessible drive folder would.
    pub async fn mark_unavailable(&self, folder: impl Into<String>) {
        self.unavailable_folders.write().await.insert(folder.into());
    }

    pub async fn document_count(&self) -> usize {
        self.texts.read().await.len()
    }
}

impl Default for SimulatedDriveCatalog {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SourceCatalog for SimulatedDriveCatalog {
    async fn list_standards(
        &self,
        mode: ConnectMode,
        folder: Option<&str>,
    ) -> Result<Vec<SourceDocument>, CatalogError> {
        let docs = match mode {
            ConnectMode::Live => {
                if let Some(folder) = folder {
                    if self.unavailable_folders.read().await.contains(folder) {
                        return Err(CatalogError::FolderUnavailable(folder.to_string()));
                    }
                }
                DRIVE_STANDARDS
                    .iter()
                    .map(|n| SourceDocument::new(*n, DocumentOrigin::Drive))
                    .collect::<Vec<_>>()
            }
            ConnectMode::Sample => SAMPLE_STANDARDS
                .iter()
                .map(|n| SourceDocument::new(*n, DocumentOrigin::Sample))
                .collect(),
        };
        debug!(?mode, count = docs.len(), "Listed standards documents");
        Ok(docs)
    }

    async fn read_text(&self, document: &SourceDocument) -> Result<String, CatalogError> {
        self.texts
            .read()
            .await
            .get(&document.name)
            .cloned()
            .ok_or_else(|| CatalogError::NotFound(document.name.clone()))
    }
}
