//! Local Filesystem Store Adapter - Implementation of DocumentStore.
//!
//! Writes exported drafts into a single output directory using atomic writes
//! and SHA-256 checksums.

use async_trait::async_trait;
use sha2::{Digest, Sha256};
use std::path::{Path, PathBuf};
use tokio::fs;
use tokio::io::AsyncWriteExt;
use tracing::{debug, info};

use crate::ports::{DocumentStore, ExportedDocument, StorageError, StoredDocument};

/// Maximum draft size allowed (10 MB).
const MAX_FILE_SIZE_BYTES: u64 = 10 * 1024 * 1024;

/// Stores exported drafts on the local filesystem.
///
/// # Atomic Writes
///
/// 1. Write content to `{filename}.tmp`
/// 2. Sync to disk
/// 3. Rename to `{filename}`
///
/// An existing file with the same name is replaced.
#[derive(Debug, Clone)]
pub struct LocalDocumentStore {
    output_dir: PathBuf,
}

impl LocalDocumentStore {
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
        }
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    fn compute_checksum(content: &[u8]) -> String {
        let mut hasher = Sha256::new();
        hasher.update(content);
        format!("{:x}", hasher.finalize())
    }

    async fn write_temp(path: &Path, content: &[u8]) -> std::io::Result<()> {
        let mut file = fs::File::create(path).await?;
        file.write_all(content).await?;
        file.flush().await?;
        file.sync_all().await
    }

    fn validate_filename(filename: &str) -> Result<(), StorageError> {
        let invalid = filename.is_empty()
            || filename.ends_with(".tmp")
            || filename.contains(['/', '\\'])
            || filename == "."
            || filename == "..";
        if invalid {
            return Err(StorageError::invalid_filename(filename));
        }
        Ok(())
    }
}

#[async_trait]
impl DocumentStore for LocalDocumentStore {
    async fn save(&self, document: &ExportedDocument) -> Result<StoredDocument, StorageError> {
        Self::validate_filename(&document.filename)?;

        let size_bytes = document.content.len() as u64;
        if size_bytes > MAX_FILE_SIZE_BYTES {
            return Err(StorageError::io(format!(
                "Draft too large: {} bytes (max: {})",
                size_bytes, MAX_FILE_SIZE_BYTES
            )));
        }

        fs::create_dir_all(&self.output_dir).await.map_err(|e| {
            StorageError::io(format!(
                "Failed to create output directory {}: {}",
                self.output_dir.display(),
                e
            ))
        })?;

        let final_path = self.output_dir.join(&document.filename);
        let temp_path = self.output_dir.join(format!("{}.tmp", document.filename));

        if let Err(e) = Self::write_temp(&temp_path, &document.content).await {
            let _ = fs::remove_file(&temp_path).await;
            return Err(StorageError::io(format!(
                "Failed to write {}: {}",
                temp_path.display(),
                e
            )));
        }

        if let Err(e) = fs::rename(&temp_path, &final_path).await {
            let _ = fs::remove_file(&temp_path).await;
            return Err(StorageError::io(format!(
                "Failed to rename {} to {}: {}",
                temp_path.display(),
                final_path.display(),
                e
            )));
        }

        let checksum = Self::compute_checksum(&document.content);
        debug!(path = %final_path.display(), %checksum, "Draft written");
        info!(
            filename = %document.filename,
            size_bytes,
            content_type = %document.content_type,
            "Draft saved"
        );

        Ok(StoredDocument::new(final_path, size_bytes, checksum))
    }
}
