//! Draft export configuration

use serde::Deserialize;
use std::path::PathBuf;

use super::error::ValidationError;
use crate::ports::ExportFormat;

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct ExportConfig {
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,

    /// File name without extension
    #[serde(default = "default_base_filename")]
    pub base_filename: String,

    #[serde(default)]
    pub format: ExportFormat,
}

impl ExportConfig {
    pub fn validate(&self) -> Result<(), ValidationError> {
        let name = self.base_filename.trim();
        if name.is_empty() || name.contains(['/', '\\']) {
            return Err(ValidationError::MissingRequired("EXPORT__BASE_FILENAME"));
        }
        Ok(())
    }
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            output_dir: default_output_dir(),
            base_filename: default_base_filename(),
            format: ExportFormat::default(),
        }
    }
}

fn default_output_dir() -> PathBuf {
    PathBuf::from("exports")
}

fn default_base_filename() -> String {
    "SSBJ_Draft".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_export_defaults() {
        let config = ExportConfig::default();
        assert_eq!(config.output_dir, PathBuf::from("exports"));
        assert_eq!(config.base_filename, "SSBJ_Draft");
        assert_eq!(config.format, ExportFormat::Word);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_empty_filename_rejected() {
        let config = ExportConfig {
            base_filename: " ".to_string(),
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_filename_with_separator_rejected() {
        let config = ExportConfig {
            base_filename: "drafts/SSBJ".to_string(),
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }
}
