//! Report export configuration

use serde::Deserialize;
use std::path::PathBuf;

use super::error::ValidationError;
use crate::ports::ExportFormat;

/// Where and how finished reports are written
#[derive(Debug, Clone, Deserialize)]
pub struct ExportConfig {
    /// Export after the report is shown
    #[serde(default = "default_enabled")]
    pub enabled: bool,

    /// Directory receiving exported reports
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,

    /// File name without extension
    #[serde(default = "default_base_filename")]
    pub base_filename: String,

    /// `markdown` or `json`
    #[serde(default)]
    pub format: ExportFormat,
}

impl ExportConfig {
    /// Validate export configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.output_dir.as_os_str().is_empty() {
            return Err(ValidationError::MissingRequired("export.output_dir"));
        }
        let name = self.base_filename.trim();
        if name.is_empty() {
            return Err(ValidationError::MissingRequired("export.base_filename"));
        }
        if name.contains('/') || name.contains('\\') || name.contains("..") {
            return Err(ValidationError::InvalidBaseFilename(self.base_filename.clone()));
        }
        Ok(())
    }
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            enabled: default_enabled(),
            output_dir: default_output_dir(),
            base_filename: default_base_filename(),
            format: ExportFormat::default(),
        }
    }
}

fn default_enabled() -> bool {
    true
}

fn default_output_dir() -> PathBuf {
    PathBuf::from("reports")
}

fn default_base_filename() -> String {
    "Estilos_Comunicacion_Preferenciales".to_string()
}
