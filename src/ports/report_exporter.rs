//! Report Exporter Port - renders a finished report into a document.
//!
//! The scoring core never calls this port. The presentation layer hands a
//! finalized `Report` to an exporter once the assessment is `ReportReady`.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::foundation::{DomainError, ErrorCode};
use crate::domain::report::Report;

/// Port for rendering reports.
///
/// # Contract
///
/// Implementations must:
/// - Render every section of the report (profile, behaviours, recommendation,
///   opposite guidance, per-category scores)
/// - Produce the same bytes for the same report and format
/// - Fail with `UnsupportedFormat` rather than silently falling back
///
/// # Usage
///
/// ```rust,ignore
/// let exporter: &dyn ReportExporter = get_exporter();
/// let doc = exporter.export(&report, ExportFormat::Markdown, "informe").await?;
/// ```
#[async_trait]
pub trait ReportExporter: Send + Sync {
    /// Renders `report` in `format`, naming the document after `base_filename`.
    ///
    /// # Errors
    ///
    /// Returns `ExportError` if the format is unsupported or rendering fails.
    async fn export(
        &self,
        report: &Report,
        format: ExportFormat,
        base_filename: &str,
    ) -> Result<ExportedDocument, ExportError>;

    /// Whether this exporter can render `format`.
    fn supports(&self, format: ExportFormat) -> bool;
}

/// Export formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ExportFormat {
    /// Human-readable markdown document.
    #[default]
    Markdown,
    /// Structured report data for downstream chart/PDF tooling.
    Json,
}

impl ExportFormat {
    /// Get the MIME content type for this format.
    pub fn content_type(&self) -> &'static str {
        match self {
            ExportFormat::Markdown => "text/markdown; charset=utf-8",
            ExportFormat::Json => "application/json",
        }
    }

    /// Get the file extension for this format.
    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Markdown => "md",
            ExportFormat::Json => "json",
        }
    }
}

impl std::fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ExportFormat::Markdown => write!(f, "markdown"),
            ExportFormat::Json => write!(f, "json"),
        }
    }
}

impl std::str::FromStr for ExportFormat {
    type Err = ExportError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "markdown" | "md" => Ok(ExportFormat::Markdown),
            "json" => Ok(ExportFormat::Json),
            _ => Err(ExportError::UnsupportedFormat(s.to_string())),
        }
    }
}

/// Rendered document with content and metadata.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportedDocument {
    pub content: Vec<u8>,
    pub content_type: String,
    /// File name including extension.
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

/// Errors that can occur during report export.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExportError {
    #[error("Unsupported export format: {0}")]
    UnsupportedFormat(String),

    #[error("Rendering failed: {0}")]
    RenderFailed(String),

    #[error("Invalid file name: {0}")]
    InvalidFilename(String),
}

impl ExportError {
    pub fn render_failed(reason: impl Into<String>) -> Self {
        Self::RenderFailed(reason.into())
    }

    pub fn code(&self) -> ErrorCode {
        ErrorCode::ExportFailed
    }
}

impl From<ExportError> for DomainError {
    fn from(err: ExportError) -> Self {
        DomainError::new(err.code(), err.to_string())
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Tests
// ════════════════════════════════════════════════════════════════════════════════

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn export_format_metadata_is_correct() {
        assert_eq!(ExportFormat::Markdown.content_type(), "text/markdown; charset=utf-8");
        assert_eq!(ExportFormat::Json.content_type(), "application/json");
        assert_eq!(ExportFormat::Markdown.extension(), "md");
        assert_eq!(ExportFormat::Json.extension(), "json");
    }

    #[test]
    fn export_format_parses_from_string() {
        assert_eq!("markdown".parse::<ExportFormat>().unwrap(), ExportFormat::Markdown);
        assert_eq!("MD".parse::<ExportFormat>().unwrap(), ExportFormat::Markdown);
        assert_eq!("json".parse::<ExportFormat>().unwrap(), ExportFormat::Json);
    }

    #[test]
    fn export_format_parse_rejects_pdf() {
        let result = "pdf".parse::<ExportFormat>();
        assert!(matches!(result, Err(ExportError::UnsupportedFormat(_))));
    }

    #[test]
    fn export_format_serializes_to_snake_case() {
        assert_eq!(serde_json::to_string(&ExportFormat::Json).unwrap(), "\"json\"");
        let format: ExportFormat = serde_json::from_str("\"markdown\"").unwrap();
        assert_eq!(format, ExportFormat::Markdown);
    }

    #[test]
    fn exported_document_appends_extension() {
        let doc = ExportedDocument::new(b"{}".to_vec(), ExportFormat::Json, "informe");
        assert_eq!(doc.filename, "informe.json");
        assert_eq!(doc.content_type, "application/json");
    }

    #[test]
    fn export_error_maps_to_export_failed() {
        let domain: DomainError = ExportError::render_failed("boom").into();
        assert_eq!(domain.code, ErrorCode::ExportFailed);
        assert!(domain.message.contains("boom"));
    }

    #[test]
    fn report_exporter_is_object_safe() {
        fn check<T: ReportExporter + ?Sized>() {}
        check::<dyn ReportExporter>();
    }
}
