//! ExportReport - Command handler for rendering and storing a report.

use std::path::PathBuf;
use std::sync::Arc;

use crate::domain::foundation::{DomainError, ErrorCode};
use crate::domain::report::Report;
use crate::ports::{ExportFormat, ReportExporter, ReportStorage};

/// Command to export a finished report.
#[derive(Debug, Clone)]
pub struct ExportReportCommand {
    pub report: Report,
    pub format: ExportFormat,
    /// File name without extension.
    pub base_filename: String,
}

/// Result of a successful export.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportReportResult {
    pub path: PathBuf,
    pub format: ExportFormat,
    pub bytes: usize,
    /// Fingerprint of the exported report data.
    pub fingerprint: String,
}

/// Handler for exporting reports.
///
/// Export runs after the report is final; a failure here never touches the
/// assessment that produced the report.
pub struct ExportReportHandler {
    exporter: Arc<dyn ReportExporter>,
    storage: Arc<dyn ReportStorage>,
}

impl ExportReportHandler {
    pub fn new(exporter: Arc<dyn ReportExporter>, storage: Arc<dyn ReportStorage>) -> Self {
        Self { exporter, storage }
    }

    pub async fn handle(&self, cmd: ExportReportCommand) -> Result<ExportReportResult, DomainError> {
        // 1. Check the format is renderable
        if !self.exporter.supports(cmd.format) {
            return Err(DomainError::new(
                ErrorCode::ExportFailed,
                format!("Export format not supported: {}", cmd.format),
            ));
        }

        // 2. Render
        let fingerprint = cmd.report.fingerprint().map_err(|e| {
            DomainError::new(ErrorCode::InternalError, format!("Report encoding failed: {}", e))
        })?;
        let document = self
            .exporter
            .export(&cmd.report, cmd.format, &cmd.base_filename)
            .await
            .map_err(|e| {
                tracing::error!(format = %cmd.format, error = %e, "Report export failed");
                DomainError::from(e)
            })?;

        // 3. Persist
        let path = self.storage.store(&document).await.map_err(|e| {
            tracing::error!(filename = %document.filename, error = %e, "Report storage failed");
            DomainError::from(e)
        })?;

        tracing::info!(
            path = %path.display(),
            format = %cmd.format,
            fingerprint = %fingerprint,
            "Report exported"
        );

        Ok(ExportReportResult {
            path,
            format: document.format,
            bytes: document.content.len(),
            fingerprint,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::report::{NarrativeCatalog, ReportAssembler};
    use crate::domain::scoring::{InterpretationPolicy, Interpreter, ScoreTally};
    use crate::domain::styles::Category;
    use crate::ports::{ExportError, ExportedDocument, StorageError};
    use async_trait::async_trait;
    use std::sync::Mutex;

    struct MockExporter {
        fail: bool,
    }

    #[async_trait]
    impl ReportExporter for MockExporter {
        async fn export(
            &self,
            report: &Report,
            format: ExportFormat,
            base_filename: &str,
        ) -> Result<ExportedDocument, ExportError> {
            if self.fail {
                return Err(ExportError::render_failed("template broken"));
            }
            Ok(ExportedDocument::new(
                report.title.clone().into_bytes(),
                format,
                base_filename,
            ))
        }

        fn supports(&self, format: ExportFormat) -> bool {
            format == ExportFormat::Markdown
        }
    }

    struct MockStorage {
        stored: Mutex<Vec<ExportedDocument>>,
        fail: bool,
    }

    impl MockStorage {
        fn new(fail: bool) -> Self {
            Self {
                stored: Mutex::new(Vec::new()),
                fail,
            }
        }
    }

    #[async_trait]
    impl ReportStorage for MockStorage {
        async fn store(&self, document: &ExportedDocument) -> Result<PathBuf, StorageError> {
            if self.fail {
                return Err(StorageError::PermissionDenied("read-only".to_string()));
            }
            self.stored.lock().unwrap().push(document.clone());
            Ok(PathBuf::from("/reports").join(&document.filename))
        }

        async fn load(&self, _filename: &str) -> Result<Vec<u8>, StorageError> {
            unimplemented!()
        }

        async fn exists(&self, _filename: &str) -> Result<bool, StorageError> {
            unimplemented!()
        }

        fn location(&self, filename: &str) -> Result<PathBuf, StorageError> {
            Ok(PathBuf::from("/reports").join(filename))
        }
    }

    fn report() -> Report {
        let tally = ScoreTally::from_scores([(Category::Blue, 12), (Category::Red, 3)]);
        let interpretation =
            Interpreter::interpret(&tally, &InterpretationPolicy::default()).unwrap();
        ReportAssembler::assemble(&tally, &interpretation, None, &NarrativeCatalog::default())
    }

    fn command(format: ExportFormat) -> ExportReportCommand {
        ExportReportCommand {
            report: report(),
            format,
            base_filename: "informe".to_string(),
        }
    }

    #[tokio::test]
    async fn test_export_success() {
        let storage = Arc::new(MockStorage::new(false));
        let handler = ExportReportHandler::new(Arc::new(MockExporter { fail: false }), storage.clone());

        let result = handler.handle(command(ExportFormat::Markdown)).await.unwrap();

        assert_eq!(result.path, PathBuf::from("/reports/informe.md"));
        assert_eq!(result.format, ExportFormat::Markdown);
        assert_eq!(result.fingerprint, report().fingerprint().unwrap());
        assert_eq!(storage.stored.lock().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_export_unsupported_format() {
        let storage = Arc::new(MockStorage::new(false));
        let handler = ExportReportHandler::new(Arc::new(MockExporter { fail: false }), storage.clone());

        let err = handler.handle(command(ExportFormat::Json)).await.unwrap_err();

        assert_eq!(err.code, ErrorCode::ExportFailed);
        assert!(storage.stored.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_export_render_failure() {
        let storage = Arc::new(MockStorage::new(false));
        let handler = ExportReportHandler::new(Arc::new(MockExporter { fail: true }), storage.clone());

        let err = handler.handle(command(ExportFormat::Markdown)).await.unwrap_err();

        assert_eq!(err.code, ErrorCode::ExportFailed);
        assert!(err.message.contains("template broken"));
        assert!(storage.stored.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_export_storage_failure() {
        let handler = ExportReportHandler::new(
            Arc::new(MockExporter { fail: false }),
            Arc::new(MockStorage::new(true)),
        );

        let err = handler.handle(command(ExportFormat::Markdown)).await.unwrap_err();

        assert_eq!(err.code, ErrorCode::ExportFailed);
        assert!(err.message.contains("read-only"));
    }
}
