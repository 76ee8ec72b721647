//! Filesystem storage adapter for exported reports

use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tokio::fs;

use crate::ports::{ExportedDocument, ReportStorage, StorageError};

/// Filesystem-based report storage
///
/// Writes documents flat into a configurable output directory:
/// {output_dir}/{filename}
pub struct FsReportStorage {
    output_dir: PathBuf,
}

impl FsReportStorage {
    /// Create new filesystem storage rooted at `output_dir`
    pub fn new(output_dir: impl AsRef<Path>) -> Self {
        Self {
            output_dir: output_dir.as_ref().to_path_buf(),
        }
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// Resolve a file name inside the output directory
    fn file_path(&self, filename: &str) -> Result<PathBuf, StorageError> {
        let name = Path::new(filename);
        let is_plain = name.components().count() == 1
            && name.file_name().map(|n| n == name.as_os_str()).unwrap_or(false);
        if filename.is_empty() || !is_plain {
            return Err(StorageError::InvalidPath(filename.to_string()));
        }
        Ok(self.output_dir.join(name))
    }

    fn map_io(context: &str, e: std::io::Error) -> StorageError {
        match e.kind() {
            std::io::ErrorKind::NotFound => StorageError::NotFound(format!("{}: {}", context, e)),
            std::io::ErrorKind::PermissionDenied => {
                StorageError::PermissionDenied(format!("{}: {}", context, e))
            }
            _ => StorageError::IoError(format!("{}: {}", context, e)),
        }
    }
}

#[async_trait]
impl ReportStorage for FsReportStorage {
    async fn store(&self, document: &ExportedDocument) -> Result<PathBuf, StorageError> {
        let file_path = self.file_path(&document.filename)?;

        fs::create_dir_all(&self.output_dir)
            .await
            .map_err(|e| Self::map_io("Failed to create directory", e))?;

        // Write to a sibling temp file, then rename over the target
        let temp_path = file_path.with_extension(format!("{}.tmp", document.format.extension()));
        fs::write(&temp_path, &document.content)
            .await
            .map_err(|e| Self::map_io("Failed to write temporary file", e))?;

        if let Err(e) = fs::rename(&temp_path, &file_path).await {
            let _ = fs::remove_file(&temp_path).await;
            return Err(Self::map_io("Failed to rename file", e));
        }

        tracing::info!(path = %file_path.display(), "Report stored");
        Ok(file_path)
    }

    async fn load(&self, filename: &str) -> Result<Vec<u8>, StorageError> {
        let file_path = self.file_path(filename)?;
        fs::read(&file_path)
            .await
            .map_err(|e| Self::map_io("Failed to read file", e))
    }

    async fn exists(&self, filename: &str) -> Result<bool, StorageError> {
        let file_path = self.file_path(filename)?;
        fs::try_exists(&file_path)
            .await
            .map_err(|e| Self::map_io("Failed to check file", e))
    }

    fn location(&self, filename: &str) -> Result<PathBuf, StorageError> {
        self.file_path(filename)
    }
}
