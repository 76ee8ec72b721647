//! ReportStorage port for persisting exported reports

use async_trait::async_trait;
use std::path::PathBuf;
use thiserror::Error;

use super::ExportedDocument;
use crate::domain::foundation::{DomainError, ErrorCode};

/// Errors that can occur during report storage operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StorageError {
    #[error("File not found: {0}")]
    NotFound(String),

    #[error("Permission denied: {0}")]
    PermissionDenied(String),

    #[error("IO error: {0}")]
    IoError(String),

    #[error("Invalid path: {0}")]
    InvalidPath(String),
}

impl From<StorageError> for DomainError {
    fn from(err: StorageError) -> Self {
        DomainError::new(ErrorCode::ExportFailed, err.to_string())
    }
}

/// Storage for exported report documents
#[async_trait]
pub trait ReportStorage: Send + Sync {
    /// Persist a document, replacing any previous one with the same name
    ///
    /// Returns the location the document was written to
    async fn store(&self, document: &ExportedDocument) -> Result<PathBuf, StorageError>;

    /// Read back a stored document
    async fn load(&self, filename: &str) -> Result<Vec<u8>, StorageError>;

    /// Check whether a document with this name exists
    async fn exists(&self, filename: &str) -> Result<bool, StorageError>;

    /// Location a document with this name would be stored at
    fn location(&self, filename: &str) -> Result<PathBuf, StorageError>;
}
