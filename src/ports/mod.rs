//! Ports - Interfaces for external collaborators.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! ## Export Ports
//!
//! - `ReportExporter` - Renders a finished report into a document
//! - `ReportStorage` - Persists exported documents

mod report_exporter;
mod report_storage;

pub use report_exporter::{ExportError, ExportFormat, ExportedDocument, ReportExporter};
pub use report_storage::{ReportStorage, StorageError};
