//! Application layer - Services and command handlers.
//!
//! This layer orchestrates domain operations and coordinates between ports.

mod assessment_service;
mod export_report;

pub use assessment_service::AssessmentService;
pub use export_report::{ExportReportCommand, ExportReportHandler, ExportReportResult};
