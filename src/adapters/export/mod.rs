//! Export adapters - report rendering and filesystem persistence.

mod fs_storage;
mod template_exporter;

pub use fs_storage::FsReportStorage;
pub use template_exporter::TemplateReportExporter;
