//! Adapters - Implementations of port interfaces.
//!
//! - `export` - Markdown/JSON report rendering and filesystem storage

pub mod export;

pub use export::{FsReportStorage, TemplateReportExporter};
