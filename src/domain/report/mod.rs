//! Report module - assembles the final, render-agnostic report.

mod assembler;
mod narrative;
#[allow(clippy::module_inception)]
mod report;

pub use assembler::ReportAssembler;
pub use narrative::{NarrativeCatalog, StyleNarrative, DEFAULT_TITLE};
pub use report::{Behaviours, CategoryScore, OppositeGuidance, ProfileSummary, Report};
