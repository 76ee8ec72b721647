//! Domain layer containing the questionnaire scoring logic.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (value objects, IDs, errors)
//! - `styles` - The four communication style categories
//! - `questionnaire` - Questions, answer levels, responses and the question bank
//! - `scoring` - Pure scoring and interpretation functions
//! - `report` - Narrative catalog and report assembly
//! - `assessment` - Session aggregate and its lifecycle

pub mod assessment;
pub mod foundation;
pub mod questionnaire;
pub mod report;
pub mod scoring;
pub mod styles;
