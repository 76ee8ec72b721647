//! Scoring module - pure functions from responses to a ranked profile.
//!
//! # Components
//!
//! - `ScoringEngine` - folds responses into a `ScoreTally`
//! - `Interpreter` - ranks a tally into dominant / secondary styles, and
//!   optionally into a conscious / unconscious pair
//!
//! All functions are stateless. The question bank and policies are passed
//! in by reference and never mutated.

mod engine;
mod errors;
mod interpretation;
mod tally;

pub use engine::{DuplicatePolicy, ScoringEngine, ScoringPolicy, WeightScheme};
pub use errors::ScoringError;
pub use interpretation::{
    DualProfile, Interpretation, InterpretationPolicy, Interpreter, RankedCategory, Secondary,
    DEFAULT_MIXED_THRESHOLD,
};
pub use tally::ScoreTally;
