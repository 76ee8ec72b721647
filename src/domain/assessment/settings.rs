//! Per-session scoring and interpretation settings.

use crate::domain::scoring::{InterpretationPolicy, ScoringPolicy};

/// Policies applied to every assessment created with them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AssessmentSettings {
    pub scoring: ScoringPolicy,
    pub interpretation: InterpretationPolicy,
    /// Also derive a conscious / unconscious profile from the question axes.
    pub dual_profile: bool,
}

impl Default for AssessmentSettings {
    fn default() -> Self {
        Self {
            scoring: ScoringPolicy::default(),
            interpretation: InterpretationPolicy::default(),
            dual_profile: true,
        }
    }
}
