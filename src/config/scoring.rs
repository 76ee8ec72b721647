//! Scoring configuration

use serde::Deserialize;

use super::error::ValidationError;
use crate::domain::assessment::AssessmentSettings;
use crate::domain::scoring::{
    DuplicatePolicy, InterpretationPolicy, ScoringPolicy, WeightScheme, DEFAULT_MIXED_THRESHOLD,
};

/// Largest accepted mixed threshold
pub const MAX_MIXED_THRESHOLD: u32 = 1_000;

/// Scoring and interpretation policy configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ScoringConfig {
    /// `weighted` (3/2/1/0) or `tally_only` (1 per answer)
    #[serde(default)]
    pub weighting: WeightScheme,

    /// `reject` or `last_write_wins`
    #[serde(default)]
    pub duplicate_policy: DuplicatePolicy,

    /// Gap at or below which the secondary style is reported as mixed
    #[serde(default = "default_mixed_threshold")]
    pub mixed_threshold: u32,

    /// Always report a concrete secondary style
    #[serde(default)]
    pub mixed_disabled: bool,

    /// Derive a conscious / unconscious profile as well
    #[serde(default = "default_dual_profile")]
    pub dual_profile: bool,
}

impl ScoringConfig {
    /// Domain settings for new assessments
    pub fn settings(&self) -> AssessmentSettings {
        AssessmentSettings {
            scoring: ScoringPolicy {
                weighting: self.weighting,
                duplicates: self.duplicate_policy,
            },
            interpretation: InterpretationPolicy {
                mixed_threshold: (!self.mixed_disabled).then_some(self.mixed_threshold),
            },
            dual_profile: self.dual_profile,
        }
    }

    /// Validate scoring configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.mixed_threshold > MAX_MIXED_THRESHOLD {
            return Err(ValidationError::MixedThresholdTooLarge(
                self.mixed_threshold,
                MAX_MIXED_THRESHOLD,
            ));
        }
        Ok(())
    }
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            weighting: WeightScheme::default(),
            duplicate_policy: DuplicatePolicy::default(),
            mixed_threshold: default_mixed_threshold(),
            mixed_disabled: false,
            dual_profile: default_dual_profile(),
        }
    }
}

fn default_mixed_threshold() -> u32 {
    DEFAULT_MIXED_THRESHOLD
}

fn default_dual_profile() -> bool {
    true
}
