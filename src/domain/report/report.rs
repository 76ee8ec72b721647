//! Report value - the finished, renderable result of an assessment.

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use crate::domain::foundation::Percentage;
use crate::domain::scoring::{DualProfile, Secondary};
use crate::domain::styles::Category;

/// Headline profile labels.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileSummary {
    pub dominant: Category,
    /// Concrete second-ranked category.
    pub secondary: Category,
    /// Adapted style (the dominant one).
    pub conscious: Category,
    /// Natural style: the secondary, or `Mixto` when too close to call.
    pub unconscious: Secondary,
    /// Score difference between dominant and secondary.
    pub gap: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Behaviours {
    pub good_day: String,
    pub bad_day: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OppositeGuidance {
    pub category: Category,
    pub guidance: String,
}

/// One chart point.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryScore {
    pub category: Category,
    pub score: u32,
    pub percentage: Percentage,
    /// Hex colour for charts.
    pub color: String,
}

/// Assessment report.
///
/// Plain data: rendering and export happen elsewhere. Collections are
/// ordered vectors so that serialisation is byte-for-byte reproducible.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Report {
    pub title: String,
    pub profile: ProfileSummary,
    pub behaviours: Behaviours,
    pub recommendation: String,
    pub opposite: OppositeGuidance,
    /// Per-category scores in declaration order.
    pub scores: Vec<CategoryScore>,
    pub total: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dual: Option<DualProfile>,
}

impl Report {
    pub fn score_of(&self, category: Category) -> u32 {
        self.entry(category).map(|e| e.score).unwrap_or(0)
    }

    pub fn percentage_of(&self, category: Category) -> Percentage {
        self.entry(category)
            .map(|e| e.percentage)
            .unwrap_or(Percentage::ZERO)
    }

    /// SHA-256 of the canonical JSON encoding, as lowercase hex.
    pub fn fingerprint(&self) -> Result<String, serde_json::Error> {
        let bytes = serde_json::to_vec(self)?;
        let mut hasher = Sha256::new();
        hasher.update(&bytes);
        Ok(format!("{:x}", hasher.finalize()))
    }

    fn entry(&self, category: Category) -> Option<&CategoryScore> {
        self.scores.iter().find(|e| e.category == category)
    }
}
