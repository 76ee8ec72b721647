//! Answer levels and their weights.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::domain::scoring::ScoringError;

/// How strongly the respondent identifies with a statement.
///
/// Four ordinal levels, highest agreement first. Two wordings circulate for
/// the same scale and both are accepted when parsing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum AnswerLevel {
    #[serde(rename = "Nada identificado", alias = "Para nada de acuerdo")]
    NotAtAll,
    #[serde(rename = "Poco identificado", alias = "En desacuerdo")]
    Slightly,
    #[serde(rename = "Bastante identificado", alias = "De acuerdo")]
    Fairly,
    #[serde(rename = "Muy identificado", alias = "Totalmente de acuerdo")]
    Strongly,
}

impl AnswerLevel {
    /// Levels in the order they are offered to respondents.
    pub const OFFERED: [AnswerLevel; 4] = [
        AnswerLevel::Strongly,
        AnswerLevel::Fairly,
        AnswerLevel::Slightly,
        AnswerLevel::NotAtAll,
    ];

    /// Highest weight any level carries.
    pub const MAX_WEIGHT: u32 = 3;

    /// Weight on the 0..=3 scale; monotonic with agreement.
    pub fn weight(&self) -> u32 {
        match self {
            AnswerLevel::Strongly => 3,
            AnswerLevel::Fairly => 2,
            AnswerLevel::Slightly => 1,
            AnswerLevel::NotAtAll => 0,
        }
    }

    /// Primary label shown to respondents.
    pub fn label(&self) -> &'static str {
        match self {
            AnswerLevel::Strongly => "Muy identificado",
            AnswerLevel::Fairly => "Bastante identificado",
            AnswerLevel::Slightly => "Poco identificado",
            AnswerLevel::NotAtAll => "Nada identificado",
        }
    }

    /// Label on the agreement wording of the scale.
    pub fn agreement_label(&self) -> &'static str {
        match self {
            AnswerLevel::Strongly => "Totalmente de acuerdo",
            AnswerLevel::Fairly => "De acuerdo",
            AnswerLevel::Slightly => "En desacuerdo",
            AnswerLevel::NotAtAll => "Para nada de acuerdo",
        }
    }
}

impl fmt::Display for AnswerLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for AnswerLevel {
    type Err = ScoringError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Self::OFFERED
            .into_iter()
            .find(|level| {
                level.label().eq_ignore_ascii_case(wanted)
                    || level.agreement_label().eq_ignore_ascii_case(wanted)
            })
            .ok_or_else(|| ScoringError::unknown_option(None, s))
    }
}
