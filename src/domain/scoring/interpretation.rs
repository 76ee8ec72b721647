//! Interpretation Engine - ranks a tally into dominant and secondary styles.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::{ScoreTally, ScoringEngine, ScoringError, ScoringPolicy};
use crate::domain::questionnaire::{ProfileAxis, QuestionBank, Response};
use crate::domain::styles::Category;

/// Default gap at or below which the secondary style is reported as mixed.
pub const DEFAULT_MIXED_THRESHOLD: u32 = 3;

/// Secondary style, or the `Mixed` sentinel when the top two are too close.
///
/// Serialized as a plain label: a category name or `"Mixto"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub enum Secondary {
    Category(Category),
    Mixed,
}

impl Secondary {
    pub fn category(&self) -> Option<Category> {
        match self {
            Secondary::Category(c) => Some(*c),
            Secondary::Mixed => None,
        }
    }

    pub fn is_mixed(&self) -> bool {
        matches!(self, Secondary::Mixed)
    }
}

impl fmt::Display for Secondary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Secondary::Category(c) => write!(f, "{}", c),
            Secondary::Mixed => write!(f, "{}", MIXED_LABEL),
        }
    }
}

const MIXED_LABEL: &str = "Mixto";

impl FromStr for Secondary {
    type Err = ScoringError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.eq_ignore_ascii_case(MIXED_LABEL) || trimmed.eq_ignore_ascii_case("mixed") {
            return Ok(Secondary::Mixed);
        }
        trimmed.parse().map(Secondary::Category)
    }
}

impl From<Secondary> for String {
    fn from(secondary: Secondary) -> Self {
        secondary.to_string()
    }
}

impl TryFrom<String> for Secondary {
    type Error = ScoringError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// Tunable interpretation parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InterpretationPolicy {
    /// Gap (dominant minus runner-up) at or below which the secondary is
    /// `Mixed`. `None` always reports a concrete secondary.
    pub mixed_threshold: Option<u32>,
}

impl Default for InterpretationPolicy {
    fn default() -> Self {
        Self {
            mixed_threshold: Some(DEFAULT_MIXED_THRESHOLD),
        }
    }
}

/// A category with its score at a given rank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RankedCategory {
    pub category: Category,
    pub score: u32,
}

/// Ranked reading of a tally.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Interpretation {
    /// Top-ranked category.
    pub dominant: Category,
    /// Second-ranked category, regardless of the gap.
    pub runner_up: Category,
    /// Runner-up, or `Mixed` when the gap is within the threshold.
    pub secondary: Secondary,
    /// Score difference between the first two ranks.
    pub gap: u32,
    /// All categories, highest score first, ties in declaration order.
    pub ranking: Vec<RankedCategory>,
}

impl Interpretation {
    /// Adapted (conscious) style: the dominant one.
    pub fn conscious(&self) -> Category {
        self.dominant
    }

    /// Natural (unconscious) style: the secondary, possibly `Mixed`.
    pub fn unconscious(&self) -> Secondary {
        self.secondary
    }
}

/// Two interpretations from disjoint question subsets of one session.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DualProfile {
    /// From self-reported questions.
    pub conscious: Interpretation,
    /// From reactive questions.
    pub unconscious: Interpretation,
}

/// Interpretation functions.
pub struct Interpreter;

impl Interpreter {
    /// Categories by descending score. The sort is stable over declaration
    /// order, so equal scores always resolve the same way.
    pub fn rank(tally: &ScoreTally) -> Vec<RankedCategory> {
        let mut ranking: Vec<RankedCategory> = tally
            .iter()
            .map(|(category, score)| RankedCategory { category, score })
            .collect();
        ranking.sort_by(|a, b| b.score.cmp(&a.score));
        ranking
    }

    /// Ranks a tally into dominant, runner-up and secondary.
    ///
    /// # Errors
    /// - `InsufficientData` if the tally is all zero
    pub fn interpret(
        tally: &ScoreTally,
        policy: &InterpretationPolicy,
    ) -> Result<Interpretation, ScoringError> {
        if tally.is_empty() {
            return Err(ScoringError::insufficient_data(
                "no score recorded for any category",
            ));
        }

        let ranking = Self::rank(tally);
        let (first, second) = match ranking.as_slice() {
            [first, second, ..] => (*first, *second),
            _ => return Err(ScoringError::insufficient_data("fewer than two categories")),
        };

        let gap = first.score - second.score;
        let secondary = match policy.mixed_threshold {
            Some(threshold) if gap <= threshold => Secondary::Mixed,
            _ => Secondary::Category(second.category),
        };

        Ok(Interpretation {
            dominant: first.category,
            runner_up: second.category,
            secondary,
            gap,
            ranking,
        })
    }

    /// Scores and interprets each profile axis independently.
    ///
    /// # Errors
    /// - any scoring error for the response sequence
    /// - `InsufficientData` if either subset scored nothing
    pub fn interpret_dual(
        bank: &QuestionBank,
        responses: &[Response],
        scoring: &ScoringPolicy,
        policy: &InterpretationPolicy,
    ) -> Result<DualProfile, ScoringError> {
        let conscious =
            ScoringEngine::score_axis(bank, responses, scoring, ProfileAxis::Conscious)?;
        let unconscious =
            ScoringEngine::score_axis(bank, responses, scoring, ProfileAxis::Unconscious)?;

        Ok(DualProfile {
            conscious: Self::interpret(&conscious, policy)?,
            unconscious: Self::interpret(&unconscious, policy)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::QuestionId;
    use crate::domain::questionnaire::{AnswerLevel, Question};
    use proptest::prelude::*;

    fn tally(red: u32, yellow: u32, green: u32, blue: u32) -> ScoreTally {
        ScoreTally::from_scores([
            (Category::Red, red),
            (Category::Yellow, yellow),
            (Category::Green, green),
            (Category::Blue, blue),
        ])
    }

    #[test]
    fn all_zero_tally_is_insufficient_data() {
        let err = Interpreter::interpret(&ScoreTally::new(), &InterpretationPolicy::default())
            .unwrap_err();
        assert!(matches!(err, ScoringError::InsufficientData(_)));
    }

    #[test]
    fn clear_leader_gets_concrete_secondary() {
        let result =
            Interpreter::interpret(&tally(10, 20, 5, 14), &InterpretationPolicy::default())
                .unwrap();

        assert_eq!(result.dominant, Category::Yellow);
        assert_eq!(result.runner_up, Category::Blue);
        assert_eq!(result.secondary, Secondary::Category(Category::Blue));
        assert_eq!(result.gap, 6);
        assert_eq!(result.conscious(), Category::Yellow);
    }

    #[test]
    fn gap_at_threshold_is_mixed() {
        let policy = InterpretationPolicy {
            mixed_threshold: Some(4),
        };
        let result = Interpreter::interpret(&tally(20, 16, 3, 1), &policy).unwrap();

        assert_eq!(result.dominant, Category::Red);
        assert_eq!(result.runner_up, Category::Yellow);
        assert_eq!(result.secondary, Secondary::Mixed);
        assert!(result.unconscious().is_mixed());
    }

    #[test]
    fn gap_above_threshold_is_concrete() {
        let policy = InterpretationPolicy {
            mixed_threshold: Some(4),
        };
        let result = Interpreter::interpret(&tally(21, 16, 3, 1), &policy).unwrap();
        assert_eq!(result.secondary, Secondary::Category(Category::Yellow));
    }

    #[test]
    fn disabled_threshold_never_mixes() {
        let policy = InterpretationPolicy {
            mixed_threshold: None,
        };
        let result = Interpreter::interpret(&tally(5, 5, 5, 5), &policy).unwrap();
        assert_eq!(result.secondary, Secondary::Category(Category::Yellow));
    }

    #[test]
    fn single_red_scenario() {
        let result =
            Interpreter::interpret(&tally(24, 0, 0, 0), &InterpretationPolicy::default()).unwrap();

        assert_eq!(result.dominant, Category::Red);
        assert_eq!(result.runner_up, Category::Yellow);
        assert_eq!(result.secondary, Secondary::Category(Category::Yellow));
        assert_eq!(result.dominant.opposite(), Category::Green);
    }

    #[test]
    fn equal_scores_resolve_in_declaration_order() {
        let result =
            Interpreter::interpret(&tally(16, 16, 16, 16), &InterpretationPolicy::default())
                .unwrap();

        let order: Vec<Category> = result.ranking.iter().map(|r| r.category).collect();
        assert_eq!(order, Category::ALL.to_vec());
        assert_eq!(result.dominant, Category::Red);
        assert_eq!(result.runner_up, Category::Yellow);
        assert_eq!(result.secondary, Secondary::Mixed);
    }

    #[test]
    fn partial_tie_keeps_declaration_order_among_equals() {
        let ranking = Interpreter::rank(&tally(4, 9, 9, 4));
        let order: Vec<Category> = ranking.iter().map(|r| r.category).collect();
        assert_eq!(
            order,
            vec![Category::Yellow, Category::Green, Category::Red, Category::Blue]
        );
    }

    #[test]
    fn dual_profile_reads_each_axis() {
        let bank = QuestionBank::new(vec![
            Question::fixed(1, "Consciente azul", Category::Blue).unwrap(),
            Question::fixed(2, "Consciente verde", Category::Green).unwrap(),
            Question::fixed(3, "Reactiva roja", Category::Red)
                .unwrap()
                .on_axis(ProfileAxis::Unconscious),
        ])
        .unwrap();
        let responses = vec![
            Response::new(QuestionId::new(1), AnswerLevel::Strongly),
            Response::new(QuestionId::new(2), AnswerLevel::Slightly),
            Response::new(QuestionId::new(3), AnswerLevel::Fairly),
        ];

        let dual = Interpreter::interpret_dual(
            &bank,
            &responses,
            &ScoringPolicy::default(),
            &InterpretationPolicy { mixed_threshold: None },
        )
        .unwrap();

        assert_eq!(dual.conscious.dominant, Category::Blue);
        assert_eq!(dual.conscious.runner_up, Category::Green);
        assert_eq!(dual.unconscious.dominant, Category::Red);
    }

    #[test]
    fn dual_profile_with_silent_axis_is_insufficient() {
        let bank = QuestionBank::new(vec![
            Question::fixed(1, "Consciente", Category::Blue).unwrap(),
            Question::fixed(2, "Reactiva", Category::Red)
                .unwrap()
                .on_axis(ProfileAxis::Unconscious),
        ])
        .unwrap();
        let responses = vec![
            Response::new(QuestionId::new(1), AnswerLevel::Strongly),
            Response::new(QuestionId::new(2), AnswerLevel::NotAtAll),
        ];

        let err = Interpreter::interpret_dual(
            &bank,
            &responses,
            &ScoringPolicy::default(),
            &InterpretationPolicy::default(),
        )
        .unwrap_err();

        assert!(matches!(err, ScoringError::InsufficientData(_)));
    }

    #[test]
    fn secondary_serializes_as_label() {
        assert_eq!(serde_json::to_string(&Secondary::Mixed).unwrap(), "\"Mixto\"");
        assert_eq!(
            serde_json::to_string(&Secondary::Category(Category::Green)).unwrap(),
            "\"Verde\""
        );
        let parsed: Secondary = serde_json::from_str("\"Azul\"").unwrap();
        assert_eq!(parsed, Secondary::Category(Category::Blue));
        assert!("Morado".parse::<Secondary>().is_err());
    }

    proptest! {
        #[test]
        fn ranking_is_sorted_and_complete(
            red in 0u32..100, yellow in 0u32..100, green in 0u32..100, blue in 0u32..100
        ) {
            let ranking = Interpreter::rank(&tally(red, yellow, green, blue));
            prop_assert_eq!(ranking.len(), 4);
            for pair in ranking.windows(2) {
                prop_assert!(pair[0].score >= pair[1].score);
                if pair[0].score == pair[1].score {
                    prop_assert!(pair[0].category.index() < pair[1].category.index());
                }
            }
        }

        #[test]
        fn interpretation_is_deterministic(
            red in 0u32..100, yellow in 0u32..100, green in 0u32..100, blue in 1u32..100
        ) {
            let t = tally(red, yellow, green, blue);
            let policy = InterpretationPolicy::default();
            prop_assert_eq!(
                Interpreter::interpret(&t, &policy).unwrap(),
                Interpreter::interpret(&t, &policy).unwrap()
            );
        }
    }
}
