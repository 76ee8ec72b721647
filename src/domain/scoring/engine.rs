//! Scoring Engine - folds responses into a per-category tally.

use serde::Deserialize;
use std::collections::{HashMap, HashSet};

use super::{ScoreTally, ScoringError};
use crate::domain::foundation::QuestionId;
use crate::domain::questionnaire::{AnswerLevel, ProfileAxis, QuestionBank, Response};

/// How much a chosen option adds to its category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WeightScheme {
    /// The option's ordinal weight (3/2/1/0).
    #[default]
    Weighted,
    /// Every answer counts once, whatever the level.
    TallyOnly,
}

impl WeightScheme {
    pub fn weight_of(&self, level: AnswerLevel) -> u32 {
        match self {
            WeightScheme::Weighted => level.weight(),
            WeightScheme::TallyOnly => 1,
        }
    }
}

/// What to do when a question id appears more than once.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DuplicatePolicy {
    /// Fail with `DuplicateResponse`.
    #[default]
    Reject,
    /// The later response replaces the earlier one.
    LastWriteWins,
}

/// Scoring configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScoringPolicy {
    pub weighting: WeightScheme,
    pub duplicates: DuplicatePolicy,
}

/// Scoring functions.
pub struct ScoringEngine;

impl ScoringEngine {
    /// Folds every response into a tally.
    ///
    /// # Algorithm
    /// For each effective response: resolve the question, resolve the category
    /// credited by the chosen option, add the option's weight to it.
    ///
    /// # Errors
    /// - `UnknownQuestion` for an id not in the bank
    /// - `UnknownOption` for a level the question does not offer
    /// - `DuplicateResponse` for a repeated id under `DuplicatePolicy::Reject`
    ///
    /// Nothing is returned on failure, so no partial tally escapes.
    pub fn score(
        bank: &QuestionBank,
        responses: &[Response],
        policy: &ScoringPolicy,
    ) -> Result<ScoreTally, ScoringError> {
        Self::fold(bank, responses, policy, |_| true)
    }

    /// Same as [`ScoringEngine::score`], counting only questions on `axis`.
    ///
    /// Responses to other questions are still validated.
    pub fn score_axis(
        bank: &QuestionBank,
        responses: &[Response],
        policy: &ScoringPolicy,
        axis: ProfileAxis,
    ) -> Result<ScoreTally, ScoringError> {
        Self::fold(bank, responses, policy, |a| a == axis)
    }

    /// Sum of the weights of the effective responses, independent of category.
    pub fn total_weight(
        responses: &[Response],
        policy: &ScoringPolicy,
    ) -> Result<u32, ScoringError> {
        Ok(Self::effective_responses(responses, policy.duplicates)?
            .iter()
            .map(|r| policy.weighting.weight_of(r.answer))
            .sum())
    }

    fn fold(
        bank: &QuestionBank,
        responses: &[Response],
        policy: &ScoringPolicy,
        include: impl Fn(ProfileAxis) -> bool,
    ) -> Result<ScoreTally, ScoringError> {
        for response in responses {
            let question = bank
                .get(response.question_id)
                .ok_or(ScoringError::UnknownQuestion(response.question_id))?;
            question.category_for(response.answer)?;
        }

        let mut tally = ScoreTally::new();
        for response in Self::effective_responses(responses, policy.duplicates)? {
            let question = bank
                .get(response.question_id)
                .ok_or(ScoringError::UnknownQuestion(response.question_id))?;
            if !include(question.axis()) {
                continue;
            }
            let category = question.category_for(response.answer)?;
            tally.add(category, policy.weighting.weight_of(response.answer));
        }
        Ok(tally)
    }

    /// Applies the duplicate policy, keeping the original order of first
    /// appearance for each question.
    fn effective_responses(
        responses: &[Response],
        policy: DuplicatePolicy,
    ) -> Result<Vec<Response>, ScoringError> {
        match policy {
            DuplicatePolicy::Reject => {
                let mut seen = HashSet::with_capacity(responses.len());
                for response in responses {
                    if !seen.insert(response.question_id) {
                        return Err(ScoringError::DuplicateResponse(response.question_id));
                    }
                }
                Ok(responses.to_vec())
            }
            DuplicatePolicy::LastWriteWins => {
                let mut latest: HashMap<QuestionId, Response> = HashMap::new();
                for response in responses {
                    latest.insert(response.question_id, *response);
                }
                let mut emitted = HashSet::with_capacity(latest.len());
                Ok(responses
                    .iter()
                    .filter(|r| emitted.insert(r.question_id))
                    .filter_map(|r| latest.get(&r.question_id).copied())
                    .collect())
            }
        }
    }
}
