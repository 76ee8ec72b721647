//! Scoring error taxonomy.

use thiserror::Error;

use crate::domain::foundation::{DomainError, ErrorCode, QuestionId};

/// Local, synchronous validation failures raised while scoring and
/// interpreting responses. None of them are retryable.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScoringError {
    /// A category name outside the closed set.
    #[error("Invalid category: '{0}'")]
    InvalidCategory(String),

    /// A response referenced a question that is not in the bank.
    #[error("Unknown question: {0}")]
    UnknownQuestion(QuestionId),

    /// A response chose an option the question does not offer.
    #[error("Unknown option '{option}' for question {}", describe_question(.question_id))]
    UnknownOption {
        question_id: Option<QuestionId>,
        option: String,
    },

    /// The same question was answered twice under the reject policy.
    #[error("Question {0} has already been answered")]
    DuplicateResponse(QuestionId),

    /// Nothing was scored, so no category can be ranked.
    #[error("Insufficient data: {0}")]
    InsufficientData(String),
}

impl ScoringError {
    pub fn unknown_option(question_id: Option<QuestionId>, option: impl Into<String>) -> Self {
        ScoringError::UnknownOption {
            question_id,
            option: option.into(),
        }
    }

    pub fn insufficient_data(reason: impl Into<String>) -> Self {
        ScoringError::InsufficientData(reason.into())
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            ScoringError::InvalidCategory(_) => ErrorCode::InvalidCategory,
            ScoringError::UnknownQuestion(_) => ErrorCode::UnknownQuestion,
            ScoringError::UnknownOption { .. } => ErrorCode::UnknownOption,
            ScoringError::DuplicateResponse(_) => ErrorCode::DuplicateResponse,
            ScoringError::InsufficientData(_) => ErrorCode::InsufficientData,
        }
    }
}

impl From<ScoringError> for DomainError {
    fn from(err: ScoringError) -> Self {
        let domain = DomainError::new(err.code(), err.to_string());
        match &err {
            ScoringError::UnknownQuestion(id) | ScoringError::DuplicateResponse(id) => {
                domain.with_detail("question_id", id.to_string())
            }
            ScoringError::UnknownOption {
                question_id: Some(id),
                option,
            } => domain
                .with_detail("question_id", id.to_string())
                .with_detail("option", option.clone()),
            _ => domain,
        }
    }
}

fn describe_question(id: &Option<QuestionId>) -> String {
    id.map(|id| id.to_string()).unwrap_or_else(|| "-".to_string())
}
