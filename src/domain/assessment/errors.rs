//! Assessment-specific error types.

use thiserror::Error;

use crate::domain::foundation::{DomainError, ErrorCode, QuestionId, ValidationError};
use crate::domain::scoring::ScoringError;

/// Errors raised while driving an assessment session.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AssessmentError {
    /// A response arrived for a question other than the next one.
    #[error("Out-of-order response: expected question {expected}, got {actual}")]
    OutOfOrder {
        expected: QuestionId,
        actual: QuestionId,
    },

    /// The operation is not allowed in the current state.
    #[error("Invalid state: {0}")]
    InvalidState(String),

    #[error(transparent)]
    Scoring(#[from] ScoringError),

    #[error("Invalid transition: {0}")]
    Transition(#[from] ValidationError),
}

impl AssessmentError {
    pub fn invalid_state(message: impl Into<String>) -> Self {
        AssessmentError::InvalidState(message.into())
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            AssessmentError::OutOfOrder { .. } => ErrorCode::OutOfOrderResponse,
            AssessmentError::InvalidState(_) => ErrorCode::InvalidStateTransition,
            AssessmentError::Scoring(e) => e.code(),
            AssessmentError::Transition(_) => ErrorCode::InvalidStateTransition,
        }
    }
}

impl From<AssessmentError> for DomainError {
    fn from(err: AssessmentError) -> Self {
        match err {
            AssessmentError::Scoring(e) => e.into(),
            AssessmentError::OutOfOrder { expected, actual } => {
                DomainError::new(ErrorCode::OutOfOrderResponse, err.to_string())
                    .with_detail("expected", expected.to_string())
                    .with_detail("actual", actual.to_string())
            }
            other => DomainError::new(other.code(), other.to_string()),
        }
    }
}
