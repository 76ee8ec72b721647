//! Questionnaire module - questions, answer weighting and the question bank.
//!
//! Questions are static configuration: built once (from the built-in table or
//! a YAML file) and never mutated. Each question credits either one fixed
//! category or, in the free-choice variant, a category per answer option.

mod answer;
mod bank;
mod question;

pub use answer::AnswerLevel;
pub use bank::{BankLoadError, QuestionBank};
pub use question::{
    OptionTag, ProfileAxis, Question, QuestionDefinition, QuestionTarget, Response,
};
