//! Questions, their category targets, and responses to them.

use serde::{Deserialize, Serialize};

use super::AnswerLevel;
use crate::domain::foundation::{QuestionId, ValidationError};
use crate::domain::scoring::ScoringError;
use crate::domain::styles::Category;

/// Which sub-profile a question feeds in dual-profile mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProfileAxis {
    /// Explicit, self-reported behaviour.
    #[default]
    Conscious,
    /// Reactive behaviour under pressure or in unguarded settings.
    Unconscious,
}

/// One answer option tagged with its own category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OptionTag {
    pub level: AnswerLevel,
    pub category: Category,
}

impl OptionTag {
    pub fn new(level: AnswerLevel, category: Category) -> Self {
        Self { level, category }
    }
}

/// Where the weight of an answer is credited.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuestionTarget {
    /// Every option credits the question's single category.
    Fixed(Category),
    /// Each option credits its own category.
    PerOption(Vec<OptionTag>),
}

/// A single statement in the questionnaire.
///
/// # Invariants
///
/// - `text` is non-empty
/// - a per-option question offers at least one option and no level twice
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "QuestionDefinition", into = "QuestionDefinition")]
pub struct Question {
    id: QuestionId,
    text: String,
    axis: ProfileAxis,
    target: QuestionTarget,
}

impl Question {
    /// Creates a question crediting a single category.
    pub fn fixed(
        id: u32,
        text: impl Into<String>,
        category: Category,
    ) -> Result<Self, ValidationError> {
        Self::new(
            QuestionId::new(id),
            text.into(),
            ProfileAxis::default(),
            QuestionTarget::Fixed(category),
        )
    }

    /// Creates a question whose options carry their own categories.
    pub fn per_option(
        id: u32,
        text: impl Into<String>,
        options: Vec<OptionTag>,
    ) -> Result<Self, ValidationError> {
        Self::new(
            QuestionId::new(id),
            text.into(),
            ProfileAxis::default(),
            QuestionTarget::PerOption(options),
        )
    }

    fn new(
        id: QuestionId,
        text: String,
        axis: ProfileAxis,
        target: QuestionTarget,
    ) -> Result<Self, ValidationError> {
        if text.trim().is_empty() {
            return Err(ValidationError::empty_field(format!("question[{}].text", id)));
        }
        if let QuestionTarget::PerOption(options) = &target {
            if options.is_empty() {
                return Err(ValidationError::empty_field(format!(
                    "question[{}].options",
                    id
                )));
            }
            for (i, tag) in options.iter().enumerate() {
                if options[..i].iter().any(|other| other.level == tag.level) {
                    return Err(ValidationError::invalid_format(
                        format!("question[{}].options", id),
                        format!("level '{}' listed twice", tag.level),
                    ));
                }
            }
        }
        Ok(Self {
            id,
            text,
            axis,
            target,
        })
    }

    /// Rebuilds a question from trusted static data (no validation).
    pub(crate) fn reconstitute(
        id: QuestionId,
        text: String,
        axis: ProfileAxis,
        target: QuestionTarget,
    ) -> Self {
        Self {
            id,
            text,
            axis,
            target,
        }
    }

    /// Moves the question onto another profile axis.
    pub fn on_axis(mut self, axis: ProfileAxis) -> Self {
        self.axis = axis;
        self
    }

    pub fn id(&self) -> QuestionId {
        self.id
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn axis(&self) -> ProfileAxis {
        self.axis
    }

    pub fn target(&self) -> &QuestionTarget {
        &self.target
    }

    /// Levels a respondent may choose, highest agreement first.
    pub fn offered_levels(&self) -> Vec<AnswerLevel> {
        match &self.target {
            QuestionTarget::Fixed(_) => AnswerLevel::OFFERED.to_vec(),
            QuestionTarget::PerOption(options) => {
                let mut levels: Vec<AnswerLevel> = options.iter().map(|o| o.level).collect();
                levels.sort_by(|a, b| b.cmp(a));
                levels
            }
        }
    }

    /// Category credited when `level` is chosen.
    ///
    /// # Errors
    ///
    /// - `UnknownOption` if the question does not offer `level`
    pub fn category_for(&self, level: AnswerLevel) -> Result<Category, ScoringError> {
        match &self.target {
            QuestionTarget::Fixed(category) => Ok(*category),
            QuestionTarget::PerOption(options) => options
                .iter()
                .find(|tag| tag.level == level)
                .map(|tag| tag.category)
                .ok_or_else(|| ScoringError::unknown_option(Some(self.id), level.label())),
        }
    }
}

/// Serialized shape of a question, as written in question bank files.
///
/// Exactly one of `category` or `options` must be present.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuestionDefinition {
    pub id: QuestionId,
    pub text: String,
    #[serde(default)]
    pub axis: ProfileAxis,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<Category>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub options: Option<Vec<OptionTag>>,
}

impl TryFrom<QuestionDefinition> for Question {
    type Error = ValidationError;

    fn try_from(def: QuestionDefinition) -> Result<Self, Self::Error> {
        let target = match (def.category, def.options) {
            (Some(category), None) => QuestionTarget::Fixed(category),
            (None, Some(options)) => QuestionTarget::PerOption(options),
            _ => {
                return Err(ValidationError::invalid_format(
                    format!("question[{}]", def.id),
                    "exactly one of 'category' or 'options' is required",
                ))
            }
        };
        Question::new(def.id, def.text, def.axis, target)
    }
}

impl From<Question> for QuestionDefinition {
    fn from(q: Question) -> Self {
        let (category, options) = match q.target {
            QuestionTarget::Fixed(category) => (Some(category), None),
            QuestionTarget::PerOption(options) => (None, Some(options)),
        };
        Self {
            id: q.id,
            text: q.text,
            axis: q.axis,
            category,
            options,
        }
    }
}

/// A respondent's chosen answer to one question.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Response {
    pub question_id: QuestionId,
    pub answer: AnswerLevel,
}

impl Response {
    pub fn new(question_id: QuestionId, answer: AnswerLevel) -> Self {
        Self {
            question_id,
            answer,
        }
    }

    /// Builds a response from a free-text option label.
    ///
    /// # Errors
    ///
    /// - `UnknownOption` if the label is not on either answer scale
    pub fn parse(question_id: QuestionId, label: &str) -> Result<Self, ScoringError> {
        let answer = label
            .parse::<AnswerLevel>()
            .map_err(|_| ScoringError::unknown_option(Some(question_id), label))?;
        Ok(Self {
            question_id,
            answer,
        })
    }
}
