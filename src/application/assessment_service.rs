//! AssessmentService - presentation-facing operations on an assessment.
//!
//! Holds the shared, read-only collaborators (question bank, settings,
//! narrative catalog) and applies them to assessments owned by the caller.

use std::sync::Arc;

use crate::domain::assessment::{Assessment, AssessmentSettings, AssessmentStatus};
use crate::domain::foundation::{DomainError, Percentage, QuestionId};
use crate::domain::questionnaire::{AnswerLevel, ProfileAxis, Question, QuestionBank, Response};
use crate::domain::report::{NarrativeCatalog, Report};

/// Service driving assessments against one question bank.
#[derive(Debug, Clone)]
pub struct AssessmentService {
    bank: Arc<QuestionBank>,
    settings: AssessmentSettings,
    catalog: Arc<NarrativeCatalog>,
}

impl AssessmentService {
    pub fn new(
        bank: Arc<QuestionBank>,
        settings: AssessmentSettings,
        catalog: Arc<NarrativeCatalog>,
    ) -> Self {
        Self {
            bank,
            settings,
            catalog,
        }
    }

    pub fn bank(&self) -> &QuestionBank {
        &self.bank
    }

    pub fn settings(&self) -> &AssessmentSettings {
        &self.settings
    }

    /// Creates a new assessment in `Collecting(0)`.
    pub fn start(&self) -> Result<Assessment, DomainError> {
        let mut assessment = Assessment::new(self.bank.clone(), self.settings);
        assessment.start()?;
        tracing::info!(
            assessment_id = %assessment.id(),
            questions = self.bank.len(),
            "Assessment started"
        );
        Ok(assessment)
    }

    /// Records an answer for `question_id`.
    pub fn submit_response(
        &self,
        assessment: &mut Assessment,
        question_id: QuestionId,
        answer: AnswerLevel,
    ) -> Result<AssessmentStatus, DomainError> {
        self.record(assessment, Response::new(question_id, answer))
    }

    /// Records an answer given by its option label.
    pub fn submit_label(
        &self,
        assessment: &mut Assessment,
        question_id: QuestionId,
        label: &str,
    ) -> Result<AssessmentStatus, DomainError> {
        let response = Response::parse(question_id, label).map_err(|e| {
            tracing::debug!(question_id = %question_id, label, "Unrecognised option label");
            DomainError::from(e)
        })?;
        self.record(assessment, response)
    }

    pub fn current_question<'a>(&self, assessment: &'a Assessment) -> Option<&'a Question> {
        assessment.current_question()
    }

    pub fn progress(&self, assessment: &Assessment) -> Percentage {
        assessment.progress()
    }

    pub fn is_complete(&self, assessment: &Assessment) -> bool {
        assessment.is_complete()
    }

    /// Produces the report, or returns the one already produced.
    ///
    /// # Errors
    ///
    /// - `InsufficientData` if the assessment is not complete, or every
    ///   answer carried zero weight
    pub fn get_report<'a>(
        &self,
        assessment: &'a mut Assessment,
    ) -> Result<&'a Report, DomainError> {
        let was_ready = assessment.status() == AssessmentStatus::ReportReady;
        let id = *assessment.id();
        let dual_requested = assessment.settings().dual_profile;

        let report = assessment.finalize(&self.catalog).map_err(|e| {
            tracing::warn!(assessment_id = %id, error = %e, "Report not available");
            DomainError::from(e)
        })?;

        if !was_ready {
            tracing::info!(
                assessment_id = %id,
                dominant = %report.profile.dominant,
                secondary = %report.profile.unconscious,
                "Report ready"
            );
            if dual_requested && report.dual.is_none() {
                let reactive = self.bank.ids_on_axis(ProfileAxis::Unconscious);
                tracing::warn!(
                    assessment_id = %id,
                    reactive_questions = ?reactive,
                    "Dual profile omitted: a question subset scored nothing"
                );
            }
        }
        Ok(report)
    }

    fn record(
        &self,
        assessment: &mut Assessment,
        response: Response,
    ) -> Result<AssessmentStatus, DomainError> {
        match assessment.submit_response(response) {
            Ok(status) => {
                tracing::debug!(
                    assessment_id = %assessment.id(),
                    question_id = %response.question_id,
                    status = %status,
                    "Response recorded"
                );
                if status == AssessmentStatus::Completed {
                    tracing::info!(assessment_id = %assessment.id(), "Assessment completed");
                }
                Ok(status)
            }
            Err(e) => {
                tracing::debug!(
                    assessment_id = %assessment.id(),
                    question_id = %response.question_id,
                    error = %e,
                    "Response rejected"
                );
                Err(e.into())
            }
        }
    }
}
