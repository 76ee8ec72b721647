//! Assessment aggregate entity.
//!
//! One respondent's pass through the question bank: responses are accepted
//! in bank order, and once every question is answered the report can be
//! produced exactly once.
//!
//! # Ownership
//!
//! The assessment owns its responses and its report. The question bank is
//! shared read-only with every other assessment.

use std::sync::Arc;

use super::{AssessmentError, AssessmentSettings, AssessmentStatus};
use crate::domain::foundation::{AssessmentId, Percentage, QuestionId, StateMachine, Timestamp};
use crate::domain::questionnaire::{Question, QuestionBank, Response};
use crate::domain::report::{NarrativeCatalog, Report, ReportAssembler};
use crate::domain::scoring::{DuplicatePolicy, Interpreter, ScoringEngine, ScoringError};

/// Assessment aggregate.
///
/// # Invariants
///
/// - `responses[i]` answers `bank.at(i)`, for every recorded `i`
/// - `status` is `Collecting(responses.len())` until every question is answered
/// - `report` is set if and only if `status` is `ReportReady`
/// - a failed operation leaves the aggregate unchanged
#[derive(Debug, Clone)]
pub struct Assessment {
    id: AssessmentId,
    bank: Arc<QuestionBank>,
    settings: AssessmentSettings,
    status: AssessmentStatus,
    responses: Vec<Response>,
    report: Option<Report>,
    started_at: Option<Timestamp>,
    completed_at: Option<Timestamp>,
}

impl Assessment {
    /// Creates a fresh, not yet started assessment.
    pub fn new(bank: Arc<QuestionBank>, settings: AssessmentSettings) -> Self {
        Self {
            id: AssessmentId::new(),
            bank,
            settings,
            status: AssessmentStatus::NotStarted,
            responses: Vec::new(),
            report: None,
            started_at: None,
            completed_at: None,
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Accessors
    // ─────────────────────────────────────────────────────────────────────────

    pub fn id(&self) -> &AssessmentId {
        &self.id
    }

    pub fn status(&self) -> AssessmentStatus {
        self.status
    }

    pub fn settings(&self) -> &AssessmentSettings {
        &self.settings
    }

    pub fn bank(&self) -> &QuestionBank {
        &self.bank
    }

    /// Recorded responses, in bank order.
    pub fn responses(&self) -> &[Response] {
        &self.responses
    }

    pub fn started_at(&self) -> Option<&Timestamp> {
        self.started_at.as_ref()
    }

    pub fn completed_at(&self) -> Option<&Timestamp> {
        self.completed_at.as_ref()
    }

    /// The report, once produced.
    pub fn report(&self) -> Option<&Report> {
        self.report.as_ref()
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Queries
    // ─────────────────────────────────────────────────────────────────────────

    /// The next question to answer, or `None` once all are answered.
    pub fn current_question(&self) -> Option<&Question> {
        match self.status {
            AssessmentStatus::NotStarted | AssessmentStatus::Collecting(_) => {
                self.bank.at(self.responses.len())
            }
            AssessmentStatus::Completed | AssessmentStatus::ReportReady => None,
        }
    }

    pub fn answered(&self) -> usize {
        self.responses.len()
    }

    /// Share of the bank answered so far.
    pub fn progress(&self) -> Percentage {
        Percentage::share_of(
            u32::try_from(self.responses.len()).unwrap_or(u32::MAX),
            u32::try_from(self.bank.len()).unwrap_or(u32::MAX),
        )
    }

    pub fn is_complete(&self) -> bool {
        matches!(
            self.status,
            AssessmentStatus::Completed | AssessmentStatus::ReportReady
        )
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Mutations
    // ─────────────────────────────────────────────────────────────────────────

    /// Moves a fresh assessment into `Collecting(0)`.
    ///
    /// # Errors
    ///
    /// - `Transition` if the assessment has already started
    pub fn start(&mut self) -> Result<AssessmentStatus, AssessmentError> {
        self.status = self.status.transition_to(AssessmentStatus::Collecting(0))?;
        self.started_at = Some(Timestamp::now());
        Ok(self.status)
    }

    /// Records a response, starting the assessment if needed.
    ///
    /// A response to an already answered question is rejected or replaces
    /// the earlier answer, depending on the duplicate policy. Replacing is
    /// allowed until the report is produced.
    ///
    /// # Errors
    ///
    /// - `InvalidState` once the report is produced
    /// - `Scoring(UnknownQuestion)` / `Scoring(UnknownOption)` for invalid input
    /// - `Scoring(DuplicateResponse)` for a repeat under `DuplicatePolicy::Reject`
    /// - `OutOfOrder` for a question beyond the next one
    pub fn submit_response(
        &mut self,
        response: Response,
    ) -> Result<AssessmentStatus, AssessmentError> {
        if !self.status.accepts_responses() {
            return Err(AssessmentError::invalid_state(
                "report already produced; start a new assessment to retake",
            ));
        }

        let id = response.question_id;
        let question = self
            .bank
            .get(id)
            .ok_or(ScoringError::UnknownQuestion(id))?;
        question.category_for(response.answer)?;
        let position = self
            .bank
            .position(id)
            .ok_or(ScoringError::UnknownQuestion(id))?;

        let answered = self.responses.len();
        if position < answered {
            return match self.settings.scoring.duplicates {
                DuplicatePolicy::Reject => Err(ScoringError::DuplicateResponse(id).into()),
                DuplicatePolicy::LastWriteWins => {
                    self.responses[position] = response;
                    Ok(self.status)
                }
            };
        }
        if position > answered {
            return Err(AssessmentError::OutOfOrder {
                expected: self.expected_id(answered).unwrap_or(id),
                actual: id,
            });
        }

        let collecting = match self.status {
            AssessmentStatus::NotStarted => {
                self.status.transition_to(AssessmentStatus::Collecting(0))?
            }
            other => other,
        };
        let next = if answered + 1 == self.bank.len() {
            AssessmentStatus::Completed
        } else {
            AssessmentStatus::Collecting(answered + 1)
        };
        let next = collecting.transition_to(next)?;

        let now = Timestamp::now();
        if self.started_at.is_none() {
            self.started_at = Some(now);
        }
        if next == AssessmentStatus::Completed {
            self.completed_at = Some(now);
        }
        self.responses.push(response);
        self.status = next;
        Ok(next)
    }

    /// Parses an option label and records it.
    ///
    /// # Errors
    ///
    /// As [`Assessment::submit_response`], plus `Scoring(UnknownOption)` for an
    /// unrecognised label.
    pub fn submit_label(
        &mut self,
        question_id: QuestionId,
        label: &str,
    ) -> Result<AssessmentStatus, AssessmentError> {
        let response = Response::parse(question_id, label)?;
        self.submit_response(response)
    }

    /// Scores, interprets and assembles the report, then moves to
    /// `ReportReady`. Later calls return the same report.
    ///
    /// A dual profile is attached when enabled and both question subsets
    /// scored something.
    ///
    /// # Errors
    ///
    /// - `Scoring(InsufficientData)` before every question is answered, or
    ///   when every answer carried zero weight
    /// - any scoring error for the recorded responses
    pub fn finalize(&mut self, catalog: &NarrativeCatalog) -> Result<&Report, AssessmentError> {
        match self.status {
            AssessmentStatus::ReportReady => {
                return self
                    .report
                    .as_ref()
                    .ok_or_else(|| AssessmentError::invalid_state("report missing"));
            }
            AssessmentStatus::Completed => {}
            AssessmentStatus::NotStarted | AssessmentStatus::Collecting(_) => {
                return Err(ScoringError::insufficient_data(format!(
                    "{} of {} questions answered",
                    self.responses.len(),
                    self.bank.len()
                ))
                .into());
            }
        }

        let report = self.compute_report(catalog)?;
        let next = self.status.transition_to(AssessmentStatus::ReportReady)?;
        self.status = next;
        Ok(&*self.report.insert(report))
    }

    fn compute_report(&self, catalog: &NarrativeCatalog) -> Result<Report, AssessmentError> {
        let settings = &self.settings;
        let tally = ScoringEngine::score(&self.bank, &self.responses, &settings.scoring)?;
        let interpretation = Interpreter::interpret(&tally, &settings.interpretation)?;

        let dual = if settings.dual_profile {
            match Interpreter::interpret_dual(
                &self.bank,
                &self.responses,
                &settings.scoring,
                &settings.interpretation,
            ) {
                Ok(dual) => Some(dual),
                Err(ScoringError::InsufficientData(_)) => None,
                Err(e) => return Err(e.into()),
            }
        } else {
            None
        };

        Ok(ReportAssembler::assemble(
            &tally,
            &interpretation,
            dual,
            catalog,
        ))
    }

    fn expected_id(&self, index: usize) -> Option<QuestionId> {
        self.bank.at(index).map(Question::id)
    }
}
