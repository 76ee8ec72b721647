//! AssessmentStatus - lifecycle of one respondent's session.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::foundation::StateMachine;

/// Session lifecycle.
///
/// `Collecting(k)` means `k` questions have been answered. There is no way
/// back from `ReportReady`; a retake needs a fresh assessment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum AssessmentStatus {
    #[default]
    NotStarted,
    Collecting(usize),
    Completed,
    ReportReady,
}

impl AssessmentStatus {
    /// Returns true while responses may still be recorded or edited.
    pub fn accepts_responses(&self) -> bool {
        !matches!(self, AssessmentStatus::ReportReady)
    }

    /// Number of answered questions implied by the status, if known.
    pub fn answered(&self) -> Option<usize> {
        match self {
            AssessmentStatus::NotStarted => Some(0),
            AssessmentStatus::Collecting(k) => Some(*k),
            AssessmentStatus::Completed | AssessmentStatus::ReportReady => None,
        }
    }
}

impl StateMachine for AssessmentStatus {
    fn can_transition_to(&self, target: &Self) -> bool {
        use AssessmentStatus::*;
        match (self, target) {
            (NotStarted, Collecting(0)) => true,
            (Collecting(k), Collecting(next)) => *next == k + 1,
            (Collecting(_), Completed) => true,
            (Completed, ReportReady) => true,
            _ => false,
        }
    }

    fn valid_transitions(&self) -> Vec<Self> {
        use AssessmentStatus::*;
        match self {
            NotStarted => vec![Collecting(0)],
            Collecting(k) => vec![Collecting(k + 1), Completed],
            Completed => vec![ReportReady],
            ReportReady => vec![],
        }
    }
}

impl fmt::Display for AssessmentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AssessmentStatus::NotStarted => write!(f, "NotStarted"),
            AssessmentStatus::Collecting(k) => write!(f, "Collecting({})", k),
            AssessmentStatus::Completed => write!(f, "Completed"),
            AssessmentStatus::ReportReady => write!(f, "ReportReady"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use AssessmentStatus::*;

    #[test]
    fn default_is_not_started() {
        assert_eq!(AssessmentStatus::default(), NotStarted);
    }

    #[test]
    fn not_started_moves_only_to_first_collecting() {
        assert!(NotStarted.can_transition_to(&Collecting(0)));
        assert!(!NotStarted.can_transition_to(&Collecting(1)));
        assert!(!NotStarted.can_transition_to(&Completed));
    }

    #[test]
    fn collecting_advances_one_step_at_a_time() {
        assert!(Collecting(3).can_transition_to(&Collecting(4)));
        assert!(!Collecting(3).can_transition_to(&Collecting(5)));
        assert!(!Collecting(3).can_transition_to(&Collecting(2)));
        assert!(Collecting(3).can_transition_to(&Completed));
    }

    #[test]
    fn report_ready_is_terminal() {
        assert!(ReportReady.is_terminal());
        assert!(!ReportReady.can_transition_to(&Collecting(0)));
        assert!(ReportReady.transition_to(Completed).is_err());
        assert!(!ReportReady.accepts_responses());
    }

    #[test]
    fn completed_accepts_edits_until_report() {
        assert!(Completed.accepts_responses());
        assert_eq!(Completed.transition_to(ReportReady), Ok(ReportReady));
    }

    #[test]
    fn answered_counts_only_while_collecting() {
        assert_eq!(NotStarted.answered(), Some(0));
        assert_eq!(Collecting(7).answered(), Some(7));
        assert_eq!(Completed.answered(), None);
    }

    #[test]
    fn display_includes_progress() {
        assert_eq!(Collecting(2).to_string(), "Collecting(2)");
        assert_eq!(ReportReady.to_string(), "ReportReady");
    }
}
