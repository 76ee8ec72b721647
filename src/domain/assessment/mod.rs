//! Assessment module - one respondent's session through the questionnaire.

mod aggregate;
mod errors;
mod settings;
mod status;

pub use aggregate::Assessment;
pub use errors::AssessmentError;
pub use settings::AssessmentSettings;
pub use status::AssessmentStatus;
