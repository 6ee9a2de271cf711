pub mod grading;
pub mod preciseness;
pub mod validation;

pub use grading::{grade, is_correct, parse_confidence, submit, Grade, SubmitOutcome};
pub use preciseness::{is_well_formed_preciseness, Preciseness};
pub use validation::{lint_question, LintIssue};
