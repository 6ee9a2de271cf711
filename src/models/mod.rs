pub mod loaders;
pub mod problem_kind;
pub mod problem_type;
pub mod question;

pub use loaders::{load_lesson_file, parse_lesson, save_lesson_file};
pub use problem_kind::{ChoiceMode, ProblemKind, UnknownProblemKind};
pub use problem_type::{AnswerOption, ProblemBody, ProblemType, TableData};
pub use question::Question;
