pub mod edit_ctx;
pub mod question_editor;

pub use edit_ctx::EditCtx;
pub use question_editor::{EditorEvent, QuestionEditor, QuestionHost, ViewState};
