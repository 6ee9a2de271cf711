pub mod lesson_loader;

pub use lesson_loader::{load_lesson_file, parse_lesson, save_lesson_file};
