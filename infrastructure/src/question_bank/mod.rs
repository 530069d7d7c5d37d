//! Question bank adapters.

mod toml_bank;

pub use toml_bank::{QuestionFileError, StaticQuestionBank};
