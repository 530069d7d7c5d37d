//! Question bank backed by a TOML file.
//!
//! ```toml
//! [[questions]]
//! id = 1
//! level = 0
//! text = "Which planet is known as the Red Planet?"
//! correct = "b"
//!
//! [questions.answers]
//! a = "Venus"
//! b = "Mars"
//! c = "Jupiter"
//! d = "Saturn"
//! ```

use async_trait::async_trait;
use ladder_application::ports::question_bank::{QuestionBank, QuestionBankError};
use ladder_domain::{AnswerKey, Question, QuestionId};
use serde::Deserialize;
use std::collections::{BTreeMap, HashSet};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::info;

/// Errors raised while reading a question file.
#[derive(Error, Debug)]
pub enum QuestionFileError {
    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse question file: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Question {0} appears more than once")]
    DuplicateId(QuestionId),

    #[error("Question {0} has blank text or a blank answer")]
    Blank(QuestionId),
}

impl From<QuestionFileError> for QuestionBankError {
    fn from(err: QuestionFileError) -> Self {
        match err {
            QuestionFileError::Io { .. } => QuestionBankError::Unavailable(err.to_string()),
            other => QuestionBankError::InvalidData(other.to_string()),
        }
    }
}

#[derive(Debug, Deserialize)]
struct QuestionFile {
    #[serde(default)]
    questions: Vec<QuestionRecord>,
}

#[derive(Debug, Deserialize)]
struct QuestionRecord {
    id: u64,
    level: usize,
    text: String,
    correct: AnswerKey,
    answers: AnswerRecord,
}

#[derive(Debug, Deserialize)]
struct AnswerRecord {
    a: String,
    b: String,
    c: String,
    d: String,
}

impl QuestionRecord {
    fn into_question(self) -> Result<Question, QuestionFileError> {
        let id = QuestionId::new(self.id);
        let AnswerRecord { a, b, c, d } = self.answers;
        Question::try_new(id, self.text, [a, b, c, d], self.correct, self.level)
            .ok_or(QuestionFileError::Blank(id))
    }
}

/// Read-only question bank held in memory, grouped by level.
#[derive(Debug, Clone, Default)]
pub struct StaticQuestionBank {
    by_level: BTreeMap<usize, Vec<Question>>,
}

impl StaticQuestionBank {
    /// Build from questions, rejecting duplicate ids.
    pub fn new(questions: impl IntoIterator<Item = Question>) -> Result<Self, QuestionFileError> {
        let mut seen = HashSet::new();
        let mut by_level: BTreeMap<usize, Vec<Question>> = BTreeMap::new();
        for question in questions {
            if !seen.insert(question.id()) {
                return Err(QuestionFileError::DuplicateId(question.id()));
            }
            by_level.entry(question.level()).or_default().push(question);
        }
        Ok(Self { by_level })
    }

    pub fn from_toml_str(content: &str) -> Result<Self, QuestionFileError> {
        let file: QuestionFile = toml::from_str(content)?;
        let questions = file
            .questions
            .into_iter()
            .map(QuestionRecord::into_question)
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(questions)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, QuestionFileError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| QuestionFileError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let bank = Self::from_toml_str(&content)?;
        info!(
            "Loaded {} questions across {} levels from {}",
            bank.len(),
            bank.by_level.len(),
            path.display()
        );
        Ok(bank)
    }

    pub fn len(&self) -> usize {
        self.by_level.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Levels `0..level_count` that have no question at all.
    pub fn missing_levels(&self, level_count: usize) -> Vec<usize> {
        (0..level_count)
            .filter(|level| !self.by_level.contains_key(level))
            .collect()
    }
}

#[async_trait]
impl QuestionBank for StaticQuestionBank {
    async fn questions_at_level(&self, level: usize) -> Result<Vec<Question>, QuestionBankError> {
        Ok(self.by_level.get(&level).cloned().unwrap_or_default())
    }

    async fn count(&self) -> Result<usize, QuestionBankError> {
        Ok(self.len())
    }
}
