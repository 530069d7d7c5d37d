//! Question value object

use super::ids::QuestionId;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use thiserror::Error;

/// One of the four answer slots of a question.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AnswerKey {
    A,
    B,
    C,
    D,
}

impl AnswerKey {
    /// All keys in display order.
    pub const ALL: [AnswerKey; 4] = [AnswerKey::A, AnswerKey::B, AnswerKey::C, AnswerKey::D];

    pub fn as_str(&self) -> &'static str {
        match self {
            AnswerKey::A => "a",
            AnswerKey::B => "b",
            AnswerKey::C => "c",
            AnswerKey::D => "d",
        }
    }

    /// Position of this key inside [`AnswerKey::ALL`].
    pub fn index(&self) -> usize {
        match self {
            AnswerKey::A => 0,
            AnswerKey::B => 1,
            AnswerKey::C => 2,
            AnswerKey::D => 3,
        }
    }
}

impl std::fmt::Display for AnswerKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Error returned when a string is not one of `a`, `b`, `c`, `d`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Invalid answer key: '{0}' (expected a, b, c or d)")]
pub struct ParseAnswerKeyError(pub String);

impl FromStr for AnswerKey {
    type Err = ParseAnswerKeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "a" => Ok(AnswerKey::A),
            "b" => Ok(AnswerKey::B),
            "c" => Ok(AnswerKey::C),
            "d" => Ok(AnswerKey::D),
            _ => Err(ParseAnswerKeyError(s.to_string())),
        }
    }
}

/// A question from the shared question bank (Value Object)
///
/// Immutable once created. Carries four answer options keyed `a..d`,
/// exactly one of which is correct, and a difficulty level matching
/// the ladder index it may be asked at.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    id: QuestionId,
    text: String,
    answers: [String; 4],
    correct: AnswerKey,
    level: usize,
}

impl Question {
    /// Create a new question
    ///
    /// # Panics
    /// Panics if the text is empty or only whitespace
    pub fn new(
        id: QuestionId,
        text: impl Into<String>,
        answers: [String; 4],
        correct: AnswerKey,
        level: usize,
    ) -> Self {
        let text = text.into();
        assert!(!text.trim().is_empty(), "Question text cannot be empty");
        Self {
            id,
            text,
            answers,
            correct,
            level,
        }
    }

    /// Try to create a new question, returning None if the text or any answer is blank
    pub fn try_new(
        id: QuestionId,
        text: impl Into<String>,
        answers: [String; 4],
        correct: AnswerKey,
        level: usize,
    ) -> Option<Self> {
        let text = text.into();
        if text.trim().is_empty() || answers.iter().any(|a| a.trim().is_empty()) {
            return None;
        }
        Some(Self {
            id,
            text,
            answers,
            correct,
            level,
        })
    }

    pub fn id(&self) -> QuestionId {
        self.id
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn level(&self) -> usize {
        self.level
    }

    pub fn correct_key(&self) -> AnswerKey {
        self.correct
    }

    /// Answer text for the given key.
    pub fn answer(&self, key: AnswerKey) -> &str {
        &self.answers[key.index()]
    }

    /// Iterate over `(key, text)` pairs in key order.
    pub fn answers(&self) -> impl Iterator<Item = (AnswerKey, &str)> {
        AnswerKey::ALL
            .iter()
            .map(move |k| (*k, self.answers[k.index()].as_str()))
    }

    /// Keys of the three wrong answers, in key order.
    pub fn wrong_keys(&self) -> Vec<AnswerKey> {
        AnswerKey::ALL
            .into_iter()
            .filter(|k| *k != self.correct)
            .collect()
    }

    /// Grade a submitted letter. Anything that is not a valid key counts as wrong.
    pub fn is_correct(&self, letter: &str) -> bool {
        letter
            .parse::<AnswerKey>()
            .is_ok_and(|key| key == self.correct)
    }
}

impl std::fmt::Display for Question {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.text)
    }
}
