//! Question pool selection
//!
//! Builds the ordered, level-indexed question set for a new game: one
//! question per level, chosen uniformly at random among the candidates at
//! that difficulty, never repeating a question within the game.

use crate::core::error::GameError;
use crate::core::ids::QuestionId;
use crate::core::question::Question;
use crate::game::GameQuestion;
use rand::Rng;
use std::collections::{BTreeMap, HashSet};

/// Candidate questions grouped by difficulty level.
#[derive(Debug, Clone, Default)]
pub struct QuestionPool {
    by_level: BTreeMap<usize, Vec<Question>>,
}

impl QuestionPool {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_questions(questions: impl IntoIterator<Item = Question>) -> Self {
        let mut pool = Self::new();
        for question in questions {
            pool.add(question);
        }
        pool
    }

    pub fn add(&mut self, question: Question) {
        self.by_level
            .entry(question.level())
            .or_default()
            .push(question);
    }

    pub fn candidates(&self, level: usize) -> &[Question] {
        self.by_level.get(&level).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Total number of questions in the pool.
    pub fn len(&self) -> usize {
        self.by_level.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Pick one question per level `0..level_count`.
///
/// Fails with [`GameError::InsufficientQuestions`] for the first level left
/// without an unused candidate.
pub fn select_questions<R: Rng + ?Sized>(
    pool: &QuestionPool,
    level_count: usize,
    rng: &mut R,
) -> Result<Vec<GameQuestion>, GameError> {
    let mut used: HashSet<QuestionId> = HashSet::new();
    let mut selected = Vec::with_capacity(level_count);

    for level in 0..level_count {
        let available: Vec<&Question> = pool
            .candidates(level)
            .iter()
            .filter(|q| !used.contains(&q.id()))
            .collect();

        if available.is_empty() {
            return Err(GameError::InsufficientQuestions { level });
        }

        let question = available[rng.gen_range(0..available.len())];
        used.insert(question.id());
        selected.push(GameQuestion::new(level, question.clone()));
    }

    Ok(selected)
}
