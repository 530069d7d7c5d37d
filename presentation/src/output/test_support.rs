//! Fixtures for formatter tests.

use chrono::{DateTime, Utc};
use ladder_domain::{AnswerKey, Game, GameId, GameQuestion, PlayerId, Question, QuestionId};

/// A fifteen-level game whose correct answers are all `a` ("right").
pub(crate) fn game(created_at: DateTime<Utc>) -> Game {
    let questions = (0..15)
        .map(|level| {
            let question = Question::new(
                QuestionId::new(level as u64 + 1),
                format!("Which way is number {}?", level + 1),
                [
                    "right".to_string(),
                    "left".to_string(),
                    "up".to_string(),
                    "down".to_string(),
                ],
                AnswerKey::A,
                level,
            );
            GameQuestion::new(level, question)
        })
        .collect();
    Game::new(GameId::new(1), PlayerId::new("alice"), questions, created_at).unwrap()
}
