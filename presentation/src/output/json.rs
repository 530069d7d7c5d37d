//! JSON output formatter
//!
//! Emits one pretty-printed document per update. The correct answer is never
//! included while the question is still open.

use crate::output::formatter::OutputFormatter;
use ladder_application::GameResult;
use ladder_domain::Game;
use serde_json::{Value, json};

pub struct JsonFormatter;

impl JsonFormatter {
    fn game_value(game: &Game) -> Value {
        let question = game
            .current_game_question()
            .filter(|_| !game.is_finished())
            .map(|gq| {
                let answers: serde_json::Map<String, Value> = gq
                    .question()
                    .answers()
                    .map(|(key, text)| (key.as_str().to_string(), Value::from(text)))
                    .collect();
                json!({
                    "level": gq.level(),
                    "text": gq.question().text(),
                    "answers": answers,
                    "help": gq.help_hash(),
                })
            });

        json!({
            "game": game.snapshot(),
            "question": question,
        })
    }

    fn render(value: &Value) -> String {
        serde_json::to_string_pretty(value).unwrap_or_else(|_| "{}".to_string())
    }
}

impl OutputFormatter for JsonFormatter {
    fn format_game(&self, game: &Game) -> String {
        Self::render(&Self::game_value(game))
    }

    fn format_result(&self, result: &GameResult) -> String {
        let mut value = Self::game_value(&result.game);
        if let Value::Object(map) = &mut value {
            map.insert("settlement".to_string(), json!(result.settlement));
        }
        Self::render(&value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::output::test_support::game;
    use chrono::Utc;
    use ladder_domain::GameRules;

    #[test]
    fn test_open_question_hides_correct_key() {
        let g = game(Utc::now());
        let value: Value = serde_json::from_str(&JsonFormatter.format_game(&g)).unwrap();

        assert_eq!(value["game"]["status"], "in_progress");
        assert_eq!(value["question"]["answers"]["a"], "right");
        assert!(value["question"].get("correct").is_none());
    }

    #[test]
    fn test_result_carries_settlement() {
        let rules = GameRules::default();
        let mut g = game(Utc::now());
        let settlement = g.answer_current_question("d", &rules, Utc::now()).unwrap();

        let output = JsonFormatter.format_result(&GameResult::new(g, settlement));
        let value: Value = serde_json::from_str(&output).unwrap();

        assert!(value["question"].is_null());
        assert_eq!(value["settlement"]["reason"], "failed");
        assert_eq!(value["settlement"]["amount"], 0);
    }
}
