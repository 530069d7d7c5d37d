//! Output formatter trait

use ladder_application::GameResult;
use ladder_domain::Game;

/// Trait for rendering games
pub trait OutputFormatter {
    /// Render the game as it stands, including the open question if any
    fn format_game(&self, game: &Game) -> String;

    /// Render the outcome of one operation
    fn format_result(&self, result: &GameResult) -> String;

    /// Render the outcome of an answer
    fn format_answer(&self, result: &GameResult) -> String {
        self.format_result(result)
    }
}
