//! Game aggregate and its per-level questions.

use super::rules::GameRules;
use super::status::{Finish, FinishReason, GameStatus};
use super::value_objects::{GameSnapshot, Settlement};
use crate::core::error::GameError;
use crate::core::ids::{GameId, PlayerId};
use crate::core::question::{AnswerKey, Question};
use crate::help::{self, HelpHash, HelpType};
use crate::ladder::Prize;
use chrono::{DateTime, Utc};
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Binding of one question to one game at one level (Entity)
///
/// Owned exclusively by its game. Carries the aid payloads computed while
/// this question was current.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameQuestion {
    level: usize,
    question: Question,
    help_hash: HelpHash,
}

impl GameQuestion {
    pub fn new(level: usize, question: Question) -> Self {
        Self {
            level,
            question,
            help_hash: HelpHash::default(),
        }
    }

    pub fn level(&self) -> usize {
        self.level
    }

    pub fn question(&self) -> &Question {
        &self.question
    }

    pub fn correct_answer_key(&self) -> AnswerKey {
        self.question.correct_key()
    }

    pub fn help_hash(&self) -> &HelpHash {
        &self.help_hash
    }

    pub fn answer_correct(&self, letter: &str) -> bool {
        self.question.is_correct(letter)
    }

    fn apply_help<R: Rng + ?Sized>(&mut self, help_type: HelpType, rng: &mut R) {
        match help_type {
            HelpType::AudienceHelp => {
                self.help_hash.audience_help =
                    Some(help::audience_distribution(&self.question, rng));
            }
            HelpType::FiftyFifty => {
                self.help_hash.fifty_fifty = Some(help::fifty_fifty(&self.question, rng));
            }
        }
    }
}

/// A single game attempt (Aggregate Root)
///
/// Created in progress at level 0 with no prize. Mutated only through
/// [`answer_current_question`](Self::answer_current_question),
/// [`use_help`](Self::use_help), [`take_money`](Self::take_money) and
/// [`time_out`](Self::time_out). Becomes terminal exactly once.
///
/// Every successful transition bumps [`revision`](Self::revision), which
/// repositories use to reject writes based on an outdated copy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Game {
    id: GameId,
    player_id: PlayerId,
    current_level: usize,
    prize: Prize,
    audience_help_used: bool,
    fifty_fifty_used: bool,
    created_at: DateTime<Utc>,
    finish: Option<Finish>,
    game_questions: Vec<GameQuestion>,
    #[serde(default)]
    revision: u64,
}

impl Game {
    /// Create a new in-progress game.
    ///
    /// `game_questions` must hold exactly one question per level `0..N-1`,
    /// in level order, with no question repeated.
    pub fn new(
        id: GameId,
        player_id: PlayerId,
        game_questions: Vec<GameQuestion>,
        created_at: DateTime<Utc>,
    ) -> Result<Self, GameError> {
        if game_questions.is_empty() {
            return Err(GameError::InvalidGameQuestions(
                "a game needs at least one question".to_string(),
            ));
        }
        if let Some(gq) = game_questions
            .iter()
            .enumerate()
            .find(|(i, gq)| gq.level != *i)
            .map(|(_, gq)| gq)
        {
            return Err(GameError::InvalidGameQuestions(format!(
                "levels must be contiguous from 0, found level {} out of place",
                gq.level
            )));
        }
        let mut seen = HashSet::new();
        if let Some(dup) = game_questions
            .iter()
            .find(|gq| !seen.insert(gq.question.id()))
        {
            return Err(GameError::InvalidGameQuestions(format!(
                "question {} appears more than once",
                dup.question.id()
            )));
        }

        Ok(Self {
            id,
            player_id,
            current_level: 0,
            prize: 0,
            audience_help_used: false,
            fifty_fifty_used: false,
            created_at,
            finish: None,
            game_questions,
            revision: 0,
        })
    }

    // ==================== Accessors ====================

    pub fn id(&self) -> GameId {
        self.id
    }

    pub fn player_id(&self) -> &PlayerId {
        &self.player_id
    }

    pub fn current_level(&self) -> usize {
        self.current_level
    }

    pub fn prize(&self) -> Prize {
        self.prize
    }

    pub fn audience_help_used(&self) -> bool {
        self.audience_help_used
    }

    pub fn fifty_fifty_used(&self) -> bool {
        self.fifty_fifty_used
    }

    pub fn help_used(&self, help_type: HelpType) -> bool {
        match help_type {
            HelpType::AudienceHelp => self.audience_help_used,
            HelpType::FiftyFifty => self.fifty_fifty_used,
        }
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn finished_at(&self) -> Option<DateTime<Utc>> {
        self.finish.map(|f| f.at)
    }

    pub fn finish(&self) -> Option<&Finish> {
        self.finish.as_ref()
    }

    /// Number of transitions applied since creation.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Whether `self` may replace `stored` in a repository.
    ///
    /// Accepted when it is the same state, or exactly one transition ahead.
    pub fn supersedes(&self, stored: &Game) -> bool {
        self == stored || self.revision == stored.revision + 1
    }

    pub fn game_questions(&self) -> &[GameQuestion] {
        &self.game_questions
    }

    /// Number of levels (N) in this game.
    pub fn level_count(&self) -> usize {
        self.game_questions.len()
    }

    pub fn is_owned_by(&self, player_id: &PlayerId) -> bool {
        &self.player_id == player_id
    }

    pub fn status(&self) -> GameStatus {
        GameStatus::from_finish(self.finish.as_ref())
    }

    pub fn is_finished(&self) -> bool {
        self.finish.is_some()
    }

    /// Question at `current_level`; `None` once every level is answered.
    pub fn current_game_question(&self) -> Option<&GameQuestion> {
        self.game_questions.get(self.current_level)
    }

    /// Question at `current_level - 1`.
    pub fn previous_game_question(&self) -> Result<&GameQuestion, GameError> {
        let level = self.previous_level()?;
        self.game_questions
            .get(level)
            .ok_or(GameError::NoPreviousLevel)
    }

    /// Index of the last answered level.
    pub fn previous_level(&self) -> Result<usize, GameError> {
        self.current_level
            .checked_sub(1)
            .ok_or(GameError::NoPreviousLevel)
    }

    /// Whether the time limit has run out at `now` for an in-progress game.
    pub fn is_time_over(&self, rules: &GameRules, now: DateTime<Utc>) -> bool {
        !self.is_finished() && rules.is_expired(self.created_at, now)
    }

    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            id: self.id,
            player_id: self.player_id.clone(),
            status: self.status(),
            current_level: self.current_level,
            level_count: self.level_count(),
            prize: self.prize,
            audience_help_used: self.audience_help_used,
            fifty_fifty_used: self.fifty_fifty_used,
            created_at: self.created_at,
            finished_at: self.finished_at(),
        }
    }

    // ==================== Transitions ====================

    /// Grade `letter` against the current question.
    ///
    /// An expired game times out instead, ignoring the letter. Returns the
    /// settlement when the answer ends the game.
    pub fn answer_current_question(
        &mut self,
        letter: &str,
        rules: &GameRules,
        now: DateTime<Utc>,
    ) -> Result<Option<Settlement>, GameError> {
        self.ensure_in_progress()?;

        if rules.is_expired(self.created_at, now) {
            return Ok(Some(self.time_out_unchecked(rules, now)));
        }

        let correct = self
            .current_game_question()
            .is_some_and(|gq| gq.answer_correct(letter));

        if !correct {
            let prize = rules.ladder.fireproof_prize_for(self.current_level);
            return Ok(Some(self.finish_game(FinishReason::Failed, prize, now)));
        }

        self.current_level += 1;
        if self.current_level == self.level_count() {
            let prize = rules.ladder.prize_for(self.current_level);
            return Ok(Some(self.finish_game(FinishReason::Won, prize, now)));
        }

        self.revision += 1;
        Ok(None)
    }

    /// Apply an aid to the current question.
    pub fn use_help<R: Rng + ?Sized>(
        &mut self,
        help_type: HelpType,
        rng: &mut R,
    ) -> Result<(), GameError> {
        self.ensure_in_progress()?;
        if self.help_used(help_type) {
            return Err(GameError::HelpAlreadyUsed(help_type));
        }

        let level = self.current_level;
        let Some(gq) = self.game_questions.get_mut(level) else {
            return Err(GameError::AlreadyFinished);
        };
        gq.apply_help(help_type, rng);

        match help_type {
            HelpType::AudienceHelp => self.audience_help_used = true,
            HelpType::FiftyFifty => self.fifty_fifty_used = true,
        }
        self.revision += 1;
        Ok(())
    }

    /// Cash out with the prize for the highest completed level.
    pub fn take_money(
        &mut self,
        rules: &GameRules,
        now: DateTime<Utc>,
    ) -> Result<Settlement, GameError> {
        self.ensure_in_progress()?;
        if self.current_level == 0 {
            return Err(GameError::NothingToCashOut);
        }

        let prize = rules.ladder.prize_for(self.current_level);
        Ok(self.finish_game(FinishReason::CashedOut, prize, now))
    }

    /// Time the game out if its limit has passed.
    ///
    /// Idempotent: a finished or still-running game is left untouched and
    /// `None` is returned.
    pub fn time_out(&mut self, rules: &GameRules, now: DateTime<Utc>) -> Option<Settlement> {
        if !self.is_time_over(rules, now) {
            return None;
        }
        Some(self.time_out_unchecked(rules, now))
    }

    fn time_out_unchecked(&mut self, rules: &GameRules, now: DateTime<Utc>) -> Settlement {
        let prize = rules.ladder.fireproof_prize_for(self.current_level);
        self.finish_game(FinishReason::TimedOut, prize, now)
    }

    fn ensure_in_progress(&self) -> Result<(), GameError> {
        if self.is_finished() {
            return Err(GameError::AlreadyFinished);
        }
        Ok(())
    }

    fn finish_game(&mut self, reason: FinishReason, prize: Prize, now: DateTime<Utc>) -> Settlement {
        self.prize = prize;
        self.finish = Some(Finish { at: now, reason });
        self.revision += 1;

        Settlement {
            game_id: self.id,
            player_id: self.player_id.clone(),
            reason,
            amount: prize,
        }
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::core::ids::QuestionId;
    use crate::core::question::tests::sample_question;
    use crate::ladder::PrizeLadder;
    use chrono::Duration;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    /// Build a game whose correct answers cycle through a, b, c, d.
    pub(crate) fn game_with_questions(levels: usize, created_at: DateTime<Utc>) -> Game {
        let questions = (0..levels)
            .map(|level| {
                let correct = AnswerKey::ALL[level % 4];
                GameQuestion::new(level, sample_question(level as u64 + 1, level, correct))
            })
            .collect();
        Game::new(GameId::new(1), PlayerId::new("alice"), questions, created_at).unwrap()
    }

    fn answer_correctly(game: &mut Game, times: usize, rules: &GameRules, now: DateTime<Utc>) {
        for _ in 0..times {
            let key = game.current_game_question().unwrap().correct_answer_key();
            game.answer_current_question(key.as_str(), rules, now).unwrap();
        }
    }

    fn wrong_letter(game: &Game) -> &'static str {
        let correct = game.current_game_question().unwrap().correct_answer_key();
        AnswerKey::ALL
            .into_iter()
            .find(|k| *k != correct)
            .unwrap()
            .as_str()
    }

    // ==================== Factory ====================

    #[test]
    fn test_new_game_is_in_progress() {
        let now = Utc::now();
        let game = game_with_questions(15, now);

        assert_eq!(game.status(), GameStatus::InProgress);
        assert_eq!(game.current_level(), 0);
        assert_eq!(game.prize(), 0);
        assert!(game.finished_at().is_none());
        assert!(!game.audience_help_used());
        assert!(!game.fifty_fifty_used());
        let levels: Vec<_> = game.game_questions().iter().map(|gq| gq.level()).collect();
        assert_eq!(levels, (0..15).collect::<Vec<_>>());
    }

    #[test]
    fn test_new_game_rejects_gaps() {
        let questions = vec![
            GameQuestion::new(0, sample_question(1, 0, AnswerKey::A)),
            GameQuestion::new(2, sample_question(2, 2, AnswerKey::A)),
        ];
        let err = Game::new(GameId::new(1), "p".into(), questions, Utc::now()).unwrap_err();
        assert!(matches!(err, GameError::InvalidGameQuestions(_)));
    }

    #[test]
    fn test_new_game_rejects_duplicate_questions() {
        let q = sample_question(7, 0, AnswerKey::A);
        let questions = vec![GameQuestion::new(0, q.clone()), GameQuestion::new(1, q)];
        let err = Game::new(GameId::new(1), "p".into(), questions, Utc::now()).unwrap_err();
        assert!(err.to_string().contains("question 7"));
    }

    #[test]
    fn test_new_game_rejects_empty() {
        let err = Game::new(GameId::new(1), "p".into(), vec![], Utc::now()).unwrap_err();
        assert!(matches!(err, GameError::InvalidGameQuestions(_)));
    }

    // ==================== Answering ====================

    #[test]
    fn test_answer_correct_continues_game() {
        let now = Utc::now();
        let rules = GameRules::default();
        let mut game = game_with_questions(15, now);
        let q = game.current_game_question().unwrap().clone();

        let settlement = game
            .answer_current_question(q.correct_answer_key().as_str(), &rules, now)
            .unwrap();

        assert!(settlement.is_none());
        assert_eq!(game.current_level(), 1);
        assert_eq!(game.previous_game_question().unwrap(), &q);
        assert_ne!(game.current_game_question().unwrap(), &q);
        assert_eq!(game.status(), GameStatus::InProgress);
        assert_eq!(game.prize(), 0);
        assert!(!game.is_finished());
    }

    #[test]
    fn test_level_tracks_correct_answers() {
        let now = Utc::now();
        let rules = GameRules::default();
        let mut game = game_with_questions(15, now);

        let mut last_prize = 0;
        for n in 1..15 {
            answer_correctly(&mut game, 1, &rules, now);
            assert_eq!(game.current_level(), n);
            let prize = rules.ladder.prize_for(game.current_level());
            assert!(prize >= last_prize);
            last_prize = prize;
        }
    }

    #[test]
    fn test_answer_all_correct_wins() {
        let now = Utc::now();
        let rules = GameRules::default();
        let mut game = game_with_questions(15, now);

        answer_correctly(&mut game, 14, &rules, now);
        let key = game.current_game_question().unwrap().correct_answer_key();
        let settlement = game
            .answer_current_question(key.as_str(), &rules, now)
            .unwrap()
            .unwrap();

        assert_eq!(game.status(), GameStatus::Won);
        assert_eq!(game.current_level(), 15);
        assert_eq!(game.prize(), 1_000_000);
        assert_eq!(game.finished_at(), Some(now));
        assert_eq!(settlement.reason, FinishReason::Won);
        assert_eq!(settlement.amount, 1_000_000);
        assert!(game.current_game_question().is_none());
    }

    #[test]
    fn test_wrong_answer_at_level_zero_fails_with_nothing() {
        let now = Utc::now();
        let rules = GameRules::default();
        let mut game = game_with_questions(15, now);

        let settlement = game
            .answer_current_question("x", &rules, now)
            .unwrap()
            .unwrap();

        assert_eq!(game.status(), GameStatus::Failed);
        assert_eq!(game.current_level(), 0);
        assert_eq!(game.prize(), 0);
        assert_eq!(game.finished_at(), Some(now));
        assert!(!settlement.needs_credit());
    }

    #[test]
    fn test_wrong_answer_keeps_fireproof_prize() {
        let now = Utc::now();
        let rules = GameRules::default();
        let mut game = game_with_questions(15, now);

        answer_correctly(&mut game, 7, &rules, now);
        let letter = wrong_letter(&game);
        let settlement = game
            .answer_current_question(letter, &rules, now)
            .unwrap()
            .unwrap();

        assert_eq!(game.status(), GameStatus::Failed);
        assert_eq!(game.current_level(), 7);
        assert_eq!(game.prize(), 1_000);
        assert_eq!(settlement.amount, 1_000);
    }

    #[test]
    fn test_answer_after_time_limit_times_out() {
        let created = Utc::now();
        let rules = GameRules::default();
        let mut game = game_with_questions(15, created);
        let late = created + rules.time_limit * 2;

        let key = game.current_game_question().unwrap().correct_answer_key();
        let settlement = game
            .answer_current_question(key.as_str(), &rules, late)
            .unwrap()
            .unwrap();

        assert_eq!(game.status(), GameStatus::TimedOut);
        assert_eq!(game.current_level(), 0);
        assert_eq!(game.prize(), 0);
        assert_eq!(game.finished_at(), Some(late));
        assert_eq!(settlement.reason, FinishReason::TimedOut);
    }

    #[test]
    fn test_timeout_keeps_fireproof_prize() {
        let created = Utc::now();
        let rules = GameRules::default();
        let mut game = game_with_questions(15, created);
        answer_correctly(&mut game, 11, &rules, created);

        let late = created + rules.time_limit + Duration::seconds(1);
        game.answer_current_question("a", &rules, late).unwrap();

        assert_eq!(game.status(), GameStatus::TimedOut);
        assert_eq!(game.current_level(), 11);
        assert_eq!(game.prize(), 32_000);
    }

    #[test]
    fn test_answer_on_finished_game_fails() {
        let now = Utc::now();
        let rules = GameRules::default();
        let mut game = game_with_questions(15, now);
        game.answer_current_question("x", &rules, now).unwrap();

        let err = game.answer_current_question("a", &rules, now).unwrap_err();
        assert_eq!(err, GameError::AlreadyFinished);
    }

    // ==================== Cash out ====================

    #[test]
    fn test_take_money_after_five_levels() {
        let now = Utc::now();
        let rules = GameRules::default();
        let mut game = game_with_questions(15, now);
        answer_correctly(&mut game, 5, &rules, now);

        let settlement = game.take_money(&rules, now).unwrap();

        assert_eq!(game.status(), GameStatus::CashedOut);
        assert_eq!(game.current_level(), 5);
        assert_eq!(game.prize(), 1_000);
        assert_eq!(settlement.amount, 1_000);
        assert!(game.is_finished());

        let err = game.take_money(&rules, now).unwrap_err();
        assert_eq!(err, GameError::AlreadyFinished);
        assert_eq!(game.prize(), 1_000);
    }

    #[test]
    fn test_take_money_at_level_zero_rejected() {
        let now = Utc::now();
        let rules = GameRules::default();
        let mut game = game_with_questions(15, now);

        let err = game.take_money(&rules, now).unwrap_err();
        assert_eq!(err, GameError::NothingToCashOut);
        assert_eq!(game.status(), GameStatus::InProgress);
    }

    // ==================== Help ====================

    #[test]
    fn test_use_fifty_fifty() {
        let now = Utc::now();
        let mut game = game_with_questions(15, now);
        let mut rng = StdRng::seed_from_u64(5);

        game.use_help(HelpType::FiftyFifty, &mut rng).unwrap();

        assert!(game.fifty_fifty_used());
        assert!(!game.audience_help_used());
        let gq = game.current_game_question().unwrap();
        let ff = gq.help_hash().fifty_fifty.unwrap();
        assert_eq!(ff.len(), 2);
        assert!(ff.contains(gq.correct_answer_key()));
    }

    #[test]
    fn test_use_help_twice_fails_without_mutation() {
        let now = Utc::now();
        let mut game = game_with_questions(15, now);
        let mut rng = StdRng::seed_from_u64(5);

        game.use_help(HelpType::FiftyFifty, &mut rng).unwrap();
        let before = game.current_game_question().unwrap().help_hash().clone();

        let err = game.use_help(HelpType::FiftyFifty, &mut rng).unwrap_err();
        assert_eq!(err, GameError::HelpAlreadyUsed(HelpType::FiftyFifty));
        assert_eq!(game.current_game_question().unwrap().help_hash(), &before);
    }

    #[test]
    fn test_use_audience_help() {
        let now = Utc::now();
        let mut game = game_with_questions(15, now);
        let mut rng = StdRng::seed_from_u64(9);

        game.use_help(HelpType::AudienceHelp, &mut rng).unwrap();

        assert!(game.audience_help_used());
        let votes = game
            .current_game_question()
            .unwrap()
            .help_hash()
            .audience_help
            .clone()
            .unwrap();
        let keys: Vec<_> = votes.keys().collect();
        assert_eq!(keys, AnswerKey::ALL.to_vec());
    }

    #[test]
    fn test_help_applies_to_current_question_only() {
        let now = Utc::now();
        let rules = GameRules::default();
        let mut game = game_with_questions(15, now);
        let mut rng = StdRng::seed_from_u64(1);
        answer_correctly(&mut game, 2, &rules, now);

        game.use_help(HelpType::AudienceHelp, &mut rng).unwrap();

        for gq in game.game_questions() {
            assert_eq!(gq.help_hash().audience_help.is_some(), gq.level() == 2);
        }
    }

    #[test]
    fn test_use_help_on_finished_game_fails() {
        let now = Utc::now();
        let rules = GameRules::default();
        let mut game = game_with_questions(15, now);
        let mut rng = StdRng::seed_from_u64(1);
        game.answer_current_question("x", &rules, now).unwrap();

        let err = game.use_help(HelpType::AudienceHelp, &mut rng).unwrap_err();
        assert_eq!(err, GameError::AlreadyFinished);
        assert!(!game.audience_help_used());
    }

    // ==================== Time out ====================

    #[test]
    fn test_time_out_is_idempotent() {
        let created = Utc::now();
        let rules = GameRules::default();
        let mut game = game_with_questions(15, created);
        let late = created + rules.time_limit * 2;

        let first = game.time_out(&rules, late);
        assert!(first.is_some());
        assert_eq!(game.status(), GameStatus::TimedOut);

        let second = game.time_out(&rules, late + Duration::minutes(1));
        assert!(second.is_none());
        assert_eq!(game.finished_at(), Some(late));
    }

    #[test]
    fn test_time_out_before_limit_is_noop() {
        let created = Utc::now();
        let rules = GameRules::default();
        let mut game = game_with_questions(15, created);

        assert!(game.time_out(&rules, created + Duration::minutes(1)).is_none());
        assert_eq!(game.status(), GameStatus::InProgress);
    }

    #[test]
    fn test_time_out_does_not_touch_cashed_out_game() {
        let created = Utc::now();
        let rules = GameRules::default();
        let mut game = game_with_questions(15, created);
        answer_correctly(&mut game, 3, &rules, created);
        game.take_money(&rules, created).unwrap();

        assert!(game.time_out(&rules, created + rules.time_limit * 3).is_none());
        assert_eq!(game.status(), GameStatus::CashedOut);
        assert_eq!(game.prize(), 300);
    }

    // ==================== Levels ====================

    #[test]
    fn test_previous_level() {
        let now = Utc::now();
        let rules = GameRules::default();
        let mut game = game_with_questions(15, now);
        assert_eq!(game.previous_level(), Err(GameError::NoPreviousLevel));
        assert!(game.previous_game_question().is_err());

        answer_correctly(&mut game, 5, &rules, now);
        assert_eq!(game.previous_level(), Ok(4));
        assert_eq!(game.current_game_question().unwrap().level(), 5);
    }

    #[test]
    fn test_custom_ladder_win() {
        let now = Utc::now();
        let rules = GameRules::new(
            PrizeLadder::new(vec![10, 20, 40], [0]).unwrap(),
            Duration::minutes(5),
        );
        let mut game = game_with_questions(3, now);

        answer_correctly(&mut game, 3, &rules, now);
        assert_eq!(game.status(), GameStatus::Won);
        assert_eq!(game.prize(), 40);
    }

    #[test]
    fn test_snapshot_reflects_game() {
        let now = Utc::now();
        let game = game_with_questions(15, now);
        let snapshot = game.snapshot();
        assert_eq!(snapshot.id, game.id());
        assert_eq!(snapshot.status, GameStatus::InProgress);
        assert_eq!(snapshot.level_count, 15);
        assert!(snapshot.finished_at.is_none());
        assert_eq!(game.game_questions()[0].question().id(), QuestionId::new(1));
    }

    // ==================== Revision ====================

    #[test]
    fn test_each_transition_bumps_revision() {
        let now = Utc::now();
        let rules = GameRules::default();
        let mut game = game_with_questions(15, now);
        let mut rng = StdRng::seed_from_u64(2);
        assert_eq!(game.revision(), 0);

        answer_correctly(&mut game, 2, &rules, now);
        assert_eq!(game.revision(), 2);
        game.use_help(HelpType::FiftyFifty, &mut rng).unwrap();
        assert_eq!(game.revision(), 3);
        game.take_money(&rules, now).unwrap();
        assert_eq!(game.revision(), 4);

        assert!(game.take_money(&rules, now).is_err());
        assert!(game.time_out(&rules, now + rules.time_limit * 2).is_none());
        assert_eq!(game.revision(), 4);
    }

    #[test]
    fn test_outdated_copy_does_not_supersede() {
        let created = Utc::now();
        let rules = GameRules::default();
        let mut stored = game_with_questions(15, created);
        let mut outdated = stored.clone();

        answer_correctly(&mut stored, 1, &rules, created);
        outdated.time_out(&rules, created + rules.time_limit * 2);

        assert!(!outdated.supersedes(&stored));
        assert!(stored.supersedes(&stored.clone()));

        let mut next = stored.clone();
        answer_correctly(&mut next, 1, &rules, created);
        assert!(next.supersedes(&stored));
    }
}
