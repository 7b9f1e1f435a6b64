//! The game state machine
//!
//! A [`Game`] owns the secret answer, the guesses made so far and the game
//! status. All mutation goes through its operations, which enforce the guess
//! limit, the word list, and optionally the hard mode rules.
//!
//! ```text
//!            guess == answer
//!   PLAYING ─────────────────────▶ WON
//!      │
//!      │ 6th wrong guess, or answer revealed
//!      ▼
//!    LOST
//! ```
//!
//! `reset` returns any game to PLAYING with a fresh answer.

mod error;
pub mod hard_mode;
pub mod hint;

pub use error::{ErrorKind, GameError};
pub use hard_mode::{HardModeRule, HardModeViolation};
pub use hint::generate_hint;

use crate::core::{GuessRecord, MAX_GUESSES, Word, compute_clues};
use crate::wordlists::WordList;
use rand::SeedableRng;
use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

/// Where a game stands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum GameStatus {
    Playing,
    Won,
    Lost,
}

impl GameStatus {
    /// Wire name of the status ("PLAYING", "WON" or "LOST")
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Playing => "PLAYING",
            Self::Won => "WON",
            Self::Lost => "LOST",
        }
    }
}

impl fmt::Display for GameStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// When `reset` is allowed
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum ResetPolicy {
    /// Reset at any time, abandoning a game in progress
    #[default]
    Anytime,
    /// Reset only once the game is won or lost
    AfterGameOver,
}

/// Rule options shared by every game of a process
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GameConfig {
    pub hard_mode_rule: HardModeRule,
    pub reset_policy: ResetPolicy,
}

/// Serializable view of a game that does not expose the answer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSnapshot {
    pub state: GameStatus,
    pub guesses: Vec<GuessRecord>,
    pub remaining_guesses: usize,
}

/// One game of Wordle
pub struct Game {
    words: Arc<WordList>,
    config: GameConfig,
    rng: StdRng,
    answer: Word,
    guesses: Vec<GuessRecord>,
    status: GameStatus,
}

impl Game {
    /// Start a game with a random answer, seeding from the OS
    #[must_use]
    pub fn new(words: Arc<WordList>, config: GameConfig) -> Self {
        Self::from_rng(words, config, StdRng::from_os_rng())
    }

    /// Start a game with a random answer drawn from `rng`
    ///
    /// The same generator later picks hints and reset answers, so a seeded
    /// generator makes the whole game reproducible.
    #[must_use]
    pub fn from_rng(words: Arc<WordList>, config: GameConfig, mut rng: StdRng) -> Self {
        let answer = words.random_word(&mut rng);
        Self {
            words,
            config,
            rng,
            answer,
            guesses: Vec::new(),
            status: GameStatus::Playing,
        }
    }

    /// Start a game with a fixed answer
    ///
    /// # Errors
    /// Returns `GameError::InvalidWord` if `answer` is not in the word list.
    pub fn with_answer(
        words: Arc<WordList>,
        config: GameConfig,
        answer: &str,
    ) -> Result<Self, GameError> {
        let answer = words.lookup(answer)?;
        Ok(Self {
            words,
            config,
            rng: StdRng::from_os_rng(),
            answer,
            guesses: Vec::new(),
            status: GameStatus::Playing,
        })
    }

    /// Replace the random source used for hints and resets
    #[must_use]
    pub fn with_rng(mut self, rng: StdRng) -> Self {
        self.rng = rng;
        self
    }

    /// Make a guess
    ///
    /// The word is normalized to uppercase. On success the new record is
    /// appended and returned, and the status moves to WON or LOST if this
    /// guess ended the game.
    ///
    /// # Errors
    /// - `GuessLimitExceeded` once all guesses are spent without a win
    /// - `InvalidState` if the game is otherwise over
    /// - `InvalidWord` for a malformed word or one outside the word list
    pub fn make_guess(&mut self, raw: &str) -> Result<&GuessRecord, GameError> {
        self.ensure_accepting_guesses()?;
        let word = self.words.lookup(raw)?;
        Ok(self.record(word))
    }

    /// Make a guess that must respect every clue revealed so far
    ///
    /// Validation matches [`Game::make_guess`], followed by the hard mode
    /// check under the configured [`HardModeRule`].
    ///
    /// # Errors
    /// Everything [`Game::make_guess`] returns, plus `HardModeViolation`
    /// naming the first constraint the word breaks.
    pub fn make_hard_guess(&mut self, raw: &str) -> Result<&GuessRecord, GameError> {
        self.ensure_accepting_guesses()?;
        let word = self.words.lookup(raw)?;
        hard_mode::check(self.config.hard_mode_rule, &self.guesses, &word)?;
        Ok(self.record(word))
    }

    /// A letter of the answer that no guess has used yet
    ///
    /// `Ok(None)` means every letter of the answer has already been guessed.
    ///
    /// # Errors
    /// Returns `InvalidState` unless the game is in progress.
    pub fn hint(&mut self) -> Result<Option<char>, GameError> {
        if self.status != GameStatus::Playing {
            return Err(GameError::invalid_state("get a hint", self.status));
        }
        Ok(generate_hint(&self.answer, &self.guesses, &mut self.rng))
    }

    /// Reveal the answer
    ///
    /// Revealing forfeits: a game still in progress becomes LOST.
    pub fn reveal_answer(&mut self) -> &Word {
        if self.status == GameStatus::Playing {
            self.status = GameStatus::Lost;
        }
        &self.answer
    }

    /// Start over with a fresh random answer
    ///
    /// # Errors
    /// Returns `InvalidState` for a game in progress when the policy is
    /// [`ResetPolicy::AfterGameOver`].
    pub fn reset(&mut self) -> Result<(), GameError> {
        if self.config.reset_policy == ResetPolicy::AfterGameOver && !self.is_over() {
            return Err(GameError::invalid_state("reset", self.status));
        }

        self.answer = self.words.random_word(&mut self.rng);
        self.guesses.clear();
        self.status = GameStatus::Playing;
        Ok(())
    }

    /// Guesses left before the game is lost
    #[must_use]
    pub fn remaining_guesses(&self) -> usize {
        MAX_GUESSES.saturating_sub(self.guesses.len())
    }

    #[must_use]
    pub const fn status(&self) -> GameStatus {
        self.status
    }

    /// Accepted guesses in turn order
    #[must_use]
    pub fn guesses(&self) -> &[GuessRecord] {
        &self.guesses
    }

    /// True once the game is won or lost
    #[must_use]
    pub fn is_over(&self) -> bool {
        self.status != GameStatus::Playing
    }

    #[must_use]
    pub const fn config(&self) -> GameConfig {
        self.config
    }

    #[must_use]
    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            state: self.status,
            guesses: self.guesses.clone(),
            remaining_guesses: self.remaining_guesses(),
        }
    }

    fn ensure_accepting_guesses(&self) -> Result<(), GameError> {
        let exhausted = self.guesses.len() >= MAX_GUESSES;
        match self.status {
            GameStatus::Playing if !exhausted => Ok(()),
            GameStatus::Playing | GameStatus::Lost if exhausted => {
                Err(GameError::GuessLimitExceeded)
            }
            status => Err(GameError::invalid_state("guess", status)),
        }
    }

    fn record(&mut self, word: Word) -> &GuessRecord {
        let clues = compute_clues(&self.answer, &word);
        let solved = word == self.answer;
        self.guesses.push(GuessRecord::new(word, clues));

        if solved {
            self.status = GameStatus::Won;
        } else if self.guesses.len() == MAX_GUESSES {
            self.status = GameStatus::Lost;
        }

        &self.guesses[self.guesses.len() - 1]
    }
}

impl fmt::Debug for Game {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // The answer stays out of logs
        f.debug_struct("Game")
            .field("status", &self.status)
            .field("guesses", &self.guesses)
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Clue, WORD_LENGTH};
    use crate::wordlists::loader::words_from_slice;

    const VOCABULARY: &[&str] = &[
        "bells", "shell", "blank", "crane", "slate", "sells", "alloy", "llama", "stout", "about",
        "plant", "smile", "eager",
    ];

    fn words() -> Arc<WordList> {
        Arc::new(WordList::from_words(words_from_slice(VOCABULARY)).unwrap())
    }

    fn game(answer: &str) -> Game {
        Game::with_answer(words(), GameConfig::default(), answer)
            .unwrap()
            .with_rng(StdRng::seed_from_u64(11))
    }

    fn game_with(answer: &str, config: GameConfig) -> Game {
        Game::with_answer(words(), config, answer)
            .unwrap()
            .with_rng(StdRng::seed_from_u64(11))
    }

    fn kind<T: fmt::Debug>(result: Result<T, GameError>) -> ErrorKind {
        result.unwrap_err().kind()
    }

    #[test]
    fn new_game_is_playing_and_empty() {
        let game = Game::from_rng(words(), GameConfig::default(), StdRng::seed_from_u64(5));
        assert_eq!(game.status(), GameStatus::Playing);
        assert!(game.guesses().is_empty());
        assert_eq!(game.remaining_guesses(), MAX_GUESSES);
    }

    #[test]
    fn answer_must_be_in_word_list() {
        let result = Game::with_answer(words(), GameConfig::default(), "zzzzz");
        assert_eq!(kind(result), ErrorKind::InvalidWord);
    }

    #[test]
    fn guess_records_clues_and_normalizes_case() {
        let mut game = game("bells");
        let record = game.make_guess("shell").unwrap();

        assert_eq!(record.word().text(), "SHELL");
        assert_eq!(
            record.clues(),
            &[
                Clue::Yellow,
                Clue::Grey,
                Clue::Yellow,
                Clue::Green,
                Clue::Yellow
            ]
        );
        assert_eq!(game.status(), GameStatus::Playing);
        assert_eq!(game.remaining_guesses(), MAX_GUESSES - 1);
    }

    #[test]
    fn correct_guess_wins() {
        let mut game = game("bells");
        game.make_guess("shell").unwrap();
        let record = game.make_guess("Bells").unwrap();

        assert_eq!(record.clues(), &[Clue::Green; WORD_LENGTH]);
        assert_eq!(game.status(), GameStatus::Won);
        assert_eq!(game.guesses().len(), 2);
    }

    #[test]
    fn invalid_words_are_rejected_without_using_a_guess() {
        let mut game = game("bells");

        assert_eq!(kind(game.make_guess("bell")), ErrorKind::InvalidWord);
        assert_eq!(kind(game.make_guess("b3lls")), ErrorKind::InvalidWord);
        assert_eq!(kind(game.make_guess("zzzzz")), ErrorKind::InvalidWord);
        assert!(game.guesses().is_empty());
        assert_eq!(game.status(), GameStatus::Playing);
    }

    #[test]
    fn six_wrong_guesses_lose_and_seventh_exceeds_limit() {
        let mut game = game("bells");
        for word in ["crane", "slate", "alloy", "llama", "stout", "about"] {
            assert_eq!(game.status(), GameStatus::Playing);
            game.make_guess(word).unwrap();
        }

        assert_eq!(game.status(), GameStatus::Lost);
        assert_eq!(game.remaining_guesses(), 0);
        assert_eq!(kind(game.make_guess("plant")), ErrorKind::GuessLimitExceeded);
        assert_eq!(game.status(), GameStatus::Lost);
        assert_eq!(game.guesses().len(), MAX_GUESSES);
    }

    #[test]
    fn winning_on_last_guess_is_won_not_lost() {
        let mut game = game("bells");
        for word in ["crane", "slate", "alloy", "llama", "stout"] {
            game.make_guess(word).unwrap();
        }
        game.make_guess("bells").unwrap();

        assert_eq!(game.status(), GameStatus::Won);
        assert_eq!(kind(game.make_guess("plant")), ErrorKind::InvalidState);
    }

    #[test]
    fn guess_after_win_is_invalid_state() {
        let mut game = game("bells");
        game.make_guess("bells").unwrap();

        assert_eq!(kind(game.make_guess("shell")), ErrorKind::InvalidState);
        assert_eq!(kind(game.make_hard_guess("shell")), ErrorKind::InvalidState);
    }

    #[test]
    fn guess_after_reveal_is_invalid_state() {
        let mut game = game("bells");
        game.make_guess("shell").unwrap();

        assert_eq!(game.reveal_answer().text(), "BELLS");
        assert_eq!(game.status(), GameStatus::Lost);
        assert_eq!(kind(game.make_guess("bells")), ErrorKind::InvalidState);
    }

    #[test]
    fn exhausted_history_while_playing_exceeds_limit() {
        let mut game = game("bells");
        let filler = game.words.lookup("crane").unwrap();
        let clues = compute_clues(&game.answer, &filler);
        game.guesses = vec![GuessRecord::new(filler, clues); MAX_GUESSES];

        assert_eq!(game.status(), GameStatus::Playing);
        assert_eq!(kind(game.make_guess("bells")), ErrorKind::GuessLimitExceeded);
    }

    #[test]
    fn reveal_after_win_keeps_won() {
        let mut game = game("bells");
        game.make_guess("bells").unwrap();

        assert_eq!(game.reveal_answer().text(), "BELLS");
        assert_eq!(game.status(), GameStatus::Won);
    }

    #[test]
    fn hard_guess_enforces_positional_rule() {
        let mut game = game("bells");
        game.make_hard_guess("shell").unwrap();

        // SLATE keeps S and E but moves the green L
        let err = game.make_hard_guess("slate").unwrap_err();
        assert_eq!(
            err,
            GameError::HardModeViolation(HardModeViolation::MisplacedGreen {
                letter: 'L',
                position: 3
            })
        );
        assert_eq!(game.guesses().len(), 1);

        game.make_hard_guess("sells").unwrap();
        game.make_hard_guess("bells").unwrap();
        assert_eq!(game.status(), GameStatus::Won);
    }

    #[test]
    fn hard_guess_presence_rule_allows_moved_greens() {
        let config = GameConfig {
            hard_mode_rule: HardModeRule::Presence,
            ..GameConfig::default()
        };
        let mut game = game_with("crane", config);
        // SLATE vs CRANE: A and E green
        game.make_hard_guess("slate").unwrap();

        // LLAMA has A but no E
        assert_eq!(kind(game.make_hard_guess("llama")), ErrorKind::HardModeViolation);
        // EAGER moves both A and E, which only the presence rule allows
        game.make_hard_guess("eager").unwrap();
        game.make_hard_guess("crane").unwrap();
        assert_eq!(game.status(), GameStatus::Won);
    }

    #[test]
    fn hard_guess_checks_word_before_constraints() {
        let mut game = game("bells");
        game.make_hard_guess("shell").unwrap();
        assert_eq!(kind(game.make_hard_guess("zzzzz")), ErrorKind::InvalidWord);
    }

    #[test]
    fn normal_guess_ignores_hard_mode() {
        let mut game = game("bells");
        game.make_hard_guess("shell").unwrap();
        game.make_guess("crane").unwrap();
        assert_eq!(game.guesses().len(), 2);
    }

    #[test]
    fn hint_avoids_guessed_letters() {
        let mut game = game("bells");
        game.make_guess("shell").unwrap();
        assert_eq!(game.hint().unwrap(), Some('B'));

        game.make_guess("blank").unwrap();
        assert_eq!(game.hint().unwrap(), None);
    }

    #[test]
    fn hint_requires_playing() {
        let mut game = game("bells");
        game.make_guess("bells").unwrap();
        assert_eq!(kind(game.hint()), ErrorKind::InvalidState);
    }

    #[test]
    fn reset_starts_fresh_from_any_state() {
        let mut game = game("bells");
        game.make_guess("shell").unwrap();
        game.reset().unwrap();
        assert_eq!(game.status(), GameStatus::Playing);
        assert!(game.guesses().is_empty());

        game.reveal_answer();
        game.reset().unwrap();
        assert_eq!(game.status(), GameStatus::Playing);
        assert!(game.guesses().is_empty());
        assert!(game.words.contains(&game.answer));
    }

    #[test]
    fn reset_after_game_over_policy() {
        let config = GameConfig {
            reset_policy: ResetPolicy::AfterGameOver,
            ..GameConfig::default()
        };
        let mut game = game_with("bells", config);
        game.make_guess("shell").unwrap();

        assert_eq!(kind(game.reset()), ErrorKind::InvalidState);
        assert_eq!(game.guesses().len(), 1);

        game.make_guess("bells").unwrap();
        game.reset().unwrap();
        assert_eq!(game.status(), GameStatus::Playing);
        assert!(game.guesses().is_empty());
    }

    #[test]
    fn snapshot_hides_answer() {
        let mut game = game("bells");
        game.make_guess("shell").unwrap();

        let json = serde_json::to_value(game.snapshot()).unwrap();
        assert_eq!(json["state"], "PLAYING");
        assert_eq!(json["remaining_guesses"], 5);
        assert_eq!(json["guesses"][0]["word"], "SHELL");
        assert!(!json.to_string().contains("BELLS"));
        assert!(!format!("{game:?}").contains("BELLS"));
    }
}
