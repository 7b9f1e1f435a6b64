//! Core domain types for Wordle
//!
//! This module contains the fundamental value types of the game: words,
//! per-letter clues and accepted guesses. Everything here is pure and
//! deterministic; state and randomness live in [`crate::game`].

mod clue;
mod guess;
mod word;

pub use clue::{Clue, clues_to_emoji, compute_clues};
pub use guess::GuessRecord;
pub use word::{Word, WordError};

/// Number of letters in every word
pub const WORD_LENGTH: usize = 5;

/// Number of guesses a player gets before the game is lost
pub const MAX_GUESSES: usize = 6;
