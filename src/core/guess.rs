//! An accepted guess and its feedback

use super::{Clue, WORD_LENGTH, Word};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A guess the game accepted, paired with the clues it earned
///
/// Records are built only by [`crate::game::Game`] and never change after
/// creation. The clue array has the same fixed length as every word.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GuessRecord {
    word: Word,
    clues: [Clue; WORD_LENGTH],
}

impl GuessRecord {
    pub(crate) const fn new(word: Word, clues: [Clue; WORD_LENGTH]) -> Self {
        Self { word, clues }
    }

    /// The guessed word
    #[inline]
    #[must_use]
    pub const fn word(&self) -> &Word {
        &self.word
    }

    /// One clue per letter, in word order
    #[inline]
    #[must_use]
    pub const fn clues(&self) -> &[Clue; WORD_LENGTH] {
        &self.clues
    }

    /// Letters paired with their clue and position
    pub fn letters(&self) -> impl Iterator<Item = (usize, u8, Clue)> + '_ {
        self.word
            .chars()
            .iter()
            .zip(self.clues)
            .enumerate()
            .map(|(i, (&letter, clue))| (i, letter, clue))
    }

    /// True when every letter is green
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.clues.iter().all(|&clue| clue == Clue::Green)
    }
}

impl fmt::Display for GuessRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:", self.word)?;
        for (_, letter, clue) in self.letters() {
            write!(f, " {}={clue}", letter as char)?;
        }
        Ok(())
    }
}
