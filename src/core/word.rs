//! Validated game words
//!
//! A [`Word`] keeps its uppercase text for display and the same letters as a
//! byte array, which is what clue computation compares.

use super::WORD_LENGTH;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// A 5-letter uppercase Wordle word
///
/// `Word::new` only checks the shape of the word. Whether the word belongs to
/// the game's vocabulary is decided by [`crate::wordlists::WordList::lookup`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Word {
    text: String,
    chars: [u8; WORD_LENGTH],
}

/// Why a string is not a usable word
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WordError {
    #[error("word must be exactly 5 letters, got {0}")]
    InvalidLength(usize),
    #[error("word must contain only the letters A-Z")]
    InvalidCharacters,
    #[error("{0} is not in the word list")]
    NotInWordList(String),
}

impl Word {
    /// Normalize and validate raw input
    ///
    /// Surrounding whitespace is trimmed and letters are uppercased.
    ///
    /// # Errors
    /// `InvalidCharacters` for any non-ASCII input, then `InvalidLength`
    /// unless exactly five characters remain, then `InvalidCharacters` if any
    /// of them is not a letter.
    ///
    /// # Examples
    /// ```
    /// use wordle_game::core::Word;
    ///
    /// let word = Word::new("crane").unwrap();
    /// assert_eq!(word.text(), "CRANE");
    ///
    /// assert_eq!(Word::new(" Shell ").unwrap().text(), "SHELL");
    /// assert!(Word::new("bell").is_err());
    /// assert!(Word::new("b3lls").is_err());
    /// ```
    pub fn new(text: impl AsRef<str>) -> Result<Self, WordError> {
        let text = text.as_ref().trim();
        // Unicode case mapping can change the length, e.g. ß becomes SS
        if !text.is_ascii() {
            return Err(WordError::InvalidCharacters);
        }
        let text = text.to_ascii_uppercase();

        if text.len() != WORD_LENGTH {
            return Err(WordError::InvalidLength(text.len()));
        }

        if !text.bytes().all(|b| b.is_ascii_uppercase()) {
            return Err(WordError::InvalidCharacters);
        }

        let chars: [u8; WORD_LENGTH] = text
            .as_bytes()
            .try_into()
            .map_err(|_| WordError::InvalidLength(text.len()))?;

        Ok(Self { text, chars })
    }

    /// Uppercase text
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Letters as ASCII bytes, in order
    #[inline]
    #[must_use]
    pub const fn chars(&self) -> &[u8; WORD_LENGTH] {
        &self.chars
    }

    /// Letter at a 0-based position
    ///
    /// # Panics
    /// If `position` is not below `WORD_LENGTH`.
    #[inline]
    #[must_use]
    pub const fn char_at(&self, position: usize) -> u8 {
        self.chars[position]
    }

    /// Whether `letter` occurs anywhere in the word
    #[inline]
    #[must_use]
    pub fn has_letter(&self, letter: u8) -> bool {
        self.chars.contains(&letter)
    }

    /// Occurrences of each letter; bounds how many clues a repeated letter earns
    pub(crate) fn char_counts(&self) -> FxHashMap<u8, u8> {
        self.chars
            .iter()
            .fold(FxHashMap::default(), |mut counts, &letter| {
                *counts.entry(letter).or_insert(0) += 1;
                counts
            })
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

impl TryFrom<String> for Word {
    type Error = WordError;

    fn try_from(text: String) -> Result<Self, Self::Error> {
        Self::new(text)
    }
}

impl From<Word> for String {
    fn from(word: Word) -> Self {
        word.text
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_any_case_and_uppercases() {
        for raw in ["STOUT", "stout", "StOuT"] {
            let word = Word::new(raw).unwrap();
            assert_eq!(word.text(), "STOUT");
            assert_eq!(word.chars(), b"STOUT");
        }
    }

    #[test]
    fn trims_surrounding_whitespace() {
        assert_eq!(Word::new("  slate\n").unwrap().text(), "SLATE");
    }

    #[test]
    fn rejects_wrong_length() {
        assert_eq!(Word::new("shells"), Err(WordError::InvalidLength(6)));
        assert_eq!(Word::new("bell"), Err(WordError::InvalidLength(4)));
        assert_eq!(Word::new("   "), Err(WordError::InvalidLength(0)));
    }

    #[test]
    fn rejects_non_letters() {
        assert_eq!(Word::new("b3lls"), Err(WordError::InvalidCharacters));
        assert_eq!(Word::new("be ls"), Err(WordError::InvalidCharacters));
        assert_eq!(Word::new("bell!"), Err(WordError::InvalidCharacters));
        // Five characters, but not ASCII
        assert_eq!(Word::new("éclat"), Err(WordError::InvalidCharacters));
    }

    #[test]
    fn non_ascii_is_rejected_before_length_is_counted() {
        // STRAß would uppercase to six letters
        assert_eq!(Word::new("straß"), Err(WordError::InvalidCharacters));
        assert_eq!(Word::new("bellsé"), Err(WordError::InvalidCharacters));
        assert_eq!(Word::new("ﬁ"), Err(WordError::InvalidCharacters));
    }

    #[test]
    fn positional_access() {
        let word = Word::new("llama").unwrap();
        assert_eq!(word.char_at(0), b'L');
        assert_eq!(word.char_at(3), b'M');
        assert!(word.has_letter(b'A'));
        assert!(!word.has_letter(b'a'));
        assert!(!word.has_letter(b'Z'));
    }

    #[test]
    fn letter_counts_include_repeats() {
        let counts = Word::new("erase").unwrap().char_counts();
        assert_eq!(counts.get(&b'E'), Some(&2));
        assert_eq!(counts.get(&b'R'), Some(&1));
        assert_eq!(counts.get(&b'X'), None);
        assert_eq!(counts.len(), 4);
    }

    #[test]
    fn displays_uppercase_text() {
        assert_eq!(Word::new("alloy").unwrap().to_string(), "ALLOY");
    }

    #[test]
    fn serializes_as_string() {
        let word = Word::new("bells").unwrap();
        assert_eq!(serde_json::to_string(&word).unwrap(), "\"BELLS\"");

        let back: Word = serde_json::from_str("\"bells\"").unwrap();
        assert_eq!(back, word);

        assert!(serde_json::from_str::<Word>("\"bell\"").is_err());
    }
}
