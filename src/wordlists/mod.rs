//! Word lists for the game
//!
//! A [`WordList`] is the closed vocabulary every guess and answer is drawn
//! from. Answers come from a list of common words; guesses may be any word of
//! the larger allowed list. It is loaded once at startup, either from the
//! lists embedded at build time or from a file, and never changes afterwards.

mod embedded;
pub mod loader;

pub use embedded::{ALLOWED, ALLOWED_COUNT, ANSWERS, ANSWERS_COUNT};
pub use loader::WordListError;

use crate::core::{Word, WordError};
use rand::Rng;
use rustc_hash::FxHashSet;

/// Immutable vocabulary: answer candidates plus every accepted guess
#[derive(Debug, Clone)]
pub struct WordList {
    answers: Vec<Word>,
    index: FxHashSet<Word>,
}

impl WordList {
    /// Build a word list whose answers are drawn from `answers` and whose
    /// guesses may be any word of either list
    ///
    /// Duplicate answers are dropped, keeping first-seen order.
    ///
    /// # Errors
    /// Returns `WordListError::Empty` if `answers` yields nothing.
    pub fn new(
        answers: impl IntoIterator<Item = Word>,
        allowed: impl IntoIterator<Item = Word>,
    ) -> Result<Self, WordListError> {
        let mut index = FxHashSet::default();
        let answers: Vec<Word> = answers
            .into_iter()
            .filter(|word| index.insert(word.clone()))
            .collect();

        if answers.is_empty() {
            return Err(WordListError::Empty);
        }

        index.extend(allowed);
        Ok(Self { answers, index })
    }

    /// Build a word list where every word is both an answer and a guess
    ///
    /// # Errors
    /// Returns `WordListError::Empty` if `words` yields nothing.
    pub fn from_words(words: impl IntoIterator<Item = Word>) -> Result<Self, WordListError> {
        Self::new(words, std::iter::empty())
    }

    /// The lists compiled into the binary from `data/answers.txt` and
    /// `data/allowed.txt`
    ///
    /// # Errors
    /// Returns `WordListError::Empty` only if the build embedded no valid answers.
    pub fn embedded() -> Result<Self, WordListError> {
        Self::new(
            loader::words_from_slice(ANSWERS),
            loader::words_from_slice(ALLOWED),
        )
    }

    /// Check whether a word is accepted as a guess
    #[inline]
    #[must_use]
    pub fn contains(&self, word: &Word) -> bool {
        self.index.contains(word)
    }

    /// Parse raw input into a Word that belongs to this list
    ///
    /// # Errors
    /// Returns the shape error from [`Word::new`], or
    /// `WordError::NotInWordList` for a well-formed word the list lacks.
    ///
    /// # Examples
    /// ```
    /// use wordle_game::wordlists::WordList;
    ///
    /// let words = WordList::embedded().unwrap();
    /// assert_eq!(words.lookup("crane").unwrap().text(), "CRANE");
    /// assert!(words.lookup("zzzzz").is_err());
    /// ```
    pub fn lookup(&self, raw: &str) -> Result<Word, WordError> {
        let word = Word::new(raw)?;
        if self.contains(&word) {
            Ok(word)
        } else {
            Err(WordError::NotInWordList(word.text().to_string()))
        }
    }

    /// Pick an answer uniformly at random
    pub fn random_word<R: Rng + ?Sized>(&self, rng: &mut R) -> Word {
        // Construction guarantees at least one answer
        self.answers[rng.random_range(0..self.answers.len())].clone()
    }

    /// Number of words accepted as guesses
    #[must_use]
    pub fn len(&self) -> usize {
        self.index.len()
    }

    /// Always false; an empty list cannot be constructed
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    /// Number of answer candidates
    #[must_use]
    pub fn answer_count(&self) -> usize {
        self.answers.len()
    }

    /// Iterate over the answer candidates in load order
    pub fn iter(&self) -> impl Iterator<Item = &Word> {
        self.answers.iter()
    }
}
