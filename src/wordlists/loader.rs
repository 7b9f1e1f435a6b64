//! Word list loading utilities
//!
//! Provides functions to load word lists from files or from embedded constants.

use super::WordList;
use crate::core::Word;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Failure to produce a usable word list
#[derive(Debug, Error)]
pub enum WordListError {
    #[error("failed to read word list {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("word list contains no valid 5-letter words")]
    Empty,
}

/// Load a word list from a file
///
/// One word per line. Blank lines are ignored; malformed entries are skipped
/// and reported with a single warning.
///
/// # Errors
///
/// Returns `WordListError::Io` if the file cannot be read, or
/// `WordListError::Empty` if it contains no valid words.
///
/// # Examples
/// ```no_run
/// use wordle_game::wordlists::loader::load_from_file;
///
/// let words = load_from_file("data/allowed.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<WordList, WordListError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|source| WordListError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let mut skipped = 0usize;
    let words: Vec<Word> = content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .filter_map(|line| {
            Word::new(line)
                .inspect_err(|_| skipped += 1)
                .ok()
        })
        .collect();

    if skipped > 0 {
        tracing::warn!(path = %path.display(), skipped, "skipped malformed word list entries");
    }

    let list = WordList::from_words(words)?;
    tracing::info!(path = %path.display(), words = list.len(), "loaded word list");
    Ok(list)
}

/// Convert embedded string slice to Word vector, skipping malformed entries
///
/// # Examples
/// ```
/// use wordle_game::wordlists::loader::words_from_slice;
/// use wordle_game::wordlists::ANSWERS;
///
/// let words = words_from_slice(ANSWERS);
/// assert_eq!(words.len(), ANSWERS.len());
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<Word> {
    slice.iter().filter_map(|&s| Word::new(s).ok()).collect()
}
