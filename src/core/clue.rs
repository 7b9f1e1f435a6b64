//! Per-letter feedback for a guess
//!
//! Each position of a guess gets one clue:
//! - Green: letter in the correct position
//! - Yellow: letter elsewhere in the answer, limited by how many times it occurs
//! - Grey: letter not matched

use super::{WORD_LENGTH, Word};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Feedback for a single letter of a guess
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Clue {
    Green,
    Yellow,
    Grey,
}

impl Clue {
    /// Wire name of the clue ("GREEN", "YELLOW" or "GREY")
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Green => "GREEN",
            Self::Yellow => "YELLOW",
            Self::Grey => "GREY",
        }
    }

    /// Emoji square for terminal output
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Green => '🟩',
            Self::Yellow => '🟨',
            Self::Grey => '⬜',
        }
    }
}

impl fmt::Display for Clue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Compute the clues for `guess` against the secret `answer`
///
/// Implements Wordle's feedback rules, including duplicate letters: a letter
/// is credited at most as many times as it occurs in the answer, and exact
/// matches are credited before displaced ones.
///
/// # Algorithm
/// 1. First pass: mark all exact matches (greens) and remove them from the pool
/// 2. Second pass: mark present-but-wrong-position (yellows) from what remains
///
/// # Examples
/// ```
/// use wordle_game::core::{Clue, Word, compute_clues};
///
/// let answer = Word::new("bells").unwrap();
/// let guess = Word::new("shell").unwrap();
///
/// assert_eq!(
///     compute_clues(&answer, &guess),
///     [Clue::Yellow, Clue::Grey, Clue::Yellow, Clue::Green, Clue::Yellow]
/// );
/// ```
#[must_use]
pub fn compute_clues(answer: &Word, guess: &Word) -> [Clue; WORD_LENGTH] {
    let mut clues = [Clue::Grey; WORD_LENGTH];
    let mut answer_available = answer.char_counts();

    // First pass: Mark greens (exact position matches)
    // Allow: Index needed to access guess[i], answer[i], and set clues[i]
    #[allow(clippy::needless_range_loop)]
    for i in 0..WORD_LENGTH {
        if guess.char_at(i) == answer.char_at(i) {
            clues[i] = Clue::Green;

            if let Some(count) = answer_available.get_mut(&guess.char_at(i)) {
                *count = count.saturating_sub(1);
            }
        }
    }

    // Second pass: Mark yellows (wrong position, but letter still available)
    #[allow(clippy::needless_range_loop)]
    for i in 0..WORD_LENGTH {
        if clues[i] == Clue::Grey
            && let Some(count) = answer_available.get_mut(&guess.char_at(i))
            && *count > 0
        {
            clues[i] = Clue::Yellow;
            *count -= 1;
        }
    }

    clues
}

/// Render a row of clues as emoji squares, e.g. "🟩🟨⬜⬜🟩"
#[must_use]
pub fn clues_to_emoji(clues: &[Clue]) -> String {
    clues.iter().map(|clue| clue.symbol()).collect()
}
