//! Hard mode constraints
//!
//! In hard mode every guess must respect what earlier clues revealed. Two
//! rules are supported, see [`HardModeRule`].

use crate::core::{Clue, GuessRecord, Word};
use std::fmt;

/// How strictly earlier clues bind later guesses
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum HardModeRule {
    /// Green letters must stay in place; yellow letters must appear somewhere
    #[default]
    Positional,
    /// Green and yellow letters must appear somewhere, position not enforced
    Presence,
}

/// First constraint a hard-mode guess failed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HardModeViolation {
    /// A letter revealed green at `position` (0-based) moved or disappeared
    MisplacedGreen { letter: char, position: usize },
    /// A revealed letter is missing from the guess
    MissingLetter { letter: char },
}

impl fmt::Display for HardModeViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MisplacedGreen { letter, position } => {
                write!(f, "letter {} must be {letter}", position + 1)
            }
            Self::MissingLetter { letter } => write!(f, "guess must contain {letter}"),
        }
    }
}

/// Check `guess` against every clue in `history`
///
/// Records are visited in turn order and letters in word order; the first
/// unmet constraint is returned.
pub(crate) fn check(
    rule: HardModeRule,
    history: &[GuessRecord],
    guess: &Word,
) -> Result<(), HardModeViolation> {
    for (position, letter, clue) in history.iter().flat_map(GuessRecord::letters) {
        match (rule, clue) {
            (_, Clue::Grey) => {}
            (HardModeRule::Positional, Clue::Green) => {
                if guess.char_at(position) != letter {
                    return Err(HardModeViolation::MisplacedGreen {
                        letter: char::from(letter),
                        position,
                    });
                }
            }
            (HardModeRule::Positional, Clue::Yellow)
            | (HardModeRule::Presence, Clue::Green | Clue::Yellow) => {
                if !guess.has_letter(letter) {
                    return Err(HardModeViolation::MissingLetter {
                        letter: char::from(letter),
                    });
                }
            }
        }
    }

    Ok(())
}
