//! Errors raised by game operations

use super::GameStatus;
use super::hard_mode::HardModeViolation;
use crate::core::{MAX_GUESSES, WordError};
use thiserror::Error;

/// Failure of a game operation
///
/// Every variant is an expected, user-correctable condition. Match on
/// [`GameError::kind`] rather than on the message.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    #[error(transparent)]
    InvalidWord(#[from] WordError),
    #[error("cannot {operation} while the game is {status}")]
    InvalidState {
        operation: &'static str,
        status: GameStatus,
    },
    #[error("no guesses left, the limit is {}", MAX_GUESSES)]
    GuessLimitExceeded,
    #[error("hard mode: {0}")]
    HardModeViolation(HardModeViolation),
}

/// Machine-checkable category of a [`GameError`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    InvalidWord,
    InvalidState,
    GuessLimitExceeded,
    HardModeViolation,
}

impl ErrorKind {
    /// Stable upper-snake-case code, e.g. `INVALID_WORD`
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::InvalidWord => "INVALID_WORD",
            Self::InvalidState => "INVALID_STATE",
            Self::GuessLimitExceeded => "GUESS_LIMIT_EXCEEDED",
            Self::HardModeViolation => "HARD_MODE_VIOLATION",
        }
    }
}

impl GameError {
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidWord(_) => ErrorKind::InvalidWord,
            Self::InvalidState { .. } => ErrorKind::InvalidState,
            Self::GuessLimitExceeded => ErrorKind::GuessLimitExceeded,
            Self::HardModeViolation(_) => ErrorKind::HardModeViolation,
        }
    }

    pub(crate) const fn invalid_state(operation: &'static str, status: GameStatus) -> Self {
        Self::InvalidState { operation, status }
    }
}

impl From<HardModeViolation> for GameError {
    fn from(violation: HardModeViolation) -> Self {
        Self::HardModeViolation(violation)
    }
}
