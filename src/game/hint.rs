//! Hint selection

use crate::core::{GuessRecord, Word};
use rand::Rng;
use rand::seq::IndexedRandom;
use rustc_hash::FxHashSet;

/// Pick a letter of `answer` that no previous guess has used
///
/// Every letter of every guessed word counts as revealed, whatever clue it
/// earned. Letters are drawn from the answer's positions, so a letter the
/// answer repeats is proportionally more likely. Returns `None` when nothing
/// is left to reveal.
pub fn generate_hint<R: Rng + ?Sized>(
    answer: &Word,
    guesses: &[GuessRecord],
    rng: &mut R,
) -> Option<char> {
    let guessed: FxHashSet<u8> = guesses
        .iter()
        .flat_map(|guess| guess.word().chars().iter().copied())
        .collect();

    let unrevealed: Vec<u8> = answer
        .chars()
        .iter()
        .copied()
        .filter(|letter| !guessed.contains(letter))
        .collect();

    unrevealed.choose(rng).map(|&letter| char::from(letter))
}
