//! Guess scoring.

use super::{Feedback, Guess, PositionMatch, SecretCode};
use std::collections::BTreeSet;

/// Score a guess against the code.
///
/// Positional matches are reported per slot. Presence is a set membership
/// check: a guess digit found anywhere in the code is listed once, no matter
/// how often the guess repeats it. This is not a count-limited (multiset)
/// match as in classic Mastermind scoring.
pub fn evaluate(secret: &SecretCode, guess: &Guess) -> Feedback {
    let details: Vec<PositionMatch> = secret
        .digits()
        .iter()
        .zip(guess.digits())
        .enumerate()
        .filter(|(_, (s, g))| s == g)
        .map(|(i, (_, &digit))| PositionMatch {
            digit,
            position: i + 1,
        })
        .collect();

    let present: BTreeSet<u8> = guess
        .digits()
        .iter()
        .copied()
        .filter(|&d| secret.contains(d))
        .collect();

    Feedback::new(present, details)
}
