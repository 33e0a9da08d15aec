//! Lock-picking data structures.
//!
//! A code-breaking puzzle where the player has a handful of attempts to
//! find a 5-digit code made of distinct digits.

use crate::constants::{CODE_LENGTH, DIGIT_RADIX};
use crate::error::GameError;
use serde::{Serialize, Serializer};
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

fn write_digits(f: &mut fmt::Formatter<'_>, digits: &[u8]) -> fmt::Result {
    for &d in digits {
        write!(f, "{}", d)?;
    }
    Ok(())
}

/// The hidden code: exactly five pairwise-distinct digits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SecretCode([u8; CODE_LENGTH]);

impl SecretCode {
    /// Returns `None` unless every digit is in 0-9 and no digit repeats.
    pub fn new(digits: [u8; CODE_LENGTH]) -> Option<Self> {
        let mut seen = [false; DIGIT_RADIX as usize];
        for &d in &digits {
            if d >= DIGIT_RADIX || seen[d as usize] {
                return None;
            }
            seen[d as usize] = true;
        }
        Some(Self(digits))
    }

    /// Parse a code from its digit string, e.g. `"35197"`.
    pub fn parse(s: &str) -> Option<Self> {
        let guess: Guess = s.parse().ok()?;
        Self::new(guess.0)
    }

    pub fn digits(&self) -> &[u8; CODE_LENGTH] {
        &self.0
    }

    pub fn contains(&self, digit: u8) -> bool {
        self.0.contains(&digit)
    }

    /// The code's digits in ascending order.
    pub fn digit_set(&self) -> Vec<u8> {
        let mut set = self.0.to_vec();
        set.sort_unstable();
        set
    }
}

impl fmt::Display for SecretCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_digits(f, &self.0)
    }
}

impl Serialize for SecretCode {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// A player's submission. Digits may repeat.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Guess([u8; CODE_LENGTH]);

impl Guess {
    /// Accepts exactly five ASCII digit characters, nothing else.
    pub fn parse(raw: &str) -> Result<Self, GameError> {
        let mut digits = [0u8; CODE_LENGTH];
        let mut count = 0;
        for ch in raw.chars() {
            if count == CODE_LENGTH {
                return Err(GameError::InvalidGuess);
            }
            let d = ch
                .to_digit(DIGIT_RADIX as u32)
                .ok_or(GameError::InvalidGuess)?;
            digits[count] = d as u8;
            count += 1;
        }
        if count != CODE_LENGTH {
            return Err(GameError::InvalidGuess);
        }
        Ok(Self(digits))
    }

    pub fn digits(&self) -> &[u8; CODE_LENGTH] {
        &self.0
    }
}

impl FromStr for Guess {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Guess {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_digits(f, &self.0)
    }
}

impl Serialize for Guess {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// A guess digit sitting in the same slot as in the code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PositionMatch {
    pub digit: u8,
    /// 1-based slot index
    pub position: usize,
}

impl fmt::Display for PositionMatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} at position {}", self.digit, self.position)
    }
}

/// Result of scoring one guess against the code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Feedback {
    present_digits: BTreeSet<u8>,
    correct_position_count: usize,
    correct_position_details: Vec<PositionMatch>,
}

impl Feedback {
    pub(crate) fn new(present_digits: BTreeSet<u8>, details: Vec<PositionMatch>) -> Self {
        Self {
            present_digits,
            correct_position_count: details.len(),
            correct_position_details: details,
        }
    }

    /// Distinct guess digits found anywhere in the code.
    pub fn present_digits(&self) -> &BTreeSet<u8> {
        &self.present_digits
    }

    pub fn correct_position_count(&self) -> usize {
        self.correct_position_count
    }

    /// Slot matches in slot order.
    pub fn correct_position_details(&self) -> &[PositionMatch] {
        &self.correct_position_details
    }

    pub fn is_solved(&self) -> bool {
        self.correct_position_count == CODE_LENGTH
    }
}

/// One recorded guess with its feedback. Never changes once recorded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Attempt {
    /// 1-based, in submission order
    pub number: usize,
    pub guess: Guess,
    pub feedback: Feedback,
}

/// Lifecycle of a session. `Won` and `Lost` are terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum GameStatus {
    InProgress,
    Won,
    Lost,
}

impl GameStatus {
    pub fn is_over(&self) -> bool {
        !matches!(self, Self::InProgress)
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::InProgress => "In progress",
            Self::Won => "Won",
            Self::Lost => "Lost",
        }
    }
}
