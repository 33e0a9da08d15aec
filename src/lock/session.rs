//! Game session state machine.
//!
//! A session owns its secret code and the append-only attempt history, and
//! derives the outcome from them:
//!
//! ```text
//! InProgress --guess solves code--------------> Won
//! InProgress --6th guess, unsolved-------------> Lost
//! InProgress --guess, unsolved, attempts < 6---> InProgress
//! Won | Lost --guess---------------------------> rejected (InvalidState)
//! any        --reset---------------------------> InProgress, fresh code
//! ```

use super::{evaluate, generate_code, Attempt, GameStatus, Guess, SecretCode};
use crate::constants::MAX_ATTEMPTS;
use crate::error::{GameError, Result};
use chrono::{DateTime, Utc};
use rand::Rng;
use serde::Serialize;
use tracing::{debug, info, trace};
use uuid::Uuid;

/// One game, from code generation to its outcome.
#[derive(Debug, Clone)]
pub struct GameSession {
    id: Uuid,
    created_at: DateTime<Utc>,
    secret: SecretCode,
    attempts: Vec<Attempt>,
    status: GameStatus,
}

/// Read-only view of a session handed to front-ends.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SessionSnapshot {
    pub id: Uuid,
    pub created_at: DateTime<Utc>,
    pub status: GameStatus,
    pub attempts_used: usize,
    pub attempts_remaining: usize,
    pub max_attempts: usize,
    /// Only present when revealed or once the game is over.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub secret_code: Option<SecretCode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unique_digits: Option<Vec<u8>>,
}

impl GameSession {
    /// Start a new game with a freshly generated code.
    pub fn start<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self::with_secret(generate_code(rng))
    }

    /// Start a new game around a known code.
    pub fn with_secret(secret: SecretCode) -> Self {
        let session = Self {
            id: Uuid::new_v4(),
            created_at: Utc::now(),
            secret,
            attempts: Vec::with_capacity(MAX_ATTEMPTS),
            status: GameStatus::InProgress,
        };
        debug!(session = %session.id, "session started");
        trace!(session = %session.id, secret = %session.secret, "secret generated");
        session
    }

    /// Discard everything and begin a new game.
    pub fn reset<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        let previous = self.id;
        *self = Self::start(rng);
        debug!(previous = %previous, session = %self.id, "session reset");
    }

    /// Parse and submit a raw digit string.
    ///
    /// The state check comes first, so a finished game reports
    /// [`GameError::InvalidState`] even for malformed input.
    pub fn submit_guess(&mut self, raw: &str) -> Result<Attempt> {
        self.ensure_in_progress()?;
        let guess = Guess::parse(raw).inspect_err(|_| {
            debug!(session = %self.id, raw, "guess rejected: malformed");
        })?;
        self.submit(guess)
    }

    /// Score an already-parsed guess and record it.
    pub fn submit(&mut self, guess: Guess) -> Result<Attempt> {
        self.ensure_in_progress()?;

        let feedback = evaluate(&self.secret, &guess);
        let attempt = Attempt {
            number: self.attempts.len() + 1,
            guess,
            feedback,
        };
        self.attempts.push(attempt.clone());

        if attempt.feedback.is_solved() {
            self.status = GameStatus::Won;
            info!(session = %self.id, attempts = attempt.number, "code cracked");
        } else if self.attempts.len() >= MAX_ATTEMPTS {
            self.status = GameStatus::Lost;
            info!(session = %self.id, secret = %self.secret, "out of attempts");
        } else {
            debug!(
                session = %self.id,
                attempt = attempt.number,
                correct = attempt.feedback.correct_position_count(),
                "guess scored"
            );
        }

        Ok(attempt)
    }

    fn ensure_in_progress(&self) -> Result<()> {
        if self.status.is_over() || self.attempts.len() >= MAX_ATTEMPTS {
            debug!(session = %self.id, status = self.status.name(), "guess rejected: not in progress");
            return Err(GameError::InvalidState);
        }
        Ok(())
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn is_over(&self) -> bool {
        self.status.is_over()
    }

    /// Attempt history in submission order.
    pub fn attempts(&self) -> &[Attempt] {
        &self.attempts
    }

    pub fn attempts_remaining(&self) -> usize {
        MAX_ATTEMPTS - self.attempts.len()
    }

    /// The code itself. Only for trusted or debug callers.
    pub fn secret(&self) -> &SecretCode {
        &self.secret
    }

    /// Snapshot for rendering. The code is included when `reveal` is set or
    /// the game has ended.
    pub fn snapshot(&self, reveal: bool) -> SessionSnapshot {
        let show = reveal || self.is_over();
        SessionSnapshot {
            id: self.id,
            created_at: self.created_at,
            status: self.status,
            attempts_used: self.attempts.len(),
            attempts_remaining: self.attempts_remaining(),
            max_attempts: MAX_ATTEMPTS,
            secret_code: show.then_some(self.secret),
            unique_digits: show.then(|| self.secret.digit_set()),
        }
    }
}
