//! Digit pad: the input buffer a front-end fills before submitting a guess.

use super::GameSession;
use crate::constants::{CODE_LENGTH, DIGIT_RADIX};
use rand::Rng;

/// Input actions for the digit pad (UI-agnostic).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PadInput {
    Digit(u8),
    Backspace,
    Clear,
    Submit,
    NewGame,
    Other,
}

/// A session plus the player's partially entered guess.
#[derive(Debug, Clone)]
pub struct LockGame {
    pub session: GameSession,
    pub current_input: String,
    pub reject_message: Option<String>,
    /// Show the code in a debug panel
    pub reveal: bool,
}

impl LockGame {
    pub fn new<R: Rng + ?Sized>(rng: &mut R, reveal: bool) -> Self {
        Self::from_session(GameSession::start(rng), reveal)
    }

    pub fn from_session(session: GameSession, reveal: bool) -> Self {
        Self {
            session,
            current_input: String::with_capacity(CODE_LENGTH),
            reject_message: None,
            reveal,
        }
    }

    pub fn push_digit(&mut self, digit: u8) {
        if digit >= DIGIT_RADIX
            || self.current_input.len() >= CODE_LENGTH
            || self.session.is_over()
        {
            return;
        }
        self.reject_message = None;
        self.current_input.push(char::from(b'0' + digit));
    }

    pub fn pop_digit(&mut self) {
        if self.current_input.pop().is_some() {
            self.reject_message = None;
        }
    }

    pub fn clear_input(&mut self) {
        self.current_input.clear();
    }

    pub fn is_input_complete(&self) -> bool {
        self.current_input.len() == CODE_LENGTH
    }

    pub fn can_submit(&self) -> bool {
        self.is_input_complete() && !self.session.is_over()
    }
}

/// Process one pad action. Returns true if a guess was recorded.
pub fn process_input<R: Rng + ?Sized>(game: &mut LockGame, input: PadInput, rng: &mut R) -> bool {
    match input {
        PadInput::Digit(d) => game.push_digit(d),
        PadInput::Backspace => game.pop_digit(),
        PadInput::Clear => game.clear_input(),
        PadInput::Submit => return submit_input(game),
        PadInput::NewGame => {
            game.session.reset(rng);
            game.clear_input();
            game.reject_message = None;
        }
        PadInput::Other => {}
    }
    false
}

/// Submit the buffered digits. On rejection the buffer is kept and the
/// reason is shown.
pub fn submit_input(game: &mut LockGame) -> bool {
    if !game.can_submit() {
        return false;
    }
    match game.session.submit_guess(&game.current_input) {
        Ok(_) => {
            game.reject_message = None;
            game.clear_input();
            true
        }
        Err(e) => {
            game.reject_message = Some(e.to_string());
            false
        }
    }
}
