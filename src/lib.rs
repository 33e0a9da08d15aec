//! Lockpick - Terminal Code-Breaking Game Library
//!
//! Guess a 5-digit code of distinct digits within 6 attempts. After each
//! guess the game reports which guessed digits occur in the code and which
//! sit in the right slot.
//!
//! - `lock` - the game engine (code generation, scoring, session state machine)
//! - `plain` - line-oriented front-end
//! - `ui` / `input` - ratatui front-end

pub mod build_info;
pub mod cli;
pub mod constants;
pub mod error;
pub mod input;
pub mod lock;
pub mod logging;
pub mod plain;
pub mod ui;

pub use error::{GameError, Result};
pub use lock::{
    evaluate, generate_code, Attempt, Feedback, GameSession, GameStatus, Guess, LockGame,
    PadInput, PositionMatch, SecretCode, SessionSnapshot, SharedSession,
};
