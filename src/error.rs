//! Recoverable rejections surfaced by the game engine.

/// Result alias for game operations.
pub type Result<T> = std::result::Result<T, GameError>;

/// Why a submission was turned away. Neither variant changes session state.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    /// The guess is not exactly five digit characters.
    #[error("must be exactly 5 digits")]
    InvalidGuess,

    /// The session is already won or lost.
    #[error("not in progress")]
    InvalidState,
}
