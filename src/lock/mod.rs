//! The lock-picking game engine: code generation, guess scoring and the
//! session state machine.

pub mod evaluator;
pub mod generator;
pub mod pad;
pub mod session;
pub mod shared;
pub mod types;

pub use evaluator::evaluate;
pub use generator::generate_code;
pub use pad::{process_input, LockGame, PadInput};
pub use session::{GameSession, SessionSnapshot};
pub use shared::SharedSession;
pub use types::*;
