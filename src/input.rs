//! Keyboard mapping for the terminal front-end.

use crate::lock::PadInput;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Result of handling a key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputResult {
    Pad(PadInput),
    Quit,
    Ignore,
}

/// Map a terminal key event to a game action.
pub fn map_key(key: KeyEvent) -> InputResult {
    if key.kind == KeyEventKind::Release {
        return InputResult::Ignore;
    }
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return InputResult::Quit;
    }

    let input = match key.code {
        KeyCode::Char(c) if c.is_ascii_digit() => PadInput::Digit(c as u8 - b'0'),
        KeyCode::Backspace => PadInput::Backspace,
        KeyCode::Delete | KeyCode::Char('c') | KeyCode::Char('C') => PadInput::Clear,
        KeyCode::Enter => PadInput::Submit,
        KeyCode::Char('r') | KeyCode::Char('R') => PadInput::NewGame,
        KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('Q') => return InputResult::Quit,
        _ => PadInput::Other,
    };
    InputResult::Pad(input)
}
