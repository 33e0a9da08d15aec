pub mod lock_scene;

use crate::lock::LockGame;
use ratatui::Frame;

/// Main UI drawing function.
pub fn draw_ui(frame: &mut Frame, game: &LockGame) {
    let size = frame.size();
    lock_scene::render_lock(frame, size, game);
}
