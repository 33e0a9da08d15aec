//! Lock-picking game UI rendering.

use crate::constants::{CODE_LENGTH, MAX_ATTEMPTS};
use crate::lock::{Attempt, GameStatus, LockGame};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

/// Order of the on-screen digit pad.
const PAD_DIGITS: [u8; 10] = [1, 2, 3, 4, 5, 6, 7, 8, 9, 0];

/// Areas of the lock scene.
struct SceneLayout {
    content: Rect,
    status_bar: Rect,
    info_panel: Rect,
}

/// Outer border, then content (left, with a 2-line status bar) and an info
/// panel (right).
fn create_layout(frame: &mut Frame, area: Rect) -> SceneLayout {
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(" Lock Picking ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Magenta));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let h_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(30), Constraint::Length(26)])
        .split(inner);

    let v_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(8), Constraint::Length(2)])
        .split(h_chunks[0]);

    SceneLayout {
        content: v_chunks[0],
        status_bar: v_chunks[1],
        info_panel: h_chunks[1],
    }
}

/// Render the lock-picking scene.
pub fn render_lock(frame: &mut Frame, area: Rect, game: &LockGame) {
    let layout = create_layout(frame, area);

    render_board(frame, layout.content, game);
    render_status_bar(frame, layout.status_bar, game);
    render_info_panel(frame, layout.info_panel, game);

    if game.session.is_over() {
        render_game_over_overlay(frame, layout.content, game);
    }
}

fn attempt_lines(attempt: &Attempt) -> Vec<Line<'static>> {
    let feedback = &attempt.feedback;
    let solved = feedback.is_solved();

    let mut header = vec![
        Span::styled(
            format!("{:>2}: ", attempt.number),
            Style::default().fg(Color::DarkGray),
        ),
        Span::styled(
            attempt.guess.to_string(),
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
        ),
        Span::raw("  "),
        Span::styled(
            format!("{}/{} placed", feedback.correct_position_count(), CODE_LENGTH),
            Style::default().fg(if solved { Color::Green } else { Color::Cyan }),
        ),
    ];

    header.push(Span::styled("  in code: ", Style::default().fg(Color::DarkGray)));
    if feedback.present_digits().is_empty() {
        header.push(Span::styled("none", Style::default().fg(Color::DarkGray)));
    } else {
        let digits: Vec<String> = feedback
            .present_digits()
            .iter()
            .map(|d| d.to_string())
            .collect();
        header.push(Span::styled(
            digits.join(" "),
            Style::default().fg(Color::Green),
        ));
    }

    let mut lines = vec![Line::from(header)];
    if !feedback.correct_position_details().is_empty() && !solved {
        let placed: Vec<String> = feedback
            .correct_position_details()
            .iter()
            .map(|m| m.to_string())
            .collect();
        lines.push(Line::from(vec![
            Span::raw("    "),
            Span::styled(placed.join(", "), Style::default().fg(Color::Blue)),
        ]));
    }
    lines
}

/// Attempt history, current input slots and the digit pad.
fn render_board(frame: &mut Frame, area: Rect, game: &LockGame) {
    let mut lines: Vec<Line> = Vec::new();

    if game.session.attempts().is_empty() {
        lines.push(Line::from(Span::styled(
            "No attempts yet. Start guessing!",
            Style::default().fg(Color::DarkGray),
        )));
    }
    for attempt in game.session.attempts() {
        lines.extend(attempt_lines(attempt));
    }
    lines.push(Line::from(""));

    if !game.session.is_over() {
        let mut slots = vec![Span::styled(
            format!("{:>2}: ", game.session.attempts().len() + 1),
            Style::default().fg(Color::DarkGray),
        )];
        let entered: Vec<char> = game.current_input.chars().collect();
        for i in 0..CODE_LENGTH {
            let (text, style) = match entered.get(i) {
                Some(ch) => (
                    format!("[{}]", ch),
                    Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
                ),
                None => ("[ ]".to_string(), Style::default().fg(Color::DarkGray)),
            };
            slots.push(Span::styled(text, style));
        }
        lines.push(Line::from(slots));
        lines.push(Line::from(""));

        let mut pad = vec![Span::styled("Pad: ", Style::default().fg(Color::DarkGray))];
        for d in PAD_DIGITS {
            pad.push(Span::styled(
                format!("{} ", d),
                Style::default().fg(Color::White),
            ));
        }
        lines.push(Line::from(pad));
    }

    // Keep the newest lines visible when history overflows
    let overflow = (lines.len() as u16).saturating_sub(area.height);
    let board = Paragraph::new(lines).scroll((overflow, 0));
    frame.render_widget(
        board,
        Rect::new(area.x + 1, area.y, area.width.saturating_sub(2), area.height),
    );
}

/// Status message (line 1) and controls (line 2).
fn render_status_bar(frame: &mut Frame, area: Rect, game: &LockGame) {
    if area.height < 2 {
        return;
    }

    let status = if game.session.is_over() {
        Span::raw("")
    } else if let Some(ref msg) = game.reject_message {
        Span::styled(format!("Rejected: {}", msg), Style::default().fg(Color::LightRed))
    } else if game.session.attempts().is_empty() {
        Span::styled("Crack the code", Style::default().fg(Color::Yellow))
    } else {
        Span::styled("Picking the lock...", Style::default().fg(Color::Green))
    };
    frame.render_widget(
        Paragraph::new(Line::from(vec![Span::raw(" "), status])),
        Rect::new(area.x, area.y, area.width, 1),
    );

    let controls = [
        ("[0-9]", " Digit  "),
        ("[Bksp]", " Undo  "),
        ("[C]", " Clear  "),
        ("[Enter]", " Submit  "),
        ("[R]", " Reset  "),
        ("[Esc]", " Quit"),
    ];
    let mut spans = vec![Span::raw(" ")];
    for (key, action) in controls {
        spans.push(Span::styled(key, Style::default().fg(Color::White)));
        spans.push(Span::styled(action, Style::default().fg(Color::DarkGray)));
    }
    frame.render_widget(
        Paragraph::new(Line::from(spans)),
        Rect::new(area.x, area.y + 1, area.width, 1),
    );
}

fn render_info_panel(frame: &mut Frame, area: Rect, game: &LockGame) {
    let block = Block::default()
        .title(" Info ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let remaining = game.session.attempts_remaining();
    let mut lines: Vec<Line> = vec![
        Line::from(vec![
            Span::styled("Attempts: ", Style::default().fg(Color::DarkGray)),
            Span::styled(
                format!("{}/{}", game.session.attempts().len(), MAX_ATTEMPTS),
                Style::default().fg(Color::White),
            ),
        ]),
        Line::from(vec![
            Span::styled("Left: ", Style::default().fg(Color::DarkGray)),
            Span::styled(
                format!("{}", remaining),
                Style::default().fg(if remaining <= 2 { Color::Red } else { Color::White }),
            ),
        ]),
        Line::from(vec![
            Span::styled("Status: ", Style::default().fg(Color::DarkGray)),
            Span::styled(game.session.status().name(), Style::default().fg(Color::Cyan)),
        ]),
        Line::from(""),
        Line::from(Span::styled(
            "Rules:",
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            " 5 distinct digits",
            Style::default().fg(Color::DarkGray),
        )),
        Line::from(Span::styled(
            " \"in code\": digits found",
            Style::default().fg(Color::DarkGray),
        )),
        Line::from(Span::styled(
            " \"placed\": right slot",
            Style::default().fg(Color::DarkGray),
        )),
    ];

    if game.reveal {
        let snapshot = game.session.snapshot(true);
        let code = snapshot
            .secret_code
            .map(|c| c.to_string())
            .unwrap_or_default();
        let unique: Vec<String> = snapshot
            .unique_digits
            .unwrap_or_default()
            .iter()
            .map(|d| d.to_string())
            .collect();
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            "Debug:",
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
        )));
        lines.push(Line::from(Span::styled(
            format!(" Code: {}", code),
            Style::default().fg(Color::Yellow),
        )));
        lines.push(Line::from(Span::styled(
            format!(" Digits: {}", unique.join(",")),
            Style::default().fg(Color::Yellow),
        )));
    }

    frame.render_widget(Paragraph::new(lines), inner);
}

fn render_game_over_overlay(frame: &mut Frame, area: Rect, game: &LockGame) {
    let (title, message, color) = match game.session.status() {
        GameStatus::Won => ("Congratulations!", "You cracked the code!", Color::Green),
        GameStatus::Lost => ("You Lose!", "Better luck next time!", Color::Red),
        GameStatus::InProgress => return,
    };

    let overlay_lines = vec![
        Line::from(Span::styled(
            title,
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(message, Style::default().fg(color))),
        Line::from(""),
        Line::from(vec![
            Span::styled("Code: ", Style::default().fg(Color::DarkGray)),
            Span::styled(
                game.session.secret().to_string(),
                Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(Span::styled(
            "[R] New game  [Esc] Quit",
            Style::default().fg(Color::DarkGray),
        )),
    ];

    let height = (overlay_lines.len() as u16 + 2).min(area.height);
    let width = 30u16.min(area.width);
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;
    let overlay_area = Rect::new(x, y, width, height);

    frame.render_widget(Clear, overlay_area);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(color));
    let inner = block.inner(overlay_area);
    frame.render_widget(block, overlay_area);
    frame.render_widget(
        Paragraph::new(overlay_lines).alignment(Alignment::Center),
        inner,
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lock::{GameSession, SecretCode};
    use ratatui::{backend::TestBackend, Terminal};

    fn buffer_text(terminal: &Terminal<TestBackend>) -> String {
        let buffer = terminal.backend().buffer();
        buffer.content().iter().map(|cell| cell.symbol()).collect()
    }

    fn game(code: &str) -> LockGame {
        LockGame::from_session(GameSession::with_secret(SecretCode::parse(code).unwrap()), false)
    }

    #[test]
    fn test_render_fresh_game() {
        let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
        let game = game("35197");
        terminal
            .draw(|f| {
                let area = f.size();
                render_lock(f, area, &game);
            })
            .unwrap();

        let text = buffer_text(&terminal);
        assert!(text.contains("Lock Picking"));
        assert!(text.contains("No attempts yet"));
        assert!(!text.contains("35197"));
    }

    #[test]
    fn test_render_attempts_and_outcome() {
        let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
        let mut game = game("35197");
        game.session.submit_guess("15342").unwrap();
        game.session.submit_guess("35197").unwrap();
        terminal
            .draw(|f| {
                let area = f.size();
                render_lock(f, area, &game);
            })
            .unwrap();

        let text = buffer_text(&terminal);
        assert!(text.contains("Congratulations!"));
        assert!(text.contains("35197"));
    }

    #[test]
    fn test_render_reveal_panel() {
        let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
        let mut game = game("35197");
        game.reveal = true;
        terminal
            .draw(|f| {
                let area = f.size();
                render_lock(f, area, &game);
            })
            .unwrap();

        assert!(buffer_text(&terminal).contains("Code: 35197"));
    }

    #[test]
    fn test_render_small_area_does_not_panic() {
        let mut terminal = Terminal::new(TestBackend::new(40, 10)).unwrap();
        let mut game = game("12345");
        game.session.submit_guess("12345").unwrap();
        terminal
            .draw(|f| {
                let area = f.size();
                render_lock(f, area, &game);
            })
            .unwrap();
    }
}
