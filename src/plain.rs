//! Line-oriented front-end: one guess per input line, feedback as text or
//! JSON lines. Used with `--plain`, for piping and for scripted play.

use crate::constants::{CODE_LENGTH, MAX_ATTEMPTS};
use crate::lock::{Attempt, GameSession, GameStatus};
use rand::Rng;
use serde_json::json;
use std::io::{self, BufRead, Write};

#[derive(Debug, Clone, Copy, Default)]
pub struct PlainOptions {
    pub reveal: bool,
    pub json: bool,
}

/// Play until `quit` or end of input.
pub fn run<I, O, R>(input: I, out: &mut O, rng: &mut R, opts: PlainOptions) -> io::Result<()>
where
    I: BufRead,
    O: Write,
    R: Rng + ?Sized,
{
    let mut session = GameSession::start(rng);
    print_intro(out, &session, opts)?;

    for line in input.lines() {
        let line = line?;
        let raw = line.trim();
        match raw {
            "" => continue,
            "quit" | "exit" => break,
            "new" | "reset" => {
                session.reset(rng);
                print_intro(out, &session, opts)?;
                continue;
            }
            _ => {}
        }

        match session.submit_guess(raw) {
            Ok(attempt) => {
                print_attempt(out, &attempt, opts)?;
                if session.is_over() {
                    print_outcome(out, &session, opts)?;
                }
            }
            Err(e) => {
                if opts.json {
                    writeln!(out, "{}", json!({ "error": e.to_string() }))?;
                } else {
                    writeln!(out, "Rejected: {}", e)?;
                }
            }
        }
    }
    out.flush()
}

fn print_intro<O: Write>(out: &mut O, session: &GameSession, opts: PlainOptions) -> io::Result<()> {
    if opts.json {
        serde_json::to_writer(&mut *out, &session.snapshot(opts.reveal))?;
        return writeln!(out);
    }
    writeln!(out, "Lock Picking Game")?;
    writeln!(
        out,
        "Crack the {}-digit security code! You have {} attempts.",
        CODE_LENGTH, MAX_ATTEMPTS
    )?;
    if opts.reveal {
        let digits: Vec<String> = session
            .secret()
            .digit_set()
            .iter()
            .map(|d| d.to_string())
            .collect();
        writeln!(
            out,
            "[debug] Secret code: {} (unique numbers: {})",
            session.secret(),
            digits.join(", ")
        )?;
    }
    Ok(())
}

/// Text rendering of one attempt, as shown in the attempt list.
pub fn format_attempt(attempt: &Attempt) -> String {
    let feedback = &attempt.feedback;
    let present = if feedback.present_digits().is_empty() {
        "None".to_string()
    } else {
        feedback
            .present_digits()
            .iter()
            .map(|d| d.to_string())
            .collect::<Vec<_>>()
            .join(", ")
    };

    let mut text = format!(
        "Attempt {}: {}\n  Digits in code: {}\n  Correct positions: {} out of {}",
        attempt.number,
        attempt.guess,
        present,
        feedback.correct_position_count(),
        CODE_LENGTH
    );
    if !feedback.correct_position_details().is_empty() {
        let placed: Vec<String> = feedback
            .correct_position_details()
            .iter()
            .map(|m| m.to_string())
            .collect();
        text.push_str("\n  Correctly positioned: ");
        text.push_str(&placed.join(", "));
    }
    text
}

fn print_attempt<O: Write>(out: &mut O, attempt: &Attempt, opts: PlainOptions) -> io::Result<()> {
    if opts.json {
        serde_json::to_writer(&mut *out, attempt)?;
        return writeln!(out);
    }
    writeln!(out, "{}", format_attempt(attempt))
}

fn print_outcome<O: Write>(out: &mut O, session: &GameSession, opts: PlainOptions) -> io::Result<()> {
    if opts.json {
        serde_json::to_writer(&mut *out, &session.snapshot(opts.reveal))?;
        return writeln!(out);
    }
    match session.status() {
        GameStatus::Won => writeln!(out, "Congratulations! You cracked the code!")?,
        GameStatus::Lost => writeln!(out, "You Lose! Better luck next time!")?,
        GameStatus::InProgress => return Ok(()),
    }
    writeln!(out, "The secret code was: {}", session.secret())?;
    writeln!(out, "Type 'new' for another game or 'quit' to exit.")
}
