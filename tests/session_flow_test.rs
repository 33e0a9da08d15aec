//! Integration test: full game flows through the public session API.

use lockpick::constants::MAX_ATTEMPTS;
use lockpick::{GameError, GameSession, GameStatus, PositionMatch, SecretCode};
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use std::collections::BTreeSet;

fn seeded_rng() -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(42)
}

fn session(code: &str) -> GameSession {
    GameSession::with_secret(SecretCode::parse(code).unwrap())
}

#[test]
fn test_reference_feedback() {
    let mut game = session("35197");
    let attempt = game.submit_guess("15342").unwrap();

    assert_eq!(attempt.number, 1);
    assert_eq!(attempt.feedback.correct_position_count(), 1);
    assert_eq!(
        attempt.feedback.correct_position_details(),
        &[PositionMatch {
            digit: 5,
            position: 3
        }]
    );
    assert_eq!(
        attempt.feedback.present_digits(),
        &BTreeSet::from([1, 3, 5])
    );
}

#[test]
fn test_win_regardless_of_prior_attempts() {
    for misses in 0..MAX_ATTEMPTS {
        let mut game = session("12345");
        for _ in 0..misses {
            game.submit_guess("67890").unwrap();
        }
        game.submit_guess("12345").unwrap();
        assert_eq!(game.status(), GameStatus::Won, "after {misses} misses");
        assert_eq!(game.attempts().len(), misses + 1);
    }
}

#[test]
fn test_six_misses_lose() {
    let mut game = session("12345");
    let guesses = ["12354", "21345", "00000", "99999", "54321", "13245"];
    for guess in guesses {
        game.submit_guess(guess).unwrap();
    }
    assert_eq!(game.status(), GameStatus::Lost);
    let numbers: Vec<usize> = game.attempts().iter().map(|a| a.number).collect();
    assert_eq!(numbers, vec![1, 2, 3, 4, 5, 6]);
}

#[test]
fn test_malformed_guess_leaves_history_alone() {
    let mut game = session("12345");
    game.submit_guess("54321").unwrap();

    assert_eq!(game.submit_guess("12a45"), Err(GameError::InvalidGuess));
    assert_eq!(game.attempts().len(), 1);
    assert_eq!(game.status(), GameStatus::InProgress);
}

#[test]
fn test_guess_after_win_rejected() {
    let mut game = session("12345");
    game.submit_guess("12345").unwrap();

    let err = game.submit_guess("54321").unwrap_err();
    assert_eq!(err, GameError::InvalidState);
    assert_eq!(err.to_string(), "not in progress");
    assert_eq!(game.attempts().len(), 1);
}

#[test]
fn test_reset_after_loss() {
    let mut rng = seeded_rng();
    let mut game = session("12345");
    for _ in 0..MAX_ATTEMPTS {
        game.submit_guess("67890").unwrap();
    }
    assert_eq!(game.status(), GameStatus::Lost);

    game.reset(&mut rng);
    assert_eq!(game.status(), GameStatus::InProgress);
    assert_eq!(game.attempts_remaining(), MAX_ATTEMPTS);
    assert!(game.submit_guess("01234").is_ok());
}

#[test]
fn test_random_play_respects_invariants() {
    let mut rng = seeded_rng();
    let digits: Vec<char> = "0123456789".chars().collect();

    for _ in 0..200 {
        let mut game = GameSession::start(&mut rng);
        let mut prev_status = game.status();

        loop {
            let len = if rng.gen_bool(0.1) { 4 } else { 5 };
            let raw: String = (0..len).map(|_| *digits.choose(&mut rng).unwrap()).collect();
            let before = game.attempts().len();

            match game.submit_guess(&raw) {
                Ok(attempt) => {
                    assert_eq!(attempt.number, before + 1);
                    let fb = &attempt.feedback;
                    assert!(fb.correct_position_count() <= 5);
                    assert_eq!(fb.correct_position_count(), fb.correct_position_details().len());
                    if fb.is_solved() {
                        assert_eq!(game.status(), GameStatus::Won);
                    }
                }
                Err(GameError::InvalidGuess) => {
                    assert_eq!(game.attempts().len(), before);
                    assert_eq!(game.status(), prev_status);
                }
                Err(GameError::InvalidState) => unreachable!("game loop stops when over"),
            }

            assert!(game.attempts().len() <= MAX_ATTEMPTS);
            // terminal states never change
            if prev_status.is_over() {
                assert_eq!(game.status(), prev_status);
            }
            prev_status = game.status();
            if game.is_over() {
                break;
            }
        }

        let won = game.attempts().iter().any(|a| a.feedback.is_solved());
        match game.status() {
            GameStatus::Won => assert!(won),
            GameStatus::Lost => {
                assert!(!won);
                assert_eq!(game.attempts().len(), MAX_ATTEMPTS);
            }
            GameStatus::InProgress => unreachable!(),
        }
        assert_eq!(game.submit_guess("01234"), Err(GameError::InvalidState));
    }
}

#[test]
fn test_solving_with_the_secret() {
    let mut rng = seeded_rng();
    let mut game = GameSession::start(&mut rng);
    let code = game.secret().to_string();
    game.submit_guess(&code).unwrap();
    assert_eq!(game.status(), GameStatus::Won);
    assert_eq!(
        game.snapshot(false).secret_code.map(|c| c.to_string()),
        Some(code)
    );
}
