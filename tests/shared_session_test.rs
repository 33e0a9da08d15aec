//! Integration test: concurrent submissions against one shared session.

use lockpick::constants::MAX_ATTEMPTS;
use lockpick::{GameError, GameSession, GameStatus, SecretCode, SharedSession};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::thread;

#[test]
fn test_racing_submissions_are_serialized() {
    let shared = SharedSession::new(GameSession::with_secret(SecretCode::parse("12345").unwrap()));

    let handles: Vec<_> = (0..16)
        .map(|_| {
            let shared = shared.clone();
            thread::spawn(move || shared.submit_guess("67890"))
        })
        .collect();
    let results: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();

    let accepted = results.iter().filter(|r| r.is_ok()).count();
    let rejected = results
        .iter()
        .filter(|r| matches!(r, Err(GameError::InvalidState)))
        .count();
    assert_eq!(accepted, MAX_ATTEMPTS);
    assert_eq!(rejected, 16 - MAX_ATTEMPTS);

    let mut numbers: Vec<usize> = shared.attempts().iter().map(|a| a.number).collect();
    numbers.sort();
    assert_eq!(numbers, (1..=MAX_ATTEMPTS).collect::<Vec<_>>());
    assert_eq!(shared.status(), GameStatus::Lost);
}

#[test]
fn test_shared_reset_and_snapshot() {
    let mut rng = ChaCha8Rng::seed_from_u64(42);
    let shared: SharedSession = GameSession::with_secret(SecretCode::parse("12345").unwrap()).into();
    shared.submit_guess("12345").unwrap();
    assert_eq!(shared.status(), GameStatus::Won);

    shared.reset(&mut rng);
    let snapshot = shared.snapshot(false);
    assert_eq!(snapshot.status, GameStatus::InProgress);
    assert_eq!(snapshot.attempts_used, 0);
    assert!(snapshot.secret_code.is_none());
}
