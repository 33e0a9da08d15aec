//! Session handle for callers that may race.
//!
//! Every operation holds the session lock for its full read-modify-write, so
//! concurrent submissions are serialized per session.

use super::{Attempt, GameSession, GameStatus, SessionSnapshot};
use crate::error::Result;
use parking_lot::Mutex;
use rand::Rng;
use std::sync::Arc;

#[derive(Debug, Clone)]
pub struct SharedSession {
    inner: Arc<Mutex<GameSession>>,
}

impl SharedSession {
    pub fn new(session: GameSession) -> Self {
        Self {
            inner: Arc::new(Mutex::new(session)),
        }
    }

    pub fn submit_guess(&self, raw: &str) -> Result<Attempt> {
        self.inner.lock().submit_guess(raw)
    }

    pub fn reset<R: Rng + ?Sized>(&self, rng: &mut R) {
        self.inner.lock().reset(rng);
    }

    pub fn snapshot(&self, reveal: bool) -> SessionSnapshot {
        self.inner.lock().snapshot(reveal)
    }

    pub fn attempts(&self) -> Vec<Attempt> {
        self.inner.lock().attempts().to_vec()
    }

    pub fn status(&self) -> GameStatus {
        self.inner.lock().status()
    }
}

impl From<GameSession> for SharedSession {
    fn from(session: GameSession) -> Self {
        Self::new(session)
    }
}
