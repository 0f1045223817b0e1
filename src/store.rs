//! In-memory session store

use crate::dialog::Session;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::{Mutex, RwLock};

/// Keyed session storage.
///
/// The outer `RwLock` guards map structure only (lookup, insert, remove).
/// Each session sits behind its own `Mutex`, taken by the caller for the
/// whole turn, so a slow generation call on one key never blocks turns on
/// other keys.
#[derive(Default)]
pub struct SessionStore {
    sessions: RwLock<HashMap<String, Arc<Mutex<Session>>>>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fetch the session cell for `key`, creating a fresh one on first use.
    ///
    /// Two concurrent calls with the same key resolve to the same cell.
    pub async fn get_or_create(&self, key: &str) -> Arc<Mutex<Session>> {
        {
            let sessions = self.sessions.read().await;
            if let Some(cell) = sessions.get(key) {
                return Arc::clone(cell);
            }
        }

        let mut sessions = self.sessions.write().await;
        Arc::clone(
            sessions
                .entry(key.to_string())
                .or_insert_with(|| Arc::new(Mutex::new(Session::new()))),
        )
    }

    /// Drop the session for `key`. Removing an absent key is a no-op.
    ///
    /// A turn already holding the removed cell finishes against it; the next
    /// turn on the key starts from a fresh session.
    pub async fn remove(&self, key: &str) {
        self.sessions.write().await.remove(key);
    }

    /// Number of live sessions.
    pub async fn len(&self) -> usize {
        self.sessions.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.sessions.read().await.is_empty()
    }
}
