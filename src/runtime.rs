//! Turn orchestration shared by the HTTP surface

use crate::dialog::{DialogEngine, DialogState};
use crate::store::SessionStore;
use crate::turn_log::{now_ms, TurnLog, TurnRecord};
use std::time::Instant;

/// Result of one processed turn.
#[derive(Debug, Clone)]
pub struct TurnOutcome {
    pub session_id: String,
    pub state: DialogState,
    pub order_id: Option<String>,
    pub reply: String,
    pub latency_ms: u64,
}

/// Owns the session store, dialog engine, and turn log for the serving path.
pub struct DialogRuntime {
    store: SessionStore,
    engine: DialogEngine,
    turn_log: TurnLog,
}

impl DialogRuntime {
    pub fn new(engine: DialogEngine, turn_log: TurnLog) -> Self {
        Self {
            store: SessionStore::new(),
            engine,
            turn_log,
        }
    }

    /// Identifier of the model phrasing replies.
    pub fn model_id(&self) -> &str {
        self.engine.model_id()
    }

    /// Process one turn for `session_id` and queue its turn record.
    ///
    /// The session cell stays locked for the whole step, generation call
    /// included: concurrent turns on one key serialize in arrival order at
    /// the lock, while turns on other keys proceed untouched.
    pub async fn process_turn(&self, session_id: &str, message: &str) -> TurnOutcome {
        let start = Instant::now();

        let cell = self.store.get_or_create(session_id).await;
        let mut session = cell.lock().await;
        let reply = self.engine.step(&mut session, message.trim()).await;

        let outcome = TurnOutcome {
            session_id: session_id.to_string(),
            state: session.state,
            order_id: session.order_id.clone(),
            reply,
            latency_ms: start.elapsed().as_millis() as u64,
        };
        drop(session);

        tracing::info!(
            session_id = %outcome.session_id,
            state = outcome.state.as_str(),
            latency_ms = outcome.latency_ms,
            "turn processed"
        );

        self.turn_log.record(TurnRecord {
            ts_ms: now_ms(),
            session_id: outcome.session_id.clone(),
            state: outcome.state,
            order_id: outcome.order_id.clone(),
            user_message: message.to_string(),
            reply: outcome.reply.clone(),
            latency_ms: outcome.latency_ms,
        });

        outcome
    }

    /// Discard all state for `session_id`. Unknown ids succeed as a no-op.
    pub async fn reset(&self, session_id: &str) {
        self.store.remove(session_id).await;
        tracing::info!(session_id, "session reset");
    }

    /// Number of live sessions.
    pub async fn session_count(&self) -> usize {
        self.store.len().await
    }
}
