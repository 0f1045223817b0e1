//! Append-only JSONL log of processed turns

use crate::dialog::DialogState;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tokio::fs::OpenOptions;
use tokio::io::AsyncWriteExt;
use tokio::sync::mpsc;

/// Milliseconds since the Unix epoch.
pub fn now_ms() -> i64 {
    chrono::Utc::now().timestamp_millis()
}

/// One line of the turn log.
///
/// `user_message` is the text as received, before trimming; `state` and
/// `order_id` are the values after the turn.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TurnRecord {
    pub ts_ms: i64,
    pub session_id: String,
    pub state: DialogState,
    pub order_id: Option<String>,
    pub user_message: String,
    pub reply: String,
    pub latency_ms: u64,
}

/// Fire-and-forget sink for turn records.
///
/// Records flow through an unbounded channel to a single writer task that
/// appends one JSON line per record, so concurrent turns never interleave
/// partial lines. Write failures stay inside the writer: the recording side
/// cannot observe them and a turn's response is never affected.
#[derive(Clone)]
pub struct TurnLog {
    tx: mpsc::UnboundedSender<TurnRecord>,
}

impl TurnLog {
    /// Spawn the writer task appending to `path`.
    pub fn spawn(path: impl Into<PathBuf>) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        tokio::spawn(writer_task(path.into(), rx));
        Self { tx }
    }

    /// Queue one record. Never fails; a closed writer drops the record.
    pub fn record(&self, record: TurnRecord) {
        let _ = self.tx.send(record);
    }
}

async fn writer_task(path: PathBuf, mut rx: mpsc::UnboundedReceiver<TurnRecord>) {
    while let Some(record) = rx.recv().await {
        if let Err(err) = append_line(&path, &record).await {
            tracing::warn!(
                path = %path.display(),
                error = %err,
                "failed to append turn record"
            );
        }
    }
}

/// Append `record` as one JSON line.
///
/// The file is opened per record, so a path that becomes writable later
/// starts receiving records without a restart.
async fn append_line(path: &Path, record: &TurnRecord) -> std::io::Result<()> {
    let mut line = serde_json::to_string(record).map_err(std::io::Error::other)?;
    line.push('\n');

    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .await?;
    file.write_all(line.as_bytes()).await?;
    Ok(())
}
