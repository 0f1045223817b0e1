//! API request and response types

use crate::dialog::DialogState;
use serde::{Deserialize, Serialize};

/// Request to advance a session by one turn
#[derive(Debug, Serialize, Deserialize)]
pub struct ChatRequest {
    pub session_id: String,
    pub message: String,
}

/// Response for a processed turn
#[derive(Debug, Serialize, Deserialize)]
pub struct ChatResponse {
    pub session_id: String,
    pub state: DialogState,
    pub order_id: Option<String>,
    pub reply: String,
    pub latency_ms: u64,
}

/// Response for session reset
#[derive(Debug, Serialize)]
pub struct ResetResponse {
    pub session_id: String,
    pub reset: bool,
}

/// Response for the health probe
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub ok: bool,
    pub model: String,
}
