//! HTTP request handlers

use super::types::{ChatRequest, ChatResponse, HealthResponse, ResetResponse};
use super::AppState;
use axum::{
    extract::{Path, State},
    routing::{get, post},
    Json, Router,
};

/// Create the API router
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/chat", post(chat))
        .route("/reset/:session_id", post(reset))
        .with_state(state)
}

/// Liveness probe, also reporting which model phrases replies.
async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        ok: true,
        model: state.runtime.model_id().to_string(),
    })
}

/// Advance one session by one turn.
///
/// Always answers 200: generation failures surface as diagnostic reply text,
/// not as HTTP errors.
async fn chat(State(state): State<AppState>, Json(req): Json<ChatRequest>) -> Json<ChatResponse> {
    let outcome = state.runtime.process_turn(&req.session_id, &req.message).await;
    Json(ChatResponse {
        session_id: outcome.session_id,
        state: outcome.state,
        order_id: outcome.order_id,
        reply: outcome.reply,
        latency_ms: outcome.latency_ms,
    })
}

/// Forget a session so its next turn starts from scratch.
async fn reset(
    State(state): State<AppState>,
    Path(session_id): Path<String>,
) -> Json<ResetResponse> {
    state.runtime.reset(&session_id).await;
    Json(ResetResponse {
        session_id,
        reset: true,
    })
}
