//! deskbot: a session-scoped dialog gateway for IM order inquiries
//!
//! Routes user text through a per-session finite-state flow. Deterministic
//! rules decide every transition; an external generation backend phrases
//! some replies. Each processed turn is appended to a JSONL log.

pub mod api;
pub mod commands;
pub mod config;
pub mod dialog;
pub mod llm;
pub mod runtime;
pub mod store;
pub mod turn_log;
