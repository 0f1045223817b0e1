//! HTTP API for the dialog gateway

mod handlers;
mod types;

pub use handlers::create_router;
pub use types::*;

use crate::runtime::DialogRuntime;
use std::sync::Arc;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub runtime: Arc<DialogRuntime>,
}

impl AppState {
    pub fn new(runtime: Arc<DialogRuntime>) -> Self {
        Self { runtime }
    }
}
