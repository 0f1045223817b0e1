//! Generation backend abstraction
//!
//! Provides a common interface to the text-generation backend so the dialog
//! engine never depends on a concrete client. Routing never consumes
//! generator output; implementations supply reply phrasing only.

mod error;
mod ollama;

pub use error::{LlmError, LlmErrorKind};
pub use ollama::OllamaService;

use async_trait::async_trait;
use std::sync::Arc;

/// Sampling temperature used for reply phrasing.
pub const DEFAULT_TEMPERATURE: f64 = 0.2;

/// Common interface for generation backends
#[async_trait]
pub trait LlmService: Send + Sync {
    /// Generate text for `prompt`.
    ///
    /// Implementations bound the call with a timeout and report every
    /// failure as an [`LlmError`]; they never panic on transport problems.
    async fn generate(&self, prompt: &str, temperature: f64) -> Result<String, LlmError>;

    /// Get the model ID
    fn model_id(&self) -> &str;
}

/// Logging wrapper for generation backends
pub struct LoggingService {
    inner: Arc<dyn LlmService>,
    model_id: String,
}

impl LoggingService {
    pub fn new(inner: Arc<dyn LlmService>) -> Self {
        let model_id = inner.model_id().to_string();
        Self { inner, model_id }
    }
}

#[async_trait]
impl LlmService for LoggingService {
    async fn generate(&self, prompt: &str, temperature: f64) -> Result<String, LlmError> {
        let start = std::time::Instant::now();
        let result = self.inner.generate(prompt, temperature).await;
        let duration = start.elapsed();

        match &result {
            Ok(reply) => {
                tracing::info!(
                    model = %self.model_id,
                    duration_ms = %duration.as_millis(),
                    reply_chars = reply.chars().count(),
                    "generation request completed"
                );
            }
            Err(e) => {
                tracing::error!(
                    model = %self.model_id,
                    duration_ms = %duration.as_millis(),
                    kind = ?e.kind,
                    error = %e.message,
                    "generation request failed"
                );
            }
        }

        result
    }

    fn model_id(&self) -> &str {
        &self.model_id
    }
}
