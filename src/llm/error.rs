//! Generation-call error types

use thiserror::Error;

/// Generation failure with classification
///
/// These never escape the dialog engine as errors; they degrade into tagged
/// diagnostic reply text via [`LlmError::diagnostic`].
#[derive(Debug, Clone, Error)]
#[error("{message}")]
pub struct LlmError {
    pub kind: LlmErrorKind,
    pub message: String,
}

impl LlmError {
    pub fn new(kind: LlmErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    pub fn network(message: impl Into<String>) -> Self {
        Self::new(LlmErrorKind::Network, message)
    }

    pub fn status(message: impl Into<String>) -> Self {
        Self::new(LlmErrorKind::Status, message)
    }

    pub fn decode(message: impl Into<String>) -> Self {
        Self::new(LlmErrorKind::Decode, message)
    }

    /// Render as user-visible reply text.
    ///
    /// The `[ERROR]` tag keeps failure replies distinguishable from genuine
    /// model output, and connectivity failures get their own wording.
    pub fn diagnostic(&self) -> String {
        match self.kind {
            LlmErrorKind::Network => format!("[ERROR] 无法连接到 Ollama：{}", self.message),
            LlmErrorKind::Status | LlmErrorKind::Decode => {
                format!("[ERROR] 调用失败：{}", self.message)
            }
        }
    }
}

/// Error classification for diagnostics
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LlmErrorKind {
    /// Backend unreachable: connect failure, timeout, dropped connection
    Network,
    /// Backend answered with a non-success HTTP status
    Status,
    /// Backend payload could not be decoded
    Decode,
}
