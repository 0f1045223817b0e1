//! Environment-driven configuration

use std::path::PathBuf;

/// Runtime configuration, resolved once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    /// Port the HTTP gateway listens on.
    pub port: u16,
    /// Ollama generate endpoint.
    pub ollama_url: String,
    /// Model identifier sent with every generation call.
    pub model: String,
    /// Path of the JSONL turn log.
    pub log_path: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: 8000,
            ollama_url: "http://localhost:11434/api/generate".to_string(),
            model: "qwen2.5:1.5b".to_string(),
            log_path: PathBuf::from("chat_logs.jsonl"),
        }
    }
}

impl Config {
    /// Build from `DESKBOT_*` environment variables, falling back to
    /// defaults for anything unset or unparseable.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            port: std::env::var("DESKBOT_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(defaults.port),
            ollama_url: std::env::var("DESKBOT_OLLAMA_URL").unwrap_or(defaults.ollama_url),
            model: std::env::var("DESKBOT_MODEL").unwrap_or(defaults.model),
            log_path: std::env::var("DESKBOT_LOG_PATH")
                .map(PathBuf::from)
                .unwrap_or(defaults.log_path),
        }
    }
}
