//! Ollama generation backend

use super::error::LlmError;
use super::LlmService;
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Bound on one generation call, connection setup included.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(60);

/// Client for Ollama's `/api/generate` endpoint.
pub struct OllamaService {
    client: Client,
    url: String,
    model: String,
}

impl OllamaService {
    pub fn new(url: impl Into<String>, model: impl Into<String>) -> Self {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .expect("Failed to create HTTP client");

        Self {
            client,
            url: url.into(),
            model: model.into(),
        }
    }
}

#[async_trait]
impl LlmService for OllamaService {
    async fn generate(&self, prompt: &str, temperature: f64) -> Result<String, LlmError> {
        let request = GenerateRequest {
            model: &self.model,
            prompt,
            stream: false,
            options: GenerateOptions { temperature },
        };

        let response = self
            .client
            .post(&self.url)
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    LlmError::network(format!("request timed out: {e}"))
                } else {
                    LlmError::network(format!("connection failed: {e}"))
                }
            })?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| LlmError::network(format!("failed to read response: {e}")))?;

        if !status.is_success() {
            return Err(LlmError::status(format!("HTTP {status}: {body}")));
        }

        let payload: GenerateResponse = serde_json::from_str(&body)
            .map_err(|e| LlmError::decode(format!("failed to parse response: {e}")))?;

        Ok(payload.response.trim().to_string())
    }

    fn model_id(&self) -> &str {
        &self.model
    }
}

// Ollama API types

#[derive(Debug, Serialize)]
struct GenerateRequest<'a> {
    model: &'a str,
    prompt: &'a str,
    stream: bool,
    options: GenerateOptions,
}

#[derive(Debug, Serialize)]
struct GenerateOptions {
    temperature: f64,
}

#[derive(Debug, Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    response: String,
}
