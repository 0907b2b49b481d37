//! Ollama generate API client
//!
//! One blocking POST per fill request. Blocking is deliberate: the call runs
//! on the worker thread and the protocol is a single round trip with no
//! streaming, no retry and no timeout.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Default generate endpoint of a local Ollama install
pub const DEFAULT_URL: &str = "http://localhost:11434/api/generate";

/// Sampling temperature sent with every fill request
const TEMPERATURE: f64 = 0.9;

/// Errors that can occur during a fill round trip
#[derive(Debug, Error)]
pub enum OllamaError {
    /// Transport-level failure (server down, DNS, connection reset)
    #[error("Network error: {0}")]
    Network(String),

    /// Server answered with a non-success status
    #[error("API error ({code}): {message}")]
    Api { code: u16, message: String },

    /// Response body was not the expected JSON shape
    #[error("Parse error: {0}")]
    Parse(String),
}

/// Anything that can turn a prompt into completion text.
///
/// The worker is generic over this so tests can run it against a canned
/// backend instead of a live server.
pub trait Generate {
    fn generate(&self, prompt: &str, stop: &[String]) -> Result<String, OllamaError>;
}

/// Client for one configured Ollama endpoint and model.
#[derive(Debug, Clone)]
pub struct OllamaClient {
    url: String,
    model: String,
}

#[derive(Debug, Serialize)]
struct GenerateRequest<'a> {
    model: &'a str,
    prompt: &'a str,
    options: GenerateOptions<'a>,
    raw: bool,
    stream: bool,
}

#[derive(Debug, Serialize)]
struct GenerateOptions<'a> {
    stop: &'a [String],
    temperature: f64,
}

#[derive(Debug, Deserialize)]
struct GenerateResponse {
    response: String,
}

impl OllamaClient {
    pub fn new(url: String, model: String) -> Self {
        Self { url, model }
    }

    pub fn from_config(config: &crate::config::ServerConfig) -> Self {
        Self::new(config.url.clone(), config.model.clone())
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    fn request_body(&self, prompt: &str, stop: &[String]) -> Result<String, OllamaError> {
        let request = GenerateRequest {
            model: &self.model,
            prompt,
            options: GenerateOptions {
                stop,
                temperature: TEMPERATURE,
            },
            // raw bypasses the server-side chat template; the FIM prompt is
            // already in the model's native format
            raw: true,
            stream: false,
        };

        serde_json::to_string(&request).map_err(|e| OllamaError::Parse(e.to_string()))
    }
}

impl Generate for OllamaClient {
    fn generate(&self, prompt: &str, stop: &[String]) -> Result<String, OllamaError> {
        let body = self.request_body(prompt, stop)?;

        let response = ureq::post(&self.url)
            .set("content-type", "application/json")
            .send_string(&body)
            .map_err(|e| match e {
                ureq::Error::Status(code, response) => {
                    let message = response
                        .into_string()
                        .unwrap_or_else(|_| "Unknown error".to_string());
                    OllamaError::Api { code, message }
                }
                ureq::Error::Transport(t) => OllamaError::Network(t.to_string()),
            })?;

        let text = response
            .into_string()
            .map_err(|e| OllamaError::Network(e.to_string()))?;

        parse_generate_response(&text)
    }
}

/// Extract the completion text from a generate response body.
fn parse_generate_response(body: &str) -> Result<String, OllamaError> {
    let parsed: GenerateResponse =
        serde_json::from_str(body).map_err(|e| OllamaError::Parse(e.to_string()))?;
    Ok(parsed.response)
}

#[cfg(test)]
#[path = "ollama_tests.rs"]
mod ollama_tests;
