//! LLM client port
//!
//! Defines the interface for one blocking generation round trip. The agent
//! issues exactly one [`LlmClient::generate`] call per step and consumes only
//! the returned text; token structure and streaming are the adapter's
//! business.

use async_trait::async_trait;
use std::time::Duration;
use thiserror::Error;
use tokio_util::sync::CancellationToken;

/// Errors that can occur during LLM client operations
#[derive(Error, Debug)]
pub enum LlmClientError {
    #[error("Connection error: {0}")]
    ConnectionError(String),

    #[error("Request failed: {0}")]
    RequestFailed(String),

    #[error("Generation cancelled")]
    Cancelled,
}

/// Fixed generation options sent with every request.
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationOptions {
    /// Context window size in tokens
    pub num_ctx: u32,
    pub temperature: f32,
    pub top_p: f32,
    /// Cap on generated tokens; provider default when `None`
    pub max_tokens: Option<u32>,
    /// Token streaming; unused by the agent loop
    pub stream: bool,
}

impl Default for GenerationOptions {
    fn default() -> Self {
        Self {
            num_ctx: 4096,
            temperature: 0.2,
            top_p: 0.95,
            max_tokens: None,
            stream: false,
        }
    }
}

/// One generation request: a model name, the full prompt, and options.
#[derive(Debug, Clone)]
pub struct LlmRequest {
    pub model: String,
    pub prompt: String,
    pub options: GenerationOptions,
}

impl LlmRequest {
    pub fn new(model: impl Into<String>, prompt: impl Into<String>) -> Self {
        Self {
            model: model.into(),
            prompt: prompt.into(),
            options: GenerationOptions::default(),
        }
    }
}

/// Raw text produced by one generation round trip.
#[derive(Debug, Clone)]
pub struct LlmResponse {
    pub raw_text: String,
    pub duration: Duration,
}

/// Client for LLM generation
///
/// This port defines how the application layer talks to a text-generating
/// model. Implementations (adapters) live in the infrastructure layer.
#[async_trait]
pub trait LlmClient: Send + Sync {
    /// Perform one blocking generation round trip.
    async fn generate(
        &self,
        request: &LlmRequest,
        cancel: &CancellationToken,
    ) -> Result<LlmResponse, LlmClientError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_options() {
        let options = GenerationOptions::default();
        assert_eq!(options.num_ctx, 4096);
        assert_eq!(options.temperature, 0.2);
        assert_eq!(options.top_p, 0.95);
        assert_eq!(options.max_tokens, None);
        assert!(!options.stream);
    }
}
