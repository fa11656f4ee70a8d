//! Ollama LLM client adapter
//!
//! One blocking round trip per generate call: POST `/api/generate` with
//! `stream: false`, then read the `response` field out of the JSON
//! envelope. When the envelope does not parse (e.g. a proxy error page),
//! the raw body is returned as-is and left for the agent's parse fallback.

use async_trait::async_trait;
use relay_application::{LlmClient, LlmClientError, LlmRequest, LlmResponse};
use serde::Serialize;
use std::time::Instant;
use tokio_util::sync::CancellationToken;
use tracing::debug;

/// LLM client for an Ollama server.
pub struct OllamaLlmClient {
    client: reqwest::Client,
    base_url: String,
}

#[derive(Serialize)]
struct GeneratePayload<'a> {
    model: &'a str,
    prompt: &'a str,
    stream: bool,
    options: GeneratePayloadOptions,
}

#[derive(Serialize)]
struct GeneratePayloadOptions {
    num_ctx: u32,
    temperature: f32,
    top_p: f32,
    #[serde(skip_serializing_if = "Option::is_none")]
    num_predict: Option<u32>,
}

impl OllamaLlmClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(reqwest::Client::new(), base_url)
    }

    pub fn with_client(client: reqwest::Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { client, base_url }
    }

    async fn request(&self, request: &LlmRequest) -> Result<String, LlmClientError> {
        let payload = GeneratePayload {
            model: &request.model,
            prompt: &request.prompt,
            stream: request.options.stream,
            options: GeneratePayloadOptions {
                num_ctx: request.options.num_ctx,
                temperature: request.options.temperature,
                top_p: request.options.top_p,
                num_predict: request.options.max_tokens,
            },
        };

        let url = format!("{}/api/generate", self.base_url);
        debug!(url = %url, model = %request.model, "Sending generate request");

        let response = self
            .client
            .post(&url)
            .json(&payload)
            .send()
            .await
            .map_err(|e| LlmClientError::ConnectionError(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(LlmClientError::RequestFailed(format!(
                "HTTP {} from {}",
                status.as_u16(),
                url
            )));
        }

        let body = response
            .text()
            .await
            .map_err(|e| LlmClientError::RequestFailed(e.to_string()))?;

        Ok(extract_response_text(&body))
    }
}

#[async_trait]
impl LlmClient for OllamaLlmClient {
    async fn generate(
        &self,
        request: &LlmRequest,
        cancel: &CancellationToken,
    ) -> Result<LlmResponse, LlmClientError> {
        let started = Instant::now();

        let raw_text = tokio::select! {
            biased;
            _ = cancel.cancelled() => return Err(LlmClientError::Cancelled),
            result = self.request(request) => result?,
        };

        Ok(LlmResponse {
            raw_text,
            duration: started.elapsed(),
        })
    }
}

/// Pull the `response` string field out of the Ollama envelope, falling
/// back to the raw body when the envelope does not match.
fn extract_response_text(body: &str) -> String {
    match serde_json::from_str::<serde_json::Value>(body) {
        Ok(envelope) => envelope
            .get("response")
            .and_then(|r| r.as_str())
            .map(str::to_string)
            .unwrap_or_else(|| body.to_string()),
        Err(_) => body.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use relay_application::GenerationOptions;

    #[test]
    fn test_extract_response_text_from_envelope() {
        let body = r#"{"model":"llama3","response":"hello","done":true}"#;
        assert_eq!(extract_response_text(body), "hello");
    }

    #[test]
    fn test_extract_response_text_falls_back_on_missing_field() {
        let body = r#"{"error":"model not found"}"#;
        assert_eq!(extract_response_text(body), body);
    }

    #[test]
    fn test_extract_response_text_falls_back_on_non_json() {
        assert_eq!(extract_response_text("<html>busy</html>"), "<html>busy</html>");
    }

    #[test]
    fn test_payload_shape() {
        let options = GenerationOptions::default();
        let payload = GeneratePayload {
            model: "llama3",
            prompt: "hi",
            stream: options.stream,
            options: GeneratePayloadOptions {
                num_ctx: options.num_ctx,
                temperature: options.temperature,
                top_p: options.top_p,
                num_predict: options.max_tokens,
            },
        };

        let value = serde_json::to_value(&payload).unwrap();
        assert_eq!(value["model"], "llama3");
        assert_eq!(value["stream"], false);
        assert_eq!(value["options"]["num_ctx"], 4096);
        // num_predict is omitted when unset, so Ollama applies its default
        assert!(value["options"].get("num_predict").is_none());
    }

    #[test]
    fn test_base_url_trailing_slash_is_trimmed() {
        let client = OllamaLlmClient::new("http://localhost:11434/");
        assert_eq!(client.base_url, "http://localhost:11434");
    }
}
