//! web.request@1 tool: safe HTTP GET against allow-listed hosts
//!
//! Two actions: `get` returns the body as-is with its MIME type, `get_json`
//! additionally requires a JSON Content-Type. Every expected failure mode
//! (bad arguments, policy denial, timeout, upstream mismatch) folds into a
//! structured [`ToolError`]; nothing here panics or leaks transport errors
//! to the agent loop.

use async_trait::async_trait;
use relay_application::Tool;
use relay_domain::{ActionName, ToolActionSpec, ToolError, ToolId, ToolResult};
use std::collections::HashSet;
use tokio_util::sync::CancellationToken;
use tracing::debug;

const GET_SCHEMA: &str = r#"{
  "type": "object",
  "properties": {
    "url": { "type": "string", "description": "Absolute URL (https://...)" }
  },
  "required": ["url"],
  "additionalProperties": false
}"#;

/// Web request tool with a host allow-list.
pub struct WebRequestTool {
    id: ToolId,
    client: reqwest::Client,
    allowed_hosts: HashSet<String>,
    actions: Vec<ToolActionSpec>,
}

impl WebRequestTool {
    pub fn new(
        client: reqwest::Client,
        allowed_hosts: impl IntoIterator<Item = String>,
    ) -> Self {
        let get = ActionName::parse("get").expect("static action name");
        let get_json = ActionName::parse("get_json").expect("static action name");

        Self {
            id: ToolId::new("web", "request", 1),
            client,
            allowed_hosts: allowed_hosts
                .into_iter()
                .map(|host| host.to_lowercase())
                .collect(),
            actions: vec![
                ToolActionSpec::new(
                    get,
                    "HTTP GET for the specified absolute URL. Returns the response body as-is along with MIME type.",
                    GET_SCHEMA,
                ),
                ToolActionSpec::new(
                    get_json,
                    "HTTP GET expecting a JSON response. Validates Content-Type is application/json and returns the response body as JSON; fails if the response is not JSON.",
                    GET_SCHEMA,
                ),
            ],
        }
    }

    async fn fetch(&self, action: &ActionName, url: reqwest::Url) -> ToolResult {
        debug!(url = %url, action = %action, "Executing web request");

        let response = match self
            .client
            .get(url)
            .header("User-Agent", "relay-agent/0.3")
            .header("Accept", "application/json")
            .send()
            .await
        {
            Ok(response) => response,
            Err(e) if e.is_timeout() => {
                return ToolResult::failure(ToolError::timeout(format!(
                    "The request timed out: {}",
                    e
                )));
            }
            Err(e) => {
                return ToolResult::failure(ToolError::internal_error(format!(
                    "HTTP error: {}",
                    e
                )));
            }
        };

        let mime = response
            .headers()
            .get(reqwest::header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.split(';').next())
            .unwrap_or("application/octet-stream")
            .to_string();

        let bytes = match response.bytes().await {
            Ok(bytes) => bytes.to_vec(),
            Err(e) => {
                return ToolResult::failure(ToolError::internal_error(format!(
                    "Failed to read response body: {}",
                    e
                )));
            }
        };

        if action.as_str() == "get_json" && !mime.to_lowercase().contains("json") {
            return ToolResult::failure_with_payload(
                ToolError::upstream_error(format!(
                    "Expected a JSON response, but received content of type '{}'",
                    mime
                )),
                mime,
                bytes,
            );
        }

        ToolResult::success(mime, bytes)
    }
}

#[async_trait]
impl Tool for WebRequestTool {
    fn id(&self) -> &ToolId {
        &self.id
    }

    fn name(&self) -> &str {
        "Web Request"
    }

    fn description(&self) -> &str {
        "Performs safe web requests (HTTP GET) to allow-listed hosts. \
         Supports raw and JSON workflows with content-type validation, returns the response body \
         and MIME type, and provides structured errors for timeouts, upstream failures, and \
         policy violations."
    }

    fn actions(&self) -> &[ToolActionSpec] {
        &self.actions
    }

    async fn execute(
        &self,
        action: &ActionName,
        arguments: &serde_json::Value,
        cancel: &CancellationToken,
    ) -> ToolResult {
        if !self.actions.iter().any(|spec| &spec.name == action) {
            return ToolResult::failure(ToolError::unsupported(format!(
                "Action '{}' is not supported by this tool",
                action
            )));
        }

        let Some(url) = arguments.get("url").and_then(|v| v.as_str()) else {
            return ToolResult::failure(ToolError::validation_failed(
                "Expected string argument 'url'",
            ));
        };

        let parsed = match reqwest::Url::parse(url) {
            Ok(parsed) if parsed.scheme() == "http" || parsed.scheme() == "https" => parsed,
            _ => {
                return ToolResult::failure(ToolError::validation_failed(format!(
                    "Invalid URL '{}'",
                    url
                )));
            }
        };

        let Some(host) = parsed.host_str().map(str::to_lowercase) else {
            return ToolResult::failure(ToolError::validation_failed(format!(
                "Invalid URL '{}'",
                url
            )));
        };

        if !self.allowed_hosts.contains(&host) {
            return ToolResult::failure(ToolError::access_denied(format!(
                "Access to host '{}' is denied by policy",
                host
            )));
        }

        tokio::select! {
            biased;
            _ = cancel.cancelled() => ToolResult::failure(ToolError::timeout(
                "The request was cancelled",
            )),
            result = self.fetch(action, parsed) => result,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use relay_domain::ToolErrorCode;
    use serde_json::json;

    fn tool() -> WebRequestTool {
        WebRequestTool::new(
            reqwest::Client::new(),
            vec!["API.Example.com".to_string()],
        )
    }

    fn action(name: &str) -> ActionName {
        ActionName::parse(name).unwrap()
    }

    #[test]
    fn test_identity_and_actions() {
        let tool = tool();
        assert_eq!(tool.id().canonical(), "web.request@1");
        assert_eq!(tool.name(), "Web Request");
        let names: Vec<&str> = tool.actions().iter().map(|a| a.name.as_str()).collect();
        assert_eq!(names, vec!["get", "get_json"]);
    }

    #[tokio::test]
    async fn test_unsupported_action() {
        let result = tool()
            .execute(
                &action("post"),
                &json!({"url": "https://api.example.com"}),
                &CancellationToken::new(),
            )
            .await;

        assert_eq!(result.error().unwrap().code, ToolErrorCode::Unsupported);
    }

    #[tokio::test]
    async fn test_missing_url_argument() {
        let result = tool()
            .execute(&action("get"), &json!({}), &CancellationToken::new())
            .await;

        assert_eq!(
            result.error().unwrap().code,
            ToolErrorCode::ValidationFailed
        );
    }

    #[tokio::test]
    async fn test_non_string_url_argument() {
        let result = tool()
            .execute(&action("get"), &json!({"url": 7}), &CancellationToken::new())
            .await;

        assert_eq!(
            result.error().unwrap().code,
            ToolErrorCode::ValidationFailed
        );
    }

    #[tokio::test]
    async fn test_invalid_url() {
        for url in ["not a url", "ftp://example.com/file", "/relative/path"] {
            let result = tool()
                .execute(&action("get"), &json!({"url": url}), &CancellationToken::new())
                .await;

            assert_eq!(
                result.error().unwrap().code,
                ToolErrorCode::ValidationFailed,
                "should reject {:?}",
                url
            );
        }
    }

    #[tokio::test]
    async fn test_host_not_on_allow_list() {
        let result = tool()
            .execute(
                &action("get"),
                &json!({"url": "https://evil.example.net/data"}),
                &CancellationToken::new(),
            )
            .await;

        let error = result.error().unwrap();
        assert_eq!(error.code, ToolErrorCode::AccessDenied);
        assert!(error.message.contains("evil.example.net"));
    }

    #[tokio::test]
    async fn test_allow_list_is_case_insensitive() {
        // Allowed host configured as API.Example.com; URL host matches after folding,
        // so the call proceeds past policy and is stopped by the cancelled token.
        let token = CancellationToken::new();
        token.cancel();

        let result = tool()
            .execute(
                &action("get"),
                &json!({"url": "https://api.example.com/data"}),
                &token,
            )
            .await;

        assert_eq!(result.error().unwrap().code, ToolErrorCode::Timeout);
    }
}
