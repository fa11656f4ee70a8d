//! Agent orchestration use case
//!
//! Drives the step loop: render the step prompt, call the LLM, parse the
//! reply, then either answer, dispatch a tool and loop, or fail. The loop
//! is strictly sequential within a run and hard-capped at [`MAX_STEPS`]
//! generation calls.
//!
//! Every protocol-level outcome is an [`AgentResult`]; [`AgentError`] is
//! reserved for faults outside the state machine (transport failure,
//! cancellation), which propagate unmodified.

use crate::ports::llm_client::{GenerationOptions, LlmClient, LlmClientError, LlmRequest};
use crate::tool::registry::ToolRegistry;
use crate::tool::trace::ToolCallTrace;
use relay_domain::{AgentPromptTemplate, LlmMessage, parse_llm_message};
use serde::Serialize;
use std::sync::Arc;
use thiserror::Error;
use tokio_util::sync::CancellationToken;
use tracing::{info, warn};

/// Hard cap on steps per run. Step `MAX_STEPS` is the final one.
pub const MAX_STEPS: usize = 5;

/// Tunables for the agent loop.
#[derive(Debug, Clone, Default)]
pub struct AgentConfig {
    /// Keep the most recent tool-call trace on the step-limit outcome.
    /// Off by default: an exhausted run reports no trace.
    pub retain_trace_on_step_limit: bool,
    /// Generation options sent with every LLM request
    pub options: GenerationOptions,
}

/// Faults outside the run state machine.
#[derive(Error, Debug)]
pub enum AgentError {
    #[error("LLM request failed: {0}")]
    Llm(#[from] LlmClientError),

    #[error("Operation cancelled")]
    Cancelled,
}

impl AgentError {
    pub fn is_cancelled(&self) -> bool {
        matches!(self, AgentError::Cancelled)
    }
}

/// Terminal output of one run, immutable once produced.
#[derive(Debug, Clone, Serialize)]
pub struct AgentResult {
    /// Final answer text, or a human-readable failure message
    pub payload: String,
    /// Most recent tool invocation attempt, when one is reported
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_trace: Option<ToolCallTrace>,
    pub is_success: bool,
    /// Machine-readable failure tag (e.g. "ToolNotFound")
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl AgentResult {
    fn success(payload: impl Into<String>, last_trace: Option<ToolCallTrace>) -> Self {
        Self {
            payload: payload.into(),
            last_trace,
            is_success: true,
            error: None,
        }
    }

    fn failure(
        payload: impl Into<String>,
        last_trace: Option<ToolCallTrace>,
        error: impl Into<String>,
    ) -> Self {
        Self {
            payload: payload.into(),
            last_trace,
            is_success: false,
            error: Some(error.into()),
        }
    }
}

/// The agent orchestrator.
///
/// Holds the LLM client, the immutable tool registry, and the tool
/// catalogue text precomputed once from the registry snapshot. Safe to
/// share across concurrent runs; per-run state lives on the stack of
/// [`Agent::run`].
pub struct Agent {
    llm: Arc<dyn LlmClient>,
    registry: Arc<ToolRegistry>,
    tool_catalogue: String,
    config: AgentConfig,
}

impl Agent {
    pub fn new(llm: Arc<dyn LlmClient>, registry: Arc<ToolRegistry>) -> Self {
        Self::with_config(llm, registry, AgentConfig::default())
    }

    pub fn with_config(
        llm: Arc<dyn LlmClient>,
        registry: Arc<ToolRegistry>,
        config: AgentConfig,
    ) -> Self {
        let tool_catalogue = registry
            .all()
            .iter()
            .map(|tool| AgentPromptTemplate::catalogue_entry(tool.id(), tool.name(), tool.actions()))
            .collect::<String>();

        Self {
            llm,
            registry,
            tool_catalogue,
            config,
        }
    }

    /// Run the orchestration loop for a single user request.
    pub async fn run(
        &self,
        user_prompt: &str,
        model: &str,
        cancel: &CancellationToken,
    ) -> Result<AgentResult, AgentError> {
        let mut context: Vec<String> = Vec::new();
        let mut last_trace: Option<ToolCallTrace> = None;

        for step in 1..=MAX_STEPS {
            if cancel.is_cancelled() {
                return Err(AgentError::Cancelled);
            }

            let prompt = AgentPromptTemplate::step_prompt(
                user_prompt,
                &context,
                step,
                MAX_STEPS,
                &self.tool_catalogue,
            );
            let request = LlmRequest {
                model: model.to_string(),
                prompt,
                options: self.config.options.clone(),
            };

            let response = self.llm.generate(&request, cancel).await.map_err(|e| match e {
                LlmClientError::Cancelled => AgentError::Cancelled,
                other => AgentError::Llm(other),
            })?;

            info!(
                step,
                duration_ms = response.duration.as_millis() as u64,
                response = %response.raw_text,
                "LLM response"
            );

            // Non-protocol output is treated as the answer itself, not an error.
            let Some(message) = parse_llm_message(&response.raw_text) else {
                return Ok(AgentResult::success(response.raw_text, last_trace));
            };

            match message {
                LlmMessage::PlainText { content } => {
                    return Ok(AgentResult::success(content, last_trace));
                }
                LlmMessage::ToolCall {
                    tool_id,
                    action,
                    arguments,
                } => {
                    let Some(tool) = self.registry.resolve(&tool_id) else {
                        warn!(step, tool_id = %tool_id, "Unknown tool requested");
                        return Ok(AgentResult::failure(
                            format!("Tool with id '{}' is not found", tool_id),
                            None,
                            "ToolNotFound",
                        ));
                    };

                    let Some(spec) = tool.actions().iter().find(|a| a.name == action) else {
                        warn!(step, tool_id = %tool_id, action = %action, "Unsupported action requested");
                        return Ok(AgentResult::failure(
                            format!(
                                "Action '{}' is not supported by tool '{}'",
                                action, tool_id
                            ),
                            last_trace,
                            "ActionNotSupported",
                        ));
                    };

                    info!(step, tool_id = %tool_id, action = %spec.name, args = %arguments, "Tool call");

                    let result = tool.execute(&spec.name, &arguments, cancel).await;

                    info!(
                        step,
                        success = result.is_success(),
                        bytes = result.data().map(|d| d.len()).unwrap_or(0),
                        "Tool result"
                    );

                    // Record the attempt unconditionally, success or failure.
                    last_trace = Some(ToolCallTrace::new(
                        tool_id.clone(),
                        action.clone(),
                        arguments.clone(),
                        result.clone(),
                    ));

                    match (result.is_success(), result.data()) {
                        (true, Some(data)) => {
                            let text = String::from_utf8_lossy(data);
                            context.push(format!(
                                "Observation (tool {}, action {}):\n{}",
                                tool_id, action, text
                            ));
                            // Consumes one unit of the step budget.
                        }
                        _ => {
                            let error = match result.error() {
                                Some(e) => format!("{}: {}", e.code, e.message),
                                None => "UnexpectedToolError".to_string(),
                            };
                            return Ok(AgentResult::failure(
                                format!("Tool error: {}", error),
                                last_trace,
                                error,
                            ));
                        }
                    }
                }
            }
        }

        let retained = if self.config.retain_trace_on_step_limit {
            last_trace
        } else {
            None
        };
        Ok(AgentResult::failure(
            format!(
                "Step limit reached ({}). Unable to complete the task in allotted steps.",
                MAX_STEPS
            ),
            retained,
            "StepLimitExceeded",
        ))
    }
}
