//! Record of the most recent tool invocation attempt within a run

use relay_domain::{ActionName, ToolId, ToolResult};
use serde::Serialize;

/// One tool-call attempt: the request and its result, success or failure.
///
/// Created exactly once per attempt by the agent loop and surfaced on the
/// terminal [`crate::agent::AgentResult`] for observability.
#[derive(Debug, Clone, Serialize)]
pub struct ToolCallTrace {
    pub tool_id: ToolId,
    pub action: ActionName,
    pub arguments: serde_json::Value,
    pub result: ToolResult,
}

impl ToolCallTrace {
    pub fn new(
        tool_id: ToolId,
        action: ActionName,
        arguments: serde_json::Value,
        result: ToolResult,
    ) -> Self {
        Self {
            tool_id,
            action,
            arguments,
            result,
        }
    }
}
