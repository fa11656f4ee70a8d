//! Typed decision parsed from one step's raw model output

use crate::tool::{action::ActionName, id::ToolId};

/// One step's decision from the model: answer now, or call a tool.
///
/// Produced only by [`super::parse_llm_message`]; an unrecognized `type`
/// tag never becomes a third variant, it is a parse failure.
#[derive(Debug, Clone, PartialEq)]
pub enum LlmMessage {
    /// Final answer for the user
    PlainText { content: String },
    /// Request to invoke one tool action with opaque JSON arguments
    ToolCall {
        tool_id: ToolId,
        action: ActionName,
        arguments: serde_json::Value,
    },
}
