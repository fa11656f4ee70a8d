//! Parsing of raw model output into [`LlmMessage`]
//!
//! Models ignore instructions often enough that every structural assumption
//! here is checked; any mismatch yields `None` and the caller falls back to
//! treating the raw text as the answer.

use super::message::LlmMessage;
use crate::tool::{action::ActionName, id::ToolId};

/// Parse one step's raw output into a typed [`LlmMessage`].
///
/// The raw text must be a single JSON object with a string field `type`
/// equal to `plain_text` or `tool_call`; required fields of the matched
/// shape must be present with the right JSON types. Extra text around the
/// JSON object, an unknown `type`, a mistyped field, or an invalid
/// `toolId`/`action` all yield `None`.
pub fn parse_llm_message(raw_text: &str) -> Option<LlmMessage> {
    let root: serde_json::Value = serde_json::from_str(raw_text).ok()?;
    let object = root.as_object()?;

    match object.get("type")?.as_str()? {
        "plain_text" => {
            let content = object.get("content")?.as_str()?;
            Some(LlmMessage::PlainText {
                content: content.to_string(),
            })
        }
        "tool_call" => {
            let tool_id = ToolId::parse(object.get("toolId")?.as_str()?).ok()?;
            let action = ActionName::parse(object.get("action")?.as_str()?).ok()?;
            let arguments = object.get("arguments")?.clone();
            Some(LlmMessage::ToolCall {
                tool_id,
                action,
                arguments,
            })
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_plain_text() {
        let message = parse_llm_message(r#"{"type":"plain_text","content":"42"}"#).unwrap();
        assert_eq!(
            message,
            LlmMessage::PlainText {
                content: "42".to_string()
            }
        );
    }

    #[test]
    fn test_parse_tool_call() {
        let raw = r#"{"type":"tool_call","toolId":"web.request@1","action":"GET","arguments":{"url":"https://example.com"}}"#;
        match parse_llm_message(raw).unwrap() {
            LlmMessage::ToolCall {
                tool_id,
                action,
                arguments,
            } => {
                assert_eq!(tool_id, ToolId::parse("web.request@1").unwrap());
                // action names are normalized during parsing
                assert_eq!(action.as_str(), "get");
                assert_eq!(arguments, json!({"url": "https://example.com"}));
            }
            other => panic!("expected tool call, got {:?}", other),
        }
    }

    #[test]
    fn test_arguments_may_be_any_json_type() {
        let raw = r#"{"type":"tool_call","toolId":"a.b@1","action":"x","arguments":[1,2]}"#;
        match parse_llm_message(raw).unwrap() {
            LlmMessage::ToolCall { arguments, .. } => assert_eq!(arguments, json!([1, 2])),
            other => panic!("expected tool call, got {:?}", other),
        }
    }

    #[test]
    fn test_rejects_non_json() {
        assert!(parse_llm_message("not json").is_none());
        assert!(parse_llm_message("").is_none());
    }

    #[test]
    fn test_rejects_extra_text_around_object() {
        assert!(parse_llm_message(r#"Sure! {"type":"plain_text","content":"x"}"#).is_none());
    }

    #[test]
    fn test_rejects_unknown_or_missing_type() {
        assert!(parse_llm_message(r#"{"type":"thought","content":"x"}"#).is_none());
        assert!(parse_llm_message(r#"{"content":"x"}"#).is_none());
        assert!(parse_llm_message(r#"{"type":42,"content":"x"}"#).is_none());
        assert!(parse_llm_message(r#"[1,2,3]"#).is_none());
        assert!(parse_llm_message(r#""plain_text""#).is_none());
    }

    #[test]
    fn test_rejects_malformed_required_fields() {
        // plain_text without string content
        assert!(parse_llm_message(r#"{"type":"plain_text"}"#).is_none());
        assert!(parse_llm_message(r#"{"type":"plain_text","content":7}"#).is_none());
        // tool_call with missing pieces
        assert!(
            parse_llm_message(r#"{"type":"tool_call","action":"get","arguments":{}}"#).is_none()
        );
        assert!(
            parse_llm_message(r#"{"type":"tool_call","toolId":"a.b@1","arguments":{}}"#).is_none()
        );
        assert!(
            parse_llm_message(r#"{"type":"tool_call","toolId":"a.b@1","action":"get"}"#).is_none()
        );
        // invalid tool id inside an otherwise well-formed object
        assert!(
            parse_llm_message(
                r#"{"type":"tool_call","toolId":"broken","action":"get","arguments":{}}"#
            )
            .is_none()
        );
        // empty action name
        assert!(
            parse_llm_message(
                r#"{"type":"tool_call","toolId":"a.b@1","action":"","arguments":{}}"#
            )
            .is_none()
        );
    }
}
