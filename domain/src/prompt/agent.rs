//! Prompt templates for the agent loop
//!
//! [`AgentPromptTemplate::step_prompt`] is a pure function of the user task,
//! the accumulated observations, the step counters and the pre-rendered tool
//! catalogue. The protocol preamble it emits is the binding contract the
//! parser in [`crate::protocol`] expects back; keep the two in sync.

use crate::tool::{action::ToolActionSpec, id::ToolId};
use std::fmt::Write;

/// Templates for generating agent prompts
pub struct AgentPromptTemplate;

impl AgentPromptTemplate {
    /// Render the prompt for one step of the agent loop.
    ///
    /// Sections, in order: protocol preamble, step-budget banner, prior
    /// observations (when any), tool catalogue, user task, closing
    /// instruction.
    pub fn step_prompt(
        user_task: &str,
        observations: &[String],
        step: usize,
        max_steps: usize,
        tool_catalogue: &str,
    ) -> String {
        let mut prompt = String::new();

        prompt.push_str(
            "You are an agent. You have tools available. Always respond strictly as JSON in ONE of the following formats:\n",
        );
        prompt.push_str(r#"1) {"type":"plain_text","content":"..."}"#);
        prompt.push('\n');
        prompt.push_str(
            r#"2) {"type":"tool_call","toolId":"<domain.name@major>","action":"<action>","arguments":{...}}"#,
        );
        prompt.push('\n');
        prompt.push_str(
            "Do not include any text outside of JSON. If you need tools, return exactly one tool_call. When you have enough information, return exactly one plain_text.\n\n",
        );

        let _ = writeln!(
            prompt,
            "Step info: You have at most {} steps. This is step {} of {}.",
            max_steps, step, max_steps
        );
        if step >= max_steps {
            prompt.push_str(
                "This is your final step. If you can, produce a {\"type\":\"plain_text\"} answer. Avoid unnecessary tool calls.\n",
            );
        } else {
            let _ = writeln!(
                prompt,
                "Remaining steps after this: {}. Use tools only if necessary.",
                max_steps - step
            );
        }
        prompt.push('\n');

        if !observations.is_empty() {
            prompt.push_str("Context (previous observations):\n");
            for (index, observation) in observations.iter().enumerate() {
                let _ = writeln!(prompt, "#{}) {}", index + 1, observation);
            }
            prompt.push('\n');
            prompt.push_str(
                "Based on the context, decide whether more tool calls are needed or produce the final plain_text answer.\n",
            );
            prompt.push_str(
                "When tool observations provide the necessary data to fully satisfy the User task, return a single {\"type\":\"plain_text\",\"content\":\"...\"} containing only the final answer requested by the user (e.g., extract a specific field like 'Description' instead of dumping the whole payload).\n",
            );
            prompt.push_str(
                "Do not echo the prompt or raw tool output unless explicitly requested. Prefer concise, task-focused results.\n",
            );
            prompt.push_str(
                "If the user task implies multiple sub-steps (analyze, call tool, analyze result, finalize), you may use multiple steps within the limit to achieve this, but the final step MUST be plain_text when sufficient information is available.\n",
            );
        }

        prompt.push_str("Available tools and actions:\n");
        prompt.push_str(tool_catalogue);
        prompt.push('\n');
        let _ = writeln!(prompt, "User task: {}", user_task);
        prompt.push_str("Produce ONE valid JSON according to the protocol.\n");

        prompt
    }

    /// Render one tool's catalogue entry: its id and name, then one line per
    /// declared action with the action's name and summary.
    pub fn catalogue_entry(id: &ToolId, name: &str, actions: &[ToolActionSpec]) -> String {
        let mut entry = String::new();
        let _ = writeln!(entry, "- {}: {}", id, name);
        for action in actions {
            let _ = writeln!(entry, "  * {}: {}", action.name, action.summary);
        }
        entry
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tool::action::ActionName;

    fn catalogue() -> String {
        AgentPromptTemplate::catalogue_entry(
            &ToolId::parse("web.request@1").unwrap(),
            "Web Request",
            &[ToolActionSpec::new(
                ActionName::parse("get").unwrap(),
                "HTTP GET for the specified absolute URL.",
                "{}",
            )],
        )
    }

    #[test]
    fn test_protocol_preamble_is_verbatim() {
        let prompt = AgentPromptTemplate::step_prompt("task", &[], 1, 5, &catalogue());
        assert!(prompt.contains(r#"1) {"type":"plain_text","content":"..."}"#));
        assert!(prompt.contains(
            r#"2) {"type":"tool_call","toolId":"<domain.name@major>","action":"<action>","arguments":{...}}"#
        ));
        assert!(prompt.contains("Do not include any text outside of JSON."));
    }

    #[test]
    fn test_step_banner_non_final() {
        let prompt = AgentPromptTemplate::step_prompt("task", &[], 2, 5, &catalogue());
        assert!(prompt.contains("This is step 2 of 5."));
        assert!(prompt.contains("Remaining steps after this: 3."));
        assert!(!prompt.contains("This is your final step."));
    }

    #[test]
    fn test_step_banner_final() {
        let prompt = AgentPromptTemplate::step_prompt("task", &[], 5, 5, &catalogue());
        assert!(prompt.contains("This is your final step."));
        assert!(!prompt.contains("Remaining steps after this:"));
    }

    #[test]
    fn test_context_block_enumerates_observations() {
        let observations = vec![
            "Observation (tool web.request@1, action get):\nhello".to_string(),
            "Observation (tool web.request@1, action get_json):\n{}".to_string(),
        ];
        let prompt = AgentPromptTemplate::step_prompt("task", &observations, 3, 5, &catalogue());
        assert!(prompt.contains("Context (previous observations):"));
        assert!(prompt.contains("#1) Observation (tool web.request@1, action get):"));
        assert!(prompt.contains("#2) Observation (tool web.request@1, action get_json):"));
        assert!(prompt.contains("the final step MUST be plain_text"));
    }

    #[test]
    fn test_context_block_absent_when_empty() {
        let prompt = AgentPromptTemplate::step_prompt("task", &[], 1, 5, &catalogue());
        assert!(!prompt.contains("Context (previous observations):"));
    }

    #[test]
    fn test_catalogue_and_task_are_rendered() {
        let prompt = AgentPromptTemplate::step_prompt("What is 2+2?", &[], 1, 5, &catalogue());
        assert!(prompt.contains("- web.request@1: Web Request"));
        assert!(prompt.contains("  * get: HTTP GET for the specified absolute URL."));
        assert!(prompt.contains("User task: What is 2+2?"));
        assert!(prompt.contains("Produce ONE valid JSON according to the protocol."));
    }

    #[test]
    fn test_deterministic() {
        let a = AgentPromptTemplate::step_prompt("task", &[], 1, 5, &catalogue());
        let b = AgentPromptTemplate::step_prompt("task", &[], 1, 5, &catalogue());
        assert_eq!(a, b);
    }
}
