//! Model-facing JSON protocol
//!
//! The model must answer every step with exactly one JSON object in one of
//! two shapes:
//!
//! ```json
//! {"type":"plain_text","content":"..."}
//! {"type":"tool_call","toolId":"<domain.name@major>","action":"<action>","arguments":{...}}
//! ```
//!
//! The shapes are a binding wire contract with the prompt preamble rendered
//! by [`crate::prompt::AgentPromptTemplate`] and must not drift from it.

mod message;
mod parser;

pub use message::LlmMessage;
pub use parser::parse_llm_message;
