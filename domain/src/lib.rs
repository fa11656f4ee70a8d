//! Domain layer for relay
//!
//! This crate contains the core value objects and pure parsing logic.
//! It has no dependencies on infrastructure or async runtimes.
//!
//! # Core Concepts
//!
//! ## Tool identity
//!
//! Every tool capability carries a versioned, namespaced [`ToolId`]
//! (`domain.name@major`) and exposes one or more named actions
//! ([`ActionName`], always lower-cased).
//!
//! ## Model protocol
//!
//! The model answers every step with exactly one JSON object, either a
//! `plain_text` answer or a `tool_call`. [`parse_llm_message`] turns raw
//! model output into a typed [`LlmMessage`]; anything malformed is a parse
//! failure, never a panic.

pub mod core;
pub mod prompt;
pub mod protocol;
pub mod tool;

// Re-export commonly used types
pub use crate::core::error::DomainError;
pub use prompt::AgentPromptTemplate;
pub use protocol::{LlmMessage, parse_llm_message};
pub use tool::{
    action::{ActionName, ToolActionSpec},
    id::ToolId,
    value_objects::{ToolError, ToolErrorCode, ToolResult},
};
