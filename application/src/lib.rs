//! Application layer for relay
//!
//! This crate contains the agent orchestration use case and the port
//! definitions its collaborators implement. It depends only on the domain
//! layer.

pub mod agent;
pub mod ports;
pub mod tool;

// Re-export commonly used types
pub use agent::{Agent, AgentConfig, AgentError, AgentResult, MAX_STEPS};
pub use ports::{
    llm_client::{GenerationOptions, LlmClient, LlmClientError, LlmRequest, LlmResponse},
    tool::Tool,
};
pub use tool::{
    registry::{RegistryError, ToolRegistry},
    trace::ToolCallTrace,
};
