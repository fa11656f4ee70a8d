//! Prompt rendering

mod agent;

pub use agent::AgentPromptTemplate;
