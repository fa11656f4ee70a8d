//! Infrastructure layer for relay
//!
//! This crate contains adapters that implement the ports defined in the
//! application layer: the Ollama LLM client, the web-request tool, and
//! configuration file loading.

pub mod config;
pub mod llm;
pub mod tools;

// Re-export commonly used types
pub use config::{ConfigLoader, FileConfig, FileLlmConfig, FileWebToolConfig};
pub use llm::OllamaLlmClient;
pub use tools::WebRequestTool;
