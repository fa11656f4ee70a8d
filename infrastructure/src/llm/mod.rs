//! LLM client adapters

mod ollama;

pub use ollama::OllamaLlmClient;
