//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.

use serde::{Deserialize, Serialize};

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// LLM backend settings
    pub llm: FileLlmConfig,
    /// Tool settings
    pub tools: FileToolsConfig,
}

/// `[llm]` section
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileLlmConfig {
    /// Backend kind; only "ollama" is currently supported
    pub provider: String,
    pub base_url: String,
    /// Model used when the request does not name one
    pub model: String,
}

impl Default for FileLlmConfig {
    fn default() -> Self {
        Self {
            provider: "ollama".to_string(),
            base_url: "http://localhost:11434".to_string(),
            model: "llama3.2".to_string(),
        }
    }
}

/// `[tools]` section
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileToolsConfig {
    pub web: FileWebToolConfig,
}

/// `[tools.web]` section
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileWebToolConfig {
    /// Hosts the web tool may contact; everything else is denied
    pub allowed_hosts: Vec<String>,
    pub timeout_ms: u64,
}

impl Default for FileWebToolConfig {
    fn default() -> Self {
        Self {
            allowed_hosts: vec!["api.github.com".to_string()],
            timeout_ms: 10_000,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = FileConfig::default();
        assert_eq!(config.llm.provider, "ollama");
        assert_eq!(config.llm.base_url, "http://localhost:11434");
        assert_eq!(config.tools.web.allowed_hosts, vec!["api.github.com"]);
        assert_eq!(config.tools.web.timeout_ms, 10_000);
    }

    #[test]
    fn test_partial_toml_fills_defaults() {
        let config: FileConfig = toml::from_str(
            r#"
            [llm]
            model = "qwen2.5"
            "#,
        )
        .unwrap();

        assert_eq!(config.llm.model, "qwen2.5");
        assert_eq!(config.llm.base_url, "http://localhost:11434");
        assert_eq!(config.tools.web.timeout_ms, 10_000);
    }
}
