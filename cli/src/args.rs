//! CLI argument definitions

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Output format for agent results
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum OutputFormat {
    /// Final payload as plain text
    Text,
    /// Full result as JSON, including the last tool-call trace
    Json,
}

/// CLI arguments for relay
#[derive(Parser, Debug)]
#[command(name = "relay")]
#[command(author, version, about = "Agent loop over a local LLM with versioned tools")]
#[command(long_about = r#"
Relay runs a single agent task against a local Ollama server. The agent
answers directly or calls registered tools, within a fixed step budget.

Configuration files are loaded from (in priority order):
1. --config <path>     Explicit config file
2. ./relay.toml        Project-level config
3. ~/.config/relay/config.toml   Global config

Example:
  relay "Summarize the latest GitHub status"
  relay -m llama3.2 --output json "Fetch https://api.github.com/zen"
"#)]
pub struct Cli {
    /// The task to give the agent
    pub task: Option<String>,

    /// Model to use for generation (overrides config)
    #[arg(short, long, value_name = "MODEL")]
    pub model: Option<String>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    pub output: OutputFormat,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long)]
    pub no_config: bool,
}
