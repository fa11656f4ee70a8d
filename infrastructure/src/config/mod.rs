//! Configuration loading

mod file_config;
mod loader;

pub use file_config::{FileConfig, FileLlmConfig, FileToolsConfig, FileWebToolConfig};
pub use loader::ConfigLoader;
