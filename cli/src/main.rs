//! CLI entrypoint for Relay
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

mod args;

use anyhow::{Context, Result, bail};
use args::{Cli, OutputFormat};
use clap::Parser;
use relay_application::{Agent, Tool, ToolRegistry};
use relay_infrastructure::{ConfigLoader, OllamaLlmClient, WebRequestTool};
use std::sync::Arc;
use std::time::Duration;
use tokio_util::sync::CancellationToken;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity level
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    let task = match cli.task {
        Some(t) => t,
        None => bail!("A task is required. Run `relay --help` for usage."),
    };

    let config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_ref())
            .map_err(|e| anyhow::anyhow!("Failed to load configuration: {e}"))?
    };

    let model = cli.model.unwrap_or_else(|| config.llm.model.clone());

    info!(model = %model, base_url = %config.llm.base_url, "Starting relay");

    // === Dependency Injection ===
    let llm = Arc::new(OllamaLlmClient::new(&config.llm.base_url));

    let web_client = reqwest::Client::builder()
        .timeout(Duration::from_millis(config.tools.web.timeout_ms))
        .build()
        .context("Failed to create HTTP client")?;
    let web_tool: Arc<dyn Tool> = Arc::new(WebRequestTool::new(
        web_client,
        config.tools.web.allowed_hosts.clone(),
    ));

    let registry = Arc::new(ToolRegistry::new(vec![web_tool])?);
    let agent = Agent::new(llm, registry);

    // Ctrl-C cancels the in-flight step
    let cancel = CancellationToken::new();
    {
        let cancel = cancel.clone();
        tokio::spawn(async move {
            if tokio::signal::ctrl_c().await.is_ok() {
                cancel.cancel();
            }
        });
    }

    let result = match agent.run(&task, &model, &cancel).await {
        Ok(result) => result,
        Err(e) if e.is_cancelled() => bail!("Run cancelled"),
        Err(e) => return Err(e.into()),
    };

    match cli.output {
        OutputFormat::Text => {
            println!("{}", result.payload);
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&result)?);
        }
    }

    if !result.is_success {
        std::process::exit(1);
    }

    Ok(())
}
