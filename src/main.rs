// src/main.rs
mod cli;
mod commands;
mod logging;

use clap::Parser;
use cli::{Args, is_command_mode};
use nhl_mcp::config::Config;
use nhl_mcp::error::AppError;
use nhl_mcp::nhl_client::{HttpNhlClient, NhlClient};
use nhl_mcp::tools::ToolRegistry;
use std::sync::Arc;
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), AppError> {
    let args = Args::parse();

    // Commands that must work even with a broken config or log location
    if args.version {
        commands::handle_version_command();
        return Ok(());
    }
    if args.new_log_file_path.is_some() || args.clear_log_file_path {
        return commands::handle_config_update_command(&args).await;
    }
    if args.list_config {
        return commands::handle_list_config_command().await;
    }

    let config = Config::load().await?;
    let (log_file_path, _guard) = logging::setup_logging(&args, Some(&config)).await?;
    info!("Logs are being written to: {log_file_path}");

    let client: Arc<dyn NhlClient> = Arc::new(HttpNhlClient::new(&config)?);
    let registry = ToolRegistry::new(client);

    if !is_command_mode(&args) {
        return commands::handle_serve_command(registry).await;
    }

    if args.list_tools {
        return commands::handle_list_tools_command(&registry);
    }

    if let Some(tool) = args.call.as_deref() {
        return commands::handle_call_command(&registry, tool, args.call_args.as_deref()).await;
    }

    Ok(())
}
