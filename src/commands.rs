use crate::cli::Args;
use nhl_mcp::config::Config;
use nhl_mcp::error::AppError;
use nhl_mcp::mcp::{McpServer, serve_stdio};
use nhl_mcp::tools::ToolRegistry;
use serde_json::Value;
use tracing::info;

/// Handles the --version command.
pub fn handle_version_command() {
    println!("{} {}", nhl_mcp::NAME, nhl_mcp::VERSION);
}

/// Handles the --list-config command.
pub async fn handle_list_config_command() -> Result<(), AppError> {
    Config::display().await
}

/// Handles configuration update commands (--set-log-file, --clear-log-file).
///
/// Starts from the stored file so environment overrides are never persisted.
pub async fn handle_config_update_command(args: &Args) -> Result<(), AppError> {
    let mut config = Config::load_stored().await?;

    if let Some(new_log_path) = &args.new_log_file_path {
        config.log_file_path = Some(new_log_path.clone());
    } else if args.clear_log_file_path {
        config.log_file_path = None;
        println!("Custom log file path cleared. Using default location.");
    }

    config.validate()?;
    config.save().await?;
    println!("Config updated successfully!");

    Ok(())
}

/// Handles the --list-tools command: prints every tool descriptor as JSON.
pub fn handle_list_tools_command(registry: &ToolRegistry) -> Result<(), AppError> {
    let tools: Vec<Value> = registry.tools().iter().map(|t| t.descriptor()).collect();
    println!("{}", serde_json::to_string_pretty(&tools)?);
    Ok(())
}

/// Parses the --args value. Absent means no arguments.
fn parse_call_arguments(tool: &str, raw: Option<&str>) -> Result<Value, AppError> {
    match raw {
        None => Ok(Value::Null),
        Some(raw) => serde_json::from_str(raw).map_err(|e| {
            AppError::invalid_tool_arguments(tool, format!("--args is not JSON: {e}"))
        }),
    }
}

/// Handles the --call command: runs one tool and prints its envelope.
///
/// An error envelope is still printed and is not a process failure; only an
/// unknown tool or unparsable --args is.
pub async fn handle_call_command(
    registry: &ToolRegistry,
    tool: &str,
    raw_args: Option<&str>,
) -> Result<(), AppError> {
    let arguments = parse_call_arguments(tool, raw_args)?;
    let envelope = registry.call(tool, arguments).await.ok_or_else(|| {
        AppError::config_error(format!(
            "Unknown tool '{tool}'. Use --list-tools to see available tools."
        ))
    })?;
    println!("{}", serde_json::to_string_pretty(&envelope)?);
    Ok(())
}

/// Runs the MCP server on stdio until stdin closes.
pub async fn handle_serve_command(registry: ToolRegistry) -> Result<(), AppError> {
    info!("{} {} starting", nhl_mcp::NAME, nhl_mcp::VERSION);
    let server = McpServer::new(registry);
    serve_stdio(&server).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_call_arguments() {
        assert_eq!(parse_call_arguments("t", None).unwrap(), Value::Null);
        assert_eq!(
            parse_call_arguments("t", Some(r#"{"date":"2024-01-15"}"#)).unwrap()["date"],
            "2024-01-15"
        );
        let err = parse_call_arguments("get_nhl_teams", Some("{oops")).unwrap_err();
        assert!(err.to_string().starts_with("Invalid arguments for get_nhl_teams:"));
    }
}
