use clap::Parser;
use clap::builder::styling::{AnsiColor, Effects, Styles};

fn get_styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::Cyan.on_default().effects(Effects::BOLD))
        .usage(AnsiColor::Cyan.on_default().effects(Effects::BOLD))
        .literal(AnsiColor::Green.on_default())
        .placeholder(AnsiColor::Yellow.on_default())
        .error(AnsiColor::Red.on_default().effects(Effects::BOLD))
        .valid(AnsiColor::Green.on_default())
        .invalid(AnsiColor::Red.on_default())
}

/// True when the invocation runs a one-off command instead of the stdio server.
pub fn is_command_mode(args: &Args) -> bool {
    args.list_tools
        || args.call.is_some()
        || args.new_log_file_path.is_some()
        || args.clear_log_file_path
        || args.list_config
        || args.version
}

/// NHL statistics MCP server
///
/// Serves NHL teams, players, schedules, standings and statistics as Model
/// Context Protocol tools over stdio. Without flags the server reads
/// newline-delimited JSON-RPC requests from stdin and answers on stdout.
///
/// Tools can also be run once from the command line:
///
///   nhl_mcp --call get_nhl_standings --args '{"season": "20232024"}'
#[derive(Parser, Debug)]
#[command(about, long_about)]
#[command(disable_version_flag = true)]
#[command(styles = get_styles())]
pub struct Args {
    /// List every tool with its input schema and exit.
    #[arg(long = "list-tools", help_heading = "Tools")]
    pub list_tools: bool,

    /// Run one tool and print its result as JSON.
    #[arg(long = "call", value_name = "TOOL", help_heading = "Tools")]
    pub call: Option<String>,

    /// JSON object of arguments for --call.
    #[arg(
        long = "args",
        value_name = "JSON",
        requires = "call",
        help_heading = "Tools"
    )]
    pub call_args: Option<String>,

    /// Update log file path in config. This sets a persistent custom log file location.
    #[arg(long = "set-log-file", help_heading = "Configuration")]
    pub new_log_file_path: Option<String>,

    /// Clear the custom log file path from config. This reverts to using the default log location.
    #[arg(long = "clear-log-file", help_heading = "Configuration")]
    pub clear_log_file_path: bool,

    /// List current configuration settings
    #[arg(long = "list-config", short = 'l', help_heading = "Configuration")]
    pub list_config: bool,

    /// Show version information
    #[arg(short = 'V', long = "version", help_heading = "Info")]
    pub version: bool,

    /// Enable debug logging. Logs are mirrored to stderr; stdout stays
    /// reserved for protocol messages.
    #[arg(long = "debug", help_heading = "Debug")]
    pub debug: bool,

    /// Specify a custom log file path. If not provided, logs will be written
    /// to the default location.
    #[arg(long = "log-file", help_heading = "Debug")]
    pub log_file: Option<String>,
}
