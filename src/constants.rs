//! Application-wide constants and configuration values
//!
//! Default endpoints, HTTP client settings and the default values of the
//! optional tool parameters live here so the tool table, the JSON schemas
//! and the operations agree on them.

/// Default timeout for HTTP requests in seconds
pub const DEFAULT_HTTP_TIMEOUT_SECONDS: u64 = 30;

/// Maximum number of idle connections per host in the HTTP client pool
pub const HTTP_POOL_MAX_IDLE_PER_HOST: usize = 16;

/// Base URL of the NHL web API (schedules, rosters, standings, players)
pub const DEFAULT_WEB_API_DOMAIN: &str = "https://api-web.nhle.com";

/// Base URL of the NHL stats REST API (franchises and stat summaries)
pub const DEFAULT_STATS_API_DOMAIN: &str = "https://api.nhle.com/stats/rest";

/// Name used for the config directory, log files and MCP server info
pub const APP_NAME: &str = "nhl_mcp";

/// Default log file name inside the log directory
pub const LOG_FILE_NAME: &str = "nhl_mcp.log";

/// Environment variable names that override config file values
pub mod env {
    pub const WEB_API_DOMAIN: &str = "NHL_MCP_WEB_API_DOMAIN";
    pub const STATS_API_DOMAIN: &str = "NHL_MCP_STATS_API_DOMAIN";
    pub const LOG_FILE: &str = "NHL_MCP_LOG_FILE";
    pub const HTTP_TIMEOUT: &str = "NHL_MCP_HTTP_TIMEOUT";
}

/// Defaults applied to optional tool parameters
pub mod defaults {
    /// Date placeholder understood by the NHL API as "the current date"
    pub const NOW: &str = "now";

    /// Regular season game type
    pub const GAME_TYPE_ID: i64 = 2;

    /// Goalie stats report type
    pub const GOALIE_STATS_TYPE: &str = "summary";

    /// First row for paginated stats queries
    pub const START: i64 = 0;

    /// Page size for team summary stats
    pub const TEAM_SUMMARY_LIMIT: i64 = 50;

    /// Page size for skater and goalie stats
    pub const PLAYER_SUMMARY_LIMIT: i64 = 25;

    /// Fallback for team records lacking a name or abbreviation
    pub const UNKNOWN: &str = "Unknown";
}

/// Stats API query fragments
pub mod stats_query {
    /// Sort order for team summary rows
    pub const TEAM_SORT: &str =
        r#"[{"property":"points","direction":"DESC"},{"property":"wins","direction":"DESC"},{"property":"teamId","direction":"ASC"}]"#;

    /// Sort order for skater summary rows
    pub const SKATER_SORT: &str =
        r#"[{"property":"points","direction":"DESC"},{"property":"gamesPlayed","direction":"ASC"},{"property":"playerId","direction":"ASC"}]"#;

    /// Sort order for goalie rows
    pub const GOALIE_SORT: &str =
        r#"[{"property":"wins","direction":"DESC"},{"property":"savePct","direction":"DESC"},{"property":"playerId","direction":"ASC"}]"#;

    /// Fact filter for team summaries
    pub const TEAM_FACT_CAYENNE_EXP: &str = "gamesPlayed>1";

    /// Fact filter for skater and goalie summaries
    pub const PLAYER_FACT_CAYENNE_EXP: &str = "gamesPlayed>=1";
}

/// MCP protocol constants
pub mod mcp {
    /// Protocol version advertised when the client does not name one
    pub const PROTOCOL_VERSION: &str = "2024-11-05";

    /// JSON-RPC version string
    pub const JSONRPC_VERSION: &str = "2.0";
}
