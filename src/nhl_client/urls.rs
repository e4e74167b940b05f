//! URL building utilities for the NHL web and stats API endpoints

/// Builds the league standings URL for a date (`YYYY-MM-DD` or `now`).
///
/// # Example
/// ```
/// use nhl_mcp::nhl_client::build_standings_url;
///
/// let url = build_standings_url("https://api-web.nhle.com", "2024-04-18");
/// assert_eq!(url, "https://api-web.nhle.com/v1/standings/2024-04-18");
/// ```
pub fn build_standings_url(web_api: &str, date: &str) -> String {
    format!("{web_api}/v1/standings/{date}")
}

/// Builds the season standings manifest URL.
pub fn build_standings_season_url(web_api: &str) -> String {
    format!("{web_api}/v1/standings-season")
}

/// Builds a team roster URL.
///
/// # Example
/// ```
/// use nhl_mcp::nhl_client::build_roster_url;
///
/// let url = build_roster_url("https://api-web.nhle.com", "BUF", "20232024");
/// assert_eq!(url, "https://api-web.nhle.com/v1/roster/BUF/20232024");
/// ```
pub fn build_roster_url(web_api: &str, team_abbr: &str, season: &str) -> String {
    format!("{web_api}/v1/roster/{team_abbr}/{season}")
}

pub fn build_franchise_url(stats_api: &str) -> String {
    format!("{stats_api}/franchise")
}

pub fn build_prospects_url(web_api: &str, team_abbr: &str) -> String {
    format!("{web_api}/v1/prospects/{team_abbr}")
}

/// Builds the league schedule URL for the week starting at `date`.
pub fn build_schedule_url(web_api: &str, date: &str) -> String {
    format!("{web_api}/v1/schedule/{date}")
}

/// Builds a team schedule URL for a month (`YYYY-MM` or `now`).
///
/// # Example
/// ```
/// use nhl_mcp::nhl_client::build_team_month_schedule_url;
///
/// let url = build_team_month_schedule_url("https://api-web.nhle.com", "TOR", "2021-10");
/// assert_eq!(url, "https://api-web.nhle.com/v1/club-schedule/TOR/month/2021-10");
/// ```
pub fn build_team_month_schedule_url(web_api: &str, team_abbr: &str, month: &str) -> String {
    format!("{web_api}/v1/club-schedule/{team_abbr}/month/{month}")
}

pub fn build_team_week_schedule_url(web_api: &str, team_abbr: &str, date: &str) -> String {
    format!("{web_api}/v1/club-schedule/{team_abbr}/week/{date}")
}

pub fn build_team_season_schedule_url(web_api: &str, team_abbr: &str, season: &str) -> String {
    format!("{web_api}/v1/club-schedule-season/{team_abbr}/{season}")
}

pub fn build_calendar_schedule_url(web_api: &str, date: &str) -> String {
    format!("{web_api}/v1/schedule-calendar/{date}")
}

pub fn build_playoff_carousel_url(web_api: &str, season: &str) -> String {
    format!("{web_api}/v1/playoff-series/carousel/{season}/")
}

/// Builds the schedule URL of one playoff series (`a`-`h` in the first round).
///
/// # Example
/// ```
/// use nhl_mcp::nhl_client::build_playoff_series_url;
///
/// let url = build_playoff_series_url("https://api-web.nhle.com", "20232024", "a");
/// assert_eq!(url, "https://api-web.nhle.com/v1/schedule/playoff-series/20232024/a/");
/// ```
pub fn build_playoff_series_url(web_api: &str, season: &str, series: &str) -> String {
    format!("{web_api}/v1/schedule/playoff-series/{season}/{series}/")
}

pub fn build_playoff_bracket_url(web_api: &str, year: &str) -> String {
    format!("{web_api}/v1/playoff-bracket/{year}")
}

pub fn build_club_stats_season_url(web_api: &str, team_abbr: &str) -> String {
    format!("{web_api}/v1/club-stats-season/{team_abbr}")
}

pub fn build_player_landing_url(web_api: &str, player_id: &str) -> String {
    format!("{web_api}/v1/player/{player_id}/landing")
}

/// Builds a player game log URL.
///
/// # Example
/// ```
/// use nhl_mcp::nhl_client::build_player_game_log_url;
///
/// let url = build_player_game_log_url("https://api-web.nhle.com", "8478402", "20232024", 2);
/// assert_eq!(url, "https://api-web.nhle.com/v1/player/8478402/game-log/20232024/2");
/// ```
pub fn build_player_game_log_url(
    web_api: &str,
    player_id: &str,
    season_id: &str,
    game_type: i64,
) -> String {
    format!("{web_api}/v1/player/{player_id}/game-log/{season_id}/{game_type}")
}

pub fn build_team_summary_url(stats_api: &str) -> String {
    format!("{stats_api}/en/team/summary")
}

pub fn build_skater_summary_url(stats_api: &str) -> String {
    format!("{stats_api}/en/skater/summary")
}

/// Builds a goalie stats URL for a report type such as `summary` or `advanced`.
pub fn build_goalie_stats_url(stats_api: &str, stats_type: &str) -> String {
    format!("{stats_api}/en/goalie/{stats_type}")
}
