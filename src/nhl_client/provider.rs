//! The statistics provider interface the tools delegate to

use async_trait::async_trait;
use serde_json::Value;

use super::queries::{GoalieStatsQuery, SkaterStatsQuery, TeamSummaryQuery};
use crate::error::AppError;

/// NHL statistics provider, grouped the way the upstream API is: teams,
/// players, schedule, standings and stats.
///
/// Every method performs one upstream request and returns the payload as an
/// opaque JSON value. Implemented by [`super::HttpNhlClient`] and by test
/// doubles.
#[async_trait]
pub trait NhlClient: Send + Sync {
    // Teams

    /// All teams with conference and division, as of `date`.
    async fn teams(&self, date: &str) -> Result<Value, AppError>;

    async fn team_roster(&self, team_abbr: &str, season: &str) -> Result<Value, AppError>;

    /// Every past and current franchise.
    async fn franchises(&self) -> Result<Value, AppError>;

    // Players

    async fn prospects_by_team(&self, team_abbr: &str) -> Result<Value, AppError>;

    async fn players_by_team(&self, team_abbr: &str, season: &str) -> Result<Value, AppError>;

    // Schedule

    /// Games of a single `YYYY-MM-DD` date as `{date, games, numberOfGames}`.
    async fn daily_schedule(&self, date: &str) -> Result<Value, AppError>;

    async fn weekly_schedule(&self, date: &str) -> Result<Value, AppError>;

    async fn team_monthly_schedule(&self, team_abbr: &str, month: &str)
    -> Result<Value, AppError>;

    async fn team_weekly_schedule(&self, team_abbr: &str, date: &str) -> Result<Value, AppError>;

    async fn team_season_schedule(&self, team_abbr: &str, season: &str)
    -> Result<Value, AppError>;

    async fn calendar_schedule(&self, date: &str) -> Result<Value, AppError>;

    async fn playoff_carousel(&self, season: &str) -> Result<Value, AppError>;

    async fn playoff_series_schedule(&self, season: &str, series: &str)
    -> Result<Value, AppError>;

    async fn playoff_bracket(&self, year: &str) -> Result<Value, AppError>;

    // Standings

    async fn league_standings(&self, date: &str) -> Result<Value, AppError>;

    /// Season metadata records, each with a numeric `id` and `standingsEnd`.
    async fn season_standing_manifest(&self) -> Result<Value, AppError>;

    // Stats

    async fn gametypes_per_season_directory_by_team(
        &self,
        team_abbr: &str,
    ) -> Result<Value, AppError>;

    async fn player_career_stats(&self, player_id: &str) -> Result<Value, AppError>;

    async fn player_game_log(
        &self,
        player_id: &str,
        season_id: &str,
        game_type: i64,
    ) -> Result<Value, AppError>;

    async fn team_summary(&self, query: &TeamSummaryQuery) -> Result<Value, AppError>;

    async fn skater_stats_summary(&self, query: &SkaterStatsQuery) -> Result<Value, AppError>;

    async fn goalie_stats_summary(&self, query: &GoalieStatsQuery) -> Result<Value, AppError>;
}
