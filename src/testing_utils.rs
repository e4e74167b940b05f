//! Test doubles for code that depends on [`NhlClient`].

use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard};

use async_trait::async_trait;
use serde_json::Value;

use crate::error::AppError;
use crate::nhl_client::{GoalieStatsQuery, NhlClient, SkaterStatsQuery, TeamSummaryQuery};

/// One call observed by [`RecordingClient`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedCall {
    pub method: &'static str,
    pub args: Vec<String>,
}

enum Scripted {
    Payload(Value),
    Failure(String),
}

/// Scripted [`NhlClient`] that replays canned payloads per method and records
/// every call it receives.
///
/// Methods without a scripted response fail with
/// `no response scripted for <method>`.
///
/// ```
/// use nhl_mcp::testing_utils::RecordingClient;
/// use serde_json::json;
///
/// let client = RecordingClient::new()
///     .respond("franchises", json!([{"id": 1}]))
///     .fail("team_roster", "API Error");
/// assert!(client.calls().is_empty());
/// ```
#[derive(Default)]
pub struct RecordingClient {
    responses: Mutex<HashMap<&'static str, Scripted>>,
    calls: Mutex<Vec<RecordedCall>>,
}

fn locked<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

impl RecordingClient {
    pub fn new() -> Self {
        Self::default()
    }

    /// Scripts a successful payload for `method`.
    pub fn respond(self, method: &'static str, payload: Value) -> Self {
        locked(&self.responses).insert(method, Scripted::Payload(payload));
        self
    }

    /// Scripts a failure whose message is exactly `message`.
    pub fn fail(self, method: &'static str, message: impl Into<String>) -> Self {
        locked(&self.responses).insert(method, Scripted::Failure(message.into()));
        self
    }

    pub fn calls(&self) -> Vec<RecordedCall> {
        locked(&self.calls).clone()
    }

    /// Arguments of every call made to `method`, oldest first.
    pub fn calls_to(&self, method: &str) -> Vec<Vec<String>> {
        locked(&self.calls)
            .iter()
            .filter(|call| call.method == method)
            .map(|call| call.args.clone())
            .collect()
    }

    fn record(&self, method: &'static str, args: &[&str]) -> Result<Value, AppError> {
        locked(&self.calls).push(RecordedCall {
            method,
            args: args.iter().map(|a| a.to_string()).collect(),
        });
        match locked(&self.responses).get(method) {
            Some(Scripted::Payload(payload)) => Ok(payload.clone()),
            Some(Scripted::Failure(message)) => Err(AppError::Custom(message.clone())),
            None => Err(AppError::Custom(format!(
                "no response scripted for {method}"
            ))),
        }
    }

    fn record_query(
        &self,
        method: &'static str,
        params: Vec<(&'static str, String)>,
    ) -> Result<Value, AppError> {
        let args: Vec<String> = params.iter().map(|(k, v)| format!("{k}={v}")).collect();
        let args: Vec<&str> = args.iter().map(String::as_str).collect();
        self.record(method, &args)
    }
}

#[async_trait]
impl NhlClient for RecordingClient {
    async fn teams(&self, date: &str) -> Result<Value, AppError> {
        self.record("teams", &[date])
    }

    async fn team_roster(&self, team_abbr: &str, season: &str) -> Result<Value, AppError> {
        self.record("team_roster", &[team_abbr, season])
    }

    async fn franchises(&self) -> Result<Value, AppError> {
        self.record("franchises", &[])
    }

    async fn prospects_by_team(&self, team_abbr: &str) -> Result<Value, AppError> {
        self.record("prospects_by_team", &[team_abbr])
    }

    async fn players_by_team(&self, team_abbr: &str, season: &str) -> Result<Value, AppError> {
        self.record("players_by_team", &[team_abbr, season])
    }

    async fn daily_schedule(&self, date: &str) -> Result<Value, AppError> {
        self.record("daily_schedule", &[date])
    }

    async fn weekly_schedule(&self, date: &str) -> Result<Value, AppError> {
        self.record("weekly_schedule", &[date])
    }

    async fn team_monthly_schedule(
        &self,
        team_abbr: &str,
        month: &str,
    ) -> Result<Value, AppError> {
        self.record("team_monthly_schedule", &[team_abbr, month])
    }

    async fn team_weekly_schedule(&self, team_abbr: &str, date: &str) -> Result<Value, AppError> {
        self.record("team_weekly_schedule", &[team_abbr, date])
    }

    async fn team_season_schedule(
        &self,
        team_abbr: &str,
        season: &str,
    ) -> Result<Value, AppError> {
        self.record("team_season_schedule", &[team_abbr, season])
    }

    async fn calendar_schedule(&self, date: &str) -> Result<Value, AppError> {
        self.record("calendar_schedule", &[date])
    }

    async fn playoff_carousel(&self, season: &str) -> Result<Value, AppError> {
        self.record("playoff_carousel", &[season])
    }

    async fn playoff_series_schedule(
        &self,
        season: &str,
        series: &str,
    ) -> Result<Value, AppError> {
        self.record("playoff_series_schedule", &[season, series])
    }

    async fn playoff_bracket(&self, year: &str) -> Result<Value, AppError> {
        self.record("playoff_bracket", &[year])
    }

    async fn league_standings(&self, date: &str) -> Result<Value, AppError> {
        self.record("league_standings", &[date])
    }

    async fn season_standing_manifest(&self) -> Result<Value, AppError> {
        self.record("season_standing_manifest", &[])
    }

    async fn gametypes_per_season_directory_by_team(
        &self,
        team_abbr: &str,
    ) -> Result<Value, AppError> {
        self.record("gametypes_per_season_directory_by_team", &[team_abbr])
    }

    async fn player_career_stats(&self, player_id: &str) -> Result<Value, AppError> {
        self.record("player_career_stats", &[player_id])
    }

    async fn player_game_log(
        &self,
        player_id: &str,
        season_id: &str,
        game_type: i64,
    ) -> Result<Value, AppError> {
        let game_type = game_type.to_string();
        self.record("player_game_log", &[player_id, season_id, &game_type])
    }

    async fn team_summary(&self, query: &TeamSummaryQuery) -> Result<Value, AppError> {
        self.record_query("team_summary", query.to_query_params())
    }

    async fn skater_stats_summary(&self, query: &SkaterStatsQuery) -> Result<Value, AppError> {
        self.record_query("skater_stats_summary", query.to_query_params())
    }

    async fn goalie_stats_summary(&self, query: &GoalieStatsQuery) -> Result<Value, AppError> {
        let mut params = vec![("statsType", query.stats_type.clone())];
        params.extend(query.to_query_params());
        self.record_query("goalie_stats_summary", params)
    }
}
