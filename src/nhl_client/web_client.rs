//! reqwest-backed implementation of [`NhlClient`] for the public NHL APIs

use async_trait::async_trait;
use reqwest::Client;
use serde_json::{Map, Value, json};
use tracing::{debug, instrument};

use super::fetch::{fetch_json, take_field};
use super::http_client::create_http_client_with_timeout;
use super::provider::NhlClient;
use super::queries::{GoalieStatsQuery, SkaterStatsQuery, TeamSummaryQuery};
use super::urls::*;
use crate::config::Config;
use crate::error::AppError;

/// NHL client talking to the web API (`api-web.nhle.com`) and the stats REST
/// API (`api.nhle.com/stats/rest`).
#[derive(Debug, Clone)]
pub struct HttpNhlClient {
    client: Client,
    web_api_domain: String,
    stats_api_domain: String,
}

impl HttpNhlClient {
    /// Builds a client from the loaded configuration.
    pub fn new(config: &Config) -> Result<Self, AppError> {
        let client = create_http_client_with_timeout(config.http_timeout_seconds)?;
        Ok(Self::with_client(
            client,
            &config.web_api_domain,
            &config.stats_api_domain,
        ))
    }

    /// Builds a client around an existing reqwest client.
    pub fn with_client(client: Client, web_api_domain: &str, stats_api_domain: &str) -> Self {
        Self {
            client,
            web_api_domain: web_api_domain.trim_end_matches('/').to_string(),
            stats_api_domain: stats_api_domain.trim_end_matches('/').to_string(),
        }
    }

    async fn get(&self, url: &str) -> Result<Value, AppError> {
        fetch_json(&self.client, url, &[]).await
    }

    async fn get_field(&self, url: &str, field: &str) -> Result<Value, AppError> {
        let payload = self.get(url).await?;
        take_field(payload, field, url)
    }

    async fn get_stats_data(
        &self,
        url: &str,
        query: &[(&'static str, String)],
    ) -> Result<Value, AppError> {
        let payload = fetch_json(&self.client, url, query).await?;
        take_field(payload, "data", url)
    }
}

fn localized(value: Option<&Value>) -> Value {
    value
        .and_then(|v| v.get("default"))
        .cloned()
        .unwrap_or(Value::Null)
}

fn field(record: &Value, key: &str) -> Value {
    record.get(key).cloned().unwrap_or(Value::Null)
}

/// Reshapes a standings response into a flat team list.
fn teams_from_standings(standings: &Value) -> Vec<Value> {
    standings
        .as_array()
        .map(|rows| {
            rows.iter()
                .map(|row| {
                    json!({
                        "name": localized(row.get("teamName")),
                        "common_name": localized(row.get("teamCommonName")),
                        "abbr": localized(row.get("teamAbbrev")),
                        "logo": field(row, "teamLogo"),
                        "conference": {
                            "abbr": field(row, "conferenceAbbrev"),
                            "name": field(row, "conferenceName"),
                        },
                        "division": {
                            "abbr": field(row, "divisionAbbrev"),
                            "name": field(row, "divisionName"),
                        },
                    })
                })
                .collect()
        })
        .unwrap_or_default()
}

/// Picks the games of `date` out of a weekly schedule response.
fn games_for_date(schedule: &Value, date: &str) -> Vec<Value> {
    schedule
        .get("gameWeek")
        .and_then(Value::as_array)
        .and_then(|days| {
            days.iter()
                .find(|day| day.get("date").and_then(Value::as_str) == Some(date))
        })
        .and_then(|day| day.get("games"))
        .and_then(Value::as_array)
        .cloned()
        .unwrap_or_default()
}

#[async_trait]
impl NhlClient for HttpNhlClient {
    #[instrument(skip(self))]
    async fn teams(&self, date: &str) -> Result<Value, AppError> {
        let url = build_standings_url(&self.web_api_domain, date);
        let standings = self.get_field(&url, "standings").await?;
        let teams = teams_from_standings(&standings);
        debug!("Derived {} teams from standings", teams.len());
        Ok(Value::Array(teams))
    }

    async fn team_roster(&self, team_abbr: &str, season: &str) -> Result<Value, AppError> {
        self.get(&build_roster_url(&self.web_api_domain, team_abbr, season))
            .await
    }

    async fn franchises(&self) -> Result<Value, AppError> {
        let url = build_franchise_url(&self.stats_api_domain);
        self.get_field(&url, "data").await
    }

    async fn prospects_by_team(&self, team_abbr: &str) -> Result<Value, AppError> {
        self.get(&build_prospects_url(&self.web_api_domain, team_abbr))
            .await
    }

    async fn players_by_team(&self, team_abbr: &str, season: &str) -> Result<Value, AppError> {
        self.get(&build_roster_url(&self.web_api_domain, team_abbr, season))
            .await
    }

    #[instrument(skip(self))]
    async fn daily_schedule(&self, date: &str) -> Result<Value, AppError> {
        let schedule = self
            .get(&build_schedule_url(&self.web_api_domain, date))
            .await?;
        let games = games_for_date(&schedule, date);

        let mut day = Map::new();
        day.insert("date".to_string(), Value::String(date.to_string()));
        day.insert("numberOfGames".to_string(), Value::from(games.len()));
        day.insert("games".to_string(), Value::Array(games));
        Ok(Value::Object(day))
    }

    async fn weekly_schedule(&self, date: &str) -> Result<Value, AppError> {
        self.get(&build_schedule_url(&self.web_api_domain, date))
            .await
    }

    async fn team_monthly_schedule(
        &self,
        team_abbr: &str,
        month: &str,
    ) -> Result<Value, AppError> {
        let url = build_team_month_schedule_url(&self.web_api_domain, team_abbr, month);
        self.get_field(&url, "games").await
    }

    async fn team_weekly_schedule(&self, team_abbr: &str, date: &str) -> Result<Value, AppError> {
        let url = build_team_week_schedule_url(&self.web_api_domain, team_abbr, date);
        self.get_field(&url, "games").await
    }

    async fn team_season_schedule(
        &self,
        team_abbr: &str,
        season: &str,
    ) -> Result<Value, AppError> {
        self.get(&build_team_season_schedule_url(
            &self.web_api_domain,
            team_abbr,
            season,
        ))
        .await
    }

    async fn calendar_schedule(&self, date: &str) -> Result<Value, AppError> {
        self.get(&build_calendar_schedule_url(&self.web_api_domain, date))
            .await
    }

    async fn playoff_carousel(&self, season: &str) -> Result<Value, AppError> {
        self.get(&build_playoff_carousel_url(&self.web_api_domain, season))
            .await
    }

    async fn playoff_series_schedule(
        &self,
        season: &str,
        series: &str,
    ) -> Result<Value, AppError> {
        self.get(&build_playoff_series_url(
            &self.web_api_domain,
            season,
            series,
        ))
        .await
    }

    async fn playoff_bracket(&self, year: &str) -> Result<Value, AppError> {
        self.get(&build_playoff_bracket_url(&self.web_api_domain, year))
            .await
    }

    async fn league_standings(&self, date: &str) -> Result<Value, AppError> {
        self.get(&build_standings_url(&self.web_api_domain, date))
            .await
    }

    async fn season_standing_manifest(&self) -> Result<Value, AppError> {
        let url = build_standings_season_url(&self.web_api_domain);
        self.get_field(&url, "seasons").await
    }

    async fn gametypes_per_season_directory_by_team(
        &self,
        team_abbr: &str,
    ) -> Result<Value, AppError> {
        self.get(&build_club_stats_season_url(&self.web_api_domain, team_abbr))
            .await
    }

    async fn player_career_stats(&self, player_id: &str) -> Result<Value, AppError> {
        self.get(&build_player_landing_url(&self.web_api_domain, player_id))
            .await
    }

    async fn player_game_log(
        &self,
        player_id: &str,
        season_id: &str,
        game_type: i64,
    ) -> Result<Value, AppError> {
        let url =
            build_player_game_log_url(&self.web_api_domain, player_id, season_id, game_type);
        self.get_field(&url, "gameLog").await
    }

    async fn team_summary(&self, query: &TeamSummaryQuery) -> Result<Value, AppError> {
        let url = build_team_summary_url(&self.stats_api_domain);
        self.get_stats_data(&url, &query.to_query_params()).await
    }

    async fn skater_stats_summary(&self, query: &SkaterStatsQuery) -> Result<Value, AppError> {
        let url = build_skater_summary_url(&self.stats_api_domain);
        self.get_stats_data(&url, &query.to_query_params()).await
    }

    async fn goalie_stats_summary(&self, query: &GoalieStatsQuery) -> Result<Value, AppError> {
        let url = build_goalie_stats_url(&self.stats_api_domain, &query.stats_type);
        self.get_stats_data(&url, &query.to_query_params()).await
    }
}
