//! Typed tool arguments decoded from MCP `tools/call` JSON.
//!
//! Identifier fields accept JSON strings or numbers (agents often send
//! `20232024` unquoted). Integer and boolean fields also accept their string
//! spellings.

use serde::de::{DeserializeOwned, Error as _};
use serde::{Deserialize, Deserializer};
use serde_json::{Map, Value};

use crate::constants::defaults;
use crate::error::AppError;
use crate::nhl_client::{GoalieStatsQuery, SkaterStatsQuery, TeamSummaryQuery};

/// Decodes tool arguments, treating `null` as an empty object.
pub fn decode_arguments<T: DeserializeOwned>(tool: &str, arguments: Value) -> Result<T, AppError> {
    let arguments = if arguments.is_null() {
        Value::Object(Map::new())
    } else {
        arguments
    };
    serde_json::from_value(arguments)
        .map_err(|e| AppError::invalid_tool_arguments(tool, e.to_string()))
}

#[derive(Deserialize)]
#[serde(untagged)]
enum Scalar {
    Text(String),
    Number(serde_json::Number),
    Flag(bool),
}

fn string_or_number<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    match Scalar::deserialize(deserializer)? {
        Scalar::Text(text) => Ok(text),
        Scalar::Number(number) => Ok(number.to_string()),
        Scalar::Flag(_) => Err(D::Error::custom("expected a string or a number")),
    }
}

fn opt_string_or_number<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Option<String>, D::Error> {
    match Option::<Scalar>::deserialize(deserializer)? {
        None => Ok(None),
        Some(Scalar::Text(text)) => Ok(Some(text)),
        Some(Scalar::Number(number)) => Ok(Some(number.to_string())),
        Some(Scalar::Flag(_)) => Err(D::Error::custom("expected a string or a number")),
    }
}

fn int_or_string<'de, D: Deserializer<'de>>(deserializer: D) -> Result<i64, D::Error> {
    match Scalar::deserialize(deserializer)? {
        Scalar::Number(number) => number
            .as_i64()
            .ok_or_else(|| D::Error::custom(format!("expected an integer, got {number}"))),
        Scalar::Text(text) => text
            .trim()
            .parse()
            .map_err(|_| D::Error::custom(format!("expected an integer, got \"{text}\""))),
        Scalar::Flag(_) => Err(D::Error::custom("expected an integer")),
    }
}

fn bool_or_string<'de, D: Deserializer<'de>>(deserializer: D) -> Result<bool, D::Error> {
    match Scalar::deserialize(deserializer)? {
        Scalar::Flag(flag) => Ok(flag),
        Scalar::Text(text) => match text.trim().to_ascii_lowercase().as_str() {
            "true" => Ok(true),
            "false" => Ok(false),
            _ => Err(D::Error::custom(format!("expected a boolean, got \"{text}\""))),
        },
        Scalar::Number(_) => Err(D::Error::custom("expected a boolean")),
    }
}

fn default_game_type_id() -> i64 {
    defaults::GAME_TYPE_ID
}

fn default_start() -> i64 {
    defaults::START
}

fn default_team_summary_limit() -> i64 {
    defaults::TEAM_SUMMARY_LIMIT
}

fn default_player_summary_limit() -> i64 {
    defaults::PLAYER_SUMMARY_LIMIT
}

fn default_goalie_stats_type() -> String {
    defaults::GOALIE_STATS_TYPE.to_string()
}

#[derive(Debug, Default, Deserialize)]
pub struct NoArgs {}

#[derive(Debug, Default, Deserialize)]
pub struct DateArgs {
    #[serde(default, deserialize_with = "opt_string_or_number")]
    pub date: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct TeamArgs {
    #[serde(deserialize_with = "string_or_number")]
    pub team_abbr: String,
}

#[derive(Debug, Deserialize)]
pub struct TeamSeasonArgs {
    #[serde(deserialize_with = "string_or_number")]
    pub team_abbr: String,
    #[serde(deserialize_with = "string_or_number")]
    pub season: String,
}

#[derive(Debug, Deserialize)]
pub struct TeamMonthArgs {
    #[serde(deserialize_with = "string_or_number")]
    pub team_abbr: String,
    #[serde(default, deserialize_with = "opt_string_or_number")]
    pub month: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct TeamDateArgs {
    #[serde(deserialize_with = "string_or_number")]
    pub team_abbr: String,
    #[serde(default, deserialize_with = "opt_string_or_number")]
    pub date: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct RequiredDateArgs {
    #[serde(deserialize_with = "string_or_number")]
    pub date: String,
}

#[derive(Debug, Deserialize)]
pub struct SeasonArgs {
    #[serde(deserialize_with = "string_or_number")]
    pub season: String,
}

#[derive(Debug, Deserialize)]
pub struct SeriesArgs {
    #[serde(deserialize_with = "string_or_number")]
    pub season: String,
    #[serde(deserialize_with = "string_or_number")]
    pub series: String,
}

#[derive(Debug, Deserialize)]
pub struct YearArgs {
    #[serde(deserialize_with = "string_or_number")]
    pub year: String,
}

#[derive(Debug, Default, Deserialize)]
pub struct StandingsArgs {
    #[serde(default, deserialize_with = "opt_string_or_number")]
    pub date: Option<String>,
    #[serde(default, deserialize_with = "opt_string_or_number")]
    pub season: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct PlayerArgs {
    #[serde(deserialize_with = "string_or_number")]
    pub player_id: String,
}

#[derive(Debug, Deserialize)]
pub struct GameLogArgs {
    #[serde(deserialize_with = "string_or_number")]
    pub player_id: String,
    #[serde(deserialize_with = "string_or_number")]
    pub season_id: String,
    #[serde(deserialize_with = "int_or_string")]
    pub game_type: i64,
}

#[derive(Debug, Deserialize)]
pub struct TeamSummaryArgs {
    #[serde(deserialize_with = "string_or_number")]
    pub start_season: String,
    #[serde(deserialize_with = "string_or_number")]
    pub end_season: String,
    #[serde(default = "default_game_type_id", deserialize_with = "int_or_string")]
    pub game_type_id: i64,
    #[serde(default, deserialize_with = "bool_or_string")]
    pub is_game: bool,
    #[serde(default, deserialize_with = "bool_or_string")]
    pub is_aggregate: bool,
    #[serde(default = "default_start", deserialize_with = "int_or_string")]
    pub start: i64,
    #[serde(default = "default_team_summary_limit", deserialize_with = "int_or_string")]
    pub limit: i64,
}

impl From<TeamSummaryArgs> for TeamSummaryQuery {
    fn from(args: TeamSummaryArgs) -> Self {
        TeamSummaryQuery {
            start_season: args.start_season,
            end_season: args.end_season,
            game_type_id: args.game_type_id,
            is_game: args.is_game,
            is_aggregate: args.is_aggregate,
            start: args.start,
            limit: args.limit,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct SkaterStatsArgs {
    #[serde(deserialize_with = "string_or_number")]
    pub start_season: String,
    #[serde(deserialize_with = "string_or_number")]
    pub end_season: String,
    #[serde(default, deserialize_with = "opt_string_or_number")]
    pub franchise_id: Option<String>,
    #[serde(default = "default_game_type_id", deserialize_with = "int_or_string")]
    pub game_type_id: i64,
    #[serde(default, deserialize_with = "bool_or_string")]
    pub aggregate: bool,
    #[serde(default = "default_start", deserialize_with = "int_or_string")]
    pub start: i64,
    #[serde(default = "default_player_summary_limit", deserialize_with = "int_or_string")]
    pub limit: i64,
}

impl From<SkaterStatsArgs> for SkaterStatsQuery {
    fn from(args: SkaterStatsArgs) -> Self {
        SkaterStatsQuery {
            start_season: args.start_season,
            end_season: args.end_season,
            franchise_id: args.franchise_id.filter(|f| !f.is_empty()),
            game_type_id: args.game_type_id,
            aggregate: args.aggregate,
            start: args.start,
            limit: args.limit,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct GoalieStatsArgs {
    #[serde(deserialize_with = "string_or_number")]
    pub start_season: String,
    #[serde(default, deserialize_with = "opt_string_or_number")]
    pub end_season: Option<String>,
    #[serde(default = "default_goalie_stats_type")]
    pub stats_type: String,
    #[serde(default = "default_game_type_id", deserialize_with = "int_or_string")]
    pub game_type_id: i64,
    #[serde(default, deserialize_with = "opt_string_or_number")]
    pub franchise_id: Option<String>,
    #[serde(default, deserialize_with = "bool_or_string")]
    pub aggregate: bool,
    #[serde(default = "default_start", deserialize_with = "int_or_string")]
    pub start: i64,
    #[serde(default = "default_player_summary_limit", deserialize_with = "int_or_string")]
    pub limit: i64,
}

impl From<GoalieStatsArgs> for GoalieStatsQuery {
    /// A missing `end_season` means the single season `start_season`.
    fn from(args: GoalieStatsArgs) -> Self {
        let end_season = args
            .end_season
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| args.start_season.clone());
        GoalieStatsQuery {
            start_season: args.start_season,
            end_season,
            stats_type: args.stats_type,
            game_type_id: args.game_type_id,
            franchise_id: args.franchise_id.filter(|f| !f.is_empty()),
            aggregate: args.aggregate,
            start: args.start,
            limit: args.limit,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_null_arguments_decode_as_empty_object() {
        let args: StandingsArgs = decode_arguments("get_nhl_standings", Value::Null).unwrap();
        assert_eq!(args.date, None);
        assert_eq!(args.season, None);
    }

    #[test]
    fn test_numeric_identifiers_become_strings() {
        let args: TeamSeasonArgs = decode_arguments(
            "get_nhl_team_roster",
            json!({"team_abbr": "NJD", "season": 20232024}),
        )
        .unwrap();
        assert_eq!(args.season, "20232024");
    }

    #[test]
    fn test_missing_required_field_is_reported() {
        let err =
            decode_arguments::<TeamSeasonArgs>("get_nhl_team_roster", json!({"team_abbr": "NJD"}))
                .unwrap_err();
        let message = err.to_string();
        assert!(message.starts_with("Invalid arguments for get_nhl_team_roster:"));
        assert!(message.contains("season"));
    }

    #[test]
    fn test_team_summary_defaults() {
        let args: TeamSummaryArgs = decode_arguments(
            "get_nhl_team_summary_stats",
            json!({"start_season": "20202021", "end_season": "20212022"}),
        )
        .unwrap();
        let query = TeamSummaryQuery::from(args);

        assert_eq!(query.game_type_id, 2);
        assert!(!query.is_game);
        assert!(!query.is_aggregate);
        assert_eq!(query.start, 0);
        assert_eq!(query.limit, 50);
    }

    #[test]
    fn test_skater_defaults_and_string_spellings() {
        let args: SkaterStatsArgs = decode_arguments(
            "get_nhl_skater_stats_summary",
            json!({
                "start_season": 20232024,
                "end_season": "20232024",
                "game_type_id": "3",
                "aggregate": "true"
            }),
        )
        .unwrap();
        let query = SkaterStatsQuery::from(args);

        assert_eq!(query.start_season, "20232024");
        assert_eq!(query.game_type_id, 3);
        assert!(query.aggregate);
        assert_eq!(query.franchise_id, None);
        assert_eq!(query.limit, 25);
    }

    #[test]
    fn test_goalie_end_season_defaults_to_start() {
        let args: GoalieStatsArgs = decode_arguments(
            "get_nhl_goalie_stats_summary",
            json!({"start_season": "20222023"}),
        )
        .unwrap();
        let query = GoalieStatsQuery::from(args);

        assert_eq!(query.end_season, "20222023");
        assert_eq!(query.stats_type, "summary");
        assert_eq!(query.limit, 25);
    }

    #[test]
    fn test_wrong_types_are_rejected() {
        assert!(
            decode_arguments::<GameLogArgs>(
                "get_nhl_player_game_log",
                json!({"player_id": "8478402", "season_id": "20232024", "game_type": "playoffs"}),
            )
            .is_err()
        );
        assert!(
            decode_arguments::<TeamArgs>("get_nhl_prospects_by_team", json!({"team_abbr": true}))
                .is_err()
        );
    }
}
