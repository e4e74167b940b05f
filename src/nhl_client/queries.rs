//! Parameter sets for the paginated stats API endpoints

use crate::constants::stats_query;

/// Team summary statistics over a season range.
#[derive(Debug, Clone, PartialEq)]
pub struct TeamSummaryQuery {
    pub start_season: String,
    pub end_season: String,
    pub game_type_id: i64,
    pub is_game: bool,
    pub is_aggregate: bool,
    pub start: i64,
    pub limit: i64,
}

/// Skater summary statistics, optionally restricted to one franchise.
#[derive(Debug, Clone, PartialEq)]
pub struct SkaterStatsQuery {
    pub start_season: String,
    pub end_season: String,
    pub franchise_id: Option<String>,
    pub game_type_id: i64,
    pub aggregate: bool,
    pub start: i64,
    pub limit: i64,
}

/// Goalie statistics for one report type (`summary`, `advanced`, `bios`, ...).
#[derive(Debug, Clone, PartialEq)]
pub struct GoalieStatsQuery {
    pub start_season: String,
    pub end_season: String,
    pub stats_type: String,
    pub game_type_id: i64,
    pub franchise_id: Option<String>,
    pub aggregate: bool,
    pub start: i64,
    pub limit: i64,
}

/// Builds the stats API `cayenneExp` filter for a season range.
///
/// # Example
/// ```
/// use nhl_mcp::nhl_client::season_range_cayenne_exp;
///
/// let exp = season_range_cayenne_exp(2, "20202021", "20212022", Some("10"));
/// assert_eq!(
///     exp,
///     "franchiseId=10 and gameTypeId=2 and seasonId<=20212022 and seasonId>=20202021"
/// );
/// ```
pub fn season_range_cayenne_exp(
    game_type_id: i64,
    start_season: &str,
    end_season: &str,
    franchise_id: Option<&str>,
) -> String {
    let range = format!(
        "gameTypeId={game_type_id} and seasonId<={end_season} and seasonId>={start_season}"
    );
    match franchise_id {
        Some(franchise) => format!("franchiseId={franchise} and {range}"),
        None => range,
    }
}

impl TeamSummaryQuery {
    pub fn to_query_params(&self) -> Vec<(&'static str, String)> {
        vec![
            ("isAggregate", self.is_aggregate.to_string()),
            ("isGame", self.is_game.to_string()),
            ("start", self.start.to_string()),
            ("limit", self.limit.to_string()),
            ("sort", stats_query::TEAM_SORT.to_string()),
            ("factCayenneExp", stats_query::TEAM_FACT_CAYENNE_EXP.to_string()),
            (
                "cayenneExp",
                season_range_cayenne_exp(
                    self.game_type_id,
                    &self.start_season,
                    &self.end_season,
                    None,
                ),
            ),
        ]
    }
}

impl SkaterStatsQuery {
    pub fn to_query_params(&self) -> Vec<(&'static str, String)> {
        vec![
            ("isAggregate", self.aggregate.to_string()),
            ("isGame", "false".to_string()),
            ("start", self.start.to_string()),
            ("limit", self.limit.to_string()),
            ("sort", stats_query::SKATER_SORT.to_string()),
            ("factCayenneExp", stats_query::PLAYER_FACT_CAYENNE_EXP.to_string()),
            (
                "cayenneExp",
                season_range_cayenne_exp(
                    self.game_type_id,
                    &self.start_season,
                    &self.end_season,
                    self.franchise_id.as_deref(),
                ),
            ),
        ]
    }
}

impl GoalieStatsQuery {
    pub fn to_query_params(&self) -> Vec<(&'static str, String)> {
        vec![
            ("isAggregate", self.aggregate.to_string()),
            ("isGame", "false".to_string()),
            ("start", self.start.to_string()),
            ("limit", self.limit.to_string()),
            ("sort", stats_query::GOALIE_SORT.to_string()),
            ("factCayenneExp", stats_query::PLAYER_FACT_CAYENNE_EXP.to_string()),
            (
                "cayenneExp",
                season_range_cayenne_exp(
                    self.game_type_id,
                    &self.start_season,
                    &self.end_season,
                    self.franchise_id.as_deref(),
                ),
            ),
        ]
    }
}
