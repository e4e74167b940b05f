//! Table of every exposed tool: name, description, input schema and handler.

use std::future::Future;
use std::sync::Arc;

use futures::FutureExt;
use futures::future::BoxFuture;
use serde::de::DeserializeOwned;
use serde_json::{Value, json};
use tracing::{debug, instrument, warn};

use super::args::*;
use super::envelope::Envelope;
use super::schema::{Param, ParamKind, object_schema};
use super::{players, schedule, standings, stats, teams};
use crate::constants::defaults;
use crate::nhl_client::{GoalieStatsQuery, NhlClient, SkaterStatsQuery, TeamSummaryQuery};

type ToolHandler =
    Arc<dyn Fn(Arc<dyn NhlClient>, Value) -> BoxFuture<'static, Envelope> + Send + Sync>;

/// One registered tool.
#[derive(Clone)]
pub struct ToolSpec {
    pub name: &'static str,
    pub description: &'static str,
    params: Vec<Param>,
    handler: ToolHandler,
}

impl ToolSpec {
    pub fn input_schema(&self) -> Value {
        object_schema(&self.params)
    }

    /// The `tools/list` entry for this tool.
    pub fn descriptor(&self) -> Value {
        json!({
            "name": self.name,
            "description": self.description,
            "inputSchema": self.input_schema(),
        })
    }
}

impl std::fmt::Debug for ToolSpec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ToolSpec")
            .field("name", &self.name)
            .field("params", &self.params)
            .finish_non_exhaustive()
    }
}

/// Wraps a typed handler so it accepts raw JSON arguments.
///
/// Undecodable arguments produce an error envelope without touching the client.
fn tool<A, F, Fut>(
    name: &'static str,
    description: &'static str,
    params: Vec<Param>,
    run: F,
) -> ToolSpec
where
    A: DeserializeOwned + Send + 'static,
    F: Fn(Arc<dyn NhlClient>, A) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = Envelope> + Send + 'static,
{
    let handler: ToolHandler = Arc::new(
        move |client: Arc<dyn NhlClient>, arguments: Value| -> BoxFuture<'static, Envelope> {
            match decode_arguments::<A>(name, arguments) {
                Ok(args) => run(client, args).boxed(),
                Err(e) => {
                    warn!("Rejected arguments: {e}");
                    futures::future::ready(Envelope::from_error(&e)).boxed()
                }
            }
        },
    );
    ToolSpec {
        name,
        description,
        params,
        handler,
    }
}

/// Registered tools bound to one statistics provider.
pub struct ToolRegistry {
    client: Arc<dyn NhlClient>,
    tools: Vec<ToolSpec>,
}

impl ToolRegistry {
    pub fn new(client: Arc<dyn NhlClient>) -> Self {
        Self {
            client,
            tools: nhl_tools(),
        }
    }

    /// Tools in registration order.
    pub fn tools(&self) -> &[ToolSpec] {
        &self.tools
    }

    pub fn get(&self, name: &str) -> Option<&ToolSpec> {
        self.tools.iter().find(|t| t.name == name)
    }

    pub fn names(&self) -> Vec<&'static str> {
        self.tools.iter().map(|t| t.name).collect()
    }

    /// Runs tool `name` with JSON `arguments`. `None` when no such tool exists.
    #[instrument(skip(self, arguments))]
    pub async fn call(&self, name: &str, arguments: Value) -> Option<Envelope> {
        let Some(tool) = self.get(name) else {
            warn!("Unknown tool requested");
            return None;
        };
        debug!("Dispatching with arguments {arguments}");
        let envelope = (tool.handler)(Arc::clone(&self.client), arguments).await;
        Some(envelope)
    }
}

fn team_abbr() -> Param {
    Param::required(
        "team_abbr",
        ParamKind::String,
        "Three-letter team abbreviation, e.g. TOR",
    )
}

fn season(description: &'static str) -> Param {
    Param::required("season", ParamKind::String, description)
}

fn page_params(limit: i64) -> [Param; 2] {
    [
        Param::optional("start", ParamKind::Integer, "Index of the first record")
            .with_default(defaults::START),
        Param::optional("limit", ParamKind::Integer, "Number of records to return")
            .with_default(limit),
    ]
}

fn game_type_id() -> Param {
    Param::optional(
        "game_type_id",
        ParamKind::Integer,
        "2 for regular season, 3 for playoffs",
    )
    .with_default(defaults::GAME_TYPE_ID)
}

fn nhl_tools() -> Vec<ToolSpec> {
    vec![
        // Teams
        tool(
            "get_nhl_teams",
            "List NHL teams with conference, division and logo as of a date",
            vec![
                Param::optional("date", ParamKind::String, "YYYY-MM-DD or \"now\"")
                    .with_default(defaults::NOW),
            ],
            |client, args: DateArgs| async move {
                teams::get_nhl_teams(client.as_ref(), args.date.as_deref()).await
            },
        ),
        tool(
            "get_nhl_team_roster",
            "Roster of a team for a season",
            vec![team_abbr(), season("Season as YYYYYYYY, e.g. 20232024")],
            |client, args: TeamSeasonArgs| async move {
                teams::get_nhl_team_roster(client.as_ref(), &args.team_abbr, &args.season).await
            },
        ),
        tool(
            "get_nhl_franchises",
            "Every past and current NHL franchise",
            vec![],
            |client, _: NoArgs| async move { teams::get_nhl_franchises(client.as_ref()).await },
        ),
        tool(
            "get_nhl_team_ids",
            "Mapping of full team name to team abbreviation",
            vec![
                Param::optional("date", ParamKind::String, "YYYY-MM-DD or \"now\"")
                    .with_default(defaults::NOW),
            ],
            |client, args: DateArgs| async move {
                teams::get_nhl_team_ids(client.as_ref(), args.date.as_deref()).await
            },
        ),
        // Players
        tool(
            "get_nhl_prospects_by_team",
            "Prospects of a team",
            vec![team_abbr()],
            |client, args: TeamArgs| async move {
                players::get_nhl_prospects_by_team(client.as_ref(), &args.team_abbr).await
            },
        ),
        tool(
            "get_nhl_players_by_team",
            "Players of a team for a season",
            vec![team_abbr(), season("Season as YYYYYYYY, e.g. 20232024")],
            |client, args: TeamSeasonArgs| async move {
                players::get_nhl_players_by_team(client.as_ref(), &args.team_abbr, &args.season)
                    .await
            },
        ),
        // Schedule
        tool(
            "get_nhl_daily_schedule",
            "Games on one date",
            vec![Param::optional(
                "date",
                ParamKind::String,
                "YYYY-MM-DD, defaults to today",
            )],
            |client, args: DateArgs| async move {
                schedule::get_nhl_daily_schedule(client.as_ref(), args.date.as_deref()).await
            },
        ),
        tool(
            "get_nhl_weekly_schedule",
            "League schedule for the week starting at a date",
            vec![
                Param::optional("date", ParamKind::String, "YYYY-MM-DD or \"now\"")
                    .with_default(defaults::NOW),
            ],
            |client, args: DateArgs| async move {
                schedule::get_nhl_weekly_schedule(client.as_ref(), args.date.as_deref()).await
            },
        ),
        tool(
            "get_nhl_team_monthly_schedule",
            "Schedule of a team for one month",
            vec![
                team_abbr(),
                Param::optional("month", ParamKind::String, "YYYY-MM or \"now\"")
                    .with_default(defaults::NOW),
            ],
            |client, args: TeamMonthArgs| async move {
                schedule::get_nhl_team_monthly_schedule(
                    client.as_ref(),
                    &args.team_abbr,
                    args.month.as_deref(),
                )
                .await
            },
        ),
        tool(
            "get_nhl_team_weekly_schedule",
            "Schedule of a team for the week containing a date",
            vec![
                team_abbr(),
                Param::optional("date", ParamKind::String, "YYYY-MM-DD or \"now\"")
                    .with_default(defaults::NOW),
            ],
            |client, args: TeamDateArgs| async move {
                schedule::get_nhl_team_weekly_schedule(
                    client.as_ref(),
                    &args.team_abbr,
                    args.date.as_deref(),
                )
                .await
            },
        ),
        tool(
            "get_nhl_team_season_schedule",
            "Full season schedule of a team",
            vec![team_abbr(), season("Season as YYYYYYYY, e.g. 20232024")],
            |client, args: TeamSeasonArgs| async move {
                schedule::get_nhl_team_season_schedule(
                    client.as_ref(),
                    &args.team_abbr,
                    &args.season,
                )
                .await
            },
        ),
        tool(
            "get_nhl_calendar_schedule",
            "Calendar view of games around a date",
            vec![Param::required("date", ParamKind::String, "YYYY-MM-DD")],
            |client, args: RequiredDateArgs| async move {
                schedule::get_nhl_calendar_schedule(client.as_ref(), &args.date).await
            },
        ),
        tool(
            "get_nhl_playoff_carousel",
            "Playoff series up to the current round",
            vec![season("Season as YYYYYYYY, e.g. 20232024")],
            |client, args: SeasonArgs| async move {
                schedule::get_nhl_playoff_carousel(client.as_ref(), &args.season).await
            },
        ),
        tool(
            "get_nhl_playoff_series_schedule",
            "Games of one playoff series",
            vec![
                season("Season as YYYYYYYY, e.g. 20232024"),
                Param::required("series", ParamKind::String, "Series letter, e.g. a"),
            ],
            |client, args: SeriesArgs| async move {
                schedule::get_nhl_playoff_series_schedule(
                    client.as_ref(),
                    &args.season,
                    &args.series,
                )
                .await
            },
        ),
        tool(
            "get_nhl_playoff_bracket",
            "Playoff bracket of a year",
            vec![Param::required(
                "year",
                ParamKind::String,
                "Year the playoffs end in, e.g. 2024",
            )],
            |client, args: YearArgs| async move {
                schedule::get_nhl_playoff_bracket(client.as_ref(), &args.year).await
            },
        ),
        // Standings
        tool(
            "get_nhl_standings",
            "League standings for a date, or for the last day of a season",
            vec![
                Param::optional("date", ParamKind::String, "YYYY-MM-DD or \"now\"")
                    .with_default(defaults::NOW),
                Param::optional(
                    "season",
                    ParamKind::String,
                    "Season as YYYYYYYY; overrides date with the season's final standings",
                ),
            ],
            |client, args: StandingsArgs| async move {
                standings::get_nhl_standings(
                    client.as_ref(),
                    args.date.as_deref(),
                    args.season.as_deref(),
                )
                .await
            },
        ),
        tool(
            "get_nhl_season_manifest",
            "Metadata of every season: dates and standings rules",
            vec![],
            |client, _: NoArgs| async move {
                standings::get_nhl_season_manifest(client.as_ref()).await
            },
        ),
        // Stats
        tool(
            "get_nhl_gametypes_per_season_by_team",
            "Game types a team played in each season",
            vec![team_abbr()],
            |client, args: TeamArgs| async move {
                stats::get_nhl_gametypes_per_season_by_team(client.as_ref(), &args.team_abbr)
                    .await
            },
        ),
        tool(
            "get_nhl_player_career_stats",
            "Career statistics and biography of a player",
            vec![Param::required("player_id", ParamKind::String, "NHL player id")],
            |client, args: PlayerArgs| async move {
                stats::get_nhl_player_career_stats(client.as_ref(), &args.player_id).await
            },
        ),
        tool(
            "get_nhl_player_game_log",
            "Game-by-game log of a player for a season",
            vec![
                Param::required("player_id", ParamKind::String, "NHL player id"),
                Param::required("season_id", ParamKind::String, "Season as YYYYYYYY"),
                Param::required(
                    "game_type",
                    ParamKind::Integer,
                    "1 preseason, 2 regular season, 3 playoffs",
                ),
            ],
            |client, args: GameLogArgs| async move {
                stats::get_nhl_player_game_log(
                    client.as_ref(),
                    &args.player_id,
                    &args.season_id,
                    args.game_type,
                )
                .await
            },
        ),
        tool(
            "get_nhl_team_summary_stats",
            "Team summary statistics over a season range",
            {
                let mut params = vec![
                    Param::required("start_season", ParamKind::String, "First season, YYYYYYYY"),
                    Param::required("end_season", ParamKind::String, "Last season, YYYYYYYY"),
                    game_type_id(),
                    Param::optional("is_game", ParamKind::Boolean, "Per-game rows")
                        .with_default(false),
                    Param::optional(
                        "is_aggregate",
                        ParamKind::Boolean,
                        "Aggregate across seasons",
                    )
                    .with_default(false),
                ];
                params.extend(page_params(defaults::TEAM_SUMMARY_LIMIT));
                params
            },
            |client, args: TeamSummaryArgs| async move {
                let query = TeamSummaryQuery::from(args);
                stats::get_nhl_team_summary_stats(client.as_ref(), &query).await
            },
        ),
        tool(
            "get_nhl_skater_stats_summary",
            "Skater summary statistics over a season range, by points",
            {
                let mut params = vec![
                    Param::required("start_season", ParamKind::String, "First season, YYYYYYYY"),
                    Param::required("end_season", ParamKind::String, "Last season, YYYYYYYY"),
                    Param::optional(
                        "franchise_id",
                        ParamKind::String,
                        "Restrict to one franchise",
                    ),
                    game_type_id(),
                    Param::optional(
                        "aggregate",
                        ParamKind::Boolean,
                        "Aggregate across seasons",
                    )
                    .with_default(false),
                ];
                params.extend(page_params(defaults::PLAYER_SUMMARY_LIMIT));
                params
            },
            |client, args: SkaterStatsArgs| async move {
                let query = SkaterStatsQuery::from(args);
                stats::get_nhl_skater_stats_summary(client.as_ref(), &query).await
            },
        ),
        tool(
            "get_nhl_goalie_stats_summary",
            "Goalie statistics over a season range, by wins",
            {
                let mut params = vec![
                    Param::required("start_season", ParamKind::String, "First season, YYYYYYYY"),
                    Param::optional(
                        "end_season",
                        ParamKind::String,
                        "Last season, defaults to start_season",
                    ),
                    Param::optional(
                        "stats_type",
                        ParamKind::String,
                        "Report type: summary, advanced, bios, ...",
                    )
                    .with_default(defaults::GOALIE_STATS_TYPE),
                    game_type_id(),
                    Param::optional(
                        "franchise_id",
                        ParamKind::String,
                        "Restrict to one franchise",
                    ),
                    Param::optional(
                        "aggregate",
                        ParamKind::Boolean,
                        "Aggregate across seasons",
                    )
                    .with_default(false),
                ];
                params.extend(page_params(defaults::PLAYER_SUMMARY_LIMIT));
                params
            },
            |client, args: GoalieStatsArgs| async move {
                let query = GoalieStatsQuery::from(args);
                stats::get_nhl_goalie_stats_summary(client.as_ref(), &query).await
            },
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing_utils::RecordingClient;
    use std::collections::HashSet;

    fn registry(client: RecordingClient) -> (Arc<RecordingClient>, ToolRegistry) {
        let client = Arc::new(client);
        let registry = ToolRegistry::new(client.clone());
        (client, registry)
    }

    #[test]
    fn test_registers_every_tool_once() {
        let (_, registry) = registry(RecordingClient::new());
        let names = registry.names();
        let unique: HashSet<_> = names.iter().collect();

        assert_eq!(names.len(), 23);
        assert_eq!(unique.len(), names.len());
        assert!(names.contains(&"get_nhl_goalie_stats_summary"));
    }

    #[test]
    fn test_descriptor_shape() {
        let (_, registry) = registry(RecordingClient::new());
        let descriptor = registry.get("get_nhl_player_game_log").unwrap().descriptor();

        assert_eq!(descriptor["name"], "get_nhl_player_game_log");
        assert_eq!(
            descriptor["inputSchema"]["required"],
            json!(["player_id", "season_id", "game_type"])
        );
        assert_eq!(
            descriptor["inputSchema"]["properties"]["game_type"]["type"],
            "integer"
        );
    }

    #[tokio::test]
    async fn test_unknown_tool_is_none() {
        let (_, registry) = registry(RecordingClient::new());
        assert!(registry.call("get_nhl_nothing", json!({})).await.is_none());
    }

    #[tokio::test]
    async fn test_invalid_arguments_skip_the_client() {
        let (client, registry) = registry(RecordingClient::new());
        let envelope = registry
            .call("get_nhl_team_roster", json!({"team_abbr": "TOR"}))
            .await
            .unwrap();

        let message = envelope.error_message().unwrap();
        assert!(message.starts_with("Invalid arguments for get_nhl_team_roster:"));
        assert!(client.calls().is_empty());
    }

    #[tokio::test]
    async fn test_null_arguments_use_defaults() {
        let (client, registry) =
            registry(RecordingClient::new().respond("weekly_schedule", json!({"gameWeek": []})));
        let envelope = registry
            .call("get_nhl_weekly_schedule", Value::Null)
            .await
            .unwrap();

        assert!(!envelope.is_error());
        assert_eq!(client.calls_to("weekly_schedule"), vec![vec!["now".to_string()]]);
    }
}
