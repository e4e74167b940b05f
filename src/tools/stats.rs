//! Stats tools: per-player career and game logs, and the paginated
//! team, skater and goalie summaries.

use super::envelope::Envelope;
use super::invoke::invoke;
use crate::nhl_client::{GoalieStatsQuery, NhlClient, SkaterStatsQuery, TeamSummaryQuery};

/// Game types a team played in each season of its history.
pub async fn get_nhl_gametypes_per_season_by_team(
    client: &dyn NhlClient,
    team_abbr: &str,
) -> Envelope {
    invoke(
        "gametypes",
        client.gametypes_per_season_directory_by_team(team_abbr),
    )
    .await
}

/// Career statistics and biography of one player.
pub async fn get_nhl_player_career_stats(client: &dyn NhlClient, player_id: &str) -> Envelope {
    invoke("player_stats", client.player_career_stats(player_id)).await
}

/// Game-by-game log for a season; `game_type` is 1 preseason, 2 regular
/// season, 3 playoffs.
pub async fn get_nhl_player_game_log(
    client: &dyn NhlClient,
    player_id: &str,
    season_id: &str,
    game_type: i64,
) -> Envelope {
    invoke(
        "game_log",
        client.player_game_log(player_id, season_id, game_type),
    )
    .await
}

pub async fn get_nhl_team_summary_stats(
    client: &dyn NhlClient,
    query: &TeamSummaryQuery,
) -> Envelope {
    invoke("team_summary", client.team_summary(query)).await
}

pub async fn get_nhl_skater_stats_summary(
    client: &dyn NhlClient,
    query: &SkaterStatsQuery,
) -> Envelope {
    invoke("skater_stats", client.skater_stats_summary(query)).await
}

pub async fn get_nhl_goalie_stats_summary(
    client: &dyn NhlClient,
    query: &GoalieStatsQuery,
) -> Envelope {
    invoke("goalie_stats", client.goalie_stats_summary(query)).await
}
