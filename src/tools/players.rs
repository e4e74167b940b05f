use super::envelope::Envelope;
use super::invoke::invoke;
use crate::nhl_client::NhlClient;

pub async fn get_nhl_prospects_by_team(client: &dyn NhlClient, team_abbr: &str) -> Envelope {
    invoke("prospects", client.prospects_by_team(team_abbr)).await
}

/// Team roster through the players endpoint group; same data as
/// [`super::teams::get_nhl_team_roster`] under a different key.
pub async fn get_nhl_players_by_team(
    client: &dyn NhlClient,
    team_abbr: &str,
    season: &str,
) -> Envelope {
    invoke("players", client.players_by_team(team_abbr, season)).await
}
