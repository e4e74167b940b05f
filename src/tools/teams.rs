use serde_json::{Map, Value};

use super::dates::date_or_now;
use super::envelope::Envelope;
use super::invoke::{invoke, normalize};
use crate::constants::defaults::UNKNOWN;
use crate::error::AppError;
use crate::nhl_client::NhlClient;

/// All NHL teams with conference, division and logo, one record per team
/// in the standings of `date`. Franchise ids are not included; see
/// `get_nhl_franchises`.
///
/// During the preseason `"now"` may still resolve to last season; pass a date
/// at season start (e.g. `2024-10-04`) to get the current league.
pub async fn get_nhl_teams(client: &dyn NhlClient, date: Option<&str>) -> Envelope {
    invoke("teams", client.teams(date_or_now(date))).await
}

pub async fn get_nhl_team_roster(
    client: &dyn NhlClient,
    team_abbr: &str,
    season: &str,
) -> Envelope {
    invoke("roster", client.team_roster(team_abbr, season)).await
}

/// Every past and current franchise, including defunct ones.
pub async fn get_nhl_franchises(client: &dyn NhlClient) -> Envelope {
    invoke("franchises", client.franchises()).await
}

/// Mapping of team name to abbreviation, derived from the team list.
pub async fn get_nhl_team_ids(client: &dyn NhlClient, date: Option<&str>) -> Envelope {
    let result = client
        .teams(date_or_now(date))
        .await
        .and_then(|teams| team_abbreviations(&teams).map(Value::Object));
    normalize("team_abbreviations", result)
}

fn team_name_key(name: Option<&Value>) -> String {
    match name {
        None => UNKNOWN.to_string(),
        Some(Value::String(name)) => name.clone(),
        Some(other) => other.to_string(),
    }
}

/// Projects team records onto `name -> abbr`.
///
/// One entry per record; a later record with the same name overwrites an
/// earlier one. Missing fields become `"Unknown"`.
pub fn team_abbreviations(teams: &Value) -> Result<Map<String, Value>, AppError> {
    let records = teams.as_array().ok_or_else(|| {
        AppError::Custom("Unexpected teams payload: expected a list of teams".to_string())
    })?;

    let mut mapping = Map::new();
    for record in records {
        let record = record.as_object().ok_or_else(|| {
            AppError::Custom(format!("Unexpected team record: {record}"))
        })?;
        let abbr = record
            .get("abbr")
            .cloned()
            .unwrap_or_else(|| Value::String(UNKNOWN.to_string()));
        mapping.insert(team_name_key(record.get("name")), abbr);
    }
    Ok(mapping)
}
