use serde_json::Value;
use tracing::{debug, info};

use super::dates::{date_or_now, non_empty};
use super::envelope::Envelope;
use super::invoke::invoke;
use crate::constants::defaults::NOW;
use crate::error::AppError;
use crate::nhl_client::NhlClient;

/// League standings for a date, or for the final day of a season.
///
/// When `season` is given it takes precedence over `date`: the season
/// manifest is fetched first and the season's `standingsEnd` becomes the
/// standings date. A season missing from the manifest fails with
/// `Invalid Season Id <season>` and no standings request is made.
pub async fn get_nhl_standings(
    client: &dyn NhlClient,
    date: Option<&str>,
    season: Option<&str>,
) -> Envelope {
    let effective_date = match non_empty(season) {
        Some(season) => {
            let manifest = get_nhl_season_manifest(client).await;
            match resolve_season_end(manifest, season) {
                Ok(date) => date,
                Err(envelope) => return envelope,
            }
        }
        None => date_or_now(date).to_string(),
    };

    debug!("Fetching standings for {effective_date}");
    invoke("standings", client.league_standings(&effective_date)).await
}

/// Metadata for every season: dates, conference/division use, scoring rules.
pub async fn get_nhl_season_manifest(client: &dyn NhlClient) -> Envelope {
    invoke("seasons", client.season_standing_manifest()).await
}

/// Turns a manifest envelope into the standings date of `season`.
///
/// An error envelope is handed back unchanged.
fn resolve_season_end(manifest: Envelope, season: &str) -> Result<String, Envelope> {
    if manifest.is_error() {
        return Err(manifest);
    }

    let entry = manifest
        .payload()
        .and_then(|seasons| find_season(seasons, season))
        .ok_or_else(|| Envelope::from_error(&AppError::invalid_season_id(season)))?;

    let standings_end = entry
        .get("standingsEnd")
        .and_then(Value::as_str)
        .filter(|date| !date.is_empty())
        .unwrap_or(NOW);
    info!("Season {season} resolved to standings date {standings_end}");
    Ok(standings_end.to_string())
}

/// Finds the manifest entry whose numeric `id` equals `season`.
fn find_season<'a>(seasons: &'a Value, season: &str) -> Option<&'a Value> {
    let season_id = season.trim().parse::<i64>().ok()?;
    seasons
        .as_array()?
        .iter()
        .find(|entry| entry.get("id").and_then(Value::as_i64) == Some(season_id))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn manifest() -> Envelope {
        Envelope::success(
            "seasons",
            json!([
                {"id": 20222023, "standingsEnd": "2023-04-14"},
                {"id": 20232024, "standingsEnd": "2024-04-18"}
            ]),
        )
    }

    #[test]
    fn test_resolves_known_season() {
        assert_eq!(
            resolve_season_end(manifest(), "20232024").unwrap(),
            "2024-04-18"
        );
    }

    #[test]
    fn test_unknown_season_is_rejected() {
        let err = resolve_season_end(manifest(), "99999999").unwrap_err();
        assert_eq!(err.error_message(), Some("Invalid Season Id 99999999"));
    }

    #[test]
    fn test_non_numeric_season_is_rejected() {
        let err = resolve_season_end(manifest(), "2023-24").unwrap_err();
        assert_eq!(err.error_message(), Some("Invalid Season Id 2023-24"));
    }

    #[test]
    fn test_manifest_error_is_returned_unchanged() {
        let err = resolve_season_end(Envelope::error("Manifest down"), "20232024").unwrap_err();
        assert_eq!(err, Envelope::error("Manifest down"));
    }

    #[test]
    fn test_entry_without_standings_end_uses_now() {
        let manifest = Envelope::success("seasons", json!([{"id": 19171918}]));
        assert_eq!(resolve_season_end(manifest, "19171918").unwrap(), "now");
    }
}
