//! Schedule tools: league days and weeks, team months, weeks and seasons,
//! the calendar view and the playoff carousel, series and bracket.

use super::dates::{date_or_now, local_today, normalize_daily_date};
use super::envelope::Envelope;
use super::invoke::invoke;
use crate::nhl_client::NhlClient;

/// Games on one date. Defaults to today; a malformed date is rejected before
/// any request is made.
pub async fn get_nhl_daily_schedule(client: &dyn NhlClient, date: Option<&str>) -> Envelope {
    match normalize_daily_date(date, local_today()) {
        Ok(date) => invoke("schedule", client.daily_schedule(&date)).await,
        Err(e) => Envelope::from_error(&e),
    }
}

/// League schedule for the week starting at `date`. The NHL's "now" rolls
/// over around noon Eastern.
pub async fn get_nhl_weekly_schedule(client: &dyn NhlClient, date: Option<&str>) -> Envelope {
    invoke("schedule", client.weekly_schedule(date_or_now(date))).await
}

/// Team schedule for a `YYYY-MM` month, current month by default.
pub async fn get_nhl_team_monthly_schedule(
    client: &dyn NhlClient,
    team_abbr: &str,
    month: Option<&str>,
) -> Envelope {
    invoke(
        "games",
        client.team_monthly_schedule(team_abbr, date_or_now(month)),
    )
    .await
    .with_echo("team", team_abbr)
    .with_echo("month", month)
}

/// Team schedule for the week containing `date`, current week by default.
pub async fn get_nhl_team_weekly_schedule(
    client: &dyn NhlClient,
    team_abbr: &str,
    date: Option<&str>,
) -> Envelope {
    invoke(
        "games",
        client.team_weekly_schedule(team_abbr, date_or_now(date)),
    )
    .await
    .with_echo("team", team_abbr)
    .with_echo("date", date)
}

pub async fn get_nhl_team_season_schedule(
    client: &dyn NhlClient,
    team_abbr: &str,
    season: &str,
) -> Envelope {
    invoke("schedule", client.team_season_schedule(team_abbr, season))
        .await
        .with_echo("team", team_abbr)
        .with_echo("season", season)
}

pub async fn get_nhl_calendar_schedule(client: &dyn NhlClient, date: &str) -> Envelope {
    invoke("schedule", client.calendar_schedule(date))
        .await
        .with_echo("date", date)
}

/// All series up to the current playoff round.
pub async fn get_nhl_playoff_carousel(client: &dyn NhlClient, season: &str) -> Envelope {
    invoke("playoff_data", client.playoff_carousel(season))
        .await
        .with_echo("season", season)
}

/// Games of one playoff series, identified by letter (`a`-`h` in round one).
pub async fn get_nhl_playoff_series_schedule(
    client: &dyn NhlClient,
    season: &str,
    series: &str,
) -> Envelope {
    invoke(
        "series_schedule",
        client.playoff_series_schedule(season, series),
    )
    .await
    .with_echo("season", season)
    .with_echo("series", series)
}

pub async fn get_nhl_playoff_bracket(client: &dyn NhlClient, year: &str) -> Envelope {
    invoke("bracket", client.playoff_bracket(year))
        .await
        .with_echo("year", year)
}
