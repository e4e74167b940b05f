//! Date parameter normalization shared by the schedule and standings tools

use chrono::{Local, NaiveDate};

use crate::constants::defaults::NOW;
use crate::error::AppError;

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Treats an empty string the same as an absent parameter.
pub fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

/// Returns the given date-like value, or `"now"` when absent or empty.
pub fn date_or_now(value: Option<&str>) -> &str {
    non_empty(value).unwrap_or(NOW)
}

/// Resolves the daily schedule date relative to `today`.
///
/// Absent → `today` as `YYYY-MM-DD`. Present → parsed strictly and
/// re-formatted, so `2024-1-5` becomes `2024-01-05`.
pub fn normalize_daily_date(value: Option<&str>, today: NaiveDate) -> Result<String, AppError> {
    match non_empty(value) {
        None => Ok(today.format(DATE_FORMAT).to_string()),
        Some(raw) => NaiveDate::parse_from_str(raw, DATE_FORMAT)
            .map(|date| date.format(DATE_FORMAT).to_string())
            .map_err(|e| {
                AppError::invalid_date_format(format!(
                    "time data '{raw}' does not match format '{DATE_FORMAT}' ({e})"
                ))
            }),
    }
}

/// Today's date in the local timezone.
pub fn local_today() -> NaiveDate {
    Local::now().date_naive()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn jan_15() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, 15).unwrap()
    }

    #[test]
    fn test_date_or_now() {
        assert_eq!(date_or_now(None), "now");
        assert_eq!(date_or_now(Some("")), "now");
        assert_eq!(date_or_now(Some("2024-10-04")), "2024-10-04");
        // Passed through uninterpreted
        assert_eq!(date_or_now(Some("yesterday")), "yesterday");
    }

    #[test]
    fn test_daily_date_defaults_to_today() {
        assert_eq!(normalize_daily_date(None, jan_15()).unwrap(), "2024-01-15");
        assert_eq!(
            normalize_daily_date(Some(""), jan_15()).unwrap(),
            "2024-01-15"
        );
    }

    #[test]
    fn test_daily_date_is_reformatted() {
        assert_eq!(
            normalize_daily_date(Some("2024-03-09"), jan_15()).unwrap(),
            "2024-03-09"
        );
        assert_eq!(
            normalize_daily_date(Some("2024-3-9"), jan_15()).unwrap(),
            "2024-03-09"
        );
    }

    #[test]
    fn test_daily_date_rejects_garbage() {
        let err = normalize_daily_date(Some("invalid-date"), jan_15()).unwrap_err();
        let message = err.to_string();
        assert!(message.starts_with("Invalid date format: "));
        assert!(message.contains("invalid-date"));
        assert!(message.ends_with("Please use YYYY-MM-DD."));
    }

    #[test]
    fn test_daily_date_rejects_impossible_day() {
        assert!(normalize_daily_date(Some("2024-02-30"), jan_15()).is_err());
        assert!(normalize_daily_date(Some("15-01-2024"), jan_15()).is_err());
    }
}
