//! Calendar date helpers.

use chrono::{Local, NaiveDate};

use crate::errors::CoreError;

/// Wire and CLI format for calendar dates.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Parse a `YYYY-MM-DD` date.
///
/// # Errors
///
/// Returns [`CoreError::InvalidDate`] if `input` is not a valid calendar date
/// in that format.
pub fn parse_date(input: &str) -> Result<NaiveDate, CoreError> {
    NaiveDate::parse_from_str(input.trim(), DATE_FORMAT).map_err(|_| CoreError::InvalidDate {
        input: input.to_string(),
    })
}

/// Resolve an optional CLI date argument, defaulting to today in local time.
///
/// # Errors
///
/// Returns [`CoreError::InvalidDate`] if a provided value does not parse.
pub fn resolve_target_date(input: Option<&str>) -> Result<NaiveDate, CoreError> {
    input.map_or_else(|| Ok(Local::now().date_naive()), parse_date)
}

/// Format a date the way the record store expects it.
#[must_use]
pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_iso_date() {
        let date = parse_date("2025-03-09").unwrap();
        assert_eq!(date, NaiveDate::from_ymd_opt(2025, 3, 9).unwrap());
        assert_eq!(format_date(date), "2025-03-09");
    }

    #[test]
    fn rejects_other_formats() {
        for input in ["09/03/2025", "2025-13-01", "2025-02-30", "today", ""] {
            let err = parse_date(input).unwrap_err();
            assert!(matches!(err, CoreError::InvalidDate { .. }), "{input}");
        }
    }

    #[test]
    fn missing_argument_defaults_to_today() {
        let date = resolve_target_date(None).unwrap();
        assert_eq!(date, Local::now().date_naive());
    }
}
