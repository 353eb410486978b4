//! Row-to-entity parsing helpers.
//!
//! Every repo needs to convert `libsql::Row` (column-indexed) into typed
//! entity structs. These helpers isolate the parsing logic. Timestamps are
//! stored as naive server-zone wall-clock strings with microsecond precision
//! so consecutive mutations keep distinct `modified_at` values.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Timelike};

use crate::error::DatabaseError;

/// Storage format for timestamps: `2024-01-01 00:00:00.000000`.
pub const DATETIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.6f";

/// Format a timestamp for SQL storage.
#[must_use]
pub fn format_datetime(ts: NaiveDateTime) -> String {
    ts.format(DATETIME_FORMAT).to_string()
}

/// Truncate to microsecond precision, matching the storage format.
///
/// Stamped values must round-trip through storage unchanged, so the
/// lifecycle observer and recorder stamp at storage resolution.
#[must_use]
pub fn truncate_to_micros(ts: NaiveDateTime) -> NaiveDateTime {
    ts.with_nanosecond(ts.nanosecond() / 1000 * 1000)
        .unwrap_or(ts)
}

/// Parse a required TEXT column as `NaiveDateTime`.
///
/// Handles the storage format (with or without fractional seconds) and falls
/// back to RFC 3339 for rows written by other tooling.
///
/// # Errors
///
/// Returns `DatabaseError::Query` if the string cannot be parsed as either
/// format.
pub fn parse_datetime(s: &str) -> Result<NaiveDateTime, DatabaseError> {
    if let Ok(dt) = NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S%.f") {
        return Ok(dt);
    }
    DateTime::parse_from_rfc3339(s)
        .map(|dt| dt.naive_utc())
        .map_err(|e| DatabaseError::Query(format!("Failed to parse datetime '{s}': {e}")))
}

/// Parse an optional TEXT column as `Option<NaiveDate>` (`%Y-%m-%d`).
///
/// # Errors
///
/// Returns `DatabaseError::Query` if a non-empty string cannot be parsed.
pub fn parse_optional_date(s: Option<&str>) -> Result<Option<NaiveDate>, DatabaseError> {
    match s {
        Some(s) if !s.is_empty() => NaiveDate::parse_from_str(s, "%Y-%m-%d")
            .map(Some)
            .map_err(|e| DatabaseError::Query(format!("Failed to parse date '{s}': {e}"))),
        _ => Ok(None),
    }
}

/// Parse a TEXT column into a serde-deserializable enum.
///
/// # Errors
///
/// Returns `DatabaseError::Query` if the string does not match any enum
/// variant.
pub fn parse_enum<T: serde::de::DeserializeOwned>(s: &str) -> Result<T, DatabaseError> {
    serde_json::from_value(serde_json::Value::String(s.to_string()))
        .map_err(|e| DatabaseError::Query(format!("Failed to parse enum from '{s}': {e}")))
}

/// Read a nullable TEXT column. Returns `None` for both SQL NULL and empty
/// string.
///
/// `row.get::<String>(idx)` on a NULL column returns an error, not `""`.
/// You must use `get::<Option<String>>()` for nullable columns.
///
/// # Errors
///
/// Returns `DatabaseError` if the column read fails.
pub fn get_opt_string(row: &libsql::Row, idx: i32) -> Result<Option<String>, DatabaseError> {
    match row.get::<Option<String>>(idx)? {
        Some(s) if s.is_empty() => Ok(None),
        other => Ok(other),
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn datetime_round_trips_through_storage_format() {
        let ts = NaiveDate::from_ymd_opt(2024, 1, 1)
            .unwrap()
            .and_hms_micro_opt(0, 0, 0, 123_456)
            .unwrap();
        assert_eq!(parse_datetime(&format_datetime(ts)).unwrap(), ts);
    }

    #[test]
    fn parses_datetime_without_fraction() {
        let parsed = parse_datetime("2024-01-01 12:30:45").unwrap();
        assert_eq!(
            parsed,
            NaiveDate::from_ymd_opt(2024, 1, 1)
                .unwrap()
                .and_hms_opt(12, 30, 45)
                .unwrap()
        );
    }

    #[test]
    fn parses_rfc3339_fallback() {
        let parsed = parse_datetime("2024-01-01T12:30:45+00:00").unwrap();
        assert_eq!(
            parsed,
            NaiveDate::from_ymd_opt(2024, 1, 1)
                .unwrap()
                .and_hms_opt(12, 30, 45)
                .unwrap()
        );
    }

    #[test]
    fn rejects_garbage_datetime() {
        assert!(parse_datetime("not a timestamp").is_err());
    }

    #[test]
    fn optional_date_handles_null_and_empty() {
        assert_eq!(parse_optional_date(None).unwrap(), None);
        assert_eq!(parse_optional_date(Some("")).unwrap(), None);
        assert_eq!(
            parse_optional_date(Some("2023-06-01")).unwrap(),
            NaiveDate::from_ymd_opt(2023, 6, 1)
        );
    }
}
