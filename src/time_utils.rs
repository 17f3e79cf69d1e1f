//! Time Utilities
//!
//! Conversions between report timestamps (`YYYY-MM-DDTHH:MM:SSZ`) and Unix
//! seconds, as carried by PSKReporter's `flowStartSeconds`.

use chrono::{DateTime, Utc};

use crate::error::{Error, Result};

/// Format of the `timestamp` field on a Reception Report
pub const REPORT_TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%SZ";

/// Parse an ISO-8601 / RFC 3339 timestamp to Unix seconds.
/// Offsets other than `Z` are honored.
pub fn timestamp_iso_to_unix(iso: &str) -> Result<i64> {
    let parsed = DateTime::parse_from_rfc3339(iso.trim()).map_err(|source| Error::Timestamp {
        input: iso.to_string(),
        source,
    })?;
    Ok(parsed.timestamp())
}

/// Format Unix seconds as a UTC report timestamp
pub fn timestamp_unix_to_iso(unix_seconds: i64) -> Result<String> {
    let dt = DateTime::<Utc>::from_timestamp(unix_seconds, 0)
        .ok_or(Error::TimestampOutOfRange(unix_seconds))?;
    Ok(dt.format(REPORT_TIMESTAMP_FORMAT).to_string())
}
