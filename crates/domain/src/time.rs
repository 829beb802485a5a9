//! Time and timestamp helpers.

use chrono::{DateTime, NaiveDateTime, Utc};

/// UTC timestamp used for reading times and available dates.
pub type Timestamp = DateTime<Utc>;

/// Return the current UTC time.
#[must_use]
pub fn now() -> Timestamp {
    Utc::now()
}

/// Parse an RFC 3339 timestamp (any offset) into UTC.
///
/// Timestamps without an offset are taken as UTC. Returns `None` when the
/// text is not a valid timestamp.
#[must_use]
pub fn parse_timestamp(text: &str) -> Option<Timestamp> {
    let text = text.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(text) {
        return Some(dt.with_timezone(&Utc));
    }
    NaiveDateTime::parse_from_str(text, "%Y-%m-%dT%H:%M:%S%.f")
        .ok()
        .map(|naive| naive.and_utc())
}

/// Parse an RFC 3339 timestamp into milliseconds since the Unix epoch.
#[must_use]
pub fn parse_epoch_millis(text: &str) -> Option<i64> {
    parse_timestamp(text).map(|dt| dt.timestamp_millis())
}
