use chrono::{DateTime, NaiveDate, NaiveDateTime};

const DATE_FORMAT: &str = "%Y-%m-%d";
const OFFSET_TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%z";
const NAIVE_TIMESTAMP_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"];

/// Parse a calendar date as sent by the backend.
/// Timestamps are accepted as well, in which case only the date part is kept.
pub fn parse_date(value: &str) -> Option<NaiveDate> {
    let value = value.trim();
    NaiveDate::parse_from_str(value, DATE_FORMAT)
        .ok()
        .or_else(|| parse_timestamp(value).map(|timestamp| timestamp.date()))
}

/// Parse a timestamp, either with an offset (RFC 3339 or ISO 8601 basic offset like `+0700`) or naive.
/// Offsets are dropped: the wall-clock time sent by the backend is kept as is.
pub fn parse_timestamp(value: &str) -> Option<NaiveDateTime> {
    let value = value.trim();
    if let Ok(timestamp) = DateTime::parse_from_rfc3339(value)
        .or_else(|_| DateTime::parse_from_str(value, OFFSET_TIMESTAMP_FORMAT))
    {
        return Some(timestamp.naive_local());
    }

    NAIVE_TIMESTAMP_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(value, format).ok())
}
