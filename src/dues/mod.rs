use crate::dues::error::DuesError::InvalidToday;
use crate::dues::error::Result;
use chrono::{NaiveDate, Utc};
use dto::dates::parse_date;

pub(crate) mod context;
pub(crate) mod due_date;
pub(crate) mod error;
pub(crate) mod evaluate;
pub(crate) mod history;

/// Current date, as seen by the server.
pub fn today() -> NaiveDate {
    Utc::now().date_naive()
}

/// Read the reference date given by a caller, defaulting to the current date.
pub fn parse_today(value: Option<&str>) -> Result<NaiveDate> {
    match value {
        None => Ok(today()),
        Some(value) => parse_date(value).ok_or_else(|| InvalidToday(value.to_owned())),
    }
}
