use chrono::{Months, NaiveDate};

/// Advance `base_date` by one calendar month, keeping its day of month.
/// When the target month is too short, the last day of that month is used
/// (2024-01-31 becomes 2024-02-29).
/// Return None only when the result is out of chrono's range.
pub fn next_due_date(base_date: &NaiveDate) -> Option<NaiveDate> {
    base_date.checked_add_months(Months::new(1))
}

/// Number of whole days between today and the due date, negative when it has passed.
pub fn days_until(today: &NaiveDate, due_date: &NaiveDate) -> i64 {
    due_date.signed_duration_since(*today).num_days()
}
