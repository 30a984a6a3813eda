use chrono::{DateTime, Days, NaiveDate, NaiveTime, Utc};

/// Returns UTC midnight at the start of `date`.
pub fn day_start(date: NaiveDate) -> DateTime<Utc> {
    date.and_time(NaiveTime::MIN).and_utc()
}

/// Converts an inclusive range of calendar days into a half-open `[from, until)` UTC window.
///
/// # Returns
/// - `Some((from, until))` - Midnight of `start` and midnight of the day after `end`
/// - `None` - `end` is the last representable date
pub fn day_window(start: NaiveDate, end: NaiveDate) -> Option<(DateTime<Utc>, DateTime<Utc>)> {
    let after_end = end.checked_add_days(Days::new(1))?;

    Some((day_start(start), day_start(after_end)))
}
