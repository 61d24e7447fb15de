use chrono::{Datelike, Duration, NaiveDate};

/// Encodes a date as the YYYYMMDD integer the monitor endpoint expects.
/// Uses the date's calendar fields as-is; no timezone conversion.
pub fn encode_date(date: NaiveDate) -> u32 {
    date.year() as u32 * 10_000 + date.month() * 100 + date.day()
}

/// Adds `offset_days` (possibly negative) to `base` with full month and
/// year rollover.
pub fn apply_offset(base: NaiveDate, offset_days: i64) -> NaiveDate {
    base + Duration::days(offset_days)
}
