//! Calendar-date helpers shared by the store, the period filter and the timeline.
//!
//! Every record carries a local calendar date with no time or timezone, so all
//! comparisons here are on whole days. `NaiveDate` equality is calendar-day
//! equality, which is what the mood upsert and the timeline grouping key on.

use chrono::{Days, Months, NaiveDate};
use thiserror::Error;

const ISO_FORMAT: &str = "%Y-%m-%d";
const DISPLAY_FORMAT: &str = "%d/%m/%Y";

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DateError {
    #[error("Invalid ISO date '{value}': {reason}")]
    Invalid { value: String, reason: String },
}

/// Formats a date as `YYYY-MM-DD`.
pub fn to_iso_date(date: NaiveDate) -> String {
    date.format(ISO_FORMAT).to_string()
}

/// Formats a date as `DD/MM/YYYY` for display.
pub fn format_display_date(date: NaiveDate) -> String {
    date.format(DISPLAY_FORMAT).to_string()
}

/// Parses `YYYY-MM-DD` without ever failing.
///
/// Each segment is read as its leading digits. A missing or non-numeric year
/// becomes year 0; a missing, zero or non-numeric month or day becomes 1.
/// Out-of-range months and days roll over into the following month or year,
/// so `"2024-13-01"` is 2025-01-01 and `"2024-02-30"` is 2024-03-01.
pub fn parse_iso_date(text: &str) -> NaiveDate {
    let mut parts = text.split('-');

    let year = parts
        .next()
        .and_then(leading_number)
        .and_then(|y| i32::try_from(y).ok())
        .filter(|&y| NaiveDate::from_ymd_opt(y, 1, 1).is_some())
        .unwrap_or(0);
    let month = parts.next().and_then(leading_number).filter(|&m| m != 0).unwrap_or(1);
    let day = parts.next().and_then(leading_number).filter(|&d| d != 0).unwrap_or(1);

    NaiveDate::from_ymd_opt(year, 1, 1)
        .and_then(|d| d.checked_add_months(Months::new(month - 1)))
        .and_then(|d| d.checked_add_days(Days::new(u64::from(day - 1))))
        .unwrap_or(NaiveDate::MAX)
}

/// Parses exactly `YYYY-MM-DD`, rejecting anything else.
pub fn parse_iso_date_strict(text: &str) -> Result<NaiveDate, DateError> {
    let bytes = text.as_bytes();
    let shaped = bytes.len() == 10
        && bytes[4] == b'-'
        && bytes[7] == b'-'
        && bytes
            .iter()
            .enumerate()
            .all(|(i, b)| i == 4 || i == 7 || b.is_ascii_digit());

    if !shaped {
        return Err(DateError::Invalid {
            value: text.to_string(),
            reason: "expected YYYY-MM-DD".into(),
        });
    }

    NaiveDate::parse_from_str(text, ISO_FORMAT).map_err(|e| DateError::Invalid {
        value: text.to_string(),
        reason: e.to_string(),
    })
}

/// The date `n` days before `reference`; negative `n` moves forward.
pub fn days_ago(reference: NaiveDate, n: i64) -> NaiveDate {
    reference
        .checked_sub_signed(chrono::Duration::days(n))
        .unwrap_or(reference)
}

/// True iff `date` lies in the `window_days` consecutive days ending at
/// `reference`, both ends inclusive. A zero-day window contains nothing.
pub fn date_in_window(date: NaiveDate, window_days: u32, reference: NaiveDate) -> bool {
    if window_days == 0 {
        return false;
    }
    let start = reference
        .checked_sub_days(Days::new(u64::from(window_days - 1)))
        .unwrap_or(NaiveDate::MIN);
    start <= date && date <= reference
}

/// Window test on an ISO string, parsed permissively.
pub fn is_within_trailing_window(iso_date: &str, window_days: u32, reference: NaiveDate) -> bool {
    date_in_window(parse_iso_date(iso_date), window_days, reference)
}

fn leading_number(segment: &str) -> Option<u32> {
    let trimmed = segment.trim_start();
    let end = trimmed
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(trimmed.len());
    trimmed[..end].parse().ok()
}
