//! Period aggregation over the record store.
//!
//! Filters doses, appointments and mood entries to a trailing window, derives
//! adherence percentages and the mean mood for that window, and merges the
//! three kinds into a day-grouped timeline, most recent day first.

mod aggregates;
mod filter;
mod types;

pub use aggregates::*;
pub use filter::*;
pub use types::*;

use chrono::NaiveDate;

use crate::models::{Appointment, Dose, MoodEntry};
use crate::store::RecordStore;

/// Merges already-filtered records into day groups, most recent day first.
pub fn build_timeline(
    doses: Vec<Dose>,
    appointments: Vec<Appointment>,
    moods: Vec<MoodEntry>,
) -> Timeline {
    Timeline::new(doses, appointments, moods)
}

/// Mood entries in ascending date order, for the trend chart.
pub fn mood_series(moods: &[MoodEntry]) -> Vec<MoodEntry> {
    let mut series = moods.to_vec();
    series.sort_by_key(|m| m.date);
    series
}

/// The history timeline for the window ending at `reference`.
pub fn history_for(store: &RecordStore, window_days: u32, reference: NaiveDate) -> Timeline {
    let period = filter_store(store, window_days, reference);
    build_timeline(period.doses, period.appointments, period.moods)
}

// ── Tests ──────────────────────────────────────────────────────────────────
