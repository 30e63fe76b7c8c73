use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::dates::date_in_window;
use crate::models::{Appointment, Dated, Dose, MoodEntry};
use crate::store::RecordStore;

/// The records of each kind that fall inside one trailing window.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PeriodRecords {
    pub doses: Vec<Dose>,
    pub appointments: Vec<Appointment>,
    pub moods: Vec<MoodEntry>,
}

/// Keeps the records dated within the last `window_days` days ending at
/// `reference`. Source order is preserved.
pub fn filter_by_window<T: Dated + Clone>(
    records: &[T],
    window_days: u32,
    reference: NaiveDate,
) -> Vec<T> {
    records
        .iter()
        .filter(|r| date_in_window(r.date(), window_days, reference))
        .cloned()
        .collect()
}

/// Applies the same window to all three collections of the store.
pub fn filter_store(store: &RecordStore, window_days: u32, reference: NaiveDate) -> PeriodRecords {
    PeriodRecords {
        doses: filter_by_window(store.doses(), window_days, reference),
        appointments: filter_by_window(store.appointments(), window_days, reference),
        moods: filter_by_window(store.mood_entries(), window_days, reference),
    }
}
