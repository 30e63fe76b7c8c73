//! Dashboard data: today's doses, the next scheduled visit, and the
//! adherence figures for the selected period.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::config::Period;
use crate::models::{Appointment, AppointmentStatus, Dose};
use crate::store::RecordStore;
use crate::timeline::{compute_adherence, filter_store, AdherenceStats};

// ---------------------------------------------------------------------------
// Types
// ---------------------------------------------------------------------------

/// Everything the home screen renders, in one payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HomeData {
    pub today: NaiveDate,
    pub period: Period,
    /// Doses dated today, ascending by time-of-day.
    pub doses_today: Vec<Dose>,
    pub next_appointment: Option<Appointment>,
    pub stats: AdherenceStats,
}

// ---------------------------------------------------------------------------
// Assembly
// ---------------------------------------------------------------------------

pub fn doses_for_day(store: &RecordStore, day: NaiveDate) -> Vec<Dose> {
    let mut doses: Vec<Dose> = store.doses().iter().filter(|d| d.date == day).cloned().collect();
    doses.sort_by(|a, b| a.time.cmp(&b.time));
    doses
}

/// The Scheduled appointment with the earliest date. Ties keep store order.
pub fn next_appointment(store: &RecordStore) -> Option<Appointment> {
    store
        .appointments()
        .iter()
        .filter(|a| a.status == AppointmentStatus::Scheduled)
        .fold(None, |best: Option<&Appointment>, a| match best {
            Some(b) if b.date <= a.date => Some(b),
            _ => Some(a),
        })
        .cloned()
}

pub fn fetch_home_data(store: &RecordStore, period: Period, today: NaiveDate) -> HomeData {
    let records = filter_store(store, period.days(), today);

    HomeData {
        today,
        period,
        doses_today: doses_for_day(store, today),
        next_appointment: next_appointment(store),
        stats: compute_adherence(&records),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
