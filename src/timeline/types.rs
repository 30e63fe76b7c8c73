use std::collections::BTreeSet;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::{Appointment, Dated, Dose, MoodEntry, TimeOfDay};

/// Everything recorded on one calendar day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayGroup {
    pub date: NaiveDate,
    pub mood: Option<MoodEntry>,
    /// Ascending by time-of-day.
    pub doses: Vec<Dose>,
    /// Ascending by time-of-day.
    pub appointments: Vec<Appointment>,
}

impl DayGroup {
    pub fn is_empty(&self) -> bool {
        self.mood.is_none() && self.doses.is_empty() && self.appointments.is_empty()
    }
}

/// Day groups, most recent day first.
///
/// Groups are assembled as the iterator advances and records are moved out
/// as they are consumed, so a `Timeline` can be walked once. Build a new one
/// to walk again.
#[derive(Debug)]
pub struct Timeline {
    dates: std::vec::IntoIter<NaiveDate>,
    doses: Vec<Dose>,
    appointments: Vec<Appointment>,
    moods: Vec<MoodEntry>,
}

impl Timeline {
    pub(crate) fn new(doses: Vec<Dose>, appointments: Vec<Appointment>, moods: Vec<MoodEntry>) -> Self {
        let days: BTreeSet<NaiveDate> = doses
            .iter()
            .map(Dated::date)
            .chain(appointments.iter().map(Dated::date))
            .chain(moods.iter().map(Dated::date))
            .collect();
        let dates: Vec<NaiveDate> = days.into_iter().rev().collect();

        Self {
            dates: dates.into_iter(),
            doses,
            appointments,
            moods,
        }
    }

    /// True when no day is left to yield. A timeline built from empty
    /// inputs starts out empty; callers show a "no records" state for it.
    pub fn is_empty(&self) -> bool {
        self.dates.len() == 0
    }
}

impl Iterator for Timeline {
    type Item = DayGroup;

    fn next(&mut self) -> Option<DayGroup> {
        let date = self.dates.next()?;

        let mood = self
            .moods
            .iter()
            .position(|m| m.date == date)
            .map(|i| self.moods.swap_remove(i));

        Some(DayGroup {
            date,
            mood,
            doses: take_day(&mut self.doses, date),
            appointments: take_day(&mut self.appointments, date),
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.dates.size_hint()
    }
}

impl ExactSizeIterator for Timeline {}

/// Moves the records dated `date` out of `records`, sorted by time-of-day.
fn take_day<T: Dated + TimeOfDay>(records: &mut Vec<T>, date: NaiveDate) -> Vec<T> {
    let (mut day, rest): (Vec<T>, Vec<T>) =
        std::mem::take(records).into_iter().partition(|r| r.date() == date);
    *records = rest;
    day.sort_by(|a, b| a.time().cmp(b.time()));
    day
}
