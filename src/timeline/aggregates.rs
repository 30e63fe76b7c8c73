use serde::{Deserialize, Serialize};

use super::filter::PeriodRecords;
use crate::models::{Appointment, AppointmentStatus, Dose, MoodEntry};

/// Adherence figures for one period, plus the counts behind them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdherenceStats {
    pub medication_adherence: u8,
    pub appointment_adherence: u8,
    /// Mean mood score with one decimal, e.g. `"7.0"`.
    pub average_mood: String,
    pub total_doses: u32,
    pub taken_doses: u32,
    pub total_appointments: u32,
    pub completed_appointments: u32,
    pub mood_entries: u32,
}

/// Percentage of doses marked taken, rounded half-up.
///
/// An empty period reads as 0%, not "undefined". That is a product decision
/// for the dashboard, not an arithmetic identity.
pub fn medication_adherence(doses: &[Dose]) -> u8 {
    let taken = doses.iter().filter(|d| d.taken).count();
    percent(taken, doses.len())
}

/// Percentage of non-cancelled appointments that were completed, rounded
/// half-up. Cancelled visits count in neither numerator nor denominator;
/// no valid appointments reads as 0%.
pub fn appointment_adherence(appointments: &[Appointment]) -> u8 {
    let (valid, completed) = appointment_counts(appointments);
    percent(completed, valid)
}

/// Mean mood score formatted to one decimal; `"0.0"` when there are none.
pub fn average_mood(moods: &[MoodEntry]) -> String {
    if moods.is_empty() {
        return "0.0".into();
    }
    let sum: u32 = moods.iter().map(|m| u32::from(m.score)).sum();
    format!("{:.1}", f64::from(sum) / moods.len() as f64)
}

/// All adherence figures for an already-filtered period.
pub fn compute_adherence(period: &PeriodRecords) -> AdherenceStats {
    let taken = period.doses.iter().filter(|d| d.taken).count();
    let (_, completed) = appointment_counts(&period.appointments);

    AdherenceStats {
        medication_adherence: medication_adherence(&period.doses),
        appointment_adherence: appointment_adherence(&period.appointments),
        average_mood: average_mood(&period.moods),
        total_doses: count(period.doses.len()),
        taken_doses: count(taken),
        total_appointments: count(period.appointments.len()),
        completed_appointments: count(completed),
        mood_entries: count(period.moods.len()),
    }
}

/// (valid, completed) where valid excludes cancelled.
fn appointment_counts(appointments: &[Appointment]) -> (usize, usize) {
    appointments
        .iter()
        .filter(|a| a.status != AppointmentStatus::Cancelled)
        .fold((0, 0), |(valid, completed), a| {
            let done = usize::from(a.status == AppointmentStatus::Completed);
            (valid + 1, completed + done)
        })
}

fn percent(part: usize, whole: usize) -> u8 {
    if whole == 0 {
        return 0;
    }
    // Integer half-up: floor((200 * part + whole) / (2 * whole)).
    let rounded = (200 * part + whole) / (2 * whole);
    u8::try_from(rounded).unwrap_or(100)
}

fn count(n: usize) -> u32 {
    u32::try_from(n).unwrap_or(u32::MAX)
}
