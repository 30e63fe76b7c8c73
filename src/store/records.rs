use chrono::NaiveDate;

use super::{StoreOptions, ValidationError};
use crate::config::{MOOD_PLACEHOLDER, MOOD_SCORE_MAX, MOOD_SCORE_MIN};
use crate::dates::{parse_iso_date, parse_iso_date_strict};
use crate::models::{
    Appointment, AppointmentInput, AppointmentStatus, Dose, MoodEntry, NewDose,
};

/// Holds every record of the session.
#[derive(Debug, Clone, Default)]
pub struct RecordStore {
    doses: Vec<Dose>,
    appointments: Vec<Appointment>,
    moods: Vec<MoodEntry>,
    options: StoreOptions,
}

impl RecordStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: StoreOptions) -> Self {
        Self {
            options,
            ..Self::default()
        }
    }

    /// Builds a store around existing collections. Ids must already be unique.
    pub(crate) fn from_records(
        doses: Vec<Dose>,
        appointments: Vec<Appointment>,
        moods: Vec<MoodEntry>,
    ) -> Self {
        Self {
            doses,
            appointments,
            moods,
            options: StoreOptions::default(),
        }
    }

    pub fn options(&self) -> StoreOptions {
        self.options
    }

    // ── Read access ─────────────────────────────────────────

    pub fn doses(&self) -> &[Dose] {
        &self.doses
    }

    pub fn appointments(&self) -> &[Appointment] {
        &self.appointments
    }

    /// Mood entries in store order (newest submissions first, not sorted).
    pub fn mood_entries(&self) -> &[MoodEntry] {
        &self.moods
    }

    pub fn dose(&self, id: u32) -> Option<&Dose> {
        self.doses.iter().find(|d| d.id == id)
    }

    pub fn appointment(&self, id: u32) -> Option<&Appointment> {
        self.appointments.iter().find(|a| a.id == id)
    }

    pub fn mood_for(&self, date: NaiveDate) -> Option<&MoodEntry> {
        self.moods.iter().find(|m| m.date == date)
    }

    // ── Mutations ───────────────────────────────────────────

    /// Appends a dose under the next free id.
    pub fn add_dose(&mut self, input: NewDose) -> Dose {
        let id = next_id(self.doses.iter().map(|d| d.id));
        let dose = input.into_dose(id);
        self.doses.push(dose.clone());
        tracing::info!(id, drug = %dose.drug_name, date = %dose.date, "Dose added");
        dose
    }

    /// Flips the taken flag. Returns the new flag, or `None` if no dose has `id`.
    pub fn toggle_dose_taken(&mut self, id: u32) -> Option<bool> {
        match self.doses.iter_mut().find(|d| d.id == id) {
            Some(dose) => {
                dose.taken = !dose.taken;
                tracing::info!(id, taken = dose.taken, "Dose taken flag toggled");
                Some(dose.taken)
            }
            None => {
                tracing::debug!(id, "Toggle ignored: no dose with this id");
                None
            }
        }
    }

    /// Validates and prepends a new Scheduled appointment.
    ///
    /// Date, time, provider, specialty and location must be non-empty after
    /// trimming. With `strict_dates`, a date that is not exactly `YYYY-MM-DD`
    /// is reported as `"date"` as well.
    pub fn add_appointment(
        &mut self,
        input: AppointmentInput,
    ) -> Result<Appointment, ValidationError> {
        let date_text = input.date.trim();
        let required = [
            ("date", date_text),
            ("time", input.time.trim()),
            ("provider", input.provider.trim()),
            ("specialty", input.specialty.trim()),
            ("location", input.location.trim()),
        ];

        let mut missing: Vec<String> = required
            .iter()
            .filter(|(_, value)| value.is_empty())
            .map(|(field, _)| field.to_string())
            .collect();

        let date = if self.options.strict_dates && !date_text.is_empty() {
            match parse_iso_date_strict(date_text) {
                Ok(date) => Some(date),
                Err(e) => {
                    tracing::warn!(error = %e, "Rejected appointment date");
                    missing.insert(0, "date".into());
                    None
                }
            }
        } else {
            Some(parse_iso_date(date_text))
        };

        let date = match date {
            Some(date) if missing.is_empty() => date,
            _ => {
                tracing::warn!(fields = ?missing, "Appointment rejected");
                return Err(ValidationError {
                    missing_fields: missing,
                });
            }
        };

        let goal = input
            .goal
            .as_deref()
            .map(str::trim)
            .filter(|g| !g.is_empty())
            .map(String::from);

        let appointment = Appointment {
            id: next_id(self.appointments.iter().map(|a| a.id)),
            date,
            time: input.time.trim().to_string(),
            provider: input.provider.trim().to_string(),
            specialty: input.specialty.trim().to_string(),
            modality: input.modality,
            location: input.location.trim().to_string(),
            status: AppointmentStatus::Scheduled,
            goal,
        };

        self.appointments.insert(0, appointment.clone());
        tracing::info!(id = appointment.id, date = %appointment.date, "Appointment added");
        Ok(appointment)
    }

    /// Overwrites the status. Returns `false` if no appointment has `id`.
    pub fn set_appointment_status(&mut self, id: u32, status: AppointmentStatus) -> bool {
        match self.appointments.iter_mut().find(|a| a.id == id) {
            Some(appointment) => {
                let previous = appointment.status;
                appointment.status = status;
                tracing::info!(id, from = %previous, to = %status, "Appointment status set");
                true
            }
            None => {
                tracing::debug!(id, "Status change ignored: no appointment with this id");
                false
            }
        }
    }

    /// Records the mood for `date`, replacing any entry already on that day.
    /// New days are prepended. A blank note stores the placeholder text.
    pub fn upsert_mood_entry(
        &mut self,
        date: NaiveDate,
        score: i32,
        note: &str,
    ) -> Result<MoodEntry, ValidationError> {
        let score = match u8::try_from(score) {
            Ok(s) if (MOOD_SCORE_MIN..=MOOD_SCORE_MAX).contains(&i32::from(s)) => s,
            _ => {
                tracing::warn!(score, "Mood score out of range");
                return Err(ValidationError::new(["score"]));
            }
        };

        let note = match note.trim() {
            "" => MOOD_PLACEHOLDER.to_string(),
            trimmed => trimmed.to_string(),
        };
        let entry = MoodEntry { date, score, note };

        match self.moods.iter_mut().find(|m| m.date == date) {
            Some(existing) => {
                *existing = entry.clone();
                tracing::info!(date = %date, score, "Mood entry replaced");
            }
            None => {
                self.moods.insert(0, entry.clone());
                tracing::info!(date = %date, score, "Mood entry recorded");
            }
        }
        Ok(entry)
    }
}

/// `max(existing) + 1`, or 1 for an empty collection.
fn next_id(ids: impl Iterator<Item = u32>) -> u32 {
    ids.max().map_or(1, |max| max + 1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{DoseOrigin, Modality};

    fn date(s: &str) -> NaiveDate {
        parse_iso_date(s)
    }

    fn new_dose(name: &str, day: &str) -> NewDose {
        NewDose {
            drug_name: name.into(),
            dosage: "50mg".into(),
            time: "08:00".into(),
            taken: false,
            note: None,
            origin: DoseOrigin::Prescribed,
            date: date(day),
        }
    }

    fn appt_input(day: &str) -> AppointmentInput {
        AppointmentInput {
            date: day.into(),
            time: "09:00".into(),
            provider: "Dr. X".into(),
            specialty: "Cardio".into(),
            modality: Modality::InPerson,
            location: "Room 1".into(),
            goal: None,
        }
    }

    // ── Dose Tests ─────────────────────────────────────────────────────

    #[test]
    fn test_add_dose_assigns_sequential_ids() {
        let mut store = RecordStore::new();
        let first = store.add_dose(new_dose("Losartan", "2024-01-16"));
        let second = store.add_dose(new_dose("Metformin", "2024-01-16"));
        assert_eq!(first.id, 1);
        assert_eq!(second.id, 2);
        assert_eq!(store.doses().last().unwrap().drug_name, "Metformin");
    }

    #[test]
    fn test_add_dose_uses_max_id_plus_one() {
        let existing = new_dose("Losartan", "2024-01-16").into_dose(7);
        let mut store = RecordStore::from_records(vec![existing], vec![], vec![]);
        assert_eq!(store.add_dose(new_dose("Metformin", "2024-01-16")).id, 8);
    }

    #[test]
    fn test_toggle_dose_taken() {
        let mut store = RecordStore::new();
        let dose = store.add_dose(new_dose("Losartan", "2024-01-16"));
        assert_eq!(store.toggle_dose_taken(dose.id), Some(true));
        assert!(store.dose(dose.id).unwrap().taken);
        assert_eq!(store.toggle_dose_taken(dose.id), Some(false));
        assert!(!store.dose(dose.id).unwrap().taken);
    }

    #[test]
    fn test_toggle_unknown_dose_is_noop() {
        let mut store = RecordStore::new();
        store.add_dose(new_dose("Losartan", "2024-01-16"));
        let before = store.doses().to_vec();
        assert_eq!(store.toggle_dose_taken(99), None);
        assert_eq!(store.doses(), before.as_slice());
    }

    // ── Appointment Tests ──────────────────────────────────────────────

    #[test]
    fn test_add_appointment_scheduled_and_prepended() {
        let mut store = RecordStore::new();
        let a = store.add_appointment(appt_input("2024-01-10")).unwrap();
        let b = store.add_appointment(appt_input("2024-01-11")).unwrap();
        assert_eq!(a.id, 1);
        assert_eq!(b.id, 2);
        assert_eq!(b.status, AppointmentStatus::Scheduled);
        assert_eq!(store.appointments()[0].id, 2);
        assert_eq!(store.appointments()[1].id, 1);
    }

    #[test]
    fn test_add_appointment_trims_fields() {
        let mut store = RecordStore::new();
        let mut input = appt_input("2024-01-10");
        input.provider = "  Dr. Silva ".into();
        input.goal = Some("   ".into());
        let appt = store.add_appointment(input).unwrap();
        assert_eq!(appt.provider, "Dr. Silva");
        assert_eq!(appt.goal, None);
        assert_eq!(appt.date, date("2024-01-10"));
    }

    #[test]
    fn test_add_appointment_missing_date() {
        let mut store = RecordStore::new();
        let err = store.add_appointment(appt_input("")).unwrap_err();
        assert_eq!(err, ValidationError::new(["date"]));
        assert!(store.appointments().is_empty());
    }

    #[test]
    fn test_add_appointment_lists_every_blank_field() {
        let mut store = RecordStore::new();
        let mut input = appt_input("2024-01-10");
        input.time = " ".into();
        input.specialty = String::new();
        input.location = "\t".into();
        let err = store.add_appointment(input).unwrap_err();
        assert_eq!(err.missing_fields, vec!["time", "specialty", "location"]);
        assert!(store.appointments().is_empty());
    }

    #[test]
    fn test_add_appointment_permissive_date() {
        let mut store = RecordStore::new();
        let appt = store.add_appointment(appt_input("2024-xx")).unwrap();
        assert_eq!(appt.date, date("2024-01-01"));
    }

    #[test]
    fn test_add_appointment_strict_date_rejected() {
        let mut store = RecordStore::with_options(StoreOptions { strict_dates: true });
        let mut input = appt_input("2024-xx");
        input.provider = String::new();
        let err = store.add_appointment(input).unwrap_err();
        assert_eq!(err.missing_fields, vec!["date", "provider"]);
        assert!(store.appointments().is_empty());

        assert!(store.add_appointment(appt_input("2024-01-10")).is_ok());
    }

    #[test]
    fn test_set_appointment_status_any_transition() {
        let mut store = RecordStore::new();
        let appt = store.add_appointment(appt_input("2024-01-10")).unwrap();
        for status in [
            AppointmentStatus::Cancelled,
            AppointmentStatus::Completed,
            AppointmentStatus::Scheduled,
            AppointmentStatus::Cancelled,
        ] {
            assert!(store.set_appointment_status(appt.id, status));
            assert_eq!(store.appointment(appt.id).unwrap().status, status);
        }
    }

    #[test]
    fn test_set_status_unknown_is_noop() {
        let mut store = RecordStore::new();
        store.add_appointment(appt_input("2024-01-10")).unwrap();
        assert!(!store.set_appointment_status(42, AppointmentStatus::Completed));
        assert_eq!(store.appointments()[0].status, AppointmentStatus::Scheduled);
    }

    // ── Mood Tests ─────────────────────────────────────────────────────

    #[test]
    fn test_upsert_mood_replaces_same_day() {
        let mut store = RecordStore::new();
        let day = date("2024-01-16");
        store.upsert_mood_entry(day, 4, "Tired").unwrap();
        store.upsert_mood_entry(day, 9, "Great").unwrap();

        let same_day: Vec<_> = store.mood_entries().iter().filter(|m| m.date == day).collect();
        assert_eq!(same_day.len(), 1);
        assert_eq!(same_day[0].score, 9);
        assert_eq!(same_day[0].note, "Great");
    }

    #[test]
    fn test_upsert_mood_prepends_new_days() {
        let mut store = RecordStore::new();
        store.upsert_mood_entry(date("2024-01-16"), 5, "a").unwrap();
        store.upsert_mood_entry(date("2024-01-10"), 6, "b").unwrap();
        assert_eq!(store.mood_entries()[0].date, date("2024-01-10"));
        assert_eq!(store.mood_entries()[1].date, date("2024-01-16"));
    }

    #[test]
    fn test_upsert_mood_replacement_keeps_position() {
        let mut store = RecordStore::new();
        store.upsert_mood_entry(date("2024-01-14"), 5, "a").unwrap();
        store.upsert_mood_entry(date("2024-01-15"), 6, "b").unwrap();
        store.upsert_mood_entry(date("2024-01-14"), 7, "c").unwrap();
        assert_eq!(store.mood_entries().len(), 2);
        assert_eq!(store.mood_entries()[1].note, "c");
    }

    #[test]
    fn test_upsert_mood_blank_note_uses_placeholder() {
        let mut store = RecordStore::new();
        let entry = store.upsert_mood_entry(date("2024-01-16"), 7, "   ").unwrap();
        assert_eq!(entry.note, MOOD_PLACEHOLDER);
    }

    #[test]
    fn test_upsert_mood_score_bounds() {
        let mut store = RecordStore::new();
        let day = date("2024-01-16");
        assert!(store.upsert_mood_entry(day, 0, "").is_ok());
        assert!(store.upsert_mood_entry(day, 10, "").is_ok());

        for bad in [-1, 11, 300] {
            let err = store.upsert_mood_entry(day, bad, "x").unwrap_err();
            assert_eq!(err.missing_fields, vec!["score"]);
        }
        assert_eq!(store.mood_for(day).unwrap().score, 10);
    }
}
