//! Demo data the session starts with, laid out relative to "today".

use chrono::NaiveDate;

use super::RecordStore;
use crate::dates::days_ago;
use crate::models::{Appointment, AppointmentStatus, Dose, DoseOrigin, Modality, MoodEntry};

impl RecordStore {
    /// A store seeded with a few days of doses, three appointments (one in
    /// each status) and four mood check-ins, all dated relative to `today`.
    pub fn with_fixtures(today: NaiveDate) -> Self {
        let dose = |id, name: &str, dosage: &str, time: &str, taken, note: Option<&str>, origin, ago| Dose {
            id,
            drug_name: name.into(),
            dosage: dosage.into(),
            time: time.into(),
            taken,
            note: note.map(String::from),
            origin,
            date: days_ago(today, ago),
        };

        let doses = vec![
            dose(1, "Losartan", "50mg", "08:00", true, Some("Fasting"), DoseOrigin::Prescribed, 0),
            dose(2, "Metformin", "850mg", "12:00", false, Some("After lunch"), DoseOrigin::SelfReported, 0),
            dose(3, "Losartan", "50mg", "08:00", true, Some("Fasting"), DoseOrigin::Prescribed, 1),
            dose(4, "Vitamin D", "2000IU", "20:00", true, None, DoseOrigin::Prescribed, 2),
            dose(5, "Metformin", "850mg", "12:00", true, None, DoseOrigin::SelfReported, 2),
        ];

        let appointments = vec![
            Appointment {
                id: 1,
                date: days_ago(today, -1),
                time: "14:30".into(),
                provider: "Dr. Alberto Rossi".into(),
                specialty: "Cardiology".into(),
                modality: Modality::InPerson,
                location: "Av. Paulista, 1000".into(),
                status: AppointmentStatus::Scheduled,
                goal: Some("Annual check-up".into()),
            },
            Appointment {
                id: 2,
                date: days_ago(today, 2),
                time: "10:00".into(),
                provider: "Dr. Elena Silva".into(),
                specialty: "Nutrition".into(),
                modality: Modality::Remote,
                location: "https://meet.example.com/vivercom-nutrition".into(),
                status: AppointmentStatus::Completed,
                goal: Some("Diet adjustment".into()),
            },
            Appointment {
                id: 3,
                date: days_ago(today, 6),
                time: "16:00".into(),
                provider: "Dr. Paulo Mendes".into(),
                specialty: "General Practice".into(),
                modality: Modality::InPerson,
                location: "Central Clinic".into(),
                status: AppointmentStatus::Cancelled,
                goal: Some("Follow-up".into()),
            },
        ];

        let mood = |ago, score, note: &str| MoodEntry {
            date: days_ago(today, ago),
            score,
            note: note.into(),
        };
        let moods = vec![
            mood(0, 8, "Feeling good today."),
            mood(1, 6, "A little tired."),
            mood(2, 7, "Productive day."),
            mood(4, 5, "Slept badly, slower."),
        ];

        Self::from_records(doses, appointments, moods)
    }
}
