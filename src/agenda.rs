//! Agenda ordering for the appointment list.

use crate::models::Appointment;
use crate::store::RecordStore;

/// All appointments, latest date first; within a day, latest time first.
pub fn sorted_agenda(store: &RecordStore) -> Vec<Appointment> {
    let mut agenda = store.appointments().to_vec();
    agenda.sort_by(|a, b| b.date.cmp(&a.date).then_with(|| b.time.cmp(&a.time)));
    agenda
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{AppointmentInput, Modality};
    use chrono::NaiveDate;

    #[test]
    fn agenda_date_then_time_descending() {
        let today = NaiveDate::from_ymd_opt(2024, 1, 16).unwrap();
        let mut store = RecordStore::with_fixtures(today);
        store
            .add_appointment(AppointmentInput {
                date: "2024-01-14".into(),
                time: "18:00".into(),
                provider: "Dr. Costa".into(),
                specialty: "Physiotherapy".into(),
                modality: Modality::InPerson,
                location: "Gym".into(),
                goal: None,
            })
            .unwrap();

        let ids: Vec<u32> = sorted_agenda(&store).iter().map(|a| a.id).collect();
        // 17th (1), 14th 18:00 (4), 14th 10:00 (2), 10th (3)
        assert_eq!(ids, vec![1, 4, 2, 3]);
    }

    #[test]
    fn agenda_empty_store() {
        assert!(sorted_agenda(&RecordStore::new()).is_empty());
    }
}
