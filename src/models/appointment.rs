use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::enums::{AppointmentStatus, Modality};
use super::{Dated, TimeOfDay};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Appointment {
    pub id: u32,
    pub date: NaiveDate,
    pub time: String, // HH:MM
    pub provider: String,
    pub specialty: String,
    pub modality: Modality,
    /// Street address for in-person visits, meeting link for remote ones.
    pub location: String,
    pub status: AppointmentStatus,
    pub goal: Option<String>,
}

/// Raw form input for a new appointment. Text fields are validated and
/// trimmed by the store before an `Appointment` is created.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppointmentInput {
    pub date: String, // YYYY-MM-DD
    pub time: String,
    pub provider: String,
    pub specialty: String,
    pub modality: Modality,
    pub location: String,
    pub goal: Option<String>,
}

impl Dated for Appointment {
    fn date(&self) -> NaiveDate {
        self.date
    }
}

impl TimeOfDay for Appointment {
    fn time(&self) -> &str {
        &self.time
    }
}
