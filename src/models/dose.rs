use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::enums::DoseOrigin;
use super::{Dated, TimeOfDay};

/// One scheduled intake of a medication on a given day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dose {
    pub id: u32,
    pub drug_name: String,
    pub dosage: String,
    pub time: String, // HH:MM
    pub taken: bool,
    pub note: Option<String>,
    pub origin: DoseOrigin,
    pub date: NaiveDate,
}

/// Dose fields supplied by the caller; the store assigns the id.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewDose {
    pub drug_name: String,
    pub dosage: String,
    pub time: String,
    pub taken: bool,
    pub note: Option<String>,
    pub origin: DoseOrigin,
    pub date: NaiveDate,
}

impl NewDose {
    pub(crate) fn into_dose(self, id: u32) -> Dose {
        Dose {
            id,
            drug_name: self.drug_name,
            dosage: self.dosage,
            time: self.time,
            taken: self.taken,
            note: self.note,
            origin: self.origin,
            date: self.date,
        }
    }
}

impl Dated for Dose {
    fn date(&self) -> NaiveDate {
        self.date
    }
}

impl TimeOfDay for Dose {
    fn time(&self) -> &str {
        &self.time
    }
}
