use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::Dated;

/// Daily wellbeing check-in. The date is the key: one entry per day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoodEntry {
    pub date: NaiveDate,
    pub score: u8, // 0..=10
    pub note: String,
}

impl Dated for MoodEntry {
    fn date(&self) -> NaiveDate {
        self.date
    }
}
