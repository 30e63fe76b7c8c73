pub mod appointment;
pub mod dose;
pub mod enums;
pub mod mood;

pub use appointment::*;
pub use dose::*;
pub use enums::*;
pub use mood::*;

use chrono::NaiveDate;

/// A record that belongs to one calendar day.
pub trait Dated {
    fn date(&self) -> NaiveDate;
}

/// A record scheduled at an `HH:MM` time-of-day.
pub trait TimeOfDay {
    fn time(&self) -> &str;
}
