//! Record store: the three in-memory collections (doses, appointments, mood
//! entries) and the only write surface over them.
//!
//! The store is an explicit value owned by the session and passed by
//! reference; there is no global instance. Access is sequential (`&mut self`
//! for writes), so embedding it behind concurrent callers needs an outer
//! serialization point such as a `Mutex`.

mod fixtures;
mod records;

pub use records::*;

use thiserror::Error;

/// Rejected input. Lists the fields that were missing or out of range;
/// the store is left untouched.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Missing or invalid fields: {}", .missing_fields.join(", "))]
pub struct ValidationError {
    pub missing_fields: Vec<String>,
}

impl ValidationError {
    pub fn new<I, S>(fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            missing_fields: fields.into_iter().map(Into::into).collect(),
        }
    }
}

/// Behaviour switches for the store.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StoreOptions {
    /// Reject appointment dates that are not exactly `YYYY-MM-DD` instead of
    /// parsing them permissively.
    pub strict_dates: bool,
}
