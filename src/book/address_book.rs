//! AddressBook: the owning directory of contact records.

use super::record::ContactRecord;
use super::schedule::WeeklySchedule;
use crate::error::NotFoundError;
use chrono::NaiveDate;
use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;
use tracing::debug;

/// The directory of all contact records, keyed by unique name.
///
/// The mapping is owned outright and never handed out for arbitrary
/// mutation; callers go through the defined operations. There is no
/// process-wide instance: the application constructs one and threads
/// it through explicitly.
///
/// The documented caller pattern for adding is look-up-first: `find` the
/// name, mutate the existing record in place if present, and only
/// construct-and-insert a new record when absent. `add_record` itself
/// overwrites silently.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct AddressBook {
    records: BTreeMap<String, ContactRecord>,
}

impl AddressBook {
    /// Create an empty address book.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a record, keyed by its name. An existing record under the
    /// same name is replaced.
    pub fn add_record(&mut self, record: ContactRecord) {
        debug!(name = record.name(), "adding record");
        self.records.insert(record.name().to_string(), record);
    }

    /// Look up a record by exact name. Absence is not an error.
    pub fn find(&self, name: &str) -> Option<&ContactRecord> {
        self.records.get(name)
    }

    /// Look up a record by exact name for in-place mutation.
    pub fn find_mut(&mut self, name: &str) -> Option<&mut ContactRecord> {
        self.records.get_mut(name)
    }

    /// Remove the record with the given name.
    ///
    /// # Errors
    ///
    /// Returns `NotFoundError::RecordNotFound` if no such record exists;
    /// the mapping is unchanged in that case.
    pub fn delete(&mut self, name: &str) -> Result<(), NotFoundError> {
        match self.records.remove(name) {
            Some(_) => {
                debug!(name, "record deleted");
                Ok(())
            }
            None => Err(NotFoundError::RecordNotFound(name.to_string())),
        }
    }

    /// Number of records in the book.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the book holds no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// All records in iteration (name) order.
    pub fn iter(&self) -> impl Iterator<Item = &ContactRecord> {
        self.records.values()
    }

    /// Compute which contacts have a birthday within the next 7 days,
    /// bucketed by announcement weekday. See [`WeeklySchedule::compute`].
    ///
    /// `today` is caller-supplied so the query stays deterministic.
    pub fn upcoming_birthdays(&self, today: NaiveDate) -> WeeklySchedule {
        WeeklySchedule::compute(self.iter(), today)
    }
}

impl fmt::Display for AddressBook {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rendered = self
            .records
            .values()
            .map(ContactRecord::to_string)
            .collect::<Vec<_>>()
            .join("\n");
        write!(f, "{}", rendered.trim_end())
    }
}
