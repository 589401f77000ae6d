//! ContactRecord: a single named contact with phones and an optional birthday.

use crate::domain::{BirthdayDate, PhoneNumber, ValidationError};
use crate::error::{BookResult, NotFoundError};
use serde::Serialize;
use std::fmt;

/// A named contact owning an ordered list of phone numbers and at most
/// one birthday.
///
/// Phones keep insertion order and duplicates are permitted. All phone
/// lookups (`edit_phone`, `remove_phone`, `find_phone`) match by exact
/// string value and operate on the first match only. A failing mutation
/// leaves the record untouched.
///
/// Records are owned exclusively by the [`AddressBook`](crate::book::AddressBook)
/// entry that stores them; there is no sharing across entries.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ContactRecord {
    name: String,
    phones: Vec<PhoneNumber>,
    birthday: Option<BirthdayDate>,
}

impl ContactRecord {
    /// Create a record with the given name, no phones and no birthday.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::EmptyName` if the name is empty or
    /// whitespace-only.
    pub fn new(name: impl Into<String>) -> Result<Self, ValidationError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(ValidationError::EmptyName);
        }

        Ok(Self {
            name,
            phones: Vec::new(),
            birthday: None,
        })
    }

    /// The record's name, which is also its key in the address book.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The record's phones in insertion order.
    pub fn phones(&self) -> &[PhoneNumber] {
        &self.phones
    }

    /// The record's birthday, if one has been set.
    pub fn birthday(&self) -> Option<BirthdayDate> {
        self.birthday
    }

    /// Validate and append a phone number. Duplicates are allowed.
    ///
    /// On validation failure the phone list is unchanged; the caller
    /// decides whether to treat that as fatal.
    pub fn add_phone(&mut self, raw: &str) -> Result<(), ValidationError> {
        let phone = PhoneNumber::new(raw)?;
        self.phones.push(phone);
        Ok(())
    }

    /// Replace the first phone equal to `old` with `new`.
    ///
    /// # Errors
    ///
    /// Returns `NotFoundError::PhoneNotFound` if no phone equals `old`, and
    /// `ValidationError::InvalidPhone` if `new` is not a valid phone number.
    /// Either way the phone list is unchanged.
    pub fn edit_phone(&mut self, old: &str, new: &str) -> BookResult<()> {
        let index = self
            .phones
            .iter()
            .position(|p| p.as_str() == old)
            .ok_or_else(|| NotFoundError::PhoneNotFound(old.to_string()))?;

        let replacement = PhoneNumber::new(new)?;
        self.phones[index] = replacement;
        Ok(())
    }

    /// Remove the first phone equal to `raw`.
    ///
    /// # Errors
    ///
    /// Returns `NotFoundError::PhoneNotFound` if no phone matches; the
    /// list is unchanged in that case.
    pub fn remove_phone(&mut self, raw: &str) -> Result<(), NotFoundError> {
        let index = self
            .phones
            .iter()
            .position(|p| p.as_str() == raw)
            .ok_or_else(|| NotFoundError::PhoneNotFound(raw.to_string()))?;

        self.phones.remove(index);
        Ok(())
    }

    /// Find the first phone equal to `raw`, if any.
    pub fn find_phone(&self, raw: &str) -> Option<&PhoneNumber> {
        self.phones.iter().find(|p| p.as_str() == raw)
    }

    /// Parse and set the birthday, overwriting any previous value.
    ///
    /// On parse failure the previously stored birthday (if any) is kept.
    pub fn add_birthday(&mut self, raw: &str) -> Result<(), ValidationError> {
        let birthday = BirthdayDate::parse(raw)?;
        self.birthday = Some(birthday);
        Ok(())
    }
}

impl fmt::Display for ContactRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let phones = self
            .phones
            .iter()
            .map(PhoneNumber::as_str)
            .collect::<Vec<_>>()
            .join("; ");
        write!(f, "Contact name: {}, phones: {}", self.name, phones)
    }
}
