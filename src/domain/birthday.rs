//! BirthdayDate value object.

use super::errors::ValidationError;
use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// The one textual date format the directory accepts and renders.
pub const DATE_FORMAT: &str = "%d.%m.%Y";

static DATE_SHAPE_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d{2}\.\d{2}\.\d{4}$").expect("Failed to compile date regex"));

/// A type-safe wrapper for a contact's birthday.
///
/// Parsed from the fixed `DD.MM.YYYY` pattern and rendered back to it, so
/// `parse` and `to_string` round-trip. The underlying value is a plain
/// calendar date with no time-of-day component.
///
/// # Example
///
/// ```
/// use contact_assistant::domain::BirthdayDate;
///
/// let birthday = BirthdayDate::parse("12.03.1990").unwrap();
/// assert_eq!(birthday.to_string(), "12.03.1990");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct BirthdayDate(NaiveDate);

impl BirthdayDate {
    /// Parse a birthday from the exact `DD.MM.YYYY` pattern.
    ///
    /// Both the shape and the calendar are checked: `1.2.1990` is rejected
    /// for its shape, `31.02.1990` for not being a real date.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidBirthday` if the input does not
    /// match the pattern or does not denote a real calendar date.
    pub fn parse(raw: &str) -> Result<Self, ValidationError> {
        if !DATE_SHAPE_REGEX.is_match(raw) {
            return Err(ValidationError::InvalidBirthday(raw.to_string()));
        }

        NaiveDate::parse_from_str(raw, DATE_FORMAT)
            .map(Self)
            .map_err(|_| ValidationError::InvalidBirthday(raw.to_string()))
    }

    /// Get the underlying calendar date.
    pub fn date(&self) -> NaiveDate {
        self.0
    }
}

impl From<NaiveDate> for BirthdayDate {
    fn from(date: NaiveDate) -> Self {
        Self(date)
    }
}

// Serde support - serialize as the DD.MM.YYYY string
impl Serialize for BirthdayDate {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.to_string().serialize(serializer)
    }
}

// Serde support - deserialize from string with validation
impl<'de> Deserialize<'de> for BirthdayDate {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        BirthdayDate::parse(&s).map_err(serde::de::Error::custom)
    }
}

// Display support
impl fmt::Display for BirthdayDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(DATE_FORMAT))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_birthday_valid() {
        let birthday = BirthdayDate::parse("12.03.1990").unwrap();
        assert_eq!(
            birthday.date(),
            NaiveDate::from_ymd_opt(1990, 3, 12).unwrap()
        );
    }

    #[test]
    fn test_birthday_round_trips() {
        for raw in ["01.01.2000", "31.12.1999", "29.02.2020", "05.07.1985"] {
            let birthday = BirthdayDate::parse(raw).unwrap();
            assert_eq!(birthday.to_string(), raw);
        }
    }

    #[test]
    fn test_birthday_rejects_wrong_shape() {
        assert!(BirthdayDate::parse("").is_err());
        assert!(BirthdayDate::parse("1.3.1990").is_err()); // missing zero padding
        assert!(BirthdayDate::parse("12/03/1990").is_err()); // wrong separator
        assert!(BirthdayDate::parse("1990.03.12").is_err()); // wrong field order
        assert!(BirthdayDate::parse("12.03.90").is_err()); // two-digit year
        assert!(BirthdayDate::parse("12.03.1990 ").is_err()); // trailing space
    }

    #[test]
    fn test_birthday_rejects_impossible_dates() {
        assert!(BirthdayDate::parse("31.02.1990").is_err());
        assert!(BirthdayDate::parse("29.02.2021").is_err()); // not a leap year
        assert!(BirthdayDate::parse("00.01.1990").is_err());
        assert!(BirthdayDate::parse("15.13.1990").is_err());
    }

    #[test]
    fn test_birthday_serialization() {
        let birthday = BirthdayDate::parse("12.03.1990").unwrap();
        let json = serde_json::to_string(&birthday).unwrap();
        assert_eq!(json, "\"12.03.1990\"");

        let back: BirthdayDate = serde_json::from_str(&json).unwrap();
        assert_eq!(back, birthday);
    }

    #[test]
    fn test_birthday_deserialization_invalid_fails() {
        let result: Result<BirthdayDate, _> = serde_json::from_str("\"2020-01-01\"");
        assert!(result.is_err());
    }
}
