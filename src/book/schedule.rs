//! Weekly birthday scheduling.
//!
//! Computes which contacts have a birthday within the next 7 calendar days
//! and buckets them by the weekday the celebration is announced on.

use super::record::ContactRecord;
use chrono::{Datelike, NaiveDate, Weekday};
use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;
use tracing::debug;

/// Weekday buckets a celebration can be announced in.
///
/// Only working days carry announcements: Saturday and Sunday birthdays
/// fold forward into the Monday bucket, and so do true Monday birthdays
/// (a quirk of the folding policy, kept deliberately).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum ScheduleDay {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
}

impl ScheduleDay {
    /// All buckets in announcement order.
    pub const ALL: [ScheduleDay; 5] = [
        ScheduleDay::Monday,
        ScheduleDay::Tuesday,
        ScheduleDay::Wednesday,
        ScheduleDay::Thursday,
        ScheduleDay::Friday,
    ];

    /// The bucket a celebration on `weekday` is announced in.
    fn from_weekday(weekday: Weekday) -> Self {
        match weekday {
            Weekday::Sat | Weekday::Sun | Weekday::Mon => ScheduleDay::Monday,
            Weekday::Tue => ScheduleDay::Tuesday,
            Weekday::Wed => ScheduleDay::Wednesday,
            Weekday::Thu => ScheduleDay::Thursday,
            Weekday::Fri => ScheduleDay::Friday,
        }
    }

    /// The bucket's English name.
    pub fn as_str(&self) -> &'static str {
        match self {
            ScheduleDay::Monday => "Monday",
            ScheduleDay::Tuesday => "Tuesday",
            ScheduleDay::Wednesday => "Wednesday",
            ScheduleDay::Thursday => "Thursday",
            ScheduleDay::Friday => "Friday",
        }
    }
}

impl fmt::Display for ScheduleDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// The result of an upcoming-birthday query: weekday buckets holding
/// contact names in the order the records were visited.
///
/// Transient and recomputed on every query relative to the caller-supplied
/// "today"; never stored.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct WeeklySchedule {
    buckets: BTreeMap<ScheduleDay, Vec<String>>,
}

impl WeeklySchedule {
    /// Compute the schedule for every record with a birthday.
    ///
    /// A record is included when its next occurrence (this year's
    /// month/day, rolled to next year if already passed) lands within
    /// the half-open window of `today` through 6 days ahead.
    pub fn compute<'a, I>(records: I, today: NaiveDate) -> Self
    where
        I: IntoIterator<Item = &'a ContactRecord>,
    {
        let mut schedule = WeeklySchedule::default();

        for record in records {
            let Some(birthday) = record.birthday() else {
                continue;
            };

            let mut occurrence = occurrence_in_year(birthday.date(), today.year());
            if occurrence < today {
                occurrence = occurrence_in_year(birthday.date(), today.year() + 1);
            }

            let days_until = occurrence.signed_duration_since(today).num_days();
            if days_until < 7 {
                let day = ScheduleDay::from_weekday(occurrence.weekday());
                debug!(
                    name = record.name(),
                    occurrence = %occurrence,
                    days_until,
                    bucket = day.as_str(),
                    "birthday falls within the coming week"
                );
                schedule.push(day, record.name().to_string());
            }
        }

        schedule
    }

    fn push(&mut self, day: ScheduleDay, name: String) {
        self.buckets.entry(day).or_default().push(name);
    }

    /// The names scheduled for a given bucket, in visit order.
    pub fn names_for(&self, day: ScheduleDay) -> &[String] {
        self.buckets.get(&day).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Whether no contact has an upcoming birthday.
    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }

    /// Non-empty buckets in announcement order.
    pub fn iter(&self) -> impl Iterator<Item = (ScheduleDay, &[String])> {
        self.buckets
            .iter()
            .map(|(day, names)| (*day, names.as_slice()))
    }
}

impl fmt::Display for WeeklySchedule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (day, names) in self.iter() {
            if !first {
                writeln!(f)?;
            }
            write!(f, "{}: {}", day, names.join(", "))?;
            first = false;
        }
        Ok(())
    }
}

/// The calendar date a birthday lands on in `year`.
///
/// Feb 29 birthdays resolve to Mar 1 in non-leap years.
fn occurrence_in_year(birthday: NaiveDate, year: i32) -> NaiveDate {
    birthday.with_year(year).unwrap_or_else(|| {
        NaiveDate::from_ymd_opt(year, 3, 1).expect("March 1st exists in every year")
    })
}
