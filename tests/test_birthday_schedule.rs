//! End-to-end tests for the weekly birthday schedule query.
//!
//! All scenarios pin "today" to a fixed date so the window and weekday
//! arithmetic stay deterministic.

use chrono::NaiveDate;
use contact_assistant::{AddressBook, ContactRecord, ScheduleDay};

fn book_with_birthdays(entries: &[(&str, &str)]) -> AddressBook {
    let mut book = AddressBook::new();
    for (name, birthday) in entries {
        let mut record = ContactRecord::new(*name).unwrap();
        record.add_birthday(birthday).unwrap();
        book.add_record(record);
    }
    book
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test]
fn test_upcoming_birthday_lands_on_its_weekday() {
    // Today is Sunday 10.03.2024; Ann's birthday recurs on Tuesday 12.03.
    let book = book_with_birthdays(&[("Ann", "12.03.1990")]);
    let schedule = book.upcoming_birthdays(date(2024, 3, 10));

    assert_eq!(schedule.names_for(ScheduleDay::Tuesday), ["Ann"]);
}

#[test]
fn test_passed_birthday_rolls_over_and_drops_out() {
    // Bob's 09.03 already passed on 10.03.2024; the next occurrence is
    // 09.03.2025, a year minus a day away.
    let book = book_with_birthdays(&[("Bob", "09.03.1985")]);
    let schedule = book.upcoming_birthdays(date(2024, 3, 10));

    assert!(schedule.is_empty());
}

#[test]
fn test_window_includes_today_and_six_days_ahead() {
    let book = book_with_birthdays(&[
        ("Today", "10.03.2000"),    // 0 days, Sunday
        ("Sixth", "16.03.2000"),    // 6 days, Saturday
        ("Seventh", "17.03.2000"),  // 7 days, outside
    ]);
    let schedule = book.upcoming_birthdays(date(2024, 3, 10));

    let names: Vec<_> = schedule
        .iter()
        .flat_map(|(_, names)| names.iter().cloned())
        .collect();
    assert!(names.contains(&"Today".to_string()));
    assert!(names.contains(&"Sixth".to_string()));
    assert!(!names.contains(&"Seventh".to_string()));
}

#[test]
fn test_weekend_and_monday_announce_on_monday() {
    let book = book_with_birthdays(&[
        ("SatKid", "16.03.2000"), // Saturday
        ("SunKid", "10.03.2000"), // Sunday
        ("MonKid", "11.03.2000"), // Monday, folded too
        ("FriKid", "15.03.2000"), // Friday keeps its own bucket
    ]);
    let schedule = book.upcoming_birthdays(date(2024, 3, 10));

    // Visit order is the book's name order.
    assert_eq!(
        schedule.names_for(ScheduleDay::Monday),
        ["MonKid", "SatKid", "SunKid"]
    );
    assert_eq!(schedule.names_for(ScheduleDay::Friday), ["FriKid"]);
}

#[test]
fn test_contacts_without_birthday_never_appear() {
    let mut book = book_with_birthdays(&[("Ann", "12.03.1990")]);
    book.add_record(ContactRecord::new("NoBirthday").unwrap());

    let schedule = book.upcoming_birthdays(date(2024, 3, 10));
    let names: Vec<_> = schedule.iter().flat_map(|(_, n)| n).collect();
    assert_eq!(names.len(), 1);
}

#[test]
fn test_deleting_a_record_removes_it_from_the_schedule() {
    let mut book = book_with_birthdays(&[("Ann", "12.03.1990"), ("Sue", "13.03.1990")]);

    let before = book.upcoming_birthdays(date(2024, 3, 10));
    assert_eq!(before.names_for(ScheduleDay::Tuesday), ["Ann"]);
    assert_eq!(before.names_for(ScheduleDay::Wednesday), ["Sue"]);

    book.delete("Ann").unwrap();
    let after = book.upcoming_birthdays(date(2024, 3, 10));
    assert!(after.names_for(ScheduleDay::Tuesday).is_empty());
    assert_eq!(after.names_for(ScheduleDay::Wednesday), ["Sue"]);
}

#[test]
fn test_schedule_spans_year_boundary() {
    // Monday 30.12.2024; birthdays on 31.12 and 03.01 both fall in the
    // window even though they sit in different calendar years.
    let book = book_with_birthdays(&[("Eve", "31.12.1970"), ("Jan", "03.01.1980")]);
    let schedule = book.upcoming_birthdays(date(2024, 12, 30));

    assert_eq!(schedule.names_for(ScheduleDay::Tuesday), ["Eve"]);
    assert_eq!(schedule.names_for(ScheduleDay::Friday), ["Jan"]);
}

#[test]
fn test_overwriting_birthday_reschedules() {
    let mut book = book_with_birthdays(&[("Ann", "12.03.1990")]);
    book.find_mut("Ann").unwrap().add_birthday("13.03.1990").unwrap();

    let schedule = book.upcoming_birthdays(date(2024, 3, 10));
    assert!(schedule.names_for(ScheduleDay::Tuesday).is_empty());
    assert_eq!(schedule.names_for(ScheduleDay::Wednesday), ["Ann"]);
}

#[test]
fn test_rendered_schedule_reads_per_weekday() {
    let book = book_with_birthdays(&[
        ("Ann", "12.03.1990"),
        ("Sue", "10.03.2000"),
        ("Tim", "12.03.1984"),
    ]);
    let schedule = book.upcoming_birthdays(date(2024, 3, 10));

    assert_eq!(schedule.to_string(), "Monday: Sue\nTuesday: Ann, Tim");
}
