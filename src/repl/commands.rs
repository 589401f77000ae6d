//! Command parsing and handlers for the assistant loop.
//!
//! Thin glue over the directory core: every handler turns a tokenized
//! command into core calls and renders the outcome as a user-facing
//! message string. Handlers never panic; malformed input and failed
//! operations come back as messages.

use crate::book::{AddressBook, ContactRecord};
use chrono::NaiveDate;
use tracing::debug;

/// What the loop should do after handling one line of input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Print the message and keep going.
    Reply(String),
    /// Print the message and terminate the loop.
    Exit(String),
}

/// Split a line into a lowercased command and its argument tokens.
///
/// Returns `None` for blank lines.
pub fn parse_input(line: &str) -> Option<(String, Vec<&str>)> {
    let mut tokens = line.split_whitespace();
    let command = tokens.next()?.to_lowercase();
    Some((command, tokens.collect()))
}

/// Dispatch a parsed command against the book.
///
/// `today` is threaded in from the caller so the birthday query stays
/// deterministic under test.
pub fn dispatch(
    command: &str,
    args: &[&str],
    book: &mut AddressBook,
    today: NaiveDate,
) -> Outcome {
    debug!(command, args = ?args, "dispatching command");
    match command {
        "hello" | "start" => Outcome::Reply("How can I help you?".to_string()),
        "add" => Outcome::Reply(add_contact(args, book)),
        "change" => Outcome::Reply(change_contact(args, book)),
        "phone" => Outcome::Reply(get_contact(args, book)),
        "all" => Outcome::Reply(get_all(book)),
        "add-birthday" => Outcome::Reply(add_birthday(args, book)),
        "show-birthday" => Outcome::Reply(show_birthday(args, book)),
        "birthdays" => Outcome::Reply(birthdays(book, today)),
        "delete" => Outcome::Reply(delete_contact(args, book)),
        "close" | "exit" => Outcome::Exit("Good bye!".to_string()),
        _ => Outcome::Reply("Invalid command format or unknown command.".to_string()),
    }
}

fn add_contact(args: &[&str], book: &mut AddressBook) -> String {
    let [name, phone] = args else {
        return "Usage: add <name> <phone>".to_string();
    };

    if book.find(name).is_none() {
        match ContactRecord::new(*name) {
            Ok(record) => book.add_record(record),
            Err(e) => return e.to_string(),
        }
    }

    // The record exists either way; a bad phone is reported without
    // discarding it.
    match book.find_mut(name) {
        Some(record) => match record.add_phone(phone) {
            Ok(()) => "Contact added.".to_string(),
            Err(e) => e.to_string(),
        },
        None => format!("Record {} not found", name),
    }
}

fn change_contact(args: &[&str], book: &mut AddressBook) -> String {
    let [name, old_phone, new_phone] = args else {
        return "Usage: change <name> <old phone> <new phone>".to_string();
    };

    let Some(record) = book.find_mut(name) else {
        return format!("Record {} not found", name);
    };
    match record.edit_phone(old_phone, new_phone) {
        Ok(()) => "Contact changed.".to_string(),
        Err(e) => e.to_string(),
    }
}

fn get_contact(args: &[&str], book: &AddressBook) -> String {
    let [name] = args else {
        return "Usage: phone <name>".to_string();
    };

    match book.find(name) {
        Some(record) => record.to_string(),
        None => format!("Record {} not found", name),
    }
}

fn get_all(book: &AddressBook) -> String {
    if book.is_empty() {
        "No contacts saved.".to_string()
    } else {
        book.to_string()
    }
}

fn add_birthday(args: &[&str], book: &mut AddressBook) -> String {
    let [name, date] = args else {
        return "Usage: add-birthday <name> <DD.MM.YYYY>".to_string();
    };

    let Some(record) = book.find_mut(name) else {
        return format!("Record {} not found", name);
    };
    match record.add_birthday(date) {
        Ok(()) => format!("Added birth date for {}", name),
        Err(e) => e.to_string(),
    }
}

fn show_birthday(args: &[&str], book: &AddressBook) -> String {
    let [name] = args else {
        return "Usage: show-birthday <name>".to_string();
    };

    let Some(record) = book.find(name) else {
        return format!("Record {} not found", name);
    };
    match record.birthday() {
        Some(birthday) => birthday.to_string(),
        None => format!("No saved birthday for {}", name),
    }
}

fn birthdays(book: &AddressBook, today: NaiveDate) -> String {
    let schedule = book.upcoming_birthdays(today);
    if schedule.is_empty() {
        "No upcoming birthdays this week.".to_string()
    } else {
        schedule.to_string()
    }
}

fn delete_contact(args: &[&str], book: &mut AddressBook) -> String {
    let [name] = args else {
        return "Usage: delete <name>".to_string();
    };

    match book.delete(name) {
        Ok(()) => format!("Record {} deleted.", name),
        Err(e) => e.to_string(),
    }
}
