//! Contact Assistant - an in-memory directory of named contacts with
//! validated phone numbers, optional birthdays, and a weekly birthday
//! schedule query.
//!
//! # Architecture
//!
//! - **domain**: Validated value objects (phone numbers, birthdays)
//! - **book**: The directory core: records, the address book, scheduling
//! - **error**: Custom error types for precise error handling
//! - **config**: Configuration management from environment variables
//! - **repl**: The line-oriented command loop driving the core

pub mod book;
pub mod config;
pub mod domain;
pub mod error;
pub mod repl;

pub use book::{AddressBook, ContactRecord, ScheduleDay, WeeklySchedule};
pub use config::Config;
pub use domain::{BirthdayDate, PhoneNumber, ValidationError};
pub use error::{BookError, BookResult, ConfigError, ConfigResult, NotFoundError};
