//! The directory core: contact records, the owning address book, and the
//! weekly birthday schedule computed over it.

pub mod address_book;
pub mod record;
pub mod schedule;

pub use address_book::AddressBook;
pub use record::ContactRecord;
pub use schedule::{ScheduleDay, WeeklySchedule};
