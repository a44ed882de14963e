//! Core data models for the contact book
//!
//! Value objects for phone numbers and birthdays, the contact record, and
//! the directory that owns all records.

pub mod birthday;
pub mod directory;
pub mod phone;
pub mod record;

pub use birthday::Birthday;
pub use directory::{Directory, UpcomingBirthday, DEFAULT_UPCOMING_DAYS};
pub use phone::PhoneNumber;
pub use record::Record;
