//! Contact data models.
//!
//! A [`Record`] holds one contact's phone numbers and birthday, and an
//! [`AddressBook`] owns every record by name.

pub mod address_book;
pub mod record;

pub use address_book::{AddressBook, UpcomingBirthday, DEFAULT_WINDOW_DAYS};
pub use record::Record;
