//! Domain value objects.
//!
//! Type-safe wrappers for the values a contact carries. Each one is
//! validated at construction time, so an invalid phone number or an
//! impossible birthday can never be stored in a record.

pub mod birthday;
pub mod errors;
pub mod phone;

pub use birthday::Birthday;
pub use errors::ValidationError;
pub use phone::PhoneNumber;
