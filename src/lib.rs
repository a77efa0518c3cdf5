//! Assistant Bot - an interactive command-line address book.
//!
//! Contacts carry a name, any number of ten-digit phone numbers and an
//! optional birthday. The book answers which birthdays fall within the
//! coming days, moving weekend dates to the following Monday.
//!
//! # Architecture
//!
//! - **domain**: Validated value objects (`PhoneNumber`, `Birthday`)
//! - **models**: `Record` and the name-keyed `AddressBook`
//! - **clock**: Injectable source of today's date
//! - **cli**: Command parsing, dispatch and the interactive session
//! - **error**: Custom error types for precise error handling
//! - **config**: Configuration management from environment variables

pub mod cli;
pub mod clock;
pub mod config;
pub mod domain;
pub mod error;
pub mod models;

pub use cli::{Assistant, Command, Outcome};
pub use clock::{Clock, FixedClock, SystemClock};
pub use config::Config;
pub use domain::{Birthday, PhoneNumber, ValidationError};
pub use error::{CommandError, ConfigError};
pub use models::{AddressBook, Record, UpcomingBirthday};
