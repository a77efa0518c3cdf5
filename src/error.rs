//! Error types for the assistant bot.
//!
//! This module defines custom error types using `thiserror` for precise error handling.

use crate::domain::ValidationError;
use thiserror::Error;

/// Errors a single command can fail with.
///
/// Every failure is reported back to the user and the session carries on.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    /// Wrong number of arguments for the command
    #[error("Invalid arguments. Usage: {usage}")]
    InvalidArguments { usage: &'static str },

    /// No contact with the given name
    #[error("Contact not found.")]
    NotFound,

    /// The contact is missing or has no birthday set
    #[error("Contact or birthday not found.")]
    BirthdayNotFound,

    /// A contact with the given name is already stored
    #[error("Contact already exists.")]
    AlreadyExists,

    /// The command word is not recognized
    #[error("Invalid command.")]
    UnknownCommand(String),

    /// A phone number or birthday failed validation
    #[error(transparent)]
    Validation(#[from] ValidationError),
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },
}

/// Convenience type alias for Results with CommandError
pub type CommandResult<T> = Result<T, CommandError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;
