//! Line-based command interface over the address book.
//!
//! - **parser**: tokenize an input line into a [`Command`]
//! - **handlers**: run a command against the book and format the reply
//! - **session**: the async read-eval-print loop over stdin/stdout

pub mod handlers;
pub mod parser;
pub mod session;

pub use handlers::{Assistant, Outcome};
pub use parser::{parse_command, Command};
pub use session::{run_session, welcome_text};
