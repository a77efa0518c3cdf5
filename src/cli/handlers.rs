//! Executes parsed commands against the address book.

use super::parser::Command;
use crate::clock::Clock;
use crate::error::{CommandError, CommandResult};
use crate::models::{AddressBook, Record, DEFAULT_WINDOW_DAYS};
use tracing::debug;

/// What the session should do after a command ran.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Print the reply and read the next command.
    Reply(String),
    /// Print the farewell and stop.
    Exit(String),
}

impl Outcome {
    pub fn text(&self) -> &str {
        match self {
            Self::Reply(text) | Self::Exit(text) => text,
        }
    }
}

/// Owns the address book for one session and answers commands.
pub struct Assistant<C: Clock> {
    book: AddressBook,
    clock: C,
    window_days: u32,
}

impl<C: Clock> Assistant<C> {
    pub fn new(clock: C) -> Self {
        Self::with_book(AddressBook::new(), clock, DEFAULT_WINDOW_DAYS)
    }

    pub fn with_book(book: AddressBook, clock: C, window_days: u32) -> Self {
        Self {
            book,
            clock,
            window_days,
        }
    }

    pub fn book(&self) -> &AddressBook {
        &self.book
    }

    pub fn window_days(&self) -> u32 {
        self.window_days
    }

    /// Run one command.
    pub fn handle(&mut self, command: Command) -> CommandResult<Outcome> {
        debug!(?command, "Handling command");
        let reply = match command {
            Command::Hello => "How can I help you?".to_string(),
            Command::Add { name, phone } => self.add_contact(name, &phone)?,
            Command::Change {
                name,
                old_phone,
                new_phone,
            } => self.change_contact(&name, &old_phone, &new_phone)?,
            Command::Phone { name } => self.show_phone(&name)?,
            Command::All => self.show_all(),
            Command::AddBirthday { name, birthday } => self.add_birthday(&name, &birthday)?,
            Command::ShowBirthday { name } => self.show_birthday(&name)?,
            Command::Birthdays => self.birthdays(),
            Command::Delete { name } => self.delete_contact(&name)?,
            Command::Exit => return Ok(Outcome::Exit("Good bye!".to_string())),
        };
        Ok(Outcome::Reply(reply))
    }

    fn add_contact(&mut self, name: String, phone: &str) -> CommandResult<String> {
        if self.book.find(&name).is_some() {
            return Err(CommandError::AlreadyExists);
        }
        let mut record = Record::new(name);
        record.add_phone(phone)?;
        self.book.add_record(record);
        Ok("Contact added.".to_string())
    }

    fn change_contact(&mut self, name: &str, old_phone: &str, new_phone: &str) -> CommandResult<String> {
        let record = self.book.find_mut(name).ok_or(CommandError::NotFound)?;
        record.edit_phone(old_phone, new_phone)?;
        Ok("Contact updated.".to_string())
    }

    fn show_phone(&self, name: &str) -> CommandResult<String> {
        let record = self.book.find(name).ok_or(CommandError::NotFound)?;
        Ok(record.phones_joined())
    }

    fn show_all(&self) -> String {
        if self.book.is_empty() {
            return "No contacts found.".to_string();
        }
        self.book
            .iter()
            .map(Record::to_string)
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn add_birthday(&mut self, name: &str, birthday: &str) -> CommandResult<String> {
        let record = self.book.find_mut(name).ok_or(CommandError::NotFound)?;
        record.set_birthday(birthday)?;
        Ok("Birthday added.".to_string())
    }

    fn show_birthday(&self, name: &str) -> CommandResult<String> {
        self.book
            .find(name)
            .and_then(Record::birthday)
            .map(|birthday| birthday.format())
            .ok_or(CommandError::BirthdayNotFound)
    }

    fn birthdays(&self) -> String {
        let upcoming = self.book.upcoming_birthdays(&self.clock, self.window_days);
        if upcoming.is_empty() {
            return "No upcoming birthdays.".to_string();
        }
        upcoming
            .iter()
            .map(|entry| format!("{}: {}", entry.name, entry.congratulation_date_string()))
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn delete_contact(&mut self, name: &str) -> CommandResult<String> {
        self.book.delete(name).ok_or(CommandError::NotFound)?;
        Ok("Contact deleted.".to_string())
    }
}
