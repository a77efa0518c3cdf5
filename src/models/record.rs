//! A single contact in the address book.

use crate::domain::{Birthday, PhoneNumber, ValidationError};
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;

/// Shown in place of a birthday when the contact has none.
pub const NO_BIRTHDAY: &str = "No birthday";

/// One contact: a name, an ordered list of phone numbers and an optional
/// birthday.
///
/// The name is fixed at creation. Phone numbers keep insertion order and
/// duplicates are stored as given.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    name: String,
    #[serde(default)]
    phones: Vec<PhoneNumber>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    birthday: Option<Birthday>,
}

impl Record {
    /// Create a contact with no phones and no birthday.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            phones: Vec::new(),
            birthday: None,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn phones(&self) -> &[PhoneNumber] {
        &self.phones
    }

    pub fn birthday(&self) -> Option<&Birthday> {
        self.birthday.as_ref()
    }

    /// Validate and append a phone number.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidPhone` if `phone` is not ten digits.
    pub fn add_phone(&mut self, phone: &str) -> Result<(), ValidationError> {
        let phone = PhoneNumber::new(phone)?;
        debug!(contact = %self.name, phone = %phone, "Adding phone");
        self.phones.push(phone);
        Ok(())
    }

    /// Remove every entry equal to `phone`. Absent numbers are ignored.
    pub fn remove_phone(&mut self, phone: &str) {
        let before = self.phones.len();
        self.phones.retain(|p| p != phone);
        debug!(
            contact = %self.name,
            phone = %phone,
            removed = before - self.phones.len(),
            "Removed phone"
        );
    }

    /// Replace `old_phone` with `new_phone`.
    ///
    /// `new_phone` is validated before anything is removed, so a rejected
    /// edit leaves the record as it was. If `old_phone` is not present the
    /// new number is still appended.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidPhone` if `new_phone` is not ten digits.
    pub fn edit_phone(&mut self, old_phone: &str, new_phone: &str) -> Result<(), ValidationError> {
        let new_phone = PhoneNumber::new(new_phone)?;
        self.remove_phone(old_phone);
        debug!(contact = %self.name, phone = %new_phone, "Adding phone");
        self.phones.push(new_phone);
        Ok(())
    }

    /// First stored phone equal to `phone`, if any.
    pub fn find_phone(&self, phone: &str) -> Option<&PhoneNumber> {
        self.phones.iter().find(|p| *p == phone)
    }

    /// Parse and store a birthday, replacing any previous one.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidBirthday` if `birthday` is not a real
    /// `DD.MM.YYYY` date.
    pub fn set_birthday(&mut self, birthday: &str) -> Result<(), ValidationError> {
        let birthday = Birthday::new(birthday)?;
        debug!(contact = %self.name, birthday = %birthday, "Setting birthday");
        self.birthday = Some(birthday);
        Ok(())
    }

    /// Phone numbers joined with `"; "`, or an empty string.
    pub fn phones_joined(&self) -> String {
        self.phones
            .iter()
            .map(PhoneNumber::as_str)
            .collect::<Vec<_>>()
            .join("; ")
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Contact name: {}, phones: {}, birthday: ",
            self.name,
            self.phones_joined()
        )?;
        match &self.birthday {
            Some(birthday) => write!(f, "{}", birthday),
            None => f.write_str(NO_BIRTHDAY),
        }
    }
}
