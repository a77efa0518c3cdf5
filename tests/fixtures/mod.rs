//! Shared test fixtures for address book integration tests.

#![allow(dead_code)]

use assistant_bot::{AddressBook, FixedClock, Record};
use chrono::NaiveDate;

/// Build a date, panicking on impossible input.
pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid fixture date")
}

/// A clock pinned to the given date.
pub fn clock_at(year: i32, month: u32, day: u32) -> FixedClock {
    FixedClock::new(date(year, month, day))
}

/// Build a record with the given phones and optional birthday.
pub fn sample_record(name: &str, phones: &[&str], birthday: Option<&str>) -> Record {
    let mut record = Record::new(name);
    for phone in phones {
        record.add_phone(phone).expect("valid fixture phone");
    }
    if let Some(birthday) = birthday {
        record.set_birthday(birthday).expect("valid fixture birthday");
    }
    record
}

/// Build a book from `(name, birthday)` pairs, in order.
pub fn book_with_birthdays(entries: &[(&str, &str)]) -> AddressBook {
    let mut book = AddressBook::new();
    for (name, birthday) in entries {
        book.add_record(sample_record(name, &[], Some(*birthday)));
    }
    book
}
