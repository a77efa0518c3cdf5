//! Name-keyed collection of contacts and the upcoming-birthdays query.

use super::record::Record;
use crate::clock::Clock;
use chrono::{Datelike, Days, NaiveDate, Weekday};
use serde::{Serialize, Serializer};
use std::collections::HashMap;
use tracing::debug;

/// Default look-ahead, in days, for [`AddressBook::upcoming_birthdays`].
pub const DEFAULT_WINDOW_DAYS: u32 = 7;

/// Output format of a congratulation date.
pub const CONGRATULATION_DATE_FORMAT: &str = "%Y.%m.%d";

/// A contact whose birthday falls inside the requested window.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UpcomingBirthday {
    pub name: String,
    /// The day to congratulate on, moved off weekends to the next Monday.
    #[serde(serialize_with = "serialize_congratulation_date")]
    pub congratulation_date: NaiveDate,
}

impl UpcomingBirthday {
    /// The congratulation date as `YYYY.MM.DD`.
    pub fn congratulation_date_string(&self) -> String {
        self.congratulation_date
            .format(CONGRATULATION_DATE_FORMAT)
            .to_string()
    }
}

fn serialize_congratulation_date<S>(date: &NaiveDate, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.collect_str(&date.format(CONGRATULATION_DATE_FORMAT))
}

/// All contacts, keyed by name and kept in insertion order.
///
/// The book owns its records. There is at most one record per name:
/// adding a record whose name is already present replaces the stored one
/// in place.
#[derive(Debug, Clone, Default)]
pub struct AddressBook {
    records: Vec<Record>,
    index: HashMap<String, usize>,
}

impl AddressBook {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert `record`, replacing any record with the same name.
    ///
    /// A replaced record keeps its original position in iteration order.
    /// Returns the record that was replaced, if any.
    pub fn add_record(&mut self, record: Record) -> Option<Record> {
        match self.index.get(record.name()) {
            Some(&position) => {
                debug!(contact = %record.name(), "Replacing record");
                Some(std::mem::replace(&mut self.records[position], record))
            }
            None => {
                debug!(contact = %record.name(), "Adding record");
                self.index
                    .insert(record.name().to_string(), self.records.len());
                self.records.push(record);
                None
            }
        }
    }

    pub fn find(&self, name: &str) -> Option<&Record> {
        self.index.get(name).map(|&position| &self.records[position])
    }

    pub fn find_mut(&mut self, name: &str) -> Option<&mut Record> {
        match self.index.get(name) {
            Some(&position) => Some(&mut self.records[position]),
            None => None,
        }
    }

    /// Remove the record for `name`. Unknown names are ignored.
    pub fn delete(&mut self, name: &str) -> Option<Record> {
        let position = self.index.remove(name)?;
        let removed = self.records.remove(position);
        for slot in self.index.values_mut() {
            if *slot > position {
                *slot -= 1;
            }
        }
        debug!(contact = %name, "Deleted record");
        Some(removed)
    }

    /// Records in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Record> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Contacts to congratulate within `within_days` days of `clock.today()`.
    ///
    /// Each birthday is projected onto the current year, or onto the next
    /// one if it has already passed. It is kept when it lies in
    /// `today..=today + within_days`. A kept date falling on a weekend is
    /// moved to the following Monday, which may land past the window.
    /// Results follow insertion order.
    pub fn upcoming_birthdays(&self, clock: &dyn Clock, within_days: u32) -> Vec<UpcomingBirthday> {
        let today = clock.today();
        // A window reaching past chrono's last date covers every birthday.
        let end = today
            .checked_add_days(Days::new(u64::from(within_days)))
            .unwrap_or(NaiveDate::MAX);

        let upcoming: Vec<UpcomingBirthday> = self
            .records
            .iter()
            .filter_map(|record| {
                let next = record.birthday()?.next_occurrence(today)?;
                if next > end {
                    return None;
                }
                Some(UpcomingBirthday {
                    name: record.name().to_string(),
                    congratulation_date: roll_off_weekend(next),
                })
            })
            .collect();

        debug!(
            %today,
            within_days,
            count = upcoming.len(),
            "Computed upcoming birthdays"
        );
        upcoming
    }
}

impl<'a> IntoIterator for &'a AddressBook {
    type Item = &'a Record;
    type IntoIter = std::slice::Iter<'a, Record>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

/// Saturday and Sunday move to the next Monday; weekdays are unchanged.
fn roll_off_weekend(date: NaiveDate) -> NaiveDate {
    let shift = match date.weekday() {
        Weekday::Sat => 2,
        Weekday::Sun => 1,
        _ => 0,
    };
    date.checked_add_days(Days::new(shift)).unwrap_or(date)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::FixedClock;

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    fn record(name: &str, birthday: Option<&str>) -> Record {
        let mut record = Record::new(name);
        if let Some(birthday) = birthday {
            record.set_birthday(birthday).unwrap();
        }
        record
    }

    #[test]
    fn test_roll_off_weekend() {
        // 2024-06-14 is a Friday.
        assert_eq!(roll_off_weekend(date(2024, 6, 14)), date(2024, 6, 14));
        assert_eq!(roll_off_weekend(date(2024, 6, 15)), date(2024, 6, 17));
        assert_eq!(roll_off_weekend(date(2024, 6, 16)), date(2024, 6, 17));
        assert_eq!(roll_off_weekend(date(2024, 6, 17)), date(2024, 6, 17));
    }

    #[test]
    fn test_add_and_find() {
        let mut book = AddressBook::new();
        assert!(book.add_record(record("John", None)).is_none());
        assert_eq!(book.find("John").map(Record::name), Some("John"));
        assert!(book.find("john").is_none());
        assert_eq!(book.len(), 1);
    }

    #[test]
    fn test_add_same_name_overwrites_in_place() {
        let mut book = AddressBook::new();
        book.add_record(record("John", None));
        book.add_record(record("Jane", None));

        let replaced = book.add_record(record("John", Some("01.01.1990")));
        assert!(replaced.is_some_and(|r| r.birthday().is_none()));

        assert_eq!(book.len(), 2);
        let names: Vec<&str> = book.iter().map(Record::name).collect();
        assert_eq!(names, vec!["John", "Jane"]);
        assert!(book.find("John").and_then(Record::birthday).is_some());
    }

    #[test]
    fn test_delete_reindexes_remaining_records() {
        let mut book = AddressBook::new();
        book.add_record(record("A", None));
        book.add_record(record("B", None));
        book.add_record(record("C", None));

        assert_eq!(book.delete("A").map(|r| r.name().to_string()).as_deref(), Some("A"));
        assert_eq!(book.find("B").map(Record::name), Some("B"));
        assert_eq!(book.find("C").map(Record::name), Some("C"));

        book.add_record(record("D", None));
        let names: Vec<&str> = book.iter().map(Record::name).collect();
        assert_eq!(names, vec!["B", "C", "D"]);
    }

    #[test]
    fn test_delete_missing_is_noop() {
        let mut book = AddressBook::new();
        book.add_record(record("A", None));
        assert!(book.delete("Z").is_none());
        assert_eq!(book.len(), 1);
    }

    #[test]
    fn test_find_mut_edits_stored_record() {
        let mut book = AddressBook::new();
        book.add_record(record("John", None));
        book.find_mut("John").unwrap().add_phone("1234567890").unwrap();
        assert_eq!(book.find("John").unwrap().phones().len(), 1);
        assert!(book.find_mut("Nobody").is_none());
    }

    #[test]
    fn test_upcoming_birthdays_rolls_saturday_to_monday() {
        let mut book = AddressBook::new();
        book.add_record(record("John", Some("15.06.1990")));

        let clock = FixedClock::new(date(2024, 6, 10));
        let upcoming = book.upcoming_birthdays(&clock, DEFAULT_WINDOW_DAYS);

        assert_eq!(upcoming.len(), 1);
        assert_eq!(upcoming[0].name, "John");
        assert_eq!(upcoming[0].congratulation_date_string(), "2024.06.17");
    }

    #[test]
    fn test_upcoming_birthdays_excludes_passed_dates() {
        let mut book = AddressBook::new();
        book.add_record(record("Jan", Some("01.01.1990")));

        let clock = FixedClock::new(date(2024, 6, 10));
        assert!(book.upcoming_birthdays(&clock, DEFAULT_WINDOW_DAYS).is_empty());
    }

    #[test]
    fn test_upcoming_birthdays_window_is_inclusive() {
        let mut book = AddressBook::new();
        book.add_record(record("Today", Some("10.06.1980")));
        book.add_record(record("Edge", Some("17.06.1980")));
        book.add_record(record("Beyond", Some("18.06.1980")));

        let clock = FixedClock::new(date(2024, 6, 10));
        let names: Vec<String> = book
            .upcoming_birthdays(&clock, 7)
            .into_iter()
            .map(|u| u.name)
            .collect();
        assert_eq!(names, vec!["Today", "Edge"]);
    }

    #[test]
    fn test_upcoming_birthdays_skips_records_without_birthday() {
        let mut book = AddressBook::new();
        book.add_record(record("Nobody", None));
        let clock = FixedClock::new(date(2024, 6, 10));
        assert!(book.upcoming_birthdays(&clock, 365).is_empty());
    }

    #[test]
    fn test_upcoming_birthdays_zero_window() {
        let mut book = AddressBook::new();
        book.add_record(record("Today", Some("10.06.1980")));
        book.add_record(record("Tomorrow", Some("11.06.1980")));
        let clock = FixedClock::new(date(2024, 6, 10));
        let upcoming = book.upcoming_birthdays(&clock, 0);
        assert_eq!(upcoming.len(), 1);
        assert_eq!(upcoming[0].name, "Today");
    }

    #[test]
    fn test_upcoming_birthdays_window_past_calendar_end() {
        let mut book = AddressBook::new();
        book.add_record(record("John", Some("12.06.1990")));
        book.add_record(record("Jan", Some("01.01.1990")));

        let clock = FixedClock::new(date(2024, 6, 10));
        let upcoming = book.upcoming_birthdays(&clock, u32::MAX);
        let dates: Vec<String> = upcoming
            .iter()
            .map(UpcomingBirthday::congratulation_date_string)
            .collect();
        assert_eq!(dates, vec!["2024.06.12", "2025.01.01"]);
    }

    #[test]
    fn test_upcoming_birthday_serializes_dotted_date() {
        let upcoming = UpcomingBirthday {
            name: "John".to_string(),
            congratulation_date: date(2024, 6, 17),
        };
        let json = serde_json::to_string(&upcoming).unwrap();
        assert_eq!(json, r#"{"name":"John","congratulation_date":"2024.06.17"}"#);
    }
}
