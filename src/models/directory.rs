//! Directory (address book) model
//!
//! Owns every record, keyed by normalized name, and answers the
//! upcoming-birthday query.

use chrono::{Datelike, Duration, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::record::Record;

/// Default number of days `upcoming_birthdays` looks ahead
pub const DEFAULT_UPCOMING_DAYS: i64 = 7;

/// A contact whose birthday falls inside the reminder window
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpcomingBirthday {
    /// Contact name as stored on the record
    pub name: String,
    /// Day to send congratulations, never on a weekend
    pub congratulation_date: NaiveDate,
}

/// All contacts, keyed by normalized name
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Directory {
    records: BTreeMap<String, Record>,
}

impl Directory {
    /// Create an empty directory
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a record, replacing any record with the same key
    pub fn add_record(&mut self, record: Record) -> Option<Record> {
        self.records.insert(record.key(), record)
    }

    /// Find a record by name (case-insensitive)
    pub fn find(&self, name: &str) -> Option<&Record> {
        self.records.get(&Record::normalize_name(name))
    }

    /// Find a record by name for mutation
    pub fn find_mut(&mut self, name: &str) -> Option<&mut Record> {
        self.records.get_mut(&Record::normalize_name(name))
    }

    /// Remove a record if present
    pub fn delete(&mut self, name: &str) -> Option<Record> {
        self.records.remove(&Record::normalize_name(name))
    }

    /// Number of records
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the directory has no records
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Iterate records in key order
    pub fn iter(&self) -> impl Iterator<Item = &Record> {
        self.records.values()
    }

    /// Birthdays occurring within `window_days` of `reference`, inclusive
    ///
    /// A birthday already past this year is taken from next year. Weekend
    /// occurrences are congratulated on the following Monday. Results are
    /// ordered by congratulation date, then name.
    pub fn upcoming_birthdays(
        &self,
        reference: NaiveDate,
        window_days: i64,
    ) -> Vec<UpcomingBirthday> {
        let mut upcoming: Vec<UpcomingBirthday> = self
            .records
            .values()
            .filter_map(|record| {
                let birthday = record.birthday?;

                let mut occurrence = birthday.occurrence_in(reference.year());
                if occurrence < reference {
                    occurrence = birthday.occurrence_in(reference.year() + 1);
                }

                let days_until = (occurrence - reference).num_days();
                if !(0..=window_days).contains(&days_until) {
                    return None;
                }

                Some(UpcomingBirthday {
                    name: record.name.clone(),
                    congratulation_date: shift_off_weekend(occurrence),
                })
            })
            .collect();

        upcoming.sort_by(|a, b| {
            a.congratulation_date
                .cmp(&b.congratulation_date)
                .then_with(|| a.name.cmp(&b.name))
        });
        upcoming
    }
}

/// Move Saturday and Sunday onto the following Monday
fn shift_off_weekend(date: NaiveDate) -> NaiveDate {
    match date.weekday() {
        Weekday::Sat => date + Duration::days(2),
        Weekday::Sun => date + Duration::days(1),
        _ => date,
    }
}

impl FromIterator<Record> for Directory {
    fn from_iter<I: IntoIterator<Item = Record>>(iter: I) -> Self {
        let mut directory = Directory::new();
        for record in iter {
            directory.add_record(record);
        }
        directory
    }
}
