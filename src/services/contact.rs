//! Contact service
//!
//! Business operations over the session directory. Every mutation is
//! validated before it touches a record and is written to the audit log.

use chrono::NaiveDate;

use crate::error::{ContactError, ContactResult};
use crate::models::{Birthday, PhoneNumber, Record, UpcomingBirthday};
use crate::storage::Storage;

/// Whether `add_contact` created a record or extended an existing one
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddOutcome {
    Created,
    Updated,
}

/// Service for contact management
pub struct ContactService<'a> {
    storage: &'a mut Storage,
}

impl<'a> ContactService<'a> {
    /// Create a new contact service
    pub fn new(storage: &'a mut Storage) -> Self {
        Self { storage }
    }

    /// Add a phone to a contact, creating the contact if needed
    pub fn add_contact(&mut self, name: &str, phone: &str) -> ContactResult<AddOutcome> {
        let name = name.trim();
        let phone = PhoneNumber::new(phone)?;

        if self.storage.directory().find(name).is_some() {
            self.update(name, |record| {
                record.phones.push(phone);
                Ok(())
            })?;
            return Ok(AddOutcome::Updated);
        }

        let mut record = Record::new(name);
        record.validate()?;
        record.phones.push(phone);

        self.storage.log_create(&record.name, &record)?;
        self.storage.directory_mut().add_record(record);
        Ok(AddOutcome::Created)
    }

    /// Replace one of a contact's phones
    pub fn change_phone(&mut self, name: &str, old: &str, new: &str) -> ContactResult<Record> {
        self.update(name, |record| record.edit_phone(old, new))
    }

    /// Remove a phone; returns whether anything was removed
    pub fn remove_phone(&mut self, name: &str, phone: &str) -> ContactResult<bool> {
        let has_phone = self.get(name)?.find_phone(phone).is_some();
        if !has_phone {
            return Ok(false);
        }

        self.update(name, |record| {
            record.remove_phone(phone);
            Ok(())
        })?;
        Ok(true)
    }

    /// Set or replace a contact's birthday
    pub fn set_birthday(&mut self, name: &str, raw: &str) -> ContactResult<Birthday> {
        let birthday = Birthday::parse(raw)?;
        self.update(name, |record| {
            record.birthday = Some(birthday);
            Ok(())
        })?;
        Ok(birthday)
    }

    /// A contact's birthday, if one is set
    pub fn birthday(&self, name: &str) -> ContactResult<Option<Birthday>> {
        Ok(self.get(name)?.birthday)
    }

    /// Look up a contact, failing if absent
    pub fn get(&self, name: &str) -> ContactResult<&Record> {
        self.storage
            .directory()
            .find(name)
            .ok_or_else(|| ContactError::contact_not_found(name.trim()))
    }

    /// Delete a contact
    ///
    /// The record is removed only after the deletion has been audited.
    pub fn delete(&mut self, name: &str) -> ContactResult<Record> {
        let record = self.get(name)?.clone();
        self.storage.log_delete(&record.name, &record)?;
        self.storage.directory_mut().delete(name);
        Ok(record)
    }

    /// All contacts in name order
    pub fn list(&self) -> Vec<&Record> {
        self.storage.directory().iter().collect()
    }

    /// Birthdays to congratulate within `window_days` of `today`
    pub fn upcoming_birthdays(&self, today: NaiveDate, window_days: i64) -> Vec<UpcomingBirthday> {
        self.storage.directory().upcoming_birthdays(today, window_days)
    }

    /// Apply a fallible change to a record and audit the result
    ///
    /// The change runs on a copy, which replaces the stored record only once
    /// the audit entry has been written.
    fn update<F>(&mut self, name: &str, change: F) -> ContactResult<Record>
    where
        F: FnOnce(&mut Record) -> ContactResult<()>,
    {
        let before = self.get(name)?.clone();
        let mut after = before.clone();
        change(&mut after)?;

        self.storage.log_update(&after.name, &before, &after)?;
        if let Some(record) = self.storage.directory_mut().find_mut(name) {
            *record = after.clone();
        }
        Ok(after)
    }
}
