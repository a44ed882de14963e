//! Contact record model
//!
//! A record is one contact: a name, an ordered list of phone numbers, and an
//! optional birthday.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::birthday::Birthday;
use super::phone::PhoneNumber;
use crate::error::{ContactError, ContactResult};

/// Longest accepted contact name, in characters
pub const MAX_NAME_LEN: usize = 100;

/// A single contact
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    /// Name as first entered by the user
    pub name: String,

    /// Phone numbers in insertion order, duplicates allowed
    #[serde(default)]
    pub phones: Vec<PhoneNumber>,

    /// Optional birthday
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub birthday: Option<Birthday>,
}

impl Record {
    /// Create a record with no phones and no birthday
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            phones: Vec::new(),
            birthday: None,
        }
    }

    /// Normalize a name into the key used for lookups
    pub fn normalize_name(name: &str) -> String {
        name.trim().to_lowercase()
    }

    /// Lookup key for this record
    pub fn key(&self) -> String {
        Self::normalize_name(&self.name)
    }

    /// Validate the record's name
    pub fn validate(&self) -> ContactResult<()> {
        let len = self.name.trim().chars().count();
        if len == 0 {
            return Err(ContactError::Validation("name cannot be empty".into()));
        }
        if len > MAX_NAME_LEN {
            return Err(ContactError::Validation(format!(
                "name too long ({} chars, max {})",
                len, MAX_NAME_LEN
            )));
        }
        Ok(())
    }

    /// Validate and append a phone number
    pub fn add_phone(&mut self, raw: &str) -> ContactResult<()> {
        let phone = PhoneNumber::new(raw)?;
        self.phones.push(phone);
        Ok(())
    }

    /// Remove the first phone equal to `raw`
    ///
    /// Returns whether a phone was removed; a missing phone is not an error.
    pub fn remove_phone(&mut self, raw: &str) -> bool {
        match self.phones.iter().position(|p| p.as_str() == raw) {
            Some(index) => {
                self.phones.remove(index);
                true
            }
            None => false,
        }
    }

    /// Replace `old` with `new`, keeping its position
    pub fn edit_phone(&mut self, old: &str, new: &str) -> ContactResult<()> {
        if !PhoneNumber::is_valid(old) {
            return Err(ContactError::Validation("phone must be 10 digits".into()));
        }

        let index = self
            .phones
            .iter()
            .position(|p| p.as_str() == old)
            .ok_or_else(|| ContactError::phone_not_found(old))?;

        self.phones[index] = PhoneNumber::new(new)?;
        Ok(())
    }

    /// Find a phone by value
    pub fn find_phone(&self, raw: &str) -> Option<&PhoneNumber> {
        self.phones.iter().find(|p| p.as_str() == raw)
    }

    /// Validate and set the birthday, replacing any previous one
    pub fn add_birthday(&mut self, raw: &str) -> ContactResult<()> {
        self.birthday = Some(Birthday::parse(raw)?);
        Ok(())
    }

    /// Phones joined with `"; "`
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
            "Contact name: {}, phones: {}",
            self.name,
            self.phones_joined()
        )?;
        if let Some(birthday) = &self.birthday {
            write!(f, ", birthday: {}", birthday)?;
        }
        Ok(())
    }
}
