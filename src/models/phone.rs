//! Phone number value object

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

use crate::error::ContactError;

/// Required number of digits in a phone number
pub const PHONE_DIGITS: usize = 10;

/// A validated phone number: exactly ten ASCII digits
///
/// ```
/// use contact_book::models::PhoneNumber;
///
/// let phone = PhoneNumber::new("1234567890").unwrap();
/// assert_eq!(phone.as_str(), "1234567890");
/// assert!(PhoneNumber::new("123-456-7890").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PhoneNumber(String);

impl PhoneNumber {
    /// Create a new PhoneNumber, validating the format.
    ///
    /// # Errors
    ///
    /// Returns `ContactError::Validation` unless the input is exactly ten
    /// ASCII digits.
    pub fn new(raw: impl Into<String>) -> Result<Self, ContactError> {
        let raw = raw.into();

        if !Self::is_valid(&raw) {
            return Err(ContactError::Validation("phone must be 10 digits".into()));
        }

        Ok(Self(raw))
    }

    /// Check the format without constructing a value
    pub fn is_valid(raw: &str) -> bool {
        raw.len() == PHONE_DIGITS && raw.bytes().all(|b| b.is_ascii_digit())
    }

    /// Get the phone number as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Serialize for PhoneNumber {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for PhoneNumber {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        PhoneNumber::new(s).map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for PhoneNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
