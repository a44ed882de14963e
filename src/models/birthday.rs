//! Birthday value object
//!
//! Birthdays are entered and displayed as `DD.MM.YYYY` and stored as a
//! calendar date.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

use crate::error::ContactError;

/// Display and storage format
pub const BIRTHDAY_FORMAT: &str = "%d.%m.%Y";

/// A validated birth date
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Birthday(NaiveDate);

impl Birthday {
    /// Parse a `DD.MM.YYYY` string
    ///
    /// Day and month must be two digits and the year four. The result must
    /// be a real Gregorian date, so `31.02.2024` is rejected.
    pub fn parse(raw: &str) -> Result<Self, ContactError> {
        let invalid = || ContactError::Validation("invalid date format".into());

        let bytes = raw.as_bytes();
        let shape_ok = bytes.len() == 10
            && bytes[2] == b'.'
            && bytes[5] == b'.'
            && bytes
                .iter()
                .enumerate()
                .all(|(i, b)| i == 2 || i == 5 || b.is_ascii_digit());
        if !shape_ok {
            return Err(invalid());
        }

        let day: u32 = raw[0..2].parse().map_err(|_| invalid())?;
        let month: u32 = raw[3..5].parse().map_err(|_| invalid())?;
        let year: i32 = raw[6..10].parse().map_err(|_| invalid())?;

        NaiveDate::from_ymd_opt(year, month, day)
            .map(Self)
            .ok_or_else(invalid)
    }

    /// The stored date
    pub fn date(&self) -> NaiveDate {
        self.0
    }

    /// The date this birthday is observed in `year`
    ///
    /// A 29 February birthday is observed on 28 February in common years.
    pub fn occurrence_in(&self, year: i32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, self.0.month(), self.0.day())
            .or_else(|| NaiveDate::from_ymd_opt(year, 2, 28))
            .unwrap_or(self.0)
    }
}

impl FromStr for Birthday {
    type Err = ContactError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Birthday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(BIRTHDAY_FORMAT))
    }
}

impl Serialize for Birthday {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Birthday {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Birthday::parse(&s).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid() {
        let b = Birthday::parse("12.06.1990").unwrap();
        assert_eq!(b.date(), NaiveDate::from_ymd_opt(1990, 6, 12).unwrap());
    }

    #[test]
    fn test_display_round_trip() {
        for raw in ["01.01.2000", "29.02.2024", "31.12.1999", "05.09.0987"] {
            assert_eq!(Birthday::parse(raw).unwrap().to_string(), raw);
        }
    }

    #[test]
    fn test_rejects_impossible_dates() {
        assert!(Birthday::parse("31.02.2024").is_err());
        assert!(Birthday::parse("29.02.2023").is_err());
        assert!(Birthday::parse("00.01.2000").is_err());
        assert!(Birthday::parse("15.13.2000").is_err());
    }

    #[test]
    fn test_rejects_wrong_shape() {
        assert!(Birthday::parse("1.6.1990").is_err());
        assert!(Birthday::parse("1990-06-12").is_err());
        assert!(Birthday::parse("12/06/1990").is_err());
        assert!(Birthday::parse("12.06.90").is_err());
        assert!(Birthday::parse("12.06.1990 ").is_err());
        assert!(Birthday::parse("+2.06.1990").is_err());
        assert!(Birthday::parse("").is_err());
    }

    #[test]
    fn test_error_message() {
        let err = Birthday::parse("tomorrow").unwrap_err();
        assert_eq!(err.to_string(), "invalid date format");
    }

    #[test]
    fn test_leap_day_occurrence() {
        let b = Birthday::parse("29.02.2000").unwrap();
        assert_eq!(
            b.occurrence_in(2024),
            NaiveDate::from_ymd_opt(2024, 2, 29).unwrap()
        );
        assert_eq!(
            b.occurrence_in(2025),
            NaiveDate::from_ymd_opt(2025, 2, 28).unwrap()
        );
    }

    #[test]
    fn test_serde_uses_display_format() {
        let b = Birthday::parse("03.04.1985").unwrap();
        let json = serde_json::to_string(&b).unwrap();
        assert_eq!(json, "\"03.04.1985\"");
        let back: Birthday = serde_json::from_str(&json).unwrap();
        assert_eq!(back, b);
        assert!(serde_json::from_str::<Birthday>("\"1985-04-03\"").is_err());
    }
}
