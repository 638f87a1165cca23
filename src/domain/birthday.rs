//! Birthday field stored as a calendar date.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ValidationError;

const DATE_FORMAT: &str = "%d.%m.%Y";

/// A contact's birthday.
///
/// Parsed strictly from `dd.mm.yyyy`; any other shape fails validation.
/// Stored as a calendar date and displayed back in the same format.
///
/// # Examples
///
/// ```
/// use rolo::domain::Birthday;
///
/// let birthday = Birthday::new("24.03.1990").unwrap();
/// assert_eq!(birthday.to_string(), "24.03.1990");
/// assert!(Birthday::new("1990-03-24").is_err());
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Birthday(NaiveDate);

impl Birthday {
    /// Creates a new Birthday from a `dd.mm.yyyy` string.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` for anything that is not a real calendar
    /// date in `dd.mm.yyyy` form, including the empty string.
    pub fn new(s: &str) -> Result<Self, ValidationError> {
        let date = NaiveDate::parse_from_str(s.trim(), DATE_FORMAT).map_err(|_| {
            ValidationError::new("birthday", "a date in dd.mm.yyyy form, e.g. '24.03.1990'")
        })?;

        Ok(Self(date))
    }

    /// Returns the stored calendar date.
    pub fn date(&self) -> NaiveDate {
        self.0
    }

    /// Days from `today` until the next occurrence of this birthday's
    /// month/day.
    ///
    /// Rolls over to next year when this year's date has already passed.
    /// If `today` lands exactly on the birthday, the result is 0.
    pub fn days_until_next(&self, today: NaiveDate) -> i64 {
        let mut next = self.occurrence_in(today.year());
        if next < today {
            next = self.occurrence_in(today.year() + 1);
        }
        (next - today).num_days()
    }

    /// The birthday's occurrence in the given year.
    ///
    /// Feb 29 birthdays fall back to Feb 28 in non-leap years.
    fn occurrence_in(&self, year: i32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, self.0.month(), self.0.day()).unwrap_or_else(|| {
            NaiveDate::from_ymd_opt(year, 2, 28).expect("Feb 28 exists in every year")
        })
    }
}

impl fmt::Display for Birthday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(DATE_FORMAT))
    }
}

impl fmt::Debug for Birthday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Birthday({})", self.0.format(DATE_FORMAT))
    }
}

impl FromStr for Birthday {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl Serialize for Birthday {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for Birthday {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
