//! Phone number field with digit normalization.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use crate::error::ValidationError;

static PHONE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(38)?\d{10}$").expect("phone pattern is valid"));

/// A normalized phone number.
///
/// Construction strips every non-digit character first, so punctuated input
/// like `(050) 123-45-67` is accepted. The remaining digits must form a
/// 10-digit national number, optionally prefixed with country code `38`.
/// Only the digits are stored.
///
/// # Examples
///
/// ```
/// use rolo::domain::Phone;
///
/// let phone = Phone::new("(050) 123-45-67").unwrap();
/// assert_eq!(phone.as_str(), "0501234567");
///
/// let intl = Phone::new("380501234567").unwrap();
/// assert_eq!(intl.as_str(), "380501234567");
/// ```
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Phone(String); // Digits only

impl Phone {
    /// Creates a new Phone from a string.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` when the digits left after stripping
    /// punctuation do not match `(38)?` followed by 10 digits.
    pub fn new(s: &str) -> Result<Self, ValidationError> {
        let digits: String = s.chars().filter(char::is_ascii_digit).collect();

        if !PHONE_RE.is_match(&digits) {
            return Err(ValidationError::new(
                "phone",
                "10 digits, optionally prefixed with country code 38, e.g. '0501234567'",
            ));
        }

        Ok(Self(digits))
    }

    /// Returns the normalized digits as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Phone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Debug for Phone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Phone(\"{}\")", self.0)
    }
}

impl FromStr for Phone {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl Serialize for Phone {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for Phone {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
