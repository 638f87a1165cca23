//! Contact name field.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ValidationError;

/// A contact's name.
///
/// Names are the identity key of a contact and are immutable once set.
///
/// # Validation Rules
/// - Non-empty after trimming
/// - Alphabetic characters only (no digits, spaces, or punctuation)
///
/// # Examples
///
/// ```
/// use rolo::domain::Name;
///
/// let name = Name::new("Mira").unwrap();
/// assert_eq!(name.as_str(), "Mira");
/// assert!(Name::new("Mira7").is_err());
/// ```
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Name(String);

impl Name {
    /// Creates a new Name from a string.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if the input is empty or contains anything
    /// other than alphabetic characters.
    pub fn new(s: &str) -> Result<Self, ValidationError> {
        let trimmed = s.trim();

        if trimmed.is_empty() || !trimmed.chars().all(char::is_alphabetic) {
            return Err(ValidationError::new(
                "name",
                "alphabetic characters only, e.g. 'Mira'",
            ));
        }

        Ok(Self(trimmed.to_string()))
    }

    /// Returns the name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Debug for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Name(\"{}\")", self.0)
    }
}

impl FromStr for Name {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl Serialize for Name {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for Name {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
