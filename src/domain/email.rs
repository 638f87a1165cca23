//! Email address field.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use crate::error::ValidationError;

static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z0-9_.+-]+@[A-Za-z0-9-]+\.[A-Za-z0-9-.]+$").expect("email pattern is valid")
});

/// An email address in `local@domain.tld` shape.
///
/// The local part accepts alphanumerics plus `_.+-`; the domain accepts
/// alphanumerics and hyphens and must carry at least one dot.
///
/// # Examples
///
/// ```
/// use rolo::domain::Email;
///
/// let email = Email::new("mira@example.com").unwrap();
/// assert_eq!(email.as_str(), "mira@example.com");
/// assert!(Email::new("mira@example").is_err());
/// ```
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Email(String);

impl Email {
    /// Creates a new Email from a string.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` when the input does not match the
    /// `local@domain.tld` shape.
    pub fn new(s: &str) -> Result<Self, ValidationError> {
        let trimmed = s.trim();

        if !EMAIL_RE.is_match(trimmed) {
            return Err(ValidationError::new(
                "email",
                "an address like 'name@example.com'",
            ));
        }

        Ok(Self(trimmed.to_string()))
    }

    /// Returns the address as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Email {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Debug for Email {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Email(\"{}\")", self.0)
    }
}

impl FromStr for Email {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl Serialize for Email {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for Email {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn new_with_valid_address() {
        let email = Email::new("mira@example.com").unwrap();
        assert_eq!(email.as_str(), "mira@example.com");
    }

    #[test]
    fn new_accepts_local_part_punctuation() {
        assert!(Email::new("first.last+tag@example.com").is_ok());
        assert!(Email::new("user_name-1@example.co.uk").is_ok());
    }

    #[test]
    fn new_trims_surrounding_whitespace() {
        let email = Email::new("  mira@example.com  ").unwrap();
        assert_eq!(email.as_str(), "mira@example.com");
    }

    #[test]
    fn new_rejects_missing_at() {
        assert!(Email::new("mira.example.com").is_err());
    }

    #[test]
    fn new_rejects_missing_tld() {
        assert!(Email::new("mira@example").is_err());
    }

    #[test]
    fn new_rejects_empty_local_part() {
        assert!(Email::new("@example.com").is_err());
    }

    #[test]
    fn new_rejects_spaces() {
        assert!(Email::new("mira smith@example.com").is_err());
    }

    #[test]
    fn new_rejects_empty_string() {
        assert!(Email::new("").is_err());
    }

    #[test]
    fn error_names_expected_format() {
        let err = Email::new("nope").unwrap_err();
        assert!(err.to_string().contains("name@example.com"));
    }

    #[test]
    fn serde_roundtrip() {
        let email = Email::new("mira@example.com").unwrap();
        let json = serde_json::to_string(&email).unwrap();
        let parsed: Email = serde_json::from_str(&json).unwrap();
        assert_eq!(email, parsed);
    }

    #[test]
    fn serde_rejects_invalid_on_deserialize() {
        let result: Result<Email, _> = serde_json::from_str("\"not-an-email\"");
        assert!(result.is_err());
    }
}
