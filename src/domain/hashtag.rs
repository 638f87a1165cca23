//! Hashtag field keying note records.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use crate::error::ValidationError;

static HASHTAG_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^#\w+$").expect("hashtag pattern is valid"));

/// A hashtag identifying a group of notes.
///
/// Input without a leading `#` gets one prepended before validation, so
/// `shopping` and `#shopping` construct the same value. After the `#`, only
/// word characters (letters, digits, underscore) are allowed.
///
/// # Examples
///
/// ```
/// use rolo::domain::Hashtag;
///
/// let bare = Hashtag::new("shopping").unwrap();
/// let tagged = Hashtag::new("#shopping").unwrap();
/// assert_eq!(bare, tagged);
/// assert_eq!(bare.as_str(), "#shopping");
/// ```
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Hashtag(String); // Always stored with leading '#'

impl Hashtag {
    /// Creates a new Hashtag from a string, prepending `#` when missing.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` when the remainder contains anything other
    /// than letters, digits, and underscores, or is empty.
    pub fn new(s: &str) -> Result<Self, ValidationError> {
        let trimmed = s.trim();
        let tagged = if trimmed.starts_with('#') {
            trimmed.to_string()
        } else {
            format!("#{trimmed}")
        };

        if !HASHTAG_RE.is_match(&tagged) {
            return Err(ValidationError::new(
                "hashtag",
                "'#' followed by letters, digits, or underscores, e.g. '#shopping'",
            ));
        }

        Ok(Self(tagged))
    }

    /// Returns the hashtag including the leading `#`.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Hashtag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Debug for Hashtag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Hashtag(\"{}\")", self.0)
    }
}

impl FromStr for Hashtag {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl Serialize for Hashtag {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for Hashtag {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// Collects the `#`-prefixed words of `text`, in order.
pub fn extract_hashtags(text: &str) -> Vec<String> {
    text.split_whitespace()
        .filter(|word| word.starts_with('#'))
        .map(str::to_string)
        .collect()
}

/// Returns `text` with its `#`-prefixed words removed.
pub fn strip_hashtags(text: &str) -> String {
    text.split_whitespace()
        .filter(|word| !word.starts_with('#'))
        .collect::<Vec<_>>()
        .join(" ")
}
