//! Error taxonomy raised by the data model and session handlers.
//!
//! Everything here is caught at the dispatch boundary and turned into a
//! user-facing message; no member of this taxonomy is fatal to the session.

use std::io;
use thiserror::Error;

/// Error returned when a field value fails validation.
///
/// Carries the field kind and a human-readable description of the expected
/// format so the session can echo it back to the user verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid {field}: expected {expected}")]
pub struct ValidationError {
    /// Which field kind rejected the value.
    pub field: &'static str,
    /// Description of the expected format.
    pub expected: String,
}

impl ValidationError {
    /// Creates a validation error for the given field kind.
    pub fn new(field: &'static str, expected: impl Into<String>) -> Self {
        Self {
            field,
            expected: expected.into(),
        }
    }
}

/// Errors raised by business logic during command handling.
#[derive(Debug, Error)]
pub enum CoreError {
    /// A field value did not match its expected format.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// A get/delete/edit referenced a key that is not in the collection.
    #[error("no record found for '{0}'")]
    NotFound(String),

    /// An index-addressed edit referenced a position past the end.
    #[error("index {index} is out of range for {what} with {len} entries")]
    IndexOutOfRange {
        what: &'static str,
        index: usize,
        len: usize,
    },

    /// A handler received the wrong number or kind of arguments.
    #[error("{0}")]
    Shape(String),

    /// Console or storage plumbing failed mid-command.
    #[error("console error: {0}")]
    Io(#[from] io::Error),
}

impl CoreError {
    /// Creates a shape error from a message.
    pub fn shape(msg: impl Into<String>) -> Self {
        CoreError::Shape(msg.into())
    }
}
