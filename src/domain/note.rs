//! Note record: a hashtag and its ordered note bodies.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::Hashtag;
use crate::error::CoreError;

/// A plain note body.
///
/// Bodies are free text; only `&str` and `String` convert into this, so a
/// record can never hold a non-text body.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NoteText(String);

impl NoteText {
    /// Returns the body as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for NoteText {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for NoteText {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl fmt::Display for NoteText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Debug for NoteText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "NoteText(\"{}\")", self.0)
    }
}

/// A note record: one hashtag keying an ordered sequence of bodies.
///
/// The hashtag is the record's identity within a notebook and is fixed at
/// construction. Bodies keep insertion order; that order is what
/// index-addressed edits refer to.
#[derive(Clone, PartialEq, Serialize, Deserialize)]
pub struct NoteEntry {
    hashtag: Hashtag,
    #[serde(default)]
    notes: Vec<NoteText>,
}

impl NoteEntry {
    /// Creates an entry with no bodies yet.
    pub fn new(hashtag: Hashtag) -> Self {
        Self {
            hashtag,
            notes: Vec::new(),
        }
    }

    /// The identifying hashtag.
    pub fn hashtag(&self) -> &Hashtag {
        &self.hashtag
    }

    /// Bodies in insertion order.
    pub fn notes(&self) -> &[NoteText] {
        &self.notes
    }

    /// Appends a note body.
    pub fn add_note(&mut self, note: impl Into<NoteText>) {
        self.notes.push(note.into());
    }

    /// Replaces the first body whose text equals `old`.
    ///
    /// Returns `false` (leaving the record untouched) when nothing matches.
    pub fn edit_note(&mut self, old: &str, new: impl Into<NoteText>) -> bool {
        match self.notes.iter_mut().find(|n| n.as_str() == old) {
            Some(slot) => {
                *slot = new.into();
                true
            }
            None => false,
        }
    }

    /// The body at `index`.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::IndexOutOfRange` for an invalid index.
    pub fn note_at(&self, index: usize) -> Result<&NoteText, CoreError> {
        self.notes.get(index).ok_or(CoreError::IndexOutOfRange {
            what: "notes",
            index,
            len: self.notes.len(),
        })
    }
}

impl fmt::Display for NoteEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.hashtag)?;
        if !self.notes.is_empty() {
            let bodies: Vec<&str> = self.notes.iter().map(NoteText::as_str).collect();
            write!(f, ": {}", bodies.join(", "))?;
        }
        Ok(())
    }
}

impl fmt::Debug for NoteEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NoteEntry")
            .field("hashtag", &self.hashtag)
            .field("notes", &self.notes)
            .finish()
    }
}
