//! Notebook: note records keyed by hashtag.

use crate::book::contains;
use crate::domain::NoteEntry;
use crate::error::CoreError;

/// An insertion-order-preserving store of note records, keyed by hashtag
/// (including the leading `#`).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Notebook {
    records: Vec<NoteEntry>,
}

impl Notebook {
    /// Creates an empty notebook.
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuilds a notebook from persisted records, re-applying overwrite
    /// semantics in case the blob carries duplicate hashtags.
    pub fn from_records(records: Vec<NoteEntry>) -> Self {
        let mut book = Self::new();
        for record in records {
            book.add(record);
        }
        book
    }

    /// Adds an entry, overwriting any existing record with the same hashtag.
    pub fn add(&mut self, entry: NoteEntry) {
        match self
            .records
            .iter_mut()
            .find(|r| r.hashtag().as_str() == entry.hashtag().as_str())
        {
            Some(slot) => *slot = entry,
            None => self.records.push(entry),
        }
    }

    /// Looks an entry up by exact hashtag. Absence is not an error.
    pub fn get(&self, hashtag: &str) -> Option<&NoteEntry> {
        self.records.iter().find(|r| r.hashtag().as_str() == hashtag)
    }

    /// Mutable lookup by exact hashtag.
    pub fn get_mut(&mut self, hashtag: &str) -> Option<&mut NoteEntry> {
        self.records
            .iter_mut()
            .find(|r| r.hashtag().as_str() == hashtag)
    }

    /// Removes an entry by exact hashtag.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::NotFound` when the hashtag is absent.
    pub fn remove(&mut self, hashtag: &str) -> Result<NoteEntry, CoreError> {
        match self
            .records
            .iter()
            .position(|r| r.hashtag().as_str() == hashtag)
        {
            Some(pos) => Ok(self.records.remove(pos)),
            None => Err(CoreError::NotFound(hashtag.to_string())),
        }
    }

    /// All entries in insertion order.
    pub fn records(&self) -> &[NoteEntry] {
        &self.records
    }

    /// Iterates entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &NoteEntry> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Two-pass substring search.
    ///
    /// Pass one collects entries whose *hashtag* contains `needle`; pass two
    /// collects entries whose note bodies contain it. Tag matches come first,
    /// each pass in insertion order, and an entry matched by tag is skipped
    /// in the content pass.
    pub fn search(&self, needle: &str, case_insensitive: bool) -> Vec<&NoteEntry> {
        let mut by_tag = Vec::new();
        let mut by_content = Vec::new();

        for record in &self.records {
            if contains(record.hashtag().as_str(), needle, case_insensitive) {
                by_tag.push(record);
                continue;
            }
            if record
                .notes()
                .iter()
                .any(|n| contains(n.as_str(), needle, case_insensitive))
            {
                by_content.push(record);
            }
        }

        by_tag.extend(by_content);
        by_tag
    }
}
