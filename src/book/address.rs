//! Address book: contacts keyed by name.

use crate::book::contains;
use crate::domain::Contact;
use crate::error::CoreError;

/// An insertion-order-preserving store of contacts, keyed by name.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AddressBook {
    records: Vec<Contact>,
}

impl AddressBook {
    /// Creates an empty address book.
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuilds a book from persisted records, re-applying overwrite
    /// semantics in case the blob carries duplicate names.
    pub fn from_records(records: Vec<Contact>) -> Self {
        let mut book = Self::new();
        for record in records {
            book.add(record);
        }
        book
    }

    /// Adds a contact, overwriting any existing record with the same name.
    ///
    /// An overwrite keeps the original insertion position; a fresh name
    /// appends.
    pub fn add(&mut self, contact: Contact) {
        match self
            .records
            .iter_mut()
            .find(|r| r.name().as_str() == contact.name().as_str())
        {
            Some(slot) => *slot = contact,
            None => self.records.push(contact),
        }
    }

    /// Looks a contact up by exact name. Absence is not an error.
    pub fn get(&self, name: &str) -> Option<&Contact> {
        self.records.iter().find(|r| r.name().as_str() == name)
    }

    /// Mutable lookup by exact name.
    pub fn get_mut(&mut self, name: &str) -> Option<&mut Contact> {
        self.records.iter_mut().find(|r| r.name().as_str() == name)
    }

    /// Removes a contact by exact name.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::NotFound` when the name is absent.
    pub fn remove(&mut self, name: &str) -> Result<Contact, CoreError> {
        match self.records.iter().position(|r| r.name().as_str() == name) {
            Some(pos) => Ok(self.records.remove(pos)),
            None => Err(CoreError::NotFound(name.to_string())),
        }
    }

    /// All contacts in insertion order.
    pub fn records(&self) -> &[Contact] {
        &self.records
    }

    /// Iterates contacts in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Contact> {
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
    /// Pass one collects contacts whose *name* contains `needle`; pass two
    /// collects contacts whose phones or emails contain it. Name matches come
    /// first, each pass in insertion order, and a contact matched by name is
    /// skipped in the content pass.
    pub fn search(&self, needle: &str, case_insensitive: bool) -> Vec<&Contact> {
        let mut by_name = Vec::new();
        let mut by_content = Vec::new();

        for record in &self.records {
            if contains(record.name().as_str(), needle, case_insensitive) {
                by_name.push(record);
                continue;
            }
            let in_phones = record
                .phones()
                .iter()
                .any(|p| contains(p.as_str(), needle, case_insensitive));
            let in_emails = record
                .emails()
                .iter()
                .any(|e| contains(e.as_str(), needle, case_insensitive));
            if in_phones || in_emails {
                by_content.push(record);
            }
        }

        by_name.extend(by_content);
        by_name
    }
}
