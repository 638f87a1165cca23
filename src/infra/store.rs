//! JSON persistence for the address book and notebook with atomic writes.

use serde::Serialize;
use serde::de::DeserializeOwned;
use std::fs;
use std::io::{self, Write as IoWrite};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use thiserror::Error;

use crate::book::{AddressBook, Notebook};
use crate::ports::BookStore;

const CONTACTS_FILE: &str = "contacts.json";
const NOTES_FILE: &str = "notes.json";

/// Errors while persisting the books.
///
/// Loading never errors: a missing or unreadable file is an empty book, so a
/// first run and a corrupted file both start the session cleanly.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to create data directory {path}: {source}")]
    CreateDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to serialize records: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("atomic write failed for {path}: {source}")]
    AtomicWrite {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Stores each book as a JSON array of records in the data directory.
pub struct JsonStore {
    data_dir: PathBuf,
}

impl JsonStore {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    pub fn contacts_path(&self) -> PathBuf {
        self.data_dir.join(CONTACTS_FILE)
    }

    pub fn notes_path(&self) -> PathBuf {
        self.data_dir.join(NOTES_FILE)
    }

    fn load_records<T: DeserializeOwned>(&self, file_name: &str) -> Vec<T> {
        let path = self.data_dir.join(file_name);
        let Ok(bytes) = fs::read(&path) else {
            return Vec::new();
        };
        serde_json::from_slice(&bytes).unwrap_or_default()
    }

    /// Writes records via a temporary file and atomic rename so an
    /// interrupted save never leaves a half-written book behind.
    fn save_records<T: Serialize>(&self, file_name: &str, records: &[T]) -> Result<(), StoreError> {
        fs::create_dir_all(&self.data_dir).map_err(|e| StoreError::CreateDir {
            path: self.data_dir.clone(),
            source: e,
        })?;

        let path = self.data_dir.join(file_name);
        let json = serde_json::to_vec_pretty(records)?;

        let mut temp = NamedTempFile::new_in(&self.data_dir).map_err(|e| atomic(&path, e))?;
        temp.write_all(&json).map_err(|e| atomic(&path, e))?;
        temp.persist(&path).map_err(|e| atomic(&path, e.error))?;

        Ok(())
    }
}

fn atomic(path: &Path, source: io::Error) -> StoreError {
    StoreError::AtomicWrite {
        path: path.into(),
        source,
    }
}

impl BookStore for JsonStore {
    fn load_contacts(&self) -> AddressBook {
        AddressBook::from_records(self.load_records(CONTACTS_FILE))
    }

    fn load_notes(&self) -> Notebook {
        Notebook::from_records(self.load_records(NOTES_FILE))
    }

    fn save_contacts(&self, contacts: &AddressBook) -> anyhow::Result<()> {
        self.save_records(CONTACTS_FILE, contacts.records())?;
        Ok(())
    }

    fn save_notes(&self, notes: &Notebook) -> anyhow::Result<()> {
        self.save_records(NOTES_FILE, notes.records())?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Contact, Hashtag, NoteEntry};
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    fn sample_contact() -> Contact {
        let mut contact = Contact::new("Mira".parse().unwrap());
        contact.add_phone("0501234567".parse().unwrap());
        contact.add_email("mira@example.com".parse().unwrap());
        contact.set_birthday("24.03.1990".parse().unwrap());
        contact
    }

    fn sample_entry() -> NoteEntry {
        let mut entry = NoteEntry::new(Hashtag::new("#shopping").unwrap());
        entry.add_note("buy milk");
        entry
    }

    // ===========================================
    // Loading
    // ===========================================

    #[test]
    fn missing_files_load_as_empty_books() {
        let dir = TempDir::new().unwrap();
        let store = JsonStore::new(dir.path());

        assert!(store.load_contacts().is_empty());
        assert!(store.load_notes().is_empty());
    }

    #[test]
    fn corrupt_file_loads_as_empty_book() {
        let dir = TempDir::new().unwrap();
        let store = JsonStore::new(dir.path());
        fs::write(store.contacts_path(), "not json at all").unwrap();

        assert!(store.load_contacts().is_empty());
    }

    #[test]
    fn records_failing_validation_load_as_empty_book() {
        let dir = TempDir::new().unwrap();
        let store = JsonStore::new(dir.path());
        let json = r#"[{"name": "Mira", "phones": ["not-a-phone"], "emails": []}]"#;
        fs::write(store.contacts_path(), json).unwrap();

        assert!(store.load_contacts().is_empty());
    }

    // ===========================================
    // Saving
    // ===========================================

    #[test]
    fn save_then_load_preserves_contacts() {
        let dir = TempDir::new().unwrap();
        let store = JsonStore::new(dir.path());

        let mut contacts = AddressBook::new();
        contacts.add(sample_contact());
        store.save_contacts(&contacts).unwrap();

        let loaded = store.load_contacts();
        let contact = loaded.get("Mira").unwrap();
        assert_eq!(contact.phones()[0].as_str(), "0501234567");
        assert_eq!(contact.emails()[0].as_str(), "mira@example.com");
        assert!(contact.birthday().is_some());
    }

    #[test]
    fn save_then_load_preserves_notes() {
        let dir = TempDir::new().unwrap();
        let store = JsonStore::new(dir.path());

        let mut notes = Notebook::new();
        notes.add(sample_entry());
        store.save_notes(&notes).unwrap();

        assert!(store.notes_path().exists());
        let loaded = store.load_notes();
        assert_eq!(
            loaded.get("#shopping").unwrap().notes()[0].as_str(),
            "buy milk"
        );
    }

    #[test]
    fn save_creates_the_data_directory() {
        let dir = TempDir::new().unwrap();
        let store = JsonStore::new(dir.path().join("rolo").join("data"));

        store.save_contacts(&AddressBook::new()).unwrap();
        assert!(store.contacts_path().exists());
    }

    #[test]
    fn save_leaves_no_temp_files() {
        let dir = TempDir::new().unwrap();
        let store = JsonStore::new(dir.path());

        let mut contacts = AddressBook::new();
        contacts.add(sample_contact());
        store.save_contacts(&contacts).unwrap();

        let files: Vec<_> = fs::read_dir(dir.path())
            .unwrap()
            .filter_map(Result::ok)
            .collect();
        assert_eq!(files.len(), 1);
        assert_eq!(files[0].file_name(), CONTACTS_FILE);
    }

    #[test]
    fn save_overwrites_previous_contents() {
        let dir = TempDir::new().unwrap();
        let store = JsonStore::new(dir.path());

        let mut contacts = AddressBook::new();
        contacts.add(sample_contact());
        store.save_contacts(&contacts).unwrap();

        store.save_contacts(&AddressBook::new()).unwrap();
        assert!(store.load_contacts().is_empty());
    }

    #[test]
    fn books_keep_insertion_order_across_a_roundtrip() {
        let dir = TempDir::new().unwrap();
        let store = JsonStore::new(dir.path());

        let mut contacts = AddressBook::new();
        for name in ["Cleo", "Ada", "Ben"] {
            contacts.add(Contact::new(name.parse().unwrap()));
        }
        store.save_contacts(&contacts).unwrap();

        let names: Vec<_> = store
            .load_contacts()
            .iter()
            .map(|c| c.name().as_str().to_string())
            .collect();
        assert_eq!(names, ["Cleo", "Ada", "Ben"]);
    }
}
