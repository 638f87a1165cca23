//! Record collections: AddressBook and Notebook.
//!
//! Both are key-unique, insertion-order-preserving stores. Adding a record
//! whose key already exists overwrites it in place; a fresh key appends.

mod address;
mod notebook;
mod page;

pub use address::AddressBook;
pub use notebook::Notebook;
pub use page::{Page, paginate};

/// Substring match with an explicit case-sensitivity switch.
pub(crate) fn contains(haystack: &str, needle: &str, case_insensitive: bool) -> bool {
    if case_insensitive {
        haystack.to_lowercase().contains(&needle.to_lowercase())
    } else {
        haystack.contains(needle)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn contains_respects_case_by_default() {
        assert!(contains("Mira", "Mir", false));
        assert!(!contains("Mira", "mir", false));
    }

    #[test]
    fn contains_folds_case_when_asked() {
        assert!(contains("Mira", "MIRA", true));
    }
}
