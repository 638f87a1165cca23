//! Capability traits the core depends on.
//!
//! The session and resolver only ever see these seams; the concrete console,
//! renderer, storage, and directory sorter live behind them.

use std::io;
use std::path::Path;

use crate::book::{AddressBook, Notebook};

/// Line-oriented console used by the session loop and the resolver's
/// correction prompt.
pub trait Console {
    /// Prints `prompt` without a trailing newline and reads one line,
    /// stripped of its line ending. Returns `None` at end of input.
    fn read_line(&mut self, prompt: &str) -> io::Result<Option<String>>;

    /// Writes one line of output.
    fn write_line(&mut self, line: &str);
}

/// Pluggable renderer for the three listing surfaces.
pub trait View {
    fn display_contacts(&self, contacts: &AddressBook);
    fn display_notes(&self, notes: &Notebook);
    fn display_commands(&self, commands: &str);
}

/// Whole-collection persistence.
///
/// A missing or unreadable blob loads as an empty collection; saving always
/// rewrites the whole mapping.
pub trait BookStore {
    fn load_contacts(&self) -> AddressBook;
    fn load_notes(&self) -> Notebook;
    fn save_contacts(&self, contacts: &AddressBook) -> anyhow::Result<()>;
    fn save_notes(&self, notes: &Notebook) -> anyhow::Result<()>;
}

/// Directory-sorting side command, delegated to a collaborator.
pub trait DirSorter {
    /// Sorts `folder` and returns a human-readable summary.
    fn sort(&self, folder: &Path) -> io::Result<String>;
}
