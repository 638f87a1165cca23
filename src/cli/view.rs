//! Console rendering of the loaded books.

use crate::book::{AddressBook, Notebook};
use crate::ports::View;

pub struct ConsoleView;

impl View for ConsoleView {
    fn display_contacts(&self, contacts: &AddressBook) {
        if contacts.is_empty() {
            println!("No contacts found.");
            return;
        }
        for contact in contacts.iter() {
            println!("{contact}");
        }
    }

    fn display_notes(&self, notes: &Notebook) {
        if notes.is_empty() {
            println!("No notes found.");
            return;
        }
        for entry in notes.iter() {
            println!("{entry}");
        }
    }

    fn display_commands(&self, commands: &str) {
        println!("Available commands:");
        println!("{commands}");
    }
}
