//! Interactive session: load, prompt/dispatch loop, save on exit.

mod handlers;

use anyhow::Result;

use crate::book::{AddressBook, Notebook};
use crate::ports::{BookStore, Console, DirSorter, View};
use crate::resolver;

/// What a dispatched command produced.
#[derive(Debug, PartialEq)]
pub enum Outcome {
    /// A message to print.
    Message(String),
    /// Output already went through the view; nothing left to print.
    Done,
    /// End the session.
    Quit,
}

/// One interactive session over an address book and a notebook.
///
/// The last raw input line is kept on the session (never in a global) so the
/// error path can run the did-you-mean help lookup against it.
pub struct Session<'a> {
    contacts: AddressBook,
    notes: Notebook,
    store: &'a dyn BookStore,
    console: &'a mut dyn Console,
    view: &'a dyn View,
    sorter: &'a dyn DirSorter,
    last_input: String,
}

impl<'a> Session<'a> {
    pub fn new(
        store: &'a dyn BookStore,
        console: &'a mut dyn Console,
        view: &'a dyn View,
        sorter: &'a dyn DirSorter,
    ) -> Self {
        Self {
            contacts: AddressBook::new(),
            notes: Notebook::new(),
            store,
            console,
            view,
            sorter,
            last_input: String::new(),
        }
    }

    /// Runs the session to completion: load both collections, loop over
    /// prompt/resolve/dispatch, then persist on the way out.
    ///
    /// End of input behaves like an exit command.
    pub fn run(&mut self) -> Result<()> {
        self.contacts = self.store.load_contacts();
        self.notes = self.store.load_notes();
        self.view.display_contacts(&self.contacts);
        self.view.display_notes(&self.notes);

        loop {
            let Some(line) = self.console.read_line(">>> ")? else {
                break;
            };
            self.last_input = line.clone();

            let resolved = resolver::resolve(&line, &mut *self.console)?;
            match self.dispatch(resolved) {
                Ok(Outcome::Quit) => {
                    self.console.write_line("Goodbye!");
                    break;
                }
                Ok(Outcome::Message(msg)) => self.console.write_line(&msg),
                Ok(Outcome::Done) => {}
                Err(err) => {
                    // Did-you-mean lookup first, then the error itself.
                    let hints = resolver::matching_help_lines(&self.last_input);
                    if !hints.is_empty() {
                        self.console.write_line(&hints);
                    }
                    self.console.write_line(&err.to_string());
                }
            }
        }

        self.store.save_contacts(&self.contacts)?;
        self.store.save_notes(&self.notes)?;
        Ok(())
    }
}
