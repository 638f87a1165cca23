//! One handler per console command, dispatched from the session loop.
//!
//! Every handler returns `Result<Outcome, CoreError>`; the loop maps errors
//! to messages and runs the did-you-mean lookup itself.

use chrono::{Local, NaiveDate};
use std::path::Path;

use super::{Outcome, Session};
use crate::book::paginate;
use crate::domain::{Contact, Hashtag, NoteEntry, extract_hashtags, strip_hashtags};
use crate::error::CoreError;
use crate::resolver::{Command, Resolved, help_text};

const NOTE_SEPARATOR: &str = "----------------------";

fn message(text: impl Into<String>) -> Result<Outcome, CoreError> {
    Ok(Outcome::Message(text.into()))
}

fn parse_number(s: &str, what: &str) -> Result<usize, CoreError> {
    s.parse()
        .map_err(|_| CoreError::shape(format!("'{s}' is not a valid {what}")))
}

/// One contact as a summary line, with days-to-birthday appended when a
/// birthday is set.
fn format_contact(contact: &Contact, today: NaiveDate) -> String {
    let mut line = contact.to_string();
    if let Some(days) = contact.days_to_birthday(today) {
        line.push_str(&format!(" days to birthday: {days}"));
    }
    line
}

/// Routes a contact detail by its shape: `@` means email, a dot means
/// birthday, anything else is treated as a phone.
fn add_detail(contact: &mut Contact, details: &str) -> Result<(), CoreError> {
    if details.contains('@') {
        contact.add_email(details.parse()?);
    } else if details.contains('.') {
        contact.set_birthday(details.parse()?);
    } else {
        contact.add_phone(details.parse()?);
    }
    Ok(())
}

impl Session<'_> {
    /// Invokes the handler for a resolved command.
    pub(crate) fn dispatch(&mut self, resolved: Resolved) -> Result<Outcome, CoreError> {
        let args = resolved.args;
        let today = Local::now().date_naive();

        match resolved.command {
            Command::Hello => message("How can I help you?"),
            Command::Help => {
                self.view.display_commands(help_text());
                Ok(Outcome::Done)
            }
            Command::Add => self.handle_add(&args),
            Command::Note => self.handle_note(&args),
            Command::Change => self.handle_change(&args),
            Command::ShowAll => self.handle_show_all(today),
            Command::ShowNotes => self.handle_show_notes(&args),
            Command::Phone => self.handle_phone(&args),
            Command::Email => self.handle_email(&args),
            Command::Birthday => self.handle_birthday(&args, today),
            Command::Birthdays => self.handle_birthdays(&args, today),
            Command::Search => self.handle_search(&args, today),
            Command::Page => self.handle_page(&args, today),
            Command::Notes => self.handle_notes_pages(&args),
            Command::Modify => self.handle_modify(&args),
            Command::Find => self.handle_find(&args, today),
            Command::Delete => self.handle_delete(&args),
            Command::Hashtag => self.handle_hashtag(&args),
            Command::Sort => self.handle_sort(&args),
            Command::Exit => Ok(Outcome::Quit),
            Command::Unknown => message("Enter a new command"),
        }
    }

    fn handle_add(&mut self, args: &[String]) -> Result<Outcome, CoreError> {
        let [name, details] = args else {
            return Err(CoreError::shape(
                "expected: add <name> <phone|email|dd.mm.yyyy>",
            ));
        };

        if let Some(contact) = self.contacts.get_mut(name) {
            add_detail(contact, details)?;
            message("Contact details added successfully")
        } else {
            let mut contact = Contact::new(name.parse()?);
            add_detail(&mut contact, details)?;
            self.contacts.add(contact);
            message("Contact successfully added")
        }
    }

    fn handle_note(&mut self, args: &[String]) -> Result<Outcome, CoreError> {
        let text = args.first().map(String::as_str).unwrap_or_default();

        let mut hashtags = extract_hashtags(text);
        if hashtags.is_empty() {
            // Notes must land under some tag; ask, defaulting to #untagged.
            let answer = self
                .console
                .read_line("Please enter hashtags for the note: ")?
                .unwrap_or_default();
            let answer = answer.trim().to_string();
            if answer.is_empty() {
                hashtags = vec!["#untagged".to_string()];
            } else {
                hashtags = extract_hashtags(&answer);
                if hashtags.is_empty() {
                    hashtags = vec![answer];
                }
            }
        }

        let cleaned = strip_hashtags(text);
        for tag in &hashtags {
            let hashtag: Hashtag = tag.parse()?;
            match self.notes.get_mut(hashtag.as_str()) {
                Some(entry) => entry.add_note(cleaned.as_str()),
                None => {
                    let mut entry = NoteEntry::new(hashtag);
                    entry.add_note(cleaned.as_str());
                    self.notes.add(entry);
                }
            }
        }

        message("Note added successfully")
    }

    fn handle_change(&mut self, args: &[String]) -> Result<Outcome, CoreError> {
        let (name, new_phone, index) = match args {
            [name, phone] => (name, phone, 0),
            [name, phone, index] => (name, phone, parse_number(index, "phone index")?),
            _ => {
                return Err(CoreError::shape(
                    "expected: change <name> <new phone> [index]",
                ));
            }
        };

        let new_phone = new_phone.parse()?;
        let contact = self
            .contacts
            .get_mut(name)
            .ok_or_else(|| CoreError::NotFound(name.clone()))?;

        let Some(old) = contact.phone_at(index).map(|p| p.as_str().to_string()) else {
            return Err(CoreError::IndexOutOfRange {
                what: "phones",
                index,
                len: contact.phones().len(),
            });
        };
        contact.edit_phone(&old, new_phone);

        message("Phone number updated successfully")
    }

    fn handle_show_all(&self, today: NaiveDate) -> Result<Outcome, CoreError> {
        if self.contacts.is_empty() {
            return message("The phonebook is empty");
        }
        let lines: Vec<String> = self
            .contacts
            .iter()
            .map(|c| format_contact(c, today))
            .collect();
        message(lines.join("\n"))
    }

    fn handle_show_notes(&self, args: &[String]) -> Result<Outcome, CoreError> {
        if self.notes.is_empty() {
            return message("The notebook is empty");
        }

        match args.first() {
            None => {
                let lines: Vec<String> = self.notes.iter().map(ToString::to_string).collect();
                message(lines.join("\n"))
            }
            Some(criteria) => {
                let found = self.notes.search(criteria, false);
                if found.is_empty() {
                    return message(format!("No note records found for {criteria}"));
                }
                let lines: Vec<String> = found.iter().map(ToString::to_string).collect();
                message(lines.join("\n"))
            }
        }
    }

    fn handle_phone(&self, args: &[String]) -> Result<Outcome, CoreError> {
        let [name] = args else {
            return Err(CoreError::shape("expected: phone <name>"));
        };
        let contact = self
            .contacts
            .get(name)
            .ok_or_else(|| CoreError::NotFound(name.clone()))?;

        if contact.phones().is_empty() {
            return message("No phone number found for that name");
        }
        let lines: Vec<String> = contact
            .phones()
            .iter()
            .map(|p| format!("{}: {p}", contact.name()))
            .collect();
        message(lines.join("\n"))
    }

    fn handle_email(&self, args: &[String]) -> Result<Outcome, CoreError> {
        let [name] = args else {
            return Err(CoreError::shape("expected: email <name>"));
        };
        let contact = self
            .contacts
            .get(name)
            .ok_or_else(|| CoreError::NotFound(name.clone()))?;

        if contact.emails().is_empty() {
            return message("No email found for that name");
        }
        let lines: Vec<String> = contact
            .emails()
            .iter()
            .map(|e| format!("{}: {e}", contact.name()))
            .collect();
        message(lines.join("\n"))
    }

    fn handle_birthday(&self, args: &[String], today: NaiveDate) -> Result<Outcome, CoreError> {
        let [name] = args else {
            return Err(CoreError::shape("expected: birthday <name>"));
        };
        let contact = self
            .contacts
            .get(name)
            .ok_or_else(|| CoreError::NotFound(name.clone()))?;

        match contact.birthday() {
            Some(birthday) => message(format!(
                "{}: {birthday}, Days to birthday: {}",
                contact.name(),
                birthday.days_until_next(today)
            )),
            None => message("No birthday found for that name"),
        }
    }

    fn handle_birthdays(&self, args: &[String], today: NaiveDate) -> Result<Outcome, CoreError> {
        let days = match args {
            [] => 7,
            [days] => parse_number(days, "number of days")? as i64,
            _ => return Err(CoreError::shape("expected: birthdays [days]")),
        };

        let mut lines = Vec::new();
        for contact in self.contacts.iter() {
            if let (Some(birthday), Some(left)) =
                (contact.birthday(), contact.days_to_birthday(today))
            {
                if left <= days {
                    lines.push(format!(
                        "{}: birthday: {birthday} days to birthday: {left}",
                        contact.name()
                    ));
                }
            }
        }

        if lines.is_empty() {
            return message("No upcoming birthdays in the next few days.");
        }
        message(lines.join("\n"))
    }

    fn handle_search(&self, args: &[String], today: NaiveDate) -> Result<Outcome, CoreError> {
        let (criteria, fold_case) = match args {
            [criteria] => (criteria, false),
            [criteria, _flag] => (criteria, true),
            _ => return Err(CoreError::shape("expected: search <text> [flag]")),
        };

        let found = self.contacts.search(criteria, fold_case);
        if found.is_empty() {
            return message("No records found for that criteria");
        }
        let lines: Vec<String> = found.iter().map(|c| format_contact(c, today)).collect();
        message(lines.join("\n"))
    }

    fn handle_page(&self, args: &[String], today: NaiveDate) -> Result<Outcome, CoreError> {
        let (page, per_page) = match args {
            [] => (1, 3),
            [page] => (parse_number(page, "page number")?, 3),
            [page, size] => (
                parse_number(page, "page number")?,
                parse_number(size, "page size")?,
            ),
            _ => return Err(CoreError::shape("expected: page [page] [size]")),
        };

        if self.contacts.is_empty() {
            return message("The phonebook is empty");
        }

        let page = paginate(self.contacts.records(), page, per_page)?;
        let mut lines: Vec<String> = page
            .items
            .iter()
            .map(|c| format_contact(c, today))
            .collect();
        lines.push(format!("Page {}/{}", page.number, page.total_pages));
        message(lines.join("\n"))
    }

    fn handle_notes_pages(&self, args: &[String]) -> Result<Outcome, CoreError> {
        let (page, per_page) = match args {
            [] => (1, 1),
            [page] => (parse_number(page, "page number")?, 1),
            [page, count] => (
                parse_number(page, "page number")?,
                parse_number(count, "hashtag count")?,
            ),
            _ => return Err(CoreError::shape("expected: notes [page] [count]")),
        };

        if self.notes.is_empty() {
            return message("The notebook is empty");
        }

        let page = paginate(self.notes.records(), page, per_page)?;
        let mut lines = Vec::new();
        for entry in page.items {
            lines.push(format!("{}:", entry.hashtag()));
            for note in entry.notes() {
                lines.push(note.as_str().to_string());
                lines.push(NOTE_SEPARATOR.to_string());
            }
        }
        lines.push(format!("Page {}/{}", page.number, page.total_pages));
        message(lines.join("\n"))
    }

    fn handle_modify(&mut self, args: &[String]) -> Result<Outcome, CoreError> {
        let [hashtag, index, new_text] = args else {
            return Err(CoreError::shape(
                "expected: modify <hashtag> <index> <new text>",
            ));
        };

        let hashtag: Hashtag = hashtag.parse()?;
        let index = parse_number(index, "note index")?;
        let entry = self
            .notes
            .get_mut(hashtag.as_str())
            .ok_or_else(|| CoreError::NotFound(hashtag.as_str().to_string()))?;

        let old = entry.note_at(index)?.as_str().to_string();
        entry.edit_note(&old, new_text.as_str());

        message("Note updated successfully")
    }

    fn handle_find(&self, args: &[String], today: NaiveDate) -> Result<Outcome, CoreError> {
        let (name, fold_case) = match args {
            [name] => (name, false),
            [name, _flag] => (name, true),
            _ => return Err(CoreError::shape("expected: find <name> [flag]")),
        };

        if fold_case {
            let needle = name.to_lowercase();
            let lines: Vec<String> = self
                .contacts
                .iter()
                .filter(|c| c.name().as_str().to_lowercase() == needle)
                .map(|c| format_contact(c, today))
                .collect();
            if lines.is_empty() {
                return Err(CoreError::NotFound(name.clone()));
            }
            message(lines.join("\n"))
        } else {
            let contact = self
                .contacts
                .get(name)
                .ok_or_else(|| CoreError::NotFound(name.clone()))?;
            message(format_contact(contact, today))
        }
    }

    fn handle_delete(&mut self, args: &[String]) -> Result<Outcome, CoreError> {
        let [key] = args else {
            return Err(CoreError::shape("expected: delete <name|#hashtag>"));
        };

        if key.starts_with('#') {
            self.notes.remove(key)?;
            message(format!("Record for hashtag {key} was deleted from notebook."))
        } else {
            self.contacts.remove(key)?;
            message(format!("Record for user {key} was deleted from addressbook."))
        }
    }

    fn handle_hashtag(&self, args: &[String]) -> Result<Outcome, CoreError> {
        let [tag] = args else {
            return Err(CoreError::shape("expected: hashtag <hashtag>"));
        };

        let hashtag: Hashtag = tag.parse()?;
        let entry = self
            .notes
            .get(hashtag.as_str())
            .ok_or_else(|| CoreError::NotFound(hashtag.as_str().to_string()))?;

        if entry.notes().is_empty() {
            return message(format!("No notes found for {hashtag}"));
        }

        let mut lines = vec![format!("{hashtag}:")];
        for note in entry.notes() {
            lines.push(note.as_str().to_string());
            lines.push(NOTE_SEPARATOR.to_string());
        }
        message(lines.join("\n"))
    }

    fn handle_sort(&mut self, args: &[String]) -> Result<Outcome, CoreError> {
        let [folder] = args else {
            return Err(CoreError::shape("expected: sort <folder>"));
        };
        let summary = self.sorter.sort(Path::new(folder))?;
        message(summary)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::book::{AddressBook, Notebook};
    use crate::ports::{BookStore, Console, DirSorter, View};
    use crate::resolver::resolve;
    use pretty_assertions::assert_eq;
    use std::io;

    struct ScriptedConsole {
        answers: Vec<String>,
    }

    impl ScriptedConsole {
        fn new(answers: &[&str]) -> Self {
            Self {
                answers: answers.iter().rev().map(|s| s.to_string()).collect(),
            }
        }
    }

    impl Console for ScriptedConsole {
        fn read_line(&mut self, _prompt: &str) -> io::Result<Option<String>> {
            Ok(self.answers.pop())
        }

        fn write_line(&mut self, _line: &str) {}
    }

    struct NullView;

    impl View for NullView {
        fn display_contacts(&self, _contacts: &AddressBook) {}
        fn display_notes(&self, _notes: &Notebook) {}
        fn display_commands(&self, _commands: &str) {}
    }

    struct NullStore;

    impl BookStore for NullStore {
        fn load_contacts(&self) -> AddressBook {
            AddressBook::new()
        }
        fn load_notes(&self) -> Notebook {
            Notebook::new()
        }
        fn save_contacts(&self, _contacts: &AddressBook) -> anyhow::Result<()> {
            Ok(())
        }
        fn save_notes(&self, _notes: &Notebook) -> anyhow::Result<()> {
            Ok(())
        }
    }

    struct NullSorter;

    impl DirSorter for NullSorter {
        fn sort(&self, folder: &Path) -> io::Result<String> {
            Ok(format!("sorted {}", folder.display()))
        }
    }

    // `Session` only borrows its collaborators, so each test builds them on
    // the stack; the macro keeps that boilerplate out of the test bodies.
    macro_rules! session {
        ($session:ident) => {
            session!($session, &[]);
        };
        ($session:ident, $answers:expr) => {
            let store = NullStore;
            let view = NullView;
            let sorter = NullSorter;
            let mut console = ScriptedConsole::new($answers);
            let mut $session = Session::new(&store, &mut console, &view, &sorter);
        };
    }

    fn dispatch_line(session: &mut Session<'_>, line: &str) -> Result<Outcome, CoreError> {
        let mut scratch = ScriptedConsole::new(&[]);
        let resolved = resolve(line, &mut scratch).unwrap();
        session.dispatch(resolved)
    }

    fn expect_message(result: Result<Outcome, CoreError>) -> String {
        match result.unwrap() {
            Outcome::Message(msg) => msg,
            other => panic!("expected a message, got {other:?}"),
        }
    }

    // ===========================================
    // add / change / show
    // ===========================================

    #[test]
    fn add_creates_then_appends() {
        session!(session);
        let msg = expect_message(dispatch_line(&mut session, "add Mira 0501234567"));
        assert_eq!(msg, "Contact successfully added");

        let msg = expect_message(dispatch_line(&mut session, "add Mira mira@example.com"));
        assert_eq!(msg, "Contact details added successfully");

        let contact = session.contacts.get("Mira").unwrap();
        assert_eq!(contact.phones().len(), 1);
        assert_eq!(contact.emails().len(), 1);
    }

    #[test]
    fn add_routes_dotted_detail_to_birthday() {
        session!(session);
        dispatch_line(&mut session, "add Mira 24.03.1990").unwrap();
        assert!(session.contacts.get("Mira").unwrap().birthday().is_some());
    }

    #[test]
    fn add_with_bad_phone_is_a_validation_error() {
        session!(session);
        let err = dispatch_line(&mut session, "add Mira 12345").unwrap_err();
        assert!(matches!(err, CoreError::Validation(_)));
    }

    #[test]
    fn add_with_missing_args_is_a_shape_error() {
        session!(session);
        let err = dispatch_line(&mut session, "add Mira").unwrap_err();
        assert!(matches!(err, CoreError::Shape(_)));
    }

    #[test]
    fn change_updates_phone_at_index() {
        session!(session);
        dispatch_line(&mut session, "add Mira 0501234567").unwrap();

        let msg = expect_message(dispatch_line(&mut session, "change Mira 0507654321 0"));
        assert_eq!(msg, "Phone number updated successfully");
        assert_eq!(
            session.contacts.get("Mira").unwrap().phones()[0].as_str(),
            "0507654321"
        );
    }

    #[test]
    fn change_rejects_out_of_range_index() {
        session!(session);
        dispatch_line(&mut session, "add Mira 0501234567").unwrap();
        let err = dispatch_line(&mut session, "change Mira 0507654321 5").unwrap_err();
        assert!(matches!(err, CoreError::IndexOutOfRange { .. }));
    }

    #[test]
    fn change_unknown_name_is_not_found() {
        session!(session);
        let err = dispatch_line(&mut session, "change Mira 0507654321").unwrap_err();
        assert!(matches!(err, CoreError::NotFound(_)));
    }

    #[test]
    fn show_all_on_empty_book() {
        session!(session);
        let msg = expect_message(dispatch_line(&mut session, "show all"));
        assert_eq!(msg, "The phonebook is empty");
    }

    #[test]
    fn show_all_lists_contacts() {
        session!(session);
        dispatch_line(&mut session, "add Mira 0501234567").unwrap();
        dispatch_line(&mut session, "add Nils 0667654321").unwrap();

        let msg = expect_message(dispatch_line(&mut session, "show all"));
        assert!(msg.contains("Mira: phones: 0501234567"));
        assert!(msg.contains("Nils: phones: 0667654321"));
    }

    // ===========================================
    // notes
    // ===========================================

    #[test]
    fn note_with_embedded_hashtags_strips_them_from_text() {
        session!(session);
        let msg = expect_message(dispatch_line(&mut session, "note buy milk #shopping #home"));
        assert_eq!(msg, "Note added successfully");

        for tag in ["#shopping", "#home"] {
            let entry = session.notes.get(tag).unwrap();
            assert_eq!(entry.notes()[0].as_str(), "buy milk");
        }
    }

    #[test]
    fn untagged_note_prompts_and_defaults_to_untagged() {
        session!(session, &[""]);
        dispatch_line(&mut session, "note buy milk").unwrap();

        let entry = session.notes.get("#untagged").unwrap();
        assert_eq!(entry.notes()[0].as_str(), "buy milk");
    }

    #[test]
    fn untagged_note_uses_the_prompted_tag() {
        session!(session, &["#errands"]);
        dispatch_line(&mut session, "note buy milk").unwrap();

        let entry = session.notes.get("#errands").unwrap();
        assert_eq!(entry.notes()[0].as_str(), "buy milk");
    }

    #[test]
    fn hashtag_command_lists_notes() {
        session!(session);
        dispatch_line(&mut session, "note buy milk #shopping").unwrap();

        let msg = expect_message(dispatch_line(&mut session, "hashtag #shopping"));
        assert!(msg.starts_with("#shopping:"));
        assert!(msg.contains("buy milk"));
    }

    #[test]
    fn hashtag_accepts_bare_tag() {
        session!(session);
        dispatch_line(&mut session, "note buy milk #shopping").unwrap();
        let msg = expect_message(dispatch_line(&mut session, "hashtag shopping"));
        assert!(msg.contains("buy milk"));
    }

    #[test]
    fn modify_replaces_note_at_index() {
        session!(session);
        dispatch_line(&mut session, "note buy milk #shopping").unwrap();

        let msg = expect_message(dispatch_line(&mut session, "modify #shopping 0 buy oat milk"));
        assert_eq!(msg, "Note updated successfully");
        assert_eq!(
            session.notes.get("#shopping").unwrap().notes()[0].as_str(),
            "buy oat milk"
        );
    }

    #[test]
    fn modify_with_bad_index_is_out_of_range() {
        session!(session);
        dispatch_line(&mut session, "note buy milk #shopping").unwrap();
        let err = dispatch_line(&mut session, "modify #shopping 4 buy bread").unwrap_err();
        assert!(matches!(err, CoreError::IndexOutOfRange { .. }));
    }

    #[test]
    fn modify_with_non_numeric_index_is_a_shape_error() {
        session!(session);
        dispatch_line(&mut session, "note buy milk #shopping").unwrap();
        let err = dispatch_line(&mut session, "modify #shopping zero buy bread").unwrap_err();
        assert!(matches!(err, CoreError::Shape(_)));
    }

    // ===========================================
    // lookups & search
    // ===========================================

    #[test]
    fn phone_lists_numbers_for_name() {
        session!(session);
        dispatch_line(&mut session, "add Mira 0501234567").unwrap();
        let msg = expect_message(dispatch_line(&mut session, "phone Mira"));
        assert_eq!(msg, "Mira: 0501234567");
    }

    #[test]
    fn phone_for_unknown_name_is_not_found() {
        session!(session);
        let err = dispatch_line(&mut session, "phone Mira").unwrap_err();
        assert!(matches!(err, CoreError::NotFound(name) if name == "Mira"));
    }

    #[test]
    fn search_flag_folds_case() {
        session!(session);
        dispatch_line(&mut session, "add Mira 0501234567").unwrap();

        let msg = expect_message(dispatch_line(&mut session, "search mira x"));
        assert!(msg.contains("Mira"));

        let msg = expect_message(dispatch_line(&mut session, "search mira"));
        assert_eq!(msg, "No records found for that criteria");
    }

    #[test]
    fn delete_routes_by_leading_hash() {
        session!(session);
        dispatch_line(&mut session, "add Mira 0501234567").unwrap();
        dispatch_line(&mut session, "note buy milk #shopping").unwrap();

        let msg = expect_message(dispatch_line(&mut session, "delete Mira"));
        assert!(msg.contains("addressbook"));
        let msg = expect_message(dispatch_line(&mut session, "delete #shopping"));
        assert!(msg.contains("notebook"));

        assert!(session.contacts.is_empty());
        assert!(session.notes.is_empty());
    }

    // ===========================================
    // paging
    // ===========================================

    #[test]
    fn page_defaults_to_three_per_page() {
        session!(session);
        for name in ["Ada", "Ben", "Cleo", "Dan"] {
            dispatch_line(&mut session, &format!("add {name} 0501234567")).unwrap();
        }

        let msg = expect_message(dispatch_line(&mut session, "page"));
        assert!(msg.contains("Ada"));
        assert!(msg.contains("Cleo"));
        assert!(!msg.contains("Dan"));
        assert!(msg.ends_with("Page 1/2"));
    }

    #[test]
    fn page_past_the_end_is_rejected() {
        session!(session);
        dispatch_line(&mut session, "add Ada 0501234567").unwrap();
        let err = dispatch_line(&mut session, "page 5").unwrap_err();
        assert!(matches!(err, CoreError::Shape(_)));
    }

    #[test]
    fn page_with_non_numeric_argument_is_a_shape_error() {
        session!(session);
        dispatch_line(&mut session, "add Ada 0501234567").unwrap();
        let err = dispatch_line(&mut session, "page one").unwrap_err();
        assert!(matches!(err, CoreError::Shape(_)));
    }

    #[test]
    fn notes_pages_show_one_hashtag_per_page() {
        session!(session);
        dispatch_line(&mut session, "note buy milk #shopping").unwrap();
        dispatch_line(&mut session, "note fix door #home").unwrap();

        let msg = expect_message(dispatch_line(&mut session, "notes"));
        assert!(msg.contains("#shopping:"));
        assert!(!msg.contains("#home:"));
        assert!(msg.ends_with("Page 1/2"));

        let msg = expect_message(dispatch_line(&mut session, "notes 2"));
        assert!(msg.contains("#home:"));
    }

    // ===========================================
    // birthdays
    // ===========================================

    #[test]
    fn birthday_without_one_set() {
        session!(session);
        dispatch_line(&mut session, "add Mira 0501234567").unwrap();
        let msg = expect_message(dispatch_line(&mut session, "birthday Mira"));
        assert_eq!(msg, "No birthday found for that name");
    }

    #[test]
    fn birthdays_with_none_upcoming() {
        session!(session);
        let msg = expect_message(dispatch_line(&mut session, "birthdays"));
        assert_eq!(msg, "No upcoming birthdays in the next few days.");
    }

    #[test]
    fn birthdays_rejects_non_numeric_days() {
        session!(session);
        let err = dispatch_line(&mut session, "birthdays soon").unwrap_err();
        assert!(matches!(err, CoreError::Shape(_)));
    }

    // ===========================================
    // misc
    // ===========================================

    #[test]
    fn hello_and_unknown() {
        session!(session);
        let msg = expect_message(dispatch_line(&mut session, "hello"));
        assert_eq!(msg, "How can I help you?");

        let msg = expect_message(dispatch_line(&mut session, ""));
        assert_eq!(msg, "Enter a new command");
    }

    #[test]
    fn exit_quits() {
        session!(session);
        assert_eq!(dispatch_line(&mut session, "exit").unwrap(), Outcome::Quit);
        assert_eq!(dispatch_line(&mut session, "close").unwrap(), Outcome::Quit);
    }

    #[test]
    fn sort_delegates_to_the_collaborator() {
        session!(session);
        let msg = expect_message(dispatch_line(&mut session, "sort /tmp/things"));
        assert_eq!(msg, "sorted /tmp/things");
    }

    #[test]
    fn find_without_flag_is_exact() {
        session!(session);
        dispatch_line(&mut session, "add Mira 0501234567").unwrap();

        let msg = expect_message(dispatch_line(&mut session, "find Mira"));
        assert!(msg.starts_with("Mira:"));

        let err = dispatch_line(&mut session, "find mira").unwrap_err();
        assert!(matches!(err, CoreError::NotFound(_)));
    }

    #[test]
    fn find_with_flag_folds_case() {
        session!(session);
        dispatch_line(&mut session, "add Mira 0501234567").unwrap();
        let msg = expect_message(dispatch_line(&mut session, "find mira x"));
        assert!(msg.starts_with("Mira:"));
    }
}
