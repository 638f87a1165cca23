//! Help text and the fuzzy lookup mined from it.
//!
//! The help text doubles as the vocabulary the correction mode searches, so
//! every recognizable command must appear on a line of its own here.

/// Tokens shorter than this are too noisy to match help lines against.
const MIN_MATCH_LEN: usize = 3;

const HELP: &str = "\
hello - greet the assistant
help - show this command list
add name 0*********/example@email.com/dd.mm.yyyy - add a phone/email/birthday to a contact
note note_#hashtag_note - create a note with the specified hashtag (can be given now or later)
change name new_phone index - change the phone number at the specified index (default: the first one)
modify hashtag index new_note - modify the note with the specified hashtag and index
search criteria flag - search for criteria among names, phones, and emails (flag folds case)
find name flag - show one contact by name (flag folds case)
show all - show all contacts
show notes - show all notes
phone name - show all phone numbers for the specified name
email name - show all emails for the specified name
hashtag hashtag - display all notes for the specified hashtag
birthday name - show the birthday date with the number of days remaining
birthdays days - list contacts whose birthday is within the given number of days (default 7)
page page_number contacts_per_page - show contacts divided into pages, default page 1 with 3 contacts
notes page_number hashtags_per_page - show notes divided into pages, default page 1 with one hashtag
delete name/#hashtag - remove a contact or a hashtag with its notes
sort folder - sort the files of a folder into per-extension subdirectories
exit/good bye/close - save and end the program";

/// The full help text, one command per line.
pub fn help_text() -> &'static str {
    HELP
}

/// Help lines related to a mistyped input line.
///
/// Matches the first whitespace token against the help text; when that finds
/// nothing, falls back to the second token. Tokens shorter than three
/// characters never match. Returns an empty string when nothing is related.
pub fn matching_help_lines(input: &str) -> String {
    let mut words = input.split_whitespace();
    let first = words.next();
    let second = words.next();

    let mut lines = match first {
        Some(word) => lines_containing(word),
        None => Vec::new(),
    };
    if lines.is_empty() {
        if let Some(word) = second {
            lines = lines_containing(word);
        }
    }

    if lines.is_empty() {
        return String::new();
    }

    let mut out = String::from("Commands in this context:");
    for line in lines {
        out.push('\n');
        out.push_str(line);
    }
    out
}

fn lines_containing(word: &str) -> Vec<&'static str> {
    if word.chars().count() < MIN_MATCH_LEN {
        return Vec::new();
    }
    let word = word.to_lowercase();
    HELP.lines()
        .filter(|line| line.to_lowercase().contains(&word))
        .collect()
}
