//! Command resolution: tokenizing, registry lookup, and fuzzy recovery.
//!
//! Resolution splits an input line into a command word and arguments, looks
//! the word up case-insensitively, retries with a two-word command ("show
//! all"), and as a last resort enters correction mode: help lines related to
//! the typo are shown and the user may retype just the command portion.

mod help;

pub use help::{help_text, matching_help_lines};

use std::io;

use crate::ports::Console;

/// Every command the console understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Hello,
    Help,
    Add,
    Note,
    Change,
    ShowAll,
    ShowNotes,
    Phone,
    Email,
    Birthday,
    Birthdays,
    Search,
    Page,
    Notes,
    Modify,
    Find,
    Delete,
    Hashtag,
    Sort,
    Exit,
    /// Input that resolution gave up on.
    Unknown,
}

/// Command vocabulary. Two-word entries are reachable through the compound
/// lookup in [`resolve`].
const REGISTRY: &[(&str, Command)] = &[
    ("hello", Command::Hello),
    ("help", Command::Help),
    ("add", Command::Add),
    ("note", Command::Note),
    ("change", Command::Change),
    ("show all", Command::ShowAll),
    ("show notes", Command::ShowNotes),
    ("phone", Command::Phone),
    ("email", Command::Email),
    ("birthday", Command::Birthday),
    ("birthdays", Command::Birthdays),
    ("search", Command::Search),
    ("page", Command::Page),
    ("notes", Command::Notes),
    ("modify", Command::Modify),
    ("find", Command::Find),
    ("delete", Command::Delete),
    ("hashtag", Command::Hashtag),
    ("sort", Command::Sort),
    ("exit", Command::Exit),
    ("good bye", Command::Exit),
    ("close", Command::Exit),
];

fn lookup(name: &str) -> Option<Command> {
    let name = name.to_lowercase();
    REGISTRY
        .iter()
        .find(|(word, _)| *word == name)
        .map(|(_, command)| *command)
}

/// A resolved command with its shaped argument list.
#[derive(Debug, PartialEq)]
pub struct Resolved {
    pub command: Command,
    pub args: Vec<String>,
}

impl Resolved {
    fn unknown() -> Self {
        Self {
            command: Command::Unknown,
            args: Vec::new(),
        }
    }
}

/// Resolves one raw input line into a command and shaped arguments.
///
/// An empty line resolves straight to [`Command::Unknown`] without entering
/// correction mode. The console is only consulted when correction mode runs.
pub fn resolve(input: &str, console: &mut dyn Console) -> io::Result<Resolved> {
    let mut line = input.to_string();

    loop {
        let mut tokens = line.split_whitespace();
        let Some(primary) = tokens.next() else {
            return Ok(Resolved::unknown());
        };
        let rest: Vec<String> = tokens.map(str::to_string).collect();

        if let Some(command) = lookup(primary) {
            return Ok(shape(command, rest));
        }

        // Two-word commands: "show all", "show notes", "good bye".
        if let Some(second) = rest.first() {
            let compound = format!("{primary} {second}");
            if let Some(command) = lookup(&compound) {
                return Ok(shape(command, rest[1..].to_vec()));
            }
        }

        match correct(&line, console)? {
            Some(retyped) => line = retyped,
            None => return Ok(Resolved::unknown()),
        }
    }
}

/// Command-specific argument reshaping.
///
/// `note` takes everything after the command as one string; `modify` takes
/// two leading arguments and rejoins the rest as the new note text.
fn shape(command: Command, args: Vec<String>) -> Resolved {
    let args = match command {
        Command::Note => vec![args.join(" ")],
        Command::Modify if args.len() >= 2 => {
            let text = args[2..].join(" ");
            vec![args[0].clone(), args[1].clone(), text]
        }
        _ => args,
    };
    Resolved { command, args }
}

/// Correction mode: show related help lines, then offer to retype the
/// command word. Returns the repaired line, or `None` when the user gives up
/// (or input ends).
fn correct(line: &str, console: &mut dyn Console) -> io::Result<Option<String>> {
    loop {
        let hints = matching_help_lines(line);
        if !hints.is_empty() {
            console.write_line(&hints);
        }

        let answer =
            console.read_line("Unknown command. Do you want to change the command? \n(Yes/No): ")?;
        let Some(answer) = answer else {
            return Ok(None);
        };

        match answer.trim().to_lowercase().as_str() {
            "yes" => {
                let Some(retyped) = console.read_line("Repeat the command: ")? else {
                    return Ok(None);
                };
                // Swap only the command portion; trailing arguments survive.
                let rest: Vec<&str> = line.split_whitespace().skip(1).collect();
                let repaired = if rest.is_empty() {
                    retyped.trim().to_string()
                } else {
                    format!("{} {}", retyped.trim(), rest.join(" "))
                };
                console.write_line(&repaired);
                return Ok(Some(repaired));
            }
            "no" => return Ok(None),
            _ => console.write_line("Please enter \"Yes\" or \"No\"."),
        }
    }
}
