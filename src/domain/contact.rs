//! Contact record aggregating validated fields.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::{Birthday, Email, Name, Phone};

/// A contact: one name, ordered phones and emails, optional birthday.
///
/// The name is the contact's identity within an address book and is fixed at
/// construction. Phones and emails keep insertion order, and duplicates are
/// allowed. Index-addressed edits refer to that insertion order.
#[derive(Clone, PartialEq, Serialize, Deserialize)]
pub struct Contact {
    name: Name,
    #[serde(default)]
    phones: Vec<Phone>,
    #[serde(default)]
    emails: Vec<Email>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    birthday: Option<Birthday>,
}

impl Contact {
    /// Creates a contact with no details yet.
    pub fn new(name: Name) -> Self {
        Self {
            name,
            phones: Vec::new(),
            emails: Vec::new(),
            birthday: None,
        }
    }

    /// The contact's name.
    pub fn name(&self) -> &Name {
        &self.name
    }

    /// Phones in insertion order.
    pub fn phones(&self) -> &[Phone] {
        &self.phones
    }

    /// Emails in insertion order.
    pub fn emails(&self) -> &[Email] {
        &self.emails
    }

    /// The birthday, if one has been set.
    pub fn birthday(&self) -> Option<&Birthday> {
        self.birthday.as_ref()
    }

    /// Appends a phone. Duplicates are allowed.
    pub fn add_phone(&mut self, phone: Phone) {
        self.phones.push(phone);
    }

    /// Appends an email. Duplicates are allowed.
    pub fn add_email(&mut self, email: Email) {
        self.emails.push(email);
    }

    /// Sets or overwrites the single birthday slot.
    pub fn set_birthday(&mut self, birthday: Birthday) {
        self.birthday = Some(birthday);
    }

    /// The phone at `index`, if any.
    pub fn phone_at(&self, index: usize) -> Option<&Phone> {
        self.phones.get(index)
    }

    /// Replaces the first phone whose value equals `old`.
    ///
    /// Returns `false` (leaving the record untouched) when nothing matches.
    pub fn edit_phone(&mut self, old: &str, new: Phone) -> bool {
        match self.phones.iter_mut().find(|p| p.as_str() == old) {
            Some(slot) => {
                *slot = new;
                true
            }
            None => false,
        }
    }

    /// Replaces the first email whose value equals `old`.
    ///
    /// Returns `false` (leaving the record untouched) when nothing matches.
    pub fn edit_email(&mut self, old: &str, new: Email) -> bool {
        match self.emails.iter_mut().find(|e| e.as_str() == old) {
            Some(slot) => {
                *slot = new;
                true
            }
            None => false,
        }
    }

    /// Days from `today` until the next birthday, or `None` when unset.
    pub fn days_to_birthday(&self, today: NaiveDate) -> Option<i64> {
        self.birthday.map(|b| b.days_until_next(today))
    }
}

impl fmt::Display for Contact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:", self.name)?;
        if !self.phones.is_empty() {
            let phones: Vec<&str> = self.phones.iter().map(Phone::as_str).collect();
            write!(f, " phones: {}", phones.join(", "))?;
        }
        if !self.emails.is_empty() {
            let emails: Vec<&str> = self.emails.iter().map(Email::as_str).collect();
            write!(f, " emails: {}", emails.join(", "))?;
        }
        if let Some(birthday) = &self.birthday {
            write!(f, " birthday: {birthday}")?;
        }
        Ok(())
    }
}

impl fmt::Debug for Contact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Contact")
            .field("name", &self.name)
            .field("phones", &self.phones)
            .field("emails", &self.emails)
            .field("birthday", &self.birthday)
            .finish()
    }
}
