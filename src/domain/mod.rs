//! Core types: validated fields (Name, Phone, Email, Birthday, Hashtag) and
//! the records built from them (Contact, NoteEntry).

mod birthday;
mod contact;
mod email;
mod hashtag;
mod name;
mod note;
mod phone;

pub use birthday::Birthday;
pub use contact::Contact;
pub use email::Email;
pub use hashtag::{Hashtag, extract_hashtags, strip_hashtags};
pub use name::Name;
pub use note::{NoteEntry, NoteText};
pub use phone::Phone;
