//! Persistence for the books.

mod store;

pub use store::{JsonStore, StoreError};
