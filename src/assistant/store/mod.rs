//! # Storage Layer
//!
//! The [`BookStore`] trait decouples the address book from where it is kept.
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: production storage, the whole book as one JSON file
//!   (`address_book.json` by default) inside the assistant's home directory.
//! - [`memory::InMemoryStore`]: keeps the last saved book in memory, for tests.
//!
//! ## Storage Format
//!
//! ```text
//! <home>/
//! ├── address_book.json   # { "<name>": Record, ... }
//! ├── config.json         # AssistantConfig
//! └── logs/               # rotated log files
//! ```
//!
//! The book is always written whole. There is no locking: one assistant
//! process per home directory.

use crate::book::AddressBook;
use crate::error::Result;
use std::path::PathBuf;

pub mod fs;
pub mod memory;

pub trait BookStore {
    /// Reads the stored book. `Ok(None)` means nothing has been saved yet.
    fn load(&self) -> Result<Option<AddressBook>>;

    /// Replaces the stored book with `book`.
    fn save(&mut self, book: &AddressBook) -> Result<()>;

    /// Where the book lives, for file-based stores.
    fn location(&self) -> Option<PathBuf> {
        None
    }
}
