//! # API Facade
//!
//! [`AssistantApi`] is the single entry point for every address-book and
//! organizer operation. It owns the loaded [`AddressBook`] and its
//! [`BookStore`], dispatches to the command layer and persists the whole book
//! after each command that reports affected records.
//!
//! The API does no I/O of its own beyond the store: no stdout, no prompts.
//! Results come back as [`CmdResult`]s for the UI to render.
//!
//! ## Generic Over BookStore
//!
//! - Production: `AssistantApi<FileStore>`
//! - Testing: `AssistantApi<InMemoryStore>`

use crate::book::AddressBook;
use crate::commands::{self, CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::BookStore;
use chrono::{Local, NaiveDate};
use log::{debug, info, warn};
use std::path::Path;

pub use crate::commands::contact::EditField;
pub use crate::commands::MessageLevel;

pub struct AssistantApi<S: BookStore> {
    store: S,
    book: AddressBook,
    page_size: usize,
}

impl<S: BookStore> AssistantApi<S> {
    /// Opens the book held by `store`.
    ///
    /// Loading never fails: a missing file starts an empty book, and an
    /// unreadable or corrupt one starts an empty book with a warning. The
    /// returned result carries those messages.
    pub fn open(store: S) -> (Self, CmdResult) {
        let mut result = CmdResult::default();
        if let Some(path) = store.location() {
            debug!("opening address book at {}", path.display());
        }
        let book = match store.load() {
            Ok(Some(book)) => {
                info!("address book loaded with {} contacts", book.len());
                book
            }
            Ok(None) => {
                result.add_message(CmdMessage::info("File not found, starting with an empty address book"));
                AddressBook::new()
            }
            Err(e) => {
                warn!("could not load address book: {}", e);
                result.add_message(CmdMessage::warning(format!(
                    "Error when loading data from a file: {}",
                    e
                )));
                AddressBook::new()
            }
        };
        let api = Self {
            store,
            book,
            page_size: 10,
        };
        (api, result)
    }

    pub fn with_page_size(mut self, page_size: usize) -> Self {
        self.page_size = page_size.max(1);
        self
    }

    pub fn book(&self) -> &AddressBook {
        &self.book
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Saves the book when the command changed it.
    fn persist(&mut self, result: CmdResult) -> Result<CmdResult> {
        if result.is_mutation() {
            self.store.save(&self.book)?;
        }
        Ok(result)
    }

    pub fn add_contact(&mut self, name: &str, phone: Option<&str>) -> Result<CmdResult> {
        let result = commands::contact::add(&mut self.book, name, phone)?;
        self.persist(result)
    }

    pub fn add_phone(&mut self, name: &str, phone: &str) -> Result<CmdResult> {
        let result = commands::phone::add_phone(&mut self.book, name, phone)?;
        self.persist(result)
    }

    pub fn change_phone(&mut self, name: &str, phone: &str) -> Result<CmdResult> {
        let result = commands::phone::change(&mut self.book, name, phone)?;
        self.persist(result)
    }

    pub fn edit_phone(&mut self, name: &str, old: &str, new: &str) -> Result<CmdResult> {
        let result = commands::phone::edit_phone(&mut self.book, name, old, new)?;
        self.persist(result)
    }

    pub fn remove_phone(&mut self, name: &str, phone: &str) -> Result<CmdResult> {
        let result = commands::phone::remove_phone(&mut self.book, name, phone)?;
        self.persist(result)
    }

    pub fn phone(&self, name: &str) -> Result<CmdResult> {
        commands::phone::phone(&self.book, name)
    }

    pub fn add_email(&mut self, name: &str, email: &str) -> Result<CmdResult> {
        let result = commands::details::add_email(&mut self.book, name, email)?;
        self.persist(result)
    }

    pub fn add_address(&mut self, name: &str, address: &str) -> Result<CmdResult> {
        let result = commands::details::add_address(&mut self.book, name, address)?;
        self.persist(result)
    }

    pub fn add_birthday(&mut self, name: &str, birthday: &str) -> Result<CmdResult> {
        let result = commands::details::add_birthday(&mut self.book, name, birthday)?;
        self.persist(result)
    }

    pub fn edit_contact(&mut self, name: &str, field: EditField, values: &[String]) -> Result<CmdResult> {
        let result = commands::contact::edit(&mut self.book, name, field, values)?;
        self.persist(result)
    }

    pub fn delete_contact(&mut self, name: &str) -> Result<CmdResult> {
        let result = commands::contact::delete(&mut self.book, name)?;
        self.persist(result)
    }

    pub fn info(&self, name: &str) -> Result<CmdResult> {
        commands::contact::info(&self.book, name)
    }

    pub fn search(&self, query: &str) -> Result<CmdResult> {
        commands::search::run(&self.book, query)
    }

    pub fn show_all(&self) -> Result<CmdResult> {
        commands::list::run(&self.book, self.page_size)
    }

    pub fn upcoming_birthdays(&self, days: i64) -> Result<CmdResult> {
        self.upcoming_birthdays_from(days, Local::now().date_naive())
    }

    pub fn upcoming_birthdays_from(&self, days: i64, today: NaiveDate) -> Result<CmdResult> {
        commands::birthdays::run(&self.book, days, today)
    }

    pub fn set_note<W: AsRef<str>>(&mut self, name: &str, words: &[W]) -> Result<CmdResult> {
        let result = commands::notes::set_note(&mut self.book, name, words)?;
        self.persist(result)
    }

    pub fn add_tag(&mut self, name: &str, tag: &str) -> Result<CmdResult> {
        let result = commands::notes::add_tag(&mut self.book, name, tag)?;
        self.persist(result)
    }

    pub fn remove_tag(&mut self, name: &str, tag: &str) -> Result<CmdResult> {
        let result = commands::notes::remove_tag(&mut self.book, name, tag)?;
        self.persist(result)
    }

    pub fn tagged(&self, tag: &str) -> Result<CmdResult> {
        commands::notes::tagged(&self.book, tag)
    }

    pub fn clean_folder(&self, root: &Path) -> Result<CmdResult> {
        commands::clean::run(root)
    }
}
