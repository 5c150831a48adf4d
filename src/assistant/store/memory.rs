use super::BookStore;
use crate::book::AddressBook;
use crate::error::Result;

/// In-memory storage for testing.
/// Does NOT persist data beyond the value's lifetime.
#[derive(Default)]
pub struct InMemoryStore {
    saved: Option<AddressBook>,
    saves: usize,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store that already holds `book`, as if saved by an earlier session.
    pub fn with_book(book: AddressBook) -> Self {
        Self {
            saved: Some(book),
            saves: 0,
        }
    }

    pub fn saved(&self) -> Option<&AddressBook> {
        self.saved.as_ref()
    }

    /// How many times `save` has been called.
    pub fn save_count(&self) -> usize {
        self.saves
    }
}

impl BookStore for InMemoryStore {
    fn load(&self) -> Result<Option<AddressBook>> {
        Ok(self.saved.clone())
    }

    fn save(&mut self, book: &AddressBook) -> Result<()> {
        self.saved = Some(book.clone());
        self.saves += 1;
        Ok(())
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use crate::model::Record;

    pub struct StoreFixture {
        pub book: AddressBook,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        pub fn new() -> Self {
            Self {
                book: AddressBook::new(),
            }
        }

        pub fn with_contact(mut self, name: &str, phones: &[&str]) -> Self {
            let mut record = Record::named(name).unwrap();
            for phone in phones {
                record.add_phone(phone).unwrap();
            }
            self.book.add_record(record);
            self
        }

        pub fn with_birthday(mut self, name: &str, birthday: &str) -> Self {
            let mut record = Record::named(name).unwrap();
            record.set_birthday(birthday).unwrap();
            self.book.add_record(record);
            self
        }

        pub fn with_note(mut self, name: &str, text: &str, tags: &[&str]) -> Self {
            let mut record = Record::named(name).unwrap();
            record
                .set_note(text, tags.iter().map(|t| t.to_string()).collect())
                .unwrap();
            self.book.add_record(record);
            self
        }

        pub fn into_store(self) -> InMemoryStore {
            InMemoryStore::with_book(self.book)
        }
    }
}
