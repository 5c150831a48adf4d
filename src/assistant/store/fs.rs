use super::BookStore;
use crate::book::AddressBook;
use crate::error::{AssistantError, Result};
use log::debug;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

pub const DEFAULT_BOOK_FILE: &str = "address_book.json";

pub struct FileStore {
    root: PathBuf,
    file_name: String,
}

impl FileStore {
    pub fn new(root: PathBuf) -> Self {
        Self {
            root,
            file_name: DEFAULT_BOOK_FILE.to_string(),
        }
    }

    pub fn with_file_name(mut self, file_name: &str) -> Self {
        self.file_name = file_name.to_string();
        self
    }

    pub fn path(&self) -> PathBuf {
        self.root.join(&self.file_name)
    }

    fn ensure_dir(&self, path: &Path) -> Result<()> {
        if !path.exists() {
            fs::create_dir_all(path).map_err(AssistantError::Io)?;
        }
        Ok(())
    }
}

impl BookStore for FileStore {
    fn load(&self) -> Result<Option<AddressBook>> {
        let path = self.path();
        let content = match fs::read_to_string(&path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(AssistantError::Io(e)),
        };
        let book: AddressBook =
            serde_json::from_str(&content).map_err(AssistantError::Serialization)?;
        debug!("loaded {} contacts from {}", book.len(), path.display());
        Ok(Some(book))
    }

    fn save(&mut self, book: &AddressBook) -> Result<()> {
        self.ensure_dir(&self.root)?;
        let path = self.path();
        let content = serde_json::to_string_pretty(book).map_err(AssistantError::Serialization)?;
        fs::write(&path, content).map_err(AssistantError::Io)?;
        debug!("saved {} contacts to {}", book.len(), path.display());
        Ok(())
    }

    fn location(&self) -> Option<PathBuf> {
        Some(self.path())
    }
}
