//! # Command Layer
//!
//! One module per family of commands. Each command is a plain function taking
//! the [`AddressBook`](crate::book::AddressBook) and typed arguments and
//! returning a [`CmdResult`]. Commands never print and never persist: the API
//! facade saves the book whenever a result reports affected records.
//!
//! A missing contact is not an error here. It comes back as a warning message
//! (`Contact <name> not found`), and the book is left alone. Validation
//! failures are errors and propagate as [`AssistantError`](crate::error::AssistantError).

use crate::model::Record;
use crate::organizer::OrganizeReport;

pub mod birthdays;
pub mod clean;
pub mod contact;
pub mod details;
pub mod list;
pub mod notes;
pub mod phone;
pub mod search;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    /// Records created, changed or removed by the command. Non-empty means
    /// the book must be persisted.
    pub affected_records: Vec<Record>,
    /// Records to display, already split into pages.
    pub pages: Vec<Vec<Record>>,
    pub report: Option<OrganizeReport>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_message(mut self, message: CmdMessage) -> Self {
        self.messages.push(message);
        self
    }

    pub fn with_affected_record(mut self, record: Record) -> Self {
        self.affected_records.push(record);
        self
    }

    /// Lists `records` as a single page. An empty list adds no page.
    pub fn with_records(mut self, records: Vec<Record>) -> Self {
        if !records.is_empty() {
            self.pages.push(records);
        }
        self
    }

    pub fn with_pages(mut self, pages: Vec<Vec<Record>>) -> Self {
        self.pages = pages;
        self
    }

    pub fn with_report(mut self, report: OrganizeReport) -> Self {
        self.report = Some(report);
        self
    }

    /// Every listed record, across pages.
    pub fn listed_records(&self) -> impl Iterator<Item = &Record> {
        self.pages.iter().flatten()
    }

    pub fn is_mutation(&self) -> bool {
        !self.affected_records.is_empty()
    }
}

/// The standard answer for commands addressed to a contact that does not exist.
pub fn not_found(name: &str) -> CmdResult {
    CmdResult::default().with_message(CmdMessage::warning(format!("Contact {} not found", name)))
}

/// Clones borrowed book records into owned values for a [`CmdResult`].
pub(crate) fn owned(records: Vec<&Record>) -> Vec<Record> {
    records.into_iter().cloned().collect()
}
