//! # Address Book
//!
//! [`AddressBook`] is the in-memory collection of [`Record`]s keyed by contact
//! name. It owns every query the assistant runs against contacts: lookup,
//! substring search, birthday windows and note-tag filtering.
//!
//! The book itself knows nothing about persistence; that lives behind the
//! [`BookStore`](crate::store::BookStore) trait. Keys are kept in a `BTreeMap`
//! so listings come out in a stable, name-sorted order.

use crate::error::{AssistantError, Result};
use crate::fields::Name;
use crate::model::Record;
use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AddressBook {
    records: BTreeMap<String, Record>,
}

/// A set of changes applied by [`AddressBook::edit_contact`]. Fields left as
/// `None` are not touched.
#[derive(Debug, Clone, Default)]
pub struct ContactEdit {
    pub name: Option<String>,
    pub phones: Option<Vec<String>>,
    pub email: Option<String>,
    pub address: Option<String>,
    pub birthday: Option<String>,
}

impl AddressBook {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Inserts `record`, replacing any record with the same name.
    pub fn add_record(&mut self, record: Record) {
        self.records
            .insert(record.name.value().to_string(), record);
    }

    pub fn find(&self, name: &str) -> Option<&Record> {
        self.records.get(name)
    }

    pub fn find_mut(&mut self, name: &str) -> Option<&mut Record> {
        self.records.get_mut(name)
    }

    /// Removes a contact and describes the outcome.
    pub fn delete(&mut self, name: &str) -> DeleteOutcome {
        match self.records.remove(name) {
            Some(record) => DeleteOutcome::Deleted(record),
            None => DeleteOutcome::NotFound,
        }
    }

    /// Walks the book `size` records at a time. A size of zero is treated as one.
    pub fn chunks(&self, size: usize) -> Chunks<'_> {
        Chunks {
            records: self.records.values().collect(),
            size: size.max(1),
            position: 0,
        }
    }

    /// Contacts matching `query` by phone, name, email, address or note tag.
    ///
    /// Phone, email and address use plain substring matching. The name match
    /// ignores case. For tags, every whitespace-separated word of the query is
    /// compared against the note's tags. Each record appears at most once.
    pub fn search(&self, query: &str) -> Vec<&Record> {
        let query_lower = query.to_lowercase();
        let words: Vec<&str> = query.split_whitespace().collect();

        self.records
            .values()
            .filter(|record| {
                record.phones.iter().any(|p| p.value().contains(query))
                    || record.name.value().to_lowercase().contains(&query_lower)
                    || record
                        .email
                        .as_ref()
                        .is_some_and(|e| e.value().contains(query))
                    || record
                        .address
                        .as_ref()
                        .is_some_and(|a| a.value().contains(query))
                    || words.iter().any(|word| record.has_tag(word))
            })
            .collect()
    }

    /// Contacts whose next birthday is between 1 and `days` days from today.
    pub fn upcoming_birthdays(&self, days: i64) -> Vec<&Record> {
        self.upcoming_birthdays_from(days, Local::now().date_naive())
    }

    /// Same as [`upcoming_birthdays`](Self::upcoming_birthdays) against a fixed `today`.
    /// A birthday falling on `today` itself is not upcoming.
    pub fn upcoming_birthdays_from(&self, days: i64, today: NaiveDate) -> Vec<&Record> {
        self.records
            .values()
            .filter(|record| {
                record
                    .days_to_birthday(today)
                    .is_some_and(|left| left > 0 && left <= days)
            })
            .collect()
    }

    pub fn search_notes_by_tag(&self, tag: &str) -> Vec<&Record> {
        self.records.values().filter(|r| r.has_tag(tag)).collect()
    }

    /// Records tagged with `tag`, ordered by where the tag sits in each note's
    /// tag list. Ties keep name order.
    pub fn sort_notes_by_tag(&self, tag: &str) -> Vec<&Record> {
        let mut tagged = self.search_notes_by_tag(tag);
        tagged.sort_by_key(|r| {
            r.note
                .as_ref()
                .and_then(|n| n.tag_position(tag))
                .unwrap_or(usize::MAX)
        });
        tagged
    }

    /// Applies `edit` to the contact called `name`.
    ///
    /// All values are validated before anything is written, so a failed edit
    /// leaves the book unchanged. Renaming re-keys the entry; renaming onto an
    /// existing contact is refused.
    pub fn edit_contact(&mut self, name: &str, edit: ContactEdit) -> Result<&Record> {
        let mut record = self
            .find(name)
            .cloned()
            .ok_or_else(|| AssistantError::ContactNotFound(name.to_string()))?;

        if let Some(phones) = &edit.phones {
            record.set_phones(phones)?;
        }
        if let Some(email) = &edit.email {
            record.set_email(email)?;
        }
        if let Some(address) = &edit.address {
            record.set_address(address)?;
        }
        if let Some(birthday) = &edit.birthday {
            record.set_birthday(birthday)?;
        }
        if let Some(new_name) = &edit.name {
            let new_name = Name::new(new_name.as_str())?;
            if new_name.value() != name && self.records.contains_key(new_name.value()) {
                return Err(AssistantError::ContactExists(new_name.to_string()));
            }
            record.name = new_name;
        }

        self.records.remove(name);
        let key = record.name.value().to_string();
        Ok(&*self.records.entry(key).or_insert(record))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeleteOutcome {
    Deleted(Record),
    NotFound,
}

/// Iterator over an [`AddressBook`] in fixed-size pages.
pub struct Chunks<'a> {
    records: Vec<&'a Record>,
    size: usize,
    position: usize,
}

impl<'a> Iterator for Chunks<'a> {
    type Item = Vec<&'a Record>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.position >= self.records.len() {
            return None;
        }
        let end = (self.position + self.size).min(self.records.len());
        let chunk = self.records[self.position..end].to_vec();
        self.position = end;
        Some(chunk)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(name: &str) -> Record {
        Record::named(name).unwrap()
    }

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    fn with_birthday(name: &str, birthday: &str) -> Record {
        let mut r = record(name);
        r.set_birthday(birthday).unwrap();
        r
    }

    #[test]
    fn test_add_then_find() {
        let mut book = AddressBook::new();
        book.add_record(record("John"));
        assert_eq!(book.find("John").unwrap().name.value(), "John");
        assert!(book.find("Jane").is_none());
    }

    #[test]
    fn test_add_overwrites_same_name() {
        let mut book = AddressBook::new();
        let mut first = record("John");
        first.add_phone("1234567890").unwrap();
        book.add_record(first);
        book.add_record(record("John"));

        assert_eq!(book.len(), 1);
        assert!(book.find("John").unwrap().phones.is_empty());
    }

    #[test]
    fn test_delete_absent_leaves_book_unchanged() {
        let mut book = AddressBook::new();
        book.add_record(record("John"));
        let before = book.clone();

        assert_eq!(book.delete("Jane"), DeleteOutcome::NotFound);
        assert_eq!(book, before);

        assert!(matches!(book.delete("John"), DeleteOutcome::Deleted(_)));
        assert!(book.is_empty());
    }

    #[test]
    fn test_search_by_name_is_case_insensitive() {
        let mut book = AddressBook::new();
        book.add_record(record("John"));

        let found = book.search("john");
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].name.value(), "John");
        assert!(book.search("nomatch").is_empty());
    }

    #[test]
    fn test_search_by_phone_email_address_and_tag() {
        let mut book = AddressBook::new();
        let mut a = record("Alice");
        a.add_phone("0501112233").unwrap();
        let mut b = record("Bob");
        b.set_email("bob@mail.com").unwrap();
        let mut c = record("Carol");
        c.set_address("Lviv, Main st").unwrap();
        let mut d = record("Dave");
        d.set_note("plays chess", vec!["chess".into()]).unwrap();
        for r in [a, b, c, d] {
            book.add_record(r);
        }

        let names = |rs: Vec<&Record>| -> Vec<String> {
            rs.iter().map(|r| r.name.value().to_string()).collect()
        };
        assert_eq!(names(book.search("111")), ["Alice"]);
        assert_eq!(names(book.search("mail.com")), ["Bob"]);
        assert_eq!(names(book.search("Main")), ["Carol"]);
        assert_eq!(names(book.search("go chess")), ["Dave"]);
    }

    #[test]
    fn test_search_deduplicates() {
        let mut book = AddressBook::new();
        let mut r = record("anna");
        r.set_email("anna@x.com").unwrap();
        r.set_note("n", vec!["anna".into()]).unwrap();
        book.add_record(r);

        assert_eq!(book.search("anna").len(), 1);
    }

    #[test]
    fn test_upcoming_birthdays_window() {
        let mut book = AddressBook::new();
        book.add_record(with_birthday("Today", "1990-06-10"));
        book.add_record(with_birthday("Tomorrow", "1985-06-11"));
        book.add_record(with_birthday("Week", "2000-06-17"));
        book.add_record(with_birthday("Later", "2000-06-18"));
        book.add_record(with_birthday("Past", "2000-06-01"));
        book.add_record(record("NoBirthday"));

        let today = date("2024-06-10");
        let names: Vec<&str> = book
            .upcoming_birthdays_from(7, today)
            .iter()
            .map(|r| r.name.value())
            .collect();
        assert_eq!(names, ["Tomorrow", "Week"]);

        for r in book.upcoming_birthdays_from(30, today) {
            let left = r.days_to_birthday(today).unwrap();
            assert!(left > 0 && left <= 30);
        }
    }

    #[test]
    fn test_upcoming_birthdays_across_new_year() {
        let mut book = AddressBook::new();
        book.add_record(with_birthday("Jan", "1999-01-03"));
        let found = book.upcoming_birthdays_from(5, date("2023-12-30"));
        assert_eq!(found.len(), 1);
    }

    #[test]
    fn test_upcoming_birthdays_zero_days_is_empty() {
        let mut book = AddressBook::new();
        book.add_record(with_birthday("Today", "1990-06-10"));
        assert!(book.upcoming_birthdays_from(0, date("2024-06-10")).is_empty());
    }

    #[test]
    fn test_chunks() {
        let mut book = AddressBook::new();
        for name in ["a", "b", "c", "d", "e"] {
            book.add_record(record(name));
        }
        let sizes: Vec<usize> = book.chunks(2).map(|c| c.len()).collect();
        assert_eq!(sizes, [2, 2, 1]);
        assert_eq!(book.chunks(0).count(), 5);
        assert_eq!(AddressBook::new().chunks(3).count(), 0);
    }

    #[test]
    fn test_sort_notes_by_tag() {
        let mut book = AddressBook::new();
        let mut a = record("a");
        a.set_note("x", vec!["home".into(), "work".into()]).unwrap();
        let mut b = record("b");
        b.set_note("y", vec!["work".into()]).unwrap();
        let mut c = record("c");
        c.set_note("z", vec!["home".into()]).unwrap();
        for r in [a, b, c] {
            book.add_record(r);
        }

        let names: Vec<&str> = book
            .sort_notes_by_tag("work")
            .iter()
            .map(|r| r.name.value())
            .collect();
        assert_eq!(names, ["b", "a"]);
        assert_eq!(book.search_notes_by_tag("home").len(), 2);
    }

    #[test]
    fn test_edit_contact_rename_rekeys() {
        let mut book = AddressBook::new();
        book.add_record(record("John"));
        let edit = ContactEdit {
            name: Some("Johnny".into()),
            email: Some("j@x.com".into()),
            ..Default::default()
        };
        book.edit_contact("John", edit).unwrap();

        assert!(book.find("John").is_none());
        let renamed = book.find("Johnny").unwrap();
        assert_eq!(renamed.email.as_ref().unwrap().value(), "j@x.com");
    }

    #[test]
    fn test_edit_contact_invalid_leaves_record() {
        let mut book = AddressBook::new();
        book.add_record(record("John"));
        let edit = ContactEdit {
            email: Some("j@x.com".into()),
            phones: Some(vec!["bad".into()]),
            ..Default::default()
        };
        assert!(book.edit_contact("John", edit).is_err());
        assert!(book.find("John").unwrap().email.is_none());
    }

    #[test]
    fn test_edit_contact_refuses_rename_collision() {
        let mut book = AddressBook::new();
        book.add_record(record("John"));
        book.add_record(record("Jane"));
        let edit = ContactEdit {
            name: Some("Jane".into()),
            ..Default::default()
        };
        assert!(book.edit_contact("John", edit).is_err());
        assert_eq!(book.len(), 2);
    }

    #[test]
    fn test_edit_missing_contact() {
        let mut book = AddressBook::new();
        let err = book.edit_contact("Ghost", ContactEdit::default()).unwrap_err();
        assert!(matches!(err, AssistantError::ContactNotFound(_)));
    }
}
