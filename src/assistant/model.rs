use crate::error::{AssistantError, Result};
use crate::fields::{Address, Birthday, Email, FieldError, Name, Note, Phone};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// One contact and everything known about it.
///
/// The name is the record's key inside an [`AddressBook`](crate::book::AddressBook).
/// Every other field is optional, phones are kept in the order they were added.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    pub name: Name,
    #[serde(default)]
    pub phones: Vec<Phone>,
    #[serde(default)]
    pub email: Option<Email>,
    #[serde(default)]
    pub address: Option<Address>,
    #[serde(default)]
    pub birthday: Option<Birthday>,
    #[serde(default)]
    pub note: Option<Note>,
}

impl Record {
    pub fn new(name: Name) -> Self {
        Self {
            name,
            phones: Vec::new(),
            email: None,
            address: None,
            birthday: None,
            note: None,
        }
    }

    /// Builds a record from a raw name, validating it.
    pub fn named(name: &str) -> Result<Self> {
        Ok(Self::new(Name::new(name)?))
    }

    pub fn add_phone(&mut self, phone: &str) -> Result<()> {
        self.phones.push(Phone::new(phone)?);
        Ok(())
    }

    /// Replaces `old` with `new`. The new number is validated before the old
    /// one is looked up, so an invalid number never touches the record.
    pub fn edit_phone(&mut self, old: &str, new: &str) -> Result<()> {
        let new_phone = Phone::new(new)?;
        match self.phones.iter_mut().find(|p| p.value() == old) {
            Some(slot) => {
                *slot = new_phone;
                Ok(())
            }
            None => Err(AssistantError::PhoneNotFound(old.to_string())),
        }
    }

    pub fn find_phone(&self, phone: &str) -> Option<&Phone> {
        self.phones.iter().find(|p| p.value() == phone)
    }

    /// Removes every occurrence of `phone`. Returns whether anything was removed.
    pub fn remove_phone(&mut self, phone: &str) -> bool {
        let before = self.phones.len();
        self.phones.retain(|p| p.value() != phone);
        self.phones.len() != before
    }

    /// Replaces all phones with the given list. Either every number is valid
    /// and the list is swapped in, or the record is left as it was.
    pub fn set_phones<I, P>(&mut self, phones: I) -> Result<()>
    where
        I: IntoIterator<Item = P>,
        P: AsRef<str>,
    {
        let phones = phones
            .into_iter()
            .map(|p| Phone::new(p.as_ref()))
            .collect::<std::result::Result<Vec<_>, FieldError>>()?;
        self.phones = phones;
        Ok(())
    }

    pub fn set_email(&mut self, email: &str) -> Result<()> {
        self.email = Some(Email::new(email)?);
        Ok(())
    }

    pub fn set_address(&mut self, address: &str) -> Result<()> {
        self.address = Some(Address::new(address)?);
        Ok(())
    }

    pub fn set_birthday(&mut self, birthday: &str) -> Result<()> {
        self.birthday = Some(birthday.parse()?);
        Ok(())
    }

    /// Days until the next birthday, or `None` when no birthday is known.
    pub fn days_to_birthday(&self, today: NaiveDate) -> Option<i64> {
        self.birthday.map(|b| b.days_until(today))
    }

    pub fn set_note(&mut self, text: &str, tags: Vec<String>) -> Result<()> {
        self.note = Some(Note::new(text, tags)?);
        Ok(())
    }

    /// Tags the note. Records without a note are left untouched; the return
    /// value tells whether there was a note to tag.
    pub fn add_tag(&mut self, tag: &str) -> Result<bool> {
        match self.note.as_mut() {
            Some(note) => {
                note.add_tag(tag)?;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    pub fn remove_tag(&mut self, tag: &str) -> bool {
        match self.note.as_mut() {
            Some(note) => {
                note.remove_tag(tag);
                true
            }
            None => false,
        }
    }

    pub fn has_tag(&self, tag: &str) -> bool {
        self.note.as_ref().is_some_and(|n| n.has_tag(tag))
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let phones = self
            .phones
            .iter()
            .map(Phone::value)
            .collect::<Vec<_>>()
            .join("; ");
        write!(f, "Contact name: {}, phones: {}", self.name, phones)?;
        if let Some(email) = &self.email {
            write!(f, ", Email: {}", email)?;
        }
        if let Some(address) = &self.address {
            write!(f, ", Address: {}", address)?;
        }
        if let Some(birthday) = &self.birthday {
            write!(f, ", Birthday: {}", birthday)?;
        }
        if let Some(note) = &self.note {
            write!(f, ", {}", note)?;
        }
        Ok(())
    }
}
