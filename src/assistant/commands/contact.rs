use crate::book::{AddressBook, ContactEdit, DeleteOutcome};
use crate::commands::{not_found, CmdMessage, CmdResult};
use crate::error::{AssistantError, Result};
use crate::model::Record;

/// Adds a contact, optionally with a first phone number.
///
/// Adding a name that already exists keeps the existing record; a phone given
/// alongside is appended to it.
pub fn add(book: &mut AddressBook, name: &str, phone: Option<&str>) -> Result<CmdResult> {
    let mut result = CmdResult::default();

    let record = match book.find_mut(name) {
        Some(existing) => {
            result.add_message(CmdMessage::info(format!("Contact {} already exists", name)));
            match phone {
                Some(phone) => {
                    existing.add_phone(phone)?;
                    existing.clone()
                }
                None => return Ok(result),
            }
        }
        None => {
            let mut record = Record::named(name)?;
            if let Some(phone) = phone {
                record.add_phone(phone)?;
            }
            book.add_record(record.clone());
            result.add_message(CmdMessage::success(format!("Contact {} added", record.name)));
            record
        }
    };

    if let Some(phone) = phone {
        result.add_message(CmdMessage::success(format!(
            "Contact {} Add phone:{}",
            record.name, phone
        )));
    }
    Ok(result.with_affected_record(record))
}

pub fn delete(book: &mut AddressBook, name: &str) -> Result<CmdResult> {
    match book.delete(name) {
        DeleteOutcome::Deleted(record) => Ok(CmdResult::default()
            .with_message(CmdMessage::success(format!("Contact {} deleted", name)))
            .with_affected_record(record)),
        DeleteOutcome::NotFound => Ok(not_found(name)),
    }
}

pub fn info(book: &AddressBook, name: &str) -> Result<CmdResult> {
    match book.find(name) {
        Some(record) => Ok(CmdResult::default().with_records(vec![record.clone()])),
        None => Ok(not_found(name)),
    }
}

/// The fields `edit` knows how to change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditField {
    Name,
    Phones,
    Email,
    Address,
    Birthday,
}

impl std::str::FromStr for EditField {
    type Err = AssistantError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "name" => Ok(EditField::Name),
            "phone" | "phones" => Ok(EditField::Phones),
            "email" => Ok(EditField::Email),
            "address" => Ok(EditField::Address),
            "birthday" => Ok(EditField::Birthday),
            other => Err(AssistantError::Usage(format!(
                "unknown field '{}' (expected name, phones, email, address or birthday)",
                other
            ))),
        }
    }
}

/// Changes one field of a contact. For `Phones`, `values` is the complete new
/// list; for every other field the values are joined with spaces.
pub fn edit(
    book: &mut AddressBook,
    name: &str,
    field: EditField,
    values: &[String],
) -> Result<CmdResult> {
    if book.find(name).is_none() {
        return Ok(not_found(name));
    }

    let joined = values.join(" ");
    let mut change = ContactEdit::default();
    match field {
        EditField::Name => change.name = Some(joined),
        EditField::Phones => change.phones = Some(values.to_vec()),
        EditField::Email => change.email = Some(joined),
        EditField::Address => change.address = Some(joined),
        EditField::Birthday => change.birthday = Some(joined),
    }

    let record = book.edit_contact(name, change)?.clone();
    Ok(CmdResult::default()
        .with_message(CmdMessage::success(format!(
            "Contact {} edited successfully",
            name
        )))
        .with_affected_record(record))
}
