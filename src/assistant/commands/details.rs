//! Email, address and birthday setters.

use crate::book::AddressBook;
use crate::commands::{not_found, CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::Record;

fn set_detail<F>(book: &mut AddressBook, name: &str, label: &str, apply: F) -> Result<CmdResult>
where
    F: FnOnce(&mut Record) -> Result<()>,
{
    let Some(record) = book.find_mut(name) else {
        return Ok(not_found(name));
    };
    apply(record)?;
    Ok(CmdResult::default()
        .with_message(CmdMessage::success(format!(
            "{} added to contact {}",
            label, name
        )))
        .with_affected_record(record.clone()))
}

pub fn add_email(book: &mut AddressBook, name: &str, email: &str) -> Result<CmdResult> {
    set_detail(book, name, "Email", |r| r.set_email(email))
}

pub fn add_address(book: &mut AddressBook, name: &str, address: &str) -> Result<CmdResult> {
    set_detail(book, name, "Address", |r| r.set_address(address))
}

pub fn add_birthday(book: &mut AddressBook, name: &str, birthday: &str) -> Result<CmdResult> {
    set_detail(book, name, "Birthday", |r| r.set_birthday(birthday))
}
