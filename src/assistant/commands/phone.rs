use crate::book::AddressBook;
use crate::commands::{not_found, CmdMessage, CmdResult};
use crate::error::Result;

pub fn add_phone(book: &mut AddressBook, name: &str, phone: &str) -> Result<CmdResult> {
    let Some(record) = book.find_mut(name) else {
        return Ok(not_found(name));
    };
    record.add_phone(phone)?;
    Ok(CmdResult::default()
        .with_message(CmdMessage::success(format!(
            "Contact {} Add phone:{}",
            name, phone
        )))
        .with_affected_record(record.clone()))
}

/// Replaces every phone of the contact with `phone`.
pub fn change(book: &mut AddressBook, name: &str, phone: &str) -> Result<CmdResult> {
    let Some(record) = book.find_mut(name) else {
        return Ok(not_found(name));
    };
    record.set_phones([phone])?;
    Ok(CmdResult::default()
        .with_message(CmdMessage::success(format!(
            "Change name:{}, phone number:{}",
            name, phone
        )))
        .with_affected_record(record.clone()))
}

/// Shows the contact's first phone number.
pub fn phone(book: &AddressBook, name: &str) -> Result<CmdResult> {
    let Some(record) = book.find(name) else {
        return Ok(not_found(name));
    };
    let message = match record.phones.first() {
        Some(phone) => CmdMessage::info(format!("Phone number: {}", phone)),
        None => CmdMessage::warning(format!("No phone number for {}", name)),
    };
    Ok(CmdResult::default().with_message(message))
}

pub fn edit_phone(book: &mut AddressBook, name: &str, old: &str, new: &str) -> Result<CmdResult> {
    let Some(record) = book.find_mut(name) else {
        return Ok(not_found(name));
    };
    record.edit_phone(old, new)?;
    Ok(CmdResult::default()
        .with_message(CmdMessage::success(format!(
            "Phone number {} edited to {}",
            old, new
        )))
        .with_affected_record(record.clone()))
}

pub fn remove_phone(book: &mut AddressBook, name: &str, phone: &str) -> Result<CmdResult> {
    let Some(record) = book.find_mut(name) else {
        return Ok(not_found(name));
    };
    if !record.remove_phone(phone) {
        return Ok(CmdResult::default().with_message(CmdMessage::warning(format!(
            "Phone number {} not found",
            phone
        ))));
    }
    Ok(CmdResult::default()
        .with_message(CmdMessage::success(format!("Phone number {} removed", phone)))
        .with_affected_record(record.clone()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::contact;
    use crate::commands::MessageLevel;
    use crate::store::memory::fixtures::StoreFixture;

    #[test]
    fn test_add_contact_then_phone_lookup() {
        let mut book = AddressBook::new();
        contact::add(&mut book, "John", None).unwrap();
        add_phone(&mut book, "John", "1234567890").unwrap();

        let result = phone(&book, "John").unwrap();
        assert_eq!(result.messages[0].content, "Phone number: 1234567890");
    }

    #[test]
    fn test_add_phone_to_missing_contact() {
        let mut book = AddressBook::new();
        let result = add_phone(&mut book, "Ghost", "1234567890").unwrap();
        assert_eq!(result.messages[0].content, "Contact Ghost not found");
        assert!(!result.is_mutation());
    }

    #[test]
    fn test_add_invalid_phone_errors() {
        let mut book = StoreFixture::new().with_contact("John", &[]).book;
        assert!(add_phone(&mut book, "John", "abc").is_err());
        assert!(book.find("John").unwrap().phones.is_empty());
    }

    #[test]
    fn test_phone_without_numbers() {
        let book = StoreFixture::new().with_contact("John", &[]).book;
        let result = phone(&book, "John").unwrap();
        assert_eq!(result.messages[0].content, "No phone number for John");
        assert_eq!(result.messages[0].level, MessageLevel::Warning);
    }

    #[test]
    fn test_change_replaces_all_numbers() {
        let mut book = StoreFixture::new()
            .with_contact("John", &["1111111111", "2222222222"])
            .book;
        let result = change(&mut book, "John", "3333333333").unwrap();
        assert_eq!(
            result.messages[0].content,
            "Change name:John, phone number:3333333333"
        );
        let phones = &book.find("John").unwrap().phones;
        assert_eq!(phones.len(), 1);
        assert_eq!(phones[0].value(), "3333333333");
    }

    #[test]
    fn test_change_invalid_keeps_numbers() {
        let mut book = StoreFixture::new().with_contact("John", &["1111111111"]).book;
        assert!(change(&mut book, "John", "33").is_err());
        assert_eq!(book.find("John").unwrap().phones[0].value(), "1111111111");
    }

    #[test]
    fn test_edit_and_remove_phone() {
        let mut book = StoreFixture::new().with_contact("John", &["1111111111"]).book;
        let result = edit_phone(&mut book, "John", "1111111111", "2222222222").unwrap();
        assert_eq!(
            result.messages[0].content,
            "Phone number 1111111111 edited to 2222222222"
        );

        let result = remove_phone(&mut book, "John", "1111111111").unwrap();
        assert_eq!(result.messages[0].level, MessageLevel::Warning);

        let result = remove_phone(&mut book, "John", "2222222222").unwrap();
        assert_eq!(result.messages[0].content, "Phone number 2222222222 removed");
        assert!(book.find("John").unwrap().phones.is_empty());
    }
}
