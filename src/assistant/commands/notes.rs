use crate::book::AddressBook;
use crate::commands::{not_found, owned, CmdMessage, CmdResult};
use crate::error::{AssistantError, Result};

/// Splits note words into text and tags. Words written `#tag` become tags,
/// everything else is the note text.
pub fn split_tags<S: AsRef<str>>(words: &[S]) -> (String, Vec<String>) {
    let mut text = Vec::new();
    let mut tags = Vec::new();
    for word in words {
        let word = word.as_ref();
        match word.strip_prefix('#') {
            Some(tag) if !tag.is_empty() => tags.push(tag.to_string()),
            _ => text.push(word),
        }
    }
    (text.join(" "), tags)
}

/// Sets (or replaces) the contact's note.
pub fn set_note<S: AsRef<str>>(book: &mut AddressBook, name: &str, words: &[S]) -> Result<CmdResult> {
    let (text, tags) = split_tags(words);
    if text.is_empty() {
        return Err(AssistantError::Usage("note <name> <text...> [#tag...]".into()));
    }
    let Some(record) = book.find_mut(name) else {
        return Ok(not_found(name));
    };
    record.set_note(&text, tags.clone())?;

    let message = if tags.is_empty() {
        format!("Note added to contact {}", name)
    } else {
        format!("Note added to contact {} with tags {}", name, tags.join(", "))
    };
    Ok(CmdResult::default()
        .with_message(CmdMessage::success(message))
        .with_affected_record(record.clone()))
}

pub fn add_tag(book: &mut AddressBook, name: &str, tag: &str) -> Result<CmdResult> {
    let Some(record) = book.find_mut(name) else {
        return Ok(not_found(name));
    };
    if !record.add_tag(tag)? {
        return Ok(no_note(name));
    }
    Ok(CmdResult::default()
        .with_message(CmdMessage::success(format!(
            "Tag {} added to note of contact {}",
            tag, name
        )))
        .with_affected_record(record.clone()))
}

pub fn remove_tag(book: &mut AddressBook, name: &str, tag: &str) -> Result<CmdResult> {
    let Some(record) = book.find_mut(name) else {
        return Ok(not_found(name));
    };
    if !record.remove_tag(tag) {
        return Ok(no_note(name));
    }
    Ok(CmdResult::default()
        .with_message(CmdMessage::success(format!(
            "Tag {} removed from note of contact {}",
            tag, name
        )))
        .with_affected_record(record.clone()))
}

/// Contacts carrying `tag`, ordered by the tag's position in their notes.
pub fn tagged(book: &AddressBook, tag: &str) -> Result<CmdResult> {
    let records = owned(book.sort_notes_by_tag(tag));
    if records.is_empty() {
        return Ok(CmdResult::default()
            .with_message(CmdMessage::info(format!("No contacts tagged {}.", tag))));
    }
    Ok(CmdResult::default().with_records(records))
}

fn no_note(name: &str) -> CmdResult {
    CmdResult::default().with_message(CmdMessage::warning(format!(
        "Contact {} has no note",
        name
    )))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::fixtures::StoreFixture;

    #[test]
    fn test_split_tags() {
        let (text, tags) = split_tags(&["call", "back", "#work", "#", "soon"]);
        assert_eq!(text, "call back # soon");
        assert_eq!(tags, ["work"]);
    }

    #[test]
    fn test_set_note_with_tags() {
        let mut book = StoreFixture::new().with_contact("john", &[]).book;
        let result = set_note(&mut book, "john", &["likes", "tea", "#food"]).unwrap();
        assert_eq!(
            result.messages[0].content,
            "Note added to contact john with tags food"
        );

        let note = book.find("john").unwrap().note.clone().unwrap();
        assert_eq!(note.text(), "likes tea");
        assert_eq!(note.tags(), ["food"]);
    }

    #[test]
    fn test_set_note_requires_text() {
        let mut book = StoreFixture::new().with_contact("john", &[]).book;
        assert!(set_note(&mut book, "john", &["#only-tags"]).is_err());
    }

    #[test]
    fn test_tag_without_note() {
        let mut book = StoreFixture::new().with_contact("john", &[]).book;
        let result = add_tag(&mut book, "john", "work").unwrap();
        assert_eq!(result.messages[0].content, "Contact john has no note");
        assert!(!result.is_mutation());
    }

    #[test]
    fn test_add_and_remove_tag() {
        let mut book = StoreFixture::new().with_note("john", "x", &[]).book;
        add_tag(&mut book, "john", "work").unwrap();
        assert!(book.find("john").unwrap().has_tag("work"));

        let result = remove_tag(&mut book, "john", "work").unwrap();
        assert_eq!(
            result.messages[0].content,
            "Tag work removed from note of contact john"
        );
        assert!(!book.find("john").unwrap().has_tag("work"));
    }

    #[test]
    fn test_tagged() {
        let book = StoreFixture::new()
            .with_note("a", "x", &["home", "work"])
            .with_note("b", "y", &["work"])
            .book;
        let result = tagged(&book, "work").unwrap();
        let names: Vec<&str> = result.listed_records().map(|r| r.name.value()).collect();
        assert_eq!(names, ["b", "a"]);

        let result = tagged(&book, "gym").unwrap();
        assert_eq!(result.messages[0].content, "No contacts tagged gym.");
    }
}
