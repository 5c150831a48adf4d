use crate::book::AddressBook;
use crate::commands::{owned, CmdMessage, CmdResult};
use crate::error::Result;

pub fn run(book: &AddressBook, query: &str) -> Result<CmdResult> {
    let matches = owned(book.search(query));
    if matches.is_empty() {
        return Ok(CmdResult::default().with_message(CmdMessage::info("No matching contacts found.")));
    }
    Ok(CmdResult::default()
        .with_message(CmdMessage::info("Search results:"))
        .with_records(matches))
}
