use crate::book::AddressBook;
use crate::commands::{owned, CmdMessage, CmdResult};
use crate::error::Result;

/// Every contact, split into pages of `page_size`.
pub fn run(book: &AddressBook, page_size: usize) -> Result<CmdResult> {
    if book.is_empty() {
        return Ok(CmdResult::default().with_message(CmdMessage::info("Address book is empty.")));
    }
    let pages = book.chunks(page_size).map(owned).collect();
    Ok(CmdResult::default().with_pages(pages))
}
