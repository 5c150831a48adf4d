use crate::book::AddressBook;
use crate::commands::{owned, CmdMessage, CmdResult};
use crate::error::{AssistantError, Result};
use chrono::NaiveDate;

/// Contacts with a birthday in the next `days` days, counted from `today`.
pub fn run(book: &AddressBook, days: i64, today: NaiveDate) -> Result<CmdResult> {
    if days < 0 {
        return Err(AssistantError::Usage(
            "birthdays [days] (days must not be negative)".into(),
        ));
    }
    let upcoming = owned(book.upcoming_birthdays_from(days, today));
    if upcoming.is_empty() {
        return Ok(CmdResult::default().with_message(CmdMessage::info(format!(
            "No birthdays in the next {} days.",
            days
        ))));
    }
    Ok(CmdResult::default()
        .with_message(CmdMessage::info("Upcoming birthdays:"))
        .with_records(upcoming))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::fixtures::StoreFixture;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 1).unwrap()
    }

    #[test]
    fn lists_birthdays_in_window() {
        let book = StoreFixture::new()
            .with_birthday("soon", "1990-03-05")
            .with_birthday("today", "1990-03-01")
            .with_birthday("far", "1990-09-01")
            .book;
        let result = run(&book, 7, today()).unwrap();
        assert_eq!(result.messages[0].content, "Upcoming birthdays:");
        let names: Vec<&str> = result.listed_records().map(|r| r.name.value()).collect();
        assert_eq!(names, ["soon"]);
    }

    #[test]
    fn empty_window() {
        let book = StoreFixture::new().with_birthday("far", "1990-09-01").book;
        let result = run(&book, 7, today()).unwrap();
        assert_eq!(result.messages[0].content, "No birthdays in the next 7 days.");
    }

    #[test]
    fn negative_days_rejected() {
        assert!(run(&AddressBook::new(), -1, today()).is_err());
    }
}
