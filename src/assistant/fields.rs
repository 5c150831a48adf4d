//! Validated field values for contact records.
//!
//! Every value type here can only be built through validation, so a [`Phone`]
//! held by a record is always exactly ten digits, an [`Email`] always carries
//! an `@`, and so on. The serde impls go through the same constructors, which
//! means a hand-edited data file cannot smuggle in invalid values either.
//!
//! | Field      | Rule                                  |
//! |------------|---------------------------------------|
//! | `Name`     | non-empty after trimming              |
//! | `Phone`    | exactly 10 ASCII digits               |
//! | `Email`    | contains `@`                          |
//! | `Address`  | free text, non-empty                  |
//! | `Birthday` | a calendar date written `YYYY-MM-DD`  |
//! | `Note`     | free text plus an ordered set of tags |

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

pub const BIRTHDAY_FORMAT: &str = "%Y-%m-%d";
const PHONE_DIGITS: usize = 10;

/// Error type for field validation failures.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FieldError {
    #[error("Contact name cannot be empty")]
    EmptyName,

    #[error("Invalid phone number format: '{0}' (expected exactly 10 digits)")]
    InvalidPhone(String),

    #[error("Invalid email format: '{0}'")]
    InvalidEmail(String),

    #[error("Address cannot be empty")]
    EmptyAddress,

    #[error("Invalid birthday format: '{0}'. Use 'YYYY-MM-DD'.")]
    InvalidBirthday(String),

    #[error("Invalid tag '{0}': tags must be a single non-empty word")]
    InvalidTag(String),
}

/// Returns true when `phone` is exactly ten ASCII digits.
pub fn validate_phone(phone: &str) -> bool {
    phone.len() == PHONE_DIGITS && phone.chars().all(|c| c.is_ascii_digit())
}

pub fn validate_email(email: &str) -> bool {
    email.contains('@')
}

/// Validates a note tag. Tags are matched word-by-word in search, so they
/// cannot contain whitespace.
pub fn validate_tag(tag: &str) -> Result<(), FieldError> {
    if tag.is_empty() || tag.chars().any(char::is_whitespace) {
        return Err(FieldError::InvalidTag(tag.to_string()));
    }
    Ok(())
}

// --- Name ---

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Name(String);

impl Name {
    pub fn new(value: impl Into<String>) -> Result<Self, FieldError> {
        let value = value.into().trim().to_string();
        if value.is_empty() {
            return Err(FieldError::EmptyName);
        }
        Ok(Self(value))
    }

    pub fn value(&self) -> &str {
        &self.0
    }
}

// --- Phone ---

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Phone(String);

impl Phone {
    pub fn new(value: impl Into<String>) -> Result<Self, FieldError> {
        let value = value.into();
        if !validate_phone(&value) {
            return Err(FieldError::InvalidPhone(value));
        }
        Ok(Self(value))
    }

    pub fn value(&self) -> &str {
        &self.0
    }
}

// --- Email ---

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Email(String);

impl Email {
    pub fn new(value: impl Into<String>) -> Result<Self, FieldError> {
        let value = value.into();
        if !validate_email(&value) {
            return Err(FieldError::InvalidEmail(value));
        }
        Ok(Self(value))
    }

    pub fn value(&self) -> &str {
        &self.0
    }
}

// --- Address ---

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Address(String);

impl Address {
    pub fn new(value: impl Into<String>) -> Result<Self, FieldError> {
        let value = value.into().trim().to_string();
        if value.is_empty() {
            return Err(FieldError::EmptyAddress);
        }
        Ok(Self(value))
    }

    pub fn value(&self) -> &str {
        &self.0
    }
}

// --- Birthday ---

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Birthday(NaiveDate);

impl Birthday {
    pub fn new(date: NaiveDate) -> Self {
        Self(date)
    }

    pub fn date(&self) -> NaiveDate {
        self.0
    }

    /// The next date, on or after `today`, on which this birthday falls.
    ///
    /// Feb 29 birthdays are observed on Feb 28 in non-leap years.
    pub fn next_occurrence(&self, today: NaiveDate) -> NaiveDate {
        let this_year = anniversary_in(self.0, today.year());
        if this_year < today {
            anniversary_in(self.0, today.year() + 1)
        } else {
            this_year
        }
    }

    /// Days from `today` until the next occurrence. Zero when the birthday
    /// is today.
    pub fn days_until(&self, today: NaiveDate) -> i64 {
        (self.next_occurrence(today) - today).num_days()
    }
}

fn anniversary_in(date: NaiveDate, year: i32) -> NaiveDate {
    date.with_year(year)
        .or_else(|| NaiveDate::from_ymd_opt(year, date.month(), 28))
        .unwrap_or(date)
}

impl FromStr for Birthday {
    type Err = FieldError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        NaiveDate::parse_from_str(s, BIRTHDAY_FORMAT)
            .map(Self)
            .map_err(|_| FieldError::InvalidBirthday(s.to_string()))
    }
}

impl fmt::Display for Birthday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(BIRTHDAY_FORMAT))
    }
}

// --- Note ---

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawNote")]
pub struct Note {
    text: String,
    tags: Vec<String>,
}

/// Stored shape of a [`Note`], validated by [`Note::new`] on the way in.
#[derive(Deserialize)]
struct RawNote {
    text: String,
    #[serde(default)]
    tags: Vec<String>,
}

impl TryFrom<RawNote> for Note {
    type Error = FieldError;

    fn try_from(raw: RawNote) -> Result<Self, Self::Error> {
        Note::new(raw.text, raw.tags)
    }
}

impl Note {
    pub fn new(text: impl Into<String>, tags: Vec<String>) -> Result<Self, FieldError> {
        let mut note = Self {
            text: text.into(),
            tags: Vec::new(),
        };
        for tag in tags {
            note.add_tag(tag)?;
        }
        Ok(note)
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn tags(&self) -> &[String] {
        &self.tags
    }

    /// Adds a tag unless it is already present.
    pub fn add_tag(&mut self, tag: impl Into<String>) -> Result<(), FieldError> {
        let tag = tag.into();
        validate_tag(&tag)?;
        if !self.tags.contains(&tag) {
            self.tags.push(tag);
        }
        Ok(())
    }

    pub fn remove_tag(&mut self, tag: &str) {
        self.tags.retain(|t| t != tag);
    }

    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }

    /// Position of `tag` in this note's tag list.
    pub fn tag_position(&self, tag: &str) -> Option<usize> {
        self.tags.iter().position(|t| t == tag)
    }
}

impl fmt::Display for Note {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.tags.is_empty() {
            write!(f, "Note: {} ()", self.text)
        } else {
            write!(f, "Note: {} (Tags: {})", self.text, self.tags.join(", "))
        }
    }
}

// Plumbing shared by the string newtypes.
macro_rules! string_field {
    ($($ty:ident),*) => {
        $(
            impl TryFrom<String> for $ty {
                type Error = FieldError;

                fn try_from(value: String) -> Result<Self, Self::Error> {
                    Self::new(value)
                }
            }

            impl From<$ty> for String {
                fn from(field: $ty) -> String {
                    field.0
                }
            }

            impl FromStr for $ty {
                type Err = FieldError;

                fn from_str(s: &str) -> Result<Self, Self::Err> {
                    Self::new(s)
                }
            }

            impl fmt::Display for $ty {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    f.write_str(&self.0)
                }
            }
        )*
    };
}

string_field!(Name, Phone, Email, Address);

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, BIRTHDAY_FORMAT).unwrap()
    }

    #[test]
    fn test_valid_phones_round_trip() {
        for value in ["1234567890", "0000000000", "0987654321"] {
            let phone = Phone::new(value).unwrap();
            assert_eq!(phone.value(), value);
            assert_eq!(phone.to_string(), value);
        }
    }

    #[test]
    fn test_invalid_phones_rejected() {
        for value in ["", "123", "123456789", "12345678901", "12345abcde", "+380501234", "１２３４５６７８９０"] {
            assert_eq!(
                Phone::new(value),
                Err(FieldError::InvalidPhone(value.to_string())),
                "{value} should be rejected"
            );
        }
    }

    #[test]
    fn test_phone_deserialization_is_validated() {
        assert!(serde_json::from_str::<Phone>("\"1234567890\"").is_ok());
        assert!(serde_json::from_str::<Phone>("\"12\"").is_err());
    }

    #[test]
    fn test_email_requires_at_sign() {
        assert!(Email::new("john@example.com").is_ok());
        assert_eq!(
            Email::new("john.example.com"),
            Err(FieldError::InvalidEmail("john.example.com".into()))
        );
    }

    #[test]
    fn test_name_is_trimmed_and_non_empty() {
        assert_eq!(Name::new("  John ").unwrap().value(), "John");
        assert_eq!(Name::new("   "), Err(FieldError::EmptyName));
    }

    #[test]
    fn test_birthday_parsing() {
        let birthday: Birthday = "1990-05-17".parse().unwrap();
        assert_eq!(birthday.to_string(), "1990-05-17");
        assert!("17.05.1990".parse::<Birthday>().is_err());
        assert!("1990-02-30".parse::<Birthday>().is_err());
    }

    #[test]
    fn test_birthday_later_this_year() {
        let birthday: Birthday = "1990-05-17".parse().unwrap();
        assert_eq!(birthday.days_until(date("2024-05-10")), 7);
    }

    #[test]
    fn test_birthday_rolls_to_next_year() {
        let birthday: Birthday = "1990-01-02".parse().unwrap();
        let today = date("2023-12-30");
        assert_eq!(birthday.next_occurrence(today), date("2024-01-02"));
        assert_eq!(birthday.days_until(today), 3);
    }

    #[test]
    fn test_birthday_today_is_zero_days_away() {
        let birthday: Birthday = "1990-05-17".parse().unwrap();
        assert_eq!(birthday.days_until(date("2024-05-17")), 0);
    }

    #[test]
    fn test_leap_day_birthday_in_common_year() {
        let birthday: Birthday = "2000-02-29".parse().unwrap();
        assert_eq!(birthday.next_occurrence(date("2023-02-01")), date("2023-02-28"));
        assert_eq!(birthday.next_occurrence(date("2024-02-01")), date("2024-02-29"));
    }

    #[test]
    fn test_note_tags_are_unique_and_ordered() {
        let mut note = Note::new("call back", vec!["work".into(), "urgent".into()]).unwrap();
        note.add_tag("work").unwrap();
        assert_eq!(note.tags(), ["work", "urgent"]);
        assert_eq!(note.tag_position("urgent"), Some(1));

        note.remove_tag("work");
        assert!(!note.has_tag("work"));
        assert_eq!(note.to_string(), "Note: call back (Tags: urgent)");
    }

    #[test]
    fn test_note_rejects_bad_tags() {
        assert!(Note::new("x", vec!["two words".into()]).is_err());
        let mut note = Note::new("x", vec![]).unwrap();
        assert_eq!(note.add_tag(""), Err(FieldError::InvalidTag(String::new())));
        assert_eq!(note.to_string(), "Note: x ()");
    }

    #[test]
    fn test_note_from_json_validates_tags() {
        let note: Note = serde_json::from_str(r#"{"text": "x", "tags": ["a", "a", "b"]}"#).unwrap();
        assert_eq!(note.tags(), ["a", "b"]);

        let note: Note = serde_json::from_str(r#"{"text": "no tags"}"#).unwrap();
        assert!(note.tags().is_empty());

        let bad = serde_json::from_str::<Note>(r#"{"text": "x", "tags": ["two words"]}"#);
        assert!(bad.is_err());
    }
}
