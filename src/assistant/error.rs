use crate::fields::FieldError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AssistantError {
    #[error("{0}")]
    Field(#[from] FieldError),

    #[error("Contact {0} not found")]
    ContactNotFound(String),

    #[error("Contact {0} already exists")]
    ContactExists(String),

    #[error("Phone number {0} not found")]
    PhoneNotFound(String),

    #[error("Usage: {0}")]
    Usage(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Store error: {0}")]
    Store(String),

    #[error("Organizer error: {0}")]
    Organizer(String),
}

pub type Result<T> = std::result::Result<T, AssistantError>;
