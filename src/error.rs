use crate::validation::ValidationError;

/// Errors surfaced by address book operations and command handlers
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AddressBookError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error("Contact '{0}' not found")]
    ContactNotFound(String),
    #[error("Phone '{0}' not found")]
    PhoneNotFound(String),
    #[error("Birthday not found for '{0}'")]
    BirthdayNotFound(String),
    #[error("Usage: {0}")]
    Usage(&'static str),
}

pub type Result<T> = std::result::Result<T, AddressBookError>;
