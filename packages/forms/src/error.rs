use std::error::Error;
use std::fmt;

/// Failures of the page itself rather than of the user's input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormError {
    /// No element carries the queried id
    MissingElement(String),
    /// The host DOM rejected an operation
    Dom(String),
}

impl fmt::Display for FormError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormError::MissingElement(id) => write!(f, "no element with id \"{}\"", id),
            FormError::Dom(message) => write!(f, "DOM operation failed: {}", message),
        }
    }
}

impl Error for FormError {}
