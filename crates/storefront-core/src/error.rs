//! Error types for the shell core.
//!
//! - [`StorageError`] - key-value store access (localStorage in the browser)
//! - [`ContactError`] - invalid WhatsApp contact data
//! - [`ParseRoleError`] - unknown role name

use thiserror::Error;

/// Key-value store errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StorageError {
    /// Storage backend not available (private mode, no window, ...).
    #[error("storage not available")]
    Unavailable,
    /// Failed to read a key.
    #[error("failed to read `{0}` from storage")]
    ReadFailed(String),
    /// Failed to write a key (quota exceeded, ...).
    #[error("failed to write `{0}` to storage")]
    WriteFailed(String),
    /// Failed to remove a key.
    #[error("failed to remove `{0}` from storage")]
    RemoveFailed(String),
    /// Stored value could not be encoded or decoded.
    #[error("invalid stored value: {0}")]
    Codec(String),
}

impl From<serde_json::Error> for StorageError {
    fn from(err: serde_json::Error) -> Self {
        Self::Codec(err.to_string())
    }
}

/// Contact link errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ContactError {
    /// Phone number contains no digits.
    #[error("phone number has no digits")]
    EmptyNumber,
}

/// Returned when a role name is not recognized.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown role `{0}`")]
pub struct ParseRoleError(pub String);
