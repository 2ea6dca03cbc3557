//! Domain error model.

use thiserror::Error;

/// Result type used across the client crates.
pub type DomainResult<T> = Result<T, DomainError>;

/// Client-side failure that is not an HTTP failure.
///
/// HTTP failures live in `erpdesk-client`; this enum covers validation,
/// identifiers and local persistence.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A value failed validation (e.g. an empty required field).
    #[error("validation failed: {0}")]
    Validation(String),

    /// An identifier was invalid (e.g. empty string).
    #[error("invalid identifier: {0}")]
    InvalidId(String),

    /// A requested record was not found locally.
    #[error("not found")]
    NotFound,

    /// Reading or writing local storage failed.
    #[error("storage error: {0}")]
    Storage(String),

    /// A value could not be (de)serialized.
    #[error("serialization error: {0}")]
    Serialization(String),
}

impl DomainError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn invalid_id(msg: impl Into<String>) -> Self {
        Self::InvalidId(msg.into())
    }

    pub fn not_found() -> Self {
        Self::NotFound
    }

    pub fn storage(msg: impl Into<String>) -> Self {
        Self::Storage(msg.into())
    }

    pub fn serialization(msg: impl Into<String>) -> Self {
        Self::Serialization(msg.into())
    }
}

impl From<serde_json::Error> for DomainError {
    fn from(value: serde_json::Error) -> Self {
        Self::Serialization(value.to_string())
    }
}
