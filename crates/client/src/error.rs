//! HTTP-side error model.

use thiserror::Error;

use erpdesk_core::DomainError;

pub type ApiResult<T> = Result<T, ApiError>;

/// Failure of a backend call.
///
/// Nothing is retried; the caller decides what to show.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The request never produced a response (DNS, refused, timeout).
    #[error("network error: {0}")]
    Network(String),

    /// 401: missing or expired token.
    #[error("unauthorized")]
    Unauthorized,

    /// Any other non-2xx response.
    #[error("API error ({status}): {message}")]
    Status { status: u16, message: String },

    /// A 2xx response whose body did not match the expected shape.
    #[error("decode error: {0}")]
    Decode(String),

    #[error("invalid configuration: {0}")]
    Config(String),

    /// Input rejected before anything was sent.
    #[error(transparent)]
    Domain(#[from] DomainError),
}

impl ApiError {
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Unauthorized => Some(401),
            ApiError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    pub fn is_not_found(&self) -> bool {
        self.status() == Some(404)
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(value: reqwest::Error) -> Self {
        if value.is_decode() {
            ApiError::Decode(value.to_string())
        } else {
            ApiError::Network(value.to_string())
        }
    }
}
