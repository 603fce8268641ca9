//! Error types for the application.
//!
//! - [`ApiError`] - REST calls against the kanban backend
//! - [`StorageError`] - localStorage writes for the token and theme
//!
//! Demo simulator failures are not errors: they are reported as a non-zero
//! exit code on the command outcome.

use thiserror::Error;

/// Failure of a REST call.
///
/// The `Display` output of [`ApiError::Status`] is the server-supplied
/// message alone, so it can be shown to the user as-is.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// Non-2xx response.
    #[error("{message}")]
    Status { status: u16, message: String },
    /// Request never produced a response (offline, CORS, DNS).
    #[error("Network error: {0}")]
    Network(String),
    /// 2xx response whose body did not match the expected shape.
    #[error("Invalid response: {0}")]
    Decode(String),
    /// Request body could not be serialized.
    #[error("Invalid request body: {0}")]
    Encode(String),
}

impl ApiError {
    /// HTTP status, when the server answered.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// localStorage errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum StorageError {
    #[error("localStorage not available")]
    Unavailable,
    #[error("failed to save to localStorage")]
    WriteFailed,
    #[error("failed to remove from localStorage")]
    RemoveFailed,
}
