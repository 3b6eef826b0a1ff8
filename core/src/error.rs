//! Errors returned by the persistence gateway.
//!
//! # Design
//! `NotFound` is its own variant because handlers map it to 404. Every other
//! failure of the underlying store (connectivity, constraint violations,
//! decoding) collapses into `Storage` with the driver's message, since
//! callers treat them all the same way.

use uuid::Uuid;

/// Errors returned by `TodoStore` operations.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// No todo exists with the requested id.
    #[error("todo not found: {0}")]
    NotFound(Uuid),

    /// The underlying store failed.
    #[error("storage failure: {0}")]
    Storage(String),
}

impl StoreError {
    pub fn storage(msg: impl Into<String>) -> Self {
        Self::Storage(msg.into())
    }
}

impl From<sqlx::Error> for StoreError {
    fn from(err: sqlx::Error) -> Self {
        Self::Storage(err.to_string())
    }
}

/// Result type for gateway operations.
pub type StoreResult<T> = Result<T, StoreError>;
