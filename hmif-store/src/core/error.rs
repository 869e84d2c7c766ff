//! Service-layer error taxonomy

use crate::storage::StorageError;
use thiserror::Error;

/// Service errors surfaced to the UI shell.
///
/// `InvalidCredentials` is deliberately a unit variant: login failure
/// never reveals whether the identifier or the password was wrong.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Duplicate: {0}")]
    Duplicate(String),

    #[error("Invalid identifier or password")]
    InvalidCredentials,

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    #[error("Internal error: {0}")]
    Internal(String),
}

/// Result type for service operations
pub type StoreResult<T> = Result<T, StoreError>;
