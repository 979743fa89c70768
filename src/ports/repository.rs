//! Shared repository error type.

use thiserror::Error;

/// Errors from persistence adapters.
///
/// Every repository port uses this; tenant scoping means "not found" covers
/// both a missing row and a row belonging to a different agency.
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// The requested row does not exist within the caller's agency.
    #[error("record not found")]
    NotFound,

    /// Underlying database failure.
    #[error("database error: {0}")]
    Database(String),
}

impl RepositoryError {
    pub fn database(err: impl std::fmt::Display) -> Self {
        RepositoryError::Database(err.to_string())
    }
}
