//! Shared error types for the services crate.

use thiserror::Error;

use storage::repository::StorageError;

/// Errors emitted by `ScoreService`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ScoreServiceError {
    #[error("no identity selected")]
    NoSession,
    #[error(transparent)]
    Storage(#[from] StorageError),
}
