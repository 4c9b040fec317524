//! Error types for formkit Core
//!
//! Every failure here is recoverable: the in-memory document is never lost
//! because of one.

use crate::config::ConfigError;
use formkit_repository::{RepositoryError, StorageError};

/// Main formkit error type
#[derive(Debug, thiserror::Error)]
pub enum FormkitError {
    /// Saved-form persistence failed
    #[error("persistence failed: {0}")]
    Repository(#[from] RepositoryError),

    /// Configuration could not be loaded
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),
}

impl FormkitError {
    /// Did the storage medium itself fail (as opposed to bad data)?
    #[inline]
    #[must_use]
    pub fn is_storage_failure(&self) -> bool {
        matches!(self, Self::Repository(RepositoryError::Storage(_)))
    }

    /// Could retrying the same call succeed?
    #[inline]
    #[must_use]
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            Self::Repository(RepositoryError::Storage(
                StorageError::Io { .. } | StorageError::Unavailable(_)
            ))
        )
    }
}

impl From<StorageError> for FormkitError {
    fn from(err: StorageError) -> Self {
        Self::Repository(RepositoryError::Storage(err))
    }
}
