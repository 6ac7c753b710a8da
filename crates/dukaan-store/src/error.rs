//! Store error types.

use dukaan_cache::CacheError;
use dukaan_commerce::{CommerceError, ErrorKind};
use dukaan_data::DataError;

/// Error type for storefront operations.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// A page load failed; the message is what the error view shows.
    #[error("Failed to load {what}")]
    LoadFailed {
        what: &'static str,
        #[source]
        source: DataError,
    },

    /// A service call failed outside of a page load.
    #[error(transparent)]
    Data(#[from] DataError),

    /// A domain rule rejected the operation.
    #[error(transparent)]
    Commerce(#[from] CommerceError),

    /// Persisted state could not be read or written.
    #[error("Storage error: {0}")]
    Storage(#[from] CacheError),
}

impl StoreError {
    pub fn load_failed(what: &'static str, source: DataError) -> Self {
        StoreError::LoadFailed { what, source }
    }

    /// Classify this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            StoreError::LoadFailed { source, .. } | StoreError::Data(source) => source.kind(),
            StoreError::Commerce(err) => err.kind(),
            StoreError::Storage(err) if err.is_not_found() => ErrorKind::NotFound,
            StoreError::Storage(_) => ErrorKind::Failure,
        }
    }

    pub fn is_not_found(&self) -> bool {
        self.kind() == ErrorKind::NotFound
    }
}

/// Result alias for store operations.
pub type StoreResult<T> = Result<T, StoreError>;
