//! Data service error types.

use crate::ServiceTag;
use dukaan_commerce::{CommerceError, ErrorKind};

/// Error type for data service operations.
#[derive(Debug, thiserror::Error)]
pub enum DataError {
    /// A domain rule rejected the operation (including not-found lookups).
    #[error(transparent)]
    Commerce(#[from] CommerceError),

    /// The service could not be reached.
    #[error("The {0} service is unavailable")]
    Unavailable(ServiceTag),

    /// Seed or snapshot data could not be parsed.
    #[error("Invalid data: {0}")]
    InvalidData(#[from] serde_json::Error),
}

impl DataError {
    /// Classify this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            DataError::Commerce(err) => err.kind(),
            _ => ErrorKind::Failure,
        }
    }

    pub fn is_not_found(&self) -> bool {
        self.kind() == ErrorKind::NotFound
    }
}

/// Result alias for data service calls.
pub type DataResult<T> = Result<T, DataError>;
