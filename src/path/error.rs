//! Error types for path resolution.

use thiserror::Error;

/// Errors that can occur while resolving a path into a key sequence.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PathError {
    /// The path is empty, empty after splitting, or not a sequence or string.
    #[error("Invalid path: {reason}")]
    InvalidPath { reason: String },
}

impl PathError {
    pub(crate) fn invalid(reason: impl Into<String>) -> Self {
        PathError::InvalidPath {
            reason: reason.into(),
        }
    }
}
