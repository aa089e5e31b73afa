//! Unflatten error types
//!
//! Error codes:
//! - TREEPATH_MALFORMED_PATH (REJECT)
//! - TREEPATH_CONTAINER_CONFLICT (REJECT)

use thiserror::Error;

use crate::path::PathError;

/// Result type for unflatten operations
pub type UnflattenResult<T> = Result<T, UnflattenError>;

/// Errors raised while rebuilding a tree from a flat mapping
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UnflattenError {
    /// A flat key failed to decode
    #[error("cannot unflatten key '{key}': {source}")]
    MalformedKey {
        key: String,
        #[source]
        source: PathError,
    },

    /// Two keys imply different kinds of node at the same location
    #[error("cannot unflatten key '{key}': node at '{at}' is {found}, key requires {expected}")]
    ContainerKindConflict {
        /// The key being written when the conflict was detected
        key: String,
        /// Flat key of the conflicting location (`$` for the root)
        at: String,
        /// What the key requires at that location
        expected: &'static str,
        /// What is already there
        found: &'static str,
    },
}

impl UnflattenError {
    /// Returns the stable error code
    pub fn code(&self) -> &'static str {
        match self {
            UnflattenError::MalformedKey { .. } => "TREEPATH_MALFORMED_PATH",
            UnflattenError::ContainerKindConflict { .. } => "TREEPATH_CONTAINER_CONFLICT",
        }
    }

    /// Returns the flat key that was being written
    pub fn key(&self) -> &str {
        match self {
            UnflattenError::MalformedKey { key, .. }
            | UnflattenError::ContainerKindConflict { key, .. } => key,
        }
    }
}
