//! Path decoding errors
//!
//! Error codes:
//! - TREEPATH_MALFORMED_PATH (REJECT)
//!
//! A flat key that fails to decode is always surfaced to the caller. It is
//! never coerced into "no match".

use thiserror::Error;

/// Result type for path operations
pub type PathResult<T> = Result<T, PathError>;

/// Reasons a flat key cannot be decoded into a `Path`.
///
/// Every variant carries the offending key and the byte offset at which the
/// problem was detected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PathError {
    /// A `[` without a matching `]`
    #[error("malformed path '{key}': unclosed '[' at byte {position}")]
    UnclosedBracket { key: String, position: usize },

    /// `[]` with nothing inside
    #[error("malformed path '{key}': empty index at byte {position}")]
    EmptyIndex { key: String, position: usize },

    /// Index text that is not made of ASCII digits
    #[error("malformed path '{key}': index '{index}' at byte {position} is not a non-negative integer")]
    NonNumericIndex {
        key: String,
        index: String,
        position: usize,
    },

    /// Index with a leading zero, e.g. `[01]`
    #[error("malformed path '{key}': index '{index}' at byte {position} has a leading zero")]
    LeadingZero {
        key: String,
        index: String,
        position: usize,
    },

    /// Index that does not fit in `usize`
    #[error("malformed path '{key}': index '{index}' at byte {position} is out of range")]
    IndexOverflow {
        key: String,
        index: String,
        position: usize,
    },

    /// Anything other than `[` after a name or a closing bracket
    #[error("malformed path '{key}': unexpected '{found}' at byte {position}")]
    UnexpectedCharacter {
        key: String,
        found: char,
        position: usize,
    },
}

impl PathError {
    /// Returns the stable error code
    pub fn code(&self) -> &'static str {
        "TREEPATH_MALFORMED_PATH"
    }

    /// Returns the key that failed to decode
    pub fn key(&self) -> &str {
        match self {
            PathError::UnclosedBracket { key, .. }
            | PathError::EmptyIndex { key, .. }
            | PathError::NonNumericIndex { key, .. }
            | PathError::LeadingZero { key, .. }
            | PathError::IndexOverflow { key, .. }
            | PathError::UnexpectedCharacter { key, .. } => key,
        }
    }

    /// Returns the byte offset of the problem within the key
    pub fn position(&self) -> usize {
        match self {
            PathError::UnclosedBracket { position, .. }
            | PathError::EmptyIndex { position, .. }
            | PathError::NonNumericIndex { position, .. }
            | PathError::LeadingZero { position, .. }
            | PathError::IndexOverflow { position, .. }
            | PathError::UnexpectedCharacter { position, .. } => *position,
        }
    }
}
