//! Serialized JSON text
//!
//! `parse` is the only entry point that reads text; `is_valid` is defined
//! as "`parse` succeeded" so the two can never disagree.

use serde_json::Value;
use thiserror::Error;

/// Text that is not a single well-formed JSON document
#[derive(Debug, Error)]
#[error("invalid JSON text: {source}")]
pub struct ParseError {
    #[source]
    source: serde_json::Error,
}

impl ParseError {
    /// Returns the stable error code
    pub fn code(&self) -> &'static str {
        "TREEPATH_INVALID_TEXT"
    }

    /// One-based line of the failure
    pub fn line(&self) -> usize {
        self.source.line()
    }

    /// One-based column of the failure
    pub fn column(&self) -> usize {
        self.source.column()
    }

    /// True if the text ended before the document was complete
    pub fn is_eof(&self) -> bool {
        self.source.is_eof()
    }
}

impl From<serde_json::Error> for ParseError {
    fn from(source: serde_json::Error) -> Self {
        Self { source }
    }
}

/// Parses `text` as one JSON document. Trailing whitespace is allowed,
/// trailing content is not.
pub fn parse(text: &str) -> Result<Value, ParseError> {
    Ok(serde_json::from_str(text)?)
}

/// Returns true if `text` parses.
pub fn is_valid(text: &str) -> bool {
    parse(text).is_ok()
}
