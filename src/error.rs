//! Crate-wide error type
//!
//! Each module returns its own error; `TreeError` collects them for callers
//! that chain several operations (the CLI does).

use thiserror::Error;

use crate::config::ConfigError;
use crate::flatten::UnflattenError;
use crate::path::PathError;
use crate::schema::SchemaError;
use crate::text::ParseError;

/// Any error raised by this crate
#[derive(Debug, Error)]
pub enum TreeError {
    #[error(transparent)]
    Path(#[from] PathError),

    #[error(transparent)]
    Unflatten(#[from] UnflattenError),

    #[error(transparent)]
    Schema(#[from] SchemaError),

    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Config(#[from] ConfigError),
}

impl TreeError {
    /// Returns the stable error code of the underlying error
    pub fn code(&self) -> &'static str {
        match self {
            TreeError::Path(e) => e.code(),
            TreeError::Unflatten(e) => e.code(),
            TreeError::Schema(e) => e.code().code(),
            TreeError::Parse(e) => e.code(),
            TreeError::Config(e) => e.code(),
        }
    }
}

/// Result type for chained operations
pub type TreeResult<T> = Result<T, TreeError>;
