//! CLI-specific error types
//!
//! Library errors keep their own codes; the CLI only adds codes for its
//! own I/O and input-shape failures.

use std::fmt;
use std::io;

use crate::config::ConfigError;
use crate::error::TreeError;
use crate::flatten::UnflattenError;
use crate::path::PathError;
use crate::schema::SchemaError;
use crate::text::ParseError;

/// CLI error codes
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CliErrorCode {
    /// I/O error (stdin/stdout/input file)
    IoError,
    /// Input document has the wrong shape for the command
    InvalidInput,
    /// Error raised by a library operation, with its code
    Operation(&'static str),
}

impl CliErrorCode {
    /// Get the error code string
    pub fn code(&self) -> &'static str {
        match self {
            Self::IoError => "TREEPATH_CLI_IO_ERROR",
            Self::InvalidInput => "TREEPATH_CLI_INVALID_INPUT",
            Self::Operation(code) => *code,
        }
    }
}

/// CLI error
#[derive(Debug)]
pub struct CliError {
    code: CliErrorCode,
    message: String,
}

impl CliError {
    /// Create a new CLI error
    pub fn new(code: CliErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    /// I/O error
    pub fn io_error(msg: impl Into<String>) -> Self {
        Self::new(CliErrorCode::IoError, msg)
    }

    /// Input of the wrong shape
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::new(CliErrorCode::InvalidInput, msg)
    }

    /// Get the error code
    pub fn code(&self) -> &CliErrorCode {
        &self.code
    }

    /// Get the error code string
    pub fn code_str(&self) -> &'static str {
        self.code.code()
    }

    /// Get the error message
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code.code(), self.message)
    }
}

impl std::error::Error for CliError {}

impl From<io::Error> for CliError {
    fn from(e: io::Error) -> Self {
        Self::io_error(e.to_string())
    }
}

impl From<serde_json::Error> for CliError {
    fn from(e: serde_json::Error) -> Self {
        Self::io_error(format!("JSON error: {}", e))
    }
}

impl From<TreeError> for CliError {
    fn from(e: TreeError) -> Self {
        let message = match &e {
            // Schema errors render their own code first
            TreeError::Schema(inner) => inner.message().to_string(),
            other => other.to_string(),
        };
        Self::new(CliErrorCode::Operation(e.code()), message)
    }
}

impl From<PathError> for CliError {
    fn from(e: PathError) -> Self {
        TreeError::from(e).into()
    }
}

impl From<UnflattenError> for CliError {
    fn from(e: UnflattenError) -> Self {
        TreeError::from(e).into()
    }
}

impl From<SchemaError> for CliError {
    fn from(e: SchemaError) -> Self {
        TreeError::from(e).into()
    }
}

impl From<ParseError> for CliError {
    fn from(e: ParseError) -> Self {
        TreeError::from(e).into()
    }
}

impl From<ConfigError> for CliError {
    fn from(e: ConfigError) -> Self {
        TreeError::from(e).into()
    }
}

/// CLI result type
pub type CliResult<T> = Result<T, CliError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_library_codes_preserved() {
        let err: CliError = SchemaError::duplicate("users").into();
        assert_eq!(err.code_str(), "TREEPATH_SCHEMA_DUPLICATE");
        assert_eq!(err.to_string().matches("TREEPATH_SCHEMA_DUPLICATE").count(), 1);

        let err: CliError = crate::text::parse("{").unwrap_err().into();
        assert_eq!(err.code(), &CliErrorCode::Operation("TREEPATH_INVALID_TEXT"));
    }

    #[test]
    fn test_cli_codes() {
        assert_eq!(CliError::invalid_input("x").code_str(), "TREEPATH_CLI_INVALID_INPUT");
        let err: CliError = io::Error::new(io::ErrorKind::NotFound, "gone").into();
        assert_eq!(err.to_string(), "TREEPATH_CLI_IO_ERROR: gone");
    }
}
