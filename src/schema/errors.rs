//! Schema error types
//!
//! Error codes:
//! - TREEPATH_SCHEMA_MALFORMED (REJECT)
//! - TREEPATH_SCHEMA_INVALID_REGEX (REJECT)
//! - TREEPATH_SCHEMA_DUPLICATE (REJECT)
//! - TREEPATH_SCHEMA_IO (REJECT)
//!
//! A value failing validation is not an error of this module: `check`
//! reports it as `ValidationDetails` and `validate` as `false`.

use std::fmt;

/// Schema-specific error codes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SchemaErrorCode {
    /// Schema description has the wrong shape
    SchemaMalformed,
    /// A `regex` member does not compile
    SchemaInvalidRegex,
    /// A schema name is already registered
    SchemaDuplicate,
    /// A schema file or directory could not be read
    SchemaIo,
}

impl SchemaErrorCode {
    /// Returns the string code
    pub fn code(&self) -> &'static str {
        match self {
            SchemaErrorCode::SchemaMalformed => "TREEPATH_SCHEMA_MALFORMED",
            SchemaErrorCode::SchemaInvalidRegex => "TREEPATH_SCHEMA_INVALID_REGEX",
            SchemaErrorCode::SchemaDuplicate => "TREEPATH_SCHEMA_DUPLICATE",
            SchemaErrorCode::SchemaIo => "TREEPATH_SCHEMA_IO",
        }
    }
}

impl fmt::Display for SchemaErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// First violation found while checking a value
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationDetails {
    /// Field path (e.g., "cars[1].models[0]"), `$root` for the value itself
    pub field: String,
    /// Expected type or condition
    pub expected: String,
    /// Actual value or type found
    pub actual: String,
}

impl ValidationDetails {
    pub fn new(field: impl Into<String>, expected: impl Into<String>, actual: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            expected: expected.into(),
            actual: actual.into(),
        }
    }

    pub fn missing_field(field: impl Into<String>) -> Self {
        Self::new(field, "field to be present", "missing")
    }

    pub fn null_value(field: impl Into<String>) -> Self {
        Self::new(field, "non-null value", "null")
    }

    pub fn type_mismatch(field: impl Into<String>, expected: impl Into<String>, actual: impl Into<String>) -> Self {
        Self::new(field, expected, actual)
    }

    pub fn pattern_mismatch(field: impl Into<String>, pattern: &str, actual: &str) -> Self {
        Self::new(
            field,
            format!("string matching /{}/", pattern),
            format!("'{}'", actual),
        )
    }
}

impl fmt::Display for ValidationDetails {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "field '{}': expected {}, got {}", self.field, self.expected, self.actual)
    }
}

impl std::error::Error for ValidationDetails {}

/// Schema error type with full context
#[derive(Debug)]
pub struct SchemaError {
    /// Error code
    code: SchemaErrorCode,
    /// Human-readable message
    message: String,
    /// Schema name if applicable
    schema_name: Option<String>,
}

impl SchemaError {
    /// Create an error for a schema description of the wrong shape
    pub fn malformed(location: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            code: SchemaErrorCode::SchemaMalformed,
            message: format!("Malformed schema at '{}': {}", location.into(), reason.into()),
            schema_name: None,
        }
    }

    /// Create an error for a pattern that does not compile
    pub fn invalid_regex(pattern: &str, err: &regex::Error) -> Self {
        Self {
            code: SchemaErrorCode::SchemaInvalidRegex,
            message: format!("Invalid regex '{}': {}", pattern, err),
            schema_name: None,
        }
    }

    /// Create an error for registering a name twice
    pub fn duplicate(name: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            code: SchemaErrorCode::SchemaDuplicate,
            message: format!("Schema '{}' is already registered", name),
            schema_name: Some(name),
        }
    }

    /// Create an error for an unreadable file or directory
    pub fn io(path: impl Into<String>, err: &std::io::Error) -> Self {
        Self {
            code: SchemaErrorCode::SchemaIo,
            message: format!("Failed to read '{}': {}", path.into(), err),
            schema_name: None,
        }
    }

    /// Attaches the name of the schema being loaded
    pub fn with_schema_name(mut self, name: impl Into<String>) -> Self {
        self.schema_name = Some(name.into());
        self
    }

    /// Returns the error code
    pub fn code(&self) -> SchemaErrorCode {
        self.code
    }

    /// Returns the error message
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns the schema name if applicable
    pub fn schema_name(&self) -> Option<&str> {
        self.schema_name.as_deref()
    }
}

impl fmt::Display for SchemaError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code.code(), self.message)?;
        if let Some(name) = &self.schema_name {
            write!(f, " [schema {}]", name)?;
        }
        Ok(())
    }
}

impl std::error::Error for SchemaError {}

/// Result type for schema operations
pub type SchemaResult<T> = Result<T, SchemaError>;
