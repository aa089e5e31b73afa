//! Schema validation for trees
//!
//! A schema describes the expected shape of a value: field kinds, required
//! fields, string patterns, nested mappings and element shapes of
//! sequences. Schemas are built with the builder methods in `types` or
//! parsed from JSON by `SchemaLoader`, and are read-only afterwards.
//!
//! # Design Principles
//!
//! - Declared fields only; undeclared fields pass
//! - No coercion: `"1"` is not a number
//! - Deterministic, first violation wins

mod errors;
mod loader;
mod types;
mod validator;

pub use errors::{SchemaError, SchemaErrorCode, SchemaResult, ValidationDetails};
pub use loader::SchemaLoader;
pub use types::{FieldKind, FieldSchema, ObjectSchema, SchemaNode};
pub use validator::SchemaValidator;

use serde_json::Value;

/// Returns true if `data` satisfies `schema`.
pub fn validate_schema(data: &Value, schema: &SchemaNode) -> bool {
    SchemaValidator::new(schema).validate(data)
}

/// Checks `data` against `schema`, reporting the first violation.
pub fn check_schema(data: &Value, schema: &SchemaNode) -> Result<(), ValidationDetails> {
    SchemaValidator::new(schema).check(data)
}
