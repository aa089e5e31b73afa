//! Schema validator
//!
//! Validation semantics:
//! - Every declared field is checked, in declaration order
//! - Undeclared fields are ignored
//! - An absent field passes unless it is required
//! - Null fails a required field and every String/Number/Boolean check
//! - An Object field only requires a mapping when it declares properties
//! - Patterns are unanchored and only apply to strings
//! - Sequences are checked element by element; an empty sequence passes
//!
//! Validation stops at the first violation. The validator never mutates
//! the value it checks.

use serde_json::{Map, Value};

use super::errors::ValidationDetails;
use super::types::{FieldKind, FieldSchema, ObjectSchema, SchemaNode};
use crate::value::kind_name;

/// Path label for the value being validated
const ROOT: &str = "$root";

/// Checks values against one schema tree.
pub struct SchemaValidator<'a> {
    schema: &'a SchemaNode,
}

impl<'a> SchemaValidator<'a> {
    /// Creates a validator for `schema`.
    pub fn new(schema: &'a SchemaNode) -> Self {
        Self { schema }
    }

    /// Returns true if `data` satisfies the schema.
    pub fn validate(&self, data: &Value) -> bool {
        self.check(data).is_ok()
    }

    /// Checks `data` against the schema.
    ///
    /// # Errors
    ///
    /// Returns the first violation found:
    /// - a required field that is absent or null
    /// - a value of the wrong kind (including a non-mapping where fields
    ///   are declared and a non-sequence where an array shape is declared)
    /// - a string not matching its pattern
    pub fn check(&self, data: &Value) -> Result<(), ValidationDetails> {
        check_node(Some(data), self.schema, "")
    }
}

/// Checks a value that may be absent. Only `FieldSchema` can make absence fail.
fn check_node(value: Option<&Value>, node: &SchemaNode, path: &str) -> Result<(), ValidationDetails> {
    match (node, value) {
        (SchemaNode::Field(field), _) => check_field(value, field, path),
        (_, None) => Ok(()),
        (SchemaNode::Object(fields), Some(value)) => {
            let obj = value
                .as_object()
                .ok_or_else(|| type_error(path, "object", value))?;
            check_object(obj, fields, path)
        }
        (SchemaNode::Array(element), Some(value)) => {
            let arr = value
                .as_array()
                .ok_or_else(|| type_error(path, "array", value))?;

            for (i, elem) in arr.iter().enumerate() {
                let elem_path = format!("{}[{}]", path, i);
                check_node(Some(elem), element, &elem_path)?;
            }
            Ok(())
        }
    }
}

/// Checks the declared fields of a mapping.
fn check_object(
    obj: &Map<String, Value>,
    fields: &ObjectSchema,
    path_prefix: &str,
) -> Result<(), ValidationDetails> {
    for (field_name, node) in fields.iter() {
        let field_path = make_path(path_prefix, field_name);
        check_node(obj.get(field_name), node, &field_path)?;
    }
    Ok(())
}

/// Checks one value against a field schema.
fn check_field(value: Option<&Value>, field: &FieldSchema, path: &str) -> Result<(), ValidationDetails> {
    let value = match value {
        Some(value) => value,
        None if field.required => return Err(ValidationDetails::missing_field(label(path))),
        None => return Ok(()),
    };

    if value.is_null() && field.required {
        return Err(ValidationDetails::null_value(label(path)));
    }

    match (field.kind, &field.properties) {
        // Object kind alone accepts any value; declared properties need a mapping
        (FieldKind::Object, None) => {}
        (FieldKind::Object, Some(properties)) => {
            let obj = value
                .as_object()
                .ok_or_else(|| type_error(path, "object", value))?;
            check_object(obj, properties, path)?;
        }
        (kind, _) if !kind.matches(value) => {
            return Err(type_error(path, kind.type_name(), value));
        }
        _ => {}
    }

    if let (Some(pattern), Some(s)) = (&field.pattern, value.as_str()) {
        if !pattern.is_match(s) {
            return Err(ValidationDetails::pattern_mismatch(label(path), pattern.as_str(), s));
        }
    }

    Ok(())
}

/// Creates a field path from prefix and field name.
pub(super) fn make_path(prefix: &str, field: &str) -> String {
    if prefix.is_empty() {
        field.to_string()
    } else {
        format!("{}.{}", prefix, field)
    }
}

pub(super) fn label(path: &str) -> &str {
    if path.is_empty() {
        ROOT
    } else {
        path
    }
}

/// Creates a type mismatch detail.
fn type_error(path: &str, expected: &str, actual: &Value) -> ValidationDetails {
    ValidationDetails::type_mismatch(label(path), expected, kind_name(actual))
}
