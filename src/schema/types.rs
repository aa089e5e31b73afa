//! Schema type definitions
//!
//! A schema is a tree of `SchemaNode`s:
//! - `Field`: constraints on one value (kind, required, regex, nested properties)
//! - `Object`: declared fields of a mapping, checked in declaration order
//! - `Array`: a shape every element of a sequence must satisfy
//!
//! Undeclared fields are ignored.

use regex::Regex;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::errors::{SchemaError, SchemaResult};

/// Kind a field value must have
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldKind {
    String,
    Number,
    Boolean,
    Object,
}

impl FieldKind {
    /// Returns the type name for error messages
    pub fn type_name(&self) -> &'static str {
        match self {
            FieldKind::String => "string",
            FieldKind::Number => "number",
            FieldKind::Boolean => "boolean",
            FieldKind::Object => "object",
        }
    }

    /// Parses a type name, ignoring ASCII case (`"String"` and `"string"` both work)
    pub fn from_name(name: &str) -> Option<Self> {
        [
            FieldKind::String,
            FieldKind::Number,
            FieldKind::Boolean,
            FieldKind::Object,
        ]
        .into_iter()
        .find(|kind| kind.type_name().eq_ignore_ascii_case(name))
    }

    /// Returns true if `value` has this kind. Null never matches.
    ///
    /// The validator only applies this to String, Number and Boolean; an
    /// Object field is checked through its properties.
    pub fn matches(&self, value: &Value) -> bool {
        match self {
            FieldKind::String => value.is_string(),
            FieldKind::Number => value.is_number(),
            FieldKind::Boolean => value.is_boolean(),
            FieldKind::Object => value.is_object(),
        }
    }
}

/// Constraints on a single value
#[derive(Debug, Clone)]
pub struct FieldSchema {
    pub kind: FieldKind,
    pub required: bool,
    /// Unanchored; applied to string values only
    pub pattern: Option<Regex>,
    /// Fields of a mapping value, used with `FieldKind::Object`
    pub properties: Option<ObjectSchema>,
}

impl FieldSchema {
    /// Optional field of the given kind
    pub fn new(kind: FieldKind) -> Self {
        Self {
            kind,
            required: false,
            pattern: None,
            properties: None,
        }
    }

    pub fn string() -> Self {
        Self::new(FieldKind::String)
    }

    pub fn number() -> Self {
        Self::new(FieldKind::Number)
    }

    pub fn boolean() -> Self {
        Self::new(FieldKind::Boolean)
    }

    pub fn object() -> Self {
        Self::new(FieldKind::Object)
    }

    /// Marks the field as required (absent and null both fail)
    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    /// Adds a pattern string values must match.
    ///
    /// # Errors
    ///
    /// Returns `TREEPATH_SCHEMA_INVALID_REGEX` if `pattern` does not compile.
    pub fn with_regex(mut self, pattern: &str) -> SchemaResult<Self> {
        let regex = Regex::new(pattern).map_err(|e| SchemaError::invalid_regex(pattern, &e))?;
        self.pattern = Some(regex);
        Ok(self)
    }

    /// Declares the fields of a mapping value
    pub fn with_properties(mut self, properties: ObjectSchema) -> Self {
        self.properties = Some(properties);
        self
    }
}

/// Declared fields of a mapping, in declaration order
#[derive(Debug, Clone, Default)]
pub struct ObjectSchema {
    fields: Vec<(String, SchemaNode)>,
}

impl ObjectSchema {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder form of `insert`
    pub fn field(mut self, name: impl Into<String>, node: impl Into<SchemaNode>) -> Self {
        self.insert(name, node);
        self
    }

    /// Declares `name`, replacing an earlier declaration in place
    pub fn insert(&mut self, name: impl Into<String>, node: impl Into<SchemaNode>) {
        let name = name.into();
        let node = node.into();
        match self.fields.iter_mut().find(|(existing, _)| *existing == name) {
            Some((_, slot)) => *slot = node,
            None => self.fields.push((name, node)),
        }
    }

    pub fn get(&self, name: &str) -> Option<&SchemaNode> {
        self.fields
            .iter()
            .find(|(existing, _)| existing == name)
            .map(|(_, node)| node)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &SchemaNode)> {
        self.fields.iter().map(|(name, node)| (name.as_str(), node))
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

/// A node of a schema tree
#[derive(Debug, Clone)]
pub enum SchemaNode {
    Field(FieldSchema),
    Object(ObjectSchema),
    /// Every element of a sequence must satisfy the inner node
    Array(Box<SchemaNode>),
}

impl SchemaNode {
    /// Sequence whose elements satisfy `element`
    pub fn array_of(element: impl Into<SchemaNode>) -> Self {
        SchemaNode::Array(Box::new(element.into()))
    }
}

impl From<FieldSchema> for SchemaNode {
    fn from(field: FieldSchema) -> Self {
        SchemaNode::Field(field)
    }
}

impl From<ObjectSchema> for SchemaNode {
    fn from(object: ObjectSchema) -> Self {
        SchemaNode::Object(object)
    }
}
