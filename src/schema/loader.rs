//! Schema loading
//!
//! Schemas are described in JSON:
//! - `[node]`: a sequence whose elements satisfy `node`
//! - `{"type": "string", "required": true, "regex": "...", "properties": {...}}`:
//!   a field. `type` is one of string/number/boolean/object, any case.
//! - any other object: declared fields, each value a node
//!
//! `SchemaLoader` also keeps named schemas loaded from `<name>.json` files
//! in one directory. Names are immutable once registered.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use serde_json::{Map, Value};

use super::errors::{SchemaError, SchemaResult};
use super::types::{FieldKind, FieldSchema, ObjectSchema, SchemaNode};
use super::validator::{label, make_path};
use crate::value::kind_name;

/// Schema loader that reads schema files from disk and maintains an in-memory registry.
pub struct SchemaLoader {
    /// Directory containing schema files
    schema_dir: PathBuf,
    /// Loaded schemas indexed by name
    schemas: HashMap<String, SchemaNode>,
}

impl SchemaLoader {
    /// Creates a loader for `<schema_dir>/<name>.json` files.
    pub fn new(schema_dir: &Path) -> Self {
        Self {
            schema_dir: schema_dir.to_path_buf(),
            schemas: HashMap::new(),
        }
    }

    /// Returns the schema directory path.
    pub fn schema_dir(&self) -> &Path {
        &self.schema_dir
    }

    /// Loads every `.json` file in the schema directory, named by file stem.
    ///
    /// Files are loaded in path order. Returns the number of schemas loaded.
    ///
    /// # Errors
    ///
    /// - `TREEPATH_SCHEMA_IO` if the directory or a file cannot be read
    /// - `TREEPATH_SCHEMA_MALFORMED` / `TREEPATH_SCHEMA_INVALID_REGEX` for a bad file
    /// - `TREEPATH_SCHEMA_DUPLICATE` if a name is already registered
    pub fn load_all(&mut self) -> SchemaResult<usize> {
        let dir_name = self.schema_dir.display().to_string();
        let entries = fs::read_dir(&self.schema_dir).map_err(|e| SchemaError::io(&dir_name, &e))?;

        let mut paths = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|e| SchemaError::io(&dir_name, &e))?;
            let path = entry.path();

            // Skip non-JSON files
            if path.extension().map_or(true, |ext| ext != "json") {
                continue;
            }
            paths.push(path);
        }
        paths.sort();

        for path in &paths {
            let name = path
                .file_stem()
                .map(|stem| stem.to_string_lossy().into_owned())
                .unwrap_or_default();
            let schema = Self::load_file(path).map_err(|e| e.with_schema_name(&name))?;
            self.register(name, schema)?;
        }

        Ok(paths.len())
    }

    /// Registers a schema under `name`.
    pub fn register(&mut self, name: impl Into<String>, schema: SchemaNode) -> SchemaResult<()> {
        let name = name.into();

        // Check for immutability violation
        if self.schemas.contains_key(&name) {
            return Err(SchemaError::duplicate(name));
        }

        self.schemas.insert(name, schema);
        Ok(())
    }

    /// Gets a schema by name.
    pub fn get(&self, name: &str) -> Option<&SchemaNode> {
        self.schemas.get(name)
    }

    /// Checks if a schema exists.
    pub fn exists(&self, name: &str) -> bool {
        self.schemas.contains_key(name)
    }

    /// Registered names, sorted.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<_> = self.schemas.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Returns the number of loaded schemas.
    pub fn len(&self) -> usize {
        self.schemas.len()
    }

    pub fn is_empty(&self) -> bool {
        self.schemas.is_empty()
    }

    /// Reads and parses one schema file.
    pub fn load_file(path: &Path) -> SchemaResult<SchemaNode> {
        let content = fs::read_to_string(path)
            .map_err(|e| SchemaError::io(path.display().to_string(), &e))?;

        let description: Value = serde_json::from_str(&content).map_err(|e| {
            SchemaError::malformed(path.display().to_string(), format!("Invalid JSON: {}", e))
        })?;

        Self::parse(&description)
    }

    /// Parses a schema from JSON text.
    pub fn parse_str(text: &str) -> SchemaResult<SchemaNode> {
        let description: Value = serde_json::from_str(text)
            .map_err(|e| SchemaError::malformed("<text>", format!("Invalid JSON: {}", e)))?;
        Self::parse(&description)
    }

    /// Builds a schema from its JSON description.
    pub fn parse(description: &Value) -> SchemaResult<SchemaNode> {
        parse_node(description, "")
    }
}

fn parse_node(value: &Value, path: &str) -> SchemaResult<SchemaNode> {
    match value {
        Value::Array(items) => match items.as_slice() {
            [element] => Ok(SchemaNode::array_of(parse_node(element, &format!("{}[0]", path))?)),
            _ => Err(SchemaError::malformed(
                label(path),
                format!("array shape needs exactly one element, found {}", items.len()),
            )),
        },
        Value::Object(map) if map.get("type").is_some_and(Value::is_string) => {
            parse_field(map, path).map(SchemaNode::Field)
        }
        Value::Object(map) => parse_object(map, path).map(SchemaNode::Object),
        other => Err(SchemaError::malformed(
            label(path),
            format!("expected object or array, found {}", kind_name(other)),
        )),
    }
}

fn parse_object(map: &Map<String, Value>, prefix: &str) -> SchemaResult<ObjectSchema> {
    let mut schema = ObjectSchema::new();
    for (name, value) in map {
        let node = parse_node(value, &make_path(prefix, name))?;
        schema.insert(name.clone(), node);
    }
    Ok(schema)
}

fn parse_field(map: &Map<String, Value>, path: &str) -> SchemaResult<FieldSchema> {
    let type_name = map.get("type").and_then(Value::as_str).unwrap_or_default();
    let kind = FieldKind::from_name(type_name).ok_or_else(|| {
        SchemaError::malformed(label(path), format!("unknown type '{}'", type_name))
    })?;

    let mut field = FieldSchema::new(kind);
    for (member, value) in map {
        match member.as_str() {
            "type" => {}
            "required" => {
                field.required = value.as_bool().ok_or_else(|| {
                    SchemaError::malformed(label(path), "'required' must be a boolean")
                })?;
            }
            "regex" => {
                let pattern = value.as_str().ok_or_else(|| {
                    SchemaError::malformed(label(path), "'regex' must be a string")
                })?;
                field = field.with_regex(pattern)?;
            }
            "properties" => {
                let properties = value.as_object().ok_or_else(|| {
                    SchemaError::malformed(label(path), "'properties' must be an object")
                })?;
                field.properties = Some(parse_object(properties, path)?);
            }
            other => {
                return Err(SchemaError::malformed(
                    label(path),
                    format!("unknown member '{}'", other),
                ))
            }
        }
    }

    if field.properties.is_some() && kind != FieldKind::Object {
        return Err(SchemaError::malformed(
            label(path),
            format!("'properties' requires type object, found {}", kind.type_name()),
        ));
    }

    Ok(field)
}
