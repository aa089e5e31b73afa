//! Toolkit facade
//!
//! `Toolkit` carries one `ToolkitConfig` and the logger built from it, and
//! exposes every operation of the crate as a method. The free functions in
//! each module are the same operations with default settings and no
//! logging.
//!
//! A toolkit is immutable once built, so one instance can serve any number
//! of callers.

use std::collections::HashMap;
use std::path::Path;

use serde_json::Value;

use crate::config::{ConfigError, ToolkitConfig};
use crate::flatten::{FlatMap, Flattener, KvStore, UnflattenResult, Unflattener};
use crate::observability::{Event, Logger};
use crate::ops::{self, SortOrder};
use crate::path::{KeyStyle, PathResult};
use crate::query;
use crate::schema::{SchemaLoader, SchemaNode, SchemaResult, SchemaValidator, ValidationDetails};
use crate::text::{self, ParseError};

/// Configured entry point to every operation
#[derive(Debug, Clone, Copy, Default)]
pub struct Toolkit {
    config: ToolkitConfig,
    logger: Logger,
}

impl Toolkit {
    pub fn new(config: ToolkitConfig) -> Self {
        Self {
            config,
            logger: config.logger(),
        }
    }

    /// Builds a toolkit from a configuration file.
    pub fn from_config_file(path: &Path) -> Result<Self, ConfigError> {
        let toolkit = Self::new(ToolkitConfig::load(path)?);
        toolkit
            .logger
            .log_event(Event::ConfigLoaded, &[("path", path.display().to_string().as_str())]);
        Ok(toolkit)
    }

    pub fn config(&self) -> &ToolkitConfig {
        &self.config
    }

    pub fn logger(&self) -> &Logger {
        &self.logger
    }

    /// Flattens `tree` under `prefix`.
    pub fn flatten(&self, tree: &Value, prefix: &str) -> FlatMap {
        let flattener = Flattener::new(KeyStyle::Bracketed, self.config.empty_containers);
        let flat = flattener.flatten(tree, prefix);
        self.logger.log_event(
            Event::FlattenComplete,
            &[("entries", flat.len().to_string().as_str()), ("prefix", prefix)],
        );
        flat
    }

    /// Rebuilds a tree under the configured conflict policy.
    pub fn unflatten(&self, flat: &FlatMap) -> UnflattenResult<Value> {
        let result = Unflattener::new(self.config.conflicts, &self.logger).unflatten(flat);
        match &result {
            Ok(_) => self.logger.log_event(
                Event::UnflattenComplete,
                &[("entries", flat.len().to_string().as_str())],
            ),
            Err(e) => self.logger.log_event(
                Event::UnflattenRejected,
                &[("code", e.code()), ("key", e.key()), ("reason", e.to_string().as_str())],
            ),
        }
        result
    }

    /// Dot-only literal lookup; see `query::query`.
    pub fn query<'a>(&self, tree: &'a Value, path: &str) -> Option<&'a Value> {
        let found = query::query(tree, path);
        if found.is_none() {
            self.logger.log_event(Event::QueryMiss, &[("path", path)]);
        }
        found
    }

    /// Bracket-aware lookup; see `query::resolve`.
    pub fn resolve<'a>(&self, tree: &'a Value, key: &str) -> PathResult<Option<&'a Value>> {
        match query::resolve(tree, key) {
            Ok(found) => {
                if found.is_none() {
                    self.logger.log_event(Event::QueryMiss, &[("path", key)]);
                }
                Ok(found)
            }
            Err(e) => {
                self.logger.log_event(
                    Event::PathRejected,
                    &[("code", e.code()), ("key", key), ("reason", e.to_string().as_str())],
                );
                Err(e)
            }
        }
    }

    pub fn validate_schema(&self, data: &Value, schema: &SchemaNode) -> bool {
        self.check_schema(data, schema).is_ok()
    }

    pub fn check_schema(&self, data: &Value, schema: &SchemaNode) -> Result<(), ValidationDetails> {
        SchemaValidator::new(schema).check(data).map_err(|details| {
            self.logger.log_event(
                Event::SchemaMismatch,
                &[
                    ("actual", details.actual.as_str()),
                    ("expected", details.expected.as_str()),
                    ("field", details.field.as_str()),
                ],
            );
            details
        })
    }

    /// Loads every schema in `dir` into a registry.
    pub fn load_schemas(&self, dir: &Path) -> SchemaResult<SchemaLoader> {
        let mut loader = SchemaLoader::new(dir);
        let count = loader.load_all()?;
        self.logger.log_event(
            Event::SchemaLoaded,
            &[
                ("count", count.to_string().as_str()),
                ("path", loader.schema_dir().display().to_string().as_str()),
            ],
        );
        Ok(loader)
    }

    /// Loads one schema file.
    pub fn load_schema_file(&self, path: &Path) -> SchemaResult<SchemaNode> {
        let schema = SchemaLoader::load_file(path)?;
        self.logger.log_event(
            Event::SchemaLoaded,
            &[("count", "1"), ("path", path.display().to_string().as_str())],
        );
        Ok(schema)
    }

    /// Dotted key-value store, honoring the empty-container policy.
    pub fn to_kv(&self, tree: &Value) -> KvStore {
        KvStore::from_tree_with(tree, self.config.empty_containers)
    }

    pub fn merge(&self, trees: &[Value]) -> Value {
        ops::merge(trees)
    }

    pub fn filter<F>(&self, tree: &Value, predicate: F) -> Value
    where
        F: Fn(&Value) -> bool,
    {
        ops::filter(tree, predicate)
    }

    pub fn transform(&self, tree: &Value, mapping: &HashMap<String, String>, nested: bool) -> Value {
        ops::transform(tree, mapping, nested)
    }

    pub fn sort(&self, items: &[Value], key: &str, order: SortOrder) -> Vec<Value> {
        ops::sort(items, key, order)
    }

    pub fn pluck(&self, items: &Value, key: &str) -> Vec<Value> {
        ops::pluck(items, key)
    }

    pub fn parse(&self, input: &str) -> Result<Value, ParseError> {
        text::parse(input)
    }

    pub fn is_valid(&self, input: &str) -> bool {
        text::is_valid(input)
    }
}
