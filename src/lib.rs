//! treepath - path-addressable transformation of JSON trees
//!
//! - `flatten` / `unflatten`: nested tree <-> single-level map of flat keys
//!   (`cars[0].name`)
//! - `query` / `resolve`: look up a sub-tree by path
//! - `schema`: validate a tree against a declarative shape
//! - `ops`: merge, filter, transform, sort and pluck
//!
//! The free functions use default settings. `Toolkit` carries a
//! `ToolkitConfig` (empty-container and conflict policies, logging) and
//! exposes the same operations as methods.
//!
//! ```
//! use serde_json::json;
//!
//! let tree = json!({"name": "John", "cars": [{"name": "Ford"}]});
//! let flat = treepath::flatten(&tree, "");
//! assert_eq!(flat["cars[0].name"], "Ford");
//! assert_eq!(treepath::unflatten(&flat).unwrap(), tree);
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod flatten;
pub mod observability;
pub mod ops;
pub mod path;
pub mod query;
pub mod schema;
pub mod text;
pub mod toolkit;
pub mod value;

pub use config::{ConfigError, ToolkitConfig};
pub use error::{TreeError, TreeResult};
pub use flatten::{
    flatten, to_kv, unflatten, ConflictPolicy, EmptyContainers, FlatMap, Flattener, KvStore,
    UnflattenError, UnflattenResult, Unflattener,
};
pub use ops::{filter, merge, pluck, sort, transform, SortOrder};
pub use path::{KeyStyle, Path, PathCodec, PathError, PathResult, Step};
pub use query::{query, resolve};
pub use schema::{
    check_schema, validate_schema, FieldKind, FieldSchema, ObjectSchema, SchemaError,
    SchemaLoader, SchemaNode, SchemaResult, SchemaValidator, ValidationDetails,
};
pub use text::{is_valid, parse, ParseError};
pub use toolkit::Toolkit;
