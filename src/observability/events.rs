//! Observable events
//!
//! Events are explicit and typed; each carries its own severity.

use std::fmt;

use super::logger::Severity;

/// Observable events in treepath
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    // Flatten / unflatten
    /// A tree was flattened
    FlattenComplete,
    /// A flat mapping was rebuilt into a tree
    UnflattenComplete,
    /// A container kind conflict was resolved by overwriting
    UnflattenConflictOverwritten,
    /// Unflatten failed (malformed key or rejected conflict)
    UnflattenRejected,

    // Paths and queries
    /// A flat key failed to decode
    PathRejected,
    /// A query or resolve found nothing
    QueryMiss,

    // Schemas
    /// Data failed schema validation
    SchemaMismatch,
    /// A schema was loaded or registered
    SchemaLoaded,

    // Configuration
    /// Configuration loaded from disk
    ConfigLoaded,
}

impl Event {
    /// Returns the string representation of the event
    pub fn as_str(&self) -> &'static str {
        match self {
            Event::FlattenComplete => "FLATTEN_COMPLETE",
            Event::UnflattenComplete => "UNFLATTEN_COMPLETE",
            Event::UnflattenConflictOverwritten => "UNFLATTEN_CONFLICT_OVERWRITTEN",
            Event::UnflattenRejected => "UNFLATTEN_REJECTED",
            Event::PathRejected => "PATH_REJECTED",
            Event::QueryMiss => "QUERY_MISS",
            Event::SchemaMismatch => "SCHEMA_MISMATCH",
            Event::SchemaLoaded => "SCHEMA_LOADED",
            Event::ConfigLoaded => "CONFIG_LOADED",
        }
    }

    /// Returns the severity the event is logged at
    pub fn severity(&self) -> Severity {
        match self {
            Event::FlattenComplete
            | Event::UnflattenComplete
            | Event::QueryMiss
            | Event::SchemaMismatch => Severity::Trace,
            Event::SchemaLoaded | Event::ConfigLoaded => Severity::Info,
            Event::UnflattenConflictOverwritten => Severity::Warn,
            Event::UnflattenRejected | Event::PathRejected => Severity::Error,
        }
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
