//! Step and Path types

use std::fmt;
use std::str::FromStr;

use serde_json::Value;

use super::codec::PathCodec;
use super::errors::PathError;

/// One selector within a path
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Step {
    /// Select a field of a mapping
    Key(String),
    /// Select an element of a sequence
    Index(usize),
}

impl Step {
    /// Create a key step
    pub fn key(name: impl Into<String>) -> Self {
        Step::Key(name.into())
    }

    /// Create an index step
    pub fn index(index: usize) -> Self {
        Step::Index(index)
    }

    /// Returns true for `Step::Index`
    pub fn is_index(&self) -> bool {
        matches!(self, Step::Index(_))
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Step::Key(name) => write!(f, "{}", name),
            Step::Index(index) => write!(f, "[{}]", index),
        }
    }
}

/// An ordered list of steps identifying one location in a tree.
///
/// `Display` renders the flat key and `FromStr` decodes one, so
/// `key.parse::<Path>()?.to_string() == key` for every well-formed key.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Path {
    steps: Vec<Step>,
}

impl Path {
    /// Create a path from steps
    pub fn new(steps: Vec<Step>) -> Self {
        Self { steps }
    }

    /// The empty path, addressing the tree itself
    pub fn root() -> Self {
        Self::default()
    }

    /// Returns the steps in order
    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    /// Consumes the path and returns its steps
    pub fn into_steps(self) -> Vec<Step> {
        self.steps
    }

    /// Number of steps
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// Returns true if the path has no steps
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Appends a step
    pub fn push(&mut self, step: Step) {
        self.steps.push(step);
    }

    /// Returns a copy extended with a key step
    pub fn join_key(&self, name: impl Into<String>) -> Self {
        let mut next = self.clone();
        next.push(Step::Key(name.into()));
        next
    }

    /// Returns a copy extended with an index step
    pub fn join_index(&self, index: usize) -> Self {
        let mut next = self.clone();
        next.push(Step::Index(index));
        next
    }

    /// Walks the path through `tree`.
    ///
    /// Returns `None` at the first step whose container kind does not match
    /// the step kind or whose key/index is absent.
    pub fn resolve<'a>(&self, tree: &'a Value) -> Option<&'a Value> {
        self.steps
            .iter()
            .try_fold(tree, |node, step| match (node, step) {
                (Value::Object(map), Step::Key(name)) => map.get(name),
                (Value::Array(items), Step::Index(index)) => items.get(*index),
                _ => None,
            })
    }
}

impl From<Vec<Step>> for Path {
    fn from(steps: Vec<Step>) -> Self {
        Self::new(steps)
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&PathCodec::encode(&self.steps))
    }
}

impl FromStr for Path {
    type Err = PathError;

    fn from_str(key: &str) -> Result<Self, Self::Err> {
        PathCodec::decode(key)
    }
}
