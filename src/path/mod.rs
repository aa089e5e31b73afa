//! Path encoding for nested trees
//!
//! A location inside a tree is a `Path`: an ordered list of `Step`s, each
//! either a mapping key or a sequence index. `PathCodec` renders a path as a
//! single flat key (`cars[0].name`) and decodes such keys back.
//!
//! The flattener, the unflattener and `query::resolve` all go through this
//! module so they agree on how a key identifies a node.

mod codec;
mod errors;
mod step;

pub use codec::{KeyStyle, PathCodec};
pub use errors::{PathError, PathResult};
pub use step::{Path, Step};
