//! Path queries
//!
//! Two resolvers over the same trees:
//!
//! - `query` splits on `.` only and treats every segment as a literal
//!   mapping key. `cars[0]` is looked up as a key named `cars[0]`, so it
//!   never reaches into sequences.
//! - `resolve` decodes the path with `PathCodec` and walks both keys and
//!   indices. A malformed path is an error rather than a miss.
//!
//! Both return `None` at the first missing step.

mod resolver;

pub use resolver::{query, resolve};
