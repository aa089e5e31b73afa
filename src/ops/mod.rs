//! Single-pass tree operations
//!
//! Pure functions over `serde_json::Value`. None of them mutate their
//! input; each returns a new value.

mod filter;
mod merge;
mod pluck;
mod sort;
mod transform;

pub use filter::filter;
pub use merge::merge;
pub use pluck::pluck;
pub use sort::{sort, SortOrder};
pub use transform::transform;
