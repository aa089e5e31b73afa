//! Observability for treepath
//!
//! Structured logging (JSON lines) and typed events.
//!
//! # Principles
//!
//! 1. Observability is read-only
//! 2. No side effects on the operations being observed
//! 3. No async or background threads
//! 4. Deterministic output
//!
//! # Usage
//!
//! ```
//! use treepath::observability::{Event, Logger, Severity};
//!
//! let logger = Logger::new(Severity::Warn);
//! logger.log_event(Event::UnflattenConflictOverwritten, &[("key", "a.b")]);
//! ```

mod events;
mod logger;

pub use events::Event;
pub use logger::{Logger, Severity};
