//! Structured JSON logger
//!
//! - One log line = one event
//! - `event` first, then `severity`, then fields sorted by key
//! - Synchronous, no buffering
//! - Filtered by a minimum severity; disabled loggers write nothing

use std::fmt::{self, Write as _};
use std::io::{self, Write};

use serde::{Deserialize, Serialize};

use super::events::Event;

/// Log severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Severity {
    /// Per-operation detail
    Trace = 0,
    /// Normal operations
    Info = 1,
    /// Recoverable issues, e.g. a conflict resolved by overwriting
    Warn = 2,
    /// Operation failures
    Error = 3,
}

impl Severity {
    /// Returns the string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Trace => "TRACE",
            Severity::Info => "INFO",
            Severity::Warn => "WARN",
            Severity::Error => "ERROR",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A structured logger writing JSON lines to stderr.
///
/// The logger holds no buffers or handles, so it is `Copy` and can be shared
/// freely between threads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Logger {
    threshold: Option<Severity>,
}

impl Logger {
    /// Logger emitting events at `threshold` and above
    pub fn new(threshold: Severity) -> Self {
        Self {
            threshold: Some(threshold),
        }
    }

    /// Logger that never writes
    pub fn disabled() -> Self {
        Self { threshold: None }
    }

    /// Returns true if events of `severity` are written
    pub fn enabled(&self, severity: Severity) -> bool {
        self.threshold.is_some_and(|threshold| severity >= threshold)
    }

    /// Log an event with the given severity and fields
    pub fn log(&self, severity: Severity, event: &str, fields: &[(&str, &str)]) {
        if self.enabled(severity) {
            Self::log_to_writer(severity, event, fields, &mut io::stderr());
        }
    }

    /// Log a typed event at its own severity
    pub fn log_event(&self, event: Event, fields: &[(&str, &str)]) {
        self.log(event.severity(), event.as_str(), fields);
    }

    /// Writes one formatted line to `writer`. Write failures are ignored.
    pub fn log_to_writer<W: Write>(
        severity: Severity,
        event: &str,
        fields: &[(&str, &str)],
        writer: &mut W,
    ) {
        let line = Self::format_line(severity, event, fields);
        // One write per line
        if writer.write_all(line.as_bytes()).is_ok() {
            let _ = writer.flush();
        }
    }

    /// Formats one log line, newline included
    pub fn format_line(severity: Severity, event: &str, fields: &[(&str, &str)]) -> String {
        let mut ordered = fields.to_vec();
        ordered.sort_by(|a, b| a.0.cmp(b.0));

        let mut line = String::with_capacity(64 + fields.len() * 24);
        line.push('{');
        push_member(&mut line, "event", event);
        line.push(',');
        push_member(&mut line, "severity", severity.as_str());
        for (name, value) in ordered {
            line.push(',');
            push_member(&mut line, name, value);
        }
        line.push_str("}\n");
        line
    }
}

/// Appends `"name":"value"` with both sides JSON-escaped.
fn push_member(line: &mut String, name: &str, value: &str) {
    push_quoted(line, name);
    line.push(':');
    push_quoted(line, value);
}

fn push_quoted(line: &mut String, text: &str) {
    line.push('"');
    for c in text.chars() {
        let escaped = match c {
            '"' => "\\\"",
            '\\' => "\\\\",
            '\n' => "\\n",
            '\r' => "\\r",
            '\t' => "\\t",
            c if c.is_control() => {
                let _ = write!(line, "\\u{:04x}", u32::from(c));
                continue;
            }
            c => {
                line.push(c);
                continue;
            }
        };
        line.push_str(escaped);
    }
    line.push('"');
}
