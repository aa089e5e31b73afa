//! JSON I/O handling for CLI
//!
//! - Input: one JSON document from a file or stdin
//! - Output: one pretty-printed JSON document on stdout
//! - UTF-8 only

use std::fs;
use std::io::{self, Read, Write};
use std::path::Path;

use serde_json::Value;

use super::errors::{CliError, CliResult};

/// Read the raw input text from `path`, or stdin when absent
pub fn read_input(path: Option<&Path>) -> CliResult<String> {
    match path {
        Some(path) => fs::read_to_string(path).map_err(|e| {
            CliError::io_error(format!("Failed to read '{}': {}", path.display(), e))
        }),
        None => {
            let mut text = String::new();
            io::stdin().lock().read_to_string(&mut text)?;
            Ok(text)
        }
    }
}

/// Write a JSON value to stdout
pub fn write_json(value: &Value) -> CliResult<()> {
    let mut stdout = io::stdout();
    write_json_to(&mut stdout, value)
}

/// Write a JSON value to `writer`, newline terminated
pub fn write_json_to<W: Write>(writer: &mut W, value: &Value) -> CliResult<()> {
    serde_json::to_writer_pretty(&mut *writer, value)?;
    writeln!(writer)?;
    writer.flush()?;

    Ok(())
}
