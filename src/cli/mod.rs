//! CLI module for treepath
//!
//! Provides command-line access to:
//! - flatten / unflatten: tree <-> flat keys
//! - query / resolve: path lookups
//! - validate: schema checks
//! - kv: dotted key-value form
//! - check: well-formedness of the input text

mod args;
mod commands;
mod errors;
mod io;

pub use args::{Cli, Command};
pub use commands::{execute, load_config, run, run_command};
pub use errors::{CliError, CliErrorCode, CliResult};
pub use io::{read_input, write_json, write_json_to};
