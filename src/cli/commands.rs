//! CLI command implementations
//!
//! Each command turns the input document into one JSON output value.
//! Command-line flags override the matching configuration fields.

use std::path::Path;

use serde_json::{json, Value};

use crate::config::ToolkitConfig;
use crate::flatten::{ConflictPolicy, EmptyContainers};
use crate::text;
use crate::toolkit::Toolkit;

use super::args::{Cli, Command};
use super::errors::{CliError, CliResult};
use super::io::{read_input, write_json};

/// Parse arguments, run the command and print its output
pub fn run() -> CliResult<()> {
    let cli = Cli::parse_args();
    run_command(cli)
}

/// Run the command described by parsed CLI args
pub fn run_command(cli: Cli) -> CliResult<()> {
    let config = load_config(cli.config.as_deref())?;
    let input = read_input(cli.input.as_deref())?;
    let output = execute(config, &cli.command, &input)?;
    write_json(&output)
}

/// Load the configuration file, or defaults when none is given.
///
/// A file is loaded through `Toolkit::from_config_file`, which logs
/// `CONFIG_LOADED` when the file enables logging.
pub fn load_config(path: Option<&Path>) -> CliResult<ToolkitConfig> {
    match path {
        Some(path) => Ok(*Toolkit::from_config_file(path)?.config()),
        None => Ok(ToolkitConfig::default()),
    }
}

/// Run `command` on the raw input text
pub fn execute(config: ToolkitConfig, command: &Command, input: &str) -> CliResult<Value> {
    if let Command::Check = command {
        return Ok(check(input));
    }

    let document = text::parse(input)?;

    match command {
        Command::Flatten { prefix, preserve_empty } => {
            let config = if *preserve_empty {
                config.with_empty_containers(EmptyContainers::Preserve)
            } else {
                config
            };
            Ok(Value::Object(Toolkit::new(config).flatten(&document, prefix)))
        }
        Command::Unflatten { overwrite } => {
            let config = if *overwrite {
                config.with_conflicts(ConflictPolicy::Overwrite)
            } else {
                config
            };
            unflatten(&Toolkit::new(config), document)
        }
        Command::Query { path } => Ok(lookup(Toolkit::new(config).query(&document, path))),
        Command::Resolve { key } => Ok(lookup(Toolkit::new(config).resolve(&document, key)?)),
        Command::Validate { schema } => validate(&Toolkit::new(config), &document, schema),
        Command::Kv => Ok(Toolkit::new(config).to_kv(&document).to_value()),
        Command::Check => Ok(check(input)),
    }
}

fn unflatten(toolkit: &Toolkit, document: Value) -> CliResult<Value> {
    match document {
        Value::Object(flat) => Ok(toolkit.unflatten(&flat)?),
        other => Err(CliError::invalid_input(format!(
            "unflatten expects an object of flat keys, got {}",
            crate::value::kind_name(&other)
        ))),
    }
}

fn lookup(found: Option<&Value>) -> Value {
    json!({
        "found": found.is_some(),
        "value": found.cloned().unwrap_or(Value::Null),
    })
}

fn validate(toolkit: &Toolkit, document: &Value, schema_path: &Path) -> CliResult<Value> {
    let schema = toolkit.load_schema_file(schema_path)?;

    Ok(match toolkit.check_schema(document, &schema) {
        Ok(()) => json!({"valid": true}),
        Err(details) => json!({
            "valid": false,
            "violation": {
                "field": details.field,
                "expected": details.expected,
                "actual": details.actual,
            }
        }),
    })
}

fn check(input: &str) -> Value {
    match text::parse(input) {
        Ok(_) => json!({"valid": true}),
        Err(e) => json!({
            "valid": false,
            "error": e.to_string(),
            "line": e.line(),
            "column": e.column(),
        }),
    }
}
