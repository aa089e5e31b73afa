//! CLI argument definitions using clap
//!
//! Commands:
//! - treepath flatten [--prefix P] [--preserve-empty]
//! - treepath unflatten [--overwrite]
//! - treepath query <PATH>
//! - treepath resolve <KEY>
//! - treepath validate --schema <FILE>
//! - treepath kv
//! - treepath check
//!
//! Every command reads one JSON document from `--input` or stdin.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// treepath - flatten, unflatten, query and validate JSON trees
#[derive(Parser, Debug)]
#[command(name = "treepath")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Path to configuration file
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Read the input document from a file instead of stdin
    #[arg(long, global = true)]
    pub input: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Flatten a tree into flat keys (cars[0].name)
    Flatten {
        /// Key prefix for every entry
        #[arg(long, default_value = "")]
        prefix: String,

        /// Keep empty arrays and objects as entries
        #[arg(long)]
        preserve_empty: bool,
    },

    /// Rebuild a tree from flat keys
    Unflatten {
        /// Let later keys overwrite conflicting earlier ones
        #[arg(long)]
        overwrite: bool,
    },

    /// Look up a dot-separated chain of object keys
    Query {
        /// Path such as address.city
        path: String,
    },

    /// Look up a flat key, indices included
    Resolve {
        /// Key such as cars[0].name
        key: String,
    },

    /// Validate the input against a schema file
    Validate {
        /// Path to the schema description
        #[arg(long)]
        schema: PathBuf,
    },

    /// Flatten into dotted key-value form (cars.0.name)
    Kv,

    /// Report whether the input is well-formed JSON
    Check,
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
