//! CLI argument definitions for the nesteddict binary.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::output::OutputFormat;

/// Convert JSON documents between nested and dotted-key form
#[derive(Parser, Debug)]
#[command(name = "nesteddict")]
#[command(about = "nesteddict: address nested JSON objects with dotted key paths")]
#[command(version)]
pub struct Cli {
    /// Output format
    #[arg(
        short,
        long,
        global = true,
        value_enum,
        default_value = "human",
        env = "NESTEDDICT_FORMAT"
    )]
    pub format: OutputFormat,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List every leaf of a JSON object under its dotted path
    Flatten(InputArgs),
    /// Rebuild a nested JSON object from dotted keys
    Nest(InputArgs),
    /// Print the value at a dotted path
    Get(GetArgs),
    /// Store a value at a dotted path and print the resulting object
    Put(PutArgs),
}

/// Where the JSON document is read from
#[derive(clap::Args, Debug)]
pub struct InputArgs {
    /// JSON file to read (stdin if omitted)
    pub file: Option<PathBuf>,
}

/// Arguments for the get command
#[derive(clap::Args, Debug)]
pub struct GetArgs {
    /// Dotted path, e.g. `user.profile.name`
    pub path: String,

    #[command(flatten)]
    pub input: InputArgs,
}

/// Arguments for the put command
#[derive(clap::Args, Debug)]
pub struct PutArgs {
    /// Dotted path, e.g. `user.profile.name`
    pub path: String,

    /// JSON value to store; anything that does not parse as JSON is stored as a string
    pub value: String,

    #[command(flatten)]
    pub input: InputArgs,
}
