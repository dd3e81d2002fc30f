//! Subcommand implementations and the input handling they share.

use std::io;

use nesteddict::{NestedDict, nested::Value};

use crate::cli::InputArgs;

pub mod flatten;
pub mod get;
pub mod nest;
pub mod put;

/// Read the JSON document named by `input`, or stdin when no file is given.
pub fn read_json(input: &InputArgs) -> nesteddict::Result<serde_json::Value> {
    let text = match &input.file {
        Some(file) => {
            tracing::debug!(file = %file.display(), "reading input file");
            std::fs::read_to_string(file)?
        }
        None => {
            tracing::debug!("reading input from stdin");
            io::read_to_string(io::stdin())?
        }
    };
    Ok(serde_json::from_str(&text)?)
}

/// Read the input document as a dict; it must be a JSON object.
pub fn load_dict(input: &InputArgs) -> nesteddict::Result<NestedDict> {
    Ok(NestedDict::construct(read_json(input)?)?)
}

/// Interpret a command-line value as JSON, falling back to a plain string.
pub fn parse_value(raw: &str) -> Value {
    match serde_json::from_str::<serde_json::Value>(raw) {
        Ok(json) => Value::from(json),
        Err(_) => Value::from(raw),
    }
}
