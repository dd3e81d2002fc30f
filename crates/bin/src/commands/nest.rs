//! Nest command - rebuilds a nested object from dotted keys.

use nesteddict::NestedDict;

use crate::cli::InputArgs;
use crate::output::{OutputFormat, print_json};

/// Run the nest command
pub fn run(args: &InputArgs, format: OutputFormat) -> Result<(), Box<dyn std::error::Error>> {
    let flat = super::load_dict(args)?;
    let dict = nest(flat)?;
    print_json(&serde_json::Value::from(dict.into_nested()), format)?;
    Ok(())
}

/// Treat every top level key of `flat` as a dotted path.
fn nest(flat: NestedDict) -> nesteddict::Result<NestedDict> {
    Ok(NestedDict::from_dotted(flat.into_nested())?)
}
