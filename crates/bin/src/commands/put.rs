//! Put command - stores a value at a dotted path.

use crate::cli::PutArgs;
use crate::output::{OutputFormat, print_json};

/// Run the put command
pub fn run(args: &PutArgs, format: OutputFormat) -> Result<(), Box<dyn std::error::Error>> {
    let mut dict = super::load_dict(&args.input)?;

    let replaced = dict.put(args.path.as_str(), super::parse_value(&args.value))?;
    if let Some(old) = replaced {
        tracing::info!(path = %args.path, old = %old, "replaced existing value");
    }

    print_json(&serde_json::Value::from(dict.into_nested()), format)?;
    Ok(())
}
