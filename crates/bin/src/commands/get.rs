//! Get command - prints the value at a dotted path.

use nesteddict::nested::Value;

use crate::cli::GetArgs;
use crate::output::{OutputFormat, print_json};

/// Run the get command
pub fn run(args: &GetArgs, format: OutputFormat) -> Result<(), Box<dyn std::error::Error>> {
    let dict = super::load_dict(&args.input)?;
    let value = dict.get(args.path.as_str())?;

    match (format, value) {
        (OutputFormat::Human, Value::Map(_) | Value::List(_)) | (OutputFormat::Json, _) => {
            print_json(&serde_json::Value::from(value.clone()), format)?;
        }
        (OutputFormat::Human, leaf) => println!("{leaf}"),
    }

    Ok(())
}
