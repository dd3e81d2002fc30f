//! Flatten command - lists every leaf under its dotted path.

use std::collections::BTreeMap;

use nesteddict::nested::Value;

use crate::cli::InputArgs;
use crate::output::{OutputFormat, print_json, print_table};

/// Run the flatten command
pub fn run(args: &InputArgs, format: OutputFormat) -> Result<(), Box<dyn std::error::Error>> {
    let dict = super::load_dict(args)?;
    let dotted = dict.to_dotted();
    tracing::debug!(leaves = dotted.len(), "flattened input");

    match format {
        OutputFormat::Human => {
            if dotted.is_empty() {
                println!("No leaves found.");
                return Ok(());
            }
            print_table(&["PATH", "VALUE"], &rows(&dotted));
        }
        OutputFormat::Json => {
            print_json(&serde_json::to_value(&dotted)?, format)?;
        }
    }

    Ok(())
}

fn rows(dotted: &BTreeMap<String, Value>) -> Vec<Vec<String>> {
    dotted
        .iter()
        .map(|(path, value)| vec![path.clone(), value.to_string()])
        .collect()
}
