use clap::Parser;
use tracing_subscriber::EnvFilter;

mod cli;
mod commands;
mod output;

use cli::{Cli, Commands};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Logs go to stderr, command output to stdout
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("nesteddict=info".parse()?))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    tracing::debug!(command = ?cli.command, format = ?cli.format, "parsed arguments");

    match &cli.command {
        Commands::Flatten(args) => commands::flatten::run(args, cli.format),
        Commands::Nest(args) => commands::nest::run(args, cli.format),
        Commands::Get(args) => commands::get::run(args, cli.format),
        Commands::Put(args) => commands::put::run(args, cli.format),
    }
}
