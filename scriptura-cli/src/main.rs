//! Scriptura command-line entry point

use clap::Parser;
use scriptura_cli::{commands::Commands, CliResult};

/// Normalize diplomatic transcriptions of Latin manuscripts
#[derive(Debug, Parser)]
#[command(name = "scriptura", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

fn main() -> CliResult<()> {
    let cli = Cli::parse();
    cli.command.execute()
}
