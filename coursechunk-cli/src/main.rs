//! coursechunk command-line tool

use anyhow::Result;
use clap::Parser;
use coursechunk_cli::commands::Commands;

/// Chunk lecture transcripts into overlapping course material
#[derive(Debug, Parser)]
#[command(name = "coursechunk")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    cli.command.execute()
}
