//! CLI command implementations

use anyhow::Result;
use clap::Subcommand;

pub mod chunk;
pub mod chunking_args;
pub mod generate_config;
pub mod ingest;
pub mod status;

pub use chunking_args::{ChunkingArgs, GranularityArg};

/// Available CLI commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Chunk every transcript in the raw directory and register the courses
    Ingest(ingest::IngestArgs),

    /// Chunk arbitrary files and print the result
    Chunk(chunk::ChunkArgs),

    /// Show the registered courses from the state file
    Status(status::StatusArgs),

    /// Write a configuration template
    GenerateConfig(generate_config::GenerateConfigArgs),
}

impl Commands {
    /// Run the selected command
    pub fn execute(&self) -> Result<()> {
        match self {
            Commands::Ingest(args) => args.execute(),
            Commands::Chunk(args) => args.execute(),
            Commands::Status(args) => args.execute(),
            Commands::GenerateConfig(args) => args.execute(),
        }
    }
}
