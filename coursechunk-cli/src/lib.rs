//! coursechunk CLI library
//!
//! This library provides the command-line interface for chunking raw
//! transcripts into course material and registering them in the shared
//! course state record.

pub mod commands;
pub mod config;
pub mod error;
pub mod input;
pub mod logging;
pub mod output;
pub mod progress;

pub use error::{CliError, CliResult};
