//! Output formatting module

use anyhow::Result;
use coursechunk_core::ChunkSet;

/// Trait for output formatters
pub trait OutputFormatter: Send + Sync {
    /// Format and output the chunks of a single course
    fn format_course(&mut self, course: &ChunkSet) -> Result<()>;

    /// Finalize output (e.g., close JSON array)
    fn finish(&mut self) -> Result<()>;
}

pub mod course;
pub mod json;
pub mod markdown;
pub mod text;

pub use course::write_course;
pub use json::JsonFormatter;
pub use markdown::MarkdownFormatter;
pub use text::TextFormatter;
