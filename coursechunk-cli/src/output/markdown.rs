//! Markdown output formatter

use super::OutputFormatter;
use anyhow::Result;
use coursechunk_core::ChunkSet;
use std::io::Write;

/// Markdown formatter - a section per course, a subsection per chunk
pub struct MarkdownFormatter<W: Write> {
    writer: W,
    chunk_count: usize,
}

impl<W: Write> MarkdownFormatter<W> {
    /// Create a new markdown formatter
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            chunk_count: 0,
        }
    }

    /// Consume the formatter and return the underlying writer
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write + Send + Sync> OutputFormatter for MarkdownFormatter<W> {
    fn format_course(&mut self, course: &ChunkSet) -> Result<()> {
        writeln!(self.writer, "## {}", course.course_id)?;
        writeln!(self.writer)?;
        for (index, chunk) in course.chunks.iter().enumerate() {
            writeln!(self.writer, "### Chunk {}", index + 1)?;
            writeln!(self.writer)?;
            writeln!(self.writer, "{}", chunk)?;
            writeln!(self.writer)?;
        }
        self.chunk_count += course.chunks.len();
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        writeln!(self.writer, "---")?;
        writeln!(self.writer, "*Total chunks: {}*", self.chunk_count)?;
        self.writer.flush()?;
        Ok(())
    }
}
