//! Plain text output formatter

use super::OutputFormatter;
use anyhow::Result;
use coursechunk_core::ChunkSet;
use std::io::Write;

/// Plain text formatter - one chunk per paragraph under a course header
pub struct TextFormatter<W: Write> {
    writer: W,
}

impl<W: Write> TextFormatter<W> {
    /// Create a new text formatter
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    /// Consume the formatter and return the underlying writer
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write + Send + Sync> OutputFormatter for TextFormatter<W> {
    fn format_course(&mut self, course: &ChunkSet) -> Result<()> {
        writeln!(
            self.writer,
            "[{}] {} chunk(s)",
            course.course_id, course.total_chunks
        )?;
        for chunk in &course.chunks {
            writeln!(self.writer)?;
            writeln!(self.writer, "{}", chunk)?;
        }
        writeln!(self.writer)?;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}
