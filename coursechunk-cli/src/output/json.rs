//! JSON output formatter

use super::OutputFormatter;
use anyhow::Result;
use coursechunk_core::ChunkSet;
use std::io::Write;

/// JSON formatter - outputs courses as a JSON array of chunk sets
pub struct JsonFormatter<W: Write> {
    writer: W,
    courses: Vec<ChunkSet>,
    pretty: bool,
}

impl<W: Write> JsonFormatter<W> {
    /// Create a new JSON formatter
    pub fn new(writer: W, pretty: bool) -> Self {
        Self {
            writer,
            courses: Vec::new(),
            pretty,
        }
    }

    /// Consume the formatter and return the underlying writer
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write + Send + Sync> OutputFormatter for JsonFormatter<W> {
    fn format_course(&mut self, course: &ChunkSet) -> Result<()> {
        self.courses.push(course.clone());
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        if self.pretty {
            serde_json::to_writer_pretty(&mut self.writer, &self.courses)?;
        } else {
            serde_json::to_writer(&mut self.writer, &self.courses)?;
        }
        writeln!(self.writer)?;
        self.writer.flush()?;
        Ok(())
    }
}
