//! Chunk set artifact model

use serde::{Deserialize, Serialize};
use std::path::Path;

/// Ordered chunks of one course, as written to `<course_id>.json`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChunkSet {
    /// Stable course identifier, derived from the source file stem
    pub course_id: String,
    /// Number of chunks; always equal to `chunks.len()`
    pub total_chunks: usize,
    /// Chunks in reading order
    pub chunks: Vec<String>,
}

impl ChunkSet {
    /// Create a chunk set, deriving `total_chunks` from the chunks
    pub fn new(course_id: impl Into<String>, chunks: Vec<String>) -> Self {
        Self {
            course_id: course_id.into(),
            total_chunks: chunks.len(),
            chunks,
        }
    }

    /// Create a chunk set whose course id is the stem of `path`
    pub fn from_source(path: &Path, chunks: Vec<String>) -> Option<Self> {
        course_id_from_path(path).map(|course_id| Self::new(course_id, chunks))
    }

    /// Check the `total_chunks == chunks.len()` invariant (relevant after deserializing)
    pub fn is_consistent(&self) -> bool {
        self.total_chunks == self.chunks.len()
    }

    /// File name of the serialized artifact
    pub fn file_name(&self) -> String {
        format!("{}.json", self.course_id)
    }
}

/// Derive a course id from a source path (file name without extension)
pub fn course_id_from_path(path: &Path) -> Option<String> {
    path.file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .filter(|stem| !stem.is_empty())
}
