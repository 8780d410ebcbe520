//! Chunk set artifact writer

use anyhow::{Context, Result};
use coursechunk_core::ChunkSet;
use std::fs;
use std::path::{Path, PathBuf};

/// Write `course` to `<out_dir>/<course_id>.json`, replacing any previous
/// artifact, and return the written path.
///
/// Non-ASCII text is stored verbatim rather than escaped.
pub fn write_course(course: &ChunkSet, out_dir: &Path, pretty: bool) -> Result<PathBuf> {
    fs::create_dir_all(out_dir)
        .with_context(|| format!("Failed to create output directory: {}", out_dir.display()))?;

    let mut json = if pretty {
        serde_json::to_string_pretty(course)?
    } else {
        serde_json::to_string(course)?
    };
    json.push('\n');

    let path = out_dir.join(course.file_name());
    fs::write(&path, json).with_context(|| format!("Failed to write {}", path.display()))?;

    Ok(path)
}
