//! File reading utilities

use crate::error::CliError;
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

/// File reader with UTF-8 validation
pub struct FileReader;

impl FileReader {
    /// Read a file as UTF-8 text
    pub fn read_text(path: &Path) -> Result<String> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read file: {}", path.display()))?;

        Ok(content)
    }

    /// Read a transcript, rejecting files that are empty or whitespace only
    pub fn read_transcript(path: &Path) -> Result<String> {
        let content = Self::read_text(path)?;
        if content.trim().is_empty() {
            return Err(CliError::EmptyInput(path.display().to_string()).into());
        }
        Ok(content)
    }
}
