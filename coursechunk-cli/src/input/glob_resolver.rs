//! File pattern resolution using glob

use crate::error::CliError;
use anyhow::{Context, Result};
use glob::{glob, Pattern};
use std::path::{Path, PathBuf};

/// Resolve file patterns to actual file paths
pub fn resolve_patterns(patterns: &[String]) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();

    for pattern in patterns {
        let paths = glob(pattern).map_err(|e| invalid_pattern(pattern, e))?;

        for path_result in paths {
            let path =
                path_result.with_context(|| format!("Error resolving pattern: {}", pattern))?;

            if path.is_file() {
                files.push(path);
            }
        }
    }

    if files.is_empty() {
        anyhow::bail!("No files found matching the provided patterns");
    }

    // Remove duplicates and sort
    files.sort();
    files.dedup();

    Ok(files)
}

/// List the `*.txt` transcripts directly inside `raw_dir`, sorted by path.
///
/// The directory itself must exist; an empty listing is not an error.
pub fn list_transcripts(raw_dir: &Path) -> Result<Vec<PathBuf>> {
    if !raw_dir.is_dir() {
        return Err(CliError::RawDirNotFound(raw_dir.display().to_string()).into());
    }

    let pattern = format!("{}/*.txt", Pattern::escape(&raw_dir.to_string_lossy()));

    let mut files = Vec::new();
    for path_result in glob(&pattern).map_err(|e| invalid_pattern(&pattern, e))? {
        let path = path_result
            .with_context(|| format!("Error listing transcripts in {}", raw_dir.display()))?;
        if path.is_file() {
            files.push(path);
        }
    }

    files.sort();
    Ok(files)
}

fn invalid_pattern(pattern: &str, err: glob::PatternError) -> CliError {
    CliError::InvalidPattern(format!("{pattern} ({err})"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_resolve_patterns_sorted_and_deduped() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join("b.txt"), "B!").unwrap();
        fs::write(temp_dir.path().join("a.txt"), "A!").unwrap();

        let dir = temp_dir.path().display();
        let patterns = vec![format!("{dir}/*.txt"), format!("{dir}/a.txt")];
        let files = resolve_patterns(&patterns).unwrap();

        assert_eq!(
            files,
            vec![temp_dir.path().join("a.txt"), temp_dir.path().join("b.txt")]
        );
    }

    #[test]
    fn test_resolve_patterns_no_match() {
        let temp_dir = TempDir::new().unwrap();
        let patterns = vec![format!("{}/*.md", temp_dir.path().display())];

        let err = resolve_patterns(&patterns).unwrap_err();
        assert!(err.to_string().contains("No files found"));
    }

    #[test]
    fn test_resolve_patterns_invalid() {
        let err = resolve_patterns(&["[invalid".to_string()]).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<CliError>(),
            Some(CliError::InvalidPattern(_))
        ));
    }

    #[test]
    fn test_list_transcripts_filters_extension() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join("rust-101.txt"), "Hi!").unwrap();
        fs::write(temp_dir.path().join("notes.md"), "Hi!").unwrap();
        fs::write(temp_dir.path().join("async.txt"), "Hi!").unwrap();
        fs::create_dir(temp_dir.path().join("nested.txt")).unwrap();

        let files = list_transcripts(temp_dir.path()).unwrap();
        assert_eq!(
            files,
            vec![
                temp_dir.path().join("async.txt"),
                temp_dir.path().join("rust-101.txt")
            ]
        );
    }

    #[test]
    fn test_list_transcripts_escapes_directory_name() {
        let temp_dir = TempDir::new().unwrap();
        let raw_dir = temp_dir.path().join("raw [2024]");
        fs::create_dir(&raw_dir).unwrap();
        fs::write(raw_dir.join("intro.txt"), "Hi!").unwrap();

        let files = list_transcripts(&raw_dir).unwrap();
        assert_eq!(files, vec![raw_dir.join("intro.txt")]);
    }

    #[test]
    fn test_list_transcripts_empty_dir() {
        let temp_dir = TempDir::new().unwrap();
        assert!(list_transcripts(temp_dir.path()).unwrap().is_empty());
    }

    #[test]
    fn test_list_transcripts_missing_dir() {
        let temp_dir = TempDir::new().unwrap();
        let missing = temp_dir.path().join("raw");

        let err = list_transcripts(&missing).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<CliError>(),
            Some(CliError::RawDirNotFound(_))
        ));
    }
}
