//! Configuration module

use crate::error::CliError;
use anyhow::{Context, Result};
use coursechunk_core::SegmenterConfig;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Workspace directory relative to the home directory
pub const WORKSPACE_SUBDIR: &str = ".openclaw/workspace/knowledge/ai-tutor";

/// CLI configuration structure
#[derive(Debug, Deserialize, Serialize, Default)]
pub struct CliConfig {
    /// Chunking configuration
    #[serde(default)]
    pub chunking: SegmenterConfig,

    /// Input, output and state locations
    #[serde(default)]
    pub paths: PathsConfig,

    /// Output configuration
    #[serde(default)]
    pub output: OutputConfig,
}

/// Path-related configuration
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct PathsConfig {
    /// Directory holding raw `.txt` transcripts
    pub raw_dir: PathBuf,

    /// Directory receiving `<course_id>.json` chunk sets
    pub out_dir: PathBuf,

    /// Shared course state record
    pub state_file: PathBuf,
}

impl Default for PathsConfig {
    fn default() -> Self {
        let workspace = workspace_dir();
        Self {
            raw_dir: workspace.join("raw"),
            out_dir: workspace.join("materials"),
            state_file: workspace.join("state.json"),
        }
    }
}

/// Output-related configuration
#[derive(Debug, Deserialize, Serialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Pretty print JSON output
    pub pretty_json: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self { pretty_json: true }
    }
}

impl CliConfig {
    /// Load configuration from a TOML file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let config: CliConfig = toml::from_str(&content).map_err(|e| {
            CliError::ConfigError(format!(
                "Failed to parse TOML from '{}': {}",
                path.display(),
                e
            ))
        })?;

        config
            .chunking
            .validate()
            .map_err(|e| CliError::ConfigError(e.to_string()))?;

        Ok(config)
    }

    /// Load configuration from `path`, or use defaults when none is given
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => {
                log::debug!("Loading configuration from {}", path.display());
                Self::from_file(path)
            }
            None => Ok(Self::default()),
        }
    }
}

/// Default workspace directory under the user's home
pub fn workspace_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(WORKSPACE_SUBDIR)
}

/// Expand a leading `~` component to the home directory
pub fn expand_home(path: &Path) -> PathBuf {
    if let Ok(rest) = path.strip_prefix("~") {
        if let Some(home) = dirs::home_dir() {
            return home.join(rest);
        }
    }
    path.to_path_buf()
}
