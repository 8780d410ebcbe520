//! Error types for the chunking core
//!
//! Segmentation itself is total and never fails; every variant here comes from
//! configuration validation or from the persisted course state file.

use std::path::PathBuf;
use thiserror::Error;

/// Core-level errors
#[derive(Error, Debug)]
pub enum CoreError {
    /// Segmenter configuration rejected by validation
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// The state file does not exist yet
    #[error("state file not found: {}", path.display())]
    StateMissing {
        /// Location that was checked
        path: PathBuf,
    },

    /// The state file exists but could not be read
    #[error("failed to read state file {}: {source}", path.display())]
    StateUnreadable {
        /// Location of the state file
        path: PathBuf,
        /// Underlying I/O failure
        #[source]
        source: std::io::Error,
    },

    /// The state file was read but is not a valid state record
    #[error("state file {} is corrupt: {source}", path.display())]
    StateCorrupt {
        /// Location of the state file
        path: PathBuf,
        /// Underlying JSON failure
        #[source]
        source: serde_json::Error,
    },

    /// Writing the state file back to disk failed
    #[error("failed to persist state file {}: {source}", path.display())]
    StatePersist {
        /// Location of the state file
        path: PathBuf,
        /// Underlying I/O failure
        #[source]
        source: std::io::Error,
    },

    /// Serialization of a record failed
    #[error("serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}

impl CoreError {
    /// True when the state file simply has not been created yet
    pub fn is_missing(&self) -> bool {
        matches!(self, CoreError::StateMissing { .. })
    }

    /// True when the state file exists but holds unusable content
    pub fn is_corrupt(&self) -> bool {
        matches!(self, CoreError::StateCorrupt { .. })
    }
}

/// Result type for core operations
pub type Result<T> = std::result::Result<T, CoreError>;
