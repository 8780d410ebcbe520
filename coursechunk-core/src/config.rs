//! Configuration types for the segmenter

use crate::error::{CoreError, Result};
use serde::{Deserialize, Serialize};

/// Default target chunk length in characters
pub const DEFAULT_TARGET_LENGTH: usize = 600;

/// Default overlap window in characters
pub const DEFAULT_OVERLAP: usize = 50;

/// Unit of text accumulated into chunks
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Granularity {
    /// Sentence blocks joined by a space, with overlap carried between chunks
    #[default]
    Sentence,
    /// Blank-line separated paragraphs joined by an empty line, no overlap
    Paragraph,
}

impl Granularity {
    /// Separator placed between blocks inside one chunk
    pub fn joiner(&self) -> &'static str {
        match self {
            Granularity::Sentence => " ",
            Granularity::Paragraph => "\n\n",
        }
    }

    /// Whether trailing context is carried into the next chunk
    pub fn carries_overlap(&self) -> bool {
        matches!(self, Granularity::Sentence)
    }
}

/// Segmenter configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SegmenterConfig {
    /// Approximate chunk size in characters
    pub target_length: usize,
    /// Trailing characters considered for the next chunk's overlap seed
    pub overlap: usize,
    /// Block granularity
    pub granularity: Granularity,
    /// Custom terminator characters (None = built-in bilingual set)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub terminators: Option<String>,
}

impl Default for SegmenterConfig {
    fn default() -> Self {
        Self {
            target_length: DEFAULT_TARGET_LENGTH,
            overlap: DEFAULT_OVERLAP,
            granularity: Granularity::Sentence,
            terminators: None,
        }
    }
}

impl SegmenterConfig {
    /// Create a sentence-granularity configuration
    pub fn new(target_length: usize, overlap: usize) -> Self {
        Self {
            target_length,
            overlap,
            ..Self::default()
        }
    }

    /// Set the block granularity
    pub fn with_granularity(mut self, granularity: Granularity) -> Self {
        self.granularity = granularity;
        self
    }

    /// Set custom terminator characters
    pub fn with_terminators(mut self, terminators: impl Into<String>) -> Self {
        self.terminators = Some(terminators.into());
        self
    }

    /// Validate the configuration.
    ///
    /// An overlap at least as long as the target is accepted, but every new
    /// chunk then starts with a single trailing sentence of its predecessor.
    pub fn validate(&self) -> Result<()> {
        if self.target_length == 0 {
            return Err(CoreError::InvalidConfig(
                "target_length must be greater than zero".to_string(),
            ));
        }

        if let Some(terminators) = &self.terminators {
            if terminators.trim().is_empty() {
                return Err(CoreError::InvalidConfig(
                    "terminators must contain at least one character".to_string(),
                ));
            }
        }

        if self.granularity.carries_overlap() && self.overlap >= self.target_length {
            log::warn!(
                "overlap ({}) is not smaller than target_length ({})",
                self.overlap,
                self.target_length
            );
        }

        Ok(())
    }
}
