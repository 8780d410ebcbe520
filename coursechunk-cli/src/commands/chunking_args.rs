//! Chunking options shared by the `ingest` and `chunk` commands

use clap::Args;
use coursechunk_core::{Granularity, SegmenterConfig};
use std::path::PathBuf;

/// Segmentation overrides applied on top of the configuration file
#[derive(Debug, Clone, Default, Args)]
pub struct ChunkingArgs {
    /// Target chunk length in characters
    #[arg(short, long, value_name = "CHARS")]
    pub target_length: Option<usize>,

    /// Overlap window carried into the next chunk, in characters
    #[arg(long, value_name = "CHARS")]
    pub overlap: Option<usize>,

    /// Block granularity
    #[arg(short, long, value_enum)]
    pub granularity: Option<GranularityArg>,

    /// Configuration file
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,
}

/// Block granularity as accepted on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum GranularityArg {
    /// Sentence blocks with overlap seeds
    Sentence,
    /// Blank-line separated paragraphs, no overlap
    Paragraph,
}

impl From<GranularityArg> for Granularity {
    fn from(arg: GranularityArg) -> Self {
        match arg {
            GranularityArg::Sentence => Granularity::Sentence,
            GranularityArg::Paragraph => Granularity::Paragraph,
        }
    }
}

impl ChunkingArgs {
    /// Overwrite the configured values with any flags given
    pub fn apply(&self, config: &mut SegmenterConfig) {
        if let Some(target_length) = self.target_length {
            config.target_length = target_length;
        }
        if let Some(overlap) = self.overlap {
            config.overlap = overlap;
        }
        if let Some(granularity) = self.granularity {
            config.granularity = granularity.into();
        }
    }
}
