//! Chunk command implementation

use super::chunking_args::ChunkingArgs;
use crate::config::CliConfig;
use crate::input::{resolve_patterns, FileReader};
use crate::logging;
use crate::output::{JsonFormatter, MarkdownFormatter, OutputFormatter, TextFormatter};
use crate::progress::ProgressReporter;
use anyhow::{Context, Result};
use clap::Args;
use coursechunk_core::{ChunkSet, Segmenter};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

/// Arguments for the chunk command
#[derive(Debug, Args)]
pub struct ChunkArgs {
    /// Input files or patterns (supports glob)
    #[arg(short, long, value_name = "FILE/PATTERN", required = true)]
    pub input: Vec<String>,

    /// Output file (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    pub format: OutputFormat,

    #[command(flatten)]
    pub chunking: ChunkingArgs,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Supported output formats
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum OutputFormat {
    /// Plain text, one paragraph per chunk
    Text,
    /// JSON array of chunk sets
    Json,
    /// Markdown formatted output
    Markdown,
}

impl ChunkArgs {
    /// Execute the chunk command
    pub fn execute(&self) -> Result<()> {
        logging::init(self.verbose, self.quiet);

        log::info!("Starting text chunking");
        log::debug!("Arguments: {:?}", self);

        let config = CliConfig::load(self.chunking.config.as_deref())?;
        let mut chunking = config.chunking;
        self.chunking.apply(&mut chunking);
        let segmenter = Segmenter::new(chunking)?;

        let files = resolve_patterns(&self.input)?;
        log::info!("Found {} file(s) to chunk", files.len());

        let writer = self.open_writer()?;
        let mut formatter = self.create_formatter(writer, config.output.pretty_json);

        // A progress bar on stderr would interleave with stdout output.
        let mut reporter = ProgressReporter::new(self.quiet || self.output.is_none());
        reporter.init_files(files.len() as u64);

        let mut failed = 0;
        for path in &files {
            match chunk_file(path, &segmenter) {
                Ok(course) => formatter.format_course(&course)?,
                Err(e) => {
                    log::error!("{}: {:#}", path.display(), e);
                    failed += 1;
                }
            }
            reporter.file_completed(&path.display().to_string());
        }

        formatter.finish()?;
        reporter.finish();

        if failed == files.len() {
            anyhow::bail!("None of the {} input file(s) could be chunked", files.len());
        }

        Ok(())
    }

    fn open_writer(&self) -> Result<Box<dyn Write + Send + Sync>> {
        match &self.output {
            Some(path) => {
                let file = File::create(path)
                    .with_context(|| format!("Failed to create output file: {}", path.display()))?;
                Ok(Box::new(BufWriter::new(file)))
            }
            None => Ok(Box::new(io::stdout())),
        }
    }

    fn create_formatter(
        &self,
        writer: Box<dyn Write + Send + Sync>,
        pretty_json: bool,
    ) -> Box<dyn OutputFormatter> {
        match self.format {
            OutputFormat::Text => Box::new(TextFormatter::new(writer)),
            OutputFormat::Json => Box::new(JsonFormatter::new(writer, pretty_json)),
            OutputFormat::Markdown => Box::new(MarkdownFormatter::new(writer)),
        }
    }
}

fn chunk_file(path: &Path, segmenter: &Segmenter) -> Result<ChunkSet> {
    let text = FileReader::read_transcript(path)?;
    ChunkSet::from_source(path, segmenter.segment(&text))
        .with_context(|| format!("Cannot derive a course id from {}", path.display()))
}
