//! Ingest command implementation

use super::chunking_args::ChunkingArgs;
use crate::config::{expand_home, CliConfig};
use crate::input::{list_transcripts, FileReader};
use crate::logging;
use crate::output::write_course;
use crate::progress::ProgressReporter;
use anyhow::{Context, Result};
use clap::Args;
use coursechunk_core::{ChunkSet, Registration, Segmenter, SegmenterConfig, StateStore};
use std::fs;
use std::path::{Path, PathBuf};

/// Arguments for the ingest command
#[derive(Debug, Args)]
pub struct IngestArgs {
    /// Directory containing raw `.txt` transcripts
    #[arg(long, value_name = "DIR", env = "COURSECHUNK_RAW_DIR")]
    pub raw_dir: Option<PathBuf>,

    /// Directory receiving `<course_id>.json` chunk sets
    #[arg(long, value_name = "DIR", env = "COURSECHUNK_OUT_DIR")]
    pub out_dir: Option<PathBuf>,

    /// Shared course state file
    #[arg(long, value_name = "FILE", env = "COURSECHUNK_STATE_FILE")]
    pub state_file: Option<PathBuf>,

    /// Write chunk sets without registering courses in the state file
    #[arg(long)]
    pub no_state: bool,

    #[command(flatten)]
    pub chunking: ChunkingArgs,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Fully resolved ingest settings
#[derive(Debug, Clone)]
pub struct IngestSettings {
    /// Raw transcript directory
    pub raw_dir: PathBuf,
    /// Output directory
    pub out_dir: PathBuf,
    /// State file, `None` when registration is disabled
    pub state_file: Option<PathBuf>,
    /// Segmentation parameters
    pub chunking: SegmenterConfig,
    /// Pretty print the chunk set artifacts
    pub pretty_json: bool,
}

/// Outcome of one ingest run
#[derive(Debug, Default)]
pub struct IngestSummary {
    /// Number of `.txt` files discovered
    pub found: usize,
    /// Files chunked and written successfully
    pub processed: usize,
    /// Files that failed, with the reason
    pub failures: Vec<(PathBuf, String)>,
}

impl IngestArgs {
    /// Execute the ingest command
    pub fn execute(&self) -> Result<()> {
        logging::init(self.verbose, self.quiet);

        log::info!("Starting transcript ingest");
        log::debug!("Arguments: {:?}", self);

        let settings = self.settings()?;
        let mut reporter = ProgressReporter::new(self.quiet);
        let summary = run(&settings, &mut reporter)?;

        if summary.found > 0 {
            println!(
                "Done! {}/{} files processed successfully.",
                summary.processed, summary.found
            );
        }

        Ok(())
    }

    /// Resolve flags, environment and configuration file into settings
    pub fn settings(&self) -> Result<IngestSettings> {
        let config = CliConfig::load(self.chunking.config.as_deref())?;

        let mut chunking = config.chunking;
        self.chunking.apply(&mut chunking);

        let paths = config.paths;
        let raw_dir = expand_home(self.raw_dir.as_deref().unwrap_or(&paths.raw_dir));
        let out_dir = expand_home(self.out_dir.as_deref().unwrap_or(&paths.out_dir));
        let state_file = if self.no_state {
            None
        } else {
            Some(expand_home(
                self.state_file.as_deref().unwrap_or(&paths.state_file),
            ))
        };

        Ok(IngestSettings {
            raw_dir,
            out_dir,
            state_file,
            chunking,
            pretty_json: config.output.pretty_json,
        })
    }
}

/// Chunk every transcript in the raw directory.
///
/// A missing raw directory or invalid chunking parameters abort the run.
/// Per-file failures are collected in the summary and never stop the batch.
pub fn run(settings: &IngestSettings, reporter: &mut ProgressReporter) -> Result<IngestSummary> {
    let segmenter = Segmenter::new(settings.chunking.clone())?;
    let files = list_transcripts(&settings.raw_dir)?;

    let mut summary = IngestSummary {
        found: files.len(),
        ..Default::default()
    };

    if files.is_empty() {
        reporter.println(format!(
            "No .txt files found in {}",
            settings.raw_dir.display()
        ));
        return Ok(summary);
    }

    reporter.println(format!("Found {} file(s). Processing...", files.len()));

    fs::create_dir_all(&settings.out_dir).with_context(|| {
        format!(
            "Failed to create output directory: {}",
            settings.out_dir.display()
        )
    })?;

    let mut store = settings.state_file.as_ref().map(StateStore::open);

    reporter.init_files(files.len() as u64);

    for path in &files {
        let name = display_name(path);

        match ingest_file(path, &segmenter, settings) {
            Ok((course, artifact)) => {
                summary.processed += 1;
                reporter.println(format!(
                    "  {} -> {} chunk(s) -> {}",
                    name,
                    course.total_chunks,
                    artifact.display()
                ));

                if let Some(store) = store.as_mut() {
                    register(store, &course);
                }
            }
            Err(e) => {
                log::error!("{}: {:#}", name, e);
                summary.failures.push((path.clone(), format!("{e:#}")));
            }
        }

        reporter.file_completed(&name);
    }

    reporter.finish();

    Ok(summary)
}

fn ingest_file(
    path: &Path,
    segmenter: &Segmenter,
    settings: &IngestSettings,
) -> Result<(ChunkSet, PathBuf)> {
    let text = FileReader::read_transcript(path)?;
    let chunks = segmenter.segment(&text);

    let course = ChunkSet::from_source(path, chunks)
        .with_context(|| format!("Cannot derive a course id from {}", path.display()))?;
    log::info!(
        "{} split into {} chunk(s)",
        course.course_id,
        course.total_chunks
    );

    let artifact = write_course(&course, &settings.out_dir, settings.pretty_json)?;
    Ok((course, artifact))
}

// State failures are reported but never fail the file: the artifact is
// already on disk.
fn register(store: &mut StateStore, course: &ChunkSet) {
    match store.record_course(&course.course_id, course.total_chunks) {
        Ok(Registration::Created) => {
            log::info!("Registered new course '{}'", course.course_id)
        }
        Ok(Registration::Refreshed { previous_total }) => log::info!(
            "Refreshed course '{}' ({} -> {} chunks)",
            course.course_id,
            previous_total,
            course.total_chunks
        ),
        Err(e) => log::warn!(
            "Could not update state file {}: {}",
            store.path().display(),
            e
        ),
    }
}

fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
