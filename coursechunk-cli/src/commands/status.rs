//! Status command implementation

use crate::config::{expand_home, CliConfig};
use anyhow::Result;
use clap::Args;
use coursechunk_core::StateRecord;
use std::io::{self, Write};
use std::path::PathBuf;

/// Arguments for the status command
#[derive(Debug, Args)]
pub struct StatusArgs {
    /// Shared course state file
    #[arg(long, value_name = "FILE", env = "COURSECHUNK_STATE_FILE")]
    pub state_file: Option<PathBuf>,

    /// Configuration file; its `[paths] state_file` applies when no state file is given
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Print the raw state record as JSON
    #[arg(long)]
    pub json: bool,
}

impl StatusArgs {
    /// Execute the status command
    pub fn execute(&self) -> Result<()> {
        let path = self.state_path()?;
        let record = StateRecord::load_or_default(&path);
        let stdout = io::stdout();
        let mut out = stdout.lock();

        if self.json {
            serde_json::to_writer_pretty(&mut out, &record)?;
            writeln!(out)?;
        } else {
            write_summary(&mut out, &record)?;
        }

        Ok(())
    }

    /// Resolve the state file: flag or environment, then config file, then default
    pub fn state_path(&self) -> Result<PathBuf> {
        let path = match &self.state_file {
            Some(path) => path.clone(),
            None => CliConfig::load(self.config.as_deref())?.paths.state_file,
        };
        Ok(expand_home(&path))
    }
}

/// Human-readable overview of the registered courses
pub fn write_summary<W: Write>(out: &mut W, record: &StateRecord) -> Result<()> {
    if record.courses.is_empty() {
        writeln!(out, "No courses registered.")?;
        return Ok(());
    }

    let active = if record.active_course.is_empty() {
        "(none)"
    } else {
        record.active_course.as_str()
    };
    writeln!(out, "Active course: {}", active)?;
    writeln!(out)?;

    for (course_id, entry) in &record.courses {
        let marker = if *course_id == record.active_course {
            '*'
        } else {
            ' '
        };
        let progress = if entry.is_finished() {
            "finished".to_string()
        } else {
            format!("chunk {}/{}", entry.current_chunk, entry.total_chunks)
        };
        write!(out, "{} {}: {}", marker, course_id, progress)?;
        if !entry.review_queue.is_empty() {
            write!(out, ", {} to review", entry.review_queue.len())?;
        }
        writeln!(out)?;
    }

    Ok(())
}
