use super::record::{Registration, StateRecord};
use crate::error::{CoreError, Result};
use std::fs;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

impl StateRecord {
    /// Load a state record, classifying the failure
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|source| {
            if source.kind() == ErrorKind::NotFound {
                CoreError::StateMissing {
                    path: path.to_path_buf(),
                }
            } else {
                CoreError::StateUnreadable {
                    path: path.to_path_buf(),
                    source,
                }
            }
        })?;

        serde_json::from_str(&content).map_err(|source| CoreError::StateCorrupt {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Load a state record, falling back to an empty one on any failure.
    ///
    /// A missing file is the normal first-run case. Unreadable or corrupt files
    /// are logged and replaced by the next persist.
    pub fn load_or_default(path: &Path) -> Self {
        match Self::load(path) {
            Ok(record) => record,
            Err(e) if e.is_missing() => {
                log::debug!("{e}; starting with an empty state record");
                Self::default()
            }
            Err(e) => {
                log::warn!("{e}; starting with an empty state record");
                Self::default()
            }
        }
    }

    /// Write the record as pretty JSON, replacing `path` atomically
    pub fn persist(&self, path: &Path) -> Result<()> {
        let persist_error = |source| CoreError::StatePersist {
            path: path.to_path_buf(),
            source,
        };

        let dir = match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        fs::create_dir_all(dir).map_err(persist_error)?;

        let mut json = serde_json::to_string_pretty(self)?;
        json.push('\n');

        let mut file = NamedTempFile::new_in(dir).map_err(persist_error)?;
        file.write_all(json.as_bytes()).map_err(persist_error)?;
        file.persist(path).map_err(|e| persist_error(e.error))?;

        log::debug!("persisted state record to {}", path.display());
        Ok(())
    }
}

/// Handle on a state file and its in-memory record
#[derive(Debug)]
pub struct StateStore {
    path: PathBuf,
    record: StateRecord,
}

impl StateStore {
    /// Open a store, loading the record leniently
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let record = StateRecord::load_or_default(&path);
        Self { path, record }
    }

    /// Location of the state file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Current in-memory record
    pub fn record(&self) -> &StateRecord {
        &self.record
    }

    /// Upsert a course and persist the whole record.
    ///
    /// A persist failure is returned, but the in-memory update is kept so later
    /// registrations in the same batch still see it.
    pub fn record_course(&mut self, course_id: &str, total_chunks: usize) -> Result<Registration> {
        let registration = self.record.record_course(course_id, total_chunks);
        self.record.persist(&self.path)?;
        Ok(registration)
    }
}

/// Register `course_id` with its chunk count in `store`
pub fn record_course(
    course_id: &str,
    total_chunks: usize,
    store: &mut StateStore,
) -> Result<Registration> {
    store.record_course(course_id, total_chunks)
}
