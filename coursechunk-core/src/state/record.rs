use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};
use std::collections::BTreeMap;

/// Shared state record: the active course plus one entry per course
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StateRecord {
    /// Default course for the consumer; set once, on first registration
    #[serde(default, deserialize_with = "null_as_default")]
    pub active_course: String,
    /// Per-course progress, keyed by course id
    #[serde(default, deserialize_with = "null_as_default")]
    pub courses: BTreeMap<String, CourseEntry>,
    /// Top-level fields owned by other writers
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Progress of one course
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CourseEntry {
    /// Index of the chunk the consumer is on
    #[serde(default)]
    pub current_chunk: usize,
    /// Number of chunks in the latest chunk set
    #[serde(default)]
    pub total_chunks: usize,
    /// Consumer-owned timestamp of the last interaction
    #[serde(default, deserialize_with = "null_as_default")]
    pub last_interaction: String,
    /// Chunk indices queued for review
    #[serde(default, deserialize_with = "null_as_default")]
    pub review_queue: Vec<usize>,
    /// Entry fields owned by other writers
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Outcome of registering a course
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Registration {
    /// The course was not known before
    Created,
    /// The course existed; only its chunk count was refreshed
    Refreshed {
        /// Chunk count before the refresh
        previous_total: usize,
    },
}

impl CourseEntry {
    /// Fresh entry at the start of the course
    pub fn new(total_chunks: usize) -> Self {
        Self {
            total_chunks,
            ..Self::default()
        }
    }

    /// True once the cursor has moved past the last chunk
    pub fn is_finished(&self) -> bool {
        self.current_chunk >= self.total_chunks
    }
}

impl StateRecord {
    /// Upsert a course.
    ///
    /// New courses start at chunk 0 with an empty review queue. For a known
    /// course only `total_chunks` changes. The active course is assigned only
    /// when none is set yet.
    pub fn record_course(&mut self, course_id: &str, total_chunks: usize) -> Registration {
        let registration = match self.courses.get_mut(course_id) {
            Some(entry) => {
                let previous_total = entry.total_chunks;
                entry.total_chunks = total_chunks;
                Registration::Refreshed { previous_total }
            }
            None => {
                self.courses
                    .insert(course_id.to_string(), CourseEntry::new(total_chunks));
                Registration::Created
            }
        };

        if self.active_course.is_empty() {
            log::info!("setting active course to '{course_id}'");
            self.active_course = course_id.to_string();
        }

        registration
    }

    /// Entry of the active course, if one is set and registered
    pub fn active_entry(&self) -> Option<&CourseEntry> {
        if self.active_course.is_empty() {
            return None;
        }
        self.courses.get(&self.active_course)
    }
}

// Other writers may store `null` where this crate expects a value.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
