//! Sentence-aware chunking of transcripts into course material
//!
//! This crate turns free text (Latin, CJK, or a mix of both) into ordered
//! chunks near a target size without ever cutting a sentence, carrying a short
//! overlap of trailing context from one chunk into the next. It also records
//! each chunked course in a shared JSON state record that tracks where a reader
//! is in the sequence.
//!
//! # Example
//!
//! ```rust
//! use coursechunk_core::{segment, ChunkSet, StateRecord};
//!
//! let chunks = segment("Hello world. This is a test! Another sentence?", 20, 5);
//! assert_eq!(chunks, vec!["Hello world. This is a test!", "test! Another sentence?"]);
//!
//! let set = ChunkSet::new("intro", chunks);
//! let mut state = StateRecord::default();
//! state.record_course(&set.course_id, set.total_chunks);
//! assert_eq!(state.active_course, "intro");
//! ```

#![warn(missing_docs)]

pub mod blocks;
pub mod chunk_set;
pub mod classifier;
pub mod config;
pub mod error;
pub mod segmenter;
pub mod state;

// Re-export key types
pub use chunk_set::{course_id_from_path, ChunkSet};
pub use classifier::{BoundaryClassifier, TerminatorSet, DEFAULT_TERMINATORS};
pub use config::{Granularity, SegmenterConfig, DEFAULT_OVERLAP, DEFAULT_TARGET_LENGTH};
pub use error::{CoreError, Result};
pub use segmenter::{overlap_seed, segment, Segmenter};
pub use state::{record_course, CourseEntry, Registration, StateRecord, StateStore};
