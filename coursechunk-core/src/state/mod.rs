//! Course progress state
//!
//! The state record is a single JSON document shared with the consumer that
//! walks through the chunks. This module only ever inserts courses or refreshes
//! `total_chunks`; reading progress and any field it does not know about are
//! carried through untouched.
//!
//! Every update is a load, mutate, persist cycle on the whole file with no
//! locking. Callers must serialize access to one state file.

mod record;
mod store;


pub use record::{CourseEntry, Registration, StateRecord};
pub use store::{record_course, StateStore};
