//! Per-user record stores behind the [`RecordRepository`] seam.
//!
//! The scoring engine never talks to storage directly; commands hand it a
//! repository keyed by an opaque user id. Two backends ship here: a JSON
//! file store for the CLI and an in-memory store for tests and embedding.

pub mod json_file;
pub mod memory;

pub use json_file::JsonFileRepository;
pub use memory::MemoryRepository;

use crate::core::{HealthRecord, Result};

pub trait RecordRepository {
    /// Persist one record under a user, returning it with its
    /// repository-assigned id.
    fn save(&mut self, user_id: &str, record: HealthRecord) -> Result<HealthRecord>;

    /// All of a user's records, newest first. Unknown users get an empty
    /// history, not an error.
    fn list(&self, user_id: &str) -> Result<Vec<HealthRecord>>;

    /// Delete every record for a user, returning how many were removed.
    fn delete_all(&mut self, user_id: &str) -> Result<usize>;
}

/// Newest-first ordering shared by both backends.
pub(crate) fn sort_newest_first(records: &mut [HealthRecord]) {
    records.sort_by(|a, b| b.recorded_at.cmp(&a.recorded_at));
}
