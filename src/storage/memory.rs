use std::collections::HashMap;

use uuid::Uuid;

use crate::core::{HealthRecord, Result};

use super::{sort_newest_first, RecordRepository};

/// In-memory store keyed by user id. Useful for tests and for embedding the
/// engine without a filesystem.
#[derive(Debug, Default)]
pub struct MemoryRepository {
    records: HashMap<String, Vec<HealthRecord>>,
}

impl MemoryRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

impl RecordRepository for MemoryRepository {
    fn save(&mut self, user_id: &str, mut record: HealthRecord) -> Result<HealthRecord> {
        record.id = Some(Uuid::new_v4().to_string());
        self.records
            .entry(user_id.to_string())
            .or_default()
            .push(record.clone());
        Ok(record)
    }

    fn list(&self, user_id: &str) -> Result<Vec<HealthRecord>> {
        let mut records = self.records.get(user_id).cloned().unwrap_or_default();
        sort_newest_first(&mut records);
        Ok(records)
    }

    fn delete_all(&mut self, user_id: &str) -> Result<usize> {
        Ok(self.records.remove(user_id).map_or(0, |r| r.len()))
    }
}
