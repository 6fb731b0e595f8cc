//! JSON file store: one pretty-printed file per user under a data directory.

use std::fs;
use std::path::{Path, PathBuf};

use log::{debug, info};
use uuid::Uuid;

use crate::core::{HealthRecord, HeartcheckError, Result};

use super::{sort_newest_first, RecordRepository};

#[derive(Debug)]
pub struct JsonFileRepository {
    root: PathBuf,
}

impl JsonFileRepository {
    /// Open (creating if needed) a store rooted at the given directory.
    pub fn open(root: impl Into<PathBuf>) -> Result<Self> {
        let root = root.into();
        fs::create_dir_all(&root).map_err(|e| {
            HeartcheckError::persistence(
                format!("cannot create data directory: {e}"),
                Some(root.clone()),
            )
        })?;
        Ok(Self { root })
    }

    fn user_file(&self, user_id: &str) -> PathBuf {
        self.root.join(format!("{}.json", sanitize_user_id(user_id)))
    }

    fn load(&self, path: &Path) -> Result<Vec<HealthRecord>> {
        if !path.exists() {
            return Ok(Vec::new());
        }
        let data = fs::read_to_string(path).map_err(|e| {
            HeartcheckError::persistence(
                format!("cannot read record file: {e}"),
                Some(path.to_path_buf()),
            )
        })?;
        serde_json::from_str(&data).map_err(|e| {
            HeartcheckError::persistence(
                format!("record file is corrupt: {e}"),
                Some(path.to_path_buf()),
            )
        })
    }

    fn store(&self, path: &Path, records: &[HealthRecord]) -> Result<()> {
        let data = serde_json::to_string_pretty(records)?;
        fs::write(path, data).map_err(|e| {
            HeartcheckError::persistence(
                format!("cannot write record file: {e}"),
                Some(path.to_path_buf()),
            )
        })
    }
}

impl RecordRepository for JsonFileRepository {
    fn save(&mut self, user_id: &str, mut record: HealthRecord) -> Result<HealthRecord> {
        let path = self.user_file(user_id);
        let mut records = self.load(&path)?;

        record.id = Some(Uuid::new_v4().to_string());
        records.push(record.clone());
        self.store(&path, &records)?;

        info!(
            "saved record {} for user {user_id}",
            record.id.as_deref().unwrap_or("?")
        );
        Ok(record)
    }

    fn list(&self, user_id: &str) -> Result<Vec<HealthRecord>> {
        let mut records = self.load(&self.user_file(user_id))?;
        sort_newest_first(&mut records);
        debug!("listed {} records for user {user_id}", records.len());
        Ok(records)
    }

    fn delete_all(&mut self, user_id: &str) -> Result<usize> {
        let path = self.user_file(user_id);
        let count = self.load(&path)?.len();
        if path.exists() {
            fs::remove_file(&path).map_err(|e| {
                HeartcheckError::persistence(
                    format!("cannot delete record file: {e}"),
                    Some(path.clone()),
                )
            })?;
        }
        info!("deleted {count} records for user {user_id}");
        Ok(count)
    }
}

/// User ids are opaque tokens from an external identity provider; keep the
/// file name safe regardless of what they contain.
fn sanitize_user_id(user_id: &str) -> String {
    user_id
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() || c == '-' || c == '_' {
            c
        } else {
            '_'
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sanitize_keeps_plain_ids() {
        assert_eq!(sanitize_user_id("user-42_a"), "user-42_a");
    }

    #[test]
    fn sanitize_replaces_path_characters() {
        assert_eq!(sanitize_user_id("../etc/passwd"), "___etc_passwd");
        assert_eq!(sanitize_user_id("a b@c"), "a_b_c");
    }
}
