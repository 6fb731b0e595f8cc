//! Pure transform from a user's records to a serializable export document.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::core::HealthRecord;

/// The downloadable export shape: metadata plus the full record list.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportDocument {
    pub export_date: DateTime<Utc>,
    pub user_id: String,
    pub record_count: usize,
    pub records: Vec<HealthRecord>,
}

pub fn export_document(user_id: &str, records: Vec<HealthRecord>) -> ExportDocument {
    export_document_at(user_id, records, Utc::now())
}

pub fn export_document_at(
    user_id: &str,
    records: Vec<HealthRecord>,
    export_date: DateTime<Utc>,
) -> ExportDocument {
    ExportDocument {
        export_date,
        user_id: user_id.to_string(),
        record_count: records.len(),
        records,
    }
}
