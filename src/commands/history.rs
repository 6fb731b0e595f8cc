use std::io;
use std::path::PathBuf;

use anyhow::Result;

use crate::config::get_config;
use crate::io::output::{create_writer, HistoryView};
use crate::io::OutputFormat;
use crate::risk::analyze_trend;
use crate::storage::{JsonFileRepository, RecordRepository};

pub struct HistoryOptions {
    pub user: String,
    pub limit: Option<usize>,
    pub format: OutputFormat,
    pub data_dir: Option<PathBuf>,
}

pub fn run(options: HistoryOptions) -> Result<()> {
    let config = get_config();
    let repo = JsonFileRepository::open(config.resolve_data_dir(options.data_dir.as_deref()))?;
    let records = repo.list(&options.user)?;

    // Trend is computed over the full history before pagination.
    let trend = analyze_trend(&records);
    let total = records.len();
    let limit = options.limit.unwrap_or(config.history_limit);
    let page: Vec<_> = records.into_iter().take(limit).collect();

    let view = HistoryView {
        user_id: options.user,
        total,
        records: page,
        trend,
    };
    create_writer(options.format, Box::new(io::stdout())).write_history(&view)
}
