use std::fs::File;
use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::Result;

use crate::config::get_config;
use crate::io::export::export_document;
use crate::storage::{JsonFileRepository, RecordRepository};

pub struct ExportOptions {
    pub user: String,
    pub output: Option<PathBuf>,
    pub data_dir: Option<PathBuf>,
}

pub fn run(options: ExportOptions) -> Result<()> {
    let repo =
        JsonFileRepository::open(get_config().resolve_data_dir(options.data_dir.as_deref()))?;
    let records = repo.list(&options.user)?;
    let document = export_document(&options.user, records);

    let mut sink: Box<dyn Write> = match &options.output {
        Some(path) => Box::new(File::create(path)?),
        None => Box::new(io::stdout()),
    };
    serde_json::to_writer_pretty(&mut sink, &document)?;
    writeln!(sink)?;

    log::info!(
        "exported {} records for user {}",
        document.record_count,
        document.user_id
    );
    Ok(())
}
