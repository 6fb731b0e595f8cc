use std::path::PathBuf;

use anyhow::{bail, Result};

use crate::config::get_config;
use crate::storage::{JsonFileRepository, RecordRepository};

pub struct PurgeOptions {
    pub user: String,
    pub yes: bool,
    pub data_dir: Option<PathBuf>,
}

pub fn run(options: PurgeOptions) -> Result<()> {
    if !options.yes {
        bail!("refusing to delete records without --yes; this cannot be undone");
    }

    let mut repo =
        JsonFileRepository::open(get_config().resolve_data_dir(options.data_dir.as_deref()))?;
    let count = repo.delete_all(&options.user)?;
    println!("Deleted {count} records for user {}.", options.user);
    Ok(())
}
