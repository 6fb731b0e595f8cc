//! Optional `.heartcheck.toml` configuration: where records live and how
//! much history one page shows. Scoring constants are deliberately not
//! configurable; the rule set is fixed.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use serde::{Deserialize, Serialize};

use crate::core::{HeartcheckError, Result};

const CONFIG_FILE: &str = ".heartcheck.toml";

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct HeartcheckConfig {
    /// Directory holding per-user record files. Defaults to the platform
    /// data directory.
    pub data_dir: Option<PathBuf>,

    /// Records shown per history page.
    pub history_limit: usize,
}

impl Default for HeartcheckConfig {
    fn default() -> Self {
        Self {
            data_dir: None,
            history_limit: default_history_limit(),
        }
    }
}

fn default_history_limit() -> usize {
    10
}

impl HeartcheckConfig {
    /// Load from a specific file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let config: HeartcheckConfig = toml::from_str(&content)
            .map_err(|e| HeartcheckError::Configuration(format!("{}: {e}", path.display())))?;
        config.validate()?;
        Ok(config)
    }

    /// Load `.heartcheck.toml` from the current directory, falling back to
    /// defaults when absent.
    pub fn load() -> Result<Self> {
        let path = PathBuf::from(CONFIG_FILE);
        if path.exists() {
            Self::from_file(&path)
        } else {
            Ok(Self::default())
        }
    }

    fn validate(&self) -> Result<()> {
        if self.history_limit == 0 {
            return Err(HeartcheckError::Configuration(
                "history_limit must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    /// Resolve the data directory: explicit override, then config, then the
    /// platform default.
    pub fn resolve_data_dir(&self, override_dir: Option<&Path>) -> PathBuf {
        if let Some(dir) = override_dir {
            return dir.to_path_buf();
        }
        if let Some(dir) = &self.data_dir {
            return dir.clone();
        }
        dirs::data_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("heartcheck")
    }
}

/// Process-wide config, loaded once on first use.
pub fn get_config() -> &'static HeartcheckConfig {
    static CONFIG: OnceLock<HeartcheckConfig> = OnceLock::new();
    CONFIG.get_or_init(|| {
        HeartcheckConfig::load().unwrap_or_else(|e| {
            log::warn!("ignoring invalid config: {e}");
            HeartcheckConfig::default()
        })
    })
}
