//! Configuration management

use crate::domain::{CsvQuoting, TimeZonePolicy, TrendOrder};
use crate::error::{MoodjError, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Name of the per-journal metadata directory
pub const JOURNAL_DIR: &str = ".moodj";

const CONFIG_FILE: &str = "config.toml";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub timezone: TimeZonePolicy,
    #[serde(default)]
    pub trend_order: TrendOrder,
    #[serde(default)]
    pub csv_quoting: CsvQuoting,
    pub created: DateTime<Utc>,
}

impl Config {
    /// Create a new config with default values
    pub fn new(timezone: TimeZonePolicy) -> Self {
        Config {
            timezone,
            trend_order: TrendOrder::default(),
            csv_quoting: CsvQuoting::default(),
            created: Utc::now(),
        }
    }

    /// Load config from .moodj/config.toml in the given directory
    pub fn load_from_dir(path: &Path) -> Result<Self> {
        let config_path = path.join(JOURNAL_DIR).join(CONFIG_FILE);

        let contents = fs::read_to_string(&config_path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                MoodjError::NotJournalDirectory(path.to_path_buf())
            } else {
                MoodjError::Io(e)
            }
        })?;

        toml::from_str(&contents)
            .map_err(|e| MoodjError::Config(format!("Failed to parse config.toml: {}", e)))
    }

    /// Save config to .moodj/config.toml in the given directory
    pub fn save_to_dir(&self, path: &Path) -> Result<()> {
        let journal_dir = path.join(JOURNAL_DIR);
        let config_path = journal_dir.join(CONFIG_FILE);

        if !journal_dir.exists() {
            fs::create_dir(&journal_dir)?;
        }

        let contents = toml::to_string_pretty(self)?;
        fs::write(&config_path, contents)?;

        Ok(())
    }
}
