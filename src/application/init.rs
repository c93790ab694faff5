//! Initialize journal use case

use crate::domain::TimeZonePolicy;
use crate::error::Result;
use crate::infrastructure::{Config, FileSystemRepository, JournalRepository};
use std::fs;
use std::path::Path;

/// Creates the `.moodj` layout and default configuration
pub struct InitService;

impl InitService {
    /// Initialize a new journal at the specified path.
    pub fn execute(path: &Path, timezone: TimeZonePolicy) -> Result<FileSystemRepository> {
        if !path.exists() {
            fs::create_dir_all(path)?;
        }

        let repo = FileSystemRepository::new(path.to_path_buf());
        repo.initialize()?;
        repo.save_config(&Config::new(timezone))?;

        tracing::info!(root = %path.display(), %timezone, "initialized journal");
        Ok(repo)
    }
}
