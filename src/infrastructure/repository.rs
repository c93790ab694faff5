//! File system repository

use crate::error::{MoodjError, Result};
use crate::infrastructure::config::JOURNAL_DIR;
use crate::infrastructure::{Config, FileStorage};
use std::fs;
use std::path::{Path, PathBuf};

const STORAGE_DIR: &str = "storage";

/// Abstract repository for journal operations
pub trait JournalRepository {
    /// Get the root directory of this repository
    fn root(&self) -> &Path;

    /// Load configuration from .moodj/config.toml
    fn load_config(&self) -> Result<Config>;

    /// Save configuration to .moodj/config.toml
    fn save_config(&self, config: &Config) -> Result<()>;

    /// Check if .moodj directory exists
    fn is_initialized(&self) -> bool;

    /// Create .moodj directory structure
    fn initialize(&self) -> Result<()>;
}

/// File system implementation of JournalRepository
#[derive(Debug, Clone)]
pub struct FileSystemRepository {
    pub root: PathBuf,
}

impl FileSystemRepository {
    /// Create a new repository with the given root directory
    pub fn new(root: PathBuf) -> Self {
        FileSystemRepository { root }
    }

    /// Discover journal root by walking up from current directory
    /// First checks MOODJ_ROOT environment variable, then falls back to discovery
    pub fn discover() -> Result<Self> {
        if let Ok(root_path) = std::env::var("MOODJ_ROOT") {
            let path = PathBuf::from(root_path);
            if Self::has_journal_dir(&path) {
                return Ok(FileSystemRepository::new(path));
            } else {
                return Err(MoodjError::Config(format!(
                    "MOODJ_ROOT is set to '{}' but no .moodj directory found. \
                    Run 'moodj init' in that directory or unset MOODJ_ROOT.",
                    path.display()
                )));
            }
        }

        let current_dir = std::env::current_dir()?;
        Self::discover_from(&current_dir)
    }

    /// Discover journal root by walking up from a specific starting directory
    pub fn discover_from(start: &Path) -> Result<Self> {
        let mut current = start.to_path_buf();

        loop {
            if Self::has_journal_dir(&current) {
                return Ok(FileSystemRepository::new(current));
            }

            match current.parent() {
                Some(parent) => current = parent.to_path_buf(),
                None => return Err(MoodjError::NotJournalDirectory(start.to_path_buf())),
            }
        }
    }

    /// Key-value storage backing this journal
    pub fn storage(&self) -> FileStorage {
        FileStorage::new(self.root.join(JOURNAL_DIR).join(STORAGE_DIR))
    }

    fn has_journal_dir(path: &Path) -> bool {
        path.join(JOURNAL_DIR).is_dir()
    }
}

impl JournalRepository for FileSystemRepository {
    fn root(&self) -> &Path {
        &self.root
    }

    fn load_config(&self) -> Result<Config> {
        Config::load_from_dir(&self.root)
    }

    fn save_config(&self, config: &Config) -> Result<()> {
        config.save_to_dir(&self.root)
    }

    fn is_initialized(&self) -> bool {
        Self::has_journal_dir(&self.root)
    }

    fn initialize(&self) -> Result<()> {
        let journal_dir = self.root.join(JOURNAL_DIR);

        if journal_dir.exists() {
            return Err(MoodjError::Config(format!(
                "Directory already initialized: {}",
                self.root.display()
            )));
        }

        fs::create_dir_all(journal_dir.join(STORAGE_DIR))?;
        Ok(())
    }
}
