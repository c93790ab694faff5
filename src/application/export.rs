//! Export entries to a CSV file

use crate::application::JournalSession;
use crate::domain::export::EXPORT_FILENAME;
use crate::error::Result;
use crate::infrastructure::Storage;
use std::fs;
use std::path::{Path, PathBuf};

/// Writes the journal's CSV export to disk
pub struct ExportService;

impl ExportService {
    /// Default export location inside `dir`
    pub fn default_path(dir: &Path) -> PathBuf {
        dir.join(EXPORT_FILENAME)
    }

    /// Write the export to `path`, replacing any existing file
    pub fn execute<S: Storage>(session: &JournalSession<S>, path: &Path) -> Result<usize> {
        let csv = session.export_csv();

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }
        fs::write(path, csv)?;

        let count = session.store().len();
        tracing::info!(path = %path.display(), count, "exported entries");
        Ok(count)
    }
}
