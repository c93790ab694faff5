//! Error types for moodj

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for moodj
#[derive(Debug, Error)]
pub enum MoodjError {
    #[error("Not a moodj directory: {0}")]
    NotJournalDirectory(PathBuf),

    #[error("{0}")]
    Validation(String),

    #[error("Invalid time reference: {0}")]
    InvalidTimeReference(String),

    #[error("No entry id left after {0}")]
    IdExhausted(i64),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML deserialization error: {0}")]
    TomlDeserialize(#[from] toml::de::Error),

    #[error("TOML serialization error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),
}

impl MoodjError {
    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            MoodjError::NotJournalDirectory(_) => 2,
            MoodjError::Validation(_) => 3,
            MoodjError::InvalidTimeReference(_) => 4,
            _ => 1,
        }
    }

    /// Get a user-friendly error message with suggestions
    pub fn display_with_suggestions(&self) -> String {
        match self {
            MoodjError::NotJournalDirectory(path) => {
                format!(
                    "Not a moodj directory: {}\n\n\
                    Suggestions:\n\
                    • Run 'moodj init' in this directory to create a new journal\n\
                    • Navigate to an existing moodj directory\n\
                    • Set MOODJ_ROOT environment variable to your journal path",
                    path.display()
                )
            }
            MoodjError::Validation(msg) if msg.contains("mood") => {
                format!(
                    "{}\n\n\
                    Valid moods: happy, calm, sad, angry, excited\n\
                    Example: moodj add happy --note \"Great day\"",
                    msg
                )
            }
            MoodjError::Validation(msg) if msg.contains("temperature") => {
                format!(
                    "{}\n\n\
                    Temperatures are finite degrees Celsius\n\
                    Example: moodj add calm --temp -3.6 --condition Snow --city Oslo",
                    msg
                )
            }
            MoodjError::InvalidTimeReference(ref_str) => {
                format!(
                    "Invalid time reference: '{}'\n\n\
                    Valid time references:\n\
                    • now, today, yesterday\n\
                    • Specific dates: YYYY-MM-DD (e.g., 2025-01-17)\n\
                    • Date and time: YYYY-MM-DD HH:MM (e.g., 2025-01-17 08:30)\n\
                    • RFC 3339 instants (e.g., 2025-01-17T08:30:00Z)",
                    ref_str
                )
            }
            MoodjError::Config(msg) => {
                if msg.contains("Invalid timezone") {
                    format!(
                        "{}\n\n\
                        Valid timezones: local, utc, or a fixed offset like +02:00\n\
                        Example: moodj config timezone utc",
                        msg
                    )
                } else {
                    msg.clone()
                }
            }
            _ => self.to_string(),
        }
    }
}

/// Result type using MoodjError
pub type Result<T> = std::result::Result<T, MoodjError>;
