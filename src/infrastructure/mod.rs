//! Infrastructure layer - External I/O and persistence

pub mod config;
pub mod repository;
pub mod storage;

pub use config::Config;
pub use repository::{FileSystemRepository, JournalRepository};
pub use storage::{FileStorage, MemoryStorage, Storage, DARK_MODE_KEY, ENTRIES_BACKUP_KEY, ENTRIES_KEY};
