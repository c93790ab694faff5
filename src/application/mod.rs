//! Application layer - Use cases and orchestration

pub mod entry_store;
pub mod export;
pub mod init;
pub mod manage_config;
pub mod session;

pub use entry_store::EntryStore;
pub use export::ExportService;
pub use init::InitService;
pub use manage_config::ConfigService;
pub use session::{JournalSession, NewEntry};
