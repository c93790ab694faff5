//! An open journal: configuration plus its entry store

use crate::application::EntryStore;
use crate::domain::analytics::MIN_ENTRIES_FOR_TRENDS;
use crate::domain::{
    monthly_mood_distribution, to_csv, Entry, EntryFilter, MonthlySummary, TimeReference,
    WeatherSnapshot,
};
use crate::error::Result;
use crate::infrastructure::{Config, FileStorage, FileSystemRepository, JournalRepository, Storage};
use chrono::{DateTime, Utc};

/// Input for a new entry as collected by a front end
#[derive(Debug, Clone, Default)]
pub struct NewEntry {
    pub mood: String,
    pub note: String,
    /// `None` means now
    pub when: Option<TimeReference>,
    pub weather: Option<WeatherSnapshot>,
}

/// Created at the start of a command and dropped at its end
pub struct JournalSession<S: Storage> {
    config: Config,
    store: EntryStore<S>,
}

impl JournalSession<FileStorage> {
    /// Open the journal rooted at `repository`
    pub fn open(repository: &FileSystemRepository) -> Result<Self> {
        let config = repository.load_config()?;
        let store = EntryStore::initialize(repository.storage())?;
        Ok(JournalSession { config, store })
    }
}

impl<S: Storage> JournalSession<S> {
    pub fn with_store(config: Config, store: EntryStore<S>) -> Self {
        JournalSession { config, store }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn store(&self) -> &EntryStore<S> {
        &self.store
    }

    /// Add an entry, resolving its time against `now`
    pub fn add(&mut self, request: NewEntry, now: DateTime<Utc>) -> Result<Entry> {
        let occurred_at = match &request.when {
            Some(reference) => reference.resolve(now, self.config.timezone)?,
            None => now,
        };
        self.store
            .add_entry(&request.mood, &request.note, occurred_at, request.weather)
    }

    pub fn list(&self, filter: EntryFilter) -> Vec<&Entry> {
        self.store.list_entries(filter)
    }

    /// Monthly distribution, or `None` while the journal is too small for trends
    pub fn trends(&self) -> Option<Vec<MonthlySummary>> {
        if self.store.len() < MIN_ENTRIES_FOR_TRENDS {
            return None;
        }
        Some(monthly_mood_distribution(
            self.store.entries(),
            self.config.timezone,
            self.config.trend_order,
        ))
    }

    /// CSV for the whole collection
    pub fn export_csv(&self) -> String {
        to_csv(
            self.store.entries(),
            self.config.timezone,
            self.config.csv_quoting,
        )
    }
}
