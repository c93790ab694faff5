//! The journal's entry collection and its write-through persistence

use crate::domain::{Entry, EntryFilter, MoodKind, WeatherSnapshot};
use crate::error::{MoodjError, Result};
use crate::infrastructure::{Storage, ENTRIES_BACKUP_KEY, ENTRIES_KEY};
use chrono::{DateTime, Utc};

/// Newest-first collection of entries backed by a [`Storage`].
///
/// Every successful mutation rewrites the whole collection under
/// [`ENTRIES_KEY`]. Writes are not batched, which is fine for a personal
/// journal but makes `add_entry` O(n) in the collection size.
pub struct EntryStore<S: Storage> {
    storage: S,
    entries: Vec<Entry>,
    last_id: i64,
}

impl<S: Storage> EntryStore<S> {
    /// Load the persisted collection.
    ///
    /// Missing or malformed data yields an empty store. Malformed JSON is
    /// copied to [`ENTRIES_BACKUP_KEY`] first so the next save cannot erase
    /// it. Only I/O failures are returned as errors.
    pub fn initialize(storage: S) -> Result<Self> {
        let entries = match storage.load(ENTRIES_KEY)? {
            Some(value) => match serde_json::from_value::<Vec<Entry>>(value.clone()) {
                Ok(entries) => entries,
                Err(e) => {
                    tracing::warn!(
                        key = ENTRIES_KEY,
                        backup = ENTRIES_BACKUP_KEY,
                        error = %e,
                        "stored entries are malformed, starting empty"
                    );
                    if let Err(e) = storage.save(ENTRIES_BACKUP_KEY, &value) {
                        tracing::warn!(error = %e, "could not back up malformed entries");
                    }
                    Vec::new()
                }
            },
            None => Vec::new(),
        };

        let last_id = entries.iter().map(|entry| entry.id).max().unwrap_or(0);
        tracing::debug!(count = entries.len(), "loaded entries");

        Ok(EntryStore {
            storage,
            entries,
            last_id,
        })
    }

    /// Add an entry at the front of the collection and persist it.
    ///
    /// `mood` must name a [`MoodKind`]; anything else, including an empty
    /// string, is a validation error and leaves the store untouched.
    pub fn add_entry(
        &mut self,
        mood: &str,
        note: &str,
        occurred_at: DateTime<Utc>,
        weather: Option<WeatherSnapshot>,
    ) -> Result<Entry> {
        let mood = MoodKind::parse_required(mood)?;
        let id = self.next_id(Utc::now())?;
        let entry = Entry::new(id, occurred_at, mood, note, weather);

        self.entries.insert(0, entry.clone());
        if let Err(e) = self.persist() {
            self.entries.remove(0);
            return Err(e);
        }

        self.last_id = id;
        tracing::info!(id, mood = %mood, "added entry");
        Ok(entry)
    }

    /// Entries matching `filter`, in collection order
    pub fn list_entries(&self, filter: EntryFilter) -> Vec<&Entry> {
        self.entries
            .iter()
            .filter(|entry| filter.matches(entry))
            .collect()
    }

    /// The whole collection, newest first
    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    // Millisecond timestamps, bumped past the newest id so rapid inserts never collide.
    fn next_id(&self, now: DateTime<Utc>) -> Result<i64> {
        let bumped = self
            .last_id
            .checked_add(1)
            .ok_or(MoodjError::IdExhausted(self.last_id))?;
        Ok(now.timestamp_millis().max(bumped))
    }

    fn persist(&self) -> Result<()> {
        let value = serde_json::to_value(&self.entries)?;
        self.storage.save(ENTRIES_KEY, &value)
    }
}
