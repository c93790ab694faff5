//! Key-value persistence for journal state

use crate::error::{MoodjError, Result};
use serde_json::Value;
use std::cell::RefCell;
use std::collections::BTreeMap;
use std::fs;
use std::path::PathBuf;

/// Key holding the entry collection
pub const ENTRIES_KEY: &str = "moodEntries";

/// Key receiving an entry collection that could not be read
pub const ENTRIES_BACKUP_KEY: &str = "moodEntriesBackup";

/// Key holding the presentation's dark mode flag
pub const DARK_MODE_KEY: &str = "darkMode";

/// Durable mapping from string keys to JSON values.
///
/// A stored value that is not valid JSON loads as `None`. Only I/O
/// failures are reported as errors.
pub trait Storage {
    fn load(&self, key: &str) -> Result<Option<Value>>;

    fn save(&self, key: &str, value: &Value) -> Result<()>;
}

/// One JSON file per key inside a directory
#[derive(Debug, Clone)]
pub struct FileStorage {
    dir: PathBuf,
}

impl FileStorage {
    pub fn new(dir: PathBuf) -> Self {
        FileStorage { dir }
    }

    /// Path of the file backing `key`
    pub fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{}.json", key))
    }
}

impl Storage for FileStorage {
    fn load(&self, key: &str) -> Result<Option<Value>> {
        let path = self.path_for(key);

        let contents = match fs::read_to_string(&path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(MoodjError::Io(e)),
        };

        Ok(parse_stored(key, &contents))
    }

    fn save(&self, key: &str, value: &Value) -> Result<()> {
        if !self.dir.exists() {
            fs::create_dir_all(&self.dir)?;
        }

        let path = self.path_for(key);
        let tmp_path = self.dir.join(format!("{}.json.tmp", key));
        let contents = serde_json::to_string(value)?;

        // Rename over the old file so readers see either the old or the new value.
        fs::write(&tmp_path, contents)?;
        fs::rename(&tmp_path, &path)?;

        tracing::debug!(key, path = %path.display(), "saved value");
        Ok(())
    }
}

/// In-process storage holding raw serialized strings
#[derive(Debug, Default)]
pub struct MemoryStorage {
    values: RefCell<BTreeMap<String, String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a raw string, bypassing serialization
    pub fn insert_raw(&self, key: &str, raw: &str) {
        self.values
            .borrow_mut()
            .insert(key.to_string(), raw.to_string());
    }

    pub fn raw(&self, key: &str) -> Option<String> {
        self.values.borrow().get(key).cloned()
    }
}

impl Storage for MemoryStorage {
    fn load(&self, key: &str) -> Result<Option<Value>> {
        Ok(self
            .values
            .borrow()
            .get(key)
            .and_then(|raw| parse_stored(key, raw)))
    }

    fn save(&self, key: &str, value: &Value) -> Result<()> {
        let raw = serde_json::to_string(value)?;
        self.values.borrow_mut().insert(key.to_string(), raw);
        Ok(())
    }
}

impl<S: Storage + ?Sized> Storage for &S {
    fn load(&self, key: &str) -> Result<Option<Value>> {
        (**self).load(key)
    }

    fn save(&self, key: &str, value: &Value) -> Result<()> {
        (**self).save(key, value)
    }
}

fn parse_stored(key: &str, raw: &str) -> Option<Value> {
    match serde_json::from_str(raw) {
        Ok(value) => Some(value),
        Err(e) => {
            tracing::warn!(key, error = %e, "stored value is not valid JSON, ignoring it");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tempfile::TempDir;

    #[test]
    fn test_file_load_missing_key() {
        let temp = TempDir::new().unwrap();
        let storage = FileStorage::new(temp.path().join("storage"));
        assert_eq!(storage.load(ENTRIES_KEY).unwrap(), None);
    }

    #[test]
    fn test_file_save_and_load() {
        let temp = TempDir::new().unwrap();
        let storage = FileStorage::new(temp.path().join("storage"));

        storage.save(DARK_MODE_KEY, &json!(true)).unwrap();

        assert!(temp.path().join("storage/darkMode.json").exists());
        assert!(!temp.path().join("storage/darkMode.json.tmp").exists());
        assert_eq!(storage.load(DARK_MODE_KEY).unwrap(), Some(json!(true)));
    }

    #[test]
    fn test_file_corrupted_value_loads_as_absent() {
        let temp = TempDir::new().unwrap();
        let storage = FileStorage::new(temp.path().to_path_buf());
        fs::write(storage.path_for(ENTRIES_KEY), "not json at all").unwrap();

        assert_eq!(storage.load(ENTRIES_KEY).unwrap(), None);
    }

    #[test]
    fn test_file_keys_are_independent() {
        let temp = TempDir::new().unwrap();
        let storage = FileStorage::new(temp.path().to_path_buf());

        storage.save(DARK_MODE_KEY, &json!(false)).unwrap();
        storage.save(ENTRIES_KEY, &json!([])).unwrap();
        storage.save(ENTRIES_KEY, &json!([{"id": 1}])).unwrap();

        assert_eq!(storage.load(DARK_MODE_KEY).unwrap(), Some(json!(false)));
        assert_eq!(storage.load(ENTRIES_KEY).unwrap(), Some(json!([{"id": 1}])));
    }

    #[test]
    fn test_memory_storage() {
        let storage = MemoryStorage::new();
        assert_eq!(storage.load(ENTRIES_KEY).unwrap(), None);

        storage.save(ENTRIES_KEY, &json!(["a"])).unwrap();
        assert_eq!(storage.raw(ENTRIES_KEY).as_deref(), Some("[\"a\"]"));

        storage.insert_raw(ENTRIES_KEY, "{broken");
        assert_eq!(storage.load(ENTRIES_KEY).unwrap(), None);
    }
}
