//! Config management use case

use crate::error::{MoodjError, Result};
use crate::infrastructure::{Config, FileSystemRepository, JournalRepository};

/// Keys accepted by `get` and `set`
pub const CONFIG_KEYS: [&str; 4] = ["timezone", "trend_order", "csv_quoting", "created"];

/// Service for managing journal configuration
pub struct ConfigService {
    repository: FileSystemRepository,
}

impl ConfigService {
    /// Create a new config service
    pub fn new(repository: FileSystemRepository) -> Self {
        ConfigService { repository }
    }

    /// Get a single config value
    pub fn get(&self, key: &str) -> Result<String> {
        let config = self.repository.load_config()?;

        match key {
            "timezone" => Ok(config.timezone.to_string()),
            "trend_order" => Ok(config.trend_order.to_string()),
            "csv_quoting" => Ok(config.csv_quoting.to_string()),
            "created" => Ok(config.created.to_rfc3339()),
            _ => Err(unknown_key(key)),
        }
    }

    /// Set a config value
    pub fn set(&self, key: &str, value: &str) -> Result<()> {
        let mut config = self.repository.load_config()?;

        match key {
            "timezone" => config.timezone = value.parse()?,
            "trend_order" => config.trend_order = value.parse()?,
            "csv_quoting" => config.csv_quoting = value.parse()?,
            "created" => {
                return Err(MoodjError::Config(
                    "Cannot modify 'created' field (read-only)".to_string(),
                ));
            }
            _ => return Err(unknown_key(key)),
        }

        self.repository.save_config(&config)?;
        tracing::info!(key, value, "updated config");
        Ok(())
    }

    /// List all config values
    pub fn list(&self) -> Result<Config> {
        self.repository.load_config()
    }
}

fn unknown_key(key: &str) -> MoodjError {
    MoodjError::Config(format!(
        "Unknown config key: '{}'. Valid keys are: {}",
        key,
        CONFIG_KEYS.join(", ")
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::InitService;
    use crate::domain::{CsvQuoting, TimeZonePolicy, TrendOrder};
    use tempfile::TempDir;

    fn service(temp: &TempDir) -> ConfigService {
        let repo = InitService::execute(temp.path(), TimeZonePolicy::Utc).unwrap();
        ConfigService::new(repo)
    }

    #[test]
    fn test_get_defaults() {
        let temp = TempDir::new().unwrap();
        let service = service(&temp);

        assert_eq!(service.get("timezone").unwrap(), "utc");
        assert_eq!(service.get("trend_order").unwrap(), "first-seen");
        assert_eq!(service.get("csv_quoting").unwrap(), "legacy");
        assert!(!service.get("created").unwrap().is_empty());
    }

    #[test]
    fn test_set_values() {
        let temp = TempDir::new().unwrap();
        let service = service(&temp);

        service.set("timezone", "+05:30").unwrap();
        service.set("trend_order", "chronological").unwrap();
        service.set("csv_quoting", "escaped").unwrap();

        let config = service.list().unwrap();
        assert_eq!(config.timezone, "+05:30".parse::<TimeZonePolicy>().unwrap());
        assert_eq!(config.trend_order, TrendOrder::Chronological);
        assert_eq!(config.csv_quoting, CsvQuoting::Escaped);
    }

    #[test]
    fn test_set_invalid_value_keeps_config() {
        let temp = TempDir::new().unwrap();
        let service = service(&temp);

        assert!(service.set("timezone", "mars").is_err());
        assert_eq!(service.get("timezone").unwrap(), "utc");
    }

    #[test]
    fn test_created_is_read_only() {
        let temp = TempDir::new().unwrap();
        let service = service(&temp);

        let err = service.set("created", "2020-01-01T00:00:00Z").unwrap_err();
        assert!(err.to_string().contains("read-only"));
    }

    #[test]
    fn test_unknown_key() {
        let temp = TempDir::new().unwrap();
        let service = service(&temp);

        let err = service.get("editor").unwrap_err();
        assert!(err.to_string().contains("Unknown config key: 'editor'"));
    }
}
