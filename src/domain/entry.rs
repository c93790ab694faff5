//! Journal entries and list filters

use crate::domain::{MoodKind, WeatherSnapshot};
use crate::error::{MoodjError, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// One mood journal record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    pub id: i64,
    #[serde(rename = "date")]
    pub occurred_at: DateTime<Utc>,
    pub mood: MoodKind,
    #[serde(default)]
    pub note: String,
    #[serde(default)]
    pub weather: Option<WeatherSnapshot>,
}

impl Entry {
    pub fn new(
        id: i64,
        occurred_at: DateTime<Utc>,
        mood: MoodKind,
        note: impl Into<String>,
        weather: Option<WeatherSnapshot>,
    ) -> Self {
        Entry {
            id,
            occurred_at,
            mood,
            note: note.into(),
            weather,
        }
    }
}

/// Which entries a listing should include
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EntryFilter {
    #[default]
    All,
    Mood(MoodKind),
}

impl EntryFilter {
    pub fn matches(&self, entry: &Entry) -> bool {
        match self {
            EntryFilter::All => true,
            EntryFilter::Mood(mood) => entry.mood == *mood,
        }
    }
}

impl FromStr for EntryFilter {
    type Err = MoodjError;

    fn from_str(s: &str) -> Result<Self> {
        if s.trim().eq_ignore_ascii_case("all") {
            Ok(EntryFilter::All)
        } else {
            s.parse().map(EntryFilter::Mood)
        }
    }
}
