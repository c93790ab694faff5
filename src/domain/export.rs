//! CSV export of journal entries

use crate::domain::{Entry, TimeZonePolicy};
use crate::error::{MoodjError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

pub const CSV_HEADER: &str = "Date,Mood,Note,Temperature,Weather Condition,City";
pub const EXPORT_FILENAME: &str = "mood_journal_export.csv";

/// How free-text cells are quoted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CsvQuoting {
    /// Date, mood and note wrapped in quotes with no escaping; weather cells bare
    #[default]
    Legacy,
    /// RFC 4180: embedded quotes doubled, weather cells quoted when needed
    Escaped,
}

impl fmt::Display for CsvQuoting {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CsvQuoting::Legacy => f.write_str("legacy"),
            CsvQuoting::Escaped => f.write_str("escaped"),
        }
    }
}

impl FromStr for CsvQuoting {
    type Err = MoodjError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "legacy" => Ok(CsvQuoting::Legacy),
            "escaped" => Ok(CsvQuoting::Escaped),
            _ => Err(MoodjError::Config(format!(
                "Invalid CSV quoting: '{}'. Valid values are: legacy, escaped",
                s
            ))),
        }
    }
}

impl CsvQuoting {
    fn quoted(&self, value: &str) -> String {
        match self {
            CsvQuoting::Legacy => format!("\"{}\"", value),
            CsvQuoting::Escaped => format!("\"{}\"", value.replace('"', "\"\"")),
        }
    }

    fn bare(&self, value: &str) -> String {
        match self {
            CsvQuoting::Legacy => value.to_string(),
            CsvQuoting::Escaped => {
                if value.contains(|c: char| matches!(c, ',' | '"' | '\n' | '\r')) {
                    self.quoted(value)
                } else {
                    value.to_string()
                }
            }
        }
    }
}

/// Serialize entries to CSV, one row per entry in the given order
pub fn to_csv(entries: &[Entry], tz: TimeZonePolicy, quoting: CsvQuoting) -> String {
    let mut output = String::with_capacity(CSV_HEADER.len() + 1 + entries.len() * 64);
    output.push_str(CSV_HEADER);
    output.push('\n');

    for entry in entries {
        output.push_str(&format_row(entry, tz, quoting));
        output.push('\n');
    }

    output
}

fn format_row(entry: &Entry, tz: TimeZonePolicy, quoting: CsvQuoting) -> String {
    let date = tz.date_of(&entry.occurred_at).format("%-m/%-d/%Y").to_string();
    let weather = match &entry.weather {
        Some(weather) => format!(
            "{}°C,{},{}",
            weather.temp,
            quoting.bare(&weather.condition),
            quoting.bare(&weather.city)
        ),
        None => ",,".to_string(),
    };

    format!(
        "{},{},{},{}",
        quoting.quoted(&date),
        quoting.quoted(entry.mood.name()),
        quoting.quoted(&entry.note),
        weather
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{MoodKind, WeatherSnapshot};
    use chrono::{TimeZone, Utc};

    fn entry(id: i64, day: u32, mood: MoodKind, note: &str, weather: Option<WeatherSnapshot>) -> Entry {
        Entry::new(
            id,
            Utc.with_ymd_and_hms(2025, 1, day, 9, 0, 0).unwrap(),
            mood,
            note,
            weather,
        )
    }

    #[test]
    fn test_empty_export_is_header_only() {
        let csv = to_csv(&[], TimeZonePolicy::Utc, CsvQuoting::Legacy);
        assert_eq!(csv, "Date,Mood,Note,Temperature,Weather Condition,City\n");
    }

    #[test]
    fn test_three_entries() {
        let entries = vec![
            entry(3, 17, MoodKind::Happy, "Sunny walk", Some(WeatherSnapshot::new(21, "Clear", "Paris"))),
            entry(2, 9, MoodKind::Sad, "", None),
            entry(1, 2, MoodKind::Calm, "Tea", None),
        ];

        let csv = to_csv(&entries, TimeZonePolicy::Utc, CsvQuoting::Legacy);
        let lines: Vec<&str> = csv.lines().collect();

        assert_eq!(lines.len(), 4);
        assert_eq!(lines[0], CSV_HEADER);
        assert_eq!(lines[1], "\"1/17/2025\",\"happy\",\"Sunny walk\",21°C,Clear,Paris");
        assert_eq!(lines[2], "\"1/9/2025\",\"sad\",\"\",,,");
        assert_eq!(lines[3], "\"1/2/2025\",\"calm\",\"Tea\",,,");
        assert!(lines[2].ends_with(",,"));
        assert!(lines[3].ends_with(",,"));
        assert!(csv.ends_with('\n'));
    }

    #[test]
    fn test_negative_temperature() {
        let entries = vec![entry(1, 5, MoodKind::Calm, "cold", Some(WeatherSnapshot::new(-4, "Snow", "Oslo")))];
        let csv = to_csv(&entries, TimeZonePolicy::Utc, CsvQuoting::Legacy);
        assert!(csv.contains(",-4°C,Snow,Oslo\n"));
    }

    #[test]
    fn test_legacy_does_not_escape_quotes() {
        let entries = vec![entry(1, 5, MoodKind::Angry, "he said \"no\", again", None)];
        let csv = to_csv(&entries, TimeZonePolicy::Utc, CsvQuoting::Legacy);
        assert!(csv.contains(",\"he said \"no\", again\",,,"));
    }

    #[test]
    fn test_escaped_doubles_quotes() {
        let entries = vec![entry(
            1,
            5,
            MoodKind::Angry,
            "he said \"no\"",
            Some(WeatherSnapshot::new(10, "Rain", "Washington, D.C.")),
        )];
        let csv = to_csv(&entries, TimeZonePolicy::Utc, CsvQuoting::Escaped);
        assert!(csv.contains(",\"he said \"\"no\"\"\",10°C,Rain,\"Washington, D.C.\"\n"));
    }

    #[test]
    fn test_date_uses_time_zone() {
        let late = Entry::new(
            1,
            Utc.with_ymd_and_hms(2025, 1, 31, 23, 0, 0).unwrap(),
            MoodKind::Happy,
            "",
            None,
        );
        let east: TimeZonePolicy = "+02:00".parse().unwrap();
        let csv = to_csv(&[late], east, CsvQuoting::Legacy);
        assert!(csv.contains("\"2/1/2025\""));
    }

    #[test]
    fn test_quoting_parse() {
        assert_eq!("Escaped".parse::<CsvQuoting>().unwrap(), CsvQuoting::Escaped);
        assert_eq!("legacy".parse::<CsvQuoting>().unwrap(), CsvQuoting::Legacy);
        assert!("rfc".parse::<CsvQuoting>().is_err());
    }
}
