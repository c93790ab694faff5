//! Monthly mood distribution

use crate::domain::{Entry, MoodKind, TimeZonePolicy};
use crate::error::{MoodjError, Result};
use chrono::Datelike;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};
use std::fmt;
use std::str::FromStr;

/// Number of month groups kept in a distribution
pub const TREND_WINDOW: usize = 6;

/// Trends are only worth showing once the journal has this many entries
pub const MIN_ENTRIES_FOR_TRENDS: usize = 5;

/// A calendar month, displayed as `month/year` without padding
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MonthKey {
    pub year: i32,
    pub month: u32,
}

impl fmt::Display for MonthKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.month, self.year)
    }
}

/// Per-month entry counts
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthlySummary {
    pub month: MonthKey,
    pub total: usize,
    pub moods: BTreeMap<MoodKind, usize>,
}

impl MonthlySummary {
    fn new(month: MonthKey) -> Self {
        MonthlySummary {
            month,
            total: 0,
            moods: BTreeMap::new(),
        }
    }

    pub fn count(&self, mood: MoodKind) -> usize {
        self.moods.get(&mood).copied().unwrap_or(0)
    }

    /// Share of this month's entries with the given mood, 0-100.
    ///
    /// An empty month reports 0 for every mood.
    pub fn percentage(&self, mood: MoodKind) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        self.count(mood) as f64 / self.total as f64 * 100.0
    }
}

/// How month groups are ordered before the trailing window is taken
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TrendOrder {
    /// Order of first appearance while scanning newest-first entries
    #[default]
    FirstSeen,
    /// Ascending calendar order
    Chronological,
}

impl fmt::Display for TrendOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TrendOrder::FirstSeen => f.write_str("first-seen"),
            TrendOrder::Chronological => f.write_str("chronological"),
        }
    }
}

impl FromStr for TrendOrder {
    type Err = MoodjError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "first-seen" => Ok(TrendOrder::FirstSeen),
            "chronological" => Ok(TrendOrder::Chronological),
            _ => Err(MoodjError::Config(format!(
                "Invalid trend order: '{}'. Valid values are: first-seen, chronological",
                s
            ))),
        }
    }
}

/// Group entries by calendar month and count moods.
///
/// With [`TrendOrder::FirstSeen`] the groups keep the order in which their
/// month first shows up in `entries`, and the window is the last
/// [`TREND_WINDOW`] groups of that sequence. For a newest-first collection
/// this is not the six most recent months.
pub fn monthly_mood_distribution(
    entries: &[Entry],
    tz: TimeZonePolicy,
    order: TrendOrder,
) -> Vec<MonthlySummary> {
    let mut summaries: Vec<MonthlySummary> = Vec::new();
    let mut index: HashMap<MonthKey, usize> = HashMap::new();

    for entry in entries {
        let date = tz.date_of(&entry.occurred_at);
        let key = MonthKey {
            year: date.year(),
            month: date.month(),
        };

        let slot = *index.entry(key).or_insert_with(|| {
            summaries.push(MonthlySummary::new(key));
            summaries.len() - 1
        });

        let summary = &mut summaries[slot];
        summary.total += 1;
        *summary.moods.entry(entry.mood).or_insert(0) += 1;
    }

    if order == TrendOrder::Chronological {
        summaries.sort_by_key(|summary| summary.month);
    }

    let skip = summaries.len().saturating_sub(TREND_WINDOW);
    summaries.split_off(skip)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn entry(id: i64, year: i32, month: u32, day: u32, mood: MoodKind) -> Entry {
        Entry::new(
            id,
            Utc.with_ymd_and_hms(year, month, day, 12, 0, 0).unwrap(),
            mood,
            "",
            None,
        )
    }

    /// One calm entry per month starting 1/2024, returned newest-first
    fn monthly_entries(count: u32) -> Vec<Entry> {
        let mut entries: Vec<Entry> = (0..count)
            .map(|i| {
                let month0 = i % 12;
                let year = 2024 + (i / 12) as i32;
                entry(i as i64, year, month0 + 1, 1, MoodKind::Calm)
            })
            .collect();
        entries.reverse();
        entries
    }

    #[test]
    fn test_empty_input() {
        let result = monthly_mood_distribution(&[], TimeZonePolicy::Utc, TrendOrder::FirstSeen);
        assert!(result.is_empty());
    }

    #[test]
    fn test_counts_per_month() {
        let entries = vec![
            entry(4, 2025, 2, 3, MoodKind::Happy),
            entry(3, 2025, 2, 1, MoodKind::Sad),
            entry(2, 2025, 1, 20, MoodKind::Happy),
            entry(1, 2025, 1, 5, MoodKind::Happy),
        ];

        let result =
            monthly_mood_distribution(&entries, TimeZonePolicy::Utc, TrendOrder::FirstSeen);

        assert_eq!(result.len(), 2);
        assert_eq!(result[0].month.to_string(), "2/2025");
        assert_eq!(result[0].total, 2);
        assert_eq!(result[0].count(MoodKind::Happy), 1);
        assert_eq!(result[0].count(MoodKind::Sad), 1);
        assert_eq!(result[1].month.to_string(), "1/2025");
        assert_eq!(result[1].count(MoodKind::Happy), 2);
        assert_eq!(result[1].count(MoodKind::Angry), 0);
    }

    #[test]
    fn test_mood_counts_sum_to_total() {
        let moods = MoodKind::ALL;
        let entries: Vec<Entry> = (0..40)
            .map(|i| entry(i, 2025, (i % 5 + 1) as u32, 1, moods[(i % 7 % 5) as usize]))
            .collect();

        for summary in
            monthly_mood_distribution(&entries, TimeZonePolicy::Utc, TrendOrder::FirstSeen)
        {
            assert_eq!(summary.moods.values().sum::<usize>(), summary.total);
        }
    }

    #[test]
    fn test_first_seen_keeps_trailing_groups() {
        // Newest-first scan of eight months: groups appear 8/2024 .. 1/2024,
        // and the trailing window is the six oldest months.
        let entries = monthly_entries(8);
        let result =
            monthly_mood_distribution(&entries, TimeZonePolicy::Utc, TrendOrder::FirstSeen);

        let labels: Vec<String> = result.iter().map(|s| s.month.to_string()).collect();
        assert_eq!(
            labels,
            vec!["6/2024", "5/2024", "4/2024", "3/2024", "2/2024", "1/2024"]
        );
    }

    #[test]
    fn test_chronological_keeps_most_recent_months() {
        let entries = monthly_entries(8);
        let result =
            monthly_mood_distribution(&entries, TimeZonePolicy::Utc, TrendOrder::Chronological);

        let labels: Vec<String> = result.iter().map(|s| s.month.to_string()).collect();
        assert_eq!(
            labels,
            vec!["3/2024", "4/2024", "5/2024", "6/2024", "7/2024", "8/2024"]
        );
    }

    #[test]
    fn test_grouping_follows_time_zone() {
        let late = Entry::new(
            1,
            Utc.with_ymd_and_hms(2025, 1, 31, 23, 0, 0).unwrap(),
            MoodKind::Calm,
            "",
            None,
        );

        let utc = monthly_mood_distribution(
            std::slice::from_ref(&late),
            TimeZonePolicy::Utc,
            TrendOrder::FirstSeen,
        );
        assert_eq!(utc[0].month.to_string(), "1/2025");

        let east: TimeZonePolicy = "+03:00".parse().unwrap();
        let shifted =
            monthly_mood_distribution(std::slice::from_ref(&late), east, TrendOrder::FirstSeen);
        assert_eq!(shifted[0].month.to_string(), "2/2025");
    }

    #[test]
    fn test_percentage() {
        let entries = vec![
            entry(3, 2025, 1, 3, MoodKind::Happy),
            entry(2, 2025, 1, 2, MoodKind::Happy),
            entry(1, 2025, 1, 1, MoodKind::Sad),
            entry(0, 2025, 1, 1, MoodKind::Calm),
        ];
        let result =
            monthly_mood_distribution(&entries, TimeZonePolicy::Utc, TrendOrder::FirstSeen);
        assert_eq!(result[0].percentage(MoodKind::Happy), 50.0);
        assert_eq!(result[0].percentage(MoodKind::Sad), 25.0);
        assert_eq!(result[0].percentage(MoodKind::Excited), 0.0);
    }

    #[test]
    fn test_percentage_of_empty_month_is_zero() {
        let summary = MonthlySummary::new(MonthKey {
            year: 2025,
            month: 1,
        });
        assert_eq!(summary.percentage(MoodKind::Happy), 0.0);
    }

    #[test]
    fn test_trend_order_parse() {
        assert_eq!(
            "chronological".parse::<TrendOrder>().unwrap(),
            TrendOrder::Chronological
        );
        assert_eq!("First-Seen".parse::<TrendOrder>().unwrap(), TrendOrder::FirstSeen);
        assert!("random".parse::<TrendOrder>().is_err());
    }
}
