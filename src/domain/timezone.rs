//! Calendar time zone used for grouping and displaying entries

use crate::error::{MoodjError, Result};
use chrono::{DateTime, FixedOffset, Local, NaiveDate, NaiveDateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Which calendar an instant is projected onto before taking its date
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum TimeZonePolicy {
    /// The machine's local time zone
    #[default]
    Local,
    Utc,
    Fixed(FixedOffset),
}

impl TimeZonePolicy {
    /// Wall-clock date and time of an instant in this zone
    pub fn naive_local(&self, instant: &DateTime<Utc>) -> NaiveDateTime {
        match self {
            TimeZonePolicy::Local => instant.with_timezone(&Local).naive_local(),
            TimeZonePolicy::Utc => instant.naive_utc(),
            TimeZonePolicy::Fixed(offset) => instant.with_timezone(offset).naive_local(),
        }
    }

    pub fn date_of(&self, instant: &DateTime<Utc>) -> NaiveDate {
        self.naive_local(instant).date()
    }

    /// Interpret a wall-clock time in this zone.
    ///
    /// Ambiguous local times resolve to the earlier instant; times skipped by a
    /// DST transition have no instant and yield `None`.
    pub fn to_instant(&self, naive: NaiveDateTime) -> Option<DateTime<Utc>> {
        match self {
            TimeZonePolicy::Local => Local
                .from_local_datetime(&naive)
                .earliest()
                .map(|dt| dt.with_timezone(&Utc)),
            TimeZonePolicy::Utc => Some(Utc.from_utc_datetime(&naive)),
            TimeZonePolicy::Fixed(offset) => offset
                .from_local_datetime(&naive)
                .single()
                .map(|dt| dt.with_timezone(&Utc)),
        }
    }
}

impl fmt::Display for TimeZonePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TimeZonePolicy::Local => f.write_str("local"),
            TimeZonePolicy::Utc => f.write_str("utc"),
            TimeZonePolicy::Fixed(offset) => write!(f, "{}", offset),
        }
    }
}

impl FromStr for TimeZonePolicy {
    type Err = MoodjError;

    fn from_str(s: &str) -> Result<Self> {
        let normalized = s.trim().to_lowercase();
        match normalized.as_str() {
            "local" => Ok(TimeZonePolicy::Local),
            "utc" | "z" => Ok(TimeZonePolicy::Utc),
            _ => parse_offset(&normalized)
                .map(TimeZonePolicy::Fixed)
                .ok_or_else(|| {
                    MoodjError::Config(format!(
                        "Invalid timezone: '{}'. Use local, utc, or an offset like +02:00",
                        s
                    ))
                }),
        }
    }
}

impl TryFrom<String> for TimeZonePolicy {
    type Error = MoodjError;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

impl From<TimeZonePolicy> for String {
    fn from(policy: TimeZonePolicy) -> Self {
        policy.to_string()
    }
}

/// Parse `+HH:MM`, `-HH:MM` or `+HHMM`
fn parse_offset(s: &str) -> Option<FixedOffset> {
    let (sign, rest) = match s.as_bytes().first()? {
        b'+' => (1, &s[1..]),
        b'-' => (-1, &s[1..]),
        _ => return None,
    };
    let digits: String = rest.chars().filter(|c| *c != ':').collect();
    if digits.len() != 4 || !digits.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }
    let hours: i32 = digits[..2].parse().ok()?;
    let minutes: i32 = digits[2..].parse().ok()?;
    if minutes >= 60 {
        return None;
    }
    FixedOffset::east_opt(sign * (hours * 3600 + minutes * 60))
}
