//! Time reference parsing and resolution for new entries

use crate::domain::TimeZonePolicy;
use crate::error::{MoodjError, Result};
use chrono::{DateTime, Duration, NaiveDate, NaiveDateTime, NaiveTime, Utc};

/// When an entry happened, as typed by the user
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TimeReference {
    /// The current instant
    Now,
    /// Same wall-clock time one day earlier
    Yesterday,
    /// Midnight at the start of a date
    SpecificDate(NaiveDate),
    /// A wall-clock date and time in the journal's time zone
    SpecificDateTime(NaiveDateTime),
    /// A fully qualified instant
    Instant(DateTime<Utc>),
}

impl TimeReference {
    /// Parse a time reference string
    pub fn parse(input: &str) -> Result<Self> {
        let trimmed = input.trim();
        let normalized = trimmed.to_lowercase();

        match normalized.as_str() {
            "now" | "today" => Ok(TimeReference::Now),
            "yesterday" => Ok(TimeReference::Yesterday),
            _ => {
                if let Ok(instant) = DateTime::parse_from_rfc3339(trimmed) {
                    return Ok(TimeReference::Instant(instant.with_timezone(&Utc)));
                }
                if let Ok(naive) = NaiveDateTime::parse_from_str(trimmed, "%Y-%m-%d %H:%M") {
                    return Ok(TimeReference::SpecificDateTime(naive));
                }
                NaiveDate::parse_from_str(trimmed, "%Y-%m-%d")
                    .map(TimeReference::SpecificDate)
                    .map_err(|_| MoodjError::InvalidTimeReference(input.to_string()))
            }
        }
    }

    /// Resolve this reference to an instant, given the current time
    pub fn resolve(&self, now: DateTime<Utc>, tz: TimeZonePolicy) -> Result<DateTime<Utc>> {
        match self {
            TimeReference::Now => Ok(now),
            TimeReference::Yesterday => Ok(now - Duration::days(1)),
            TimeReference::SpecificDate(date) => {
                Self::local_to_instant(date.and_time(NaiveTime::MIN), tz)
            }
            TimeReference::SpecificDateTime(naive) => Self::local_to_instant(*naive, tz),
            TimeReference::Instant(instant) => Ok(*instant),
        }
    }

    fn local_to_instant(naive: NaiveDateTime, tz: TimeZonePolicy) -> Result<DateTime<Utc>> {
        tz.to_instant(naive).ok_or_else(|| {
            MoodjError::InvalidTimeReference(format!("{} does not exist in {}", naive, tz))
        })
    }
}
