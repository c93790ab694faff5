//! Domain layer - Business logic and domain models

pub mod analytics;
pub mod entry;
pub mod export;
pub mod mood;
pub mod time_ref;
pub mod timezone;
pub mod weather;

pub use analytics::{monthly_mood_distribution, MonthKey, MonthlySummary, TrendOrder};
pub use entry::{Entry, EntryFilter};
pub use export::{to_csv, CsvQuoting};
pub use mood::MoodKind;
pub use time_ref::TimeReference;
pub use timezone::TimeZonePolicy;
pub use weather::WeatherSnapshot;
