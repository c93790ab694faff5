//! Output formatting utilities

use crate::domain::analytics::MIN_ENTRIES_FOR_TRENDS;
use crate::domain::{Entry, MonthlySummary, MoodKind, TimeZonePolicy};

/// Format a list of entries for display
pub fn format_entry_list(entries: &[&Entry], tz: TimeZonePolicy) -> String {
    if entries.is_empty() {
        return "No entries found. Start adding your daily moods!".to_string();
    }

    let mut output = String::new();
    for entry in entries {
        let date = tz.date_of(&entry.occurred_at).format("%b %-d, %Y").to_string();
        let mut line = format!("{:<13} {} {:<7}", date, entry.mood.glyph(), entry.mood);

        if !entry.note.is_empty() {
            line.push_str("  ");
            line.push_str(&entry.note);
        }

        if let Some(weather) = &entry.weather {
            line.push_str(&format!(
                "  {} {}°C in {}",
                weather.glyph(),
                weather.temp,
                weather.city
            ));
        }

        output.push_str(line.trim_end());
        output.push('\n');
    }
    output
}

/// Format monthly summaries as percentage rows; `None` means too few entries
pub fn format_trends(summaries: Option<&[MonthlySummary]>) -> String {
    let summaries = match summaries {
        Some(summaries) => summaries,
        None => {
            return format!(
                "Add at least {} entries to see mood trends",
                MIN_ENTRIES_FOR_TRENDS
            )
        }
    };

    let mut output = String::new();
    for summary in summaries {
        let noun = if summary.total == 1 { "entry" } else { "entries" };
        output.push_str(&format!("{} ({} {})\n", summary.month, summary.total, noun));

        for mood in MoodKind::ALL {
            let count = summary.count(mood);
            if count == 0 {
                continue;
            }
            output.push_str(&format!(
                "  {} {:<7} {:>3}% ({})\n",
                mood.glyph(),
                mood,
                summary.percentage(mood).round() as u32,
                count
            ));
        }
    }
    output
}

/// Format the mood legend
pub fn format_mood_list() -> String {
    let mut output = String::new();
    for mood in MoodKind::ALL {
        output.push_str(&format!("{} {:<7}  {}\n", mood.glyph(), mood, mood.color()));
    }
    output
}
