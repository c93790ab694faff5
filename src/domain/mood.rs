//! Mood kinds and their display attributes

use crate::error::{MoodjError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The fixed set of selectable moods
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MoodKind {
    Happy,
    Calm,
    Sad,
    Angry,
    Excited,
}

impl MoodKind {
    /// All moods in display order
    pub const ALL: [MoodKind; 5] = [
        MoodKind::Happy,
        MoodKind::Calm,
        MoodKind::Sad,
        MoodKind::Angry,
        MoodKind::Excited,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            MoodKind::Happy => "happy",
            MoodKind::Calm => "calm",
            MoodKind::Sad => "sad",
            MoodKind::Angry => "angry",
            MoodKind::Excited => "excited",
        }
    }

    pub fn glyph(&self) -> &'static str {
        match self {
            MoodKind::Happy => "😊",
            MoodKind::Calm => "😌",
            MoodKind::Sad => "😢",
            MoodKind::Angry => "😠",
            MoodKind::Excited => "🤩",
        }
    }

    /// Hex color used by charts and legends
    pub fn color(&self) -> &'static str {
        match self {
            MoodKind::Happy => "#FFD700",
            MoodKind::Calm => "#87CEEB",
            MoodKind::Sad => "#6495ED",
            MoodKind::Angry => "#FF6347",
            MoodKind::Excited => "#FF69B4",
        }
    }

    /// Parse a mood that must be present.
    ///
    /// An empty string is the "no mood selected" case and gets its own message.
    pub fn parse_required(input: &str) -> Result<Self> {
        if input.trim().is_empty() {
            return Err(MoodjError::Validation("Please select a mood".to_string()));
        }
        input.parse()
    }
}

impl fmt::Display for MoodKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

impl FromStr for MoodKind {
    type Err = MoodjError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase();
        MoodKind::ALL
            .into_iter()
            .find(|mood| mood.name() == normalized)
            .ok_or_else(|| {
                MoodjError::Validation(format!(
                    "Invalid mood: '{}'. Valid moods are: happy, calm, sad, angry, excited",
                    s
                ))
            })
    }
}
