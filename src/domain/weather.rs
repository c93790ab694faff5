//! Weather data attached to entries

use crate::error::{MoodjError, Result};
use serde::{Deserialize, Serialize};

const FALLBACK_GLYPH: &str = "🌡️";

/// Weather captured when an entry was created
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeatherSnapshot {
    /// Degrees Celsius
    pub temp: i32,
    pub condition: String,
    pub city: String,
}

impl WeatherSnapshot {
    pub fn new(temp: i32, condition: impl Into<String>, city: impl Into<String>) -> Self {
        WeatherSnapshot {
            temp,
            condition: condition.into(),
            city: city.into(),
        }
    }

    /// Build a snapshot from a raw floating point reading.
    ///
    /// NaN, infinities and readings outside the `i32` range are rejected.
    pub fn from_reading(
        celsius: f64,
        condition: impl Into<String>,
        city: impl Into<String>,
    ) -> Result<Self> {
        let temp = round_half_up(celsius).ok_or_else(|| {
            MoodjError::Validation(format!("Invalid temperature reading: {}", celsius))
        })?;
        Ok(Self::new(temp, condition, city))
    }

    pub fn glyph(&self) -> &'static str {
        condition_glyph(&self.condition)
    }
}

/// Glyph for a weather category, with a thermometer for anything unknown
pub fn condition_glyph(condition: &str) -> &'static str {
    match condition {
        "Clear" => "☀️",
        "Clouds" => "☁️",
        "Rain" => "🌧️",
        "Snow" => "❄️",
        "Thunderstorm" => "⚡",
        "Drizzle" => "🌦️",
        "Mist" => "🌫️",
        _ => FALLBACK_GLYPH,
    }
}

// Ties go toward positive infinity: 2.5 -> 3, -2.5 -> -2.
// `value - floor` is exact, unlike `value + 0.5` near 0.5.
fn round_half_up(value: f64) -> Option<i32> {
    if !value.is_finite() {
        return None;
    }
    let floor = value.floor();
    let rounded = if value - floor >= 0.5 { floor + 1.0 } else { floor };
    if rounded < i32::MIN as f64 || rounded > i32::MAX as f64 {
        return None;
    }
    Some(rounded as i32)
}
