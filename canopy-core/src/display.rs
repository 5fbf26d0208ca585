//! Display formatting for card values and meta text

use alloc::format;
use alloc::string::String;

use crate::constants::quality::NO_DATA;
use crate::constants::time::{MINUTES_PER_DAY, MINUTES_PER_HOUR};
use crate::model::Bounds;

/// One decimal place, `"--"` when absent
pub fn fixed1(value: Option<f64>) -> String {
    match value {
        Some(v) => format!("{:.1}", normalise_zero(v)),
        None => String::from(NO_DATA),
    }
}

/// Temperature with one decimal: `"24.0°C"`, or `"--"`
pub fn celsius(value: Option<f64>) -> String {
    match value {
        Some(v) => format!("{:.1}°C", normalise_zero(v)),
        None => String::from(NO_DATA),
    }
}

/// Hours with one decimal and an `h` suffix: `"12.0h"`, or `"--"`
pub fn hours(value: Option<f64>) -> String {
    match value {
        Some(v) => format!("{:.1}h", normalise_zero(v)),
        None => String::from(NO_DATA),
    }
}

/// Signed hours: `"+1.5h"`, `"-0.5h"`
pub fn signed_hours(value: f64) -> String {
    format!("{}h", signed1(value))
}

/// Signed temperature: `"+2.5°C"`
pub fn signed_celsius(value: f64) -> String {
    format!("{}°C", signed1(value))
}

/// Signed whole minutes: `"+12m"`, `"-3m"`, `"0m"`
pub fn signed_minutes(value: f64) -> String {
    let rounded = normalise_zero(libm::round(value));
    if rounded > 0.0 {
        format!("+{:.0}m", rounded)
    } else {
        format!("{:.0}m", rounded)
    }
}

/// Rounded integer percentage from a 0..1 rate: `0.954` -> `"95%"`
pub fn percent(rate: f64) -> String {
    percent_points(whole_percent(rate))
}

/// A 0..1 rate as whole percentage points: `0.796` -> `80.0`
pub fn whole_percent(rate: f64) -> f64 {
    normalise_zero(libm::round(rate * 100.0))
}

/// Whole percentage points with a `%` suffix
pub fn percent_points(points: f64) -> String {
    format!("{:.0}%", points)
}

/// A bound pair with unit: `"18.0–26.0°C"`, `"≥18.0°C"`, `"≤70.0%"`, or `"--"`
pub fn band(bounds: &Bounds, unit: &str) -> String {
    match (bounds.min, bounds.max) {
        (Some(min), Some(max)) => format!("{:.1}–{:.1}{}", min, max, unit),
        (Some(min), None) => format!("≥{:.1}{}", min, unit),
        (None, Some(max)) => format!("≤{:.1}{}", max, unit),
        (None, None) => String::from(NO_DATA),
    }
}

/// Compact duration from minutes: `"45s"`, `"5m"`, `"2.5h"`, `"3.0d"`
pub fn duration_minutes(minutes: f64) -> String {
    let minutes = minutes.max(0.0);
    if minutes < 1.0 {
        format!("{:.0}s", libm::round(minutes * 60.0))
    } else if minutes < MINUTES_PER_HOUR {
        format!("{:.0}m", libm::round(minutes))
    } else if minutes < MINUTES_PER_DAY {
        format!("{:.1}h", minutes / MINUTES_PER_HOUR)
    } else {
        format!("{:.1}d", minutes / MINUTES_PER_DAY)
    }
}

/// Relative time for a sample age in minutes: `"just now"`, `"5m ago"`
pub fn ago(minutes: f64) -> String {
    if minutes < 1.0 {
        String::from("just now")
    } else {
        format!("{} ago", duration_minutes(minutes))
    }
}

fn signed1(value: f64) -> String {
    let value = normalise_zero(value);
    if value >= 0.05 {
        format!("+{:.1}", value)
    } else if value > -0.05 {
        String::from("+0.0")
    } else {
        format!("{:.1}", value)
    }
}

// Anything that prints as zero at one decimal prints as "0.0", never "-0.0"
fn normalise_zero(value: f64) -> f64 {
    if value.abs() < 0.05 {
        0.0
    } else {
        value
    }
}
