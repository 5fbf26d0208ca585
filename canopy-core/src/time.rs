//! Time handling for insight computation
//!
//! Provides the clock abstraction the data-quality grader reads "now" from,
//! and timestamp parsing for sample windows:
//! - System clock (production)
//! - Fixed clock (tests, replays of historical windows)
//!
//! Sample timestamps arrive as strings. Accepted forms, tried in order:
//! - RFC 3339 / ISO-8601 with offset (`2024-05-01T06:00:00Z`, `...+02:00`)
//! - Naive ISO-8601, read as UTC (`2024-05-01T06:00:00`, `2024-05-01 06:00:00.250`)
//! - Integer milliseconds since the Unix epoch (`1714543200000`)

use chrono::{DateTime, NaiveDateTime};

/// Timestamp in milliseconds since the Unix epoch
pub type Timestamp = i64;

const NAIVE_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
];

/// Source of "now" for staleness checks
pub trait TimeSource: Send + Sync {
    /// Get current timestamp in milliseconds since the Unix epoch
    fn now(&self) -> Timestamp;
}

/// System time source (requires std)
#[cfg(feature = "std")]
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemTime;

#[cfg(feature = "std")]
impl TimeSource for SystemTime {
    fn now(&self) -> Timestamp {
        use std::time::{SystemTime as StdSystemTime, UNIX_EPOCH};

        StdSystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_millis() as Timestamp
    }
}

/// Fixed time source for testing and replay
#[derive(Debug, Clone, Copy)]
pub struct FixedTime {
    timestamp: Timestamp,
}

impl FixedTime {
    pub fn new(timestamp: Timestamp) -> Self {
        Self { timestamp }
    }

    pub fn set(&mut self, timestamp: Timestamp) {
        self.timestamp = timestamp;
    }

    pub fn advance(&mut self, ms: i64) {
        self.timestamp += ms;
    }
}

impl TimeSource for FixedTime {
    fn now(&self) -> Timestamp {
        self.timestamp
    }
}

impl<T: TimeSource + ?Sized> TimeSource for &T {
    fn now(&self) -> Timestamp {
        (**self).now()
    }
}

/// Parse a sample timestamp into epoch milliseconds
///
/// Returns `None` for anything unreadable; callers drop such samples.
pub fn parse_timestamp(raw: &str) -> Option<Timestamp> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.timestamp_millis());
    }

    for format in NAIVE_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(raw, format) {
            return Some(naive.and_utc().timestamp_millis());
        }
    }

    if raw.bytes().all(|b| b.is_ascii_digit()) {
        return raw.parse::<i64>().ok();
    }

    None
}

/// Milliseconds between two timestamps as seconds, clamped at zero
pub fn delta_seconds(earlier: Timestamp, later: Timestamp) -> f64 {
    let delta_ms = later.saturating_sub(earlier);
    if delta_ms <= 0 {
        return 0.0;
    }
    delta_ms as f64 / 1000.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_time_advances() {
        let mut time = FixedTime::new(1000);
        assert_eq!(time.now(), 1000);

        time.advance(500);
        assert_eq!(time.now(), 1500);

        time.set(10);
        assert_eq!(time.now(), 10);
    }

    #[test]
    fn parses_rfc3339_with_offsets() {
        let utc = parse_timestamp("2024-05-01T06:00:00Z").unwrap();
        let shifted = parse_timestamp("2024-05-01T08:00:00+02:00").unwrap();
        assert_eq!(utc, shifted);
        assert_eq!(utc, 1_714_543_200_000);
    }

    #[test]
    fn parses_naive_forms_as_utc() {
        let expected = parse_timestamp("2024-05-01T06:00:00Z");
        assert_eq!(parse_timestamp("2024-05-01T06:00:00"), expected);
        assert_eq!(parse_timestamp("2024-05-01 06:00:00"), expected);
        assert_eq!(parse_timestamp("2024-05-01 06:00"), expected);
        assert_eq!(
            parse_timestamp("2024-05-01 06:00:00.250"),
            expected.map(|t| t + 250)
        );
    }

    #[test]
    fn parses_epoch_millis() {
        assert_eq!(parse_timestamp("1714543200000"), Some(1_714_543_200_000));
    }

    #[test]
    fn rejects_garbage() {
        assert_eq!(parse_timestamp(""), None);
        assert_eq!(parse_timestamp("   "), None);
        assert_eq!(parse_timestamp("yesterday"), None);
        assert_eq!(parse_timestamp("2024-13-45T99:00:00Z"), None);
        assert_eq!(parse_timestamp("-5"), None);
    }

    #[test]
    fn delta_clamps_backwards_time() {
        assert_eq!(delta_seconds(5000, 2000), 0.0);
        assert_eq!(delta_seconds(2000, 5000), 3.0);
    }
}
