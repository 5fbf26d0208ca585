//! Common fixtures for integration tests
//!
//! - Sample window builders on an hour grid
//! - The reference day scenario with hand-computed expectations
//! - A fixed clock pinned relative to the scenario

#![allow(dead_code)]

pub mod scenarios;

use canopy_core::{
    time::parse_timestamp, Bounds, DayMask, StageContext, StageTargets, TimeSeriesSample,
    Timestamp,
};

pub const HOUR_MS: i64 = 60 * 60 * 1000;
pub const MINUTE_MS: i64 = 60 * 1000;

/// Scenario start, 06:00 UTC
pub fn t0() -> Timestamp {
    parse_timestamp("2024-05-01T06:00:00Z").unwrap()
}

/// RFC 3339 text for `t0 + offset_ms`
pub fn iso(offset_ms: i64) -> String {
    chrono::DateTime::from_timestamp_millis(t0() + offset_ms)
        .unwrap()
        .to_rfc3339()
}

/// Sample `hours` after `t0`
pub fn sample_at(hours: f64, temp: f64, rh: f64, mask: DayMask) -> TimeSeriesSample {
    let offset = (hours * HOUR_MS as f64) as i64;
    TimeSeriesSample::new(iso(offset), Some(temp), Some(rh), mask)
}

/// Constant readings every `step_minutes` for `count` samples
pub fn uniform_series(count: usize, step_minutes: i64, temp: f64, rh: f64) -> Vec<TimeSeriesSample> {
    (0..count as i64)
        .map(|i| TimeSeriesSample::new(iso(i * step_minutes * MINUTE_MS), Some(temp), Some(rh), DayMask::Day))
        .collect()
}

/// Vegetative plant with 10°C base and the given targets
pub fn vegetative(temperature: Bounds, humidity: Bounds) -> StageContext {
    StageContext {
        current_stage: Some("Vegetative".to_string()),
        gdd_base_temp_c: Some(10.0),
        gdd_base_temp_source: "species".to_string(),
        targets: StageTargets {
            temperature_c: temperature,
            humidity_percent: humidity,
            photoperiod_hours: Some(12.0),
        },
    }
}
