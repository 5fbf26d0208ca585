//! Pre-built input bundles
//!
//! The reference day: five samples six hours apart, lights on for the first
//! two intervals and off for the next two.
//!
//! | interval | mean T | mean RH | VPD (kPa) | mask  |
//! |----------|--------|---------|-----------|-------|
//! | 06 → 12  | 23.0   | 62      | ≈1.07     | day   |
//! | 12 → 18  | 22.0   | 64      | ≈0.95     | day   |
//! | 18 → 00  | 19.0   | 70      | ≈0.66     | night |
//! | 00 → 06  | 18.5   | 72      | ≈0.60     | night |
//!
//! GDD at base 10°C: (13 + 12 + 9 + 8.5) × 0.25 day = 10.625.

use canopy_core::{
    Bounds, DayMask, FixedTime, InsightInputs, LatestReadings, PhotoperiodSummary,
    TimeSeriesWindow,
};

use super::{sample_at, t0, vegetative, MINUTE_MS};

pub const REFERENCE_GDD: f64 = 10.625;

/// Five minutes after the last reference sample
pub fn reference_clock() -> FixedTime {
    FixedTime::new(t0() + 24 * 60 * MINUTE_MS + 5 * MINUTE_MS)
}

pub fn reference_day() -> InsightInputs {
    InsightInputs {
        window: TimeSeriesWindow::new(
            vec![
                sample_at(0.0, 22.0, 62.0, DayMask::Day),
                sample_at(6.0, 24.0, 62.0, DayMask::Day),
                sample_at(12.0, 20.0, 66.0, DayMask::Night),
                sample_at(18.0, 18.0, 74.0, DayMask::Night),
                sample_at(24.0, 19.0, 70.0, DayMask::Day),
            ],
            24.0,
        ),
        summary: PhotoperiodSummary {
            dif_c: Some(4.3),
            day_temperature_avg_c: Some(24.0),
            night_temperature_avg_c: Some(19.7),
            schedule_present: true,
            sensor_enabled: true,
            agreement_rate: Some(0.92),
            source: "lux".to_string(),
            start_offset_minutes: Some(3.0),
            end_offset_minutes: None,
        },
        stage: vegetative(Bounds::between(20.0, 28.0), Bounds::between(40.0, 65.0)),
        latest: LatestReadings {
            temperature: Some(22.0),
            humidity: Some(60.0),
        },
    }
}

/// Four samples six hours apart: two day intervals, one night interval.
/// GDD at base 10°C: (11 + 10 + 7.5) × 0.25 day = 7.125.
pub const SHORT_DAY_GDD: f64 = 7.125;

pub fn short_day() -> InsightInputs {
    InsightInputs {
        window: TimeSeriesWindow::new(
            vec![
                sample_at(0.0, 20.0, 60.0, DayMask::Day),
                sample_at(6.0, 22.0, 55.0, DayMask::Day),
                sample_at(12.0, 18.0, 70.0, DayMask::Night),
                sample_at(18.0, 17.0, 75.0, DayMask::Night),
            ],
            24.0,
        ),
        stage: vegetative(Bounds::between(18.0, 28.0), Bounds::between(40.0, 70.0)),
        ..Default::default()
    }
}

/// No plant, no summary, a single sample
pub fn sparse() -> InsightInputs {
    InsightInputs {
        window: TimeSeriesWindow::new(vec![sample_at(0.0, 21.0, 55.0, DayMask::Unknown)], 24.0),
        ..Default::default()
    }
}
