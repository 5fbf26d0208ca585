//! Photoperiod split
//!
//! Each interval is attributed by the light state of its leading sample. An
//! interval whose leading sample has no recorded state counts toward neither
//! day nor night, so `day + night <= elapsed`, with equality only when every
//! leading sample has a known state.

use alloc::format;

use crate::axis::TimeAxis;
use crate::card::{join_meta, MetricCard};
use crate::display;
use crate::integrator::accumulate;
use crate::model::DayMask;

/// Day and night hours over a window
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PhotoperiodSplit {
    pub day_hours: f64,
    pub night_hours: f64,
}

/// Day/night hours, or `None` with fewer than two parsed timestamps
pub fn split(axis: &TimeAxis) -> Option<PhotoperiodSplit> {
    let totals = accumulate(axis.samples(), |s0, _| match s0.day_mask {
        DayMask::Day => Some(true),
        DayMask::Night => Some(false),
        DayMask::Unknown => None,
    })?;

    Some(PhotoperiodSplit {
        day_hours: totals.true_hours(),
        night_hours: totals.false_hours(),
    })
}

/// Window length to display: the parsed span, else the requested hours
pub fn window_hours(axis: &TimeAxis, requested_hours: f64) -> f64 {
    axis.span_seconds()
        .map(|seconds| seconds / crate::constants::time::SECONDS_PER_HOUR)
        .unwrap_or(requested_hours)
}

/// Compose the photoperiod card
pub fn card(axis: &TimeAxis, requested_hours: f64) -> MetricCard {
    let split = split(axis);
    let value = axis.current_mask().label().unwrap_or(crate::constants::NO_DATA);
    let window = window_hours(axis, requested_hours);

    let meta = join_meta([
        format!("Day {}", display::hours(split.map(|s| s.day_hours))),
        format!("Night {}", display::hours(split.map(|s| s.night_hours))),
        format!("Window {}", display::hours(Some(window))),
    ]);

    match split {
        Some(_) => MetricCard::good(value, meta),
        None => MetricCard::warning(value, meta),
    }
}
