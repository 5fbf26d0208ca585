//! Interval integration over irregular sampling
//!
//! ## How time is attributed
//!
//! Samples arrive at uneven spacing, so "hours spent in state X" is measured
//! by walking consecutive pairs and attributing the whole gap between them:
//!
//! ```text
//!   s0 ────────── s1 ──── s2 ─────────────── s3
//!   |<── Δ01 ──>|<Δ12>|<──────  Δ23  ──────>|
//! ```
//!
//! Each Δ goes to exactly one bucket, chosen by a per-metric classifier that
//! sees both endpoints. If the classifier returns `None` (the governing value
//! is missing at both ends) the Δ is dropped from every bucket, so coverage
//! is never overstated from absent data.
//!
//! Backwards time (out-of-order samples) contributes zero seconds.
//!
//! ## "No data" vs "zero"
//!
//! Every entry point returns `None` when fewer than two parsed samples exist.
//! `Some` with all buckets at zero means "we looked and nothing happened".
//!
//! ## Threshold crossings
//!
//! Range classification uses the average of the two endpoints. An interval
//! that crosses a bound is attributed whole to the side its average falls
//! on, rather than split at the interpolated crossing point.

use crate::axis::ResolvedSample;
use crate::constants::time::SECONDS_PER_HOUR;
use crate::model::Bounds;
use crate::time::delta_seconds;

/// Seconds attributed to a predicate being true or false
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Split {
    pub true_seconds: f64,
    pub false_seconds: f64,
}

impl Split {
    pub fn true_hours(&self) -> f64 {
        self.true_seconds / SECONDS_PER_HOUR
    }

    pub fn false_hours(&self) -> f64 {
        self.false_seconds / SECONDS_PER_HOUR
    }
}

/// Position of a value relative to a band
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Zone {
    Below,
    Within,
    Above,
}

impl Zone {
    /// Classify against optional bounds; a missing side never triggers
    pub fn classify(value: f64, bounds: &Bounds) -> Self {
        match (bounds.min, bounds.max) {
            (Some(min), _) if value < min => Self::Below,
            (_, Some(max)) if value > max => Self::Above,
            _ => Self::Within,
        }
    }
}

/// Seconds attributed below, within and above a band
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ZoneSplit {
    pub below_seconds: f64,
    pub within_seconds: f64,
    pub above_seconds: f64,
}

impl ZoneSplit {
    fn add(&mut self, zone: Zone, seconds: f64) {
        match zone {
            Zone::Below => self.below_seconds += seconds,
            Zone::Within => self.within_seconds += seconds,
            Zone::Above => self.above_seconds += seconds,
        }
    }

    pub fn below_hours(&self) -> f64 {
        self.below_seconds / SECONDS_PER_HOUR
    }

    pub fn above_hours(&self) -> f64 {
        self.above_seconds / SECONDS_PER_HOUR
    }

    /// Hours outside the band on either side
    pub fn out_of_range_hours(&self) -> f64 {
        (self.below_seconds + self.above_seconds) / SECONDS_PER_HOUR
    }
}

/// Walk consecutive pairs, handing each pair and its clamped Δ to `visit`
///
/// Returns `false` without visiting anything when there are fewer than two
/// samples.
pub fn walk_intervals<F>(samples: &[ResolvedSample], mut visit: F) -> bool
where
    F: FnMut(&ResolvedSample, &ResolvedSample, f64),
{
    if samples.len() < 2 {
        return false;
    }
    for pair in samples.windows(2) {
        let (s0, s1) = (&pair[0], &pair[1]);
        visit(s0, s1, delta_seconds(s0.timestamp, s1.timestamp));
    }
    true
}

/// Accumulate seconds where `predicate` holds vs. doesn't
///
/// `predicate` returns `None` to skip an interval.
pub fn accumulate<P>(samples: &[ResolvedSample], mut predicate: P) -> Option<Split>
where
    P: FnMut(&ResolvedSample, &ResolvedSample) -> Option<bool>,
{
    let mut split = Split::default();
    let walked = walk_intervals(samples, |s0, s1, seconds| match predicate(s0, s1) {
        Some(true) => split.true_seconds += seconds,
        Some(false) => split.false_seconds += seconds,
        None => {}
    });
    walked.then_some(split)
}

/// Accumulate seconds per [`Zone`] of an interval value against `bounds`
///
/// `extract` yields the value governing the interval, or `None` to skip it.
pub fn accumulate_zones<E>(samples: &[ResolvedSample], bounds: &Bounds, mut extract: E) -> Option<ZoneSplit>
where
    E: FnMut(&ResolvedSample, &ResolvedSample) -> Option<f64>,
{
    let mut split = ZoneSplit::default();
    let walked = walk_intervals(samples, |s0, s1, seconds| {
        if let Some(value) = extract(s0, s1) {
            split.add(Zone::classify(value, bounds), seconds);
        }
    });
    walked.then_some(split)
}

/// Value governing an interval: the mean of both endpoints, or whichever one
/// is present
pub fn interval_value(start: Option<f64>, end: Option<f64>) -> Option<f64> {
    match (start, end) {
        (Some(a), Some(b)) => Some((a + b) / 2.0),
        (Some(a), None) => Some(a),
        (None, Some(b)) => Some(b),
        (None, None) => None,
    }
}
