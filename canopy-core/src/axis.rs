//! Time axis resolution
//!
//! Turns caller samples into [`ResolvedSample`]s with numeric timestamps,
//! dropping anything whose timestamp can't be read. Order is preserved as
//! supplied; the acquisition layer is responsible for chronological order.
//!
//! Non-finite temperature or humidity values are treated as missing here so
//! no downstream calculator has to check for NaN.

use alloc::vec::Vec;

use crate::model::{DayMask, TimeSeriesSample};
use crate::time::{delta_seconds, parse_timestamp, Timestamp};

/// A sample with a parsed timestamp and sanitised readings
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResolvedSample {
    pub timestamp: Timestamp,
    pub temperature_c: Option<f64>,
    pub humidity_pct: Option<f64>,
    pub day_mask: DayMask,
}

/// The parsed view of a window
#[derive(Debug, Clone, Default)]
pub struct TimeAxis {
    samples: Vec<ResolvedSample>,
    dropped: usize,
}

impl TimeAxis {
    /// Parse every sample, discarding unreadable timestamps
    pub fn resolve(samples: &[TimeSeriesSample]) -> Self {
        let mut resolved = Vec::with_capacity(samples.len());
        let mut dropped = 0;

        for sample in samples {
            match parse_timestamp(&sample.timestamp) {
                Some(timestamp) => resolved.push(ResolvedSample {
                    timestamp,
                    temperature_c: finite(sample.temperature_c),
                    humidity_pct: finite(sample.humidity_pct),
                    day_mask: sample.day_mask,
                }),
                None => dropped += 1,
            }
        }

        if dropped > 0 {
            log_debug!("dropped {} of {} samples with unreadable timestamps", dropped, samples.len());
        }

        Self {
            samples: resolved,
            dropped,
        }
    }

    /// Parsed samples in supplied order
    pub fn samples(&self) -> &[ResolvedSample] {
        &self.samples
    }

    /// Number of samples dropped for unreadable timestamps
    pub fn dropped(&self) -> usize {
        self.dropped
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Interval math needs at least one consecutive pair
    pub fn has_intervals(&self) -> bool {
        self.samples.len() >= 2
    }

    /// Consecutive sample pairs
    pub fn pairs(&self) -> impl Iterator<Item = (&ResolvedSample, &ResolvedSample)> {
        self.samples.windows(2).map(|w| (&w[0], &w[1]))
    }

    /// Last sample in supplied order
    pub fn last(&self) -> Option<&ResolvedSample> {
        self.samples.last()
    }

    /// Seconds from the first to the last parsed sample
    ///
    /// `None` with fewer than two samples.
    pub fn span_seconds(&self) -> Option<f64> {
        if !self.has_intervals() {
            return None;
        }
        let first = self.samples.first()?;
        let last = self.samples.last()?;
        Some(delta_seconds(first.timestamp, last.timestamp))
    }

    /// Most recent known light state, reading backward from the end
    pub fn current_mask(&self) -> DayMask {
        self.samples
            .iter()
            .rev()
            .map(|s| s.day_mask)
            .find(DayMask::is_known)
            .unwrap_or(DayMask::Unknown)
    }
}

fn finite(value: Option<f64>) -> Option<f64> {
    value.filter(|v| v.is_finite())
}
