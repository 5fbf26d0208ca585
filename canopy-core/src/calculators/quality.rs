//! Data-quality grading
//!
//! Grades the window from its timestamps alone:
//!
//! ```text
//! fewer than 2 parsed timestamps   -> No data  (warning)
//! newest sample older than 30 min  -> Stale    (warning)
//! any gap longer than 60 min       -> Gaps     (warning)
//! otherwise                        -> Good
//! ```
//!
//! The median is the lower-middle element for even counts, so a window
//! alternating 1-minute and 10-minute gaps reports 1 minute.

use alloc::format;
use alloc::vec::Vec;

use crate::axis::TimeAxis;
use crate::card::{join_meta, CardStatus, MetricCard};
use crate::config::InsightsConfig;
use crate::constants::time::{MS_PER_SECOND, SECONDS_PER_MINUTE};
use crate::display;
use crate::time::Timestamp;

/// Categorical grade
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QualityGrade {
    NoData,
    Stale,
    Gaps,
    Good,
}

impl QualityGrade {
    pub fn label(&self) -> &'static str {
        match self {
            Self::NoData => "No data",
            Self::Stale => "Stale",
            Self::Gaps => "Gaps",
            Self::Good => "Good",
        }
    }

    pub fn status(&self) -> CardStatus {
        match self {
            Self::Good => CardStatus::Good,
            _ => CardStatus::Warning,
        }
    }
}

/// Interval statistics behind a grade
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QualityReport {
    pub grade: QualityGrade,
    /// Minutes since the newest sample, clamped at zero
    pub age_minutes: Option<f64>,
    pub median_interval_minutes: Option<f64>,
    pub max_gap_minutes: Option<f64>,
    /// Samples with readable timestamps
    pub sample_count: usize,
    /// Samples dropped for unreadable timestamps
    pub dropped_count: usize,
}

/// Positive, finite gaps between successive timestamps, in minutes, sorted
fn sorted_gaps_minutes(axis: &TimeAxis) -> Vec<f64> {
    let mut gaps: Vec<f64> = axis
        .pairs()
        .map(|(a, b)| b.timestamp.saturating_sub(a.timestamp) as f64 / MS_PER_SECOND as f64 / SECONDS_PER_MINUTE)
        .filter(|gap| gap.is_finite() && *gap > 0.0)
        .collect();
    gaps.sort_unstable_by(|a, b| a.total_cmp(b));
    gaps
}

/// Compute interval statistics and grade at instant `now`
pub fn assess(axis: &TimeAxis, now: Timestamp, config: &InsightsConfig) -> QualityReport {
    let gaps = sorted_gaps_minutes(axis);
    let median = gaps.get(gaps.len().saturating_sub(1) / 2).copied();
    let max_gap = gaps.last().copied();

    let age = axis
        .last()
        .map(|last| (now.saturating_sub(last.timestamp) as f64 / MS_PER_SECOND as f64 / SECONDS_PER_MINUTE).max(0.0));

    let grade = if !axis.has_intervals() {
        QualityGrade::NoData
    } else if age.map_or(false, |a| a > config.stale_after_minutes) {
        QualityGrade::Stale
    } else if max_gap.map_or(false, |g| g > config.gap_warning_minutes) {
        QualityGrade::Gaps
    } else {
        QualityGrade::Good
    };

    QualityReport {
        grade,
        age_minutes: age,
        median_interval_minutes: median,
        max_gap_minutes: max_gap,
        sample_count: axis.len(),
        dropped_count: axis.dropped(),
    }
}

/// Compose the data-quality card
pub fn card(axis: &TimeAxis, now: Timestamp, config: &InsightsConfig) -> MetricCard {
    let report = assess(axis, now, config);

    let count = match (report.sample_count, report.dropped_count) {
        (n, 0) => format!("{} {}", n, plural(n)),
        (n, d) => format!("{} {} ({} unreadable)", n, plural(n), d),
    };

    let meta = join_meta([
        report.age_minutes.map(|a| format!("Last seen {}", display::ago(a))).unwrap_or_default(),
        report
            .median_interval_minutes
            .map(|m| format!("Median {}", display::duration_minutes(m)))
            .unwrap_or_default(),
        report
            .max_gap_minutes
            .map(|g| format!("Max gap {}", display::duration_minutes(g)))
            .unwrap_or_default(),
        count,
    ]);

    MetricCard::new(report.grade.label(), meta, report.grade.status())
}

fn plural(n: usize) -> &'static str {
    if n == 1 {
        "sample"
    } else {
        "samples"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{DayMask, TimeSeriesSample};
    use crate::time::parse_timestamp;

    const MINUTE_MS: i64 = 60_000;

    fn axis_from_minutes(offsets: &[i64]) -> (TimeAxis, Timestamp) {
        let base = parse_timestamp("2024-05-01T00:00:00Z").unwrap();
        let samples: Vec<_> = offsets
            .iter()
            .map(|m| {
                TimeSeriesSample::new(
                    format!("{}", base + m * MINUTE_MS),
                    Some(20.0),
                    Some(50.0),
                    DayMask::Day,
                )
            })
            .collect();
        (TimeAxis::resolve(&samples), base)
    }

    #[test]
    fn uniform_five_minute_sampling_is_good() {
        let offsets: Vec<i64> = (0..=24).map(|i| i * 5).collect();
        let (axis, base) = axis_from_minutes(&offsets);
        let now = base + 121 * MINUTE_MS;

        let report = assess(&axis, now, &InsightsConfig::default());
        assert_eq!(report.grade, QualityGrade::Good);
        assert_eq!(report.median_interval_minutes, Some(5.0));
        assert_eq!(report.max_gap_minutes, Some(5.0));
        assert_eq!(report.age_minutes, Some(1.0));

        let card = card(&axis, now, &InsightsConfig::default());
        assert_eq!(card.value, "Good");
        assert_eq!(card.meta, "Last seen 1m ago • Median 5m • Max gap 5m • 25 samples");
        assert_eq!(card.status, CardStatus::Good);
    }

    #[test]
    fn staleness_checked_before_gaps() {
        let (axis, base) = axis_from_minutes(&[0, 90, 95]);
        let stale = assess(&axis, base + 200 * MINUTE_MS, &InsightsConfig::default());
        assert_eq!(stale.grade, QualityGrade::Stale);

        let gappy = assess(&axis, base + 96 * MINUTE_MS, &InsightsConfig::default());
        assert_eq!(gappy.grade, QualityGrade::Gaps);
        assert_eq!(gappy.max_gap_minutes, Some(90.0));
    }

    #[test]
    fn median_takes_lower_middle() {
        let (axis, base) = axis_from_minutes(&[0, 1, 11, 12, 22]);
        let report = assess(&axis, base + 22 * MINUTE_MS, &InsightsConfig::default());
        // gaps 1, 10, 1, 10 -> sorted 1, 1, 10, 10 -> lower middle 1
        assert_eq!(report.median_interval_minutes, Some(1.0));
    }

    #[test]
    fn duplicate_timestamps_are_ignored_for_gaps() {
        let (axis, base) = axis_from_minutes(&[0, 0, 5]);
        let report = assess(&axis, base + 5 * MINUTE_MS, &InsightsConfig::default());
        assert_eq!(report.median_interval_minutes, Some(5.0));
        assert_eq!(report.grade, QualityGrade::Good);
    }

    #[test]
    fn single_sample_is_no_data_but_reports_what_it_can() {
        let (axis, base) = axis_from_minutes(&[0]);
        let card = card(&axis, base + 3 * MINUTE_MS, &InsightsConfig::default());
        assert_eq!(card.value, "No data");
        assert_eq!(card.meta, "Last seen 3m ago • 1 sample");
        assert_eq!(card.status, CardStatus::Warning);
    }

    #[test]
    fn empty_window() {
        let card = card(&TimeAxis::default(), 0, &InsightsConfig::default());
        assert_eq!(card.value, "No data");
        assert_eq!(card.meta, "0 samples");
    }

    #[test]
    fn unreadable_samples_are_counted() {
        let samples = [
            TimeSeriesSample::new("2024-05-01T00:00:00Z", None, None, DayMask::Unknown),
            TimeSeriesSample::new("garbage", None, None, DayMask::Unknown),
            TimeSeriesSample::new("2024-05-01T00:05:00Z", None, None, DayMask::Unknown),
        ];
        let axis = TimeAxis::resolve(&samples);
        let now = parse_timestamp("2024-05-01T00:05:00Z").unwrap();
        let card = card(&axis, now, &InsightsConfig::default());
        assert_eq!(card.meta, "Last seen just now • Median 5m • Max gap 5m • 2 samples (1 unreadable)");
    }
}
