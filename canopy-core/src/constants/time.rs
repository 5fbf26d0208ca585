//! Time-Related Constants
//!
//! Unit conversions and the freshness limits used by the data-quality grader.

// ===== TIME UNIT CONVERSIONS =====

/// Milliseconds per second.
pub const MS_PER_SECOND: i64 = 1000;

/// Seconds per minute.
pub const SECONDS_PER_MINUTE: f64 = 60.0;

/// Seconds per hour.
pub const SECONDS_PER_HOUR: f64 = 3600.0;

/// Seconds per day.
pub const SECONDS_PER_DAY: f64 = 86_400.0;

/// Minutes per hour.
pub const MINUTES_PER_HOUR: f64 = 60.0;

/// Minutes per day.
pub const MINUTES_PER_DAY: f64 = 1440.0;

// ===== DATA FRESHNESS =====

/// Age of the newest sample (minutes) beyond which the window is "Stale".
///
/// Typical greenhouse loggers report every 1-5 minutes; half an hour of
/// silence means the feed has stopped rather than slowed.
pub const STALE_AFTER_MINUTES: f64 = 30.0;

/// Largest tolerated gap between consecutive samples (minutes).
///
/// Anything longer is graded "Gaps".
pub const GAP_WARNING_MINUTES: f64 = 60.0;
