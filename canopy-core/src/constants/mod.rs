//! Constants for Canopy Core
//!
//! Every threshold the insight calculators use lives here, with units in the
//! name. The defaults of [`InsightsConfig`](crate::config::InsightsConfig) are
//! built from these values.
//!
//! ## Organization
//!
//! - **Horticulture**: psychrometric coefficients, VPD bands, stress thresholds
//! - **Time**: unit conversions and staleness/gap limits
//! - **Quality**: agreement-rate grades and card sentinels

/// Psychrometric coefficients, stage VPD bands and stress thresholds.
pub mod horticulture;

/// Time unit conversions and data-freshness limits.
pub mod time;

/// Agreement grades and display sentinels.
pub mod quality;

pub use horticulture::{
    MAGNUS_A, MAGNUS_B_C, MAGNUS_SVP_BASE_KPA,
    STRESS_CRITICAL_HOURS, STRESS_WARNING_HOURS,
};

pub use time::{
    MS_PER_SECOND, SECONDS_PER_MINUTE, SECONDS_PER_HOUR, SECONDS_PER_DAY,
    STALE_AFTER_MINUTES, GAP_WARNING_MINUTES,
};

pub use quality::{AGREEMENT_GOOD_RATE, AGREEMENT_WARNING_RATE, NO_DATA};
