//! Error Types and Degraded States
//!
//! ## Two kinds of "didn't work"
//!
//! The insight calculators never fail. A sparse window, a missing plant or an
//! absent summary field is an expected condition and produces a `"--"` card
//! with warning status. Those conditions are described by [`DegradedReason`],
//! which is plain data carried alongside a fallback card.
//!
//! Real errors only happen at the boundary: a configuration with inverted
//! thresholds, or JSON that doesn't decode. Those are [`InsightsError`].
//!
//! ```rust
//! use canopy_core::{InsightsConfig, InsightsError};
//!
//! let config = InsightsConfig::default().with_stress_hours(4.0, 1.0);
//! match config.validate() {
//!     Err(InsightsError::InvalidConfig { field, .. }) => assert_eq!(field, "stress_hours"),
//!     other => panic!("unexpected: {:?}", other),
//! }
//! ```

use alloc::string::String;
use thiserror_no_std::Error;

/// Result type for configuration and decoding operations
pub type InsightsResult<T> = Result<T, InsightsError>;

/// Errors raised at the configuration and decoding boundary
#[derive(Error, Debug, Clone, PartialEq)]
pub enum InsightsError {
    /// A configuration threshold is non-finite, negative or out of order
    #[error("Invalid config field {field}: {reason}")]
    InvalidConfig {
        /// Name of the offending field
        field: &'static str,
        /// What is wrong with it
        reason: &'static str,
    },

    /// A VPD band whose lower edge exceeds its upper edge
    #[error("Invalid band [{min}, {max}]")]
    InvalidBand {
        /// Lower edge (kPa)
        min: f64,
        /// Upper edge (kPa)
        max: f64,
    },

    /// JSON input or configuration could not be decoded
    #[error("Decode failed: {0}")]
    Decode(String),
}

/// Why a calculator produced its fallback card instead of a value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DegradedReason {
    /// Fewer than two samples with parseable timestamps
    InsufficientSamples,
    /// `current_stage` is absent
    NoActivePlant,
    /// Plant present but no GDD base temperature resolved
    MissingBaseTemperature,
    /// A required photoperiod summary field is absent
    MissingSummaryField,
    /// Every sample in the window had an unparsable timestamp
    UnparsableTimestamp,
}

impl DegradedReason {
    /// Short human-readable text used in card meta
    pub fn describe(&self) -> &'static str {
        match self {
            Self::InsufficientSamples => "Insufficient data",
            Self::NoActivePlant => "No active plant",
            Self::MissingBaseTemperature => "Base temp unavailable",
            Self::MissingSummaryField => "Summary unavailable",
            Self::UnparsableTimestamp => "No readable timestamps",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;

    #[test]
    fn error_messages_name_the_field() {
        let err = InsightsError::InvalidConfig {
            field: "stale_after_minutes",
            reason: "must be positive",
        };
        assert_eq!(
            err.to_string(),
            "Invalid config field stale_after_minutes: must be positive"
        );
    }

    #[test]
    fn degraded_reasons_have_distinct_text() {
        let reasons = [
            DegradedReason::InsufficientSamples,
            DegradedReason::NoActivePlant,
            DegradedReason::MissingBaseTemperature,
            DegradedReason::MissingSummaryField,
            DegradedReason::UnparsableTimestamp,
        ];
        for (i, a) in reasons.iter().enumerate() {
            for b in &reasons[i + 1..] {
                assert_ne!(a.describe(), b.describe());
            }
        }
    }
}
