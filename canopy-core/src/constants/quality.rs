//! Quality Thresholds and Display Sentinels
//!
//! Grades for schedule/lux agreement and the placeholder shown on cards that
//! cannot be computed.

// ===== AGREEMENT GRADES =====

/// Minimum schedule/lux agreement rate (0..1) graded good.
///
/// At 80% the sensor and schedule disagree for less than five hours a day
/// on a 24h cycle, which usually means sunrise/sunset drift, not a fault.
pub const AGREEMENT_GOOD_RATE: f64 = 0.80;

/// Minimum agreement rate graded warning. Below this is critical.
pub const AGREEMENT_WARNING_RATE: f64 = 0.60;

// ===== DISPLAY =====

/// Value shown on a card whose metric could not be computed.
pub const NO_DATA: &str = "--";

/// Separator between meta fields on a card.
pub const META_SEPARATOR: &str = " • ";
