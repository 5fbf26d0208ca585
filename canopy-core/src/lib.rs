//! Environmental insights engine for Canopy
//!
//! Turns a window of irregularly-sampled climate readings plus plant-stage
//! metadata into seven dashboard cards: photoperiod split, DIF, growing
//! degree days, target alignment, stress hours, data quality and
//! schedule/lux alignment.
//!
//! Key constraints:
//! - Pure and stateless per call; "now" comes from an injected clock
//! - Partial input degrades one card to `"--"`, never the whole pass
//! - `no_std + alloc` capable (disable the default `std` feature)
//!
//! ```
//! use canopy_core::{
//!     CardStatus, DayMask, FixedTime, InsightInputs, InsightsConfig, InsightsEngine,
//!     TimeSeriesSample, TimeSeriesWindow,
//! };
//!
//! let inputs = InsightInputs {
//!     window: TimeSeriesWindow::new(
//!         vec![
//!             TimeSeriesSample::new("2024-05-01T06:00:00Z", Some(22.0), Some(60.0), DayMask::Day),
//!             TimeSeriesSample::new("2024-05-01T18:00:00Z", Some(20.0), Some(65.0), DayMask::Night),
//!         ],
//!         24.0,
//!     ),
//!     ..Default::default()
//! };
//!
//! let engine = InsightsEngine::new(InsightsConfig::default(), FixedTime::new(0));
//! let cards = engine.compute(&inputs);
//!
//! assert_eq!(cards.photoperiod.value, "Night");
//! assert_eq!(cards.photoperiod.status, CardStatus::Good);
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![deny(unsafe_code)]

extern crate alloc;

// Optional logging; compiles away without the `log` feature
#[cfg(feature = "log")]
macro_rules! log_debug {
    ($($arg:tt)*) => { log::debug!($($arg)*) };
}

#[cfg(not(feature = "log"))]
macro_rules! log_debug {
    ($($arg:tt)*) => {};
}

#[cfg(feature = "log")]
macro_rules! log_warn {
    ($($arg:tt)*) => { log::warn!($($arg)*) };
}

#[cfg(not(feature = "log"))]
macro_rules! log_warn {
    ($($arg:tt)*) => {};
}

pub mod axis;
pub mod calculators;
pub mod card;
pub mod config;
pub mod constants;
pub mod display;
pub mod engine;
pub mod errors;
pub mod integrator;
pub mod model;
pub mod physics;
pub mod time;

// Public API
pub use card::{CardStatus, InsightCards, MetricCard, MetricKind};
pub use config::InsightsConfig;
pub use engine::InsightsEngine;
pub use errors::{DegradedReason, InsightsError, InsightsResult};
pub use model::{
    Bounds, DayMask, InsightInputs, LatestReadings, PhotoperiodSummary, StageContext,
    StageTargets, TimeSeriesSample, TimeSeriesWindow,
};
pub use physics::{VpdBand, VpdBandRule};
pub use time::{FixedTime, TimeSource, Timestamp};

#[cfg(feature = "std")]
pub use time::SystemTime;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
