//! Insight Calculators
//!
//! One module per card. Each calculator:
//!
//! 1. Detects its own degraded state (too few samples, no active plant,
//!    missing summary field) and returns the fallback card for it
//! 2. Otherwise computes a numeric result, exposed separately so callers and
//!    tests can check the arithmetic without parsing display strings
//! 3. Composes that result into a [`MetricCard`](crate::card::MetricCard)
//!
//! Calculators never see each other's failures. The only value passed between
//! them is the photoperiod day-hours figure, which the target card uses for
//! its photoperiod deviation when it is available.

pub mod alignment;
pub mod dif;
pub mod gdd;
pub mod photoperiod;
pub mod quality;
pub mod stress;
pub mod targets;

pub use alignment::AgreementClass;
pub use photoperiod::PhotoperiodSplit;
pub use quality::{QualityGrade, QualityReport};
pub use stress::StressHours;
pub use targets::TargetState;
