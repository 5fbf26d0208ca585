//! Insights engine
//!
//! Holds the immutable configuration and a clock, and turns one
//! [`InsightInputs`] bundle into the seven [`InsightCards`]. The engine keeps
//! no state between calls; two calls with the same inputs and the same "now"
//! produce identical cards.
//!
//! ```
//! use canopy_core::{FixedTime, InsightInputs, InsightsConfig, InsightsEngine};
//!
//! let engine = InsightsEngine::new(InsightsConfig::default(), FixedTime::new(0));
//! let cards = engine.compute(&InsightInputs::default());
//!
//! assert_eq!(cards.quality.value, "No data");
//! assert_eq!(cards.gdd.meta, "No active plant");
//! ```

use crate::axis::TimeAxis;
use crate::calculators::{alignment, dif, gdd, photoperiod, quality, stress, targets};
use crate::card::InsightCards;
use crate::config::InsightsConfig;
use crate::errors::InsightsResult;
use crate::model::InsightInputs;
use crate::physics::VpdBand;
use crate::time::{TimeSource, Timestamp};

#[cfg(feature = "std")]
use crate::time::SystemTime;

/// Stateless card computation over a configured clock
#[derive(Debug, Clone)]
pub struct InsightsEngine<C> {
    config: InsightsConfig,
    clock: C,
}

impl<C: TimeSource> InsightsEngine<C> {
    /// Create an engine without validating the configuration
    pub fn new(config: InsightsConfig, clock: C) -> Self {
        Self { config, clock }
    }

    /// Create an engine, rejecting an invalid configuration
    pub fn validated(config: InsightsConfig, clock: C) -> InsightsResult<Self> {
        config.validate()?;
        Ok(Self::new(config, clock))
    }

    /// Replace the configuration, keeping the clock
    pub fn with_config(mut self, config: InsightsConfig) -> Self {
        self.config = config;
        self
    }

    pub fn config(&self) -> &InsightsConfig {
        &self.config
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    /// VPD band the configured rules assign to a stage name
    pub fn vpd_band_for_stage(&self, stage: &str) -> VpdBand {
        self.config.vpd_band_for_stage(stage)
    }

    /// Compute all cards, reading "now" from the engine's clock
    pub fn compute(&self, inputs: &InsightInputs) -> InsightCards {
        self.compute_at(inputs, self.clock.now())
    }

    /// Compute all cards against an explicit instant
    pub fn compute_at(&self, inputs: &InsightInputs, now: Timestamp) -> InsightCards {
        let axis = TimeAxis::resolve(&inputs.window.samples);
        let day_hours = photoperiod::split(&axis).map(|s| s.day_hours);

        InsightCards {
            photoperiod: photoperiod::card(&axis, inputs.window.hours),
            dif: dif::card(&inputs.summary),
            gdd: gdd::card(&axis, &inputs.stage),
            targets: targets::card(&inputs.latest, &inputs.stage, day_hours),
            stress: stress::card(&axis, &inputs.stage, &self.config),
            quality: quality::card(&axis, now, &self.config),
            alignment: alignment::card(&inputs.summary, &self.config),
        }
    }
}

#[cfg(feature = "std")]
impl InsightsEngine<SystemTime> {
    /// Engine on the system clock
    pub fn system(config: InsightsConfig) -> Self {
        Self::new(config, SystemTime)
    }
}

#[cfg(feature = "std")]
impl Default for InsightsEngine<SystemTime> {
    fn default() -> Self {
        Self::system(InsightsConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card::CardStatus;
    use crate::errors::InsightsError;
    use crate::model::{DayMask, StageContext, TimeSeriesSample, TimeSeriesWindow};
    use crate::time::{parse_timestamp, FixedTime};
    use alloc::string::ToString;
    use alloc::vec;

    fn inputs() -> InsightInputs {
        InsightInputs {
            window: TimeSeriesWindow::new(
                vec![
                    TimeSeriesSample::new("2024-05-01T06:00:00Z", Some(22.0), Some(60.0), DayMask::Day),
                    TimeSeriesSample::new("2024-05-01T07:00:00Z", Some(24.0), Some(60.0), DayMask::Day),
                ],
                24.0,
            ),
            stage: StageContext {
                current_stage: Some("Vegetative".to_string()),
                gdd_base_temp_c: Some(10.0),
                ..Default::default()
            },
            ..Default::default()
        }
    }

    #[test]
    fn clock_drives_quality_age() {
        let now = parse_timestamp("2024-05-01T07:02:00Z").unwrap();
        let mut clock = FixedTime::new(now);
        let engine = InsightsEngine::new(InsightsConfig::default(), &clock);
        let fresh = engine.compute(&inputs());
        assert_eq!(fresh.quality.value, "Good");

        clock.advance(60 * 60 * 1000);
        let engine = InsightsEngine::new(InsightsConfig::default(), &clock);
        assert_eq!(engine.compute(&inputs()).quality.value, "Stale");
    }

    struct ReplayClock(Timestamp);

    impl TimeSource for ReplayClock {
        fn now(&self) -> Timestamp {
            self.0
        }
    }

    #[test]
    fn any_clock_with_now_drives_the_engine() {
        let now = parse_timestamp("2024-05-01T08:00:00Z").unwrap();
        let engine = InsightsEngine::new(InsightsConfig::default(), ReplayClock(now));
        let cards = engine.compute(&inputs());
        assert_eq!(cards.quality.value, "Stale");
        assert!(cards.quality.meta.starts_with("Last seen 1.0h ago"));
    }

    #[test]
    fn compute_matches_compute_at() {
        let now = parse_timestamp("2024-05-01T07:02:00Z").unwrap();
        let engine = InsightsEngine::new(InsightsConfig::default(), FixedTime::new(now));
        assert_eq!(engine.compute(&inputs()), engine.compute_at(&inputs(), now));
    }

    #[test]
    fn photoperiod_feeds_targets() {
        let mut inputs = inputs();
        inputs.stage.targets.photoperiod_hours = Some(18.0);
        let engine = InsightsEngine::new(InsightsConfig::default(), FixedTime::new(0));
        let cards = engine.compute(&inputs);
        assert!(cards.targets.meta.ends_with("Photoperiod -17.0h vs 18.0h"));
    }

    #[test]
    fn rejects_invalid_config() {
        let config = InsightsConfig::default().with_freshness(0.0, 60.0);
        let err = InsightsEngine::validated(config, FixedTime::new(0)).unwrap_err();
        assert!(matches!(err, InsightsError::InvalidConfig { .. }));
    }

    #[test]
    fn band_lookup_uses_config() {
        let engine = InsightsEngine::new(
            InsightsConfig::default().with_default_vpd_band(VpdBand::new(0.5, 0.9)),
            FixedTime::new(0),
        );
        assert_eq!(engine.vpd_band_for_stage("Flowering"), VpdBand::new(1.0, 1.5));
        assert_eq!(engine.vpd_band_for_stage("Harvest"), VpdBand::new(0.5, 0.9));
        assert_eq!(engine.compute(&inputs()).gdd.status, CardStatus::Good);
    }
}
