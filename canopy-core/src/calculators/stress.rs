//! Cumulative stress hours
//!
//! Three independent integrations over the same window:
//!
//! - **Temperature**: hours the interval-average temperature sat outside the
//!   stage's temperature targets
//! - **Humidity**: same, against the humidity targets
//! - **VPD**: hours the VPD of the interval-average temperature and humidity
//!   sat outside the stage's VPD band
//!
//! A missing bound is unconstrained, so a dimension with no targets set
//! accumulates zero hours. A dimension is `None` only when the window has no
//! intervals; the total treats `None` as zero.

use alloc::format;

use crate::axis::TimeAxis;
use crate::card::{join_meta, CardStatus, MetricCard};
use crate::config::InsightsConfig;
use crate::display;
use crate::errors::DegradedReason;
use crate::integrator::{accumulate_zones, interval_value, ZoneSplit};
use crate::model::StageContext;
use crate::physics::{vapor_pressure_deficit_kpa, VpdBand};

/// Out-of-range hours per dimension
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StressHours {
    pub temperature: Option<ZoneSplit>,
    pub humidity: Option<ZoneSplit>,
    pub vpd: Option<ZoneSplit>,
    pub band: VpdBand,
}

impl StressHours {
    pub fn temperature_hours(&self) -> Option<f64> {
        self.temperature.map(|z| z.out_of_range_hours())
    }

    pub fn humidity_hours(&self) -> Option<f64> {
        self.humidity.map(|z| z.out_of_range_hours())
    }

    pub fn vpd_hours(&self) -> Option<f64> {
        self.vpd.map(|z| z.out_of_range_hours())
    }

    /// Sum of all dimensions, unavailable ones counting as zero
    pub fn total_hours(&self) -> f64 {
        [self.temperature_hours(), self.humidity_hours(), self.vpd_hours()]
            .into_iter()
            .flatten()
            .sum()
    }
}

/// Integrate all three stress dimensions
///
/// `None` when the window has no intervals.
pub fn stress_hours(axis: &TimeAxis, stage: &StageContext, band: VpdBand) -> Option<StressHours> {
    if !axis.has_intervals() {
        return None;
    }
    let samples = axis.samples();

    let temperature = accumulate_zones(samples, &stage.targets.temperature_c, |s0, s1| {
        interval_value(s0.temperature_c, s1.temperature_c)
    });
    let humidity = accumulate_zones(samples, &stage.targets.humidity_percent, |s0, s1| {
        interval_value(s0.humidity_pct, s1.humidity_pct)
    });
    let vpd = accumulate_zones(samples, &band.bounds(), |s0, s1| {
        let temp = interval_value(s0.temperature_c, s1.temperature_c)?;
        let rh = interval_value(s0.humidity_pct, s1.humidity_pct)?;
        vapor_pressure_deficit_kpa(temp, rh)
    });

    Some(StressHours {
        temperature,
        humidity,
        vpd,
        band,
    })
}

/// Grade total stress hours against the configured thresholds
pub fn grade(total_hours: f64, config: &InsightsConfig) -> CardStatus {
    if total_hours > config.stress_critical_hours {
        CardStatus::Critical
    } else if total_hours > config.stress_warning_hours {
        CardStatus::Warning
    } else {
        CardStatus::Good
    }
}

/// Compose the stress card
pub fn card(axis: &TimeAxis, stage: &StageContext, config: &InsightsConfig) -> MetricCard {
    let Some(stage_name) = stage.stage() else {
        return MetricCard::degraded(DegradedReason::NoActivePlant);
    };

    let band = config.vpd_band_for_stage(stage_name);
    let Some(stress) = stress_hours(axis, stage, band) else {
        return MetricCard::degraded(DegradedReason::InsufficientSamples);
    };

    let total = stress.total_hours();
    let meta = join_meta([
        format!("Temp {}", display::hours(stress.temperature_hours())),
        format!("RH {}", display::hours(stress.humidity_hours())),
        format!(
            "VPD {} ({:.1}–{:.1} kPa)",
            display::hours(stress.vpd_hours()),
            band.min_kpa,
            band.max_kpa
        ),
    ]);

    MetricCard::new(display::hours(Some(total)), meta, grade(total, config))
}
