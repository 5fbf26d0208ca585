//! Day/night temperature differential
//!
//! DIF arrives pre-aggregated in the photoperiod summary; this card only
//! formats it. A positive DIF (warmer days) promotes stem elongation, a
//! negative one keeps plants compact.

use alloc::format;

use crate::card::{join_meta, MetricCard};
use crate::display;
use crate::errors::DegradedReason;
use crate::model::PhotoperiodSummary;

/// Compose the DIF card
pub fn card(summary: &PhotoperiodSummary) -> MetricCard {
    let day = summary.day_temperature_avg_c.filter(|v| v.is_finite());
    let night = summary.night_temperature_avg_c.filter(|v| v.is_finite());

    let meta = if day.is_none() && night.is_none() {
        DegradedReason::MissingSummaryField.describe().into()
    } else {
        join_meta([
            format!("Day {}", display::celsius(day)),
            format!("Night {}", display::celsius(night)),
        ])
    };

    match summary.dif_c.filter(|v| v.is_finite()) {
        Some(dif) => MetricCard::good(display::signed_celsius(dif), meta),
        None => MetricCard::no_data(meta),
    }
}
