//! Schedule/lux alignment
//!
//! Works entirely from the photoperiod summary flags; raw lux readings are
//! correlated upstream.

use alloc::format;
use alloc::string::String;

use crate::card::{join_meta, CardStatus, MetricCard};
use crate::config::InsightsConfig;
use crate::constants::NO_DATA;
use crate::display;
use crate::model::PhotoperiodSummary;

/// Which of the four configurations the summary describes
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AgreementClass {
    /// Neither schedule nor sensor
    NoSchedule,
    /// Sensor only, nothing to compare against
    LuxOnly,
    /// Schedule only, nothing observed
    ScheduleOnly,
    /// Both present, rate not yet computed
    Pending,
    /// Both present with a rate (0..1)
    Rated(f64),
}

/// Classify the summary
pub fn classify(summary: &PhotoperiodSummary) -> AgreementClass {
    match (summary.schedule_present, summary.sensor_enabled) {
        (false, true) => AgreementClass::LuxOnly,
        (false, false) => AgreementClass::NoSchedule,
        (true, false) => AgreementClass::ScheduleOnly,
        (true, true) => match summary.agreement_rate.filter(|r| r.is_finite()) {
            Some(rate) => AgreementClass::Rated(rate),
            None => AgreementClass::Pending,
        },
    }
}

/// Grade a whole agreement percentage, as displayed, against the configured
/// rates
pub fn grade(percent: f64, config: &InsightsConfig) -> CardStatus {
    if percent >= config.agreement_good_rate * 100.0 {
        CardStatus::Good
    } else if percent >= config.agreement_warning_rate * 100.0 {
        CardStatus::Warning
    } else {
        CardStatus::Critical
    }
}

/// Compose the alignment card
pub fn card(summary: &PhotoperiodSummary, config: &InsightsConfig) -> MetricCard {
    let source = if summary.source.is_empty() {
        NO_DATA
    } else {
        summary.source.as_str()
    };

    let offset = |label: &str, minutes: Option<f64>| -> String {
        minutes
            .filter(|m| m.is_finite())
            .map(|m| format!("{} {}", label, display::signed_minutes(m)))
            .unwrap_or_default()
    };

    let meta = join_meta([
        format!("Source: {}", source),
        offset("Start", summary.start_offset_minutes),
        offset("End", summary.end_offset_minutes),
    ]);

    match classify(summary) {
        AgreementClass::NoSchedule => MetricCard::warning("No schedule", meta),
        AgreementClass::LuxOnly => MetricCard::warning("Lux only", meta),
        AgreementClass::ScheduleOnly => MetricCard::warning("Schedule only", meta),
        AgreementClass::Pending => MetricCard::no_data(meta),
        AgreementClass::Rated(rate) => {
            let percent = display::whole_percent(rate);
            MetricCard::new(display::percent_points(percent), meta, grade(percent, config))
        }
    }
}
