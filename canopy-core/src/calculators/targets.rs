//! Target alignment
//!
//! Compares the latest scalar readings with the stage targets. A dimension
//! is in range only when a reading exists and satisfies every bound that is
//! set; a dimension with no bounds is always in range once it has a reading.

use alloc::format;
use alloc::string::String;

use crate::card::{join_meta, MetricCard};
use crate::display;
use crate::errors::DegradedReason;
use crate::model::{Bounds, LatestReadings, StageContext};

/// Outcome of the target comparison
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TargetState {
    /// Both readings present and within targets
    OnTarget,
    /// At least one present reading outside its targets
    OffTarget,
    /// Plant present, but a live reading is missing and nothing present fails
    TargetsSet,
    /// No active plant
    NoPlant,
}

impl TargetState {
    pub fn label(&self) -> &'static str {
        match self {
            Self::OnTarget => "On target",
            Self::OffTarget => "Off target",
            Self::TargetsSet => "Targets set",
            Self::NoPlant => crate::constants::NO_DATA,
        }
    }
}

/// Whether a reading exists and satisfies the bounds
pub fn in_range(value: Option<f64>, bounds: &Bounds) -> bool {
    value.map_or(false, |v| v.is_finite() && bounds.contains(v))
}

/// Classify the latest readings against the stage targets
pub fn evaluate(latest: &LatestReadings, stage: &StageContext) -> TargetState {
    if stage.stage().is_none() {
        return TargetState::NoPlant;
    }

    let targets = &stage.targets;
    let dimensions = [
        (latest.temperature, &targets.temperature_c),
        (latest.humidity, &targets.humidity_percent),
    ];

    let any_failing = dimensions
        .iter()
        .any(|(value, bounds)| value.is_some() && !in_range(*value, bounds));
    if any_failing {
        return TargetState::OffTarget;
    }

    if dimensions.iter().all(|(value, bounds)| in_range(*value, bounds)) {
        TargetState::OnTarget
    } else {
        TargetState::TargetsSet
    }
}

/// Compose the targets card
///
/// `day_hours` is the photoperiod split's day figure, when one was computed.
pub fn card(latest: &LatestReadings, stage: &StageContext, day_hours: Option<f64>) -> MetricCard {
    let state = evaluate(latest, stage);
    let Some(stage_name) = stage.stage() else {
        return MetricCard::degraded(DegradedReason::NoActivePlant);
    };

    let targets = &stage.targets;
    let photoperiod = match (targets.photoperiod_hours, day_hours) {
        (Some(target), Some(actual)) if target.is_finite() => format!(
            "Photoperiod {} vs {:.1}h",
            display::signed_hours(actual - target),
            target
        ),
        _ => String::new(),
    };

    let meta = join_meta([
        String::from(stage_name),
        format!("Temp {}", display::band(&targets.temperature_c, "°C")),
        format!("RH {}", display::band(&targets.humidity_percent, "%")),
        photoperiod,
    ]);

    match state {
        TargetState::OnTarget => MetricCard::good(state.label(), meta),
        _ => MetricCard::warning(state.label(), meta),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card::CardStatus;
    use crate::model::StageTargets;
    use alloc::string::ToString;

    fn flowering() -> StageContext {
        StageContext {
            current_stage: Some("Flowering".to_string()),
            targets: StageTargets {
                temperature_c: Bounds::between(20.0, 26.0),
                humidity_percent: Bounds::new(None, Some(55.0)),
                photoperiod_hours: Some(12.0),
            },
            ..Default::default()
        }
    }

    fn latest(temperature: Option<f64>, humidity: Option<f64>) -> LatestReadings {
        LatestReadings {
            temperature,
            humidity,
        }
    }

    #[test]
    fn on_target_with_photoperiod_deviation() {
        let card = card(&latest(Some(23.0), Some(50.0)), &flowering(), Some(13.5));
        assert_eq!(card.value, "On target");
        assert_eq!(
            card.meta,
            "Flowering • Temp 20.0–26.0°C • RH ≤55.0% • Photoperiod +1.5h vs 12.0h"
        );
        assert_eq!(card.status, CardStatus::Good);
    }

    #[test]
    fn one_dimension_failing_is_off_target() {
        let state = evaluate(&latest(Some(23.0), Some(60.0)), &flowering());
        assert_eq!(state, TargetState::OffTarget);

        // A present failing reading wins over a missing one
        let state = evaluate(&latest(Some(30.0), None), &flowering());
        assert_eq!(state, TargetState::OffTarget);
    }

    #[test]
    fn missing_readings_mean_targets_set() {
        let card = card(&latest(None, None), &flowering(), None);
        assert_eq!(card.value, "Targets set");
        assert_eq!(card.meta, "Flowering • Temp 20.0–26.0°C • RH ≤55.0%");
        assert_eq!(card.status, CardStatus::Warning);

        let state = evaluate(&latest(Some(22.0), None), &flowering());
        assert_eq!(state, TargetState::TargetsSet);
    }

    #[test]
    fn unbounded_dimension_always_in_range() {
        assert!(in_range(Some(-40.0), &Bounds::unbounded()));
        assert!(in_range(Some(1e9), &Bounds::unbounded()));
        assert!(!in_range(None, &Bounds::unbounded()));
    }

    #[test]
    fn no_plant() {
        let card = card(&latest(Some(23.0), Some(50.0)), &StageContext::default(), Some(12.0));
        assert_eq!(card.value, "--");
        assert_eq!(card.meta, "No active plant");
        assert_eq!(card.status, CardStatus::Warning);
    }
}
