//! Growing degree days card

use alloc::format;
use alloc::string::String;

use crate::axis::TimeAxis;
use crate::card::{join_meta, MetricCard};
use crate::display;
use crate::errors::DegradedReason;
use crate::model::StageContext;
use crate::physics::growing_degree_days;

/// Compose the GDD card
///
/// Falls back, in order: no active plant, no base temperature, too few
/// samples.
pub fn card(axis: &TimeAxis, stage: &StageContext) -> MetricCard {
    let Some(stage_name) = stage.stage() else {
        return MetricCard::degraded(DegradedReason::NoActivePlant);
    };

    let Some(base) = stage.gdd_base_temp_c.filter(|v| v.is_finite()) else {
        return MetricCard::no_data(join_meta([
            stage_name,
            DegradedReason::MissingBaseTemperature.describe(),
        ]));
    };

    let Some(gdd) = growing_degree_days(axis.samples(), base) else {
        return MetricCard::degraded(DegradedReason::InsufficientSamples);
    };

    let provenance = if stage.gdd_base_temp_source.is_empty() {
        String::new()
    } else {
        format!(" ({})", stage.gdd_base_temp_source)
    };

    MetricCard::good(
        display::fixed1(Some(gdd)),
        join_meta([
            String::from("°C·day"),
            format!("Base {}{}", display::celsius(Some(base)), provenance),
        ]),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card::CardStatus;
    use crate::model::{DayMask, TimeSeriesSample};
    use alloc::string::ToString;
    use alloc::vec;

    fn two_day_axis() -> TimeAxis {
        TimeAxis::resolve(&vec![
            TimeSeriesSample::new("2024-05-01T00:00:00Z", Some(20.0), None, DayMask::Day),
            TimeSeriesSample::new("2024-05-02T00:00:00Z", Some(22.0), None, DayMask::Day),
            TimeSeriesSample::new("2024-05-03T00:00:00Z", Some(18.0), None, DayMask::Day),
        ])
    }

    fn stage(base: Option<f64>) -> StageContext {
        StageContext {
            current_stage: Some("Vegetative".to_string()),
            gdd_base_temp_c: base,
            gdd_base_temp_source: "species".to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn accumulates_over_window() {
        // (21 - 10) * 1 + (20 - 10) * 1
        let card = card(&two_day_axis(), &stage(Some(10.0)));
        assert_eq!(card.value, "21.0");
        assert_eq!(card.meta, "°C·day • Base 10.0°C (species)");
        assert_eq!(card.status, CardStatus::Good);
    }

    #[test]
    fn fallback_tiers() {
        let no_plant = card(&two_day_axis(), &StageContext::default());
        assert_eq!(no_plant.value, "--");
        assert_eq!(no_plant.meta, "No active plant");

        let no_base = card(&two_day_axis(), &stage(None));
        assert_eq!(no_base.value, "--");
        assert_eq!(no_base.meta, "Vegetative • Base temp unavailable");
        assert_eq!(no_base.status, CardStatus::Warning);

        let empty = card(&TimeAxis::default(), &stage(Some(10.0)));
        assert_eq!(empty.value, "--");
        assert_eq!(empty.meta, "Insufficient data");
    }
}
