//! Input data model
//!
//! Everything here is a read-only snapshot supplied by the caller. The engine
//! borrows these values for a single computation pass and never mutates them.
//!
//! With the `serde` feature the whole bundle decodes from the JSON shapes the
//! acquisition layer produces:
//!
//! ```rust
//! # #[cfg(feature = "serde")] {
//! use canopy_core::model::{DayMask, InsightInputs};
//!
//! let json = r#"{
//!     "window": {
//!         "hours": 24,
//!         "samples": [
//!             {"timestamp": "2024-05-01T06:00:00Z", "temperature_c": 21.5, "humidity_pct": 60, "day_mask": 1},
//!             {"timestamp": "2024-05-01T06:05:00Z", "temperature_c": null, "humidity_pct": 61, "day_mask": null}
//!         ]
//!     },
//!     "stage": {"current_stage": "Vegetative", "gdd_base_temp_c": 10}
//! }"#;
//!
//! let inputs = InsightInputs::from_json(json).unwrap();
//! assert_eq!(inputs.window.samples[0].day_mask, DayMask::Day);
//! assert_eq!(inputs.window.samples[1].day_mask, DayMask::Unknown);
//! # }
//! ```

use alloc::string::String;
use alloc::vec::Vec;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Light state of a sample
///
/// Wire form is `1` (day), `0` (night) or `null` (unknown); booleans and the
/// strings `"day"`/`"night"` are also accepted on input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DayMask {
    /// Lights on / sun up
    Day,
    /// Lights off
    Night,
    /// No light state recorded for this sample
    #[default]
    Unknown,
}

impl DayMask {
    /// Whether the state is known
    pub fn is_known(&self) -> bool {
        !matches!(self, Self::Unknown)
    }

    /// Map the numeric wire form
    pub fn from_flag(flag: Option<i64>) -> Self {
        match flag {
            Some(1) => Self::Day,
            Some(0) => Self::Night,
            _ => Self::Unknown,
        }
    }

    /// Display label
    pub fn label(&self) -> Option<&'static str> {
        match self {
            Self::Day => Some("Day"),
            Self::Night => Some("Night"),
            Self::Unknown => None,
        }
    }
}

/// One raw sample from the acquisition layer
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct TimeSeriesSample {
    /// ISO-8601 timestamp text; unparsable values drop the sample
    #[cfg_attr(feature = "serde", serde(with = "wire::timestamp_text"))]
    pub timestamp: String,

    /// Air temperature (°C)
    #[cfg_attr(feature = "serde", serde(alias = "temperatureC", alias = "temperature"))]
    pub temperature_c: Option<f64>,

    /// Relative humidity (%, 0-100)
    #[cfg_attr(feature = "serde", serde(alias = "humidityPct", alias = "humidity"))]
    pub humidity_pct: Option<f64>,

    /// Day/night state
    #[cfg_attr(feature = "serde", serde(alias = "dayMask", with = "wire::day_mask"))]
    pub day_mask: DayMask,
}

impl TimeSeriesSample {
    pub fn new(
        timestamp: impl Into<String>,
        temperature_c: Option<f64>,
        humidity_pct: Option<f64>,
        day_mask: DayMask,
    ) -> Self {
        Self {
            timestamp: timestamp.into(),
            temperature_c,
            humidity_pct,
            day_mask,
        }
    }
}

/// A window of samples, oldest first
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct TimeSeriesWindow {
    /// Samples in ascending timestamp order (not re-sorted)
    pub samples: Vec<TimeSeriesSample>,

    /// Requested window length; only shown when the samples can't span it
    pub hours: f64,
}

impl TimeSeriesWindow {
    pub fn new(samples: Vec<TimeSeriesSample>, hours: f64) -> Self {
        Self { samples, hours }
    }
}

/// Pre-aggregated photoperiod statistics from the schedule/lux collaborator
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct PhotoperiodSummary {
    /// Day average minus night average (°C)
    pub dif_c: Option<f64>,
    pub day_temperature_avg_c: Option<f64>,
    pub night_temperature_avg_c: Option<f64>,
    /// A light schedule is configured
    pub schedule_present: bool,
    /// A lux sensor is feeding observations
    pub sensor_enabled: bool,
    /// Fraction (0..1) of time observed state matched the schedule
    pub agreement_rate: Option<f64>,
    /// Where the photoperiod figures came from (e.g. "schedule", "lux")
    pub source: String,
    /// Observed lights-on offset from schedule (minutes, signed)
    pub start_offset_minutes: Option<f64>,
    /// Observed lights-off offset from schedule (minutes, signed)
    pub end_offset_minutes: Option<f64>,
}

/// Optional lower/upper bound pair
///
/// A missing side imposes no constraint.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Bounds {
    pub min: Option<f64>,
    pub max: Option<f64>,
}

impl Bounds {
    pub fn new(min: Option<f64>, max: Option<f64>) -> Self {
        Self { min, max }
    }

    /// Both sides set
    pub fn between(min: f64, max: f64) -> Self {
        Self::new(Some(min), Some(max))
    }

    /// No constraint on either side
    pub fn unbounded() -> Self {
        Self::default()
    }

    /// True if `value` satisfies every present bound (inclusive)
    pub fn contains(&self, value: f64) -> bool {
        self.min.map_or(true, |min| value >= min) && self.max.map_or(true, |max| value <= max)
    }
}

/// Per-stage environmental targets
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct StageTargets {
    pub temperature_c: Bounds,
    pub humidity_percent: Bounds,
    /// Target lights-on hours per day
    pub photoperiod_hours: Option<f64>,
}

/// Active plant metadata
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct StageContext {
    /// `None` means no active plant
    pub current_stage: Option<String>,
    /// Base temperature for degree-day accumulation (°C)
    pub gdd_base_temp_c: Option<f64>,
    /// Provenance of the base temperature (e.g. "species", "default")
    pub gdd_base_temp_source: String,
    pub targets: StageTargets,
}

impl StageContext {
    /// Stage name, if a plant is active
    pub fn stage(&self) -> Option<&str> {
        self.current_stage.as_deref()
    }
}

/// Most recent scalar readings, independent of the window
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct LatestReadings {
    pub temperature: Option<f64>,
    pub humidity: Option<f64>,
}

/// Everything one computation pass consumes
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct InsightInputs {
    pub window: TimeSeriesWindow,
    pub summary: PhotoperiodSummary,
    pub stage: StageContext,
    pub latest: LatestReadings,
}

#[cfg(feature = "serde")]
impl InsightInputs {
    /// Decode an input bundle from JSON
    pub fn from_json(json: &str) -> crate::errors::InsightsResult<Self> {
        use alloc::string::ToString;

        serde_json::from_str(json).map_err(|e| crate::errors::InsightsError::Decode(e.to_string()))
    }
}

#[cfg(feature = "serde")]
mod wire {
    pub mod day_mask {
        use super::super::DayMask;
        use core::fmt;
        use serde::de::{self, Visitor};
        use serde::{Deserializer, Serializer};

        pub fn serialize<S: Serializer>(mask: &DayMask, serializer: S) -> Result<S::Ok, S::Error> {
            match mask {
                DayMask::Day => serializer.serialize_u8(1),
                DayMask::Night => serializer.serialize_u8(0),
                DayMask::Unknown => serializer.serialize_none(),
            }
        }

        pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<DayMask, D::Error> {
            deserializer.deserialize_any(MaskVisitor)
        }

        struct MaskVisitor;

        impl<'de> Visitor<'de> for MaskVisitor {
            type Value = DayMask;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("1, 0, null, a boolean, or \"day\"/\"night\"")
            }

            fn visit_u64<E: de::Error>(self, v: u64) -> Result<DayMask, E> {
                Ok(DayMask::from_flag(i64::try_from(v).ok()))
            }

            fn visit_i64<E: de::Error>(self, v: i64) -> Result<DayMask, E> {
                Ok(DayMask::from_flag(Some(v)))
            }

            fn visit_f64<E: de::Error>(self, v: f64) -> Result<DayMask, E> {
                if v == 1.0 {
                    Ok(DayMask::Day)
                } else if v == 0.0 {
                    Ok(DayMask::Night)
                } else {
                    Ok(DayMask::Unknown)
                }
            }

            fn visit_bool<E: de::Error>(self, v: bool) -> Result<DayMask, E> {
                Ok(if v { DayMask::Day } else { DayMask::Night })
            }

            fn visit_str<E: de::Error>(self, v: &str) -> Result<DayMask, E> {
                if v.eq_ignore_ascii_case("day") || v == "1" {
                    Ok(DayMask::Day)
                } else if v.eq_ignore_ascii_case("night") || v == "0" {
                    Ok(DayMask::Night)
                } else {
                    Ok(DayMask::Unknown)
                }
            }

            fn visit_none<E: de::Error>(self) -> Result<DayMask, E> {
                Ok(DayMask::Unknown)
            }

            fn visit_unit<E: de::Error>(self) -> Result<DayMask, E> {
                Ok(DayMask::Unknown)
            }

            fn visit_some<D: Deserializer<'de>>(self, deserializer: D) -> Result<DayMask, D::Error> {
                deserializer.deserialize_any(MaskVisitor)
            }
        }
    }

    pub mod timestamp_text {
        use alloc::string::{String, ToString};
        use core::fmt;
        use serde::de::{self, Visitor};
        use serde::{Deserializer, Serializer};

        pub fn serialize<S: Serializer>(text: &str, serializer: S) -> Result<S::Ok, S::Error> {
            serializer.serialize_str(text)
        }

        pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
            deserializer.deserialize_any(TextVisitor)
        }

        struct TextVisitor;

        // Epoch-millisecond numbers are kept as text and parsed with the rest
        impl<'de> Visitor<'de> for TextVisitor {
            type Value = String;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a timestamp string or epoch milliseconds")
            }

            fn visit_str<E: de::Error>(self, v: &str) -> Result<String, E> {
                Ok(v.to_string())
            }

            fn visit_string<E: de::Error>(self, v: String) -> Result<String, E> {
                Ok(v)
            }

            fn visit_u64<E: de::Error>(self, v: u64) -> Result<String, E> {
                Ok(v.to_string())
            }

            fn visit_i64<E: de::Error>(self, v: i64) -> Result<String, E> {
                Ok(v.to_string())
            }

            fn visit_none<E: de::Error>(self) -> Result<String, E> {
                Ok(String::new())
            }

            fn visit_unit<E: de::Error>(self) -> Result<String, E> {
                Ok(String::new())
            }
        }
    }
}
