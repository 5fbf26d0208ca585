//! Horticultural Formulas
//!
//! ## Vapor Pressure Deficit
//!
//! VPD is how much more water the air could hold at its current temperature.
//! It drives transpiration: too low and the plant can't move water and
//! nutrients, too high and it closes its stomata to avoid wilting.
//!
//! ```text
//! svp(T) = 0.6108 · exp(17.27·T / (T + 237.3))      kPa, T in °C
//! vpd    = svp(T) · (1 − RH/100)                     kPa, RH in %
//! ```
//!
//! Since `RH ∈ [0, 100]`, `vpd ∈ [0, svp(T)]`. Inputs outside that range are
//! clamped so a sensor reading 101% yields zero deficit, not a negative one.
//!
//! ## Growing Degree Days
//!
//! Heat units accumulated above a crop-specific base temperature:
//!
//! ```text
//! GDD = Σ max(T̄ᵢ − T_base, 0) · Δdaysᵢ
//! ```
//!
//! where `T̄ᵢ` is the mean of the interval's two endpoints (or the leading
//! endpoint alone if the trailing one is missing) and `Δdaysᵢ` the interval
//! length in days. Summing over real interval lengths instead of counting
//! samples keeps the result correct for irregular logging.
//!
//! ## Stage VPD Bands
//!
//! Target bands come from an ordered rule table matched against the stage
//! name, first match wins:
//!
//! | keywords (case-insensitive substring) | band (kPa) |
//! |---------------------------------------|------------|
//! | germ, seed, clone                     | 0.4 – 0.8  |
//! | veg                                   | 0.8 – 1.2  |
//! | flow, fruit, bloom                    | 1.0 – 1.5  |
//! | anything else                         | 0.8 – 1.2  |

use alloc::string::String;
use alloc::vec::Vec;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::axis::ResolvedSample;
use crate::constants::horticulture::{
    GENERATIVE_KEYWORDS, MAGNUS_A, MAGNUS_B_C, MAGNUS_SVP_BASE_KPA, PROPAGATION_KEYWORDS,
    VEGETATIVE_KEYWORDS, VPD_DEFAULT_KPA, VPD_GENERATIVE_KPA, VPD_PROPAGATION_KPA,
    VPD_VEGETATIVE_KPA,
};
use crate::constants::time::SECONDS_PER_DAY;
use crate::integrator::walk_intervals;
use crate::model::Bounds;

/// Saturation vapor pressure (kPa) at `temp_c`
pub fn saturation_vapor_pressure_kpa(temp_c: f64) -> f64 {
    MAGNUS_SVP_BASE_KPA * libm::exp((MAGNUS_A * temp_c) / (temp_c + MAGNUS_B_C))
}

/// Vapor pressure deficit (kPa) at `temp_c` and `rh_percent`
///
/// Returns `None` for non-finite inputs.
pub fn vapor_pressure_deficit_kpa(temp_c: f64, rh_percent: f64) -> Option<f64> {
    if !temp_c.is_finite() || !rh_percent.is_finite() {
        return None;
    }
    let rh = rh_percent.clamp(0.0, 100.0);
    let vpd = saturation_vapor_pressure_kpa(temp_c) * (1.0 - rh / 100.0);
    vpd.is_finite().then_some(vpd)
}

/// Growing degree days (°C·day) over a parsed window
///
/// `None` with fewer than two samples. Intervals whose leading temperature
/// is missing contribute nothing.
pub fn growing_degree_days(samples: &[ResolvedSample], base_temp_c: f64) -> Option<f64> {
    let mut total = 0.0;
    let walked = walk_intervals(samples, |s0, s1, seconds| {
        let Some(start) = s0.temperature_c else {
            return;
        };
        let mean = match s1.temperature_c {
            Some(end) => (start + end) / 2.0,
            None => start,
        };
        let delta_days = seconds / SECONDS_PER_DAY;
        total += (mean - base_temp_c).max(0.0) * delta_days;
    });
    walked.then_some(total)
}

/// A VPD target band (kPa)
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct VpdBand {
    pub min_kpa: f64,
    pub max_kpa: f64,
}

impl VpdBand {
    pub const fn new(min_kpa: f64, max_kpa: f64) -> Self {
        Self { min_kpa, max_kpa }
    }

    const fn from_pair(pair: (f64, f64)) -> Self {
        Self::new(pair.0, pair.1)
    }

    /// The band as integrator bounds
    pub fn bounds(&self) -> Bounds {
        Bounds::between(self.min_kpa, self.max_kpa)
    }

    pub fn contains(&self, vpd_kpa: f64) -> bool {
        vpd_kpa >= self.min_kpa && vpd_kpa <= self.max_kpa
    }
}

impl Default for VpdBand {
    fn default() -> Self {
        Self::from_pair(VPD_DEFAULT_KPA)
    }
}

/// One row of the stage-to-band table
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct VpdBandRule {
    /// Substrings (any case); any one matching selects this rule
    pub keywords: Vec<String>,
    pub band: VpdBand,
}

impl VpdBandRule {
    pub fn new(keywords: &[&str], band: VpdBand) -> Self {
        Self {
            keywords: keywords.iter().map(|k| k.to_lowercase()).collect(),
            band,
        }
    }

    /// Case-insensitive substring match against a stage name
    pub fn matches(&self, stage: &str) -> bool {
        let stage = stage.to_lowercase();
        self.keywords
            .iter()
            .any(|keyword| !keyword.is_empty() && stage.contains(keyword.to_lowercase().as_str()))
    }
}

/// The stock rule table, in priority order
pub fn default_vpd_rules() -> Vec<VpdBandRule> {
    alloc::vec![
        VpdBandRule::new(PROPAGATION_KEYWORDS, VpdBand::from_pair(VPD_PROPAGATION_KPA)),
        VpdBandRule::new(VEGETATIVE_KEYWORDS, VpdBand::from_pair(VPD_VEGETATIVE_KPA)),
        VpdBandRule::new(GENERATIVE_KEYWORDS, VpdBand::from_pair(VPD_GENERATIVE_KPA)),
    ]
}

/// First matching rule's band, or `fallback`
pub fn resolve_vpd_band(rules: &[VpdBandRule], stage: &str, fallback: VpdBand) -> VpdBand {
    rules
        .iter()
        .find(|rule| rule.matches(stage))
        .map(|rule| rule.band)
        .unwrap_or(fallback)
}
