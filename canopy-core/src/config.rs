//! Engine configuration
//!
//! Defaults reproduce the thresholds in [`constants`](crate::constants).
//! Deployments that grow under different conventions can override any of them,
//! either with the `with_*` setters or from JSON:
//!
//! ```rust
//! # #[cfg(feature = "serde")] {
//! use canopy_core::InsightsConfig;
//!
//! let config = InsightsConfig::from_json(r#"{"stale_after_minutes": 15}"#).unwrap();
//! assert_eq!(config.stale_after_minutes, 15.0);
//! assert_eq!(config.gap_warning_minutes, 60.0);
//! # }
//! ```

use alloc::vec::Vec;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::constants::horticulture::{STRESS_CRITICAL_HOURS, STRESS_WARNING_HOURS};
use crate::constants::quality::{AGREEMENT_GOOD_RATE, AGREEMENT_WARNING_RATE};
use crate::constants::time::{GAP_WARNING_MINUTES, STALE_AFTER_MINUTES};
use crate::errors::{InsightsError, InsightsResult};
use crate::physics::{default_vpd_rules, resolve_vpd_band, VpdBand, VpdBandRule};

/// Tunable thresholds for the insight calculators
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct InsightsConfig {
    /// Newest-sample age (minutes) beyond which data is "Stale"
    pub stale_after_minutes: f64,
    /// Largest sample gap (minutes) before data is graded "Gaps"
    pub gap_warning_minutes: f64,
    /// Total stress hours above which the stress card warns
    pub stress_warning_hours: f64,
    /// Total stress hours above which the stress card is critical
    pub stress_critical_hours: f64,
    /// Agreement rate (0..1) at or above which alignment is good
    pub agreement_good_rate: f64,
    /// Agreement rate at or above which alignment is a warning
    pub agreement_warning_rate: f64,
    /// Stage-name rules, first match wins
    pub vpd_rules: Vec<VpdBandRule>,
    /// Band for stages no rule matches
    pub default_vpd_band: VpdBand,
}

impl Default for InsightsConfig {
    fn default() -> Self {
        Self {
            stale_after_minutes: STALE_AFTER_MINUTES,
            gap_warning_minutes: GAP_WARNING_MINUTES,
            stress_warning_hours: STRESS_WARNING_HOURS,
            stress_critical_hours: STRESS_CRITICAL_HOURS,
            agreement_good_rate: AGREEMENT_GOOD_RATE,
            agreement_warning_rate: AGREEMENT_WARNING_RATE,
            vpd_rules: default_vpd_rules(),
            default_vpd_band: VpdBand::default(),
        }
    }
}

impl InsightsConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set staleness and gap limits (minutes)
    pub fn with_freshness(mut self, stale_after_minutes: f64, gap_warning_minutes: f64) -> Self {
        self.stale_after_minutes = stale_after_minutes;
        self.gap_warning_minutes = gap_warning_minutes;
        self
    }

    /// Set stress grading thresholds (hours)
    pub fn with_stress_hours(mut self, warning_hours: f64, critical_hours: f64) -> Self {
        self.stress_warning_hours = warning_hours;
        self.stress_critical_hours = critical_hours;
        self
    }

    /// Set agreement grading thresholds (0..1)
    pub fn with_agreement_rates(mut self, good_rate: f64, warning_rate: f64) -> Self {
        self.agreement_good_rate = good_rate;
        self.agreement_warning_rate = warning_rate;
        self
    }

    /// Replace the stage rule table
    pub fn with_vpd_rules(mut self, rules: Vec<VpdBandRule>) -> Self {
        self.vpd_rules = rules;
        self
    }

    /// Insert a rule ahead of the existing ones
    pub fn with_priority_rule(mut self, rule: VpdBandRule) -> Self {
        self.vpd_rules.insert(0, rule);
        self
    }

    pub fn with_default_vpd_band(mut self, band: VpdBand) -> Self {
        self.default_vpd_band = band;
        self
    }

    /// Band for a stage name under this configuration
    pub fn vpd_band_for_stage(&self, stage: &str) -> VpdBand {
        resolve_vpd_band(&self.vpd_rules, stage, self.default_vpd_band)
    }

    /// Reject thresholds that can't produce a sensible grading
    pub fn validate(&self) -> InsightsResult<()> {
        check_positive("stale_after_minutes", self.stale_after_minutes)?;
        check_positive("gap_warning_minutes", self.gap_warning_minutes)?;
        check_non_negative("stress_warning_hours", self.stress_warning_hours)?;
        check_non_negative("stress_critical_hours", self.stress_critical_hours)?;
        if self.stress_warning_hours > self.stress_critical_hours {
            return Err(InsightsError::InvalidConfig {
                field: "stress_hours",
                reason: "warning threshold exceeds critical threshold",
            });
        }

        check_rate("agreement_good_rate", self.agreement_good_rate)?;
        check_rate("agreement_warning_rate", self.agreement_warning_rate)?;
        if self.agreement_warning_rate > self.agreement_good_rate {
            return Err(InsightsError::InvalidConfig {
                field: "agreement_rates",
                reason: "warning rate exceeds good rate",
            });
        }

        check_band(&self.default_vpd_band)?;
        for rule in &self.vpd_rules {
            check_band(&rule.band)?;
            if rule.keywords.iter().all(|k| k.is_empty()) {
                return Err(InsightsError::InvalidConfig {
                    field: "vpd_rules",
                    reason: "rule has no keywords",
                });
            }
        }

        Ok(())
    }

    /// Parse and validate a JSON configuration; missing fields take defaults
    #[cfg(feature = "serde")]
    pub fn from_json(json: &str) -> InsightsResult<Self> {
        use alloc::string::ToString;

        let config: Self =
            serde_json::from_str(json).map_err(|e| InsightsError::Decode(e.to_string()))?;
        if let Err(e) = config.validate() {
            log_warn!("rejected insights config: {}", e);
            return Err(e);
        }
        Ok(config)
    }
}

fn check_positive(field: &'static str, value: f64) -> InsightsResult<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(InsightsError::InvalidConfig {
            field,
            reason: "must be a positive number",
        })
    }
}

fn check_non_negative(field: &'static str, value: f64) -> InsightsResult<()> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(InsightsError::InvalidConfig {
            field,
            reason: "must be zero or greater",
        })
    }
}

fn check_rate(field: &'static str, value: f64) -> InsightsResult<()> {
    if value.is_finite() && (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(InsightsError::InvalidConfig {
            field,
            reason: "must be between 0 and 1",
        })
    }
}

fn check_band(band: &VpdBand) -> InsightsResult<()> {
    let finite = band.min_kpa.is_finite() && band.max_kpa.is_finite();
    if finite && band.min_kpa >= 0.0 && band.min_kpa <= band.max_kpa {
        Ok(())
    } else {
        Err(InsightsError::InvalidBand {
            min: band.min_kpa,
            max: band.max_kpa,
        })
    }
}
