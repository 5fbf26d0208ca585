//! Horticultural Constants
//!
//! Psychrometric coefficients for the Magnus-Tetens saturation vapor pressure
//! approximation, stage-dependent VPD target bands, and the thresholds that
//! grade cumulative stress.

// ===== MAGNUS-TETENS COEFFICIENTS =====

/// Saturation vapor pressure at 0°C (kPa).
///
/// Leading factor of `svp = 0.6108 * exp(17.27 * T / (T + 237.3))`.
///
/// Source: Tetens (1930), FAO-56 equation 11
pub const MAGNUS_SVP_BASE_KPA: f64 = 0.6108;

/// Magnus exponent coefficient (dimensionless).
pub const MAGNUS_A: f64 = 17.27;

/// Magnus temperature offset (°C).
pub const MAGNUS_B_C: f64 = 237.3;

// ===== VPD TARGET BANDS (kPa) =====

/// Germination, seedling and clone propagation band.
///
/// Young plants without roots need a humid environment, so the band sits low.
pub const VPD_PROPAGATION_KPA: (f64, f64) = (0.4, 0.8);

/// Vegetative growth band.
pub const VPD_VEGETATIVE_KPA: (f64, f64) = (0.8, 1.2);

/// Flowering, fruiting and bloom band.
///
/// Higher transpiration pull during generative growth.
pub const VPD_GENERATIVE_KPA: (f64, f64) = (1.0, 1.5);

/// Band used when the stage name matches no rule.
pub const VPD_DEFAULT_KPA: (f64, f64) = VPD_VEGETATIVE_KPA;

/// Stage keywords matched (case-insensitive substring) for the propagation band.
pub const PROPAGATION_KEYWORDS: &[&str] = &["germ", "seed", "clone"];

/// Stage keywords for the vegetative band.
pub const VEGETATIVE_KEYWORDS: &[&str] = &["veg"];

/// Stage keywords for the generative band.
pub const GENERATIVE_KEYWORDS: &[&str] = &["flow", "fruit", "bloom"];

// ===== STRESS THRESHOLDS =====

/// Total stress hours above which the stress card turns critical.
pub const STRESS_CRITICAL_HOURS: f64 = 3.0;

/// Total stress hours above which the stress card turns warning.
pub const STRESS_WARNING_HOURS: f64 = 0.5;
