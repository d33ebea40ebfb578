//! Straight-pipe hydraulics: bore, velocity, Reynolds number, friction factor.

use pn_core::numeric::div_or_zero;
use pn_core::units::constants::{BORE_FACTOR, NU_WATER_M2PS, ROUGHNESS_MM};

/// Internal bore (m) for a nominal diameter (mm).
///
/// The bore factor accounts for wall thickness of standard pipe.
pub fn internal_diameter_m(nominal_mm: f64) -> f64 {
    BORE_FACTOR * nominal_mm / 1000.0
}

/// Mean velocity (m/s) for a volumetric flow (L/s) through a bore (m).
///
/// Zero bore yields zero velocity.
pub fn velocity_mps(capacity_lps: f64, di_m: f64) -> f64 {
    // Q[m^3/s] = capacity/1000, A = pi/4 * di^2, V = Q/A
    div_or_zero(
        capacity_lps * 0.004,
        std::f64::consts::PI * di_m * di_m,
    )
}

/// Reynolds number for a bore (m) and velocity (m/s), water at ambient.
pub fn reynolds(di_m: f64, velocity_mps: f64) -> f64 {
    di_m * velocity_mps / NU_WATER_M2PS
}

/// Darcy friction factor via the Colebrook-White closed-form approximation.
///
/// `f = 1 / (0.86 ln(e/(3.7 d) + 5.74/Re^0.9))^2`
///
/// Roughness and nominal diameter are both in millimetres. Returns 0 when the
/// diameter or Reynolds number is non-positive (no flow, no friction term).
pub fn friction_factor(nominal_mm: f64, re: f64) -> f64 {
    if nominal_mm <= 0.0 || re <= 0.0 {
        return 0.0;
    }
    let term = ROUGHNESS_MM / (nominal_mm * 3.7) + 5.74 / re.powf(0.9);
    let denom = 0.86 * term.ln();
    div_or_zero(1.0, denom * denom)
}
