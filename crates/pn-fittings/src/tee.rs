//! Tee loss coefficients for the main run and the side branch.
//!
//! Both correlations are parameterized on the area ratio between the
//! downstream leg drawn after the tee and the tee's own bore,
//! `a = (d90 / d)^2`, with a fixed flow split per role.

use pn_core::numeric::div_or_zero;

/// Which leg of the tee an element sits on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TeeRole {
    /// Straight-through run of the tee.
    Main,
    /// Diverted branch leaving the run.
    Side,
}

impl TeeRole {
    /// Run flag as reported in output rows: 1 for the main run, 0.5 for the branch.
    pub fn t90(self) -> f64 {
        match self {
            TeeRole::Main => 1.0,
            TeeRole::Side => 0.5,
        }
    }

    /// Flow fraction assumed through the leg.
    pub fn q90(self) -> f64 {
        match self {
            TeeRole::Main => 0.5,
            TeeRole::Side => 1.0,
        }
    }
}

/// Loss coefficient of a tee leg.
///
/// `d_mm` is the tee's own (resolved) nominal diameter; `d90_mm` is the
/// nominal diameter of the component drawn immediately after the tee. Either
/// being zero means the geometry is not yet resolved and the coefficient is 0.
pub fn tee_k(role: TeeRole, d_mm: f64, d90_mm: f64) -> f64 {
    if d_mm <= 0.0 || d90_mm == 0.0 {
        return 0.0;
    }
    let ratio = d90_mm / d_mm;
    let a = ratio * ratio;
    if a == 0.0 {
        return 0.0;
    }

    let q = role.q90();
    match role {
        TeeRole::Main => {
            let multiplier = if a > 0.35 { 0.55 } else { 1.0 };
            let qa = q / a;
            multiplier * (1.0 + qa * qa - 2.0 * (1.0 - q) * (1.0 - q) - 1.414 * q * q)
        }
        TeeRole::Side => 0.75 - div_or_zero(0.35, a),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_flags() {
        assert_eq!(TeeRole::Main.t90(), 1.0);
        assert_eq!(TeeRole::Side.t90(), 0.5);
        assert_eq!(TeeRole::Main.q90(), 0.5);
        assert_eq!(TeeRole::Side.q90(), 1.0);
    }

    #[test]
    fn main_run_equal_diameters() {
        // a = 1 > 0.35, q = 0.5:
        // 0.55 * (1 + 0.25 - 0.5 - 0.3535) = 0.55 * 0.3965
        let k = tee_k(TeeRole::Main, 100.0, 100.0);
        assert!((k - 0.55 * 0.3965).abs() < 1e-9, "k = {k}");
    }

    #[test]
    fn main_run_small_branch_uses_unity_multiplier() {
        // d90 = 50, d = 100 -> a = 0.25 <= 0.35
        let k = tee_k(TeeRole::Main, 100.0, 50.0);
        let qa = 0.5 / 0.25;
        let expected = 1.0 + qa * qa - 0.5 - 0.3535;
        assert!((k - expected).abs() < 1e-9);
    }

    #[test]
    fn side_branch_equal_diameters() {
        let k = tee_k(TeeRole::Side, 100.0, 100.0);
        assert!((k - 0.4).abs() < 1e-12);
    }

    #[test]
    fn unresolved_geometry_is_zero() {
        assert_eq!(tee_k(TeeRole::Main, 0.0, 100.0), 0.0);
        assert_eq!(tee_k(TeeRole::Side, 100.0, 0.0), 0.0);
        assert_eq!(tee_k(TeeRole::Side, 0.0, 0.0), 0.0);
    }
}
