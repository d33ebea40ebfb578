//! Reducer (diameter transition) loss coefficient.

use pn_core::numeric::div_or_zero;

/// Area ratio between an upstream and downstream bore: `(di_up / di_down)^2`.
///
/// Zero downstream bore yields 0, which downstream guards treat as "unset".
pub fn area_ratio(di_up_m: f64, di_down_m: f64) -> f64 {
    let r = div_or_zero(di_up_m, di_down_m);
    r * r
}

/// Loss coefficient for a diameter transition with area ratio `a`.
///
/// - `a > 1`: sudden expansion, `K = (a - 1)^2`
/// - `a == 1`: no area change, `K = 0`
/// - `0 < a < 1`: contraction, linearized `K = -0.513 a + 0.51`
/// - `a <= 0`: unset geometry, `K = 0`
pub fn reducer_k(a: f64) -> f64 {
    if a <= 0.0 {
        0.0
    } else if a == 1.0 {
        0.0
    } else if a > 1.0 {
        (a - 1.0) * (a - 1.0)
    } else {
        -0.513 * a + 0.51
    }
}
