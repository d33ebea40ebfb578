//! pn-fittings: loss correlations for pipes and fittings.
//!
//! Pure numeric functions, one module per physical effect:
//! - `pipe`: internal bore, velocity, Reynolds number, Darcy friction factor
//! - `reducer`: area ratio and contraction/expansion loss coefficient
//! - `tee`: main-run and side-branch loss coefficients
//!
//! Every function here is total over its domain: a zero diameter, area ratio,
//! or Reynolds number yields a zero coefficient, never NaN or infinity. The
//! caller feeds these from partially specified diagrams and relies on that.
//!
//! Units are plain `f64` with the unit in the parameter name (`_mm`, `_m`,
//! `_lps`); the typed `uom` surface lives at the row level in pn-solver.

pub mod pipe;
pub mod reducer;
pub mod tee;

pub use pipe::{friction_factor, internal_diameter_m, reynolds, velocity_mps};
pub use reducer::{area_ratio, reducer_k};
pub use tee::{TeeRole, tee_k};
