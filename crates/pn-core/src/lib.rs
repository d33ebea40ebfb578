//! pn-core: stable foundation for pipenet.
//!
//! Contains:
//! - units (uom SI types + constructors + hydraulic constants)
//! - numeric (Real + division guards + float helpers)
//! - ids (stable compact draw indices for graph objects)
//! - error (shared error types)

pub mod error;
pub mod ids;
pub mod numeric;
pub mod units;

// Re-exports: nice ergonomics for downstream crates
pub use error::{PnError, PnResult};
pub use ids::*;
pub use numeric::*;
pub use units::*;
