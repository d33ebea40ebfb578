//! pn-solver: hydraulic evaluation of decomposed outlet paths.
//!
//! The entry point is [`solve`]: take an immutable network snapshot, return
//! one row array per outlet path with velocity, Reynolds number, friction
//! and minor losses, cumulative head and pressure at every station. The
//! whole pass is a pure, synchronous fold; it holds no state between
//! invocations and never fails. Malformed diagrams produce best-effort
//! rows with zeroed derived fields instead of errors.
//!
//! # Example
//!
//! ```
//! use pn_graph::{ElementKind, NetworkBuilder};
//! use pn_solver::solve;
//!
//! let mut builder = NetworkBuilder::new();
//! builder.add_fitting(ElementKind::Discharge, 0.0, 0.0);
//! let o = builder.pipe_to(ElementKind::Outlet, 10.0, 0.0, 100.0, 10.0);
//! builder.set_capacity(o, 5.0);
//!
//! let paths = solve(&builder.build());
//! assert_eq!(paths.len(), 1);
//! let pipe = &paths[0][1];
//! assert!((pipe.velocity_mps - 0.749).abs() < 5e-3);
//! ```

pub mod evaluate;
pub mod rows;

pub use evaluate::{evaluate_path, solve};
pub use rows::Row;

/// Version stamp carried into report manifests.
pub const SOLVER_VERSION: &str = env!("CARGO_PKG_VERSION");
