//! pn-graph: component graph, normalization, and path decomposition.
//!
//! Provides:
//! - The canonical component list as drawn (`Component`, `Network`)
//! - Incremental `NetworkBuilder` with verticality tagging
//! - The normalizer: diameter/capacity propagation, tee classification,
//!   synthetic fitting insertion
//! - The path decomposer: one ordered path per physical outlet
//!
//! # Example
//!
//! ```
//! use pn_graph::{ElementKind, NetworkBuilder, normalize, decompose};
//!
//! let mut builder = NetworkBuilder::new();
//! builder.add_fitting(ElementKind::Discharge, 0.0, 0.0);
//! let o = builder.pipe_to(ElementKind::Outlet, 10.0, 0.0, 100.0, 10.0);
//! builder.set_capacity(o, 5.0);
//! let network = builder.build();
//!
//! let normalized = normalize(&network);
//! let paths = decompose(&normalized);
//! assert_eq!(paths.len(), 1);
//! ```

pub mod builder;
pub mod component;
pub mod error;
pub mod normalize;
pub mod paths;
pub mod validate;

// Re-exports for ergonomics
pub use builder::NetworkBuilder;
pub use component::{Component, ElementKind, Network, Point, diameter_after};
pub use error::NetworkError;
pub use normalize::normalize;
pub use paths::decompose;
pub use validate::validate_network;
