//! Advisory structural checks on a network snapshot.
//!
//! The solver itself never rejects input; these checks exist so the host can
//! surface problems (and explain odd best-effort output) before or after a
//! computation. A well-formed network produces an empty list.

use crate::component::{ElementKind, Network};
use crate::error::NetworkError;

/// Collect structural issues: skipped pipes recorded at build time, a
/// missing discharge, and tee/outlet pairing mismatches.
pub fn validate_network(network: &Network) -> Vec<NetworkError> {
    let mut issues: Vec<NetworkError> = network.issues().to_vec();

    let has_discharge = network
        .components()
        .iter()
        .any(|c| c.kind == ElementKind::Discharge);
    if !has_discharge && !network.is_empty() {
        issues.push(NetworkError::MissingSource);
    }

    let tees = network
        .components()
        .iter()
        .filter(|c| matches!(c.kind, ElementKind::Tee | ElementKind::TeeMain))
        .count();
    let outlets = network
        .components()
        .iter()
        .filter(|c| c.kind == ElementKind::Outlet)
        .count();
    if tees > outlets {
        issues.push(NetworkError::BranchMismatch { tees, outlets });
    }

    issues
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::NetworkBuilder;

    #[test]
    fn well_formed_network_is_clean() {
        let mut b = NetworkBuilder::new();
        b.add_fitting(ElementKind::Discharge, 0.0, 0.0);
        let o = b.pipe_to(ElementKind::Outlet, 10.0, 0.0, 100.0, 10.0);
        b.set_capacity(o, 5.0);
        assert!(validate_network(&b.build()).is_empty());
    }

    #[test]
    fn missing_discharge_is_reported() {
        let mut b = NetworkBuilder::new();
        b.add_fitting(ElementKind::Elbow90, 0.0, 0.0);
        b.pipe_to(ElementKind::Outlet, 10.0, 0.0, 100.0, 10.0);
        let issues = validate_network(&b.build());
        assert!(issues.contains(&NetworkError::MissingSource));
    }

    #[test]
    fn more_tees_than_outlets_is_reported() {
        let mut b = NetworkBuilder::new();
        b.add_fitting(ElementKind::Discharge, 0.0, 0.0);
        b.pipe_to(ElementKind::Tee, 5.0, 0.0, 100.0, 5.0);
        b.pipe_to(ElementKind::Tee, 10.0, 0.0, 100.0, 5.0);
        b.pipe_to(ElementKind::Outlet, 15.0, 0.0, 100.0, 5.0);
        let issues = validate_network(&b.build());
        assert!(matches!(
            issues.as_slice(),
            [NetworkError::BranchMismatch {
                tees: 2,
                outlets: 1
            }]
        ));
    }

    #[test]
    fn empty_network_is_clean() {
        assert!(validate_network(&NetworkBuilder::new().build()).is_empty());
    }
}
