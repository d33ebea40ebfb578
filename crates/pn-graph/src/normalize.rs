//! Normalization of the canonical list: attribute propagation, tee
//! classification, and synthetic fitting insertion.
//!
//! The normalizer never mutates its input. It derives a new list, same
//! relative order, with every diameter and capacity resolved, every tee
//! classified and branch-paired, and the synthetic fittings the geometry
//! implies spliced in.

use std::collections::HashMap;

use pn_core::BranchRef;
use tracing::debug;

use crate::component::{Component, ElementKind, Network};

/// Produce the normalized component list for one solver invocation.
pub fn normalize(network: &Network) -> Vec<Component> {
    let mut list = network.components().to_vec();
    fill_diameters(&mut list);
    classify_tees(&mut list);
    insert_run_elbows(&mut list);
    insert_side_branches(&mut list);
    fill_capacities(&mut list);
    debug!(
        input = network.len(),
        normalized = list.len(),
        "normalized component list"
    );
    list
}

/// Walk forward stamping every component with the running diameter.
///
/// The running value starts from the second component (the first pipe in a
/// conventionally drawn sequence) and is updated by every pipe that carries
/// an explicit diameter. An unset fitting diameter therefore inherits the
/// nearest upstream pipe's bore.
fn fill_diameters(list: &mut [Component]) {
    let mut current = list.get(1).map(|c| c.diameter_mm).unwrap_or(0.0);
    for c in list.iter_mut() {
        if c.is_pipe() && c.diameter_mm > 0.0 {
            current = c.diameter_mm;
        }
        c.diameter_mm = current;
    }
}

/// Classify generic tees as `tee_main` and pair branch references to outlets
/// positionally: the k-th tee in draw order feeds the k-th outlet.
fn classify_tees(list: &mut [Component]) {
    // Fresh references start past anything the user assigned by hand.
    let mut next_ref: BranchRef = list
        .iter()
        .filter_map(|c| c.branch)
        .max()
        .map(|r| r + 1)
        .unwrap_or(0);

    for c in list.iter_mut() {
        if matches!(c.kind, ElementKind::Tee | ElementKind::TeeMain) {
            c.kind = ElementKind::TeeMain;
            if c.branch.is_none() {
                c.branch = Some(next_ref);
                next_ref += 1;
            }
        }
    }

    let tee_refs: Vec<BranchRef> = list
        .iter()
        .filter(|c| c.kind == ElementKind::TeeMain)
        .filter_map(|c| c.branch)
        .collect();
    let outlet_positions: Vec<usize> = list
        .iter()
        .enumerate()
        .filter(|(_, c)| c.kind == ElementKind::Outlet)
        .map(|(i, _)| i)
        .collect();

    for (k, &pos) in outlet_positions.iter().enumerate() {
        let Some(&r) = tee_refs.get(k) else { break };
        if list[pos].branch.is_none() {
            list[pos].branch = Some(r);
        }
    }
}

/// Nearest pipe strictly before `pos`, walking backwards.
fn pipe_before(list: &[Component], pos: usize) -> Option<&Component> {
    list[..pos].iter().rev().find(|c| c.is_pipe())
}

/// Nearest pipe strictly after `pos`, walking forwards.
fn pipe_after(list: &[Component], pos: usize) -> Option<&Component> {
    list[pos + 1..].iter().find(|c| c.is_pipe())
}

/// A tee whose main run changes direction implies a 90-degree turn: splice a
/// synthetic elbow directly after any tee whose surrounding pipes disagree
/// on verticality.
fn insert_run_elbows(list: &mut Vec<Component>) {
    let mut splice_at: Vec<usize> = Vec::new();
    for (i, c) in list.iter().enumerate() {
        if c.kind != ElementKind::TeeMain {
            continue;
        }
        // Re-normalizing an already-normalized list must not splice twice.
        if list
            .get(i + 1)
            .is_some_and(|n| n.kind == ElementKind::Elbow90 && n.branch == c.branch)
        {
            continue;
        }
        let (Some(before), Some(after)) = (pipe_before(list, i), pipe_after(list, i)) else {
            continue;
        };
        if before.vertical != after.vertical {
            splice_at.push(i);
        }
    }

    for &i in splice_at.iter().rev() {
        let tee = list[i].clone();
        list.insert(
            i + 1,
            Component::synthetic(
                ElementKind::Elbow90,
                tee.index,
                tee.diameter_mm,
                tee.branch,
            ),
        );
    }
}

/// Model the physical tee at the point where a branch leaves the main run:
/// every branch-referenced outlet gets a matching `tee_side` and a 45-degree
/// elbow spliced directly after it, unless the diagram already carries one.
fn insert_side_branches(list: &mut Vec<Component>) {
    let mut splice_at: Vec<(usize, BranchRef)> = Vec::new();
    for (i, c) in list.iter().enumerate() {
        if c.kind != ElementKind::Outlet {
            continue;
        }
        let Some(r) = c.branch else { continue };
        let already = list
            .get(i + 1)
            .is_some_and(|n| n.kind == ElementKind::TeeSide && n.branch == Some(r));
        if !already {
            splice_at.push((i, r));
        }
    }

    for &(i, r) in splice_at.iter().rev() {
        let outlet = list[i].clone();
        list.insert(
            i + 1,
            Component::synthetic(
                ElementKind::Elbow45,
                outlet.index,
                outlet.diameter_mm,
                Some(r),
            ),
        );
        list.insert(
            i + 1,
            Component::synthetic(
                ElementKind::TeeSide,
                outlet.index,
                outlet.diameter_mm,
                Some(r),
            ),
        );
    }
}

/// Reverse-order flow propagation implementing conservation at junctions:
/// total flow upstream of a tee equals the sum of the flows leaving through
/// each downstream branch.
fn fill_capacities(list: &mut [Component]) {
    let mut current = 0.0_f64;
    let mut side_flow: HashMap<BranchRef, f64> = HashMap::new();

    for c in list.iter_mut().rev() {
        match c.kind {
            ElementKind::Outlet => {
                // The stated demand stays on the outlet and joins the
                // running accumulator.
                current += c.capacity_lps;
            }
            ElementKind::TeeSide => {
                c.capacity_lps = current;
                if let Some(r) = c.branch {
                    side_flow.insert(r, current);
                }
                // The trunk between the tee and the main-side outlet must
                // not see side flow already accounted for.
                current = 0.0;
            }
            ElementKind::TeeMain => {
                c.capacity_lps = current;
                if let Some(r) = c.branch {
                    current += side_flow.get(&r).copied().unwrap_or(0.0);
                }
            }
            _ => {
                c.capacity_lps = current;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::NetworkBuilder;
    use pn_core::DrawId;

    fn kinds(list: &[Component]) -> Vec<ElementKind> {
        list.iter().map(|c| c.kind).collect()
    }

    fn simple_run() -> Network {
        let mut b = NetworkBuilder::new();
        b.add_fitting(ElementKind::Discharge, 0.0, 0.0);
        let o = b.pipe_to(ElementKind::Outlet, 10.0, 0.0, 100.0, 10.0);
        b.set_capacity(o, 5.0);
        b.build()
    }

    fn branched_run() -> Network {
        // discharge - pipe - tee - pipe - outlet(3) - tee_side path - outlet(2)
        let mut b = NetworkBuilder::new();
        b.add_fitting(ElementKind::Discharge, 0.0, 0.0);
        b.pipe_to(ElementKind::Tee, 10.0, 0.0, 100.0, 10.0);
        let o1 = b.pipe_to(ElementKind::Outlet, 18.0, 0.0, 100.0, 8.0);
        b.set_capacity(o1, 3.0);
        let o2 = b.pipe_to(ElementKind::Outlet, 18.0, 6.0, 80.0, 6.0);
        b.set_capacity(o2, 2.0);
        b.build()
    }

    #[test]
    fn diameters_propagate_forward() {
        let net = simple_run();
        let list = normalize(&net);
        assert!(list.iter().all(|c| c.diameter_mm == 100.0));
    }

    #[test]
    fn diameter_fill_is_idempotent() {
        let net = branched_run();
        let mut once = net.components().to_vec();
        fill_diameters(&mut once);
        let mut twice = once.clone();
        fill_diameters(&mut twice);
        assert_eq!(once, twice);
    }

    #[test]
    fn generic_tee_becomes_main_with_reference() {
        let net = branched_run();
        let list = normalize(&net);
        let tee = list
            .iter()
            .find(|c| c.kind == ElementKind::TeeMain)
            .expect("tee classified");
        assert_eq!(tee.branch, Some(0));
    }

    #[test]
    fn first_outlet_pairs_with_first_tee() {
        let net = branched_run();
        let list = normalize(&net);
        let outlet = list
            .iter()
            .find(|c| c.kind == ElementKind::Outlet)
            .expect("outlet present");
        assert_eq!(outlet.branch, Some(0));
    }

    #[test]
    fn side_branch_is_spliced_after_referenced_outlet() {
        let net = branched_run();
        let list = normalize(&net);
        let o = list
            .iter()
            .position(|c| c.kind == ElementKind::Outlet)
            .unwrap();
        assert_eq!(list[o + 1].kind, ElementKind::TeeSide);
        assert_eq!(list[o + 1].branch, Some(0));
        assert_eq!(list[o + 1].index, list[o].index);
        assert_eq!(list[o + 2].kind, ElementKind::Elbow45);
    }

    #[test]
    fn capacity_fill_conserves_flow_at_tee() {
        let net = branched_run();
        let list = normalize(&net);

        let tee_pos = list
            .iter()
            .position(|c| c.kind == ElementKind::TeeMain)
            .unwrap();
        let upstream_pipe = list[..tee_pos]
            .iter()
            .rev()
            .find(|c| c.is_pipe())
            .unwrap();
        let tee = &list[tee_pos];
        let side = list
            .iter()
            .find(|c| c.kind == ElementKind::TeeSide)
            .unwrap();

        // main-branch flow + side-branch flow == upstream flow
        assert_eq!(tee.capacity_lps + side.capacity_lps, upstream_pipe.capacity_lps);
        assert_eq!(upstream_pipe.capacity_lps, 5.0);
        assert_eq!(tee.capacity_lps, 3.0);
        assert_eq!(side.capacity_lps, 2.0);
    }

    #[test]
    fn direction_changing_tee_gets_forced_elbow() {
        // Trunk runs horizontal into the tee, vertical out of it.
        let mut b = NetworkBuilder::new();
        b.add_fitting(ElementKind::Discharge, 0.0, 0.0);
        b.pipe_to(ElementKind::Tee, 10.0, 0.0, 100.0, 10.0);
        let o1 = b.pipe_to(ElementKind::Outlet, 10.0, 8.0, 100.0, 8.0);
        b.set_capacity(o1, 3.0);
        let o2 = b.pipe_to(ElementKind::Outlet, 16.0, 8.0, 100.0, 6.0);
        b.set_capacity(o2, 2.0);
        let net = b.build();

        let list = normalize(&net);
        let tee_pos = list
            .iter()
            .position(|c| c.kind == ElementKind::TeeMain)
            .unwrap();
        assert_eq!(list[tee_pos + 1].kind, ElementKind::Elbow90);
        assert_eq!(list[tee_pos + 1].branch, list[tee_pos].branch);

        // Splicing again must not double up.
        let net2 = Network::from_components(list.clone());
        let again = normalize(&net2);
        let elbows = |l: &[Component]| {
            l.iter()
                .filter(|c| c.kind == ElementKind::Elbow90)
                .count()
        };
        assert_eq!(elbows(&again), elbows(&list));
    }

    #[test]
    fn straight_run_inserts_nothing() {
        let net = simple_run();
        let list = normalize(&net);
        assert_eq!(
            kinds(&list),
            vec![
                ElementKind::Discharge,
                ElementKind::Pipe,
                ElementKind::Outlet
            ]
        );
    }

    #[test]
    fn discharge_sees_total_demand() {
        let net = branched_run();
        let list = normalize(&net);
        assert_eq!(list[0].kind, ElementKind::Discharge);
        assert_eq!(list[0].capacity_lps, 5.0);
    }

    #[test]
    fn explicit_branch_references_are_kept() {
        let mut b = NetworkBuilder::new();
        b.add_fitting(ElementKind::Discharge, 0.0, 0.0);
        let t = b.pipe_to(ElementKind::Tee, 10.0, 0.0, 100.0, 10.0);
        b.set_branch(t, 7);
        let o = b.pipe_to(ElementKind::Outlet, 18.0, 0.0, 100.0, 8.0);
        b.set_capacity(o, 3.0);
        let net = b.build();

        let list = normalize(&net);
        let tee = list
            .iter()
            .find(|c| c.kind == ElementKind::TeeMain)
            .unwrap();
        assert_eq!(tee.branch, Some(7));
        let outlet = list
            .iter()
            .find(|c| c.kind == ElementKind::Outlet)
            .unwrap();
        assert_eq!(outlet.branch, Some(7));
    }

    #[test]
    fn draw_indices_survive_normalization() {
        let net = branched_run();
        let before: Vec<DrawId> = net.components().iter().map(|c| c.index).collect();
        let list = normalize(&net);
        // Every original index still present, in order, possibly with
        // synthetic duplicates in between.
        let after: Vec<DrawId> = list.iter().map(|c| c.index).collect();
        let mut it = after.iter();
        for idx in &before {
            assert!(it.any(|a| a == idx), "index {idx} lost");
        }
    }
}
