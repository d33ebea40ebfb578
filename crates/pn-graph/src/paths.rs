//! Path decomposition: one ordered path per physical outlet.
//!
//! Input is the normalized flat list. Each path runs from the discharge to
//! exactly one outlet, sharing the common upstream trunk and diverging at
//! tee branch points. Reducers are synthesized inside each finished path at
//! diameter discontinuities.

use std::collections::HashSet;

use pn_core::{BranchRef, DrawId};
use tracing::debug;

use crate::component::{Component, ElementKind};

/// Slice the normalized list into per-outlet paths.
///
/// With no discharge present the whole sequence degrades to a single path;
/// nothing here raises. Output ordering puts the hydraulically farthest
/// branch first (see [`order_paths`]).
pub fn decompose(normalized: &[Component]) -> Vec<Vec<Component>> {
    if normalized.is_empty() {
        return Vec::new();
    }

    let Some(discharge) = normalized
        .iter()
        .position(|c| c.kind == ElementKind::Discharge)
    else {
        // Best-effort fallback for malformed input; callers validate.
        debug!("no discharge node, treating whole sequence as one path");
        let mut path = normalized.to_vec();
        insert_reducers(&mut path);
        return vec![path];
    };

    // Distinct branch references in order of first appearance.
    let mut refs: Vec<BranchRef> = Vec::new();
    for c in normalized {
        if c.kind == ElementKind::TeeMain {
            if let Some(r) = c.branch {
                if !refs.contains(&r) {
                    refs.push(r);
                }
            }
        }
    }

    // Candidate paths per reference, main branch then side branch, then
    // collapsed to the distinct outlet set (first path per outlet wins).
    let mut paths: Vec<Vec<Component>> = Vec::new();
    let mut covered: HashSet<DrawId> = HashSet::new();
    let keep = |path: Option<Vec<Component>>,
                    paths: &mut Vec<Vec<Component>>,
                    covered: &mut HashSet<DrawId>| {
        let Some(path) = path else { return };
        let Some(last) = path.last() else { return };
        if last.kind != ElementKind::Outlet {
            return;
        }
        if covered.insert(last.index) {
            paths.push(path);
        }
    };

    for &r in &refs {
        keep(main_branch_path(normalized, discharge, r), &mut paths, &mut covered);
        keep(side_branch_path(normalized, discharge, r), &mut paths, &mut covered);
    }

    // Any outlet the branch slicing missed falls back to the single path
    // from the discharge to the last outlet in draw order.
    let uncovered = normalized
        .iter()
        .any(|c| c.kind == ElementKind::Outlet && !covered.contains(&c.index));
    if uncovered {
        let last_outlet = normalized
            .iter()
            .rposition(|c| c.kind == ElementKind::Outlet);
        if let Some(o) = last_outlet {
            if o >= discharge {
                keep(
                    Some(normalized[discharge..=o].to_vec()),
                    &mut paths,
                    &mut covered,
                );
            }
        }
    }

    for path in &mut paths {
        insert_reducers(path);
    }

    debug!(outlets = paths.len(), "decomposed into outlet paths");
    order_paths(paths)
}

/// Discharge through the first `tee_main` with reference `r`, continuing to
/// the first outlet sharing that reference.
fn main_branch_path(list: &[Component], discharge: usize, r: BranchRef) -> Option<Vec<Component>> {
    let tee = list
        .iter()
        .position(|c| c.kind == ElementKind::TeeMain && c.branch == Some(r))?;
    let outlet = list
        .iter()
        .position(|c| c.kind == ElementKind::Outlet && c.branch == Some(r))?;
    if outlet < discharge || tee < discharge {
        return None;
    }
    Some(list[discharge..=outlet].to_vec())
}

/// The shared trunk up to (excluding) the tee, concatenated with everything
/// from the `tee_side` forward until the next `tee_main`/`discharge` or the
/// terminal outlet (inclusive).
fn side_branch_path(list: &[Component], discharge: usize, r: BranchRef) -> Option<Vec<Component>> {
    let tee = list
        .iter()
        .position(|c| c.kind == ElementKind::TeeMain && c.branch == Some(r))?;
    let side = list
        .iter()
        .position(|c| c.kind == ElementKind::TeeSide && c.branch == Some(r))?;
    if tee < discharge {
        return None;
    }

    let mut path = list[discharge..tee].to_vec();
    for (i, c) in list[side..].iter().enumerate() {
        if i > 0 && matches!(c.kind, ElementKind::TeeMain | ElementKind::Discharge) {
            break;
        }
        path.push(c.clone());
        if c.kind == ElementKind::Outlet {
            break;
        }
    }
    Some(path)
}

/// Splice a synthetic reducer wherever a fitting is immediately followed by
/// a pipe of a different resolved bore (both known). The reducer takes the
/// upstream fitting's diameter and the downstream flow.
pub(crate) fn insert_reducers(path: &mut Vec<Component>) {
    let mut i = 0;
    while i + 1 < path.len() {
        let cur = &path[i];
        let next = &path[i + 1];
        let discontinuity = cur.kind.is_node()
            && cur.kind != ElementKind::Reducer
            && next.is_pipe()
            && cur.diameter_mm > 0.0
            && next.diameter_mm > 0.0
            && cur.diameter_mm != next.diameter_mm;
        if discontinuity {
            let mut reducer =
                Component::synthetic(ElementKind::Reducer, cur.index, cur.diameter_mm, None);
            reducer.capacity_lps = next.capacity_lps;
            path.insert(i + 1, reducer);
            i += 2;
        } else {
            i += 1;
        }
    }
}

/// Cumulative pipe length between a path's last tee and its outlet, plus the
/// branch reference of that tee. Paths with no tee ancestry report zero.
fn branch_distance(path: &[Component]) -> (f64, Option<BranchRef>) {
    let Some(tee) = path.iter().rposition(|c| {
        matches!(c.kind, ElementKind::TeeMain | ElementKind::TeeSide)
    }) else {
        return (0.0, None);
    };
    let dist = path[tee + 1..]
        .iter()
        .filter(|c| c.is_pipe())
        .map(|c| c.length_m)
        .sum();
    (dist, path[tee].branch)
}

/// Order output paths so the outlet farthest (by pipe length) from its tee
/// comes first, its sibling on the same branch second, the rest by
/// decreasing distance, and tee-less paths last in their original order.
fn order_paths(mut paths: Vec<Vec<Component>>) -> Vec<Vec<Component>> {
    let metas: Vec<(f64, Option<BranchRef>)> =
        paths.iter().map(|p| branch_distance(p)).collect();

    // First strict maximum among branch-derived paths.
    let mut first: Option<usize> = None;
    for (i, m) in metas.iter().enumerate() {
        if m.0 > 0.0 && first.map_or(true, |f| m.0 > metas[f].0) {
            first = Some(i);
        }
    }
    let Some(first) = first else {
        return paths;
    };

    let mut order = vec![first];
    if let Some(sib) = (0..paths.len()).find(|&i| {
        i != first && metas[i].1.is_some() && metas[i].1 == metas[first].1
    }) {
        order.push(sib);
    }

    let mut rest: Vec<usize> = (0..paths.len())
        .filter(|i| !order.contains(i) && metas[*i].0 > 0.0)
        .collect();
    rest.sort_by(|&a, &b| {
        metas[b]
            .0
            .partial_cmp(&metas[a].0)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    order.extend(rest);
    let remaining: Vec<usize> = (0..paths.len()).filter(|i| !order.contains(i)).collect();
    order.extend(remaining);

    order
        .into_iter()
        .map(|i| std::mem::take(&mut paths[i]))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::NetworkBuilder;
    use crate::normalize::normalize;

    fn branched() -> Vec<Component> {
        let mut b = NetworkBuilder::new();
        b.add_fitting(ElementKind::Discharge, 0.0, 0.0);
        b.pipe_to(ElementKind::Tee, 10.0, 0.0, 100.0, 10.0);
        let o1 = b.pipe_to(ElementKind::Outlet, 18.0, 0.0, 100.0, 8.0);
        b.set_capacity(o1, 3.0);
        let o2 = b.pipe_to(ElementKind::Outlet, 18.0, 6.0, 100.0, 6.0);
        b.set_capacity(o2, 2.0);
        normalize(&b.build())
    }

    #[test]
    fn straight_run_yields_one_path() {
        let mut b = NetworkBuilder::new();
        b.add_fitting(ElementKind::Discharge, 0.0, 0.0);
        let o = b.pipe_to(ElementKind::Outlet, 10.0, 0.0, 100.0, 10.0);
        b.set_capacity(o, 5.0);
        let list = normalize(&b.build());

        let paths = decompose(&list);
        assert_eq!(paths.len(), 1);
        assert_eq!(paths[0].len(), 3);
        assert_eq!(paths[0][0].kind, ElementKind::Discharge);
        assert_eq!(paths[0][2].kind, ElementKind::Outlet);
    }

    #[test]
    fn branched_run_yields_two_paths() {
        let paths = decompose(&branched());
        assert_eq!(paths.len(), 2);
        for p in &paths {
            assert_eq!(p[0].kind, ElementKind::Discharge);
            assert_eq!(p.last().unwrap().kind, ElementKind::Outlet);
        }
        // Distinct outlets
        assert_ne!(paths[0].last().unwrap().index, paths[1].last().unwrap().index);
    }

    #[test]
    fn main_path_passes_through_tee_main() {
        let paths = decompose(&branched());
        let main = paths
            .iter()
            .find(|p| p.iter().any(|c| c.kind == ElementKind::TeeMain))
            .expect("main-branch path");
        assert!(!main.iter().any(|c| c.kind == ElementKind::TeeSide));
    }

    #[test]
    fn side_path_shares_trunk_and_diverges_at_tee_side() {
        let paths = decompose(&branched());
        let side = paths
            .iter()
            .find(|p| p.iter().any(|c| c.kind == ElementKind::TeeSide))
            .expect("side-branch path");
        // Trunk excludes the tee_main for this reference.
        assert!(!side.iter().any(|c| c.kind == ElementKind::TeeMain));
        // Divergence goes tee_side then the forced 45-degree elbow.
        let ts = side
            .iter()
            .position(|c| c.kind == ElementKind::TeeSide)
            .unwrap();
        assert_eq!(side[ts + 1].kind, ElementKind::Elbow45);
    }

    #[test]
    fn farthest_branch_comes_first() {
        // Main leg is 8 m from the tee, side leg is 6 m: main sorts first.
        let paths = decompose(&branched());
        let (d0, _) = branch_distance(&paths[0]);
        let (d1, _) = branch_distance(&paths[1]);
        assert!(d0 >= d1, "expected farthest-first, got {d0} then {d1}");
        assert!(paths[0].iter().any(|c| c.kind == ElementKind::TeeMain));
    }

    #[test]
    fn missing_discharge_degrades_to_whole_sequence() {
        let mut b = NetworkBuilder::new();
        b.add_fitting(ElementKind::Elbow90, 0.0, 0.0);
        let o = b.pipe_to(ElementKind::Outlet, 10.0, 0.0, 100.0, 10.0);
        b.set_capacity(o, 5.0);
        let list = normalize(&b.build());

        let paths = decompose(&list);
        assert_eq!(paths.len(), 1);
        assert_eq!(paths[0].len(), list.len());
    }

    #[test]
    fn reducer_spliced_at_diameter_discontinuity() {
        // pipe(100) -> elbow -> pipe(80): one reducer, upstream bore 100.
        let mut b = NetworkBuilder::new();
        b.add_fitting(ElementKind::Discharge, 0.0, 0.0);
        b.pipe_to(ElementKind::Elbow90, 10.0, 0.0, 100.0, 10.0);
        let o = b.pipe_to(ElementKind::Outlet, 18.0, 0.0, 80.0, 8.0);
        b.set_capacity(o, 5.0);
        let list = normalize(&b.build());

        let paths = decompose(&list);
        assert_eq!(paths.len(), 1);
        let reducers: Vec<usize> = paths[0]
            .iter()
            .enumerate()
            .filter(|(_, c)| c.kind == ElementKind::Reducer)
            .map(|(i, _)| i)
            .collect();
        assert_eq!(reducers.len(), 1);
        let r = reducers[0];
        assert_eq!(paths[0][r].diameter_mm, 100.0);
        assert_eq!(paths[0][r + 1].kind, ElementKind::Pipe);
        assert_eq!(paths[0][r + 1].diameter_mm, 80.0);
        // Capacity inherited from the downstream pipe.
        assert_eq!(paths[0][r].capacity_lps, paths[0][r + 1].capacity_lps);
    }

    #[test]
    fn no_reducer_for_matching_diameters() {
        let paths = decompose(&branched());
        for p in &paths {
            assert!(!p.iter().any(|c| c.kind == ElementKind::Reducer));
        }
    }

    #[test]
    fn empty_input_yields_no_paths() {
        assert!(decompose(&[]).is_empty());
    }

    #[test]
    fn outlet_paths_cover_every_outlet_once() {
        let list = branched();
        let outlet_count = list
            .iter()
            .filter(|c| c.kind == ElementKind::Outlet)
            .count();
        let paths = decompose(&list);
        let mut seen = HashSet::new();
        for p in &paths {
            assert!(seen.insert(p.last().unwrap().index));
        }
        assert_eq!(seen.len(), outlet_count);
    }
}
