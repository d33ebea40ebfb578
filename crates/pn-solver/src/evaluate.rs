//! Forward numerical pass over each decomposed path.
//!
//! A pure, order-dependent fold: every derived field at station `i` may read
//! station `i-1` and `i+1`, never global mutable state shared across paths.

use pn_core::numeric::div_or_zero;
use pn_core::units::constants::{G_MPS2, K_DISCHARGE, K_ELBOW45};
use pn_fittings::{
    TeeRole, area_ratio, friction_factor, internal_diameter_m, reducer_k, reynolds, tee_k,
    velocity_mps,
};
use pn_graph::{Component, ElementKind, Network, diameter_after, normalize, decompose};
use tracing::debug;

use crate::rows::Row;

/// Compute the full hydraulic state for every outlet of a network.
///
/// Runs normalize -> decompose -> evaluate and returns one row array per
/// outlet path. Never fails: a partially specified diagram yields partial,
/// directionally correct rows (zeroed where geometry is unset).
pub fn solve(network: &Network) -> Vec<Vec<Row>> {
    let normalized = normalize(network);
    let paths = decompose(&normalized);
    debug!(paths = paths.len(), "evaluating outlet paths");
    paths
        .iter()
        .map(|p| evaluate_path(p, network.components()))
        .collect()
}

/// Evaluate one ordered path against the canonical component list.
///
/// The canonical list is only consulted for tee downstream diameters, which
/// are tied to drawing order rather than path order.
pub fn evaluate_path(path: &[Component], canonical: &[Component]) -> Vec<Row> {
    let n = path.len();
    if n == 0 {
        return Vec::new();
    }

    let mut rows: Vec<Row> = path.iter().map(Row::from_component).collect();

    // Station-local quantities.
    for (row, c) in rows.iter_mut().zip(path) {
        row.di_m = internal_diameter_m(c.diameter_mm);
        row.velocity_mps = velocity_mps(c.capacity_lps, row.di_m);
        row.reynolds = if row.di_m > 0.0 {
            reynolds(row.di_m, row.velocity_mps)
        } else {
            0.0
        };
        row.velocity_head_m = row.velocity_mps * row.velocity_mps / (2.0 * G_MPS2);

        match c.kind {
            ElementKind::Pipe => {
                row.friction = friction_factor(c.diameter_mm, row.reynolds);
            }
            ElementKind::Elbow90 => row.elbow = 2,
            ElementKind::Elbow45 => row.elbow = 1,
            ElementKind::Reducer => row.reducer = true,
            ElementKind::TeeMain | ElementKind::TeeSide | ElementKind::Tee => {
                let role = if c.kind == ElementKind::TeeSide {
                    TeeRole::Side
                } else {
                    TeeRole::Main
                };
                row.t90 = role.t90();
                row.q90 = role.q90();
                row.d90_mm = diameter_after(canonical, c.index);
                row.k_tee = tee_k(role, c.diameter_mm, row.d90_mm);
            }
            ElementKind::Discharge | ElementKind::Outlet => {}
        }
    }

    // Elevation head accrues only across vertical pipe runs.
    let mut head = vec![0.0_f64; n];
    for i in 1..n {
        let up = &path[i - 1];
        let rise = if up.is_pipe() && up.vertical {
            up.length_m
        } else {
            0.0
        };
        head[i] = head[i - 1] + rise;
    }

    // Area ratio against the next station; the last station copies its
    // neighbor, and the discharge is the hydraulic reference (a = 1).
    for i in 0..n {
        rows[i].area_ratio = if i + 1 < n {
            area_ratio(rows[i].di_m, rows[i + 1].di_m)
        } else if n >= 2 {
            rows[i - 1].area_ratio
        } else {
            1.0
        };
        if path[i].kind == ElementKind::Discharge {
            rows[i].area_ratio = 1.0;
        }
        rows[i].k_reducer = reducer_k(rows[i].area_ratio);
    }

    // Total loss coefficient and local head loss.
    for (i, row) in rows.iter_mut().enumerate() {
        row.k_total = if path[i].kind == ElementKind::Discharge {
            K_DISCHARGE
        } else {
            row.friction * div_or_zero(row.length_m, row.di_m)
                + f64::from(row.elbow) * K_ELBOW45
                + row.k_reducer
                + row.k_tee
        };
        row.head_loss_m = row.k_total * row.velocity_head_m;
    }

    // Discretized steady-flow energy balance between consecutive stations:
    // friction/minor loss plus elevation and velocity-head change.
    for i in 1..n {
        rows[i].pressure_m = rows[i - 1].pressure_m
            + rows[i - 1].head_loss_m
            + (head[i - 1] - head[i])
            + (rows[i - 1].velocity_head_m - rows[i].velocity_head_m);
    }

    // A lossless terminal station reports the upstream value so the profile
    // reaches the path's end.
    if n >= 2 && rows[n - 1].head_loss_m == 0.0 {
        rows[n - 1].head_loss_m = rows[n - 2].head_loss_m;
    }

    rows
}
