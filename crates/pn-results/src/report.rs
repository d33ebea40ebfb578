//! Report assembly from a drawing.

use pn_project::schema::Drawing;
use pn_project::to_network;
use pn_solver::{SOLVER_VERSION, solve};

use crate::hash::compute_report_id;
use crate::types::{NetworkReport, OutletSheet, ReportManifest};

/// Solve a drawing and package every outlet path as an export sheet.
///
/// Each path ends at its terminal outlet, so the sheet is keyed by the last
/// row's draw index. `reversed` flips every sheet to outlet-first order.
pub fn build_report(drawing: &Drawing, reversed: bool) -> NetworkReport {
    let network = to_network(drawing);
    let paths = solve(&network);

    let sheets = paths
        .into_iter()
        .map(|mut rows| {
            let outlet_index = rows.last().map(|r| r.index).unwrap_or(0);
            if reversed {
                rows.reverse();
            }
            OutletSheet {
                outlet_index,
                reversed,
                rows,
            }
        })
        .collect::<Vec<_>>();

    let manifest = ReportManifest {
        report_id: compute_report_id(drawing, SOLVER_VERSION),
        network: drawing.name.clone(),
        timestamp: chrono::Utc::now().to_rfc3339(),
        outlets: sheets.len(),
        solver_version: SOLVER_VERSION.to_string(),
    };

    NetworkReport { manifest, sheets }
}
