//! Report data types.

use pn_solver::Row;
use serde::{Deserialize, Serialize};

pub type ReportId = String;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ReportManifest {
    pub report_id: ReportId,
    pub network: String,
    pub timestamp: String,
    pub outlets: usize,
    pub solver_version: String,
}

/// One export sheet: the row table of a single outlet path.
///
/// Row order is station order from the discharge. When `reversed` is set the
/// rows run outlet-first instead, which is how printed schedules are usually
/// laid out.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OutletSheet {
    /// Draw index of the path's terminal outlet.
    pub outlet_index: u32,
    pub reversed: bool,
    pub rows: Vec<Row>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NetworkReport {
    pub manifest: ReportManifest,
    pub sheets: Vec<OutletSheet>,
}
