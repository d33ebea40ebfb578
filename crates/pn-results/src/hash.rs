//! Content-based hashing for report IDs.

use pn_project::schema::Drawing;
use sha2::{Digest, Sha256};

pub fn compute_report_id(drawing: &Drawing, solver_version: &str) -> String {
    let mut hasher = Sha256::new();

    let drawing_json = serde_json::to_string(drawing).unwrap_or_default();
    hasher.update(drawing_json.as_bytes());

    hasher.update(solver_version.as_bytes());

    let result = hasher.finalize();
    format!("{:x}", result)
}
