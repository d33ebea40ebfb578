//! Drawing validation logic.

use std::collections::HashSet;

use crate::schema::{ComponentDef, Drawing, ElementDef};

#[derive(thiserror::Error, Debug)]
pub enum ValidationError {
    #[error("Duplicate draw index: {index}")]
    DuplicateIndex { index: u32 },

    #[error("Edge {edge} references missing node {node}")]
    DanglingEdge { edge: u32, node: u32 },

    #[error("Drawing has {count} discharge nodes, expected at most one")]
    MultipleDischarges { count: usize },

    #[error("Invalid value: {field} = {value} ({reason})")]
    InvalidValue {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Unsupported version: {version}")]
    UnsupportedVersion { version: u32 },
}

/// Structural checks on a persisted drawing before it is handed to the
/// solver. Hydraulic plausibility (flow balance, geometry) is the solver's
/// concern; this only rejects files the solver cannot meaningfully read.
pub fn validate_drawing(drawing: &Drawing) -> Result<(), ValidationError> {
    if drawing.version > crate::migrate::LATEST_VERSION {
        return Err(ValidationError::UnsupportedVersion {
            version: drawing.version,
        });
    }

    let mut indices = HashSet::new();
    let mut node_indices = HashSet::new();
    let mut discharges = 0usize;
    for def in &drawing.components {
        if !indices.insert(def.index()) {
            return Err(ValidationError::DuplicateIndex { index: def.index() });
        }
        if let ComponentDef::Node { index, element, .. } = def {
            node_indices.insert(*index);
            if matches!(element, ElementDef::Discharge) {
                discharges += 1;
            }
        }
    }

    if discharges > 1 {
        return Err(ValidationError::MultipleDischarges { count: discharges });
    }

    for def in &drawing.components {
        match *def {
            ComponentDef::Edge {
                index,
                from,
                to,
                diameter_mm,
                length_m,
            } => {
                if !node_indices.contains(&from) {
                    return Err(ValidationError::DanglingEdge { edge: index, node: from });
                }
                if !node_indices.contains(&to) {
                    return Err(ValidationError::DanglingEdge { edge: index, node: to });
                }
                validate_non_negative_finite("diameter_mm", diameter_mm, index)?;
                validate_non_negative_finite("length_m", length_m, index)?;
            }
            ComponentDef::Node {
                index,
                diameter_mm,
                capacity_lps,
                ..
            } => {
                validate_non_negative_finite("diameter_mm", diameter_mm, index)?;
                validate_non_negative_finite("capacity_lps", capacity_lps, index)?;
            }
        }
    }

    Ok(())
}

fn validate_non_negative_finite(
    field: &str,
    value: f64,
    index: u32,
) -> Result<(), ValidationError> {
    if !value.is_finite() || value < 0.0 {
        return Err(ValidationError::InvalidValue {
            field: format!("component {} {}", index, field),
            value: value.to_string(),
            reason: "must be non-negative and finite".to_string(),
        });
    }
    Ok(())
}
