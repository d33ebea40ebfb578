//! Drawing schema definitions.

use serde::{Deserialize, Serialize};

/// A persisted drawing: the flat ordered component list plus metadata.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Drawing {
    #[serde(default)]
    pub version: u32,
    pub name: String,
    #[serde(default)]
    pub components: Vec<ComponentDef>,
}

/// One entry of the flat list, tagged by kind.
///
/// `index` is the stable draw index; the list order is draw order and both
/// must round-trip unchanged.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ComponentDef {
    Node {
        index: u32,
        element: ElementDef,
        x: f64,
        y: f64,
        #[serde(default)]
        diameter_mm: f64,
        #[serde(default)]
        capacity_lps: f64,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        branch: Option<u32>,
    },
    Edge {
        index: u32,
        from: u32,
        to: u32,
        #[serde(default)]
        diameter_mm: f64,
        #[serde(default)]
        length_m: f64,
    },
}

impl ComponentDef {
    pub fn index(&self) -> u32 {
        match self {
            ComponentDef::Node { index, .. } | ComponentDef::Edge { index, .. } => *index,
        }
    }
}

/// Fitting element types as persisted. Pipes are edges, not elements.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ElementDef {
    Discharge,
    Outlet,
    Elbow45,
    Elbow90,
    Tee,
    TeeMain,
    TeeSide,
    Reducer,
}
