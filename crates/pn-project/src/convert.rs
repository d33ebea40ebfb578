//! Conversion between the persisted flat list and the in-memory snapshot.

use pn_core::DrawId;
use pn_graph::{Component, ElementKind, Network, Point};

use crate::schema::{ComponentDef, Drawing, ElementDef};
use crate::migrate::LATEST_VERSION;

fn element_kind(def: ElementDef) -> ElementKind {
    match def {
        ElementDef::Discharge => ElementKind::Discharge,
        ElementDef::Outlet => ElementKind::Outlet,
        ElementDef::Elbow45 => ElementKind::Elbow45,
        ElementDef::Elbow90 => ElementKind::Elbow90,
        ElementDef::Tee => ElementKind::Tee,
        ElementDef::TeeMain => ElementKind::TeeMain,
        ElementDef::TeeSide => ElementKind::TeeSide,
        ElementDef::Reducer => ElementKind::Reducer,
    }
}

fn element_def(kind: ElementKind) -> Option<ElementDef> {
    match kind {
        ElementKind::Discharge => Some(ElementDef::Discharge),
        ElementKind::Outlet => Some(ElementDef::Outlet),
        ElementKind::Elbow45 => Some(ElementDef::Elbow45),
        ElementKind::Elbow90 => Some(ElementDef::Elbow90),
        ElementKind::Tee => Some(ElementDef::Tee),
        ElementKind::TeeMain => Some(ElementDef::TeeMain),
        ElementKind::TeeSide => Some(ElementDef::TeeSide),
        ElementKind::Reducer => Some(ElementDef::Reducer),
        ElementKind::Pipe => None,
    }
}

/// Materialize a drawing into an immutable network snapshot.
///
/// Stored draw indices and list order are honored as-is; verticality is
/// recomputed from the stored fitting coordinates (it is derived state and
/// not persisted).
pub fn to_network(drawing: &Drawing) -> Network {
    let components = drawing
        .components
        .iter()
        .map(|def| match *def {
            ComponentDef::Node {
                index,
                element,
                x,
                y,
                diameter_mm,
                capacity_lps,
                branch,
            } => {
                let mut c = Component::node(
                    DrawId::from_index(index),
                    element_kind(element),
                    Point { x, y },
                );
                c.diameter_mm = diameter_mm;
                c.capacity_lps = capacity_lps;
                c.branch = branch;
                c
            }
            ComponentDef::Edge {
                index,
                from,
                to,
                diameter_mm,
                length_m,
            } => Component::pipe(
                DrawId::from_index(index),
                DrawId::from_index(from),
                DrawId::from_index(to),
                diameter_mm,
                length_m,
            ),
        })
        .collect();
    Network::from_components(components)
}

/// Persist a network snapshot back into the flat list shape.
pub fn from_network(network: &Network, name: impl Into<String>) -> Drawing {
    let components = network
        .components()
        .iter()
        .filter_map(|c| {
            if let Some((from, to)) = c.endpoints {
                return Some(ComponentDef::Edge {
                    index: c.index.index(),
                    from: from.index(),
                    to: to.index(),
                    diameter_mm: c.diameter_mm,
                    length_m: c.length_m,
                });
            }
            element_def(c.kind).map(|element| ComponentDef::Node {
                index: c.index.index(),
                element,
                x: c.pos.x,
                y: c.pos.y,
                diameter_mm: c.diameter_mm,
                capacity_lps: c.capacity_lps,
                branch: c.branch,
            })
        })
        .collect();
    Drawing {
        version: LATEST_VERSION,
        name: name.into(),
        components,
    }
}
