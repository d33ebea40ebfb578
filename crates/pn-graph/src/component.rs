//! Canonical component list data structures.

use pn_core::{BranchRef, DrawId};

use crate::error::NetworkError;

/// Closed set of element kinds a drawn component can have.
///
/// `Tee` is what the drawing surface emits for any branching fitting; the
/// normalizer classifies it into `TeeMain` and synthesizes the paired
/// `TeeSide`. `Reducer` only ever appears synthetically, spliced in by the
/// path decomposer at diameter discontinuities.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ElementKind {
    /// The single source node of the network.
    Discharge,
    /// Sink node with a user-specified demand flow.
    Outlet,
    Elbow45,
    Elbow90,
    /// Unclassified branching fitting, as drawn.
    Tee,
    /// Straight-through run of a classified tee.
    TeeMain,
    /// Diverted branch of a classified tee.
    TeeSide,
    /// Diameter transition between two pipe bores.
    Reducer,
    /// Edge connecting two fittings.
    Pipe,
}

impl ElementKind {
    /// Stable tag used in rows and persisted files.
    pub fn as_str(self) -> &'static str {
        match self {
            ElementKind::Discharge => "discharge",
            ElementKind::Outlet => "outlet",
            ElementKind::Elbow45 => "elbow45",
            ElementKind::Elbow90 => "elbow90",
            ElementKind::Tee => "tee",
            ElementKind::TeeMain => "tee_main",
            ElementKind::TeeSide => "tee_side",
            ElementKind::Reducer => "reducer",
            ElementKind::Pipe => "pipe",
        }
    }

    pub fn is_pipe(self) -> bool {
        matches!(self, ElementKind::Pipe)
    }

    pub fn is_tee(self) -> bool {
        matches!(
            self,
            ElementKind::Tee | ElementKind::TeeMain | ElementKind::TeeSide
        )
    }

    pub fn is_node(self) -> bool {
        !self.is_pipe()
    }
}

/// Canvas position of a fitting. Used only for verticality and geometry.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

/// One element of the canonical ordered list: a fitting node or a pipe edge.
///
/// The `index` is the stable draw index assigned when the component was
/// drawn. The solver copies it unchanged into every normalized list, path
/// slice, and output row, even when a component ends up on several outlet
/// paths. Synthetic fittings inherit the index of the component they were
/// spliced after.
#[derive(Debug, Clone, PartialEq)]
pub struct Component {
    pub index: DrawId,
    pub kind: ElementKind,
    pub pos: Point,
    /// Endpoint fitting identities; pipes only.
    pub endpoints: Option<(DrawId, DrawId)>,
    /// Nominal diameter, mm. Zero means "unset, resolve by propagation".
    pub diameter_mm: f64,
    /// Pipe length, m. Zero for fittings.
    pub length_m: f64,
    /// Volumetric flow through the element, L/s. For outlets this is the
    /// user-stated demand; everywhere else it is filled by propagation.
    pub capacity_lps: f64,
    pub branch: Option<BranchRef>,
    /// Computed once from endpoint coordinates when the canonical graph is
    /// built, then copied unchanged through every downstream transformation.
    pub vertical: bool,
}

impl Component {
    /// A fitting node at a canvas position.
    pub fn node(index: DrawId, kind: ElementKind, pos: Point) -> Self {
        Self {
            index,
            kind,
            pos,
            endpoints: None,
            diameter_mm: 0.0,
            length_m: 0.0,
            capacity_lps: 0.0,
            branch: None,
            vertical: false,
        }
    }

    /// A pipe edge between two fittings.
    pub fn pipe(index: DrawId, from: DrawId, to: DrawId, diameter_mm: f64, length_m: f64) -> Self {
        Self {
            index,
            kind: ElementKind::Pipe,
            pos: Point::default(),
            endpoints: Some((from, to)),
            diameter_mm,
            length_m,
            capacity_lps: 0.0,
            branch: None,
            vertical: false,
        }
    }

    /// A fitting spliced in by the normalizer or decomposer, inheriting the
    /// draw index of its host component.
    pub(crate) fn synthetic(
        kind: ElementKind,
        index: DrawId,
        diameter_mm: f64,
        branch: Option<BranchRef>,
    ) -> Self {
        Self {
            index,
            kind,
            pos: Point::default(),
            endpoints: None,
            diameter_mm,
            length_m: 0.0,
            capacity_lps: 0.0,
            branch,
            vertical: false,
        }
    }

    pub fn is_pipe(&self) -> bool {
        self.kind.is_pipe()
    }
}

/// Nominal diameter of the component drawn immediately after `index`, or 0.
///
/// Tee correlations take their downstream diameter from drawing order, not
/// path order, so this looks up the canonical list by draw index.
pub fn diameter_after(components: &[Component], index: DrawId) -> f64 {
    let next = index.next();
    components
        .iter()
        .find(|c| c.index == next)
        .map(|c| c.diameter_mm)
        .unwrap_or(0.0)
}

/// The canonical component graph: an immutable snapshot of the drawn
/// sequence, in draw order, with verticality already tagged.
///
/// The solver never mutates a `Network`; every downstream stage derives new
/// lists that live only for the duration of one computation.
#[derive(Debug, Clone, Default)]
pub struct Network {
    pub(crate) components: Vec<Component>,
    pub(crate) issues: Vec<NetworkError>,
}

impl Network {
    /// Build a snapshot from an already-ordered component list.
    ///
    /// Computes each pipe's verticality from its endpoint fittings. A pipe
    /// referencing a fitting that does not exist is dropped from the
    /// snapshot and recorded as an issue; nothing here is fatal.
    pub fn from_components(components: Vec<Component>) -> Self {
        let mut issues = Vec::new();

        // A pipe's destination fitting may be drawn after the pipe itself,
        // so endpoints resolve against the full fitting set, not a prefix.
        let positions: Vec<(DrawId, Point)> = components
            .iter()
            .filter(|c| c.kind.is_node())
            .map(|c| (c.index, c.pos))
            .collect();
        let lookup = |id: DrawId| positions.iter().find(|(i, _)| *i == id).map(|(_, p)| *p);

        let mut resolved: Vec<Component> = Vec::with_capacity(components.len());
        for mut c in components {
            if let Some((from, to)) = c.endpoints {
                match (lookup(from), lookup(to)) {
                    (Some(a), Some(b)) => {
                        c.vertical = is_vertical(a, b);
                        resolved.push(c);
                    }
                    (None, _) => {
                        tracing::warn!(pipe = %c.index, node = %from, "pipe endpoint unresolved, skipping");
                        issues.push(NetworkError::UnresolvedGeometry {
                            pipe: c.index,
                            node: from,
                        });
                    }
                    (_, None) => {
                        tracing::warn!(pipe = %c.index, node = %to, "pipe endpoint unresolved, skipping");
                        issues.push(NetworkError::UnresolvedGeometry {
                            pipe: c.index,
                            node: to,
                        });
                    }
                }
            } else {
                resolved.push(c);
            }
        }

        Self {
            components: resolved,
            issues,
        }
    }

    pub fn components(&self) -> &[Component] {
        &self.components
    }

    /// Issues recorded while freezing the snapshot (skipped pipes).
    pub fn issues(&self) -> &[NetworkError] {
        &self.issues
    }

    pub fn len(&self) -> usize {
        self.components.len()
    }

    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }

    /// See [`diameter_after`].
    pub fn diameter_after(&self, index: DrawId) -> f64 {
        diameter_after(&self.components, index)
    }
}

/// A run is vertical when its rise dominates its horizontal reach.
fn is_vertical(a: Point, b: Point) -> bool {
    (b.y - a.y).abs() > (b.x - a.x).abs()
}
