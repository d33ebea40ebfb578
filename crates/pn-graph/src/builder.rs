//! Incremental network builder.

use pn_core::{BranchRef, DrawId};

use crate::component::{Component, ElementKind, Network, Point};

/// Builder for constructing the canonical component list in draw order.
///
/// Append components in the order they are drawn: the flat sequence is the
/// solver's input contract, so a pipe belongs between the fitting it leaves
/// and the fitting it reaches. `pipe_to` keeps that interleaving for the
/// common "drag a pipe to the next fitting" gesture; `add_pipe` appends an
/// edge between two explicit fittings at the current end of the sequence.
///
/// Call `build()` to freeze the list into an immutable `Network` with
/// verticality tagged.
#[derive(Debug, Default)]
pub struct NetworkBuilder {
    components: Vec<Component>,
    next_index: u32,
    last_fitting: Option<DrawId>,
}

impl NetworkBuilder {
    /// Create a new empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    fn next_id(&mut self) -> DrawId {
        let id = DrawId::from_index(self.next_index);
        self.next_index += 1;
        id
    }

    /// Append a fitting node and return its draw index.
    pub fn add_fitting(&mut self, kind: ElementKind, x: f64, y: f64) -> DrawId {
        let id = self.next_id();
        self.components
            .push(Component::node(id, kind, Point { x, y }));
        self.last_fitting = Some(id);
        id
    }

    /// Append a pipe edge between two fittings and return its draw index.
    pub fn add_pipe(
        &mut self,
        from: DrawId,
        to: DrawId,
        diameter_mm: f64,
        length_m: f64,
    ) -> DrawId {
        let id = self.next_id();
        self.components
            .push(Component::pipe(id, from, to, diameter_mm, length_m));
        id
    }

    /// Append a pipe from the last fitting to a new fitting at `(x, y)`,
    /// then the fitting itself. Returns the new fitting's draw index.
    ///
    /// With no previous fitting the pipe degenerates to a self-loop on the
    /// new fitting; the drawing surface never produces that, but the builder
    /// stays total.
    pub fn pipe_to(
        &mut self,
        kind: ElementKind,
        x: f64,
        y: f64,
        diameter_mm: f64,
        length_m: f64,
    ) -> DrawId {
        let pipe_id = self.next_id();
        let fitting_id = DrawId::from_index(self.next_index);
        let from = self.last_fitting.unwrap_or(fitting_id);
        self.components
            .push(Component::pipe(pipe_id, from, fitting_id, diameter_mm, length_m));
        self.add_fitting(kind, x, y)
    }

    /// Set a fitting's nominal diameter (mm).
    pub fn set_diameter(&mut self, id: DrawId, diameter_mm: f64) {
        if let Some(c) = self.component_mut(id) {
            c.diameter_mm = diameter_mm;
        }
    }

    /// Set an outlet's demand capacity (L/s).
    pub fn set_capacity(&mut self, id: DrawId, capacity_lps: f64) {
        if let Some(c) = self.component_mut(id) {
            c.capacity_lps = capacity_lps;
        }
    }

    /// Set a component's branch reference explicitly.
    pub fn set_branch(&mut self, id: DrawId, branch: BranchRef) {
        if let Some(c) = self.component_mut(id) {
            c.branch = Some(branch);
        }
    }

    fn component_mut(&mut self, id: DrawId) -> Option<&mut Component> {
        self.components.iter_mut().find(|c| c.index == id)
    }

    /// Freeze the list into an immutable snapshot.
    pub fn build(self) -> Network {
        Network::from_components(self.components)
    }
}
