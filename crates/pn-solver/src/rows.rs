//! Display-ready result rows, one per path station.

use pn_core::units::constants::G_MPS2;
use pn_core::units::{Length, Pressure, Velocity, VolumeRate, kpa, lps, m, mm, mps};
use pn_graph::Component;
use serde::{Deserialize, Serialize};

/// One station of an evaluated path.
///
/// `index` is the component's stable draw index, not its position in the
/// sliced path: the displayed numbering must match on-canvas order even when
/// a trunk component appears in several outlet paths. Numeric fields default
/// to 0 when their inputs are absent rather than failing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Row {
    /// Stable draw index (join key against the canvas).
    pub index: u32,
    /// Element type tag ("pipe", "tee_main", ...).
    pub item: String,
    pub capacity_lps: f64,
    pub diameter_mm: f64,
    pub length_m: f64,
    pub vertical: bool,
    /// 45-degree-elbow equivalents: 2 for a 90, 1 for a 45, else 0.
    pub elbow: u32,
    /// True for synthetic diameter-transition fittings.
    pub reducer: bool,
    /// Tee run flag: 1 main run, 0.5 side branch, 0 for non-tees.
    pub t90: f64,
    /// Diameter of the component drawn immediately after a tee, mm.
    pub d90_mm: f64,
    /// Assumed flow fraction through the tee leg.
    pub q90: f64,
    /// Internal bore, m.
    pub di_m: f64,
    pub velocity_mps: f64,
    pub reynolds: f64,
    /// Darcy friction factor; nonzero only for pipes.
    pub friction: f64,
    /// Bore area ratio against the next station.
    pub area_ratio: f64,
    pub k_reducer: f64,
    pub k_tee: f64,
    pub k_total: f64,
    /// Velocity head V^2/2g, m.
    pub velocity_head_m: f64,
    /// Head loss at this station, m of water column.
    pub head_loss_m: f64,
    /// Cumulative pressure drop from the discharge, m of water column.
    pub pressure_m: f64,
}

impl Row {
    /// Project a component's identity and user-entered attributes into a row
    /// with all derived fields zeroed.
    pub fn from_component(c: &Component) -> Self {
        Self {
            index: c.index.index(),
            item: c.kind.as_str().to_string(),
            capacity_lps: c.capacity_lps,
            diameter_mm: c.diameter_mm,
            length_m: c.length_m,
            vertical: c.vertical,
            elbow: 0,
            reducer: false,
            t90: 0.0,
            d90_mm: 0.0,
            q90: 0.0,
            di_m: 0.0,
            velocity_mps: 0.0,
            reynolds: 0.0,
            friction: 0.0,
            area_ratio: 0.0,
            k_reducer: 0.0,
            k_tee: 0.0,
            k_total: 0.0,
            velocity_head_m: 0.0,
            head_loss_m: 0.0,
            pressure_m: 0.0,
        }
    }

    // Typed accessors for host consumption.

    pub fn capacity(&self) -> VolumeRate {
        lps(self.capacity_lps)
    }

    pub fn diameter(&self) -> Length {
        mm(self.diameter_mm)
    }

    pub fn bore(&self) -> Length {
        m(self.di_m)
    }

    pub fn velocity(&self) -> Velocity {
        mps(self.velocity_mps)
    }

    pub fn head_loss(&self) -> Length {
        m(self.head_loss_m)
    }

    /// Cumulative pressure drop as a pressure, converted from water column.
    pub fn pressure(&self) -> Pressure {
        // rho g h with rho = 1000 kg/m^3: h metres -> kilopascals
        kpa(self.pressure_m * G_MPS2)
    }
}
