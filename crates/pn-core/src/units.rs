// pn-core/src/units.rs

use uom::si::f64::{
    Length as UomLength, Pressure as UomPressure, Ratio as UomRatio, Velocity as UomVelocity,
    VolumeRate as UomVolumeRate,
};

// Public canonical unit types (SI, f64)
pub type Length = UomLength;
pub type Pressure = UomPressure;
pub type Ratio = UomRatio;
pub type Velocity = UomVelocity;
pub type VolumeRate = UomVolumeRate;

#[inline]
pub fn m(v: f64) -> Length {
    use uom::si::length::meter;
    Length::new::<meter>(v)
}

#[inline]
pub fn mm(v: f64) -> Length {
    use uom::si::length::millimeter;
    Length::new::<millimeter>(v)
}

#[inline]
pub fn mps(v: f64) -> Velocity {
    use uom::si::velocity::meter_per_second;
    Velocity::new::<meter_per_second>(v)
}

#[inline]
pub fn lps(v: f64) -> VolumeRate {
    use uom::si::volume_rate::liter_per_second;
    VolumeRate::new::<liter_per_second>(v)
}

#[inline]
pub fn kpa(v: f64) -> Pressure {
    use uom::si::pressure::kilopascal;
    Pressure::new::<kilopascal>(v)
}

#[inline]
pub fn unitless(v: f64) -> Ratio {
    use uom::si::ratio::ratio;
    Ratio::new::<ratio>(v)
}

pub mod constants {
    /// Gravitational acceleration, m/s^2.
    pub const G_MPS2: f64 = 9.81;

    /// Kinematic viscosity of water at ambient temperature, m^2/s.
    pub const NU_WATER_M2PS: f64 = 1e-6;

    /// Internal bore as a fraction of nominal diameter (wall thickness).
    pub const BORE_FACTOR: f64 = 0.922;

    /// Absolute pipe roughness, mm.
    pub const ROUGHNESS_MM: f64 = 0.2;

    /// Minor-loss coefficient of a 45-degree elbow.
    pub const K_ELBOW45: f64 = 0.2;

    /// Reference loss coefficient forced onto the discharge element.
    pub const K_DISCHARGE: f64 = 1.0;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constructors_smoke() {
        let _l = m(2.0);
        let _d = mm(100.0);
        let _v = mps(0.75);
        let _q = lps(5.0);
        let _p = kpa(101.325);
        let _r = unitless(0.5);
    }

    #[test]
    fn mm_is_meter_over_thousand() {
        use uom::si::length::meter;
        assert!((mm(1000.0).get::<meter>() - 1.0).abs() < 1e-12);
    }
}
