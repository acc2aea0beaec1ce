// fv-core/src/units.rs

use uom::si::f64::{
    Area as UomArea, Length as UomLength, MassDensity as UomMassDensity,
    MassRate as UomMassRate, Time as UomTime, Velocity as UomVelocity, Volume as UomVolume,
    VolumeRate as UomVolumeRate,
};

use crate::dimensioned::DimensionedScalar;
use crate::dimensions::{
    DIM_AREA, DIM_DENSITY, DIM_FLUX, DIM_LENGTH, DIM_MASS_FLUX, DIM_TIME, DIM_VELOCITY,
    DIM_VOLUME,
};

// Public canonical unit types (SI, f64)
pub type Area = UomArea;
pub type Density = UomMassDensity;
pub type Length = UomLength;
pub type MassRate = UomMassRate;
pub type Time = UomTime;
pub type Velocity = UomVelocity;
pub type Volume = UomVolume;
pub type VolumeRate = UomVolumeRate;

#[inline]
pub fn s(v: f64) -> Time {
    use uom::si::time::second;
    Time::new::<second>(v)
}

#[inline]
pub fn m(v: f64) -> Length {
    use uom::si::length::meter;
    Length::new::<meter>(v)
}

#[inline]
pub fn m2(v: f64) -> Area {
    use uom::si::area::square_meter;
    Area::new::<square_meter>(v)
}

#[inline]
pub fn m3(v: f64) -> Volume {
    use uom::si::volume::cubic_meter;
    Volume::new::<cubic_meter>(v)
}

#[inline]
pub fn mps(v: f64) -> Velocity {
    use uom::si::velocity::meter_per_second;
    Velocity::new::<meter_per_second>(v)
}

#[inline]
pub fn kg_per_m3(v: f64) -> Density {
    use uom::si::mass_density::kilogram_per_cubic_meter;
    Density::new::<kilogram_per_cubic_meter>(v)
}

#[inline]
pub fn kgps(v: f64) -> MassRate {
    use uom::si::mass_rate::kilogram_per_second;
    MassRate::new::<kilogram_per_second>(v)
}

#[inline]
pub fn m3ps(v: f64) -> VolumeRate {
    use uom::si::volume_rate::cubic_meter_per_second;
    VolumeRate::new::<cubic_meter_per_second>(v)
}

/// Time in seconds.
#[inline]
pub fn seconds(t: Time) -> f64 {
    use uom::si::time::second;
    t.get::<second>()
}

// Bridges from statically typed quantities into run-time dimensioned values.

impl From<Time> for DimensionedScalar {
    fn from(v: Time) -> Self {
        DimensionedScalar::new("time", DIM_TIME, v.value)
    }
}

impl From<Length> for DimensionedScalar {
    fn from(v: Length) -> Self {
        DimensionedScalar::new("length", DIM_LENGTH, v.value)
    }
}

impl From<Area> for DimensionedScalar {
    fn from(v: Area) -> Self {
        DimensionedScalar::new("area", DIM_AREA, v.value)
    }
}

impl From<Volume> for DimensionedScalar {
    fn from(v: Volume) -> Self {
        DimensionedScalar::new("volume", DIM_VOLUME, v.value)
    }
}

impl From<Velocity> for DimensionedScalar {
    fn from(v: Velocity) -> Self {
        DimensionedScalar::new("velocity", DIM_VELOCITY, v.value)
    }
}

impl From<Density> for DimensionedScalar {
    fn from(v: Density) -> Self {
        DimensionedScalar::new("rho", DIM_DENSITY, v.value)
    }
}

impl From<VolumeRate> for DimensionedScalar {
    fn from(v: VolumeRate) -> Self {
        DimensionedScalar::new("phi", DIM_FLUX, v.value)
    }
}

impl From<MassRate> for DimensionedScalar {
    fn from(v: MassRate) -> Self {
        DimensionedScalar::new("massFlux", DIM_MASS_FLUX, v.value)
    }
}
