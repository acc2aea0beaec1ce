//! Physical dimension sets tracked at run time.
//!
//! A [`DimensionSet`] stores integer exponents over the seven SI base
//! dimensions. Fields and dimensioned values carry one so that arithmetic can
//! detect inconsistent combinations (adding a mass flux to a volumetric flux,
//! for example) before the numbers are used.

use core::fmt;
use core::ops::{Div, Mul};

/// Index of each base dimension inside a [`DimensionSet`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BaseDimension {
    Mass = 0,
    Length = 1,
    Time = 2,
    Temperature = 3,
    Moles = 4,
    Current = 5,
    LuminousIntensity = 6,
}

pub const N_BASE_DIMENSIONS: usize = 7;

/// Exponents over (mass, length, time, temperature, moles, current, luminous intensity).
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DimensionSet {
    exponents: [i32; N_BASE_DIMENSIONS],
}

impl DimensionSet {
    pub const fn new(
        mass: i32,
        length: i32,
        time: i32,
        temperature: i32,
        moles: i32,
        current: i32,
        luminous_intensity: i32,
    ) -> Self {
        Self {
            exponents: [
                mass,
                length,
                time,
                temperature,
                moles,
                current,
                luminous_intensity,
            ],
        }
    }

    pub const fn from_exponents(exponents: [i32; N_BASE_DIMENSIONS]) -> Self {
        Self { exponents }
    }

    pub fn exponents(&self) -> [i32; N_BASE_DIMENSIONS] {
        self.exponents
    }

    pub fn exponent(&self, dim: BaseDimension) -> i32 {
        self.exponents[dim as usize]
    }

    pub fn is_dimensionless(&self) -> bool {
        self.exponents.iter().all(|&e| e == 0)
    }

    /// Raise to an integer power.
    pub fn pow(self, n: i32) -> Self {
        let mut exponents = self.exponents;
        for e in &mut exponents {
            *e *= n;
        }
        Self { exponents }
    }

    /// Dimensions of a sum or difference of two quantities.
    ///
    /// Equal sets combine. Otherwise the combination is accepted only when one
    /// side is dimensionless, in which case the result carries the other side.
    pub fn additive(self, other: Self) -> Option<Self> {
        if self == other || other.is_dimensionless() {
            Some(self)
        } else if self.is_dimensionless() {
            Some(other)
        } else {
            None
        }
    }
}

impl Mul for DimensionSet {
    type Output = DimensionSet;

    fn mul(self, rhs: Self) -> Self::Output {
        let mut exponents = self.exponents;
        for (e, r) in exponents.iter_mut().zip(rhs.exponents) {
            *e += r;
        }
        Self { exponents }
    }
}

impl Div for DimensionSet {
    type Output = DimensionSet;

    fn div(self, rhs: Self) -> Self::Output {
        let mut exponents = self.exponents;
        for (e, r) in exponents.iter_mut().zip(rhs.exponents) {
            *e -= r;
        }
        Self { exponents }
    }
}

impl fmt::Display for DimensionSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, e) in self.exponents.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{e}")?;
        }
        write!(f, "]")
    }
}

impl fmt::Debug for DimensionSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "DimensionSet{self}")
    }
}

pub const DIMLESS: DimensionSet = DimensionSet::new(0, 0, 0, 0, 0, 0, 0);

pub const DIM_MASS: DimensionSet = DimensionSet::new(1, 0, 0, 0, 0, 0, 0);
pub const DIM_LENGTH: DimensionSet = DimensionSet::new(0, 1, 0, 0, 0, 0, 0);
pub const DIM_TIME: DimensionSet = DimensionSet::new(0, 0, 1, 0, 0, 0, 0);
pub const DIM_TEMPERATURE: DimensionSet = DimensionSet::new(0, 0, 0, 1, 0, 0, 0);
pub const DIM_MOLES: DimensionSet = DimensionSet::new(0, 0, 0, 0, 1, 0, 0);
pub const DIM_CURRENT: DimensionSet = DimensionSet::new(0, 0, 0, 0, 0, 1, 0);
pub const DIM_LUMINOUS_INTENSITY: DimensionSet = DimensionSet::new(0, 0, 0, 0, 0, 0, 1);

pub const DIM_AREA: DimensionSet = DimensionSet::new(0, 2, 0, 0, 0, 0, 0);
pub const DIM_VOLUME: DimensionSet = DimensionSet::new(0, 3, 0, 0, 0, 0, 0);
pub const DIM_VELOCITY: DimensionSet = DimensionSet::new(0, 1, -1, 0, 0, 0, 0);
pub const DIM_DENSITY: DimensionSet = DimensionSet::new(1, -3, 0, 0, 0, 0, 0);

/// Volumetric flux through a face (m^3/s).
pub const DIM_FLUX: DimensionSet = DimensionSet::new(0, 3, -1, 0, 0, 0, 0);

/// Mass flux through a face (kg/s).
pub const DIM_MASS_FLUX: DimensionSet = DimensionSet::new(1, 0, -1, 0, 0, 0, 0);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn composite_constants_compose() {
        assert_eq!(DIM_LENGTH * DIM_LENGTH, DIM_AREA);
        assert_eq!(DIM_LENGTH.pow(3), DIM_VOLUME);
        assert_eq!(DIM_VOLUME / DIM_TIME, DIM_FLUX);
        assert_eq!(DIM_MASS / DIM_TIME, DIM_MASS_FLUX);
        assert_eq!(DIM_MASS_FLUX / DIM_DENSITY, DIM_FLUX);
        assert_eq!(DIM_VELOCITY * DIM_AREA, DIM_FLUX);
    }

    #[test]
    fn courant_number_is_dimensionless() {
        let co = DIM_FLUX / DIM_VOLUME * DIM_TIME;
        assert!(co.is_dimensionless());
        assert_eq!(co, DIMLESS);
    }

    #[test]
    fn additive_rules() {
        assert_eq!(DIM_FLUX.additive(DIM_FLUX), Some(DIM_FLUX));
        assert_eq!(DIM_FLUX.additive(DIMLESS), Some(DIM_FLUX));
        assert_eq!(DIMLESS.additive(DIM_MASS_FLUX), Some(DIM_MASS_FLUX));
        assert_eq!(DIM_FLUX.additive(DIM_MASS_FLUX), None);
    }

    #[test]
    fn exponent_access() {
        assert_eq!(DIM_DENSITY.exponent(BaseDimension::Mass), 1);
        assert_eq!(DIM_DENSITY.exponent(BaseDimension::Length), -3);
        assert_eq!(DIM_DENSITY.exponent(BaseDimension::Time), 0);
    }

    #[test]
    fn display_matches_exponent_vector() {
        assert_eq!(DIM_DENSITY.to_string(), "[1 -3 0 0 0 0 0]");
        assert_eq!(DIMLESS.to_string(), "[0 0 0 0 0 0 0]");
    }
}
