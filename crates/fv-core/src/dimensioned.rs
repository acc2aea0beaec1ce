//! Values tagged with a name and physical dimensions.

use core::ops::{Add, Mul, Sub};

use crate::dimensions::DimensionSet;
use crate::error::{FvError, FvResult};

/// A named value carrying a [`DimensionSet`].
///
/// Values are immutable; arithmetic returns new instances.
#[derive(Clone, Debug, PartialEq)]
pub struct Dimensioned<T> {
    name: String,
    dimensions: DimensionSet,
    value: T,
}

pub type DimensionedScalar = Dimensioned<f64>;

impl<T> Dimensioned<T> {
    pub fn new(name: impl Into<String>, dimensions: DimensionSet, value: T) -> Self {
        Self {
            name: name.into(),
            dimensions,
            value,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn dimensions(&self) -> DimensionSet {
        self.dimensions
    }

    pub fn value(&self) -> &T {
        &self.value
    }

    pub fn into_value(self) -> T {
        self.value
    }

    pub fn renamed(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }
}

impl<T: Copy + Add<Output = T>> Dimensioned<T> {
    pub fn checked_add(&self, other: &Self) -> FvResult<Self> {
        let dimensions = combine(self.dimensions, other.dimensions, "addition")?;
        Ok(Self::new(
            format!("({} + {})", self.name, other.name),
            dimensions,
            self.value + other.value,
        ))
    }
}

impl<T: Copy + Sub<Output = T>> Dimensioned<T> {
    pub fn checked_sub(&self, other: &Self) -> FvResult<Self> {
        let dimensions = combine(self.dimensions, other.dimensions, "subtraction")?;
        Ok(Self::new(
            format!("({} - {})", self.name, other.name),
            dimensions,
            self.value - other.value,
        ))
    }
}

impl<T: Copy + Mul<f64, Output = T>> Dimensioned<T> {
    /// Scale by a dimensioned scalar; dimensions compose multiplicatively.
    pub fn scale(&self, factor: &DimensionedScalar) -> Self {
        Self::new(
            format!("({} * {})", factor.name, self.name),
            factor.dimensions * self.dimensions,
            self.value * factor.value,
        )
    }
}

impl DimensionedScalar {
    pub fn product(&self, other: &Self) -> Self {
        Self::new(
            format!("({} * {})", self.name, other.name),
            self.dimensions * other.dimensions,
            self.value * other.value,
        )
    }

    pub fn quotient(&self, other: &Self) -> Self {
        Self::new(
            format!("({} / {})", self.name, other.name),
            self.dimensions / other.dimensions,
            self.value / other.value,
        )
    }
}

fn combine(lhs: DimensionSet, rhs: DimensionSet, op: &'static str) -> FvResult<DimensionSet> {
    lhs.additive(rhs)
        .ok_or(FvError::DimensionMismatch { op, lhs, rhs })
}
