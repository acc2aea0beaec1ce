//! Value types that can be stored in fields.

use std::fmt::Debug;
use std::ops::{Add, Mul, Sub};

use fv_core::{Real, Tensor, Vector};

/// Arithmetic needed by field containers and interpolation.
pub trait FieldValue:
    Copy
    + Debug
    + PartialEq
    + Send
    + Sync
    + 'static
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Real, Output = Self>
{
    /// Short type tag used in diagnostics ("scalar", "vector", "tensor").
    const TYPE_NAME: &'static str;

    fn zero() -> Self;

    /// Magnitude (absolute value, Euclidean or Frobenius norm).
    fn mag(&self) -> Real;

    /// Component-wise maximum.
    fn cmpt_max(&self, other: &Self) -> Self;

    /// Component-wise minimum.
    fn cmpt_min(&self, other: &Self) -> Self;

    fn is_finite(&self) -> bool;

    /// Flat components, for serialisation.
    fn components(&self) -> Vec<Real>;
}

/// Values with a gradient type, needed by gradient-corrected schemes.
pub trait Interpolable: FieldValue {
    type Grad: FieldValue;

    /// `sf ⊗ v`, the face contribution to a Gauss gradient.
    fn outer_product(sf: &Vector, v: &Self) -> Self::Grad;

    /// `d · g`, projection of a gradient along a displacement.
    fn dot_grad(d: &Vector, g: &Self::Grad) -> Self;
}

impl FieldValue for Real {
    const TYPE_NAME: &'static str = "scalar";

    fn zero() -> Self {
        0.0
    }

    fn mag(&self) -> Real {
        self.abs()
    }

    fn cmpt_max(&self, other: &Self) -> Self {
        self.max(*other)
    }

    fn cmpt_min(&self, other: &Self) -> Self {
        self.min(*other)
    }

    fn is_finite(&self) -> bool {
        Real::is_finite(*self)
    }

    fn components(&self) -> Vec<Real> {
        vec![*self]
    }
}

impl FieldValue for Vector {
    const TYPE_NAME: &'static str = "vector";

    fn zero() -> Self {
        Vector::zeros()
    }

    fn mag(&self) -> Real {
        self.norm()
    }

    fn cmpt_max(&self, other: &Self) -> Self {
        self.sup(other)
    }

    fn cmpt_min(&self, other: &Self) -> Self {
        self.inf(other)
    }

    fn is_finite(&self) -> bool {
        self.iter().all(|c| c.is_finite())
    }

    fn components(&self) -> Vec<Real> {
        self.iter().copied().collect()
    }
}

impl FieldValue for Tensor {
    const TYPE_NAME: &'static str = "tensor";

    fn zero() -> Self {
        Tensor::zeros()
    }

    fn mag(&self) -> Real {
        self.norm()
    }

    fn cmpt_max(&self, other: &Self) -> Self {
        self.sup(other)
    }

    fn cmpt_min(&self, other: &Self) -> Self {
        self.inf(other)
    }

    fn is_finite(&self) -> bool {
        self.iter().all(|c| c.is_finite())
    }

    // Row-major, xx xy xz yx ...
    fn components(&self) -> Vec<Real> {
        self.transpose().iter().copied().collect()
    }
}

impl Interpolable for Real {
    type Grad = Vector;

    fn outer_product(sf: &Vector, v: &Self) -> Vector {
        sf * *v
    }

    fn dot_grad(d: &Vector, g: &Vector) -> Self {
        d.dot(g)
    }
}

impl Interpolable for Vector {
    type Grad = Tensor;

    // grad(U)_ij = d_i U_j
    fn outer_product(sf: &Vector, v: &Self) -> Tensor {
        sf * v.transpose()
    }

    fn dot_grad(d: &Vector, g: &Tensor) -> Self {
        g.transpose() * d
    }
}
