use crate::FvError;

/// Floating point type used throughout the toolbox
pub type Real = f64;

/// Three-component vector (positions, face area vectors, velocities).
pub type Vector = nalgebra::Vector3<Real>;

/// Second-rank tensor (gradients of vector fields).
pub type Tensor = nalgebra::Matrix3<Real>;

/// One tolerance for everything
#[derive(Clone, Copy, Debug)]
pub struct Tolerances {
    pub abs: Real,
    pub rel: Real,
}

impl Default for Tolerances {
    fn default() -> Self {
        Self {
            abs: 1e-12,
            rel: 1e-9,
        }
    }
}

pub fn nearly_equal(a: Real, b: Real, tol: Tolerances) -> bool {
    let diff = (a - b).abs();
    if diff <= tol.abs {
        return true;
    }
    diff <= tol.rel * a.abs().max(b.abs())
}

pub fn ensure_finite(v: Real, what: &'static str) -> Result<Real, FvError> {
    if v.is_finite() {
        Ok(v)
    } else {
        Err(FvError::NonFinite { what, value: v })
    }
}

/// Smallest magnitude treated as non-zero for geometric quantities.
pub const VSMALL: Real = 1e-300;
