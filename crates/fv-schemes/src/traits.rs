//! Core traits for interpolation schemes.

use fv_fields::{FieldValue, SurfaceField, VolField};

use crate::error::SchemeResult;
use crate::interpolation::interpolate_with_weights;

/// Cell-to-face interpolation of fields holding `T` values.
///
/// Schemes are built once from configuration and are immutable afterwards.
/// Every evaluation recomputes from the fields it is given (and from any
/// shared fields it holds, such as the face flux), so the same scheme can be
/// used across time steps while the flux and time step change.
pub trait InterpolationScheme<T: FieldValue>: Send + Sync {
    /// Registered type name, e.g. `linear` or `cellCoBlended`.
    fn name(&self) -> &str;

    /// Owner-cell weights `w` such that `vf_f = w * vf_P + (1 - w) * vf_N`.
    ///
    /// Boundary faces carry weight 1 (the boundary value is used as is).
    fn weights(&self, vf: &VolField<T>) -> SchemeResult<SurfaceField<f64>>;

    /// Whether the scheme adds an explicit correction on top of the
    /// weighted interpolation.
    fn corrected(&self) -> bool {
        false
    }

    /// Explicit correction, `None` when the scheme has none.
    ///
    /// `None` means "skip the correction", not "the correction is zero".
    fn correction(&self, _vf: &VolField<T>) -> SchemeResult<Option<SurfaceField<T>>> {
        Ok(None)
    }

    /// Interpolated face field: weighted interpolation plus correction.
    fn interpolate(&self, vf: &VolField<T>) -> SchemeResult<SurfaceField<T>> {
        let weights = self.weights(vf)?;
        let face = interpolate_with_weights(vf, &weights)?;
        if !self.corrected() {
            return Ok(face);
        }
        match self.correction(vf)? {
            Some(correction) => Ok(face.checked_add(&correction)?.renamed(face_name(vf))),
            None => Ok(face),
        }
    }

    /// Blending capability, if this scheme combines two others.
    fn as_blended(&self) -> Option<&dyn BlendedScheme<T>> {
        None
    }
}

/// Schemes that mix two sub-schemes with a per-face factor in `[0, 1]`.
///
/// The factor weighs the first sub-scheme; `1 - factor` weighs the second.
pub trait BlendedScheme<T: FieldValue>: InterpolationScheme<T> {
    fn blending_factor(&self, vf: &VolField<T>) -> SchemeResult<SurfaceField<f64>>;

    /// Courant number the factor is derived from, at the current time step.
    /// `None` for factors that do not depend on the flow.
    fn blending_criterion(&self) -> SchemeResult<Option<CourantField>> {
        Ok(None)
    }
}

/// Courant number evaluated in cells or on faces.
#[derive(Debug, Clone)]
pub enum CourantField {
    Cell(VolField<f64>),
    Face(SurfaceField<f64>),
}

pub(crate) fn face_name<T: FieldValue>(vf: &VolField<T>) -> String {
    format!("interpolate({})", vf.name())
}
