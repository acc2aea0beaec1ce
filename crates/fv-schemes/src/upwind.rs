//! Flux-direction schemes: `upwind` and `downwind`.

use std::fmt;

use fv_fields::{FieldValue, Shared, SurfaceField, VolField, read};

use crate::error::SchemeResult;
use crate::interpolation::weights_field;
use crate::registry::SchemeArgs;
use crate::traits::InterpolationScheme;

/// 1 where the flux leaves the owner cell (or is zero), else 0.
pub(crate) fn pos0(phi: f64) -> f64 {
    if phi >= 0.0 { 1.0 } else { 0.0 }
}

/// Upwind weights from a face flux: `pos0(phi)` on internal faces, 1 on
/// boundary faces.
pub(crate) fn upwind_weights(flux: &SurfaceField<f64>) -> SchemeResult<SurfaceField<f64>> {
    let mesh = flux.mesh();
    let n_internal = mesh.n_internal_faces();
    let values = flux
        .values()
        .iter()
        .enumerate()
        .map(|(f, &phi)| if f < n_internal { pos0(phi) } else { 1.0 })
        .collect();
    weights_field(mesh, "upwindWeights", values)
}

/// Takes the value of the upstream cell.
pub struct Upwind {
    flux: Shared<SurfaceField<f64>>,
}

impl Upwind {
    pub fn new(flux: Shared<SurfaceField<f64>>) -> Self {
        Self { flux }
    }

    pub fn construct<T: FieldValue>(
        mut args: SchemeArgs<'_, T>,
    ) -> SchemeResult<Box<dyn InterpolationScheme<T>>> {
        Ok(Box::new(Self::new(args.face_flux()?)))
    }
}

impl fmt::Debug for Upwind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Upwind({})", read(&self.flux).name())
    }
}

impl<T: FieldValue> InterpolationScheme<T> for Upwind {
    fn name(&self) -> &str {
        "upwind"
    }

    fn weights(&self, _vf: &VolField<T>) -> SchemeResult<SurfaceField<f64>> {
        upwind_weights(&read(&self.flux))
    }
}

/// Takes the value of the downstream cell. Unstable on its own; useful for
/// testing and as a blending partner.
pub struct Downwind {
    flux: Shared<SurfaceField<f64>>,
}

impl Downwind {
    pub fn new(flux: Shared<SurfaceField<f64>>) -> Self {
        Self { flux }
    }

    pub fn construct<T: FieldValue>(
        mut args: SchemeArgs<'_, T>,
    ) -> SchemeResult<Box<dyn InterpolationScheme<T>>> {
        Ok(Box::new(Self::new(args.face_flux()?)))
    }
}

impl<T: FieldValue> InterpolationScheme<T> for Downwind {
    fn name(&self) -> &str {
        "downwind"
    }

    fn weights(&self, _vf: &VolField<T>) -> SchemeResult<SurfaceField<f64>> {
        let flux = read(&self.flux);
        let mesh = flux.mesh();
        let n_internal = mesh.n_internal_faces();
        let values = flux
            .values()
            .iter()
            .enumerate()
            .map(|(f, &phi)| if f < n_internal { 1.0 - pos0(phi) } else { 1.0 })
            .collect();
        weights_field(mesh, "downwindWeights", values)
    }
}
