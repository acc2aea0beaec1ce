//! Courant numbers from a face flux, the blending criterion of the
//! Courant-blended schemes.

use std::borrow::Cow;

use fv_core::{DIM_FLUX, DIM_MASS_FLUX, DIMLESS};
use fv_fields::fvc::surface_sum;
use fv_fields::{PatchKind, SurfaceField, VolField, read};
use tracing::trace;

use crate::context::SchemeContext;
use crate::error::{SchemeError, SchemeResult};

/// Interpolation entry used to carry the cell Courant number to faces.
pub const COURANT_INTERPOLATION_KEY: &str = "interpolate(Co)";

/// Interpolation entry used to carry the density to faces.
pub const DENSITY_INTERPOLATION_KEY: &str = "interpolate(rho)";

/// The flux in volumetric units.
///
/// A volumetric flux is returned as is. A mass flux is divided face by face
/// by the interpolated density. Any other dimensions are rejected.
pub fn volumetric_flux<'a>(
    phi: &'a SurfaceField<f64>,
    ctx: &SchemeContext,
) -> SchemeResult<Cow<'a, SurfaceField<f64>>> {
    let dimensions = phi.dimensions();
    if dimensions == DIM_FLUX {
        return Ok(Cow::Borrowed(phi));
    }
    if dimensions != DIM_MASS_FLUX {
        return Err(SchemeError::DimensionalConsistency {
            what: format!("face flux '{}'", phi.name()),
            dimensions,
        });
    }

    let rho = ctx.density()?;
    let rho = read(&rho);
    trace!(flux = phi.name(), density = rho.name(), "converting mass flux");
    let rho_f = ctx
        .scalar_interpolation_scheme(DENSITY_INTERPOLATION_KEY)?
        .interpolate(&rho)?;
    let volumetric = phi.divide_by(&rho_f)?;
    if volumetric.dimensions() != DIM_FLUX {
        return Err(SchemeError::DimensionalConsistency {
            what: format!("'{}' divided by density '{}'", phi.name(), rho.name()),
            dimensions: volumetric.dimensions(),
        });
    }
    Ok(Cow::Owned(volumetric))
}

/// Cell Courant number `0.5 * dt * Σ|phi| / V`.
///
/// The sum runs over every face of the cell, so each through-flow is counted
/// on the way in and on the way out; the factor 0.5 compensates.
pub fn cell_courant_number(phi: &SurfaceField<f64>, delta_t: f64) -> SchemeResult<VolField<f64>> {
    let mesh = phi.mesh();
    let sum_phi = surface_sum(&phi.mag())?;
    let values = sum_phi
        .internal()
        .iter()
        .zip(mesh.cell_volumes())
        .map(|(&sum, &volume)| (sum / volume) * 0.5 * delta_t)
        .collect();
    Ok(VolField::from_values(
        "Co",
        mesh,
        DIMLESS,
        values,
        PatchKind::ExtrapolatedCalculated,
    )?)
}

/// Face Courant number `dt * deltaCoeff * |phi| / |Sf|`.
pub fn face_courant_number(phi: &SurfaceField<f64>, delta_t: f64) -> SchemeResult<SurfaceField<f64>> {
    let mesh = phi.mesh();
    let delta_coeffs = mesh.delta_coeffs();
    let mag_sf = mesh.face_area_magnitudes();
    let values = phi
        .values()
        .iter()
        .zip(delta_coeffs.iter().zip(&mag_sf))
        .map(|(&flux, (&dc, &area))| delta_t * dc * flux.abs() / area)
        .collect();
    Ok(SurfaceField::from_values("Cof", mesh, DIMLESS, values)?)
}
