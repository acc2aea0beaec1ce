//! Shared helpers for weighted cell-to-face interpolation.

use std::sync::Arc;

use fv_core::DIMLESS;
use fv_fields::{FieldError, FieldValue, SurfaceField, VolField};
use fv_mesh::Mesh;

use crate::error::SchemeResult;
use crate::traits::face_name;

/// `w * vf_P + (1 - w) * vf_N` on internal faces, the boundary value on
/// boundary faces.
pub fn interpolate_with_weights<T: FieldValue>(
    vf: &VolField<T>,
    weights: &SurfaceField<f64>,
) -> SchemeResult<SurfaceField<T>> {
    let mesh = vf.mesh();
    if !Arc::ptr_eq(mesh, weights.mesh()) {
        return Err(FieldError::MeshMismatch { op: "interpolate" }.into());
    }

    let w = weights.values();
    let cells = vf.internal();
    let owner = mesh.owner();
    let neighbour = mesh.neighbour();

    let mut values = Vec::with_capacity(mesh.n_faces());
    for face in 0..mesh.n_internal_faces() {
        let own = cells[owner[face]];
        let nei = cells[neighbour[face]];
        values.push(own * w[face] + nei * (1.0 - w[face]));
    }
    values.extend_from_slice(vf.boundary());

    Ok(SurfaceField::from_values(
        face_name(vf),
        mesh,
        vf.dimensions(),
        values,
    )?)
}

/// Weights field built from per-face values.
pub fn weights_field(mesh: &Arc<Mesh>, name: &str, values: Vec<f64>) -> SchemeResult<SurfaceField<f64>> {
    Ok(SurfaceField::from_values(name, mesh, DIMLESS, values)?)
}

/// Apply `f(owner_value, neighbour_value)` on internal faces; boundary faces
/// take the boundary value.
pub fn face_combine<T: FieldValue>(
    vf: &VolField<T>,
    name: String,
    f: impl Fn(&T, &T) -> T,
) -> SchemeResult<SurfaceField<T>> {
    let mesh = vf.mesh();
    let cells = vf.internal();
    let owner = mesh.owner();
    let neighbour = mesh.neighbour();

    let mut values: Vec<T> = (0..mesh.n_internal_faces())
        .map(|face| f(&cells[owner[face]], &cells[neighbour[face]]))
        .collect();
    values.extend_from_slice(vf.boundary());

    Ok(SurfaceField::from_values(name, mesh, vf.dimensions(), values)?)
}
