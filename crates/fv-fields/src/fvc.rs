//! Explicit finite-volume calculus: face-to-cell reductions.

use fv_core::{CellId, DIM_VOLUME};

use crate::boundary::PatchKind;
use crate::error::FieldResult;
use crate::par::map_indexed;
use crate::surface_field::SurfaceField;
use crate::value::FieldValue;
use crate::vol_field::VolField;

/// Sum of face values over the faces bounding each cell (boundary faces
/// included), without orientation.
///
/// Each cell gathers its own faces in ascending face order, so the result
/// does not depend on how the loop is scheduled.
pub fn surface_sum<T: FieldValue>(sf: &SurfaceField<T>) -> FieldResult<VolField<T>> {
    let mesh = sf.mesh();
    let values = sf.values();
    let sums = map_indexed(mesh.n_cells(), |cell| {
        mesh.cell_faces(CellId::from_index(cell as u32))
            .iter()
            .fold(T::zero(), |acc, &face| acc + values[face])
    });
    VolField::from_values(
        format!("surfaceSum({})", sf.name()),
        mesh,
        sf.dimensions(),
        sums,
        PatchKind::ExtrapolatedCalculated,
    )
}

/// Net outflow per unit volume: `(Σ_owner sf - Σ_neighbour sf) / V`.
pub fn surface_integrate<T: FieldValue>(sf: &SurfaceField<T>) -> FieldResult<VolField<T>> {
    let mesh = sf.mesh();
    let values = sf.values();
    let owner = mesh.owner();
    let volumes = mesh.cell_volumes();
    let integrals = map_indexed(mesh.n_cells(), |cell| {
        let net = mesh
            .cell_faces(CellId::from_index(cell as u32))
            .iter()
            .fold(T::zero(), |acc, &face| {
                if owner[face] == cell {
                    acc + values[face]
                } else {
                    acc - values[face]
                }
            });
        net * (1.0 / volumes[cell])
    });
    VolField::from_values(
        format!("surfaceIntegrate({})", sf.name()),
        mesh,
        sf.dimensions() / DIM_VOLUME,
        integrals,
        PatchKind::ExtrapolatedCalculated,
    )
}
