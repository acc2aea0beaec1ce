//! Geometric schemes: `linear` and `midPoint`.

use fv_fields::{FieldValue, SurfaceField, VolField};

use crate::error::SchemeResult;
use crate::interpolation::weights_field;
use crate::registry::SchemeArgs;
use crate::traits::InterpolationScheme;

/// Distance-weighted interpolation between the two cell centres.
#[derive(Debug, Clone, Copy, Default)]
pub struct Linear;

impl Linear {
    pub fn construct<T: FieldValue>(
        _args: SchemeArgs<'_, T>,
    ) -> SchemeResult<Box<dyn InterpolationScheme<T>>> {
        Ok(Box::new(Linear))
    }
}

impl<T: FieldValue> InterpolationScheme<T> for Linear {
    fn name(&self) -> &str {
        "linear"
    }

    fn weights(&self, vf: &VolField<T>) -> SchemeResult<SurfaceField<f64>> {
        let mesh = vf.mesh();
        weights_field(mesh, "linearWeights", mesh.linear_weights())
    }
}

/// Arithmetic mean of the two cell values, regardless of geometry.
#[derive(Debug, Clone, Copy, Default)]
pub struct MidPoint;

impl MidPoint {
    pub fn construct<T: FieldValue>(
        _args: SchemeArgs<'_, T>,
    ) -> SchemeResult<Box<dyn InterpolationScheme<T>>> {
        Ok(Box::new(MidPoint))
    }
}

impl<T: FieldValue> InterpolationScheme<T> for MidPoint {
    fn name(&self) -> &str {
        "midPoint"
    }

    fn weights(&self, vf: &VolField<T>) -> SchemeResult<SurfaceField<f64>> {
        let mesh = vf.mesh();
        let n_internal = mesh.n_internal_faces();
        let values = (0..mesh.n_faces())
            .map(|f| if f < n_internal { 0.5 } else { 1.0 })
            .collect();
        weights_field(mesh, "midPointWeights", values)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fv_core::{DIMLESS, Vector};
    use fv_fields::PatchKind;
    use fv_mesh::MeshBuilder;
    use std::sync::Arc;

    // Owner centre 0.25 from the face, neighbour centre 1.0 from it
    fn stretched() -> Arc<fv_mesh::Mesh> {
        let mut b = MeshBuilder::new();
        let c0 = b.add_cell(Vector::new(0.25, 0.5, 0.5), 0.5);
        let c1 = b.add_cell(Vector::new(1.5, 0.5, 0.5), 2.0);
        b.add_internal_face(c0, c1, Vector::new(0.5, 0.5, 0.5), Vector::x());
        let wall = b.add_patch("walls");
        b.add_boundary_face(wall, c0, Vector::new(0.0, 0.5, 0.5), -Vector::x());
        b.add_boundary_face(wall, c1, Vector::new(2.5, 0.5, 0.5), Vector::x());
        Arc::new(b.build().unwrap())
    }

    #[test]
    fn linear_interpolates_linear_profile_exactly() {
        let mesh = stretched();
        let vf = VolField::from_cell_centres("x", &mesh, DIMLESS, |c| 2.0 * c.x);
        let face = Linear.interpolate(&vf).unwrap();
        assert!((face.values()[0] - 1.0).abs() < 1e-12);
        // Boundary faces hold the boundary values
        assert_eq!(face.boundary(), &[0.0, 5.0]);
    }

    #[test]
    fn mid_point_ignores_geometry() {
        let mesh = stretched();
        let vf = VolField::from_values("T", &mesh, DIMLESS, vec![1.0, 3.0], PatchKind::ZeroGradient)
            .unwrap();
        let w = InterpolationScheme::<f64>::weights(&MidPoint, &vf).unwrap();
        assert_eq!(w.values(), &[0.5, 1.0, 1.0]);
        assert_eq!(MidPoint.interpolate(&vf).unwrap().values(), &[2.0, 1.0, 3.0]);
    }
}
