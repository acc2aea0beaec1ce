//! Gauss gradient: `grad(vf)_P = (1/V_P) Σ_f Sf ⊗ vf_f`.

use fv_core::{CellId, DIM_LENGTH};
use fv_fields::{FieldValue, Interpolable, PatchKind, VolField};

use crate::context::SchemeContext;
use crate::error::SchemeResult;
use crate::registry::SchemeRegistry;
use crate::stream::SchemeStream;
use crate::traits::InterpolationScheme;

/// Gradient from face values given by an interpolation scheme.
pub struct GaussGradient<T: Interpolable> {
    interpolation: Box<dyn InterpolationScheme<T>>,
}

impl<T: Interpolable> GaussGradient<T> {
    pub fn new(interpolation: Box<dyn InterpolationScheme<T>>) -> Self {
        Self { interpolation }
    }

    /// Build from `Gauss <interpolation-spec>`.
    pub fn from_stream(
        ctx: &SchemeContext,
        registry: &SchemeRegistry<T>,
        stream: &mut SchemeStream,
    ) -> SchemeResult<Self> {
        let location = stream.location();
        let kind = stream.read_word("gradient scheme")?;
        if kind != "Gauss" {
            return Err(crate::error::SchemeError::Configuration {
                message: format!("unknown gradient scheme '{kind}'; valid schemes are: Gauss"),
                location,
            });
        }
        Ok(Self::new(registry.resolve(ctx, stream)?))
    }

    pub fn interpolation(&self) -> &dyn InterpolationScheme<T> {
        self.interpolation.as_ref()
    }

    pub fn grad(&self, vf: &VolField<T>) -> SchemeResult<VolField<T::Grad>> {
        let face = self.interpolation.interpolate(vf)?;
        let mesh = vf.mesh();
        let owner = mesh.owner();
        let sf = mesh.face_areas();
        let values = face.values();

        let grads = (0..mesh.n_cells())
            .map(|cell| {
                let sum = mesh
                    .cell_faces(CellId::from_index(cell as u32))
                    .iter()
                    .fold(<T::Grad as FieldValue>::zero(), |acc, &f| {
                        let contribution = T::outer_product(&sf[f], &values[f]);
                        if owner[f] == cell {
                            acc + contribution
                        } else {
                            acc - contribution
                        }
                    });
                sum * (1.0 / mesh.cell_volumes()[cell])
            })
            .collect();

        Ok(VolField::from_values(
            format!("grad({})", vf.name()),
            mesh,
            vf.dimensions() / DIM_LENGTH,
            grads,
            PatchKind::ZeroGradient,
        )?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::linear::Linear;
    use fv_core::{DIMLESS, Vector};
    use fv_mesh::grid;
    use std::sync::Arc;

    #[test]
    fn linear_field_has_exact_interior_gradient() {
        let mesh = Arc::new(grid(4, 4, 1.0, 1.0, 1.0).unwrap());
        let vf = VolField::from_cell_centres("T", &mesh, DIMLESS, |c| 2.0 * c.x + 3.0 * c.y);
        let grad = GaussGradient::<f64>::new(Box::new(Linear)).grad(&vf).unwrap();

        // Interior cell (1, 1)
        let g = grad.internal()[1 + 4];
        assert!((g - Vector::new(2.0, 3.0, 0.0)).norm() < 1e-10);
        assert_eq!(grad.name(), "grad(T)");
        assert_eq!(grad.dimensions(), DIMLESS / DIM_LENGTH);
    }

    #[test]
    fn vector_gradient_layout() {
        let mesh = Arc::new(grid(3, 3, 3.0, 3.0, 1.0).unwrap());
        // U = (x, 2x, 0)
        let vf = VolField::from_cell_centres("U", &mesh, DIMLESS, |c| Vector::new(c.x, 2.0 * c.x, 0.0));
        let grad = GaussGradient::<Vector>::new(Box::new(Linear)).grad(&vf).unwrap();
        let g = grad.internal()[4];
        assert!((g[(0, 0)] - 1.0).abs() < 1e-10);
        assert!((g[(0, 1)] - 2.0).abs() < 1e-10);
        assert!(g[(1, 0)].abs() < 1e-10);
    }
}
