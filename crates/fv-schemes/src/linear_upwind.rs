//! Gradient-corrected upwind schemes: `linearUpwind` and `LUST`.

use fv_fields::{FieldValue, Interpolable, Shared, SurfaceField, VolField, read};

use crate::error::SchemeResult;
use crate::gradient::GaussGradient;
use crate::interpolation::weights_field;
use crate::registry::SchemeArgs;
use crate::traits::InterpolationScheme;
use crate::upwind::upwind_weights;

/// Upwind weights plus the explicit correction `(Cf - C_U) · grad(vf)_U`,
/// where `U` is the upwind cell of each internal face.
pub struct LinearUpwind<T: Interpolable> {
    flux: Shared<SurfaceField<f64>>,
    gradient: GaussGradient<T>,
    grad_key: String,
}

impl<T: Interpolable> LinearUpwind<T> {
    pub fn new(flux: Shared<SurfaceField<f64>>, gradient: GaussGradient<T>, grad_key: impl Into<String>) -> Self {
        Self {
            flux,
            gradient,
            grad_key: grad_key.into(),
        }
    }

    /// `linearUpwind [<flux>] <gradSchemeKey>`.
    pub fn from_args(args: &mut SchemeArgs<'_, T>) -> SchemeResult<Self> {
        let flux = args.face_flux()?;
        let grad_key = args.stream.read_word("gradient scheme key")?;
        let gradient = args.ctx.gradient_scheme(args.registry, &grad_key)?;
        Ok(Self::new(flux, gradient, grad_key))
    }

    pub fn construct(mut args: SchemeArgs<'_, T>) -> SchemeResult<Box<dyn InterpolationScheme<T>>> {
        Ok(Box::new(Self::from_args(&mut args)?))
    }

    /// Key of the gradient scheme in `grad_schemes`.
    pub fn grad_key(&self) -> &str {
        &self.grad_key
    }

    fn explicit_correction(&self, vf: &VolField<T>) -> SchemeResult<SurfaceField<T>> {
        let grad = self.gradient.grad(vf)?;
        let flux = read(&self.flux);
        let phi = flux.values();
        let mesh = vf.mesh();
        let owner = mesh.owner();
        let neighbour = mesh.neighbour();
        let cf = mesh.face_centres();
        let cc = mesh.cell_centres();
        let g = grad.internal();

        let mut values = vec![<T as FieldValue>::zero(); mesh.n_faces()];
        for (face, value) in values.iter_mut().enumerate().take(mesh.n_internal_faces()) {
            let upwind = if phi[face] > 0.0 { owner[face] } else { neighbour[face] };
            *value = T::dot_grad(&(cf[face] - cc[upwind]), &g[upwind]);
        }

        Ok(SurfaceField::from_values(
            format!("linearUpwind::correction({})", vf.name()),
            mesh,
            vf.dimensions(),
            values,
        )?)
    }
}

impl<T: Interpolable> InterpolationScheme<T> for LinearUpwind<T> {
    fn name(&self) -> &str {
        "linearUpwind"
    }

    fn weights(&self, _vf: &VolField<T>) -> SchemeResult<SurfaceField<f64>> {
        upwind_weights(&read(&self.flux))
    }

    fn corrected(&self) -> bool {
        true
    }

    fn correction(&self, vf: &VolField<T>) -> SchemeResult<Option<SurfaceField<T>>> {
        Ok(Some(self.explicit_correction(vf)?))
    }
}

/// Linear-upwind stabilised transport: 75% linear, 25% linear-upwind.
pub struct Lust<T: Interpolable> {
    linear_upwind: LinearUpwind<T>,
}

impl<T: Interpolable> Lust<T> {
    pub fn construct(mut args: SchemeArgs<'_, T>) -> SchemeResult<Box<dyn InterpolationScheme<T>>> {
        Ok(Box::new(Self {
            linear_upwind: LinearUpwind::from_args(&mut args)?,
        }))
    }
}

impl<T: Interpolable> InterpolationScheme<T> for Lust<T> {
    fn name(&self) -> &str {
        "LUST"
    }

    fn weights(&self, vf: &VolField<T>) -> SchemeResult<SurfaceField<f64>> {
        let mesh = vf.mesh();
        let linear = mesh.linear_weights();
        let upwind = self.linear_upwind.weights(vf)?;
        let values = linear
            .iter()
            .zip(upwind.values())
            .map(|(&l, &u)| 0.75 * l + 0.25 * u)
            .collect();
        weights_field(mesh, "LUSTWeights", values)
    }

    fn corrected(&self) -> bool {
        true
    }

    fn correction(&self, vf: &VolField<T>) -> SchemeResult<Option<SurfaceField<T>>> {
        let correction = self.linear_upwind.explicit_correction(vf)?;
        let name = format!("LUST::correction({})", vf.name());
        Ok(Some(correction.map(name, vf.dimensions(), |c| c * 0.25)))
    }
}
