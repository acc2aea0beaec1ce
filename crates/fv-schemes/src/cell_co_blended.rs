//! `cellCoBlended`: two schemes blended by the cell Courant number.
//!
//! ```text
//! cellCoBlended <Co1> <scheme1> <Co2> <scheme2> <flux>
//! ```
//!
//! The cell Courant number `Co = 0.5 * dt * Σ|phi| / V` is carried to the
//! faces with the `interpolate(Co)` entry of the schemes dictionary and
//! mapped to a blending factor
//!
//! ```text
//! bf = 1 - clamp((Co_f - Co1) / (Co2 - Co1), 0, 1)
//! ```
//!
//! so `scheme1` is used where `Co_f <= Co1`, `scheme2` where `Co_f >= Co2`,
//! with a linear ramp in between. Mass fluxes are converted with the
//! interpolated density before the Courant number is formed.
//!
//! Nothing is cached: every call recomputes the factor from the current flux
//! and time step.

use fv_fields::{FieldValue, Shared, SurfaceField, VolField, read};
use tracing::debug;

use crate::blended::{CourantRange, SchemePair};
use crate::context::SchemeContext;
use crate::courant::{COURANT_INTERPOLATION_KEY, cell_courant_number, volumetric_flux};
use crate::error::SchemeResult;
use crate::registry::SchemeArgs;
use crate::traits::{BlendedScheme, CourantField, InterpolationScheme};

pub struct CellCoBlended<T: FieldValue> {
    ctx: SchemeContext,
    range: CourantRange,
    schemes: SchemePair<T>,
    flux: Shared<SurfaceField<f64>>,
    co_interpolation: Box<dyn InterpolationScheme<f64>>,
}

impl<T: FieldValue> CellCoBlended<T> {
    /// Assemble from already constructed parts, resolving `interpolate(Co)`
    /// from the context's schemes dictionary.
    pub fn from_parts(
        ctx: &SchemeContext,
        range: CourantRange,
        schemes: SchemePair<T>,
        flux: Shared<SurfaceField<f64>>,
    ) -> SchemeResult<Self> {
        let co_interpolation = ctx.scalar_interpolation_scheme(COURANT_INTERPOLATION_KEY)?;
        debug!(
            co1 = range.co1(),
            co2 = range.co2(),
            scheme1 = schemes.scheme1().name(),
            scheme2 = schemes.scheme2().name(),
            co_interpolation = co_interpolation.name(),
            "cellCoBlended"
        );
        Ok(Self {
            ctx: ctx.clone(),
            range,
            schemes,
            flux,
            co_interpolation,
        })
    }

    pub fn construct(mut args: SchemeArgs<'_, T>) -> SchemeResult<Box<dyn InterpolationScheme<T>>> {
        let location = args.stream.location();
        let co1 = args.stream.read_scalar("Co1")?;
        let scheme1 = args.sub_scheme()?;
        let co2 = args.stream.read_scalar("Co2")?;
        let scheme2 = args.sub_scheme()?;
        let range = CourantRange::validated(co1, co2, location)?;
        let flux = args.face_flux()?;
        Ok(Box::new(Self::from_parts(
            args.ctx,
            range,
            SchemePair::new(scheme1, scheme2),
            flux,
        )?))
    }

    pub fn range(&self) -> CourantRange {
        self.range
    }

    pub fn schemes(&self) -> &SchemePair<T> {
        &self.schemes
    }

    pub fn flux(&self) -> &Shared<SurfaceField<f64>> {
        &self.flux
    }

    /// Cell Courant number of the current flux and time step.
    pub fn courant_number(&self) -> SchemeResult<VolField<f64>> {
        let flux = read(&self.flux);
        let phi = volumetric_flux(&flux, &self.ctx)?;
        cell_courant_number(&phi, self.ctx.mesh().time().delta_t_value())
    }
}

impl<T: FieldValue> InterpolationScheme<T> for CellCoBlended<T> {
    fn name(&self) -> &str {
        "cellCoBlended"
    }

    fn weights(&self, vf: &VolField<T>) -> SchemeResult<SurfaceField<f64>> {
        self.schemes.weights(&self.blending_factor(vf)?, vf)
    }

    fn interpolate(&self, vf: &VolField<T>) -> SchemeResult<SurfaceField<T>> {
        self.schemes.interpolate(&self.blending_factor(vf)?, vf)
    }

    fn corrected(&self) -> bool {
        self.schemes.corrected()
    }

    fn correction(&self, vf: &VolField<T>) -> SchemeResult<Option<SurfaceField<T>>> {
        if !self.corrected() {
            return Ok(None);
        }
        self.schemes.correction(&self.blending_factor(vf)?, vf)
    }

    fn as_blended(&self) -> Option<&dyn BlendedScheme<T>> {
        Some(self)
    }
}

impl<T: FieldValue> BlendedScheme<T> for CellCoBlended<T> {
    fn blending_factor(&self, vf: &VolField<T>) -> SchemeResult<SurfaceField<f64>> {
        let co = self.courant_number()?;
        let co_face = self.co_interpolation.interpolate(&co)?;
        let bf = self
            .range
            .blending_factor(&co_face, format!("{}BlendingFactor", vf.name()));
        if let Some((min, max)) = bf.min_max() {
            debug!(field = vf.name(), min, max, "cellCoBlended blending factor");
        }
        Ok(bf)
    }

    fn blending_criterion(&self) -> SchemeResult<Option<CourantField>> {
        Ok(Some(CourantField::Cell(self.courant_number()?)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SchemesDict;
    use crate::linear::Linear;
    use crate::registry::SchemeRegistry;
    use crate::upwind::Upwind;
    use fv_core::{DIM_FLUX, DIMLESS, RunTime};
    use fv_fields::{FvMesh, PatchKind, shared};
    use fv_mesh::grid;
    use std::sync::Arc;

    fn context() -> SchemeContext {
        let time = Arc::new(RunTime::from_seconds(0.1).unwrap());
        let mesh = Arc::new(FvMesh::new(grid(2, 1, 2.0, 1.0, 1.0).unwrap(), time));
        SchemeContext::new(mesh, Arc::new(SchemesDict::standard()))
    }

    fn flux(ctx: &SchemeContext, value: f64) -> Shared<SurfaceField<f64>> {
        let geometry = ctx.geometry();
        let mut values = vec![0.0; geometry.n_faces()];
        values[0] = value;
        shared(SurfaceField::from_values("phi", geometry, DIM_FLUX, values).unwrap())
    }

    #[test]
    fn factor_follows_flux_and_time_step() {
        let ctx = context();
        let phi = flux(&ctx, 4.0);
        let scheme = CellCoBlended::<f64>::from_parts(
            &ctx,
            CourantRange::new(0.1, 1.0).unwrap(),
            SchemePair::new(Box::new(Linear), Box::new(Upwind::new(Arc::clone(&phi)))),
            Arc::clone(&phi),
        )
        .unwrap();
        let vf = VolField::uniform("T", ctx.geometry(), DIMLESS, 1.0, PatchKind::ZeroGradient);

        // Co = 0.5 * 0.1 * 4 / 1 = 0.2 in both cells
        let bf = scheme.blending_factor(&vf).unwrap();
        let expected = 1.0 - 0.1 / 0.9;
        assert!((bf.internal()[0] - expected).abs() < 1e-12);

        // Doubling the time step doubles Co
        ctx.mesh()
            .time()
            .set_delta_t(fv_core::units::s(0.2))
            .unwrap();
        let bf = scheme.blending_factor(&vf).unwrap();
        assert!((bf.internal()[0] - (1.0 - 0.3 / 0.9)).abs() < 1e-12);

        // And so does the flux
        fv_fields::write(&phi).values_mut()[0] = 100.0;
        let bf = scheme.blending_factor(&vf).unwrap();
        assert_eq!(bf.internal()[0], 0.0);
    }

    #[test]
    fn construction_reads_tokens_in_order() {
        let ctx = context();
        let registry = SchemeRegistry::<f64>::standard();
        let phi = flux(&ctx, 1.0);
        ctx.mesh().registry().register_shared("phi", Arc::clone(&phi));

        let scheme = registry
            .resolve_str(&ctx, "div(phi,T)", "cellCoBlended 1 linear 10 upwind phi phi")
            .unwrap();
        assert_eq!(scheme.name(), "cellCoBlended");
        assert!(scheme.as_blended().is_some());

        let mut stream = crate::stream::SchemeStream::new("div(phi,T)", "cellCoBlended 1 linear 10 upwind");
        let scheme = registry
            .resolve_with_flux(&ctx, phi, &mut stream)
            .unwrap();
        assert_eq!(scheme.name(), "cellCoBlended");
        assert!(stream.is_exhausted());
    }

    #[test]
    fn criterion_is_the_cell_courant_number() {
        let ctx = context();
        let phi = flux(&ctx, 4.0);
        let mut stream = crate::stream::SchemeStream::new("div(phi,T)", "cellCoBlended 0.1 linear 1 upwind");
        let scheme = SchemeRegistry::<f64>::standard()
            .resolve_with_flux(&ctx, phi, &mut stream)
            .unwrap();

        match scheme.as_blended().unwrap().blending_criterion().unwrap() {
            Some(CourantField::Cell(co)) => {
                assert_eq!(co.name(), "Co");
                assert!(co.internal().iter().all(|&c| (c - 0.2).abs() < 1e-12));
            }
            other => panic!("expected a cell Courant number, got {other:?}"),
        }
    }
}
