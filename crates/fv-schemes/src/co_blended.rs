//! `CoBlended <Co1> <scheme1> <Co2> <scheme2> [<flux>]`: blending driven by
//! the face Courant number.

use fv_fields::{FieldValue, Shared, SurfaceField, VolField, read};
use tracing::debug;

use crate::blended::{CourantRange, SchemePair};
use crate::context::SchemeContext;
use crate::courant::{face_courant_number, volumetric_flux};
use crate::error::SchemeResult;
use crate::registry::SchemeArgs;
use crate::traits::{BlendedScheme, CourantField, InterpolationScheme};

pub struct CoBlended<T: FieldValue> {
    ctx: SchemeContext,
    range: CourantRange,
    schemes: SchemePair<T>,
    flux: Shared<SurfaceField<f64>>,
}

impl<T: FieldValue> CoBlended<T> {
    pub fn construct(mut args: SchemeArgs<'_, T>) -> SchemeResult<Box<dyn InterpolationScheme<T>>> {
        let location = args.stream.location();
        let co1 = args.stream.read_scalar("Co1")?;
        let scheme1 = args.sub_scheme()?;
        let co2 = args.stream.read_scalar("Co2")?;
        let scheme2 = args.sub_scheme()?;
        let range = CourantRange::validated(co1, co2, location)?;
        let flux = args.face_flux()?;
        debug!(co1, co2, scheme1 = scheme1.name(), scheme2 = scheme2.name(), "CoBlended");
        Ok(Box::new(Self {
            ctx: args.ctx.clone(),
            range,
            schemes: SchemePair::new(scheme1, scheme2),
            flux,
        }))
    }

    pub fn range(&self) -> CourantRange {
        self.range
    }

    /// Face Courant number of the current flux and time step.
    pub fn courant_number(&self) -> SchemeResult<SurfaceField<f64>> {
        let flux = read(&self.flux);
        let phi = volumetric_flux(&flux, &self.ctx)?;
        face_courant_number(&phi, self.ctx.mesh().time().delta_t_value())
    }
}

impl<T: FieldValue> InterpolationScheme<T> for CoBlended<T> {
    fn name(&self) -> &str {
        "CoBlended"
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
        self.schemes.correction(&self.blending_factor(vf)?, vf)
    }

    fn as_blended(&self) -> Option<&dyn BlendedScheme<T>> {
        Some(self)
    }
}

impl<T: FieldValue> BlendedScheme<T> for CoBlended<T> {
    fn blending_factor(&self, vf: &VolField<T>) -> SchemeResult<SurfaceField<f64>> {
        let co = self.courant_number()?;
        let bf = self
            .range
            .blending_factor(&co, format!("{}BlendingFactor", vf.name()));
        if let Some((min, max)) = bf.min_max() {
            debug!(field = vf.name(), min, max, "CoBlended blending factor");
        }
        Ok(bf)
    }

    fn blending_criterion(&self) -> SchemeResult<Option<CourantField>> {
        Ok(Some(CourantField::Face(self.courant_number()?)))
    }
}
