//! `fixedBlended <factor> <scheme1> <scheme2>`: a constant blending factor.

use fv_core::DIMLESS;
use fv_fields::{FieldValue, SurfaceField, VolField};
use tracing::debug;

use crate::blended::SchemePair;
use crate::error::{SchemeError, SchemeResult};
use crate::registry::SchemeArgs;
use crate::traits::{BlendedScheme, InterpolationScheme};

pub struct FixedBlended<T: FieldValue> {
    factor: f64,
    schemes: SchemePair<T>,
}

impl<T: FieldValue> FixedBlended<T> {
    pub fn new(factor: f64, schemes: SchemePair<T>) -> Option<Self> {
        (0.0..=1.0).contains(&factor).then_some(Self { factor, schemes })
    }

    pub fn construct(mut args: SchemeArgs<'_, T>) -> SchemeResult<Box<dyn InterpolationScheme<T>>> {
        let location = args.stream.location();
        let factor = args.stream.read_scalar("blending factor")?;
        if !(0.0..=1.0).contains(&factor) {
            return Err(SchemeError::Configuration {
                message: format!("blending factor {factor} outside [0, 1]"),
                location,
            });
        }
        let scheme1 = args.sub_scheme()?;
        let scheme2 = args.sub_scheme()?;
        debug!(factor, scheme1 = scheme1.name(), scheme2 = scheme2.name(), "fixedBlended");
        Ok(Box::new(Self {
            factor,
            schemes: SchemePair::new(scheme1, scheme2),
        }))
    }

    pub fn factor(&self) -> f64 {
        self.factor
    }

    pub fn schemes(&self) -> &SchemePair<T> {
        &self.schemes
    }
}

impl<T: FieldValue> InterpolationScheme<T> for FixedBlended<T> {
    fn name(&self) -> &str {
        "fixedBlended"
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

impl<T: FieldValue> BlendedScheme<T> for FixedBlended<T> {
    fn blending_factor(&self, vf: &VolField<T>) -> SchemeResult<SurfaceField<f64>> {
        Ok(SurfaceField::uniform(
            format!("{}BlendingFactor", vf.name()),
            vf.mesh(),
            DIMLESS,
            self.factor,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::linear::{Linear, MidPoint};
    use fv_fields::PatchKind;
    use fv_mesh::grid;
    use std::sync::Arc;

    #[test]
    fn factor_range_enforced() {
        let pair = || SchemePair::<f64>::new(Box::new(Linear), Box::new(MidPoint));
        assert!(FixedBlended::new(0.0, pair()).is_some());
        assert!(FixedBlended::new(1.0, pair()).is_some());
        assert!(FixedBlended::new(1.5, pair()).is_none());
        assert!(FixedBlended::new(-0.5, pair()).is_none());
    }

    #[test]
    fn uniform_factor_reported_as_blended() {
        let mesh = Arc::new(grid(3, 1, 3.0, 1.0, 1.0).unwrap());
        let scheme = FixedBlended::new(0.3, SchemePair::<f64>::new(Box::new(Linear), Box::new(MidPoint)))
            .unwrap();
        let vf = VolField::uniform("T", &mesh, DIMLESS, 4.0, PatchKind::ZeroGradient);

        let blended = scheme.as_blended().unwrap();
        let bf = blended.blending_factor(&vf).unwrap();
        assert!(bf.values().iter().all(|&v| v == 0.3));
        assert_eq!(bf.name(), "TBlendingFactor");
        assert!(blended.blending_criterion().unwrap().is_none());

        let face = scheme.interpolate(&vf).unwrap();
        assert!(face.values().iter().all(|&v| (v - 4.0).abs() < 1e-12));
        assert!(!scheme.corrected());
        assert!(scheme.correction(&vf).unwrap().is_none());
    }
}
