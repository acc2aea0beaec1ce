//! Machinery shared by the blended schemes: the Courant ramp and the
//! combination of two sub-schemes under a per-face blending factor.

use fv_core::DIMLESS;
use fv_fields::{FieldValue, SurfaceField, VolField};

use crate::error::{SchemeError, SchemeResult};
use crate::stream::StreamLocation;
use crate::traits::{InterpolationScheme, face_name};

/// Courant thresholds `0 <= co1 < co2` of a linear blending ramp.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CourantRange {
    co1: f64,
    co2: f64,
}

impl CourantRange {
    /// `None` unless `0 <= co1 < co2` with both finite.
    pub fn new(co1: f64, co2: f64) -> Option<Self> {
        let valid = co1.is_finite() && co2.is_finite() && co1 >= 0.0 && co2 >= 0.0 && co1 < co2;
        valid.then_some(Self { co1, co2 })
    }

    pub(crate) fn validated(co1: f64, co2: f64, location: StreamLocation) -> SchemeResult<Self> {
        Self::new(co1, co2).ok_or_else(|| SchemeError::Configuration {
            message: format!(
                "Courant limits must satisfy 0 <= Co1 < Co2; got Co1 = {co1} and Co2 = {co2}"
            ),
            location,
        })
    }

    pub fn co1(&self) -> f64 {
        self.co1
    }

    pub fn co2(&self) -> f64 {
        self.co2
    }

    /// `1 - clamp((co - co1) / (co2 - co1), 0, 1)`.
    pub fn factor(&self, co: f64) -> f64 {
        1.0 - ((co - self.co1) / (self.co2 - self.co1)).clamp(0.0, 1.0)
    }

    /// Face-by-face blending factor from a face Courant field.
    pub fn blending_factor(&self, co_face: &SurfaceField<f64>, name: impl Into<String>) -> SurfaceField<f64> {
        co_face.map(name, DIMLESS, |co| self.factor(co))
    }
}

/// Two sub-schemes combined as `bf * scheme1 + (1 - bf) * scheme2`.
pub struct SchemePair<T: FieldValue> {
    scheme1: Box<dyn InterpolationScheme<T>>,
    scheme2: Box<dyn InterpolationScheme<T>>,
}

impl<T: FieldValue> SchemePair<T> {
    pub fn new(scheme1: Box<dyn InterpolationScheme<T>>, scheme2: Box<dyn InterpolationScheme<T>>) -> Self {
        Self { scheme1, scheme2 }
    }

    pub fn scheme1(&self) -> &dyn InterpolationScheme<T> {
        self.scheme1.as_ref()
    }

    pub fn scheme2(&self) -> &dyn InterpolationScheme<T> {
        self.scheme2.as_ref()
    }

    pub fn corrected(&self) -> bool {
        self.scheme1.corrected() || self.scheme2.corrected()
    }

    pub fn weights(&self, bf: &SurfaceField<f64>, vf: &VolField<T>) -> SchemeResult<SurfaceField<f64>> {
        let w1 = self.scheme1.weights(vf)?;
        let w2 = self.scheme2.weights(vf)?;
        Ok(SurfaceField::blend(bf, &w1, &w2)?.renamed("blendedWeights"))
    }

    pub fn interpolate(&self, bf: &SurfaceField<f64>, vf: &VolField<T>) -> SchemeResult<SurfaceField<T>> {
        let f1 = self.scheme1.interpolate(vf)?;
        let f2 = self.scheme2.interpolate(vf)?;
        Ok(SurfaceField::blend(bf, &f1, &f2)?.renamed(face_name(vf)))
    }

    /// The blended correction, absent when neither sub-scheme is corrected.
    pub fn correction(&self, bf: &SurfaceField<f64>, vf: &VolField<T>) -> SchemeResult<Option<SurfaceField<T>>> {
        let c1 = self.sub_correction(self.scheme1.as_ref(), vf)?;
        let c2 = self.sub_correction(self.scheme2.as_ref(), vf)?;
        let name = format!("blendedCorrection({})", vf.name());
        let blended = match (c1, c2) {
            (None, None) => return Ok(None),
            (Some(c1), None) => c1.scaled(bf)?,
            (None, Some(c2)) => c2.complement_scaled(bf)?,
            (Some(c1), Some(c2)) => SurfaceField::blend(bf, &c1, &c2)?,
        };
        Ok(Some(blended.renamed(name)))
    }

    fn sub_correction(
        &self,
        scheme: &dyn InterpolationScheme<T>,
        vf: &VolField<T>,
    ) -> SchemeResult<Option<SurfaceField<T>>> {
        if scheme.corrected() {
            scheme.correction(vf)
        } else {
            Ok(None)
        }
    }
}
