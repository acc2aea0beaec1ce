//! `localMax` and `localMin`: the larger/smaller of the two adjacent cell values.
//!
//! These have no weights form; only `interpolate` is available.

use fv_fields::{FieldValue, SurfaceField, VolField};

use crate::error::{SchemeError, SchemeResult};
use crate::interpolation::face_combine;
use crate::registry::SchemeArgs;
use crate::traits::{InterpolationScheme, face_name};

#[derive(Debug, Clone, Copy, Default)]
pub struct LocalMax;

impl LocalMax {
    pub fn construct<T: FieldValue>(
        _args: SchemeArgs<'_, T>,
    ) -> SchemeResult<Box<dyn InterpolationScheme<T>>> {
        Ok(Box::new(LocalMax))
    }
}

impl<T: FieldValue> InterpolationScheme<T> for LocalMax {
    fn name(&self) -> &str {
        "localMax"
    }

    fn weights(&self, _vf: &VolField<T>) -> SchemeResult<SurfaceField<f64>> {
        Err(SchemeError::NotSupported {
            scheme: "localMax".into(),
            operation: "weights",
        })
    }

    fn interpolate(&self, vf: &VolField<T>) -> SchemeResult<SurfaceField<T>> {
        face_combine(vf, face_name(vf), |own, nei| own.cmpt_max(nei))
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct LocalMin;

impl LocalMin {
    pub fn construct<T: FieldValue>(
        _args: SchemeArgs<'_, T>,
    ) -> SchemeResult<Box<dyn InterpolationScheme<T>>> {
        Ok(Box::new(LocalMin))
    }
}

impl<T: FieldValue> InterpolationScheme<T> for LocalMin {
    fn name(&self) -> &str {
        "localMin"
    }

    fn weights(&self, _vf: &VolField<T>) -> SchemeResult<SurfaceField<f64>> {
        Err(SchemeError::NotSupported {
            scheme: "localMin".into(),
            operation: "weights",
        })
    }

    fn interpolate(&self, vf: &VolField<T>) -> SchemeResult<SurfaceField<T>> {
        face_combine(vf, face_name(vf), |own, nei| own.cmpt_min(nei))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fv_core::{DIMLESS, Vector};
    use fv_fields::PatchKind;
    use fv_mesh::grid;
    use std::sync::Arc;

    #[test]
    fn local_extrema() {
        let mesh = Arc::new(grid(3, 1, 3.0, 1.0, 1.0).unwrap());
        let vf = VolField::from_values("Co", &mesh, DIMLESS, vec![0.2, 0.8, 0.5], PatchKind::ExtrapolatedCalculated)
            .unwrap();

        let max = LocalMax.interpolate(&vf).unwrap();
        assert_eq!(max.internal(), &[0.8, 0.8]);
        let min = LocalMin.interpolate(&vf).unwrap();
        assert_eq!(min.internal(), &[0.2, 0.5]);
        assert_eq!(max.boundary(), vf.boundary());

        assert!(matches!(
            InterpolationScheme::<f64>::weights(&LocalMax, &vf),
            Err(SchemeError::NotSupported { .. })
        ));
    }

    #[test]
    fn vector_extrema_are_componentwise() {
        let mesh = Arc::new(grid(2, 1, 2.0, 1.0, 1.0).unwrap());
        let vf = VolField::from_values(
            "U",
            &mesh,
            DIMLESS,
            vec![Vector::new(1.0, -1.0, 0.0), Vector::new(-2.0, 3.0, 0.0)],
            PatchKind::ZeroGradient,
        )
        .unwrap();
        let max = LocalMax.interpolate(&vf).unwrap();
        assert_eq!(max.internal()[0], Vector::new(1.0, 3.0, 0.0));
    }
}
