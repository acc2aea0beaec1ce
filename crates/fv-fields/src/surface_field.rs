//! Face-centred (surface) fields.

use std::ops::Range;
use std::sync::Arc;

use fv_core::{DIMLESS, DimensionSet, Real};
use fv_mesh::{Mesh, Patch};

use crate::error::{FieldError, FieldResult};
use crate::par::map_indexed;
use crate::value::FieldValue;

/// Values of type `T` at every face: internal faces first, then boundary
/// faces in patch order (the mesh face order).
#[derive(Debug, Clone)]
pub struct SurfaceField<T> {
    name: String,
    dimensions: DimensionSet,
    mesh: Arc<Mesh>,
    values: Vec<T>,
}

impl<T: FieldValue> SurfaceField<T> {
    pub fn uniform(name: impl Into<String>, mesh: &Arc<Mesh>, dimensions: DimensionSet, value: T) -> Self {
        Self {
            name: name.into(),
            dimensions,
            mesh: Arc::clone(mesh),
            values: vec![value; mesh.n_faces()],
        }
    }

    pub fn from_values(
        name: impl Into<String>,
        mesh: &Arc<Mesh>,
        dimensions: DimensionSet,
        values: Vec<T>,
    ) -> FieldResult<Self> {
        if values.len() != mesh.n_faces() {
            return Err(FieldError::SizeMismatch {
                what: "face values",
                expected: mesh.n_faces(),
                actual: values.len(),
            });
        }
        Ok(Self {
            name: name.into(),
            dimensions,
            mesh: Arc::clone(mesh),
            values,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn dimensions(&self) -> DimensionSet {
        self.dimensions
    }

    pub fn mesh(&self) -> &Arc<Mesh> {
        &self.mesh
    }

    pub fn values(&self) -> &[T] {
        &self.values
    }

    pub fn values_mut(&mut self) -> &mut [T] {
        &mut self.values
    }

    pub fn into_values(self) -> Vec<T> {
        self.values
    }

    pub fn internal(&self) -> &[T] {
        &self.values[..self.mesh.n_internal_faces()]
    }

    pub fn boundary(&self) -> &[T] {
        &self.values[self.mesh.n_internal_faces()..]
    }

    pub fn patch_values(&self, patch: &Patch) -> &[T] {
        let Range { start, end } = patch.faces();
        &self.values[start..end]
    }

    pub fn renamed(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn with_dimensions(mut self, dimensions: DimensionSet) -> Self {
        self.dimensions = dimensions;
        self
    }

    /// Apply `f` to every face value.
    pub fn map<U: FieldValue>(
        &self,
        name: impl Into<String>,
        dimensions: DimensionSet,
        f: impl Fn(T) -> U + Sync + Send,
    ) -> SurfaceField<U> {
        let values = &self.values;
        SurfaceField {
            name: name.into(),
            dimensions,
            mesh: Arc::clone(&self.mesh),
            values: map_indexed(values.len(), |i| f(values[i])),
        }
    }

    pub fn mag(&self) -> SurfaceField<Real> {
        self.map(format!("mag({})", self.name), self.dimensions, |v| v.mag())
    }

    /// `self + other`, where dimensions must combine additively.
    pub fn checked_add(&self, other: &Self) -> FieldResult<Self> {
        self.check_compatible("add", other.mesh(), other.values.len())?;
        let dimensions = additive("add", self.dimensions, other.dimensions)?;
        let (a, b) = (&self.values, &other.values);
        Ok(Self {
            name: format!("({}+{})", self.name, other.name),
            dimensions,
            mesh: Arc::clone(&self.mesh),
            values: map_indexed(a.len(), |i| a[i] + b[i]),
        })
    }

    /// Face-wise product with a scalar field.
    pub fn scaled(&self, factor: &SurfaceField<Real>) -> FieldResult<Self> {
        self.check_compatible("scale", factor.mesh(), factor.values.len())?;
        let (a, s) = (&self.values, &factor.values);
        Ok(Self {
            name: format!("({}*{})", factor.name, self.name),
            dimensions: factor.dimensions * self.dimensions,
            mesh: Arc::clone(&self.mesh),
            values: map_indexed(a.len(), |i| a[i] * s[i]),
        })
    }

    /// Face-wise quotient by a scalar field.
    pub fn divide_by(&self, denom: &SurfaceField<Real>) -> FieldResult<Self> {
        self.check_compatible("divide", denom.mesh(), denom.values.len())?;
        let (a, d) = (&self.values, &denom.values);
        Ok(Self {
            name: format!("({}|{})", self.name, denom.name),
            dimensions: self.dimensions / denom.dimensions,
            mesh: Arc::clone(&self.mesh),
            values: map_indexed(a.len(), |i| a[i] * (1.0 / d[i])),
        })
    }

    /// `bf * a + (1 - bf) * b` face by face. `bf` must be dimensionless.
    pub fn blend(bf: &SurfaceField<Real>, a: &Self, b: &Self) -> FieldResult<Self> {
        check_blending_factor(bf)?;
        a.check_compatible("blend", bf.mesh(), bf.values.len())?;
        a.check_compatible("blend", b.mesh(), b.values.len())?;
        let dimensions = additive("blend", a.dimensions, b.dimensions)?;
        let (w, x, y) = (&bf.values, &a.values, &b.values);
        Ok(Self {
            name: format!("blend({},{})", a.name, b.name),
            dimensions,
            mesh: Arc::clone(&a.mesh),
            values: map_indexed(w.len(), |i| x[i] * w[i] + y[i] * (1.0 - w[i])),
        })
    }

    /// `(1 - bf) * self`. `bf` must be dimensionless.
    pub fn complement_scaled(&self, bf: &SurfaceField<Real>) -> FieldResult<Self> {
        check_blending_factor(bf)?;
        self.check_compatible("complement_scaled", bf.mesh(), bf.values.len())?;
        let (w, a) = (&bf.values, &self.values);
        Ok(Self {
            name: format!("((1-{})*{})", bf.name, self.name),
            dimensions: self.dimensions,
            mesh: Arc::clone(&self.mesh),
            values: map_indexed(a.len(), |i| a[i] * (1.0 - w[i])),
        })
    }

    fn check_compatible(&self, op: &'static str, mesh: &Arc<Mesh>, len: usize) -> FieldResult<()> {
        if !Arc::ptr_eq(&self.mesh, mesh) {
            return Err(FieldError::MeshMismatch { op });
        }
        if len != self.values.len() {
            return Err(FieldError::SizeMismatch {
                what: op,
                expected: self.values.len(),
                actual: len,
            });
        }
        Ok(())
    }
}

impl SurfaceField<Real> {
    /// Minimum and maximum face value, `None` for a mesh without faces.
    pub fn min_max(&self) -> Option<(Real, Real)> {
        let first = *self.values.first()?;
        Some(
            self.values
                .iter()
                .fold((first, first), |(lo, hi), &v| (lo.min(v), hi.max(v))),
        )
    }
}

fn additive(op: &'static str, lhs: DimensionSet, rhs: DimensionSet) -> FieldResult<DimensionSet> {
    lhs.additive(rhs)
        .ok_or(FieldError::DimensionMismatch { op, lhs, rhs })
}

fn check_blending_factor(bf: &SurfaceField<Real>) -> FieldResult<()> {
    if bf.dimensions.is_dimensionless() {
        Ok(())
    } else {
        Err(FieldError::DimensionMismatch {
            op: "blending factor",
            lhs: bf.dimensions,
            rhs: DIMLESS,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fv_core::{DIM_DENSITY, DIM_FLUX, DIM_MASS_FLUX, Vector};
    use fv_mesh::grid;

    fn mesh() -> Arc<Mesh> {
        Arc::new(grid(2, 2, 1.0, 1.0, 1.0).unwrap())
    }

    #[test]
    fn internal_boundary_split() {
        let mesh = mesh();
        let f = SurfaceField::uniform("phi", &mesh, DIM_FLUX, 1.0);
        assert_eq!(f.values().len(), mesh.n_faces());
        assert_eq!(f.internal().len(), 4);
        assert_eq!(f.boundary().len(), 8);
        let top = mesh.patch_by_name("top").unwrap();
        assert_eq!(f.patch_values(top).len(), 2);
    }

    #[test]
    fn checked_add_rejects_mismatched_dimensions() {
        let mesh = mesh();
        let a = SurfaceField::uniform("a", &mesh, DIM_FLUX, 1.0);
        let b = SurfaceField::uniform("b", &mesh, DIM_MASS_FLUX, 1.0);
        assert!(matches!(
            a.checked_add(&b),
            Err(FieldError::DimensionMismatch { .. })
        ));

        let c = SurfaceField::uniform("c", &mesh, DIMLESS, 2.0);
        let sum = a.checked_add(&c).unwrap();
        assert_eq!(sum.dimensions(), DIM_FLUX);
        assert!(sum.values().iter().all(|&v| v == 3.0));
    }

    #[test]
    fn mesh_mismatch_detected() {
        let a = SurfaceField::uniform("a", &mesh(), DIMLESS, 1.0);
        let b = SurfaceField::uniform("b", &mesh(), DIMLESS, 1.0);
        assert!(matches!(a.checked_add(&b), Err(FieldError::MeshMismatch { .. })));
    }

    #[test]
    fn divide_mass_flux_by_density() {
        let mesh = mesh();
        let phi = SurfaceField::uniform("phi", &mesh, DIM_MASS_FLUX, 4.0);
        let rho = SurfaceField::uniform("rho", &mesh, DIM_DENSITY, 2.0);
        let vol = phi.divide_by(&rho).unwrap();
        assert_eq!(vol.dimensions(), DIM_FLUX);
        assert!(vol.values().iter().all(|&v| v == 2.0));
    }

    #[test]
    fn blend_and_complement() {
        let mesh = mesh();
        let bf = SurfaceField::uniform("bf", &mesh, DIMLESS, 0.25);
        let a = SurfaceField::uniform("a", &mesh, DIMLESS, Vector::new(4.0, 0.0, 0.0));
        let b = SurfaceField::uniform("b", &mesh, DIMLESS, Vector::new(0.0, 8.0, 0.0));

        let blended = SurfaceField::blend(&bf, &a, &b).unwrap();
        assert!(blended.values().iter().all(|v| *v == Vector::new(1.0, 6.0, 0.0)));

        let c = b.complement_scaled(&bf).unwrap();
        assert!(c.values().iter().all(|v| *v == Vector::new(0.0, 6.0, 0.0)));

        let scaled = a.scaled(&bf).unwrap();
        assert!(scaled.values().iter().all(|v| *v == Vector::new(1.0, 0.0, 0.0)));
    }

    #[test]
    fn blend_requires_dimensionless_factor() {
        let mesh = mesh();
        let bf = SurfaceField::uniform("bf", &mesh, DIM_FLUX, 0.5);
        let a = SurfaceField::uniform("a", &mesh, DIMLESS, 1.0);
        assert!(SurfaceField::blend(&bf, &a, &a).is_err());
        assert!(a.complement_scaled(&bf).is_err());
    }

    #[test]
    fn mag_and_min_max() {
        let mesh = mesh();
        let n = mesh.n_faces();
        let values: Vec<f64> = (0..n).map(|i| i as f64 - 3.0).collect();
        let f = SurfaceField::from_values("phi", &mesh, DIM_FLUX, values).unwrap();
        assert_eq!(f.min_max(), Some((-3.0, n as f64 - 4.0)));
        assert_eq!(f.mag().min_max(), Some((0.0, n as f64 - 4.0)));
        assert!(SurfaceField::from_values("x", &mesh, DIMLESS, vec![0.0; 3]).is_err());
    }
}
