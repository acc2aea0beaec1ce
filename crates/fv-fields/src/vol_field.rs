//! Cell-centred (volume) fields.

use std::sync::Arc;

use fv_core::{DimensionSet, PatchId, Vector};
use fv_mesh::Mesh;

use crate::boundary::PatchKind;
use crate::error::{FieldError, FieldResult};
use crate::value::FieldValue;

/// Values of type `T` at every cell, plus one value per boundary face.
///
/// Boundary values are indexed by `face - n_internal_faces`; each patch has
/// a [`PatchKind`] that `correct_boundary_conditions` applies.
#[derive(Debug, Clone)]
pub struct VolField<T> {
    name: String,
    dimensions: DimensionSet,
    mesh: Arc<Mesh>,
    internal: Vec<T>,
    boundary: Vec<T>,
    patch_kinds: Vec<PatchKind<T>>,
}

impl<T: FieldValue> VolField<T> {
    /// Uniform field with the same patch kind on every patch.
    pub fn uniform(
        name: impl Into<String>,
        mesh: &Arc<Mesh>,
        dimensions: DimensionSet,
        value: T,
        kind: PatchKind<T>,
    ) -> Self {
        let mut field = Self {
            name: name.into(),
            dimensions,
            mesh: Arc::clone(mesh),
            internal: vec![value; mesh.n_cells()],
            boundary: vec![value; mesh.n_boundary_faces()],
            patch_kinds: vec![kind; mesh.patches().len()],
        };
        field.correct_boundary_conditions();
        field
    }

    /// Field from explicit cell values.
    pub fn from_values(
        name: impl Into<String>,
        mesh: &Arc<Mesh>,
        dimensions: DimensionSet,
        internal: Vec<T>,
        kind: PatchKind<T>,
    ) -> FieldResult<Self> {
        if internal.len() != mesh.n_cells() {
            return Err(FieldError::SizeMismatch {
                what: "cell values",
                expected: mesh.n_cells(),
                actual: internal.len(),
            });
        }
        let mut field = Self {
            name: name.into(),
            dimensions,
            mesh: Arc::clone(mesh),
            internal,
            boundary: vec![T::zero(); mesh.n_boundary_faces()],
            patch_kinds: vec![kind; mesh.patches().len()],
        };
        field.correct_boundary_conditions();
        Ok(field)
    }

    /// Field evaluated at cell centres (boundary faces at face centres).
    pub fn from_cell_centres(
        name: impl Into<String>,
        mesh: &Arc<Mesh>,
        dimensions: DimensionSet,
        f: impl Fn(&Vector) -> T,
    ) -> Self {
        let n_internal = mesh.n_internal_faces();
        Self {
            name: name.into(),
            dimensions,
            mesh: Arc::clone(mesh),
            internal: mesh.cell_centres().iter().map(&f).collect(),
            boundary: mesh.face_centres()[n_internal..].iter().map(&f).collect(),
            patch_kinds: vec![PatchKind::Calculated; mesh.patches().len()],
        }
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

    pub fn internal(&self) -> &[T] {
        &self.internal
    }

    pub fn internal_mut(&mut self) -> &mut [T] {
        &mut self.internal
    }

    pub fn boundary(&self) -> &[T] {
        &self.boundary
    }

    pub fn boundary_mut(&mut self) -> &mut [T] {
        &mut self.boundary
    }

    /// Value on a boundary face, addressed by its global face index.
    pub fn boundary_value(&self, face: usize) -> Option<T> {
        face.checked_sub(self.mesh.n_internal_faces())
            .and_then(|b| self.boundary.get(b))
            .copied()
    }

    pub fn patch_kinds(&self) -> &[PatchKind<T>] {
        &self.patch_kinds
    }

    pub fn set_patch_kind(&mut self, patch: PatchId, kind: PatchKind<T>) -> FieldResult<()> {
        let n_patches = self.patch_kinds.len();
        let slot = self
            .patch_kinds
            .get_mut(patch.idx())
            .ok_or(fv_core::FvError::IndexOob {
                what: "patch",
                index: patch.idx(),
                len: n_patches,
            })?;
        *slot = kind;
        Ok(())
    }

    /// Set every patch to the same kind.
    pub fn set_all_patch_kinds(&mut self, kind: PatchKind<T>) {
        self.patch_kinds.fill(kind);
    }

    pub fn renamed(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Re-evaluate boundary values from the patch kinds and current cell values.
    pub fn correct_boundary_conditions(&mut self) {
        let n_internal = self.mesh.n_internal_faces();
        let owner = self.mesh.owner();
        for (patch, kind) in self.mesh.patches().iter().zip(&self.patch_kinds) {
            for face in patch.faces() {
                let cell_value = self.internal[owner[face]];
                if let Some(v) = kind.evaluate(cell_value) {
                    self.boundary[face - n_internal] = v;
                }
            }
        }
    }

    /// Component-wise extrema over cells, `None` for an empty mesh.
    pub fn cmpt_bounds(&self) -> Option<(T, T)> {
        let first = *self.internal.first()?;
        Some(self.internal.iter().fold((first, first), |(lo, hi), v| {
            (lo.cmpt_min(v), hi.cmpt_max(v))
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fv_core::{DIM_VELOCITY, DIMLESS};
    use fv_mesh::grid;

    fn mesh() -> Arc<Mesh> {
        Arc::new(grid(3, 1, 3.0, 1.0, 1.0).unwrap())
    }

    #[test]
    fn uniform_field_fills_boundary() {
        let mesh = mesh();
        let f = VolField::uniform("T", &mesh, DIMLESS, 2.0, PatchKind::Calculated);
        assert_eq!(f.internal().len(), 3);
        assert_eq!(f.boundary().len(), mesh.n_boundary_faces());
        assert!(f.boundary().iter().all(|&v| v == 2.0));

        let f = VolField::uniform("T", &mesh, DIMLESS, 2.0, PatchKind::FixedValue(7.0));
        assert!(f.boundary().iter().all(|&v| v == 7.0));
    }

    #[test]
    fn from_values_checks_size() {
        let mesh = mesh();
        let err = VolField::from_values("T", &mesh, DIMLESS, vec![1.0; 2], PatchKind::Calculated)
            .unwrap_err();
        assert!(matches!(err, FieldError::SizeMismatch { expected: 3, actual: 2, .. }));
    }

    #[test]
    fn correct_boundary_conditions_extrapolates() {
        let mesh = mesh();
        let mut f = VolField::from_values(
            "Co",
            &mesh,
            DIMLESS,
            vec![1.0, 2.0, 3.0],
            PatchKind::ExtrapolatedCalculated,
        )
        .unwrap();

        let left = mesh.patch_by_name("left").unwrap().start;
        let right = mesh.patch_by_name("right").unwrap().start;
        assert_eq!(f.boundary_value(left), Some(1.0));
        assert_eq!(f.boundary_value(right), Some(3.0));

        f.internal_mut()[2] = 10.0;
        f.correct_boundary_conditions();
        assert_eq!(f.boundary_value(right), Some(10.0));
        assert_eq!(f.boundary_value(0), None);
    }

    #[test]
    fn fixed_value_patch_kind() {
        let mesh = mesh();
        let mut f = VolField::uniform("U", &mesh, DIM_VELOCITY, Vector::zeros(), PatchKind::ZeroGradient);
        let inlet = mesh.patch_by_name("left").unwrap();
        f.set_patch_kind(inlet.id, PatchKind::FixedValue(Vector::x())).unwrap();
        f.correct_boundary_conditions();
        assert_eq!(f.boundary_value(inlet.start), Some(Vector::x()));
        assert!(f.set_patch_kind(PatchId::from_index(10), PatchKind::Calculated).is_err());
    }

    #[test]
    fn cell_centre_field() {
        let mesh = mesh();
        let f = VolField::from_cell_centres("x", &mesh, DIMLESS, |c| c.x);
        assert_eq!(f.internal(), &[0.5, 1.5, 2.5]);
        assert_eq!(f.cmpt_bounds(), Some((0.5, 2.5)));
        let right = mesh.patch_by_name("right").unwrap().start;
        assert_eq!(f.boundary_value(right), Some(3.0));
    }
}
