//! Core mesh data structures.

use std::ops::Range;

use fv_core::{CellId, PatchId, Real, VSMALL, Vector};

/// A named group of boundary faces.
///
/// Boundary faces are stored contiguously after the internal faces, so a
/// patch is a range of global face indices.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Patch {
    pub id: PatchId,
    pub name: String,
    /// First global face index of the patch.
    pub start: usize,
    /// Number of faces in the patch.
    pub size: usize,
}

impl Patch {
    /// Global face indices covered by this patch.
    pub fn faces(&self) -> Range<usize> {
        self.start..self.start + self.size
    }
}

/// The mesh: a validated, immutable finite-volume discretisation.
///
/// The mesh stores:
/// - Cell centres and volumes.
/// - Face centres and area vectors (`Sf`, pointing out of the owner cell).
/// - Owner cell for every face and neighbour cell for every internal face.
/// - Boundary patches (contiguous face ranges after the internal faces).
/// - Compact adjacency: for each cell, which faces bound it.
///
/// This structure is optimized for per-cell and per-face parallel loops.
#[derive(Debug, Clone)]
pub struct Mesh {
    pub(crate) cell_centres: Vec<Vector>,
    pub(crate) cell_volumes: Vec<Real>,

    pub(crate) face_centres: Vec<Vector>,
    pub(crate) face_areas: Vec<Vector>,

    /// Owner cell of every face (internal and boundary).
    pub(crate) owner: Vec<usize>,
    /// Neighbour cell of every internal face.
    pub(crate) neighbour: Vec<usize>,

    pub(crate) patches: Vec<Patch>,

    /// Offsets for cell->face adjacency: cell i's faces are in cell_faces[cell_face_offsets[i]..cell_face_offsets[i+1]].
    pub(crate) cell_face_offsets: Vec<usize>,

    /// Flat list of face indices bounding cells (sorted by cell then face index for determinism).
    pub(crate) cell_faces: Vec<usize>,
}

impl Mesh {
    pub fn n_cells(&self) -> usize {
        self.cell_volumes.len()
    }

    pub fn n_faces(&self) -> usize {
        self.owner.len()
    }

    pub fn n_internal_faces(&self) -> usize {
        self.neighbour.len()
    }

    pub fn n_boundary_faces(&self) -> usize {
        self.n_faces() - self.n_internal_faces()
    }

    pub fn cell_centres(&self) -> &[Vector] {
        &self.cell_centres
    }

    pub fn cell_volumes(&self) -> &[Real] {
        &self.cell_volumes
    }

    pub fn face_centres(&self) -> &[Vector] {
        &self.face_centres
    }

    /// Face area vectors `Sf`.
    pub fn face_areas(&self) -> &[Vector] {
        &self.face_areas
    }

    pub fn owner(&self) -> &[usize] {
        &self.owner
    }

    pub fn neighbour(&self) -> &[usize] {
        &self.neighbour
    }

    pub fn patches(&self) -> &[Patch] {
        &self.patches
    }

    /// Get a patch by ID (returns None if ID out of bounds).
    pub fn patch(&self, id: PatchId) -> Option<&Patch> {
        self.patches.get(id.idx())
    }

    pub fn patch_by_name(&self, name: &str) -> Option<&Patch> {
        self.patches.iter().find(|p| p.name == name)
    }

    pub fn is_internal_face(&self, face: usize) -> bool {
        face < self.n_internal_faces()
    }

    /// Faces bounding a given cell.
    pub fn cell_faces(&self, cell: CellId) -> &[usize] {
        let idx = cell.idx();
        if idx >= self.n_cells() {
            return &[];
        }
        let start = self.cell_face_offsets[idx];
        let end = self.cell_face_offsets[idx + 1];
        &self.cell_faces[start..end]
    }

    pub fn total_volume(&self) -> Real {
        self.cell_volumes.iter().sum()
    }

    /// Face area magnitudes `|Sf|`.
    pub fn face_area_magnitudes(&self) -> Vec<Real> {
        self.face_areas.iter().map(|sf| sf.norm()).collect()
    }

    /// Geometric interpolation weights, one per face.
    ///
    /// For internal faces `w = (n·(Cn - Cf)) / (n·(Cn - Co))`, the weight of
    /// the owner value. Boundary faces take the boundary value, so their
    /// weight is 1.
    pub fn linear_weights(&self) -> Vec<Real> {
        let mut weights = vec![1.0; self.n_faces()];
        for (face, w) in weights.iter_mut().enumerate().take(self.n_internal_faces()) {
            let sf = &self.face_areas[face];
            let c_own = &self.cell_centres[self.owner[face]];
            let c_nei = &self.cell_centres[self.neighbour[face]];
            let cf = &self.face_centres[face];

            let d_own = sf.dot(&(cf - c_own)).abs();
            let d_nei = sf.dot(&(c_nei - cf)).abs();
            let denom = d_own + d_nei;
            *w = if denom > VSMALL { d_nei / denom } else { 0.5 };
        }
        weights
    }

    /// Inverse centre-to-centre distances (internal) or centre-to-face
    /// distances (boundary).
    pub fn delta_coeffs(&self) -> Vec<Real> {
        (0..self.n_faces())
            .map(|face| {
                let c_own = &self.cell_centres[self.owner[face]];
                let delta = if self.is_internal_face(face) {
                    self.cell_centres[self.neighbour[face]] - c_own
                } else {
                    self.face_centres[face] - c_own
                };
                1.0 / delta.norm().max(VSMALL)
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn patch_face_range() {
        let patch = Patch {
            id: PatchId::from_index(0),
            name: "inlet".into(),
            start: 10,
            size: 3,
        };
        assert_eq!(patch.faces(), 10..13);
        assert_eq!(patch.faces().len(), 3);
    }
}
