//! Incremental mesh builder.

use std::collections::HashMap;
use fv_core::{CellId, FaceId, FvResult, PatchId, Real, Vector};

use crate::error::MeshError;
use crate::mesh::{Mesh, Patch};
use crate::validate;

#[derive(Debug, Clone)]
pub(crate) struct CellDef {
    pub centre: Vector,
    pub volume: Real,
}

#[derive(Debug, Clone)]
pub(crate) struct FaceDef {
    pub owner: CellId,
    pub neighbour: Option<CellId>,
    pub centre: Vector,
    pub area: Vector,
}

#[derive(Debug, Clone)]
pub(crate) struct PatchDef {
    pub name: String,
    pub faces: Vec<FaceDef>,
}

/// Builder for constructing a mesh incrementally.
///
/// Use `add_cell`, `add_internal_face`, `add_patch` and `add_boundary_face`
/// to describe the mesh, then call `build()` to validate and freeze it into an
/// immutable `Mesh`. Internal faces keep the order they were added in;
/// boundary faces are grouped by patch after them.
#[derive(Debug, Default)]
pub struct MeshBuilder {
    cells: Vec<CellDef>,
    internal_faces: Vec<FaceDef>,
    patches: Vec<PatchDef>,
    // Boundary faces whose patch id was not valid when added.
    orphan_faces: Vec<PatchId>,
}

impl MeshBuilder {
    /// Create a new empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a cell and return its ID.
    pub fn add_cell(&mut self, centre: Vector, volume: Real) -> CellId {
        let id = CellId::from_index(self.cells.len() as u32);
        self.cells.push(CellDef { centre, volume });
        id
    }

    /// Add an internal face between two cells.
    ///
    /// `area` is the face area vector, pointing from `owner` into `neighbour`.
    pub fn add_internal_face(
        &mut self,
        owner: CellId,
        neighbour: CellId,
        centre: Vector,
        area: Vector,
    ) -> FaceId {
        let id = FaceId::from_index(self.internal_faces.len() as u32);
        self.internal_faces.push(FaceDef {
            owner,
            neighbour: Some(neighbour),
            centre,
            area,
        });
        id
    }

    /// Add an (initially empty) boundary patch and return its ID.
    pub fn add_patch(&mut self, name: impl Into<String>) -> PatchId {
        let id = PatchId::from_index(self.patches.len() as u32);
        self.patches.push(PatchDef {
            name: name.into(),
            faces: Vec::new(),
        });
        id
    }

    /// Add a boundary face to a patch.
    ///
    /// `area` points out of the domain.
    pub fn add_boundary_face(&mut self, patch: PatchId, owner: CellId, centre: Vector, area: Vector) {
        let face = FaceDef {
            owner,
            neighbour: None,
            centre,
            area,
        };
        match self.patches.get_mut(patch.idx()) {
            Some(def) => def.faces.push(face),
            None => self.orphan_faces.push(patch),
        }
    }

    pub fn n_cells(&self) -> usize {
        self.cells.len()
    }

    /// Build and validate the mesh, returning an immutable `Mesh`.
    ///
    /// This performs validation and constructs compact adjacency lists.
    pub fn build(self) -> FvResult<Mesh> {
        if let Some(&patch) = self.orphan_faces.first() {
            return Err(MeshError::InvalidPatchRef { patch }.into());
        }

        let n_faces =
            self.internal_faces.len() + self.patches.iter().map(|p| p.faces.len()).sum::<usize>();
        if u32::try_from(n_faces).is_err() {
            return Err(MeshError::TooLarge {
                what: "faces",
                count: n_faces,
            }
            .into());
        }

        // First validate the structure
        validate::validate_structure(&self.cells, &self.internal_faces, &self.patches)?;

        let mut cell_centres = Vec::with_capacity(self.cells.len());
        let mut cell_volumes = Vec::with_capacity(self.cells.len());
        for cell in &self.cells {
            cell_centres.push(cell.centre);
            cell_volumes.push(cell.volume);
        }

        let mut face_centres = Vec::with_capacity(n_faces);
        let mut face_areas = Vec::with_capacity(n_faces);
        let mut owner = Vec::with_capacity(n_faces);
        let mut neighbour = Vec::with_capacity(self.internal_faces.len());

        for face in &self.internal_faces {
            face_centres.push(face.centre);
            face_areas.push(face.area);
            owner.push(face.owner.idx());
            if let Some(nei) = face.neighbour {
                neighbour.push(nei.idx());
            }
        }

        let mut patches = Vec::with_capacity(self.patches.len());
        for (i, def) in self.patches.iter().enumerate() {
            let start = owner.len();
            for face in &def.faces {
                face_centres.push(face.centre);
                face_areas.push(face.area);
                owner.push(face.owner.idx());
            }
            patches.push(Patch {
                id: PatchId::from_index(i as u32),
                name: def.name.clone(),
                start,
                size: def.faces.len(),
            });
        }

        // Build adjacency lists: cell -> [faces]
        let (cell_face_offsets, cell_faces) =
            Self::build_adjacency(self.cells.len(), &owner, &neighbour);

        // Validate adjacency consistency
        validate::validate_adjacency(&owner, &neighbour, &cell_face_offsets, &cell_faces)?;

        Ok(Mesh {
            cell_centres,
            cell_volumes,
            face_centres,
            face_areas,
            owner,
            neighbour,
            patches,
            cell_face_offsets,
            cell_faces,
        })
    }

    /// Build compact adjacency lists: for each cell, collect its bounding faces.
    fn build_adjacency(
        n_cells: usize,
        owner: &[usize],
        neighbour: &[usize],
    ) -> (Vec<usize>, Vec<usize>) {
        // Group faces by cell
        let mut cell_to_faces: HashMap<usize, Vec<usize>> = HashMap::new();
        for (face, &cell) in owner.iter().enumerate() {
            cell_to_faces.entry(cell).or_default().push(face);
        }
        for (face, &cell) in neighbour.iter().enumerate() {
            cell_to_faces.entry(cell).or_default().push(face);
        }

        // Sort each cell's face list for determinism
        for faces in cell_to_faces.values_mut() {
            faces.sort_unstable();
        }

        // Build offsets and flat list
        let mut offsets = Vec::with_capacity(n_cells + 1);
        let mut flat_faces = Vec::new();
        offsets.push(0);

        for cell in 0..n_cells {
            if let Some(faces) = cell_to_faces.get(&cell) {
                flat_faces.extend_from_slice(faces);
            }
            offsets.push(flat_faces.len());
        }

        (offsets, flat_faces)
    }
}
