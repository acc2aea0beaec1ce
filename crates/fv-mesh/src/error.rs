//! Mesh-specific error types.

use fv_core::{CellId, FvError, PatchId};

/// Mesh construction and validation errors.
#[derive(Debug, Clone, PartialEq)]
pub enum MeshError {
    /// A face refers to a cell that doesn't exist.
    InvalidCellRef { face: usize, cell: CellId },

    /// A boundary face refers to a patch that doesn't exist.
    InvalidPatchRef { patch: PatchId },

    /// An internal face has the same cell on both sides.
    SelfNeighbour { face: usize, cell: CellId },

    /// A cell volume is zero, negative or non-finite.
    NonPositiveVolume { cell: CellId, volume: f64 },

    /// A face area vector has zero or non-finite magnitude.
    DegenerateFace { face: usize },

    /// Two patches share a name.
    DuplicatePatch { name: String },

    /// Adjacency list is inconsistent (face in cell's list but face doesn't touch the cell).
    InconsistentAdjacency { cell: CellId, face: usize },

    /// Entity count exceeds the id range.
    TooLarge { what: &'static str, count: usize },
}

impl std::fmt::Display for MeshError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MeshError::InvalidCellRef { face, cell } => {
                write!(f, "Face {} refers to non-existent cell {}", face, cell)
            }
            MeshError::InvalidPatchRef { patch } => {
                write!(f, "Boundary face refers to non-existent patch {}", patch)
            }
            MeshError::SelfNeighbour { face, cell } => {
                write!(f, "Face {} has cell {} as both owner and neighbour", face, cell)
            }
            MeshError::NonPositiveVolume { cell, volume } => {
                write!(f, "Cell {} has non-positive volume {}", cell, volume)
            }
            MeshError::DegenerateFace { face } => {
                write!(f, "Face {} has a degenerate area vector", face)
            }
            MeshError::DuplicatePatch { name } => {
                write!(f, "Patch name '{}' is used more than once", name)
            }
            MeshError::InconsistentAdjacency { cell, face } => {
                write!(
                    f,
                    "Face {} in cell {}'s adjacency list but doesn't touch that cell",
                    face, cell
                )
            }
            MeshError::TooLarge { what, count } => {
                write!(f, "Too many {} ({})", what, count)
            }
        }
    }
}

impl std::error::Error for MeshError {}

impl From<MeshError> for FvError {
    fn from(err: MeshError) -> Self {
        FvError::Invariant {
            what: err.to_string(),
        }
    }
}
