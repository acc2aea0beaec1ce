//! Mesh validation logic.

use std::collections::HashSet;
use fv_core::{CellId, FvResult};

use crate::builder::{CellDef, FaceDef, PatchDef};
use crate::error::MeshError;

/// Validate the mesh description: volumes, cell references, face areas, patch names.
pub(crate) fn validate_structure(
    cells: &[CellDef],
    internal_faces: &[FaceDef],
    patches: &[PatchDef],
) -> FvResult<()> {
    for (i, cell) in cells.iter().enumerate() {
        if !(cell.volume.is_finite() && cell.volume > 0.0) {
            return Err(MeshError::NonPositiveVolume {
                cell: CellId::from_index(i as u32),
                volume: cell.volume,
            }
            .into());
        }
    }

    let boundary_faces = patches.iter().flat_map(|p| p.faces.iter());
    for (face, def) in internal_faces.iter().chain(boundary_faces).enumerate() {
        if def.owner.idx() >= cells.len() {
            return Err(MeshError::InvalidCellRef {
                face,
                cell: def.owner,
            }
            .into());
        }

        if let Some(nei) = def.neighbour {
            if nei.idx() >= cells.len() {
                return Err(MeshError::InvalidCellRef { face, cell: nei }.into());
            }
            if nei == def.owner {
                return Err(MeshError::SelfNeighbour { face, cell: nei }.into());
            }
        }

        let mag = def.area.norm();
        if !(mag.is_finite() && mag > 0.0) || !def.centre.iter().all(|c| c.is_finite()) {
            return Err(MeshError::DegenerateFace { face }.into());
        }
    }

    let mut names: HashSet<&str> = HashSet::new();
    for patch in patches {
        if !names.insert(patch.name.as_str()) {
            return Err(MeshError::DuplicatePatch {
                name: patch.name.clone(),
            }
            .into());
        }
    }

    Ok(())
}

/// Validate adjacency lists for consistency.
pub(crate) fn validate_adjacency(
    owner: &[usize],
    neighbour: &[usize],
    cell_face_offsets: &[usize],
    cell_faces: &[usize],
) -> FvResult<()> {
    let n_cells = cell_face_offsets.len().saturating_sub(1);

    for cell in 0..n_cells {
        let start = cell_face_offsets[cell];
        let end = cell_face_offsets[cell + 1];

        for &face in &cell_faces[start..end] {
            // Face must exist and touch this cell
            let touches = owner.get(face) == Some(&cell) || neighbour.get(face) == Some(&cell);
            if !touches {
                return Err(MeshError::InconsistentAdjacency {
                    cell: CellId::from_index(cell as u32),
                    face,
                }
                .into());
            }
        }
    }

    // Each face appears once per side it has
    let expected = owner.len() + neighbour.len();
    if cell_faces.len() != expected {
        let face = cell_faces.len().min(expected);
        return Err(MeshError::InconsistentAdjacency {
            cell: CellId::from_index(owner.get(face).copied().unwrap_or(0) as u32),
            face,
        }
        .into());
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use fv_core::{FvError, Vector};

    fn cell(volume: f64) -> CellDef {
        CellDef {
            centre: Vector::zeros(),
            volume,
        }
    }

    fn face(owner: u32, neighbour: Option<u32>) -> FaceDef {
        FaceDef {
            owner: CellId::from_index(owner),
            neighbour: neighbour.map(CellId::from_index),
            centre: Vector::zeros(),
            area: Vector::new(1.0, 0.0, 0.0),
        }
    }

    #[test]
    fn validate_empty_mesh() {
        assert!(validate_structure(&[], &[], &[]).is_ok());
        assert!(validate_adjacency(&[], &[], &[0], &[]).is_ok());
    }

    #[test]
    fn validate_invalid_cell_ref() {
        let cells = vec![cell(1.0)];
        let faces = vec![face(0, Some(99))];

        let result = validate_structure(&cells, &faces, &[]);
        assert!(matches!(result.unwrap_err(), FvError::Invariant { .. }));
    }

    #[test]
    fn validate_rejects_bad_volume_and_self_neighbour() {
        assert!(validate_structure(&[cell(0.0)], &[], &[]).is_err());
        assert!(validate_structure(&[cell(f64::NAN)], &[], &[]).is_err());

        let cells = vec![cell(1.0), cell(1.0)];
        assert!(validate_structure(&cells, &[face(1, Some(1))], &[]).is_err());
    }

    #[test]
    fn validate_rejects_zero_area_and_duplicate_patch() {
        let cells = vec![cell(1.0), cell(1.0)];
        let mut flat = face(0, Some(1));
        flat.area = Vector::zeros();
        assert!(validate_structure(&cells, &[flat], &[]).is_err());

        let patches = vec![
            PatchDef {
                name: "wall".into(),
                faces: vec![face(0, None)],
            },
            PatchDef {
                name: "wall".into(),
                faces: vec![face(1, None)],
            },
        ];
        let err = validate_structure(&cells, &[], &patches).unwrap_err();
        assert!(err.to_string().contains("wall"));
    }

    #[test]
    fn validate_adjacency_detects_stray_face() {
        // Two cells, one internal face; cell 1 wrongly lists a face it does not touch.
        let owner = vec![0, 0];
        let neighbour = vec![1];
        let offsets = vec![0, 2, 4];
        let faces = vec![0, 1, 0, 1];
        assert!(validate_adjacency(&owner, &neighbour, &offsets, &faces).is_err());

        let offsets = vec![0, 2, 3];
        let faces = vec![0, 1, 0];
        assert!(validate_adjacency(&owner, &neighbour, &offsets, &faces).is_ok());
    }
}
