//! Structured rectangular meshes.

use fv_core::{FvError, FvResult, Real, Vector};

use crate::builder::MeshBuilder;
use crate::mesh::Mesh;

/// Patch names created by [`grid`], in patch order.
pub const GRID_PATCHES: [&str; 4] = ["left", "right", "bottom", "top"];

/// Build an `nx` x `ny` single-layer Cartesian mesh of size `lx` x `ly` x `depth`.
///
/// Cell `(i, j)` has index `i + nx * j`. Internal x-normal faces come first
/// (row by row), followed by y-normal faces. Boundary patches are `left`,
/// `right`, `bottom` and `top`; the front and back planes carry no faces.
pub fn grid(nx: usize, ny: usize, lx: Real, ly: Real, depth: Real) -> FvResult<Mesh> {
    if nx == 0 || ny == 0 {
        return Err(FvError::InvalidArg {
            what: "grid needs at least one cell in each direction",
        });
    }
    for (what, value) in [("grid lx", lx), ("grid ly", ly), ("grid depth", depth)] {
        if !value.is_finite() {
            return Err(FvError::NonFinite { what, value });
        }
        if value <= 0.0 {
            return Err(FvError::InvalidArg {
                what: "grid extents must be positive",
            });
        }
    }

    let dx = lx / nx as Real;
    let dy = ly / ny as Real;
    let zc = 0.5 * depth;
    let sx = Vector::new(dy * depth, 0.0, 0.0);
    let sy = Vector::new(0.0, dx * depth, 0.0);

    let mut builder = MeshBuilder::new();
    let mut cells = Vec::with_capacity(nx * ny);
    for j in 0..ny {
        for i in 0..nx {
            let centre = Vector::new((i as Real + 0.5) * dx, (j as Real + 0.5) * dy, zc);
            cells.push(builder.add_cell(centre, dx * dy * depth));
        }
    }
    let cell = |i: usize, j: usize| cells[i + nx * j];

    for j in 0..ny {
        for i in 0..nx - 1 {
            let centre = Vector::new((i + 1) as Real * dx, (j as Real + 0.5) * dy, zc);
            builder.add_internal_face(cell(i, j), cell(i + 1, j), centre, sx);
        }
    }
    for j in 0..ny - 1 {
        for i in 0..nx {
            let centre = Vector::new((i as Real + 0.5) * dx, (j + 1) as Real * dy, zc);
            builder.add_internal_face(cell(i, j), cell(i, j + 1), centre, sy);
        }
    }

    let left = builder.add_patch(GRID_PATCHES[0]);
    let right = builder.add_patch(GRID_PATCHES[1]);
    let bottom = builder.add_patch(GRID_PATCHES[2]);
    let top = builder.add_patch(GRID_PATCHES[3]);

    for j in 0..ny {
        let y = (j as Real + 0.5) * dy;
        builder.add_boundary_face(left, cell(0, j), Vector::new(0.0, y, zc), -sx);
        builder.add_boundary_face(right, cell(nx - 1, j), Vector::new(lx, y, zc), sx);
    }
    for i in 0..nx {
        let x = (i as Real + 0.5) * dx;
        builder.add_boundary_face(bottom, cell(i, 0), Vector::new(x, 0.0, zc), -sy);
        builder.add_boundary_face(top, cell(i, ny - 1), Vector::new(x, ly, zc), sy);
    }

    builder.build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use fv_core::CellId;

    #[test]
    fn grid_counts() {
        let mesh = grid(3, 2, 3.0, 2.0, 1.0).unwrap();
        assert_eq!(mesh.n_cells(), 6);
        // 2 x-faces per row * 2 rows + 3 y-faces
        assert_eq!(mesh.n_internal_faces(), 7);
        assert_eq!(mesh.n_boundary_faces(), 2 * 2 + 2 * 3);
        assert_eq!(mesh.patches().len(), 4);
        assert!((mesh.total_volume() - 6.0).abs() < 1e-12);
    }

    #[test]
    fn grid_closed_cells() {
        // Sum of outward area vectors of each cell vanishes
        let mesh = grid(3, 3, 1.0, 2.0, 0.5).unwrap();
        for c in 0..mesh.n_cells() {
            let id = CellId::from_index(c as u32);
            let mut sum = Vector::zeros();
            for &f in mesh.cell_faces(id) {
                let sf = mesh.face_areas()[f];
                if mesh.owner()[f] == c {
                    sum += sf;
                } else {
                    sum -= sf;
                }
            }
            // Front/back faces are absent, so only the in-plane components close
            assert!(sum.x.abs() < 1e-12 && sum.y.abs() < 1e-12, "cell {c}: {sum:?}");
        }
    }

    #[test]
    fn grid_uniform_weights_are_half() {
        let mesh = grid(4, 1, 1.0, 1.0, 1.0).unwrap();
        let w = mesh.linear_weights();
        for (f, &wf) in w.iter().enumerate() {
            if mesh.is_internal_face(f) {
                assert!((wf - 0.5).abs() < 1e-12);
            } else {
                assert_eq!(wf, 1.0);
            }
        }
    }

    #[test]
    fn grid_rejects_bad_arguments() {
        assert!(grid(0, 1, 1.0, 1.0, 1.0).is_err());
        assert!(grid(1, 1, -1.0, 1.0, 1.0).is_err());
        assert!(matches!(
            grid(1, 1, 1.0, f64::INFINITY, 1.0),
            Err(FvError::NonFinite { .. })
        ));
    }
}
