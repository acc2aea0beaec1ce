//! Integration tests for fv-fields.

use std::sync::Arc;

use fv_core::{DIM_FLUX, DIM_MASS_FLUX, DIMLESS, RunTime};
use fv_fields::{FvMesh, PatchKind, SurfaceField, VolField, fvc, read};
use fv_mesh::grid;
use proptest::prelude::*;

#[test]
fn courant_style_reduction() {
    // One internal face carrying 4 m3/s between two unit cells
    let mesh = Arc::new(grid(2, 1, 2.0, 1.0, 1.0).unwrap());
    let mut values = vec![0.0; mesh.n_faces()];
    values[0] = 4.0;
    let phi = SurfaceField::from_values("phi", &mesh, DIM_FLUX, values).unwrap();

    let sum = fvc::surface_sum(&phi.mag()).unwrap();
    assert_eq!(sum.internal(), &[4.0, 4.0]);
    assert_eq!(sum.patch_kinds()[0], PatchKind::ExtrapolatedCalculated);
    // Boundary values extrapolated from the cells
    assert!(sum.boundary().iter().all(|&v| v == 4.0));
}

#[test]
fn registry_holds_solver_fields() {
    let time = Arc::new(RunTime::from_seconds(0.5).unwrap());
    let fv = FvMesh::new(grid(2, 2, 1.0, 1.0, 1.0).unwrap(), time);
    let mesh = Arc::clone(fv.geometry());

    fv.registry()
        .register(SurfaceField::uniform("phi", &mesh, DIM_MASS_FLUX, 2.0));
    fv.registry().register(VolField::uniform(
        "T",
        &mesh,
        DIMLESS,
        300.0,
        PatchKind::ZeroGradient,
    ));

    let phi = fv.registry().lookup::<SurfaceField<f64>>("phi").unwrap();
    assert_eq!(read(&phi).dimensions(), DIM_MASS_FLUX);
    assert!(fv.registry().lookup::<VolField<f64>>("U").is_err());
}

proptest! {
    #[test]
    fn surface_sum_of_magnitudes_is_non_negative(
        nx in 1usize..5,
        ny in 1usize..5,
        seed in prop::collection::vec(-10.0f64..10.0, 64),
    ) {
        let mesh = Arc::new(grid(nx, ny, 1.0, 1.0, 1.0).unwrap());
        let values: Vec<f64> = (0..mesh.n_faces()).map(|f| seed[f % seed.len()]).collect();
        let phi = SurfaceField::from_values("phi", &mesh, DIM_FLUX, values).unwrap();
        let sum = fvc::surface_sum(&phi.mag()).unwrap();

        prop_assert!(sum.internal().iter().all(|&s| s >= 0.0));

        // Every internal face is counted twice, every boundary face once
        let total: f64 = sum.internal().iter().sum();
        let expected: f64 = phi.internal().iter().map(|v| 2.0 * v.abs()).sum::<f64>()
            + phi.boundary().iter().map(|v| v.abs()).sum::<f64>();
        prop_assert!((total - expected).abs() < 1e-9 * expected.max(1.0));
    }
}
