//! Integration tests for scheme selection from a schemes dictionary.

use std::sync::Arc;

use fv_core::{DIM_FLUX, DIM_LENGTH, DIMLESS, RunTime, Vector};
use fv_fields::{FvMesh, PatchKind, SurfaceField, VolField};
use fv_mesh::grid;
use fv_schemes::{InterpolationScheme, SchemeContext, SchemeError, SchemeRegistry, SchemesDict};

const DICT: &str = r#"
interpolation_schemes:
  default: linear
  interpolate(Co): localMax
  interpolate(U): LUST phi grad(U)
grad_schemes:
  default: Gauss linear
  grad(U): Gauss midPoint
div_schemes:
  div(phi,T): Gauss cellCoBlended 0.5 linearUpwind grad(T) 2 upwind;
  div(phi,U): Gauss fixedBlended 0.25 linear upwind
"#;

fn context(dict: SchemesDict) -> SchemeContext {
    let time = Arc::new(RunTime::from_seconds(0.1).unwrap());
    let mesh = Arc::new(FvMesh::new(grid(4, 3, 2.0, 1.5, 0.1).unwrap(), time));
    let geometry = Arc::clone(mesh.geometry());
    let values = (0..geometry.n_faces()).map(|f| 0.01 * (f as f64 - 5.0)).collect();
    mesh.registry()
        .register(SurfaceField::from_values("phi", &geometry, DIM_FLUX, values).unwrap());
    SchemeContext::new(mesh, Arc::new(dict))
}

#[test]
fn dictionary_from_yaml() {
    let dict = SchemesDict::from_yaml_str(DICT).unwrap();
    assert_eq!(dict.interpolation_schemes["interpolate(Co)"], "localMax");
    assert_eq!(dict.div_schemes.len(), 2);

    // Missing tables default to empty
    let partial = SchemesDict::from_yaml_str("grad_schemes:\n  default: Gauss linear\n").unwrap();
    assert!(partial.interpolation_schemes.is_empty());
    assert!(matches!(
        partial.interpolation_entry("interpolate(U)"),
        Err(SchemeError::Lookup { .. })
    ));
}

#[test]
fn convection_schemes_resolve_with_bound_flux() {
    let ctx = context(SchemesDict::from_yaml_str(DICT).unwrap());
    let phi = ctx.lookup_flux("phi").unwrap();
    let geometry = Arc::clone(ctx.geometry());

    let scalars = SchemeRegistry::<f64>::standard();
    let div_t = ctx
        .convection_scheme(&scalars, "div(phi,T)", Arc::clone(&phi))
        .unwrap();
    assert_eq!(div_t.name(), "cellCoBlended");
    assert!(div_t.corrected());

    let t = VolField::from_cell_centres("T", &geometry, DIMLESS, |c| c.x - 2.0 * c.y);
    let face = div_t.interpolate(&t).unwrap();
    assert_eq!(face.values().len(), geometry.n_faces());
    assert!(face.values().iter().all(|v| v.is_finite()));

    let vectors = SchemeRegistry::<Vector>::standard();
    let div_u = ctx.convection_scheme(&vectors, "div(phi,U)", phi).unwrap();
    assert_eq!(div_u.name(), "fixedBlended");
    let bf = div_u
        .as_blended()
        .unwrap()
        .blending_factor(&VolField::uniform(
            "U",
            &geometry,
            DIM_LENGTH,
            Vector::zeros(),
            PatchKind::ZeroGradient,
        ))
        .unwrap();
    assert!(bf.values().iter().all(|&b| b == 0.25));
}

#[test]
fn interpolation_entries_with_defaults() {
    let ctx = context(SchemesDict::from_yaml_str(DICT).unwrap());
    let vectors = SchemeRegistry::<Vector>::standard();

    let lust = ctx.interpolation_scheme(&vectors, "interpolate(U)").unwrap();
    assert_eq!(lust.name(), "LUST");

    // No entry: the default applies
    let fallback = ctx.scalar_interpolation_scheme("interpolate(k)").unwrap();
    assert_eq!(fallback.name(), "linear");

    let grad = ctx.gradient_scheme(&vectors, "grad(U)").unwrap();
    assert_eq!(grad.interpolation().name(), "midPoint");
}

#[test]
fn schemes_are_reusable_across_time_steps() {
    let ctx = context(SchemesDict::from_yaml_str(DICT).unwrap());
    let phi = ctx.lookup_flux("phi").unwrap();
    let scalars = SchemeRegistry::<f64>::standard();
    let scheme = ctx.convection_scheme(&scalars, "div(phi,T)", phi).unwrap();
    let t = VolField::uniform("T", ctx.geometry(), DIMLESS, 1.0, PatchKind::ZeroGradient);

    let blended = scheme.as_blended().unwrap();
    let before = blended.blending_factor(&t).unwrap();
    ctx.mesh().time().set_delta_t(fv_core::units::s(100.0)).unwrap();
    ctx.mesh().time().advance();
    let after = blended.blending_factor(&t).unwrap();

    for (b, a) in before.values().iter().zip(after.values()) {
        assert!(a <= b);
    }
    assert!(after.values().iter().any(|&a| a == 0.0));
}

#[test]
fn unknown_gradient_scheme_rejected() {
    let dict = SchemesDict::standard().with_grad("grad(T)", "leastSquares");
    let ctx = context(dict);
    let registry = SchemeRegistry::<f64>::standard();
    match registry.resolve_str(&ctx, "interpolate(T)", "linearUpwind phi grad(T)") {
        Err(SchemeError::Configuration { message, location }) => {
            assert!(message.contains("leastSquares"));
            assert_eq!(location.entry, "grad_schemes.grad(T)");
        }
        Err(other) => panic!("unexpected error {other}"),
        Ok(_) => panic!("unknown gradient scheme accepted"),
    }
}
