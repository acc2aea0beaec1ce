//! What a scheme sees of the surrounding case while being built and evaluated.

use std::sync::Arc;

use fv_fields::{FieldValue, FvMesh, Interpolable, Shared, SurfaceField, VolField};
use fv_mesh::Mesh;
use tracing::trace;

use crate::config::SchemesDict;
use crate::error::{SchemeError, SchemeResult};
use crate::gradient::GaussGradient;
use crate::registry::SchemeRegistry;
use crate::stream::StreamLocation;
use crate::traits::InterpolationScheme;

/// Name of the density field looked up when a mass flux has to be converted
/// to a volumetric flux and no density was injected.
pub const DENSITY_FIELD_NAME: &str = "rho";

/// Maximum depth of nested dictionary lookups during construction.
pub const MAX_NESTING_DEPTH: usize = 32;

/// Mesh, schemes dictionary and scalar scheme registry shared by all schemes
/// of a case.
///
/// Cloning is cheap; schemes keep a clone for use at evaluation time.
#[derive(Clone)]
pub struct SchemeContext {
    mesh: Arc<FvMesh>,
    schemes: Arc<SchemesDict>,
    scalar_registry: Arc<SchemeRegistry<f64>>,
    density: Option<Shared<VolField<f64>>>,
    depth: usize,
}

impl SchemeContext {
    pub fn new(mesh: Arc<FvMesh>, schemes: Arc<SchemesDict>) -> Self {
        Self {
            mesh,
            schemes,
            scalar_registry: Arc::new(SchemeRegistry::standard()),
            density: None,
            depth: 0,
        }
    }

    /// Registry used for scalar helper interpolations (`interpolate(Co)`, `interpolate(rho)`).
    pub fn with_scalar_registry(mut self, registry: Arc<SchemeRegistry<f64>>) -> Self {
        self.scalar_registry = registry;
        self
    }

    /// Inject the density used to convert mass fluxes.
    pub fn with_density(mut self, density: Shared<VolField<f64>>) -> Self {
        self.density = Some(density);
        self
    }

    pub fn mesh(&self) -> &Arc<FvMesh> {
        &self.mesh
    }

    pub fn geometry(&self) -> &Arc<Mesh> {
        self.mesh.geometry()
    }

    pub fn schemes(&self) -> &SchemesDict {
        &self.schemes
    }

    pub fn scalar_registry(&self) -> &Arc<SchemeRegistry<f64>> {
        &self.scalar_registry
    }

    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Face flux registered under `name`.
    pub fn lookup_flux(&self, name: &str) -> SchemeResult<Shared<SurfaceField<f64>>> {
        Ok(self.mesh.registry().lookup::<SurfaceField<f64>>(name)?)
    }

    /// The injected density, else the registered field named `rho`.
    pub fn density(&self) -> SchemeResult<Shared<VolField<f64>>> {
        match &self.density {
            Some(rho) => Ok(Arc::clone(rho)),
            None => Ok(self
                .mesh
                .registry()
                .lookup::<VolField<f64>>(DENSITY_FIELD_NAME)?),
        }
    }

    /// Interpolation scheme for `key` from `interpolation_schemes`.
    pub fn interpolation_scheme<T: FieldValue>(
        &self,
        registry: &SchemeRegistry<T>,
        key: &str,
    ) -> SchemeResult<Box<dyn InterpolationScheme<T>>> {
        let nested = self.nested(key)?;
        let mut stream = self.schemes.interpolation_entry(key)?;
        trace!(key, depth = nested.depth, "resolving interpolation entry");
        let scheme = registry.resolve(&nested, &mut stream)?;
        stream.expect_end()?;
        Ok(scheme)
    }

    /// Scalar interpolation scheme for `key`, e.g. `interpolate(Co)`.
    pub fn scalar_interpolation_scheme(
        &self,
        key: &str,
    ) -> SchemeResult<Box<dyn InterpolationScheme<f64>>> {
        let registry = Arc::clone(&self.scalar_registry);
        self.interpolation_scheme(&registry, key)
    }

    /// Gradient scheme for `key` from `grad_schemes`.
    pub fn gradient_scheme<T: Interpolable>(
        &self,
        registry: &SchemeRegistry<T>,
        key: &str,
    ) -> SchemeResult<GaussGradient<T>> {
        let nested = self.nested(key)?;
        let mut stream = self.schemes.grad_entry(key)?;
        let scheme = GaussGradient::from_stream(&nested, registry, &mut stream)?;
        stream.expect_end()?;
        Ok(scheme)
    }

    /// Interpolation part of a `div_schemes` entry, `Gauss <interpolation-spec>`,
    /// built with the face flux bound.
    pub fn convection_scheme<T: FieldValue>(
        &self,
        registry: &SchemeRegistry<T>,
        key: &str,
        flux: Shared<SurfaceField<f64>>,
    ) -> SchemeResult<Box<dyn InterpolationScheme<T>>> {
        let nested = self.nested(key)?;
        let mut stream = self.schemes.div_entry(key)?;
        let location = stream.location();
        let kind = stream.read_word("divergence scheme")?;
        if kind != "Gauss" {
            return Err(SchemeError::Configuration {
                message: format!("unknown divergence scheme '{kind}'; valid schemes are: Gauss"),
                location,
            });
        }
        let scheme = registry.resolve_with_flux(&nested, flux, &mut stream)?;
        stream.expect_end()?;
        Ok(scheme)
    }

    fn nested(&self, key: &str) -> SchemeResult<Self> {
        if self.depth >= MAX_NESTING_DEPTH {
            return Err(SchemeError::Configuration {
                message: format!(
                    "scheme entries nested deeper than {MAX_NESTING_DEPTH} levels; \
                     '{key}' probably refers to itself"
                ),
                location: StreamLocation {
                    entry: key.to_string(),
                    column: 1,
                },
            });
        }
        let mut nested = self.clone();
        nested.depth += 1;
        Ok(nested)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fv_core::{DIM_DENSITY, DIM_FLUX, RunTime};
    use fv_fields::{PatchKind, shared};
    use fv_mesh::grid;

    fn context(dict: SchemesDict) -> SchemeContext {
        let time = Arc::new(RunTime::from_seconds(0.1).unwrap());
        let mesh = Arc::new(FvMesh::new(grid(2, 1, 2.0, 1.0, 1.0).unwrap(), time));
        SchemeContext::new(mesh, Arc::new(dict))
    }

    #[test]
    fn density_prefers_injected_field() {
        let ctx = context(SchemesDict::standard());
        assert!(matches!(ctx.density(), Err(SchemeError::Lookup { .. })));

        let geometry = Arc::clone(ctx.geometry());
        ctx.mesh()
            .registry()
            .register(VolField::uniform("rho", &geometry, DIM_DENSITY, 1.0, PatchKind::Calculated));
        let registered = ctx.density().unwrap();

        let injected = shared(VolField::uniform("rhoIn", &geometry, DIM_DENSITY, 2.0, PatchKind::Calculated));
        let ctx = ctx.with_density(Arc::clone(&injected));
        let rho = ctx.density().unwrap();
        assert!(Arc::ptr_eq(&rho, &injected));
        assert!(!Arc::ptr_eq(&rho, &registered));
    }

    #[test]
    fn flux_lookup() {
        let ctx = context(SchemesDict::standard());
        let geometry = Arc::clone(ctx.geometry());
        ctx.mesh()
            .registry()
            .register(SurfaceField::uniform("phi", &geometry, DIM_FLUX, 1.0));
        assert!(ctx.lookup_flux("phi").is_ok());
        assert!(matches!(ctx.lookup_flux("phiX"), Err(SchemeError::Lookup { .. })));
    }

    #[test]
    fn self_referencing_entry_is_rejected() {
        let dict = SchemesDict::standard().with_interpolation(
            "interpolate(Co)",
            "cellCoBlended 0 linear 1 linear phi",
        );
        let ctx = context(dict);
        let geometry = Arc::clone(ctx.geometry());
        ctx.mesh()
            .registry()
            .register(SurfaceField::uniform("phi", &geometry, DIM_FLUX, 1.0));

        match ctx.scalar_interpolation_scheme("interpolate(Co)") {
            Err(SchemeError::Configuration { message, .. }) => {
                assert!(message.contains("nested"));
            }
            Err(other) => panic!("unexpected error {other}"),
            Ok(_) => panic!("expected nesting error"),
        }
    }

    #[test]
    fn convection_scheme_binds_flux() {
        let dict = SchemesDict::standard()
            .with_div("div(phi,T)", "Gauss upwind")
            .with_div("div(phi,U)", "bounded Gauss upwind");
        let ctx = context(dict);
        let geometry = Arc::clone(ctx.geometry());
        let phi = shared(SurfaceField::uniform("phi", &geometry, DIM_FLUX, 1.0));
        let registry = SchemeRegistry::<f64>::standard();

        let scheme = ctx
            .convection_scheme(&registry, "div(phi,T)", Arc::clone(&phi))
            .unwrap();
        assert_eq!(scheme.name(), "upwind");

        assert!(matches!(
            ctx.convection_scheme(&registry, "div(phi,U)", phi),
            Err(SchemeError::Configuration { .. })
        ));
    }
}
