//! Case files: a block mesh, a uniform flow and a transported cell field.

use std::path::Path;
use std::sync::Arc;

use fv_core::units::s;
use fv_core::{DIM_DENSITY, DIM_FLUX, DIM_MASS_FLUX, DIMLESS, RunTime, Vector};
use fv_fields::{FvMesh, PatchKind, Shared, SurfaceField, VolField};
use fv_mesh::grid;
use fv_schemes::{InterpolationScheme, SchemeContext, SchemeRegistry, SchemesDict};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::error::{CliError, CliResult};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MeshSpec {
    pub nx: usize,
    pub ny: usize,
    pub lx: f64,
    pub ly: f64,
    #[serde(default = "unit")]
    pub depth: f64,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FluxKind {
    #[default]
    Volumetric,
    Mass,
}

/// Face flux of a uniform velocity, `U · Sf` (times the density for a mass flux).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FluxSpec {
    #[serde(default = "default_flux_name")]
    pub name: String,
    #[serde(default)]
    pub kind: FluxKind,
    pub velocity: [f64; 3],
}

/// Cell field `value + gradient · x`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldSpec {
    pub name: String,
    #[serde(default)]
    pub value: f64,
    #[serde(default)]
    pub gradient: [f64; 3],
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CaseFile {
    pub mesh: MeshSpec,
    pub delta_t: f64,
    /// Factor applied to the time step after every step.
    #[serde(default = "unit")]
    pub delta_t_growth: f64,
    pub flux: FluxSpec,
    #[serde(default)]
    pub density: Option<f64>,
    pub field: FieldSpec,
    /// Term whose scheme is evaluated: a `div_schemes` key such as
    /// `div(phi,T)` or an `interpolation_schemes` key.
    pub scheme: String,
    #[serde(default = "SchemesDict::standard")]
    pub schemes: SchemesDict,
}

fn unit() -> f64 {
    1.0
}

fn default_flux_name() -> String {
    "phi".to_string()
}

impl CaseFile {
    pub fn load(path: &Path) -> CliResult<Self> {
        let text = std::fs::read_to_string(path).map_err(|source| CliError::CaseRead {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_yaml_str(&text)
    }

    pub fn from_yaml_str(text: &str) -> CliResult<Self> {
        let case: Self = serde_yaml::from_str(text)?;
        case.validate()?;
        Ok(case)
    }

    pub fn validate(&self) -> CliResult<()> {
        if !(self.delta_t_growth.is_finite() && self.delta_t_growth > 0.0) {
            return Err(CliError::InvalidCase(format!(
                "delta_t_growth must be positive, got {}",
                self.delta_t_growth
            )));
        }
        match (self.flux.kind, self.density) {
            (FluxKind::Mass, None) => Err(CliError::InvalidCase(
                "a mass flux needs a density".to_string(),
            )),
            (_, Some(rho)) if !(rho.is_finite() && rho > 0.0) => Err(CliError::InvalidCase(format!(
                "density must be positive, got {rho}"
            ))),
            _ => Ok(()),
        }
    }

    /// Mesh, registered flux (and density) and the transported field.
    pub fn build(&self) -> CliResult<Case> {
        let geometry = Arc::new(grid(
            self.mesh.nx,
            self.mesh.ny,
            self.mesh.lx,
            self.mesh.ly,
            self.mesh.depth,
        )?);
        let time = Arc::new(RunTime::from_seconds(self.delta_t)?);
        let mesh = Arc::new(FvMesh::new(Arc::clone(&geometry), time));

        let velocity = Vector::from(self.flux.velocity);
        let (dimensions, scale) = match self.flux.kind {
            FluxKind::Volumetric => (DIM_FLUX, 1.0),
            FluxKind::Mass => (DIM_MASS_FLUX, self.density.unwrap_or(1.0)),
        };
        let values = geometry
            .face_areas()
            .iter()
            .map(|sf| scale * velocity.dot(sf))
            .collect();
        let flux = mesh.registry().register(SurfaceField::from_values(
            self.flux.name.clone(),
            &geometry,
            dimensions,
            values,
        )?);

        if let Some(rho) = self.density {
            mesh.registry().register(VolField::uniform(
                fv_schemes::DENSITY_FIELD_NAME,
                &geometry,
                DIM_DENSITY,
                rho,
                PatchKind::ZeroGradient,
            ));
        }

        let gradient = Vector::from(self.field.gradient);
        let value = self.field.value;
        let field = VolField::from_cell_centres(self.field.name.clone(), &geometry, DIMLESS, |c| {
            value + gradient.dot(c)
        });

        info!(
            cells = geometry.n_cells(),
            faces = geometry.n_faces(),
            flux = %self.flux.name,
            "case built"
        );
        Ok(Case {
            ctx: SchemeContext::new(mesh, Arc::new(self.schemes.clone())),
            flux,
            field,
            scheme_key: self.scheme.clone(),
            delta_t_growth: self.delta_t_growth,
        })
    }
}

/// A built case, ready to construct and evaluate its scheme.
pub struct Case {
    pub ctx: SchemeContext,
    pub flux: Shared<SurfaceField<f64>>,
    pub field: VolField<f64>,
    pub scheme_key: String,
    pub delta_t_growth: f64,
}

impl Case {
    /// The configured scheme; `div(...)` keys bind the case flux.
    pub fn scheme(&self, registry: &SchemeRegistry<f64>) -> CliResult<Box<dyn InterpolationScheme<f64>>> {
        let scheme = if self.scheme_key.starts_with("div(") {
            self.ctx
                .convection_scheme(registry, &self.scheme_key, Arc::clone(&self.flux))?
        } else {
            self.ctx.interpolation_scheme(registry, &self.scheme_key)?
        };
        debug!(key = %self.scheme_key, scheme = scheme.name(), "scheme constructed");
        Ok(scheme)
    }

    /// Move to the next time step, growing the step size.
    pub fn advance(&self) -> CliResult<()> {
        let time = self.ctx.mesh().time();
        time.advance();
        if self.delta_t_growth != 1.0 {
            time.set_delta_t(s(time.delta_t_value() * self.delta_t_growth))?;
        }
        Ok(())
    }
}
