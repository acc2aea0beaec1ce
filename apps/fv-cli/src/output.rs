//! JSON field records written by `fv-cli blend`.

use std::path::Path;

use fv_core::DimensionSet;
use fv_fields::{FieldValue, SurfaceField, VolField};
use fv_schemes::CourantField;
use serde::{Deserialize, Serialize};

use crate::error::{CliError, CliResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldLocation {
    Cell,
    Face,
}

/// One field: cell values (without boundary values) or all face values.
/// Vector values are flattened component by component.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldRecord {
    pub name: String,
    pub dimensions: DimensionSet,
    pub location: FieldLocation,
    pub values: Vec<f64>,
}

impl FieldRecord {
    pub fn from_vol<T: FieldValue>(field: &VolField<T>) -> Self {
        Self {
            name: field.name().to_string(),
            dimensions: field.dimensions(),
            location: FieldLocation::Cell,
            values: field.internal().iter().flat_map(|v| v.components()).collect(),
        }
    }

    pub fn from_surface<T: FieldValue>(field: &SurfaceField<T>) -> Self {
        Self {
            name: field.name().to_string(),
            dimensions: field.dimensions(),
            location: FieldLocation::Face,
            values: field.values().iter().flat_map(|v| v.components()).collect(),
        }
    }

    pub fn from_courant(field: &CourantField) -> Self {
        match field {
            CourantField::Cell(co) => Self::from_vol(co),
            CourantField::Face(co) => Self::from_surface(co),
        }
    }
}

/// Fields evaluated at one time step.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StepRecord {
    pub time_index: u64,
    pub time: f64,
    pub delta_t: f64,
    pub fields: Vec<FieldRecord>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BlendReport {
    pub scheme: String,
    pub steps: Vec<StepRecord>,
}

impl BlendReport {
    /// Pretty JSON to `path`, or to stdout when no path is given.
    pub fn write(&self, path: Option<&Path>) -> CliResult<()> {
        let json = serde_json::to_string_pretty(self)?;
        match path {
            Some(path) => std::fs::write(path, json).map_err(|source| CliError::OutputWrite {
                path: path.to_path_buf(),
                source,
            }),
            None => {
                println!("{json}");
                Ok(())
            }
        }
    }
}
