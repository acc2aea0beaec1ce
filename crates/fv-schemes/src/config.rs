//! Schemes dictionary: textual scheme entries keyed by term.

use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{SchemeError, SchemeResult};
use crate::stream::SchemeStream;

/// Key used when a table has no entry for the requested term.
pub const DEFAULT_KEY: &str = "default";

/// Scheme tables, as read from a case file.
///
/// ```yaml
/// interpolation_schemes:
///   default: linear
///   interpolate(Co): localMax
/// grad_schemes:
///   default: Gauss linear
/// div_schemes:
///   div(phi,U): Gauss cellCoBlended 1 linear 10 upwind
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SchemesDict {
    pub interpolation_schemes: BTreeMap<String, String>,
    pub grad_schemes: BTreeMap<String, String>,
    pub div_schemes: BTreeMap<String, String>,
}

impl SchemesDict {
    /// Framework defaults: linear interpolation and Gauss linear gradients.
    pub fn standard() -> Self {
        Self::default()
            .with_interpolation(DEFAULT_KEY, "linear")
            .with_grad(DEFAULT_KEY, "Gauss linear")
    }

    pub fn from_yaml_str(text: &str) -> SchemeResult<Self> {
        Ok(serde_yaml::from_str(text)?)
    }

    pub fn load_yaml(path: &Path) -> SchemeResult<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&text)
    }

    pub fn with_interpolation(mut self, key: impl Into<String>, spec: impl Into<String>) -> Self {
        self.interpolation_schemes.insert(key.into(), spec.into());
        self
    }

    pub fn with_grad(mut self, key: impl Into<String>, spec: impl Into<String>) -> Self {
        self.grad_schemes.insert(key.into(), spec.into());
        self
    }

    pub fn with_div(mut self, key: impl Into<String>, spec: impl Into<String>) -> Self {
        self.div_schemes.insert(key.into(), spec.into());
        self
    }

    pub fn interpolation_entry(&self, key: &str) -> SchemeResult<SchemeStream> {
        entry(&self.interpolation_schemes, "interpolation_schemes", "interpolation scheme", key)
    }

    pub fn grad_entry(&self, key: &str) -> SchemeResult<SchemeStream> {
        entry(&self.grad_schemes, "grad_schemes", "gradient scheme", key)
    }

    pub fn div_entry(&self, key: &str) -> SchemeResult<SchemeStream> {
        entry(&self.div_schemes, "div_schemes", "divergence scheme", key)
    }
}

fn entry(
    table: &BTreeMap<String, String>,
    table_name: &str,
    kind: &'static str,
    key: &str,
) -> SchemeResult<SchemeStream> {
    let text = table
        .get(key)
        .or_else(|| table.get(DEFAULT_KEY))
        .ok_or_else(|| SchemeError::Lookup {
            kind,
            name: key.to_string(),
        })?;
    Ok(SchemeStream::new(format!("{table_name}.{key}"), text))
}
