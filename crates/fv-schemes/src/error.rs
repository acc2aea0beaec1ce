//! Error types for scheme construction and evaluation.

use fv_core::DimensionSet;
use fv_fields::FieldError;
use thiserror::Error;

use crate::stream::StreamLocation;

/// Errors raised while building or evaluating interpolation schemes.
///
/// All of them are fatal to the run: a scheme is either fully constructed or
/// not at all, and evaluation never falls back to another scheme.
#[derive(Error, Debug)]
pub enum SchemeError {
    /// Malformed scheme entry, unknown scheme name or invalid parameter.
    #[error("Configuration error at {location}: {message}")]
    Configuration {
        message: String,
        location: StreamLocation,
    },

    #[error("Dimensional consistency error: {what} has dimensions {dimensions}")]
    DimensionalConsistency {
        what: String,
        dimensions: DimensionSet,
    },

    /// A named field or dictionary entry does not exist.
    #[error("Lookup error: {kind} '{name}' not found")]
    Lookup { kind: &'static str, name: String },

    #[error("Not supported: {scheme} does not provide {operation}")]
    NotSupported {
        scheme: String,
        operation: &'static str,
    },

    #[error("Field error: {0}")]
    Field(FieldError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

pub type SchemeResult<T> = Result<T, SchemeError>;

impl From<FieldError> for SchemeError {
    fn from(e: FieldError) -> Self {
        match e {
            FieldError::NotFound { kind, name } => SchemeError::Lookup { kind, name },
            other => SchemeError::Field(other),
        }
    }
}

impl From<fv_core::FvError> for SchemeError {
    fn from(e: fv_core::FvError) -> Self {
        SchemeError::Field(FieldError::Core(e))
    }
}
