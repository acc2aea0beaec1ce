//! Error types for field operations.

use fv_core::{DimensionSet, FvError};
use thiserror::Error;

/// Errors raised by field construction, arithmetic and registry lookups.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FieldError {
    #[error("Dimension mismatch in {op}: {lhs} vs {rhs}")]
    DimensionMismatch {
        op: &'static str,
        lhs: DimensionSet,
        rhs: DimensionSet,
    },

    #[error("Size mismatch for {what}: expected {expected}, got {actual}")]
    SizeMismatch {
        what: &'static str,
        expected: usize,
        actual: usize,
    },

    #[error("Operands of {op} live on different meshes")]
    MeshMismatch { op: &'static str },

    #[error("{kind} '{name}' not found in object registry")]
    NotFound { kind: &'static str, name: String },

    #[error("Object '{name}' is a {actual}, expected {expected}")]
    TypeMismatch {
        name: String,
        expected: &'static str,
        actual: &'static str,
    },

    #[error(transparent)]
    Core(#[from] FvError),
}

pub type FieldResult<T> = Result<T, FieldError>;

#[cfg(test)]
mod tests {
    use super::*;
    use fv_core::{DIM_FLUX, DIM_MASS_FLUX};

    #[test]
    fn error_display() {
        let err = FieldError::DimensionMismatch {
            op: "add",
            lhs: DIM_FLUX,
            rhs: DIM_MASS_FLUX,
        };
        let msg = err.to_string();
        assert!(msg.contains("add"));
        assert!(msg.contains("[0 3 -1 0 0 0 0]"));

        let err = FieldError::NotFound {
            kind: "volScalarField",
            name: "rho".into(),
        };
        assert!(err.to_string().contains("rho"));
    }

    #[test]
    fn error_conversion() {
        let err: FieldError = FvError::InvalidArg { what: "test" }.into();
        assert!(matches!(err, FieldError::Core(FvError::InvalidArg { .. })));
    }
}
