//! Error type for the command-line driver.

use std::path::PathBuf;

use fv_core::FvError;
use fv_fields::FieldError;
use fv_schemes::SchemeError;

#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("Failed to read case file: {path}")]
    CaseRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Invalid case file: {0}")]
    CaseParse(#[from] serde_yaml::Error),

    #[error("Invalid case: {0}")]
    InvalidCase(String),

    #[error(transparent)]
    Scheme(#[from] SchemeError),

    #[error(transparent)]
    Field(#[from] FieldError),

    #[error(transparent)]
    Core(#[from] FvError),

    #[error("Failed to write output: {path}")]
    OutputWrite {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type CliResult<T> = Result<T, CliError>;
