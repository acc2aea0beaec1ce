//! fv-fields: field containers for the finite-volume toolbox.
//!
//! Provides:
//! - Volume (cell-centred) and surface (face-centred) fields with dimensions
//! - Boundary patch kinds and boundary correction
//! - `FvMesh`: mesh + run time + object registry of shared fields
//! - Explicit face-to-cell reductions (`fvc`)
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use fv_core::DIM_FLUX;
//! use fv_fields::{SurfaceField, fvc};
//! use fv_mesh::grid;
//!
//! let mesh = Arc::new(grid(2, 1, 2.0, 1.0, 1.0).unwrap());
//! let phi = SurfaceField::uniform("phi", &mesh, DIM_FLUX, 1.0);
//! let sum = fvc::surface_sum(&phi.mag()).unwrap();
//! assert_eq!(sum.internal(), &[4.0, 4.0]);
//! ```

pub mod boundary;
pub mod error;
pub mod fvmesh;
pub mod fvc;
pub mod par;
pub mod registry;
pub mod surface_field;
pub mod value;
pub mod vol_field;

// Re-exports
pub use boundary::PatchKind;
pub use error::{FieldError, FieldResult};
pub use fvmesh::FvMesh;
pub use registry::{ObjectRegistry, RegisteredField, RegistryEntry, Shared, read, shared, write};
pub use surface_field::SurfaceField;
pub use value::{FieldValue, Interpolable};
pub use vol_field::VolField;
