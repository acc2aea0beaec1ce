//! fv-mesh: mesh layer for the finite-volume toolbox.
//!
//! Provides:
//! - Core mesh data structures (Mesh, Patch)
//! - Incremental mesh builder with validation
//! - Structured rectangular grids for tests and small cases
//!
//! # Example
//!
//! ```
//! use fv_core::Vector;
//! use fv_mesh::MeshBuilder;
//!
//! let mut builder = MeshBuilder::new();
//! let c0 = builder.add_cell(Vector::new(0.5, 0.5, 0.5), 1.0);
//! let c1 = builder.add_cell(Vector::new(1.5, 0.5, 0.5), 1.0);
//! builder.add_internal_face(c0, c1, Vector::new(1.0, 0.5, 0.5), Vector::new(1.0, 0.0, 0.0));
//! let mesh = builder.build().unwrap();
//!
//! assert_eq!(mesh.n_cells(), 2);
//! assert_eq!(mesh.n_internal_faces(), 1);
//! ```

pub mod builder;
pub mod error;
pub mod mesh;
pub mod structured;
pub(crate) mod validate;

// Re-exports for ergonomics
pub use builder::MeshBuilder;
pub use error::MeshError;
pub use mesh::{Mesh, Patch};
pub use structured::grid;
