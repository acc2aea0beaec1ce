//! fv-core: stable foundation for the finite-volume toolbox.
//!
//! Contains:
//! - dimensions (run-time dimension sets + named constants)
//! - dimensioned (values tagged with dimensions)
//! - units (uom SI types + constructors)
//! - numeric (Real, Vector, Tensor + tolerances + float helpers)
//! - time (shared simulation clock)
//! - ids (stable compact IDs for mesh objects)
//! - error (shared error types)

pub mod dimensioned;
pub mod dimensions;
pub mod error;
pub mod ids;
pub mod numeric;
pub mod time;
pub mod units;

// Re-exports: nice ergonomics for downstream crates
pub use dimensioned::{Dimensioned, DimensionedScalar};
pub use dimensions::*;
pub use error::{FvError, FvResult};
pub use ids::*;
pub use numeric::*;
pub use time::{RunTime, TimeState};
