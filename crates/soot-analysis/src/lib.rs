//! Fractal-dimension estimators for finished aggregation grids.
//!
//! Both estimators take a finished [`GridSnapshot`](soot_grid::GridSnapshot)
//! and an occupied-state marker; they never touch a live engine. [`box_count`] partitions the grid into power-of-two
//! blocks and fits occupied-block counts against scale;
//! [`mass_radius`] sweeps radius checkpoints around a center and fits
//! enclosed mass against radius. Degenerate inputs (empty aggregates,
//! collapsed ranges, scales with nothing to count) surface as
//! [`AnalysisError`] values rather than NaN slopes.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod box_count;
pub mod error;
pub mod mass_radius;

mod fit;

pub use box_count::{box_count, BoxCountResult};
pub use error::AnalysisError;
pub use mass_radius::{mass_radius, MassRadiusResult};
