//! Toroidal lattice storage and seeding for Soot simulations.
//!
//! [`Lattice`] is the single mutable grid an aggregation run owns: an
//! exact n×n cell array with row-major storage, sticky seeding, and
//! Empty-cell enumeration for walker placement. [`GridSnapshot`] is the
//! immutable by-value export consumed by analyzers and renderers.
//!
//! [`patterns`] generates the seed geometries the example drivers use
//! (center nucleus, row segments, circle outlines, filled triangles).

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod lattice;
pub mod patterns;
pub mod snapshot;

pub use error::GridError;
pub use lattice::Lattice;
pub use snapshot::GridSnapshot;
