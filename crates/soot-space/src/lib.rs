//! Neighbor topologies for Soot lattice walks.
//!
//! This crate defines the [`Topology`] trait — the strategy through which
//! the aggregation engine asks "where may this walker move?" and "does this
//! walker touch the aggregate?" — along with the three concrete lattice
//! neighborhoods.
//!
//! # Backends
//!
//! - [`Square4`]: square lattice, 4-connected; movement and stick-check
//!   share the cardinal offsets
//! - [`Square8`]: square lattice with 8-connected stick-check but cardinal
//!   movement (the asymmetry is part of the model)
//! - [`Tri6`]: triangular lattice via two row-parity offset tables

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod square4;
pub mod square8;
pub mod topology;
pub mod tri6;

#[cfg(test)]
pub(crate) mod compliance;

pub use square4::Square4;
pub use square8::Square8;
pub use topology::Topology;
pub use tri6::Tri6;
