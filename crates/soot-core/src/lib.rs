//! Core types for the Soot DLA simulation workspace.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! the fundamental vocabulary shared by the lattice, the topologies,
//! the engine, and the analyzers: cell states, walkers, and toroidal
//! coordinates.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod cell;
pub mod coord;
pub mod walker;

pub use cell::CellState;
pub use coord::{wrap_axis, Coord, Offset};
pub use walker::{Walker, WalkerId, WalkerStatus};
