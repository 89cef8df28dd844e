//! The core `Topology` trait.

use smallvec::SmallVec;
use soot_core::{Coord, Offset};

/// Neighbor strategy for a lattice walk.
///
/// A topology answers two questions about any position: along which
/// offsets a mobile walker may be moved, and across which offsets the
/// walker probes for contact with the aggregate. The two sets may
/// differ — [`Square8`](crate::Square8) moves along 4 offsets but
/// sticks across 8.
///
/// Offsets depend on the position only for row-parity topologies
/// ([`Tri6`](crate::Tri6)); the square backends ignore it.
///
/// The `SmallVec<[Offset; 8]>` return type keeps every backend
/// allocation-free (8 covers the largest stick set).
///
/// # Thread Safety
///
/// `Send + Sync` so a boxed topology can travel inside a run
/// configuration handed to a worker thread. All backends are
/// zero-sized, so this costs nothing.
pub trait Topology: Send + Sync {
    /// Short lowercase name for logs and diagnostics.
    fn name(&self) -> &'static str;

    /// Offsets a walker at `position` may be moved along.
    ///
    /// The engine draws one element uniformly at random, once per
    /// mobile walker per iteration.
    fn movement_offsets(&self, position: Coord) -> SmallVec<[Offset; 8]>;

    /// Offsets probed when testing whether `position` touches the
    /// aggregate. A walker glues as soon as any probed cell is stuck.
    fn stick_offsets(&self, position: Coord) -> SmallVec<[Offset; 8]>;
}
