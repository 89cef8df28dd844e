//! Triangular lattice via row-parity offset tables.

use smallvec::SmallVec;
use soot_core::{Coord, Offset};

use crate::topology::Topology;

/// Offsets for even rows (`x % 2 == 0`).
const EVEN_ROW: [Offset; 6] = [
    Offset::new(0, 1),   // east
    Offset::new(-1, 0),  // north-east
    Offset::new(-1, -1), // north-west
    Offset::new(0, -1),  // west
    Offset::new(1, -1),  // south-west
    Offset::new(1, 0),   // south-east
];

/// Offsets for odd rows (`x % 2 == 1`).
const ODD_ROW: [Offset; 6] = [
    Offset::new(0, 1),  // east
    Offset::new(-1, 1), // north-east
    Offset::new(-1, 0), // north-west
    Offset::new(0, -1), // west
    Offset::new(1, 0),  // south-west
    Offset::new(1, 1),  // south-east
];

/// Triangular lattice, 6-connected.
///
/// A triangular lattice is embedded in the square grid by shifting odd
/// rows half a cell: each cell then has six neighbors, and the offset
/// table depends on the parity of the row coordinate. Movement and
/// stick-check use the same parity-selected table.
///
/// Adjacency is symmetric between consecutive rows. On a torus this
/// carries over only if the side is even; with an odd side the parity
/// pattern breaks across the row wrap seam and adjacency there is
/// one-sided. Runs on odd sides still terminate, the lattice is just
/// not a clean triangulation at the seam.
///
/// # Examples
///
/// ```
/// use soot_core::Coord;
/// use soot_space::{Topology, Tri6};
///
/// let topo = Tri6::new();
/// let even = topo.movement_offsets(Coord::new(2, 5));
/// let odd = topo.movement_offsets(Coord::new(3, 5));
/// assert_eq!(even.len(), 6);
/// assert_eq!(odd.len(), 6);
/// assert_ne!(even, odd);
/// ```
#[derive(Clone, Copy, Debug, Default)]
pub struct Tri6;

impl Tri6 {
    /// Create the triangular topology.
    pub fn new() -> Self {
        Self
    }

    fn table(position: Coord) -> &'static [Offset; 6] {
        if position.x.rem_euclid(2) == 0 {
            &EVEN_ROW
        } else {
            &ODD_ROW
        }
    }
}

impl Topology for Tri6 {
    fn name(&self) -> &'static str {
        "tri6"
    }

    fn movement_offsets(&self, position: Coord) -> SmallVec<[Offset; 8]> {
        SmallVec::from_slice(Self::table(position))
    }

    fn stick_offsets(&self, position: Coord) -> SmallVec<[Offset; 8]> {
        SmallVec::from_slice(Self::table(position))
    }
}
