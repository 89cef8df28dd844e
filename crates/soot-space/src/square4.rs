//! Square lattice with the 4-connected (cardinal) neighborhood.

use smallvec::SmallVec;
use soot_core::{Coord, Offset};

use crate::topology::Topology;

/// The four cardinal offsets.
const CARDINAL: [Offset; 4] = [
    Offset::new(-1, 0), // north
    Offset::new(0, -1), // west
    Offset::new(1, 0),  // south
    Offset::new(0, 1),  // east
];

/// Square lattice, 4-connected.
///
/// Movement and stick-check both use the four cardinal offsets, so a
/// walker can only glue onto a cell it could also have stepped onto.
///
/// # Examples
///
/// ```
/// use soot_core::Coord;
/// use soot_space::{Square4, Topology};
///
/// let topo = Square4::new();
/// assert_eq!(topo.movement_offsets(Coord::new(3, 3)).len(), 4);
/// assert_eq!(
///     topo.movement_offsets(Coord::new(3, 3)),
///     topo.stick_offsets(Coord::new(3, 3)),
/// );
/// ```
#[derive(Clone, Copy, Debug, Default)]
pub struct Square4;

impl Square4 {
    /// Create the 4-connected topology.
    pub fn new() -> Self {
        Self
    }
}

impl Topology for Square4 {
    fn name(&self) -> &'static str {
        "square4"
    }

    fn movement_offsets(&self, _position: Coord) -> SmallVec<[Offset; 8]> {
        SmallVec::from_slice(&CARDINAL)
    }

    fn stick_offsets(&self, _position: Coord) -> SmallVec<[Offset; 8]> {
        SmallVec::from_slice(&CARDINAL)
    }
}
