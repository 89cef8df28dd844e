//! Square lattice with 8-connected stick-check and cardinal movement.

use smallvec::SmallVec;
use soot_core::{Coord, Offset};

use crate::topology::Topology;

/// Movement offsets. Cardinal only — see the type-level docs.
const MOVEMENT: [Offset; 4] = [
    Offset::new(-1, 0), // north
    Offset::new(0, -1), // west
    Offset::new(1, 0),  // south
    Offset::new(0, 1),  // east
];

/// Stick-check offsets: the full Moore neighborhood, row-major order.
const STICK: [Offset; 8] = [
    Offset::new(-1, -1),
    Offset::new(-1, 0),
    Offset::new(-1, 1),
    Offset::new(0, -1),
    Offset::new(0, 1),
    Offset::new(1, -1),
    Offset::new(1, 0),
    Offset::new(1, 1),
];

/// Square lattice, 8-connected stick-check, cardinal movement.
///
/// Walkers diffuse along the four cardinal offsets only; diagonal moves
/// never occur. Only the stick-check reaches across all eight
/// neighbors. The asymmetry is part of the model's contract: aggregates
/// glue on diagonal contact they could never step along, which grows
/// visibly looser clusters than [`Square4`](crate::Square4).
///
/// # Examples
///
/// ```
/// use soot_core::Coord;
/// use soot_space::{Square8, Topology};
///
/// let topo = Square8::new();
/// assert_eq!(topo.movement_offsets(Coord::new(0, 0)).len(), 4);
/// assert_eq!(topo.stick_offsets(Coord::new(0, 0)).len(), 8);
/// ```
#[derive(Clone, Copy, Debug, Default)]
pub struct Square8;

impl Square8 {
    /// Create the 8-connected topology.
    pub fn new() -> Self {
        Self
    }
}

impl Topology for Square8 {
    fn name(&self) -> &'static str {
        "square8"
    }

    fn movement_offsets(&self, _position: Coord) -> SmallVec<[Offset; 8]> {
        SmallVec::from_slice(&MOVEMENT)
    }

    fn stick_offsets(&self, _position: Coord) -> SmallVec<[Offset; 8]> {
        SmallVec::from_slice(&STICK)
    }
}
