//! Immutable by-value grid exports.

use soot_core::{CellState, Coord};

/// A frozen copy of the grid at one instant.
///
/// Cells carry the wire encoding (`0` Empty, `1` Walker, `2` Stuck) in
/// row-major order. Snapshots are what renderers receive at iteration
/// boundaries and what the analyzers consume at termination; they never
/// reference the live lattice.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GridSnapshot {
    side: usize,
    cells: Vec<u8>,
}

impl GridSnapshot {
    pub(crate) fn new(side: usize, cells: Vec<u8>) -> Self {
        debug_assert_eq!(cells.len(), side * side);
        Self { side, cells }
    }

    /// Side length n.
    pub fn side(&self) -> usize {
        self.side
    }

    /// Raw row-major wire bytes.
    pub fn cells(&self) -> &[u8] {
        &self.cells
    }

    /// Decoded state at `coord`, or `None` outside `[0, side)²`.
    pub fn get(&self, coord: Coord) -> Option<CellState> {
        if !coord.in_bounds(self.side) {
            return None;
        }
        let i = coord.x as usize * self.side + coord.y as usize;
        CellState::from_u8(self.cells[i])
    }

    /// Number of cells in `state`.
    pub fn occupied_count(&self, state: CellState) -> usize {
        let wire = state.as_u8();
        self.cells.iter().filter(|&&c| c == wire).count()
    }
}
