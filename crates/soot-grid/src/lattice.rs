//! The mutable n×n toroidal lattice.

use indexmap::IndexSet;
use soot_core::{CellState, Coord};

use crate::error::GridError;
use crate::snapshot::GridSnapshot;

/// The single mutable grid an aggregation run owns.
///
/// Storage is an exact n×n row-major array; toroidal addressing is the
/// caller's job via [`Coord::step`]. All accessors take in-bounds
/// coordinates — the engine only ever produces wrapped positions, and
/// seeds are validated before any cell changes.
///
/// # Examples
///
/// ```
/// use soot_core::{CellState, Coord};
/// use soot_grid::Lattice;
///
/// let mut lattice = Lattice::new(8)?;
/// lattice.seed_sticky(&[Coord::new(4, 4)])?;
/// assert_eq!(lattice.get(Coord::new(4, 4)), CellState::Stuck);
/// assert_eq!(lattice.count(CellState::Empty), 63);
/// # Ok::<(), soot_grid::GridError>(())
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Lattice {
    side: usize,
    cells: Vec<CellState>,
}

impl Lattice {
    /// Maximum side: coordinates use `i32`, so the side must fit.
    pub const MAX_SIDE: usize = i32::MAX as usize;

    /// Create a lattice with all cells Empty.
    ///
    /// Returns `Err(GridError::EmptyLattice)` for side 0 and
    /// `Err(GridError::SideTooLarge)` past the `i32` coordinate range.
    pub fn new(side: usize) -> Result<Self, GridError> {
        if side == 0 {
            return Err(GridError::EmptyLattice);
        }
        if side > Self::MAX_SIDE {
            return Err(GridError::SideTooLarge {
                side,
                max: Self::MAX_SIDE,
            });
        }
        Ok(Self {
            side,
            cells: vec![CellState::Empty; side * side],
        })
    }

    /// Side length n.
    pub fn side(&self) -> usize {
        self.side
    }

    /// Total number of cells (n²).
    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    fn index(&self, coord: Coord) -> usize {
        debug_assert!(coord.in_bounds(self.side), "coordinate {coord} out of bounds");
        coord.x as usize * self.side + coord.y as usize
    }

    /// State of the cell at `coord`.
    pub fn get(&self, coord: Coord) -> CellState {
        self.cells[self.index(coord)]
    }

    /// Overwrite the cell at `coord`.
    ///
    /// A Stuck cell must never change again; callers guard the
    /// transition and this method asserts it in debug builds.
    pub fn set(&mut self, coord: Coord, state: CellState) {
        let i = self.index(coord);
        debug_assert!(
            !self.cells[i].is_stuck() || state.is_stuck(),
            "stuck cell {coord} must not change"
        );
        self.cells[i] = state;
    }

    /// Mark every seed Stuck.
    ///
    /// Validates the whole list before touching any cell, so a rejected
    /// seed list leaves the lattice unchanged. Duplicate seeds are
    /// idempotent.
    pub fn seed_sticky(&mut self, seeds: &[Coord]) -> Result<(), GridError> {
        for &seed in seeds {
            if !seed.in_bounds(self.side) {
                return Err(GridError::SeedOutOfBounds {
                    seed,
                    side: self.side,
                });
            }
        }
        for &seed in seeds {
            let i = self.index(seed);
            self.cells[i] = CellState::Stuck;
        }
        Ok(())
    }

    /// All currently Empty cells, in row-major order.
    ///
    /// Insertion order is canonical so index-based random draws are
    /// reproducible under a seeded source.
    pub fn empty_cells(&self) -> IndexSet<Coord> {
        let n = self.side as i32;
        let mut empty = IndexSet::with_capacity(self.cells.len());
        for x in 0..n {
            for y in 0..n {
                let coord = Coord::new(x, y);
                if self.get(coord) == CellState::Empty {
                    empty.insert(coord);
                }
            }
        }
        empty
    }

    /// Number of cells currently in `state`.
    pub fn count(&self, state: CellState) -> usize {
        self.cells.iter().filter(|&&c| c == state).count()
    }

    /// Immutable by-value export of the current grid.
    pub fn snapshot(&self) -> GridSnapshot {
        GridSnapshot::new(
            self.side,
            self.cells.iter().map(|c| c.as_u8()).collect(),
        )
    }
}
