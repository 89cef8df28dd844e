//! Grid-specific error types.

use std::error::Error;
use std::fmt;

use soot_core::Coord;

/// Errors that can occur while building or seeding a lattice.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GridError {
    /// Lattice side is zero.
    EmptyLattice,
    /// Lattice side exceeds the i32 coordinate range.
    SideTooLarge {
        /// The requested side.
        side: usize,
        /// Maximum supported side.
        max: usize,
    },
    /// A sticky seed lies outside `[0, side)²`.
    ///
    /// Seeds are rejected rather than wrapped: an out-of-range seed is a
    /// caller bug, and silent wraparound would alias two distinct inputs
    /// onto one cell.
    SeedOutOfBounds {
        /// The offending seed coordinate.
        seed: Coord,
        /// The lattice side the seed was checked against.
        side: usize,
    },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyLattice => write!(f, "lattice side must be at least 1"),
            Self::SideTooLarge { side, max } => {
                write!(f, "lattice side {side} exceeds maximum {max}")
            }
            Self::SeedOutOfBounds { seed, side } => {
                write!(f, "sticky seed {seed} outside [0, {side})^2")
            }
        }
    }
}

impl Error for GridError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_messages() {
        assert_eq!(
            GridError::EmptyLattice.to_string(),
            "lattice side must be at least 1"
        );
        assert_eq!(
            GridError::SeedOutOfBounds {
                seed: Coord::new(9, 0),
                side: 8,
            }
            .to_string(),
            "sticky seed (9, 0) outside [0, 8)^2"
        );
    }
}
