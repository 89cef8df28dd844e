//! Walker particles and their one-way lifecycle.

use std::fmt;

use crate::coord::Coord;

/// Identifies a walker by its index in the run's population.
///
/// Walkers are created once at placement and never removed, so the
/// index is stable for the whole run.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct WalkerId(pub usize);

impl fmt::Display for WalkerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<usize> for WalkerId {
    fn from(v: usize) -> Self {
        Self(v)
    }
}

/// Lifecycle state of a walker. The transition is one-way.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum WalkerStatus {
    /// Still diffusing across the lattice.
    Mobile,
    /// Glued to the aggregate; position is frozen permanently.
    Stuck,
}

/// A single random-walking particle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Walker {
    /// Stable population index.
    pub id: WalkerId,
    /// Current position, always in `[0, side)²`.
    pub position: Coord,
    /// Mobile until glued, then stuck forever.
    pub status: WalkerStatus,
}

impl Walker {
    /// Create a mobile walker at `position`.
    pub fn new(id: WalkerId, position: Coord) -> Self {
        Self {
            id,
            position,
            status: WalkerStatus::Mobile,
        }
    }

    /// True while the walker still moves.
    pub fn is_mobile(&self) -> bool {
        self.status == WalkerStatus::Mobile
    }

    /// Glue the walker in place. Idempotent; the position never moves
    /// again afterwards.
    pub fn glue(&mut self) {
        self.status = WalkerStatus::Stuck;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_walkers_are_mobile() {
        let w = Walker::new(WalkerId(0), Coord::new(3, 4));
        assert!(w.is_mobile());
        assert_eq!(w.status, WalkerStatus::Mobile);
    }

    #[test]
    fn glue_is_one_way_and_idempotent() {
        let mut w = Walker::new(WalkerId(1), Coord::new(0, 0));
        w.glue();
        assert!(!w.is_mobile());
        w.glue();
        assert_eq!(w.status, WalkerStatus::Stuck);
    }

    #[test]
    fn id_display_is_bare_index() {
        assert_eq!(WalkerId(42).to_string(), "42");
        assert_eq!(WalkerId::from(7), WalkerId(7));
    }
}
