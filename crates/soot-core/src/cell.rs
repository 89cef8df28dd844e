//! Lattice cell states and their wire encoding.

use std::fmt;

/// State of a single lattice cell.
///
/// Snapshots encode cells as the bytes `0`/`1`/`2` in this order, and
/// that encoding is load-bearing for downstream consumers (renderers,
/// analyzers), so the discriminants are fixed.
///
/// Invariant: a cell that reaches [`CellState::Stuck`] never changes
/// again for the rest of the run.
///
/// # Examples
///
/// ```
/// use soot_core::CellState;
///
/// assert_eq!(CellState::Stuck.as_u8(), 2);
/// assert_eq!(CellState::from_u8(1), Some(CellState::Walker));
/// assert_eq!(CellState::from_u8(7), None);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum CellState {
    /// Nothing occupies the cell.
    #[default]
    Empty = 0,
    /// A mobile walker currently occupies the cell.
    ///
    /// The grid records cell state, not walker multiplicity: two walkers
    /// may transiently share one `Walker` cell.
    Walker = 1,
    /// The cell is part of the aggregate. Permanent.
    Stuck = 2,
}

impl CellState {
    /// Wire value of this state (`0`, `1`, or `2`).
    pub const fn as_u8(self) -> u8 {
        self as u8
    }

    /// Decode a wire value back into a state.
    pub const fn from_u8(value: u8) -> Option<Self> {
        match value {
            0 => Some(Self::Empty),
            1 => Some(Self::Walker),
            2 => Some(Self::Stuck),
            _ => None,
        }
    }

    /// True for [`CellState::Stuck`].
    pub const fn is_stuck(self) -> bool {
        matches!(self, Self::Stuck)
    }
}

impl fmt::Display for CellState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Empty => "empty",
            Self::Walker => "walker",
            Self::Stuck => "stuck",
        };
        write!(f, "{name}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wire_values_are_fixed() {
        assert_eq!(CellState::Empty.as_u8(), 0);
        assert_eq!(CellState::Walker.as_u8(), 1);
        assert_eq!(CellState::Stuck.as_u8(), 2);
    }

    #[test]
    fn from_u8_round_trips_known_values() {
        for state in [CellState::Empty, CellState::Walker, CellState::Stuck] {
            assert_eq!(CellState::from_u8(state.as_u8()), Some(state));
        }
    }

    #[test]
    fn from_u8_rejects_unknown_values() {
        assert_eq!(CellState::from_u8(3), None);
        assert_eq!(CellState::from_u8(255), None);
    }

    #[test]
    fn default_is_empty() {
        assert_eq!(CellState::default(), CellState::Empty);
    }

    #[test]
    fn only_stuck_is_stuck() {
        assert!(CellState::Stuck.is_stuck());
        assert!(!CellState::Empty.is_stuck());
        assert!(!CellState::Walker.is_stuck());
    }
}
