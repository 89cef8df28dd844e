//! Toroidal lattice coordinates and movement offsets.

use std::fmt;

/// Wrap a single axis value into `[0, len)`.
///
/// Handles arbitrarily negative inputs: `%` in Rust truncates toward
/// zero, so the result is re-biased before the second reduction.
pub fn wrap_axis(value: i32, len: usize) -> i32 {
    let n = len as i32;
    ((value % n) + n) % n
}

/// A relative (dx, dy) displacement on the lattice.
///
/// `dx` moves along rows, `dy` along columns. Topologies expose fixed
/// tables of these; the engine applies one per walker per iteration.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Offset {
    /// Row displacement.
    pub dx: i32,
    /// Column displacement.
    pub dy: i32,
}

impl Offset {
    /// Construct an offset. `const` so topology tables can be `const`.
    pub const fn new(dx: i32, dy: i32) -> Self {
        Self { dx, dy }
    }
}

impl fmt::Display for Offset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.dx, self.dy)
    }
}

/// A position on an n×n toroidal lattice.
///
/// `x` is the row index, `y` the column index. Positions produced by
/// [`Coord::step`] always lie in `[0, side)²`; freshly constructed
/// coordinates (e.g. caller-supplied seeds) may not, and are checked
/// with [`Coord::in_bounds`] at configuration time.
///
/// # Examples
///
/// ```
/// use soot_core::{Coord, Offset};
///
/// let c = Coord::new(0, 0);
/// let up = c.step(Offset::new(-1, 0), 8);
/// assert_eq!(up, Coord::new(7, 0));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Coord {
    /// Row index.
    pub x: i32,
    /// Column index.
    pub y: i32,
}

impl Coord {
    /// Construct a coordinate.
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// True when both axes lie in `[0, side)`.
    pub fn in_bounds(self, side: usize) -> bool {
        let n = side as i32;
        (0..n).contains(&self.x) && (0..n).contains(&self.y)
    }

    /// Apply an offset with toroidal wrap on both axes.
    pub fn step(self, offset: Offset, side: usize) -> Self {
        Self {
            x: wrap_axis(self.x + offset.dx, side),
            y: wrap_axis(self.y + offset.dy, side),
        }
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl From<(i32, i32)> for Coord {
    fn from((x, y): (i32, i32)) -> Self {
        Self { x, y }
    }
}
