//! Run configuration, validation, and error types.
//!
//! [`RunConfig`] is the builder-input for constructing an
//! [`AggregationEngine`](crate::AggregationEngine).
//! [`validate()`](RunConfig::validate) checks every structural invariant
//! up front, before any lattice cell is touched, so a rejected
//! configuration never leaves partially-built state behind.

use std::collections::HashSet;
use std::error::Error;
use std::fmt;

use soot_core::Coord;
use soot_grid::{GridError, Lattice};
use soot_space::Topology;

// ── Placement ──────────────────────────────────────────────────────

/// How walkers are scattered over the lattice before the run.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Placement {
    /// Draw positions uniformly, without replacement, from the cells
    /// left Empty after seeding.
    Uniform,
    /// Sample positions from a 2D discrete normal centered on the
    /// lattice midpoint, wrapped modulo the side, retrying occupied
    /// cells up to [`MAX_PLACEMENT_ATTEMPTS`](crate::MAX_PLACEMENT_ATTEMPTS)
    /// times per walker.
    Clustered {
        /// Standard deviation of the sampling distribution, in cells.
        std_dev: f64,
    },
}

impl Default for Placement {
    fn default() -> Self {
        Self::Uniform
    }
}

// ── ConfigError ────────────────────────────────────────────────────

/// Errors detected while validating or building a run.
#[derive(Debug, PartialEq)]
pub enum ConfigError {
    /// Lattice construction or seeding failed.
    Grid(GridError),
    /// Lattice side is zero.
    EmptyLattice,
    /// Lattice side exceeds the i32 coordinate range.
    SideTooLarge {
        /// The requested side.
        side: usize,
        /// Maximum supported side.
        max: usize,
    },
    /// Walker count is zero.
    NoWalkers,
    /// Iteration cap is zero; use `None` for an unbounded run.
    ZeroIterationCap,
    /// Clustered std dev is NaN, infinite, zero, or negative.
    InvalidStdDev {
        /// The invalid value.
        value: f64,
    },
    /// A sticky seed lies outside `[0, side)²`.
    SeedOutOfBounds {
        /// The offending seed.
        seed: Coord,
        /// The side it was checked against.
        side: usize,
    },
    /// More walkers requested than cells left Empty after seeding.
    TooManyWalkers {
        /// Requested walker count.
        requested: usize,
        /// Empty cells available for placement.
        available: usize,
    },
    /// Clustered placement exhausted its retry budget.
    PlacementExhausted {
        /// Walkers successfully placed before exhaustion.
        placed: usize,
        /// Attempts spent on the failing walker.
        attempts: u32,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Grid(e) => write!(f, "grid: {e}"),
            Self::EmptyLattice => write!(f, "lattice side must be at least 1"),
            Self::SideTooLarge { side, max } => {
                write!(f, "lattice side {side} exceeds maximum {max}")
            }
            Self::NoWalkers => write!(f, "walker count must be at least 1"),
            Self::ZeroIterationCap => {
                write!(f, "iteration cap must be at least 1; use None for unbounded")
            }
            Self::InvalidStdDev { value } => {
                write!(f, "placement std dev must be finite and positive, got {value}")
            }
            Self::SeedOutOfBounds { seed, side } => {
                write!(f, "sticky seed {seed} outside [0, {side})^2")
            }
            Self::TooManyWalkers {
                requested,
                available,
            } => {
                write!(
                    f,
                    "{requested} walkers requested but only {available} empty cells available"
                )
            }
            Self::PlacementExhausted { placed, attempts } => {
                write!(
                    f,
                    "clustered placement gave up after {attempts} attempts with {placed} walkers placed"
                )
            }
        }
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Grid(e) => Some(e),
            _ => None,
        }
    }
}

impl From<GridError> for ConfigError {
    fn from(e: GridError) -> Self {
        Self::Grid(e)
    }
}

// ── RunConfig ──────────────────────────────────────────────────────

/// Complete configuration for one aggregation run.
///
/// Passed by value to
/// [`AggregationEngine::new`](crate::AggregationEngine::new), which
/// validates it, builds the lattice, seeds it, and places the walkers
/// using the caller's random source.
pub struct RunConfig {
    /// Lattice side n; the grid is n×n with toroidal wrap.
    pub side: usize,
    /// Number of walkers to place.
    pub walker_count: usize,
    /// Optional pass cap. `None` runs until every walker glues, which
    /// is unbounded when the topology or seeding makes gluing
    /// unreachable.
    pub max_iterations: Option<u64>,
    /// Cells pre-marked Stuck before placement. Duplicates are
    /// idempotent; out-of-range seeds are rejected, not wrapped.
    pub sticky_points: Vec<Coord>,
    /// Walker scattering mode.
    pub placement: Placement,
    /// Neighbor strategy for movement and stick-checks.
    pub topology: Box<dyn Topology>,
}

impl RunConfig {
    /// Validate all structural invariants.
    ///
    /// Pure check — nothing is allocated or mutated. The engine
    /// constructor calls this before building the lattice.
    pub fn validate(&self) -> Result<(), ConfigError> {
        // 1. Side must be positive and fit i32 coordinates.
        if self.side == 0 {
            return Err(ConfigError::EmptyLattice);
        }
        if self.side > Lattice::MAX_SIDE {
            return Err(ConfigError::SideTooLarge {
                side: self.side,
                max: Lattice::MAX_SIDE,
            });
        }
        // 2. At least one walker.
        if self.walker_count == 0 {
            return Err(ConfigError::NoWalkers);
        }
        // 3. Cap, if present, must be at least 1.
        if self.max_iterations == Some(0) {
            return Err(ConfigError::ZeroIterationCap);
        }
        // 4. Clustered std dev must be finite and positive.
        if let Placement::Clustered { std_dev } = self.placement {
            if !std_dev.is_finite() || std_dev <= 0.0 {
                return Err(ConfigError::InvalidStdDev { value: std_dev });
            }
        }
        // 5. Every sticky seed must lie inside the lattice.
        for &seed in &self.sticky_points {
            if !seed.in_bounds(self.side) {
                return Err(ConfigError::SeedOutOfBounds {
                    seed,
                    side: self.side,
                });
            }
        }
        // 6. Walkers must fit in the cells left Empty after seeding.
        //    Applies to both placement modes: clustered retries are
        //    certain to exhaust when walkers outnumber empty cells.
        let distinct_seeds: HashSet<Coord> = self.sticky_points.iter().copied().collect();
        let available = self.side * self.side - distinct_seeds.len();
        if self.walker_count > available {
            return Err(ConfigError::TooManyWalkers {
                requested: self.walker_count,
                available,
            });
        }
        Ok(())
    }
}
