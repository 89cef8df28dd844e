//! Walker placement over a seeded lattice.
//!
//! Both modes consume the caller's random source and mark each placed
//! cell Walker. Uniform mode draws without replacement from the Empty
//! set; clustered mode samples a discrete 2D normal around the lattice
//! midpoint with a bounded retry per walker.

use rand::Rng;
use soot_core::{CellState, Coord, Walker, WalkerId};
use soot_grid::Lattice;

use crate::config::{ConfigError, Placement};

/// Retry budget per walker for clustered placement.
///
/// When a walker burns through this many samples without landing on an
/// Empty cell, placement fails with
/// [`ConfigError::PlacementExhausted`] instead of looping forever.
pub const MAX_PLACEMENT_ATTEMPTS: u32 = 10_000;

/// Place `count` walkers onto `lattice` according to `placement`.
///
/// The lattice must already be seeded; callers normally reach this
/// through [`AggregationEngine::new`](crate::AggregationEngine::new).
pub fn place_walkers(
    lattice: &mut Lattice,
    count: usize,
    placement: &Placement,
    rng: &mut impl Rng,
) -> Result<Vec<Walker>, ConfigError> {
    match placement {
        Placement::Uniform => place_uniform(lattice, count, rng),
        Placement::Clustered { std_dev } => place_clustered(lattice, count, *std_dev, rng),
    }
}

fn place_uniform(
    lattice: &mut Lattice,
    count: usize,
    rng: &mut impl Rng,
) -> Result<Vec<Walker>, ConfigError> {
    let mut empty = lattice.empty_cells();
    if count > empty.len() {
        return Err(ConfigError::TooManyWalkers {
            requested: count,
            available: empty.len(),
        });
    }
    let mut walkers = Vec::with_capacity(count);
    for id in 0..count {
        let i = rng.random_range(0..empty.len());
        let coord = empty.swap_remove_index(i).expect("draw index in range");
        lattice.set(coord, CellState::Walker);
        walkers.push(Walker::new(WalkerId(id), coord));
    }
    Ok(walkers)
}

fn place_clustered(
    lattice: &mut Lattice,
    count: usize,
    std_dev: f64,
    rng: &mut impl Rng,
) -> Result<Vec<Walker>, ConfigError> {
    let n = lattice.side() as i64;
    let center = (lattice.side() / 2) as f64;
    let mut walkers = Vec::with_capacity(count);
    for id in 0..count {
        let mut landed = None;
        for _ in 0..MAX_PLACEMENT_ATTEMPTS {
            let sx = (center + std_dev * box_muller(rng)) as i64;
            let sy = (center + std_dev * box_muller(rng)) as i64;
            let coord = Coord::new(sx.rem_euclid(n) as i32, sy.rem_euclid(n) as i32);
            if lattice.get(coord) == CellState::Empty {
                landed = Some(coord);
                break;
            }
        }
        let Some(coord) = landed else {
            return Err(ConfigError::PlacementExhausted {
                placed: walkers.len(),
                attempts: MAX_PLACEMENT_ATTEMPTS,
            });
        };
        lattice.set(coord, CellState::Walker);
        walkers.push(Walker::new(WalkerId(id), coord));
    }
    Ok(walkers)
}

/// Generate a Gaussian sample using the Box-Muller transform.
///
/// Avoids a `rand_distr` dependency for the one distribution we need.
fn box_muller(rng: &mut impl Rng) -> f64 {
    let u1: f64 = rng.random::<f64>().max(1e-300); // avoid ln(0)
    let u2: f64 = rng.random();
    (-2.0 * u1.ln()).sqrt() * (2.0 * std::f64::consts::PI * u2).cos()
}
