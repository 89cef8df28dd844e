//! The aggregation pass loop.
//!
//! [`AggregationEngine`] owns the lattice and walker population for one
//! run. Each pass visits every walker in id order: mobile walkers draw
//! one movement offset, move unless the candidate cell is Stuck, then
//! glue if any stick-offset neighbor of their current cell is Stuck.
//! The engine holds no random source of its own; every advancing call
//! takes the caller's `Rng`, so two runs with the same config and the
//! same seeded source produce identical grids.
//!
//! # Ownership model
//!
//! The engine is `Send + Sync`; all mutation goes through `&mut self`.
//! [`snapshot()`](AggregationEngine::snapshot) is a by-value export, so
//! callers can hand grids to analyzers while the run continues.

use log::info;
use rand::Rng;
use soot_core::{CellState, Coord, Walker};
use soot_grid::{GridSnapshot, Lattice};
use soot_space::Topology;

use crate::config::{ConfigError, RunConfig};
use crate::placement::place_walkers;

/// A progress line is emitted after every this-many passes.
const PROGRESS_LOG_INTERVAL: u64 = 100;

// ── Run reporting ──────────────────────────────────────────────────

/// Why a run stopped.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Termination {
    /// Every walker glued to the aggregate.
    AllStuck,
    /// The pass cap elapsed with mobile walkers remaining.
    IterationCap,
}

/// Counters describing a finished run.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RunStats {
    /// Passes executed.
    pub iterations: u64,
    /// Walkers glued by the time the run stopped.
    pub glued: usize,
    /// Total walker population.
    pub walkers: usize,
}

/// Everything [`AggregationEngine::run`] hands back.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RunOutcome {
    /// The final grid.
    pub snapshot: GridSnapshot,
    /// Why the run stopped.
    pub termination: Termination,
    /// Counters at the stop point.
    pub stats: RunStats,
}

// ── Engine ─────────────────────────────────────────────────────────

/// Drives one diffusion-limited aggregation run.
///
/// Built from a validated [`RunConfig`]; the constructor seeds the
/// lattice and places the walkers, consuming placement draws from the
/// caller's random source.
///
/// # Examples
///
/// ```
/// use rand::SeedableRng;
/// use rand_chacha::ChaCha8Rng;
/// use soot_core::Coord;
/// use soot_engine::{AggregationEngine, Placement, RunConfig, Termination};
/// use soot_space::Square4;
///
/// let config = RunConfig {
///     side: 16,
///     walker_count: 20,
///     max_iterations: Some(50_000),
///     sticky_points: vec![Coord::new(8, 8)],
///     placement: Placement::Uniform,
///     topology: Box::new(Square4::new()),
/// };
/// let mut rng = ChaCha8Rng::seed_from_u64(7);
/// let mut engine = AggregationEngine::new(config, &mut rng)?;
/// let outcome = engine.run(&mut rng);
/// assert_eq!(outcome.termination, Termination::AllStuck);
/// # Ok::<(), soot_engine::ConfigError>(())
/// ```
pub struct AggregationEngine {
    lattice: Lattice,
    walkers: Vec<Walker>,
    topology: Box<dyn Topology>,
    max_iterations: Option<u64>,
    iteration: u64,
    glued: usize,
}

// Compile-time assertion: AggregationEngine must be Send + Sync.
const _: fn() = || {
    fn assert<T: Send + Sync>() {}
    assert::<AggregationEngine>();
};

// Manual impl because `dyn Topology` is not `Debug`; the topology is
// shown by its diagnostic name.
impl std::fmt::Debug for AggregationEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AggregationEngine")
            .field("lattice", &self.lattice)
            .field("walkers", &self.walkers)
            .field("topology", &self.topology.name())
            .field("max_iterations", &self.max_iterations)
            .field("iteration", &self.iteration)
            .field("glued", &self.glued)
            .finish()
    }
}

impl AggregationEngine {
    /// Validate `config`, build and seed the lattice, and place the
    /// walkers using `rng`.
    pub fn new(config: RunConfig, rng: &mut impl Rng) -> Result<Self, ConfigError> {
        config.validate()?;
        let mut lattice = Lattice::new(config.side)?;
        lattice.seed_sticky(&config.sticky_points)?;
        let walkers = place_walkers(&mut lattice, config.walker_count, &config.placement, rng)?;
        Ok(Self {
            lattice,
            walkers,
            topology: config.topology,
            max_iterations: config.max_iterations,
            iteration: 0,
            glued: 0,
        })
    }

    /// Execute one pass over the walker population in id order.
    ///
    /// Per mobile walker: draw one movement offset uniformly, move to
    /// the wrapped candidate cell unless it is Stuck (a blocked draw is
    /// simply forfeited), then check the stick offsets of the cell the
    /// walker now occupies. Any Stuck neighbor glues the walker where
    /// it stands.
    ///
    /// Counts the pass even when every walker is already stuck, in
    /// which case no draws are consumed. Emits a progress line every
    /// hundredth pass.
    pub fn step(&mut self, rng: &mut impl Rng) {
        let side = self.lattice.side();
        for i in 0..self.walkers.len() {
            if !self.walkers[i].is_mobile() {
                continue;
            }
            let pos = self.walkers[i].position;
            let moves = self.topology.movement_offsets(pos);
            let offset = moves[rng.random_range(0..moves.len())];
            let candidate = pos.step(offset, side);
            if !self.lattice.get(candidate).is_stuck() {
                // A stacked walker may sit on a cell that glued under
                // it; leaving must not erase the Stuck marker. Clearing
                // before marking also keeps a self-step (side 1) from
                // emptying its own cell.
                if !self.lattice.get(pos).is_stuck() {
                    self.lattice.set(pos, CellState::Empty);
                }
                self.lattice.set(candidate, CellState::Walker);
                self.walkers[i].position = candidate;
            }
            let here = self.walkers[i].position;
            let sticks = self.topology.stick_offsets(here);
            if sticks
                .iter()
                .any(|o| self.lattice.get(here.step(*o, side)).is_stuck())
            {
                self.lattice.set(here, CellState::Stuck);
                self.walkers[i].glue();
                self.glued += 1;
            }
        }
        self.iteration += 1;
        if self.iteration % PROGRESS_LOG_INTERVAL == 0 {
            info!(
                "pass {}: {}/{} walkers glued",
                self.iteration,
                self.glued,
                self.walkers.len()
            );
        }
    }

    /// Step until every walker is stuck or the pass cap elapses.
    ///
    /// With `max_iterations: None` this loops until completion, which
    /// is unbounded when gluing is unreachable.
    pub fn run(&mut self, rng: &mut impl Rng) -> RunOutcome {
        while !self.is_complete() && self.under_cap() {
            self.step(rng);
        }
        let termination = if self.is_complete() {
            Termination::AllStuck
        } else {
            Termination::IterationCap
        };
        RunOutcome {
            snapshot: self.lattice.snapshot(),
            termination,
            stats: RunStats {
                iterations: self.iteration,
                glued: self.glued,
                walkers: self.walkers.len(),
            },
        }
    }

    fn under_cap(&self) -> bool {
        self.max_iterations.map_or(true, |cap| self.iteration < cap)
    }

    /// True once every walker has glued.
    pub fn is_complete(&self) -> bool {
        self.glued == self.walkers.len()
    }

    /// Passes executed so far.
    pub fn iteration(&self) -> u64 {
        self.iteration
    }

    /// Walkers glued so far.
    pub fn glued(&self) -> usize {
        self.glued
    }

    /// Total walker population.
    pub fn walker_count(&self) -> usize {
        self.walkers.len()
    }

    /// Lattice side n.
    pub fn side(&self) -> usize {
        self.lattice.side()
    }

    /// The walker population, in id order.
    pub fn walkers(&self) -> &[Walker] {
        &self.walkers
    }

    /// By-value export of the current grid.
    pub fn snapshot(&self) -> GridSnapshot {
        self.lattice.snapshot()
    }
}
