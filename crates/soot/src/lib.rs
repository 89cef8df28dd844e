//! Soot: diffusion-limited aggregation on toroidal lattices.
//!
//! This is the top-level facade crate that re-exports the public API
//! from all Soot sub-crates. For most users, adding `soot` as a single
//! dependency is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use rand::SeedableRng;
//! use rand_chacha::ChaCha8Rng;
//! use soot::prelude::*;
//!
//! // Aggregate 30 walkers onto a central sticky seed.
//! let config = RunConfig {
//!     side: 32,
//!     walker_count: 30,
//!     max_iterations: Some(100_000),
//!     sticky_points: vec![Coord::new(16, 16)],
//!     placement: Placement::Uniform,
//!     topology: Box::new(Square4::new()),
//! };
//! let mut rng = ChaCha8Rng::seed_from_u64(1842);
//! let mut engine = AggregationEngine::new(config, &mut rng)?;
//! let outcome = engine.run(&mut rng);
//! assert_eq!(outcome.termination, Termination::AllStuck);
//!
//! // Estimate the aggregate's fractal dimension.
//! let dims = box_count(&outcome.snapshot, CellState::Stuck)?;
//! assert!(dims.slope > 0.0);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! # Modules
//!
//! Each module corresponds to a sub-crate. Use them for types not in
//! the prelude:
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `soot-core` | Cell states, coordinates, walkers |
//! | [`grid`] | `soot-grid` | Lattice storage, snapshots, seed patterns |
//! | [`space`] | `soot-space` | The topology trait and the three neighborhoods |
//! | [`engine`] | `soot-engine` | Run configuration, placement, the pass loop |
//! | [`analysis`] | `soot-analysis` | Box-counting and mass-radius estimators |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Core lattice types (`soot-core`).
///
/// Cell states, wrapped coordinates, movement offsets, and the walker
/// lifecycle.
pub use soot_core as types;

/// Lattice storage and seeding (`soot-grid`).
///
/// [`grid::Lattice`] is the mutable grid a run owns;
/// [`grid::GridSnapshot`] its immutable export. [`grid::patterns`]
/// generates seed geometries.
pub use soot_grid as grid;

/// Neighbor topologies (`soot-space`).
///
/// Provides the [`space::Topology`] trait and concrete backends:
/// [`space::Square4`], [`space::Square8`], and [`space::Tri6`].
pub use soot_space as space;

/// The aggregation engine (`soot-engine`).
///
/// Validate a [`engine::RunConfig`], build an
/// [`engine::AggregationEngine`], and drive it with any random source.
pub use soot_engine as engine;

/// Fractal-dimension estimators (`soot-analysis`).
///
/// [`analysis::box_count`] and [`analysis::mass_radius`] consume
/// finished grids, independent of the engine.
pub use soot_analysis as analysis;

/// Common imports for typical Soot usage.
///
/// ```rust
/// use soot::prelude::*;
/// ```
pub mod prelude {
    // Core types
    pub use soot_core::{CellState, Coord, Offset, Walker, WalkerId, WalkerStatus};

    // Grid
    pub use soot_grid::{GridError, GridSnapshot, Lattice};

    // Topologies
    pub use soot_space::{Square4, Square8, Topology, Tri6};

    // Engine
    pub use soot_engine::{
        AggregationEngine, ConfigError, Placement, RunConfig, RunOutcome, RunStats, Termination,
    };

    // Analysis
    pub use soot_analysis::{
        box_count, mass_radius, AnalysisError, BoxCountResult, MassRadiusResult,
    };
}
