//! Aggregation engine driving Soot simulation runs.
//!
//! Provides the top-level [`AggregationEngine`] that owns one lattice and
//! one walker population for the duration of a run: walker placement,
//! the per-iteration diffusion/stick state machine, and termination.
//! Randomness always comes from a caller-supplied source; the engine
//! holds no seed of its own.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod config;
pub mod engine;
pub mod placement;

pub use config::{ConfigError, Placement, RunConfig};
pub use engine::{AggregationEngine, RunOutcome, RunStats, Termination};
pub use placement::MAX_PLACEMENT_ATTEMPTS;
