//! Shared run profiles for the Soot benches and example drivers.
//!
//! Each profile builds a fresh [`RunConfig`] at a fixed parameter point
//! ([`reference_profile`], [`stress_profile`], [`clustered_profile`],
//! [`small_profile`]) so benches and examples measure the same workloads
//! across runs.

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use soot_engine::{Placement, RunConfig};
use soot_grid::patterns;
use soot_space::Square4;

/// 64x64 grid, 500 uniformly placed walkers, one central seed.
pub fn reference_profile() -> RunConfig {
    RunConfig {
        side: 64,
        walker_count: 500,
        max_iterations: Some(200_000),
        sticky_points: vec![patterns::center(64)],
        placement: Placement::Uniform,
        topology: Box::new(Square4::new()),
    }
}

/// 128x128 grid, 1000 walkers, four times the reference cell count.
pub fn stress_profile() -> RunConfig {
    RunConfig {
        side: 128,
        walker_count: 1000,
        max_iterations: Some(500_000),
        sticky_points: vec![patterns::center(128)],
        placement: Placement::Uniform,
        topology: Box::new(Square4::new()),
    }
}

/// Reference grid with walkers clustered around the center instead of
/// spread uniformly.
pub fn clustered_profile() -> RunConfig {
    RunConfig {
        placement: Placement::Clustered { std_dev: 16.0 },
        ..reference_profile()
    }
}

/// 32x32 grid with 100 walkers, small enough to time a complete run.
pub fn small_profile() -> RunConfig {
    RunConfig {
        side: 32,
        walker_count: 100,
        max_iterations: Some(200_000),
        sticky_points: vec![patterns::center(32)],
        placement: Placement::Uniform,
        topology: Box::new(Square4::new()),
    }
}
