//! Grow aggregates onto shaped seed beds: a circle outline with
//! clustered walkers, then a filled triangle on the triangular lattice.
//!
//! ```text
//! cargo run --release --example seeded_shapes
//! ```

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use soot_engine::{AggregationEngine, Placement, RunConfig, RunOutcome};
use soot_grid::patterns;
use soot_space::{Square8, Tri6};

fn report(label: &str, outcome: &RunOutcome) {
    println!(
        "{label}: {:?} after {} passes, {}/{} walkers glued",
        outcome.termination, outcome.stats.iterations, outcome.stats.glued, outcome.stats.walkers,
    );
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let side = 64;

    // Walkers burst outward from the middle of a sticky ring.
    let ring = RunConfig {
        side,
        walker_count: 300,
        max_iterations: Some(200_000),
        sticky_points: patterns::circle_outline(patterns::center(side), 24.0, side),
        placement: Placement::Clustered { std_dev: 10.0 },
        topology: Box::new(Square8::new()),
    };
    let mut rng = ChaCha8Rng::seed_from_u64(7);
    let mut engine = AggregationEngine::new(ring, &mut rng)?;
    report("ring bed    ", &engine.run(&mut rng));

    let triangle = RunConfig {
        side,
        walker_count: 300,
        max_iterations: Some(200_000),
        sticky_points: patterns::filled_triangle(side, 0.5),
        placement: Placement::Uniform,
        topology: Box::new(Tri6::new()),
    };
    let mut rng = ChaCha8Rng::seed_from_u64(8);
    let mut engine = AggregationEngine::new(triangle, &mut rng)?;
    report("triangle bed", &engine.run(&mut rng));

    Ok(())
}
