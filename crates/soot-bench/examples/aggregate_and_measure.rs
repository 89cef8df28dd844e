//! Grow an aggregate from a central seed, then estimate its fractal
//! dimension two ways.
//!
//! ```text
//! cargo run --release --example aggregate_and_measure
//! ```

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use soot_analysis::{box_count, mass_radius};
use soot_bench::reference_profile;
use soot_core::CellState;
use soot_engine::AggregationEngine;
use soot_grid::patterns;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut rng = ChaCha8Rng::seed_from_u64(1842);
    let mut engine = AggregationEngine::new(reference_profile(), &mut rng)?;
    let outcome = engine.run(&mut rng);
    println!(
        "run finished: {:?} after {} passes, {}/{} walkers glued",
        outcome.termination, outcome.stats.iterations, outcome.stats.glued, outcome.stats.walkers,
    );

    let boxes = box_count(&outcome.snapshot, CellState::Stuck)?;
    println!("box-counting dimension: {:.3}", boxes.slope);

    let side = outcome.snapshot.side();
    let sweep = mass_radius(
        &outcome.snapshot,
        CellState::Stuck,
        patterns::center(side),
        2,
        side / 3,
        10,
    )?;
    println!("mass-radius dimension:  {:.3}", sweep.slope);
    for (radius, mass) in sweep.radii.iter().zip(&sweep.masses) {
        println!("  r = {radius:>3}  mass = {mass}");
    }
    Ok(())
}
