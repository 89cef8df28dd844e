//! End-to-end aggregation runs.
//!
//! Each test: build config → construct engine with a known random
//! source → run or step → check the final grid, walker population, and
//! termination report against the model's invariants.

use proptest::prelude::*;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use soot_core::{CellState, Coord};
use soot_engine::{AggregationEngine, Placement, RunConfig, RunStats, Termination};
use soot_space::{Square4, Square8, Topology, Tri6};
use soot_test_utils::ScriptedRng;

// ── Helpers ─────────────────────────────────────────────────────

fn uniform_config(
    side: usize,
    walkers: usize,
    seeds: Vec<Coord>,
    topology: Box<dyn Topology>,
) -> RunConfig {
    RunConfig {
        side,
        walker_count: walkers,
        max_iterations: Some(200_000),
        sticky_points: seeds,
        placement: Placement::Uniform,
        topology,
    }
}

/// Square4 movement draw indices into the offset table [N, W, S, E].
const S: usize = 2;
const E: usize = 3;

// ── Scripted walk ───────────────────────────────────────────────

#[test]
fn scripted_walker_reaches_the_seed_and_glues() {
    // 8×8 grid seeded at (4, 4), one walker placed at (0, 0), then
    // marched four cells south and three east. The third eastward step
    // lands at (4, 3) with the seed due east, gluing the walker.
    let mut rng = ScriptedRng::from_indices(&[
        (0, 63),
        (S, 4),
        (S, 4),
        (S, 4),
        (S, 4),
        (E, 4),
        (E, 4),
        (E, 4),
    ]);
    let mut config = uniform_config(8, 1, vec![Coord::new(4, 4)], Box::new(Square4::new()));
    config.max_iterations = Some(1000);
    let mut engine = AggregationEngine::new(config, &mut rng).unwrap();
    assert_eq!(engine.walkers()[0].position, Coord::new(0, 0));

    let outcome = engine.run(&mut rng);

    assert_eq!(outcome.termination, Termination::AllStuck);
    assert_eq!(
        outcome.stats,
        RunStats {
            iterations: 7,
            glued: 1,
            walkers: 1,
        }
    );
    assert_eq!(outcome.snapshot.get(Coord::new(4, 3)), Some(CellState::Stuck));
    assert_eq!(outcome.snapshot.get(Coord::new(4, 4)), Some(CellState::Stuck));
    assert_eq!(outcome.snapshot.occupied_count(CellState::Stuck), 2);
    assert_eq!(outcome.snapshot.occupied_count(CellState::Walker), 0);
    assert_eq!(rng.remaining(), 0, "every scripted draw must be spent");
}

// ── Full runs per topology ──────────────────────────────────────

fn full_run(topology: Box<dyn Topology>, seed: u64) {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let config = uniform_config(16, 10, vec![Coord::new(8, 8)], topology);
    let mut engine = AggregationEngine::new(config, &mut rng).unwrap();
    let outcome = engine.run(&mut rng);

    assert_eq!(outcome.termination, Termination::AllStuck);
    assert_eq!(outcome.stats.glued, 10);
    assert_eq!(outcome.snapshot.occupied_count(CellState::Walker), 0);
    // Stacked walkers can glue on a shared cell, so the Stuck cell
    // count ranges from 2 up to seed + population.
    let stuck_cells = outcome.snapshot.occupied_count(CellState::Stuck);
    assert!((2..=11).contains(&stuck_cells), "stuck cells {stuck_cells}");
    for walker in engine.walkers() {
        assert!(!walker.is_mobile());
        assert_eq!(
            outcome.snapshot.get(walker.position),
            Some(CellState::Stuck),
            "walker {} rests on a non-Stuck cell",
            walker.id
        );
    }
}

#[test]
fn square4_run_completes() {
    full_run(Box::new(Square4::new()), 11);
}

#[test]
fn square8_run_completes() {
    full_run(Box::new(Square8::new()), 12);
}

#[test]
fn tri6_run_completes() {
    full_run(Box::new(Tri6::new()), 13);
}

#[test]
fn clustered_run_completes() {
    let mut rng = ChaCha8Rng::seed_from_u64(21);
    let config = RunConfig {
        side: 32,
        walker_count: 8,
        max_iterations: Some(200_000),
        sticky_points: vec![Coord::new(16, 16)],
        placement: Placement::Clustered { std_dev: 4.0 },
        topology: Box::new(Square4::new()),
    };
    let mut engine = AggregationEngine::new(config, &mut rng).unwrap();
    let outcome = engine.run(&mut rng);
    assert_eq!(outcome.termination, Termination::AllStuck);
    assert_eq!(outcome.stats.glued, 8);
}

#[test]
fn unbounded_run_terminates_when_gluing_is_reachable() {
    let mut rng = ChaCha8Rng::seed_from_u64(31);
    let mut config = uniform_config(4, 1, vec![Coord::new(2, 2)], Box::new(Square4::new()));
    config.max_iterations = None;
    let mut engine = AggregationEngine::new(config, &mut rng).unwrap();
    let outcome = engine.run(&mut rng);
    assert_eq!(outcome.termination, Termination::AllStuck);
    assert_eq!(outcome.stats.glued, 1);
}

// ── Determinism ─────────────────────────────────────────────────

#[test]
fn identical_seeds_reproduce_the_run_exactly() {
    let run = |seed: u64| {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let config = uniform_config(16, 12, vec![Coord::new(8, 8)], Box::new(Square4::new()));
        let mut engine = AggregationEngine::new(config, &mut rng).unwrap();
        engine.run(&mut rng)
    };
    let first = run(7);
    let second = run(7);
    assert_eq!(first, second);

    let third = run(8);
    assert_ne!(first.snapshot, third.snapshot);
}

// ── Stepped invariants ──────────────────────────────────────────

#[test]
fn invariants_hold_across_every_pass() {
    let mut rng = ChaCha8Rng::seed_from_u64(5);
    let config = uniform_config(12, 6, vec![Coord::new(6, 6)], Box::new(Square4::new()));
    let mut engine = AggregationEngine::new(config, &mut rng).unwrap();

    let mut frozen: Vec<Option<Coord>> = vec![None; engine.walker_count()];
    for _ in 0..500 {
        engine.step(&mut rng);

        let stuck_walkers = engine
            .walkers()
            .iter()
            .filter(|w| !w.is_mobile())
            .count();
        assert_eq!(engine.glued(), stuck_walkers);

        for (i, walker) in engine.walkers().iter().enumerate() {
            assert!(walker.position.in_bounds(engine.side()));
            if let Some(pinned) = frozen[i] {
                assert_eq!(walker.position, pinned, "stuck walker {i} moved");
            } else if !walker.is_mobile() {
                frozen[i] = Some(walker.position);
            }
        }
        if engine.is_complete() {
            break;
        }
    }
}

// ── Probabilistic liveness ──────────────────────────────────────

proptest! {
    #![proptest_config(ProptestConfig::with_cases(16))]

    // A seeded grid with room to diffuse glues every walker well
    // before a generous cap, whatever the stream.
    #[test]
    fn any_stream_reaches_all_stuck_under_a_generous_cap(seed in any::<u64>()) {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let mut config = uniform_config(8, 4, vec![Coord::new(4, 4)], Box::new(Square4::new()));
        config.max_iterations = Some(20_000);
        let mut engine = AggregationEngine::new(config, &mut rng).unwrap();
        let outcome = engine.run(&mut rng);

        prop_assert_eq!(outcome.termination, Termination::AllStuck);
        prop_assert_eq!(outcome.stats.glued, 4);
        let stuck_walkers = engine.walkers().iter().filter(|w| !w.is_mobile()).count();
        prop_assert_eq!(engine.glued(), stuck_walkers);
        for walker in engine.walkers() {
            prop_assert!(walker.position.in_bounds(8));
        }
        let snap = engine.snapshot();
        let total = snap.occupied_count(CellState::Stuck)
            + snap.occupied_count(CellState::Walker)
            + snap.occupied_count(CellState::Empty);
        prop_assert_eq!(total, 64);
    }
}
