//! Topology trait compliance test helpers.
//!
//! These functions verify that a Topology implementation satisfies the
//! invariants the engine relies on. Reused across all backend test
//! modules (Square4, Square8, Tri6).

use indexmap::IndexSet;
use soot_core::{Coord, Offset};

use crate::topology::Topology;

/// Side length used for positional sweeps. Even, so row-parity tables
/// are consistent across the wrap seam.
const PROBE_SIDE: usize = 8;

fn probe_positions() -> Vec<Coord> {
    let n = PROBE_SIDE as i32;
    (0..n)
        .flat_map(|x| (0..n).map(move |y| Coord::new(x, y)))
        .collect()
}

/// Assert both offset sets are non-empty at every position.
pub fn assert_sets_non_empty(topo: &dyn Topology) {
    for pos in probe_positions() {
        assert!(
            !topo.movement_offsets(pos).is_empty(),
            "{}: empty movement set at {pos}",
            topo.name()
        );
        assert!(
            !topo.stick_offsets(pos).is_empty(),
            "{}: empty stick set at {pos}",
            topo.name()
        );
    }
}

/// Assert neither set contains the zero offset.
///
/// A zero movement offset would waste a step; a zero stick offset would
/// make a walker probe its own cell and glue instantly.
pub fn assert_no_zero_offset(topo: &dyn Topology) {
    let zero = Offset::new(0, 0);
    for pos in probe_positions() {
        assert!(!topo.movement_offsets(pos).contains(&zero));
        assert!(!topo.stick_offsets(pos).contains(&zero));
    }
}

/// Assert every offset is a single lattice step (both axes in `-1..=1`).
pub fn assert_unit_steps(topo: &dyn Topology) {
    for pos in probe_positions() {
        for off in topo
            .movement_offsets(pos)
            .iter()
            .chain(topo.stick_offsets(pos).iter())
        {
            assert!(
                (-1..=1).contains(&off.dx) && (-1..=1).contains(&off.dy),
                "{}: non-unit offset {off} at {pos}",
                topo.name()
            );
        }
    }
}

/// Assert offsets are unique within each set.
pub fn assert_offsets_unique(topo: &dyn Topology) {
    for pos in probe_positions() {
        for set in [topo.movement_offsets(pos), topo.stick_offsets(pos)] {
            let unique: IndexSet<Offset> = set.iter().copied().collect();
            assert_eq!(
                unique.len(),
                set.len(),
                "{}: duplicate offsets at {pos}",
                topo.name()
            );
        }
    }
}

/// Assert every movement offset is also a stick offset.
///
/// A walker must never step onto a cell it could not have glued from;
/// otherwise it could cross the aggregate boundary without the
/// stick-check ever firing.
pub fn assert_movement_within_stick(topo: &dyn Topology) {
    for pos in probe_positions() {
        let stick = topo.stick_offsets(pos);
        for off in topo.movement_offsets(pos) {
            assert!(
                stick.contains(&off),
                "{}: movement offset {off} missing from stick set at {pos}",
                topo.name()
            );
        }
    }
}

/// Assert stick adjacency is symmetric on an even-sided torus:
/// if `b` is probed from `a`, then `a` is probed from `b`.
pub fn assert_stick_symmetric(topo: &dyn Topology) {
    for pos in probe_positions() {
        for off in topo.stick_offsets(pos) {
            let there = pos.step(off, PROBE_SIDE);
            let back = topo
                .stick_offsets(there)
                .iter()
                .any(|o| there.step(*o, PROBE_SIDE) == pos);
            assert!(
                back,
                "{}: stick symmetry violated between {pos} and {there}",
                topo.name()
            );
        }
    }
}

/// Run all 6 compliance checks on a topology.
pub fn run_full_compliance(topo: &dyn Topology) {
    assert_sets_non_empty(topo);
    assert_no_zero_offset(topo);
    assert_unit_steps(topo);
    assert_offsets_unique(topo);
    assert_movement_within_stick(topo);
    assert_stick_symmetric(topo);
}
