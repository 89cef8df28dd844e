//! Test utilities and fixture grids for Soot development.
//!
//! Provides [`ScriptedRng`], a deterministic random source that replays
//! a pre-planned word sequence so engine tests can dictate every
//! placement and movement draw, and a set of fixture snapshots
//! (points, disks, squares, segments) with known geometry for the
//! analysis crate.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

use std::collections::VecDeque;
use std::ops::Range;

use rand::RngCore;
use soot_core::Coord;
use soot_grid::{patterns, GridSnapshot, Lattice};

// ── Scripted randomness ────────────────────────────────────────────

/// The `u64` word that makes `random_range(0..len)` yield `index`.
///
/// Uniform integer sampling maps a raw word onto `0..len` by widening
/// multiply, so each index owns a contiguous word bucket. This returns
/// the bucket midpoint, which decodes to `index` whether the sampler
/// widens from 64 or from 32 bits (see [`ScriptedRng`]'s `next_u32`).
///
/// Panics unless `index < len`.
pub fn word_for_index(index: usize, len: usize) -> u64 {
    assert!(index < len, "index {index} not below len {len}");
    (((2 * index as u128 + 1) << 63) / len as u128) as u64
}

/// A random source that replays a scripted word sequence.
///
/// Each `next_u64` pops one word; running past the script panics with
/// `script exhausted`, so a test that consumes more randomness than it
/// planned fails loudly instead of silently diverging.
///
/// `next_u32` returns the *high* half of a popped word. Combined with
/// midpoint words from [`word_for_index`], an index draw decodes
/// identically through both the 32- and 64-bit uniform samplers, and
/// always costs exactly one scripted word.
#[derive(Clone, Debug)]
pub struct ScriptedRng {
    words: VecDeque<u64>,
}

impl ScriptedRng {
    /// Script raw words directly.
    pub fn new(words: impl IntoIterator<Item = u64>) -> Self {
        Self {
            words: words.into_iter().collect(),
        }
    }

    /// Script a sequence of `(index, len)` draws: the n-th
    /// `random_range(0..len)` call returns the n-th `index`.
    pub fn from_indices(draws: &[(usize, usize)]) -> Self {
        Self::new(draws.iter().map(|&(index, len)| word_for_index(index, len)))
    }

    /// Words left in the script.
    pub fn remaining(&self) -> usize {
        self.words.len()
    }
}

impl RngCore for ScriptedRng {
    fn next_u32(&mut self) -> u32 {
        (self.next_u64() >> 32) as u32
    }

    fn next_u64(&mut self) -> u64 {
        self.words
            .pop_front()
            .expect("script exhausted: more randomness drawn than scripted")
    }

    fn fill_bytes(&mut self, dst: &mut [u8]) {
        for chunk in dst.chunks_mut(8) {
            let bytes = self.next_u64().to_le_bytes();
            chunk.copy_from_slice(&bytes[..chunk.len()]);
        }
    }
}

// ── Fixture grids ──────────────────────────────────────────────────

fn stuck_snapshot(side: usize, cells: &[Coord]) -> GridSnapshot {
    let mut lattice = Lattice::new(side).expect("fixture side must be valid");
    lattice
        .seed_sticky(cells)
        .expect("fixture cells must be in bounds");
    lattice.snapshot()
}

/// A single Stuck cell at `at`.
pub fn single_point(side: usize, at: Coord) -> GridSnapshot {
    stuck_snapshot(side, &[at])
}

/// A filled disk of Stuck cells: every cell with squared distance to
/// `center` strictly below `radius²`.
pub fn filled_disk(side: usize, center: Coord, radius: f64) -> GridSnapshot {
    let r2 = radius * radius;
    let n = side as i32;
    let mut cells = Vec::new();
    for x in 0..n {
        for y in 0..n {
            let dx = (x - center.x) as f64;
            let dy = (y - center.y) as f64;
            if dx * dx + dy * dy < r2 {
                cells.push(Coord::new(x, y));
            }
        }
    }
    stuck_snapshot(side, &cells)
}

/// An `extent`×`extent` block of Stuck cells with `top_left` as its
/// lowest coordinate corner.
pub fn filled_square(side: usize, top_left: Coord, extent: usize) -> GridSnapshot {
    let e = extent as i32;
    let mut cells = Vec::with_capacity(extent * extent);
    for dx in 0..e {
        for dy in 0..e {
            cells.push(Coord::new(top_left.x + dx, top_left.y + dy));
        }
    }
    stuck_snapshot(side, &cells)
}

/// A horizontal run of Stuck cells on `row` spanning `cols`.
pub fn row_segment(side: usize, row: i32, cols: Range<i32>) -> GridSnapshot {
    stuck_snapshot(side, &patterns::horizontal_segment(row, cols))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::Rng;
    use soot_core::CellState;

    #[test]
    fn scripted_words_replay_in_order() {
        let mut rng = ScriptedRng::new([3, 1, 4, 1, 5]);
        assert_eq!(rng.remaining(), 5);
        assert_eq!(rng.next_u64(), 3);
        assert_eq!(rng.next_u64(), 1);
        assert_eq!(rng.next_u64(), 4);
        assert_eq!(rng.remaining(), 2);
    }

    #[test]
    fn next_u32_takes_the_high_half() {
        let mut rng = ScriptedRng::new([0xAAAA_BBBB_CCCC_DDDD]);
        assert_eq!(rng.next_u32(), 0xAAAA_BBBB);
    }

    #[test]
    fn indices_decode_through_random_range() {
        // Exercises the real uniform sampler against the bucket math.
        let draws = [(0, 4), (3, 4), (2, 7), (63, 64), (5, 23)];
        let mut rng = ScriptedRng::from_indices(&draws);
        for &(index, len) in &draws {
            assert_eq!(rng.random_range(0..len), index, "draw ({index}, {len})");
        }
        assert_eq!(rng.remaining(), 0);
    }

    #[test]
    #[should_panic(expected = "script exhausted")]
    fn overrunning_the_script_panics() {
        let mut rng = ScriptedRng::from_indices(&[(1, 2)]);
        rng.next_u64();
        rng.next_u64();
    }

    #[test]
    #[should_panic(expected = "not below len")]
    fn word_for_index_rejects_out_of_range_index() {
        word_for_index(4, 4);
    }

    #[test]
    fn fill_bytes_spends_whole_words() {
        let mut rng = ScriptedRng::new([u64::from_le_bytes([1, 2, 3, 4, 5, 6, 7, 8]), 0x09]);
        let mut buf = [0u8; 10];
        rng.fill_bytes(&mut buf);
        assert_eq!(buf, [1, 2, 3, 4, 5, 6, 7, 8, 0x09, 0]);
        assert_eq!(rng.remaining(), 0);
    }

    #[test]
    fn single_point_marks_one_cell() {
        let snap = single_point(8, Coord::new(3, 5));
        assert_eq!(snap.occupied_count(CellState::Stuck), 1);
        assert_eq!(snap.get(Coord::new(3, 5)), Some(CellState::Stuck));
    }

    #[test]
    fn filled_disk_uses_strict_squared_distance() {
        // Radius 3: all offsets with dx² + dy² ≤ 8, none at 9.
        let snap = filled_disk(16, Coord::new(8, 8), 3.0);
        assert_eq!(snap.occupied_count(CellState::Stuck), 25);
        assert_eq!(snap.get(Coord::new(8, 11)), Some(CellState::Empty));
        assert_eq!(snap.get(Coord::new(6, 6)), Some(CellState::Stuck));
    }

    #[test]
    fn filled_square_covers_extent() {
        let snap = filled_square(8, Coord::new(2, 3), 3);
        assert_eq!(snap.occupied_count(CellState::Stuck), 9);
        assert_eq!(snap.get(Coord::new(2, 3)), Some(CellState::Stuck));
        assert_eq!(snap.get(Coord::new(4, 5)), Some(CellState::Stuck));
        assert_eq!(snap.get(Coord::new(5, 5)), Some(CellState::Empty));
    }

    #[test]
    fn row_segment_spans_columns() {
        let snap = row_segment(8, 4, 1..6);
        assert_eq!(snap.occupied_count(CellState::Stuck), 5);
        assert_eq!(snap.get(Coord::new(4, 1)), Some(CellState::Stuck));
        assert_eq!(snap.get(Coord::new(4, 5)), Some(CellState::Stuck));
        assert_eq!(snap.get(Coord::new(4, 6)), Some(CellState::Empty));
    }
}
