//! Seed geometry generators.
//!
//! Pure coordinate-list builders for the nucleation shapes the example
//! drivers seed runs with. Output may contain duplicates (sampled
//! outlines revisit cells); seeding is idempotent so that is harmless.
//! Points falling outside `[0, side)²` are filtered out.

use std::ops::Range;

use soot_core::Coord;

/// The central cell, the standard single-nucleus seed.
pub fn center(side: usize) -> Coord {
    let mid = (side / 2) as i32;
    Coord::new(mid, mid)
}

/// A horizontal run of cells on one row.
pub fn horizontal_segment(row: i32, cols: Range<i32>) -> Vec<Coord> {
    cols.map(|col| Coord::new(row, col)).collect()
}

/// A sampled circle outline around `center`.
///
/// 360 evenly spaced angles, truncated to lattice cells like the
/// drivers do, so neighboring samples often land on the same cell.
pub fn circle_outline(center: Coord, radius: f64, side: usize) -> Vec<Coord> {
    (0..360)
        .map(|k| {
            let angle = f64::from(k) * std::f64::consts::TAU / 360.0;
            Coord::new(
                center.x + (radius * angle.cos()) as i32,
                center.y + (radius * angle.sin()) as i32,
            )
        })
        .filter(|coord| coord.in_bounds(side))
        .collect()
}

/// A filled triangle with its apex at the lattice center.
///
/// The apex sits at the center cell; the base spans up to `side / 2`
/// cells at distance `base_height_ratio * side` from the apex.
pub fn filled_triangle(side: usize, base_height_ratio: f64) -> Vec<Coord> {
    let n = side as i32;
    let base_width = n / 2;
    let height = (base_height_ratio * side as f64) as i32;
    let apex = center(side);
    let mut points = Vec::new();
    for col in apex.y..apex.y + height {
        let half = (base_width * (col - apex.y)) / height.max(1);
        for row in apex.x - half..=apex.x + half {
            let coord = Coord::new(row, col);
            if coord.in_bounds(side) {
                points.push(coord);
            }
        }
    }
    points
}
