//! Mass-radius dimension estimator.
//!
//! Sweeps a set of radius checkpoints around a center, counts the
//! occupied cells strictly inside each radius, and fits log₂-mass
//! against log₂-radius. Mass around a point of a d-dimensional object
//! grows as rᵈ, so the fitted slope estimates the dimension.

use soot_core::{CellState, Coord};
use soot_grid::GridSnapshot;

use crate::error::AnalysisError;
use crate::fit;

/// Radius checkpoints, enclosed masses, and the fitted slope.
///
/// The arrays keep every checkpoint, including the first one that the
/// fit drops, so callers can plot the full sweep.
#[derive(Clone, Debug, PartialEq)]
pub struct MassRadiusResult {
    /// Swept radius checkpoints, smallest first.
    pub radii: Vec<usize>,
    /// Occupied cells strictly inside each radius.
    pub masses: Vec<usize>,
    /// Fitted dimension estimate.
    pub slope: f64,
}

/// Estimate the fractal dimension of `snapshot` by mass-radius scaling
/// around `center`.
///
/// `samples` checkpoints partition `[min_radius, max_radius]` with
/// integer steps: the base step is the span divided by `samples - 1`,
/// and the division remainder is absorbed one unit at a time by the
/// earliest steps, so both endpoints are hit exactly. Cell distances
/// compare in squared integer form, which keeps the strict `< radius`
/// test free of rounding. The first checkpoint is dropped before the
/// fit; its mass is often zero and its logarithm would be undefined.
///
/// `center` may lie anywhere, including outside the grid; only
/// distances to it matter.
///
/// # Errors
///
/// - [`AnalysisError::SampleCountTooSmall`] when `samples < 2`, which
///   would divide by zero in the stepper.
/// - [`AnalysisError::DegenerateRadiusRange`] when
///   `max_radius <= min_radius`.
/// - [`AnalysisError::ZeroMass`] when a regressed checkpoint encloses
///   no occupied cell.
/// - [`AnalysisError::DegenerateFit`] when the regressed checkpoints
///   collapse onto fewer than two distinct radii.
pub fn mass_radius(
    snapshot: &GridSnapshot,
    occupied: CellState,
    center: Coord,
    min_radius: usize,
    max_radius: usize,
    samples: usize,
) -> Result<MassRadiusResult, AnalysisError> {
    if samples < 2 {
        return Err(AnalysisError::SampleCountTooSmall { samples });
    }
    if max_radius <= min_radius {
        return Err(AnalysisError::DegenerateRadiusRange {
            min: min_radius,
            max: max_radius,
        });
    }
    let radii = checkpoints(min_radius, max_radius, samples);
    let masses: Vec<usize> = radii
        .iter()
        .map(|&r| mass_within(snapshot, occupied, center, r))
        .collect();

    let mut xs = Vec::with_capacity(samples - 1);
    let mut ys = Vec::with_capacity(samples - 1);
    for (&radius, &mass) in radii.iter().zip(&masses).skip(1) {
        if mass == 0 {
            return Err(AnalysisError::ZeroMass { radius });
        }
        xs.push((radius as f64).log2());
        ys.push((mass as f64).log2());
    }
    let slope = fit::slope(&xs, &ys).ok_or(AnalysisError::DegenerateFit)?;
    Ok(MassRadiusResult {
        radii,
        masses,
        slope,
    })
}

/// Integer checkpoint ladder from `min` to `max` inclusive.
///
/// Callers guarantee `samples >= 2` and `max > min`.
fn checkpoints(min: usize, max: usize, samples: usize) -> Vec<usize> {
    let span = max - min;
    let base = span / (samples - 1);
    let remainder = span % (samples - 1);
    let mut radii = Vec::with_capacity(samples);
    let mut current = min;
    for i in 0..samples {
        radii.push(current);
        current += base + usize::from(i < remainder);
    }
    radii
}

fn mass_within(snapshot: &GridSnapshot, occupied: CellState, center: Coord, radius: usize) -> usize {
    let n = snapshot.side() as i32;
    let wire = occupied.as_u8();
    let cells = snapshot.cells();
    let r2 = (radius as i64) * (radius as i64);
    let mut count = 0;
    for x in 0..n {
        for y in 0..n {
            if cells[(x * n + y) as usize] != wire {
                continue;
            }
            let dx = (x - center.x) as i64;
            let dy = (y - center.y) as i64;
            if dx * dx + dy * dy < r2 {
                count += 1;
            }
        }
    }
    count
}
