//! Box-counting dimension estimator.
//!
//! Partitions the grid into non-overlapping square blocks of side 2^s
//! for each scale s, counts blocks containing at least one occupied
//! cell, and fits log-count against log-inverse-block-size. For an
//! aggregate the fitted slope estimates its fractal dimension.

use soot_core::CellState;
use soot_grid::GridSnapshot;

use crate::error::AnalysisError;
use crate::fit;

/// Hard cap on the number of scales.
const MAX_SCALES: usize = 100;

/// Per-scale block sizes and occupied-block counts, with the fitted
/// slope.
#[derive(Clone, Debug, PartialEq)]
pub struct BoxCountResult {
    /// Block side length per scale, doubling per entry.
    pub block_sizes: Vec<usize>,
    /// Blocks containing at least one occupied cell, per scale.
    pub counts: Vec<usize>,
    /// Fitted dimension estimate.
    pub slope: f64,
}

impl BoxCountResult {
    /// Number of scales that entered the fit.
    pub fn scales(&self) -> usize {
        self.block_sizes.len()
    }
}

/// Estimate the fractal dimension of `snapshot` by box counting.
///
/// Scales run from block size 2 up to the first power of two at or
/// above the grid side. Each scale keeps only full blocks; trailing
/// rows and columns that do not fill a block are discarded, never
/// padded or wrapped.
///
/// # Errors
///
/// - [`AnalysisError::EmptyAggregate`] when no cell carries the
///   occupied state.
/// - [`AnalysisError::EmptyScale`] when a scale counts zero occupied
///   blocks. A side that is not a power of two always ends on such a
///   scale, because its coarsest block size exceeds the side and no
///   full block fits.
/// - [`AnalysisError::DegenerateFit`] when fewer than two scales exist
///   (side ≤ 2).
///
/// # Examples
///
/// ```
/// use soot_core::{CellState, Coord};
/// use soot_grid::Lattice;
/// use soot_analysis::box_count;
///
/// let mut lattice = Lattice::new(8)?;
/// lattice.seed_sticky(&[Coord::new(3, 3)])?;
/// let result = box_count(&lattice.snapshot(), CellState::Stuck)?;
/// assert_eq!(result.block_sizes, vec![2, 4, 8]);
/// assert_eq!(result.counts, vec![1, 1, 1]);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub fn box_count(
    snapshot: &GridSnapshot,
    occupied: CellState,
) -> Result<BoxCountResult, AnalysisError> {
    let n = snapshot.side();
    if snapshot.occupied_count(occupied) == 0 {
        return Err(AnalysisError::EmptyAggregate);
    }
    let mut scales = 1;
    while (1usize << scales) < n && scales < MAX_SCALES {
        scales += 1;
    }
    let mut block_sizes = Vec::with_capacity(scales);
    let mut counts = Vec::with_capacity(scales);
    for s in 1..=scales {
        let block_size = 1usize << s;
        let count = occupied_blocks(snapshot, occupied, block_size);
        if count == 0 {
            return Err(AnalysisError::EmptyScale { block_size });
        }
        block_sizes.push(block_size);
        counts.push(count);
    }
    let xs: Vec<f64> = block_sizes
        .iter()
        .map(|&b| (1.0 / b as f64).ln())
        .collect();
    let ys: Vec<f64> = counts.iter().map(|&c| (c as f64).ln()).collect();
    let slope = fit::slope(&xs, &ys).ok_or(AnalysisError::DegenerateFit)?;
    Ok(BoxCountResult {
        block_sizes,
        counts,
        slope,
    })
}

fn occupied_blocks(snapshot: &GridSnapshot, occupied: CellState, block_size: usize) -> usize {
    let n = snapshot.side();
    let wire = occupied.as_u8();
    let cells = snapshot.cells();
    let blocks = n / block_size;
    let mut count = 0;
    for bi in 0..blocks {
        for bj in 0..blocks {
            let x0 = bi * block_size;
            let y0 = bj * block_size;
            let mut hit = false;
            'block: for x in x0..x0 + block_size {
                for y in y0..y0 + block_size {
                    if cells[x * n + y] == wire {
                        hit = true;
                        break 'block;
                    }
                }
            }
            count += usize::from(hit);
        }
    }
    count
}
