//! Analysis-specific error types.

use std::error::Error;
use std::fmt;

/// Errors raised by the fractal-dimension estimators.
///
/// Every variant represents an input the regression cannot digest.
/// Surfacing them as errors, instead of letting a `log(0)` poison the
/// slope with NaN, keeps bad estimates from masquerading as results.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AnalysisError {
    /// The radius sweep needs at least two checkpoints to step between.
    SampleCountTooSmall {
        /// The requested sample count.
        samples: usize,
    },
    /// The radius range spans nothing to sweep.
    DegenerateRadiusRange {
        /// Lower bound of the range.
        min: usize,
        /// Upper bound of the range.
        max: usize,
    },
    /// The grid holds no cell in the occupied state.
    EmptyAggregate,
    /// A box-counting scale found zero occupied blocks, so its count
    /// has no logarithm. Happens when the coarsest block size exceeds
    /// the grid side and no full block fits.
    EmptyScale {
        /// The block size of the offending scale.
        block_size: usize,
    },
    /// A regressed radius checkpoint encloses zero mass.
    ZeroMass {
        /// The radius with empty enclosure.
        radius: usize,
    },
    /// The regression has fewer than two distinct abscissae.
    DegenerateFit,
}

impl fmt::Display for AnalysisError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SampleCountTooSmall { samples } => {
                write!(f, "radius sweep needs at least 2 samples, got {samples}")
            }
            Self::DegenerateRadiusRange { min, max } => {
                write!(f, "radius range [{min}, {max}] spans nothing")
            }
            Self::EmptyAggregate => write!(f, "grid holds no occupied cells"),
            Self::EmptyScale { block_size } => {
                write!(f, "no occupied blocks at block size {block_size}")
            }
            Self::ZeroMass { radius } => {
                write!(f, "zero mass enclosed at radius {radius}")
            }
            Self::DegenerateFit => {
                write!(f, "regression needs at least 2 distinct points")
            }
        }
    }
}

impl Error for AnalysisError {}
