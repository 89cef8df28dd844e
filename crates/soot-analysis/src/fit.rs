//! Shared least-squares helper.

/// Ordinary least-squares slope of `ys` against `xs`.
///
/// Returns `None` when fewer than two points are given or the
/// abscissae carry no variance, both of which leave the slope
/// undefined.
pub(crate) fn slope(xs: &[f64], ys: &[f64]) -> Option<f64> {
    debug_assert_eq!(xs.len(), ys.len());
    if xs.len() < 2 {
        return None;
    }
    let n = xs.len() as f64;
    let mean_x = xs.iter().sum::<f64>() / n;
    let mean_y = ys.iter().sum::<f64>() / n;
    let mut covariance = 0.0;
    let mut variance = 0.0;
    for (&x, &y) in xs.iter().zip(ys) {
        covariance += (x - mean_x) * (y - mean_y);
        variance += (x - mean_x) * (x - mean_x);
    }
    if variance == 0.0 {
        return None;
    }
    Some(covariance / variance)
}
