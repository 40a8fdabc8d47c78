//! Scaled squared-norm convergence statistic.
//!
//! An iterative solver compares this statistic across iterations (typically
//! on the difference of successive iterates) to decide when it has
//! stabilized. Normalizing the raw sum of squares keeps the statistic
//! comparable across iterations and across problem sizes.

use crate::error::{Error, Result};
use crate::matrix::Matrix;

/// Sum of squared entries divided by the number of entries.
///
/// Returns 0 for the all-zero matrix and for the empty matrix. Always
/// nonnegative, deterministic, and independent of traversal order beyond
/// floating-point rounding.
pub fn scaled_squared_norm(m: &Matrix) -> f64 {
    if m.is_empty() {
        return 0.0;
    }
    sum_of_squares(m) / (m.rows() * m.cols()) as f64
}

/// Sum of squared entries divided by a caller-chosen scale.
///
/// The right divisor depends on the solver's stopping rule (element count,
/// problem dimension, a dual-residual scale), so it is a parameter here
/// rather than a baked-in constant. `scale` must be positive and finite.
pub fn scaled_squared_norm_with(m: &Matrix, scale: f64) -> Result<f64> {
    if !(scale > 0.0) || !scale.is_finite() {
        return Err(Error::InvalidParameter {
            name: "scale",
            message: "norm scale must be positive and finite",
        });
    }
    Ok(sum_of_squares(m) / scale)
}

#[inline]
fn sum_of_squares(m: &Matrix) -> f64 {
    m.as_slice().iter().map(|x| x * x).sum()
}
