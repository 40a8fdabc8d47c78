//! Group-lasso (block soft-threshold) proximal operators.
//!
//! # The Operator
//!
//! Elementwise soft-thresholding shrinks each scalar toward zero
//! independently. The *group* variant treats a whole row (or column) as one
//! unit: either the entire vector is zeroed, or it is rescaled toward zero
//! along its own direction. For a row `v` and threshold `t`:
//!
//! ```text
//! prox(v, t) = 0                      if ||v||₂ <= t
//!            = v · (1 - t / ||v||₂)   otherwise
//! ```
//!
//! This is the proximal operator of the ℓ2-norm group-lasso penalty. In a
//! convex-clustering solver, `t = λ·wᵢ` with a global regularization
//! strength λ and a per-row (per-column) weight; rows whose difference
//! vector is driven to exactly zero have *fused*, which is what produces the
//! clustering path.
//!
//! ## Row vs column
//!
//! [`col_group_prox`] is the exact mirror of [`row_group_prox`] on column
//! vectors. It is implemented as transpose → row prox → transpose, so the
//! identity `col_group_prox(M, λ, w, e) == row_group_prox(Mᵀ, λ, w, e)ᵀ`
//! holds structurally rather than being maintained by hand in two copies of
//! the shrinkage loop.
//!
//! ## Fast vs exact
//!
//! The fast path (`exact = false`) evaluates the closed form once per row.
//! The exact path (`exact = true`) is used near a stopping boundary: it
//! accumulates the squared norm with compensated summation, Newton-refines
//! the square root, and re-evaluates the row until successive evaluations
//! agree cellwise within [`ExactOpts::tolerance`]. Failure to stabilize
//! within [`ExactOpts::max_refinements`] attempts is reported as
//! [`Error::NumericInstability`]; an under-converged matrix is never
//! returned.

use crate::config::ExactOpts;
use crate::error::{Error, Result};
use crate::matrix::Matrix;

/// Apply the group proximal operator to each row of `m`.
///
/// `weights` must have one nonnegative entry per row; `lambda` must be
/// nonnegative. Returns a new matrix of the same shape.
///
/// Equivalent to [`row_group_prox_with`] with [`ExactOpts::default`].
pub fn row_group_prox(m: &Matrix, lambda: f64, weights: &[f64], exact: bool) -> Result<Matrix> {
    row_group_prox_with(m, lambda, weights, exact, ExactOpts::default())
}

/// [`row_group_prox`] with explicit exact-mode options.
pub fn row_group_prox_with(
    m: &Matrix,
    lambda: f64,
    weights: &[f64],
    exact: bool,
    opts: ExactOpts,
) -> Result<Matrix> {
    validate(lambda, weights, m.rows(), "row weights")?;
    shrink_rows(m, lambda, weights, exact, opts)
}

/// Apply the group proximal operator to each column of `m`.
///
/// `weights` must have one nonnegative entry per column; `lambda` must be
/// nonnegative. Returns a new matrix of the same shape.
///
/// Equivalent to [`col_group_prox_with`] with [`ExactOpts::default`].
pub fn col_group_prox(m: &Matrix, lambda: f64, weights: &[f64], exact: bool) -> Result<Matrix> {
    col_group_prox_with(m, lambda, weights, exact, ExactOpts::default())
}

/// [`col_group_prox`] with explicit exact-mode options.
pub fn col_group_prox_with(
    m: &Matrix,
    lambda: f64,
    weights: &[f64],
    exact: bool,
    opts: ExactOpts,
) -> Result<Matrix> {
    validate(lambda, weights, m.cols(), "column weights")?;
    Ok(shrink_rows(&m.transpose(), lambda, weights, exact, opts)?.transpose())
}

/// Check the shared parameter contract.
///
/// `!(x >= 0.0)` rejects NaN as well as negatives.
fn validate(lambda: f64, weights: &[f64], expected: usize, axis: &'static str) -> Result<()> {
    if !(lambda >= 0.0) {
        return Err(Error::InvalidParameter {
            name: "lambda",
            message: "shrinkage threshold must be nonnegative",
        });
    }

    if weights.len() != expected {
        return Err(Error::ShapeMismatch {
            axis,
            expected,
            found: weights.len(),
        });
    }

    if weights.iter().any(|w| !(*w >= 0.0)) {
        return Err(Error::InvalidParameter {
            name: "weights",
            message: "entries must be nonnegative",
        });
    }

    Ok(())
}

/// Shrinkage core over rows. Inputs are already validated.
fn shrink_rows(
    m: &Matrix,
    lambda: f64,
    weights: &[f64],
    exact: bool,
    opts: ExactOpts,
) -> Result<Matrix> {
    let mut out = Matrix::zeros(m.rows(), m.cols());
    for i in 0..m.rows() {
        let threshold = lambda * weights[i];
        if exact {
            shrink_row_exact(m.row(i), threshold, opts, out.row_mut(i))?;
        } else {
            shrink_row_fast(m.row(i), threshold, out.row_mut(i));
        }
    }
    Ok(out)
}

/// Single-pass closed-form evaluation. `out` starts zeroed.
fn shrink_row_fast(row: &[f64], threshold: f64, out: &mut [f64]) {
    let norm = row.iter().map(|x| x * x).sum::<f64>().sqrt();
    // The norm comparison short-circuits before any division, so a zero-norm
    // row with a zero threshold stays zero without faulting.
    if norm <= threshold {
        return;
    }

    let scale = 1.0 - threshold / norm;
    for (o, &x) in out.iter_mut().zip(row) {
        *o = x * scale;
    }
}

/// High-precision evaluation: compensated norm, Newton-refined square root,
/// re-evaluated until cellwise stable. `out` starts zeroed.
fn shrink_row_exact(row: &[f64], threshold: f64, opts: ExactOpts, out: &mut [f64]) -> Result<()> {
    let sum_sq = sum_sq_compensated(row);
    let mut norm = sum_sq.sqrt();
    if norm <= threshold {
        return Ok(());
    }

    let mut prev = scaled(row, 1.0 - threshold / norm);
    for _ in 0..opts.max_refinements {
        // One Newton step on s² = sum_sq pulls the norm to the nearest
        // representable root of the compensated sum.
        norm = 0.5 * (norm + sum_sq / norm);
        if norm <= threshold {
            // Refinement landed on the boundary; out is still zeroed.
            return Ok(());
        }

        let next = scaled(row, 1.0 - threshold / norm);
        if max_abs_diff(&prev, &next) <= opts.tolerance {
            out.copy_from_slice(&next);
            return Ok(());
        }
        prev = next;
    }

    Err(Error::NumericInstability {
        tolerance: opts.tolerance,
        attempts: opts.max_refinements,
    })
}

fn scaled(row: &[f64], scale: f64) -> Vec<f64> {
    row.iter().map(|x| x * scale).collect()
}

/// Largest cellwise difference. NaN is sticky so a non-finite evaluation can
/// never pass the convergence check.
fn max_abs_diff(a: &[f64], b: &[f64]) -> f64 {
    debug_assert_eq!(a.len(), b.len());
    let mut max = 0.0f64;
    for (x, y) in a.iter().zip(b.iter()) {
        let d = (x - y).abs();
        if d.is_nan() {
            return f64::NAN;
        }
        if d > max {
            max = d;
        }
    }
    max
}

/// Kahan-compensated sum of squares.
fn sum_sq_compensated(row: &[f64]) -> f64 {
    let mut sum = 0.0;
    let mut comp = 0.0;
    for &x in row {
        let y = x * x - comp;
        let t = sum + y;
        comp = (t - sum) - y;
        sum = t;
    }
    sum
}
