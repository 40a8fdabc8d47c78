//! Tuning constants for the kernel and its (external) driving loop.
//!
//! The original solver kept these as process-wide globals; here they are
//! explicit values so a caller (or a test) can run different tolerances side
//! by side without mutating shared state.

/// Default cellwise absolute tolerance for the exact-mode refinement loop.
///
/// Exact mode re-evaluates a shrunk row until successive evaluations differ
/// by at most this much in every cell.
pub const EXACT_TOLERANCE: f64 = 1e-10;

/// Default bound on exact-mode refinement attempts per row.
///
/// Exceeding this bound is reported as
/// [`Error::NumericInstability`](crate::error::Error::NumericInstability)
/// rather than returning an under-converged matrix.
pub const MAX_EXACT_REFINEMENTS: usize = 32;

/// Suggested interval, in seconds, between status updates in the caller's
/// iteration loop.
///
/// Purely advisory: the kernel performs no reporting itself. Consumed by the
/// external solver together with [`STATUS_WIDTH_CHECK`].
pub const STATUS_UPDATE_SECS: f64 = 0.1;

/// Suggested number of status updates between wider progress checks in the
/// caller's iteration loop (with [`STATUS_UPDATE_SECS`] = 0.1s this is one
/// wide check every 2s).
pub const STATUS_WIDTH_CHECK: usize = 20;

/// Options for the exact (high-precision) evaluation path.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ExactOpts {
    /// Cellwise absolute tolerance between successive evaluations.
    pub tolerance: f64,
    /// Maximum refinement attempts per row before giving up.
    pub max_refinements: usize,
}

impl Default for ExactOpts {
    fn default() -> Self {
        Self {
            tolerance: EXACT_TOLERANCE,
            max_refinements: MAX_EXACT_REFINEMENTS,
        }
    }
}
