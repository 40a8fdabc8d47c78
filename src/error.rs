use thiserror::Error;

/// Errors returned by the proximal-operator kernel.
#[derive(Debug, Error)]
pub enum Error {
    /// A vector length does not match the matrix axis it applies to.
    #[error("{axis} length mismatch: expected {expected}, found {found}")]
    ShapeMismatch {
        /// Which axis or input the length was checked against.
        axis: &'static str,
        /// Expected length.
        expected: usize,
        /// Found length.
        found: usize,
    },

    /// Invalid parameter value.
    #[error("invalid parameter {name}: {message}")]
    InvalidParameter {
        /// Parameter name.
        name: &'static str,
        /// Human-readable explanation.
        message: &'static str,
    },

    /// The exact-mode refinement loop did not reach the cellwise tolerance.
    ///
    /// The caller gets no partial result; it may relax the tolerance or fall
    /// back to the fast path and re-invoke.
    #[error("exact mode failed to reach cellwise tolerance {tolerance:e} within {attempts} refinement attempts")]
    NumericInstability {
        /// The tolerance that was requested.
        tolerance: f64,
        /// How many refinement attempts were made.
        attempts: usize,
    },
}

/// Result type used by this crate.
pub type Result<T> = std::result::Result<T, Error>;
