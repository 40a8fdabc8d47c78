//! Numerical kernel for convex-clustering fusion paths.
//!
//! `fuseprox` is a small library of the per-iteration primitives an
//! ADMM-style convex-clustering solver needs: group-wise (block)
//! soft-thresholding along rows or columns, a scaled squared-norm
//! convergence statistic, and bookkeeping for which row/column groups are
//! still active (not yet fused).
//!
//! The solver loop itself — regularization-path stepping, stopping rules,
//! plotting — is a caller concern; this crate only supplies the stateless
//! numerical pieces it invokes once per iteration.
//!
//! ## Usage
//!
//! ```rust
//! use fuseprox::{row_group_prox, scaled_squared_norm, ActiveGroups, Matrix};
//!
//! // Per-observation difference vectors, one row per pair.
//! let diffs = Matrix::from_rows(&[
//!     vec![3.0, 4.0],
//!     vec![0.3, 0.4],
//! ]).unwrap();
//!
//! let shrunk = row_group_prox(&diffs, 1.0, &[1.0, 1.0], false).unwrap();
//! // Row 0 (norm 5) is shrunk toward zero, not eliminated: (3,4)·(1 − 1/5).
//! assert!((shrunk.get(0, 0) - 2.4).abs() < 1e-12);
//! assert!((shrunk.get(0, 1) - 3.2).abs() < 1e-12);
//! // Row 1 (norm 0.5 <= 1) fuses exactly.
//! assert_eq!(shrunk.row(1), &[0.0, 0.0]);
//!
//! // Track which difference groups are still active.
//! let mut active: ActiveGroups = (0..diffs.rows()).collect();
//! for i in 0..shrunk.rows() {
//!     if shrunk.row(i).iter().all(|x| *x == 0.0) {
//!         active.remove(i);
//!     }
//! }
//! assert!(active.contains(0));
//! assert!(!active.contains(1));
//!
//! // Convergence statistic for the caller's stopping rule.
//! assert!(scaled_squared_norm(&shrunk) >= 0.0);
//! ```

#![forbid(unsafe_code)]

pub mod config;
pub mod error;
pub mod matrix;
pub mod membership;
pub mod prox;

pub use config::ExactOpts;
pub use error::{Error, Result};
pub use matrix::Matrix;
pub use membership::{ActiveGroups, GroupId};
pub use prox::{
    col_group_prox, col_group_prox_with, row_group_prox, row_group_prox_with,
    scaled_squared_norm, scaled_squared_norm_with,
};
