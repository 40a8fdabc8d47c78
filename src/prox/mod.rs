//! Proximal operators and the convergence statistic.
//!
//! These are the per-iteration numerical primitives of a convex-clustering
//! solver:
//!
//! - [`row_group_prox`] / [`col_group_prox`] — group-lasso (block
//!   soft-threshold) shrinkage of whole rows / columns;
//! - [`scaled_squared_norm`] — normalized sum of squares, used by the caller
//!   to measure change between iterates.
//!
//! All functions are pure: they take caller-owned inputs, return fresh
//! outputs of identical shape, and keep no state. Concurrent calls on
//! disjoint inputs need no synchronization.
//!
//! ```rust
//! use fuseprox::{row_group_prox, scaled_squared_norm, Matrix};
//!
//! let diffs = Matrix::from_rows(&[
//!     vec![3.0, 4.0],   // norm 5, survives shrinkage
//!     vec![0.3, 0.4],   // norm 0.5, fuses to zero
//! ]).unwrap();
//!
//! let shrunk = row_group_prox(&diffs, 1.0, &[1.0, 1.0], false).unwrap();
//! assert_eq!(shrunk.row(1), &[0.0, 0.0]);
//! assert!(scaled_squared_norm(&shrunk) < scaled_squared_norm(&diffs));
//! ```

mod group;
mod norm;

pub use group::{col_group_prox, col_group_prox_with, row_group_prox, row_group_prox_with};
pub use norm::{scaled_squared_norm, scaled_squared_norm_with};
