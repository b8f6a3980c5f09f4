//! Error types for the checked API boundary.
//!
//! The kernels themselves never validate and never fail; length checking
//! happens once at the boundary, outside the hot path. The checked entry
//! points (`try_dot_product`, `try_squared_l2`) surface violations as
//! [`DistanceError`] instead of panicking.

use thiserror::Error;

/// Errors reported by the checked distance API.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DistanceError {
    /// The two input slices have different lengths.
    #[error("vector dimension mismatch: {left} vs {right}")]
    DimensionMismatch {
        /// Length of the first operand.
        left: usize,
        /// Length of the second operand.
        right: usize,
    },
}
