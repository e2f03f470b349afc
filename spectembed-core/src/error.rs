//! Error types for request validation.
//!
//! Only conditions that must be rejected before any computation begins are
//! errors. Degenerate numerical input (an isolated point with zero total
//! similarity) is not: it flows through as non-finite values for the caller
//! to detect, and Jacobi non-convergence at the iteration cap is reported as
//! a flag on the output, not a failure.

use thiserror::Error;

/// Result type for spectral embedding operations.
pub type Result<T> = std::result::Result<T, SpectralError>;

#[derive(Debug, Error)]
pub enum SpectralError {
    /// Requested computation goal is not one of the supported modes.
    #[error("unknown goal \"{0}\"")]
    UnknownGoal(String),

    /// Explicit cluster count outside 1..=n.
    #[error("cluster count {requested} is out of range for {n} points")]
    ClusterCountOutOfRange { requested: usize, n: usize },

    /// Eigendecomposition requested on a non-square matrix.
    #[error("eigendecomposition input must be square, got {rows}x{cols}")]
    NonSquareInput { rows: usize, cols: usize },
}
