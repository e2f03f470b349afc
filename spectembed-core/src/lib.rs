//! Numerical core for normalized spectral embeddings.
//!
//! The pipeline this crate serves: points → weighted adjacency → degrees →
//! inverse-sqrt degrees → normalized Laplacian → Jacobi eigendecomposition →
//! sorted eigenpairs → cluster-count selection → row-normalized embedding.
//! Every stage is independently invokable and takes only the inputs it
//! needs; orchestration over the stages lives in `spectembed-pipeline`.
//!
//! All matrices are dense, row-major `f64` buffers with explicit dimensions
//! (`matrix::DenseMatrix`). The core is single-threaded and synchronous;
//! each request owns its buffers outright.

pub mod embedding;
pub mod error;
pub mod graph;
pub mod jacobi;
pub mod laplacian;
pub mod matrix;

#[cfg(test)]
mod tests;

pub use embedding::{ClusterSelection, Embedding, SortedEigenpairs};
pub use error::{Result, SpectralError};
pub use jacobi::{JacobiConfig, JacobiOutput, JacobiSolver};
pub use matrix::DenseMatrix;
