//! Symmetric normalized graph Laplacian.
//!
//! `L = I − D^{-1/2} W D^{-1/2}`, which has eigenvalues in [0, 2] regardless
//! of degree and avoids the degree bias of the unnormalized `L = D − W`.
//! With a zero-diagonal W the diagonal of L is exactly 1; off-diagonals are
//! `-w_ij / √(d_i d_j)`.

use crate::matrix::DenseMatrix;
use log::debug;

/// Build the normalized Laplacian from a weighted adjacency matrix and the
/// matching `D^{-1/2}`.
///
/// Both inputs are taken precomputed so a caller that already ran the graph
/// stages never pays for them twice; computing them on demand is the
/// orchestration layer's job.
pub fn build_normalized_laplacian(
    adjacency: &DenseMatrix,
    inv_sqrt_degree: &DenseMatrix,
) -> DenseMatrix {
    let n = adjacency.rows();
    let scaled = inv_sqrt_degree.matmul(adjacency).matmul(inv_sqrt_degree);
    let laplacian = DenseMatrix::identity(n).sub(&scaled);
    debug!("normalized laplacian built: {n}x{n}");
    laplacian
}
