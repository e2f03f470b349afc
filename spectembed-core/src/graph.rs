//! Similarity graph construction.
//!
//! Points are wired into a fully-connected weighted graph with a Gaussian
//! kernel on Euclidean distance, `w_ij = exp(-‖x_i − x_j‖ / 2)`, no self
//! loops. Degrees are plain row sums of the adjacency; the inverse-sqrt
//! degree matrix is the `D^{-1/2}` scaling the normalized Laplacian needs.
//!
//! Degenerate input policy: a point with zero total similarity (possible
//! only when every kernel value underflows to zero) makes `1/√d` non-finite.
//! That value is left to propagate: downstream output turns NaN/inf and the
//! caller detects it there. Nothing here masks it.

use crate::matrix::DenseMatrix;
use log::debug;

/// Standard L2 norm of the difference of two equal-length vectors.
pub fn euclidean_distance(a: &[f64], b: &[f64]) -> f64 {
    debug_assert_eq!(a.len(), b.len());
    a.iter()
        .zip(b)
        .map(|(&x, &y)| (x - y) * (x - y))
        .sum::<f64>()
        .sqrt()
}

/// Gaussian edge weight. Note the exponent uses the distance itself, not the
/// squared distance; coinciding distinct points therefore get weight 1.
pub fn gaussian_weight(a: &[f64], b: &[f64]) -> f64 {
    (-0.5 * euclidean_distance(a, b)).exp()
}

/// Weighted adjacency matrix of a point set (n x d rows of coordinates).
///
/// Symmetric, non-negative, zero diagonal. Each unordered pair is evaluated
/// once and written to both triangles. The point set is not touched.
pub fn build_adjacency(points: &DenseMatrix) -> DenseMatrix {
    let n = points.rows();
    let mut adjacency = DenseMatrix::zeros(n, n);
    for i in 0..n {
        for j in (i + 1)..n {
            let w = gaussian_weight(points.row(i), points.row(j));
            adjacency.set(i, j, w);
            adjacency.set(j, i, w);
        }
    }
    debug!(
        "adjacency built: {n}x{n} from {} points of dim {}",
        n,
        points.cols()
    );
    adjacency
}

/// Diagonal degree matrix: entry (i, i) is the sum of adjacency row i.
///
/// Stored densely; every off-diagonal entry is an explicit zero.
pub fn build_degree(adjacency: &DenseMatrix) -> DenseMatrix {
    let n = adjacency.rows();
    let mut degree = DenseMatrix::zeros(n, n);
    for i in 0..n {
        degree.set(i, i, adjacency.row(i).iter().sum());
    }
    degree
}

/// `D^{-1/2}`: entry (i, i) is `1/√degree_i`.
///
/// A zero degree (isolated point) yields a non-finite entry that callers
/// must detect in the final output.
pub fn inverse_sqrt_degree(degree: &DenseMatrix) -> DenseMatrix {
    let n = degree.rows();
    let mut out = DenseMatrix::zeros(n, n);
    for i in 0..n {
        out.set(i, i, 1.0 / degree.get(i, i).sqrt());
    }
    out
}
