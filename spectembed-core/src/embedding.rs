//! Eigenpair ordering, cluster-count selection and the spectral embedding.
//!
//! Eigenpairs are sorted by eigenvalue descending with the value↔vector
//! pairing kept intact, the cluster count comes either from the caller or
//! from the eigengap heuristic, and the embedding is the top-k eigenvector
//! matrix U with rows L2-normalized into T. T is the hand-off artifact for
//! the downstream clustering collaborator.

use crate::error::{Result, SpectralError};
use crate::jacobi::JacobiOutput;
use crate::matrix::{argmax, DenseMatrix};
use log::debug;
use ordered_float::OrderedFloat;
use std::cmp::Reverse;

/// How the cluster count k is chosen.
///
/// An explicit tagged choice: zero is not a meaningful cluster count, so it
/// is not used as an "auto" sentinel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClusterSelection {
    /// Use exactly this k.
    Explicit(usize),
    /// Pick k at the largest gap between consecutive sorted eigenvalues.
    Eigengap,
}

/// Eigenpairs reordered by eigenvalue descending; column i of `vectors`
/// still pairs with `values[i]`.
#[derive(Debug, Clone)]
pub struct SortedEigenpairs {
    pub values: Vec<f64>,
    pub vectors: DenseMatrix,
}

/// Sort eigenpairs by eigenvalue, largest first.
///
/// The sort is stable, so equal eigenvalues keep their original index order
/// and ties resolve to the lowest original index.
pub fn sort_eigenpairs(decomposition: &JacobiOutput) -> SortedEigenpairs {
    let n = decomposition.eigenvalues.len();
    let mut order: Vec<usize> = (0..n).collect();
    order.sort_by_key(|&i| Reverse(OrderedFloat(decomposition.eigenvalues[i])));

    let values: Vec<f64> = order
        .iter()
        .map(|&i| decomposition.eigenvalues[i])
        .collect();
    let mut vectors = DenseMatrix::zeros(n, n);
    for (new_col, &old_col) in order.iter().enumerate() {
        for row in 0..n {
            vectors.set(row, new_col, decomposition.eigenvectors.get(row, old_col));
        }
    }
    SortedEigenpairs { values, vectors }
}

/// Resolve the cluster count from descending-sorted eigenvalues.
///
/// Eigengap mode scans only the first ⌊n/2⌋ gaps `|λ_i − λ_{i+1}|` and
/// returns the index of the largest plus one; on ties the first maximal gap
/// wins. The half-range scan is part of the heuristic's contract and is not
/// widened to all n−1 gaps. An explicit k outside 1..=n is rejected.
pub fn select_cluster_count(
    sorted_values: &[f64],
    selection: ClusterSelection,
) -> Result<usize> {
    let n = sorted_values.len();
    match selection {
        ClusterSelection::Explicit(k) => {
            if k == 0 || k > n {
                return Err(SpectralError::ClusterCountOutOfRange { requested: k, n });
            }
            Ok(k)
        }
        ClusterSelection::Eigengap => {
            let gaps: Vec<f64> = (0..n / 2)
                .map(|i| (sorted_values[i] - sorted_values[i + 1]).abs())
                .collect();
            if gaps.is_empty() {
                return Ok(1);
            }
            let k = argmax(&gaps) + 1;
            debug!("eigengap: {} gaps scanned, k={k}", gaps.len());
            Ok(k)
        }
    }
}

/// The spectral embedding: U (top-k eigenvectors as columns) and its
/// row-normalized form T.
#[derive(Debug, Clone)]
pub struct Embedding {
    pub u: DenseMatrix,
    pub t: DenseMatrix,
    pub k: usize,
}

/// Extract U and build T from sorted eigenpairs.
///
/// Rows of U whose L2 norm is exactly zero are copied into T verbatim
/// rather than divided; a degenerate all-zero row stays all-zero instead of
/// turning into NaN.
pub fn build_embedding(pairs: &SortedEigenpairs, k: usize) -> Embedding {
    let n = pairs.vectors.rows();
    assert!(k >= 1 && k <= n, "embedding width {k} out of range for n={n}");

    let mut u = DenseMatrix::zeros(n, k);
    for i in 0..n {
        for j in 0..k {
            u.set(i, j, pairs.vectors.get(i, j));
        }
    }

    let mut t = DenseMatrix::zeros(n, k);
    for i in 0..n {
        let norm = u.row(i).iter().map(|x| x * x).sum::<f64>().sqrt();
        for j in 0..k {
            if norm != 0.0 {
                t.set(i, j, u.get(i, j) / norm);
            } else {
                t.set(i, j, u.get(i, j));
            }
        }
    }

    debug!("embedding built: U and T are {n}x{k}");
    Embedding { u, t, k }
}
