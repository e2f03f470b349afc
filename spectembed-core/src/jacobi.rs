//! Cyclic Jacobi eigensolver for symmetric matrices.
//!
//! Each iteration zeroes the largest off-diagonal element with a plane
//! (Givens) rotation:
//!
//!   A' = Pᵀ A P,   V ← V · P   (V starts as the identity)
//!
//! until the decrease of `off(A)`, the sum of squares of all off-diagonal
//! entries, falls below the tolerance, or the iteration cap is hit. The
//! diagonal of the final A holds the eigenvalues; the columns of V are the
//! index-paired eigenvectors.
//!
//! A' is applied in closed form: only rows/columns p and q change, so the
//! update is O(n) instead of a full triple product. V is accumulated with a
//! dense multiply.
//!
//! Hitting the iteration cap is not an error: the state at the cap is the
//! result, flagged `converged: false`.

use crate::matrix::DenseMatrix;
use log::debug;

/// Convergence knobs for the rotation loop.
#[derive(Debug, Clone)]
pub struct JacobiConfig {
    /// Stop once off(A) decreases by less than this between rotations.
    pub tolerance: f64,

    /// Hard cap on rotations; reaching it yields the best state so far.
    pub max_iterations: usize,
}

impl Default for JacobiConfig {
    fn default() -> Self {
        Self {
            tolerance: 1e-5,
            max_iterations: 100,
        }
    }
}

/// One plane rotation: pivot position plus its cosine/sine.
///
/// Carried as an explicit value between pivot selection, the A' update and
/// the V update, so no stage communicates through shared scratch state.
#[derive(Debug, Clone, Copy)]
pub struct Rotation {
    pub p: usize,
    pub q: usize,
    pub c: f64,
    pub s: f64,
}

impl Rotation {
    /// Rotation parameters for pivot (p, q) of a symmetric matrix.
    ///
    /// θ = (a_qq − a_pp) / (2 a_pq), t = sign(θ) / (|θ| + √(θ² + 1)) with
    /// sign(0) = +1, c = 1/√(t² + 1), s = t·c. Requires a_pq ≠ 0, which the
    /// caller guarantees by only rotating non-diagonal matrices.
    pub fn for_pivot(a: &DenseMatrix, p: usize, q: usize) -> Self {
        let a_pq = a.get(p, q);
        let theta = (a.get(q, q) - a.get(p, p)) / (2.0 * a_pq);
        let t = sign(theta) / (theta.abs() + (theta * theta + 1.0).sqrt());
        let c = 1.0 / (t * t + 1.0).sqrt();
        let s = t * c;
        Self { p, q, c, s }
    }

    /// Full rotation matrix P: identity except P[p,p] = P[q,q] = c,
    /// P[p,q] = s, P[q,p] = −s.
    pub fn to_matrix(&self, n: usize) -> DenseMatrix {
        let mut rotation = DenseMatrix::identity(n);
        rotation.set(self.p, self.p, self.c);
        rotation.set(self.q, self.q, self.c);
        rotation.set(self.p, self.q, self.s);
        rotation.set(self.q, self.p, -self.s);
        rotation
    }
}

fn sign(theta: f64) -> f64 {
    if theta >= 0.0 {
        1.0
    } else {
        -1.0
    }
}

/// Position of the off-diagonal element of largest absolute value, scanning
/// the strict upper triangle. The first maximum wins.
pub fn find_pivot(a: &DenseMatrix) -> (usize, usize) {
    let n = a.rows();
    debug_assert!(n >= 2, "pivot search needs an off-diagonal");
    let (mut p, mut q) = (0, 1);
    let mut best = a.get(0, 1).abs();
    for i in 0..n {
        for j in (i + 1)..n {
            if a.get(i, j).abs() > best {
                best = a.get(i, j).abs();
                p = i;
                q = j;
            }
        }
    }
    (p, q)
}

/// off(A): sum of squares of all off-diagonal entries.
pub fn off_diagonal_norm(a: &DenseMatrix) -> f64 {
    let n = a.rows();
    let mut off = 0.0;
    for i in 0..n {
        for j in 0..n {
            if i != j {
                off += a.get(i, j) * a.get(i, j);
            }
        }
    }
    off
}

/// Exact-zero scan of the off-diagonal.
pub fn is_diagonal(a: &DenseMatrix) -> bool {
    let n = a.rows();
    for i in 0..n {
        for j in 0..n {
            if i != j && a.get(i, j) != 0.0 {
                return false;
            }
        }
    }
    true
}

/// Pᵀ A P in closed form: rows/columns p and q recombine via (c, s), the
/// three pivot-block entries use the standard Jacobi formulas, everything
/// else is copied unchanged.
pub fn apply_rotation(a: &DenseMatrix, rotation: &Rotation) -> DenseMatrix {
    let n = a.rows();
    let Rotation { p, q, c, s } = *rotation;
    let mut next = a.clone();
    for r in 0..n {
        if r == p || r == q {
            continue;
        }
        let a_rp = a.get(r, p);
        let a_rq = a.get(r, q);
        let rp = c * a_rp - s * a_rq;
        let rq = c * a_rq + s * a_rp;
        next.set(r, p, rp);
        next.set(p, r, rp);
        next.set(r, q, rq);
        next.set(q, r, rq);
    }
    let a_pp = a.get(p, p);
    let a_qq = a.get(q, q);
    let a_pq = a.get(p, q);
    next.set(p, p, c * c * a_pp + s * s * a_qq - 2.0 * s * c * a_pq);
    next.set(q, q, s * s * a_pp + c * c * a_qq + 2.0 * s * c * a_pq);
    let pivot = (c * c - s * s) * a_pq + s * c * (a_pp - a_qq);
    next.set(p, q, pivot);
    next.set(q, p, pivot);
    next
}

/// Eigendecomposition of a symmetric matrix.
#[derive(Debug, Clone)]
pub struct JacobiOutput {
    /// Diagonal of the converged working matrix.
    pub eigenvalues: Vec<f64>,

    /// Accumulated rotation product; column i pairs with eigenvalue i.
    pub eigenvectors: DenseMatrix,

    /// Rotations actually performed.
    pub iterations: usize,

    /// False when the iteration cap stopped the loop before the tolerance.
    pub converged: bool,
}

/// Runs the rotation loop to convergence or exhaustion.
pub struct JacobiSolver {
    pub config: JacobiConfig,
}

impl JacobiSolver {
    pub fn new(config: JacobiConfig) -> Self {
        Self { config }
    }

    pub fn with_defaults() -> Self {
        Self::new(JacobiConfig::default())
    }

    /// Diagonalize a symmetric matrix.
    ///
    /// An already-diagonal input short-circuits before the first rotation:
    /// zero rotations, V = I, eigenvalues read straight off the diagonal.
    /// Symmetry of the input is an assumed precondition, not checked.
    pub fn decompose(&self, matrix: &DenseMatrix) -> JacobiOutput {
        assert!(
            matrix.is_square(),
            "eigendecomposition input must be square, got {}x{}",
            matrix.rows(),
            matrix.cols()
        );
        let n = matrix.rows();
        let mut a = matrix.clone();
        let mut eigenvectors = DenseMatrix::identity(n);
        let mut off_prev = off_diagonal_norm(&a);
        let mut iterations = 0;
        let mut converged = false;

        while iterations < self.config.max_iterations {
            if is_diagonal(&a) {
                converged = true;
                break;
            }
            let (p, q) = find_pivot(&a);
            let rotation = Rotation::for_pivot(&a, p, q);
            a = apply_rotation(&a, &rotation);
            eigenvectors = eigenvectors.matmul(&rotation.to_matrix(n));
            iterations += 1;

            let off_next = off_diagonal_norm(&a);
            let decrease = off_prev - off_next;
            off_prev = off_next;
            if decrease <= self.config.tolerance {
                converged = true;
                break;
            }
        }

        debug!(
            "jacobi: {n}x{n}, {iterations} rotations, off(A)={off_prev:.3e}, converged={converged}"
        );

        JacobiOutput {
            eigenvalues: a.diagonal(),
            eigenvectors,
            iterations,
            converged,
        }
    }
}
